//! Preview adapter.
//!
//! Wraps the composition engine for non-interactive, scaled-down rendering
//! contexts: the community gallery and the template library embed site
//! thumbnails inside a read-only viewport. The adapter renders the full
//! page with every interactive or mutating behavior suppressed — forms lose
//! their action and controls, links render inert, the scroll script is
//! omitted — while keeping the output visually faithful.
//!
//! Scaling itself (a proportional transform keyed to the embedder's
//! observed container width) is the embedder's concern. This layer only
//! guarantees the document is laid out at [`NOMINAL_WIDTH`], so the
//! caller's scale factor is meaningful and stable.

use crate::document::SiteConfig;
use crate::page;
use crate::render::RenderOptions;
use maud::Markup;

/// Nominal width, in CSS pixels, preview documents are laid out at.
pub const NOMINAL_WIDTH: u32 = 1280;

/// Render the full page with interactive behavior suppressed.
pub fn render_preview(site: &SiteConfig) -> Markup {
    page::render_page(site, RenderOptions { preview: true })
}
