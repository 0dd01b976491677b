//! # Sitesmith
//!
//! A declarative section-based website renderer. A site is one document
//! (`site.json`) listing global settings and an ordered sequence of typed
//! sections — hero, navigation, pricing, feature grids — and sitesmith turns
//! that document into a static HTML page. Non-technical users edit the
//! document; they never touch markup.
//!
//! # Architecture: A Pure Rendering Pipeline
//!
//! The core is a pure, synchronous projection from document to HTML. Every
//! section flows through the same pipeline:
//!
//! ```text
//! SectionNode → normalize (field aliases) → style resolve (tokens/defaults)
//!             → registry (type → kind)    → variant renderer → wrapped HTML
//! ```
//!
//! The engine holds no state between renders; re-rendering an unchanged
//! document produces byte-identical output with the same render keys, so an
//! upstream reactive sync layer can re-invoke it freely.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`document`] | The `SiteConfig` document: loading, wire-format types |
//! | [`config`] | `site_settings` block, validation, theme and token tables |
//! | [`registry`] | Static type-string → section-kind mapping, legacy type aliases |
//! | [`normalize`] | Field aliasing (legacy names → canonical) and link normalization |
//! | [`style`] | Style-instruction resolution into container/content shapes |
//! | [`sections`] | Concrete renderers, one module per kind, variants inside |
//! | [`render`] | Composition engine: walks the list, dispatches, wraps, keys |
//! | [`page`] | Full-document assembly: head, SEO tags, embedded CSS/JS |
//! | [`preview`] | Non-interactive rendering at a fixed nominal width |
//! | [`generate`] | Filesystem stage: writes the rendered page to disk |
//! | [`output`] | CLI output formatting — tree display of the section inventory |
//!
//! # Design Decisions
//!
//! ## Tolerate, Never Validate Away
//!
//! The document schema and the section registry evolve independently: a
//! stored document may carry a type string this build doesn't know, legacy
//! field names, or an unrecognized variant. None of these are errors. An
//! unknown type renders as a visible placeholder in position; legacy fields
//! are reconciled by one declarative alias table per kind; an unknown
//! variant falls back to the kind's default layout. The page always
//! renders, and the worst user-visible outcome is one diagnostic
//! placeholder.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed markup is a build error, template variables
//! are Rust expressions, and all interpolation is auto-escaped — user
//! documents can't inject markup.
//!
//! ## One Style Vocabulary, Resolved Once
//!
//! Sections never interpret raw style instructions. The style resolver
//! turns each section's `styles` object into a fixed container/content
//! shape pair, applied identically to every section, so spacing and width
//! rules are type-agnostic. Values are symbolic theme tokens by default;
//! anything outside the token vocabulary passes through as a literal CSS
//! value, a per-attribute escape hatch.

pub mod config;
pub mod document;
pub mod generate;
pub mod normalize;
pub mod output;
pub mod page;
pub mod preview;
pub mod registry;
pub mod render;
pub mod sections;
pub mod style;
