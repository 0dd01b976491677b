//! Concrete section renderers.
//!
//! One module per section kind. Each defines the canonical props struct all
//! of its variants share, a variant enum dispatching to exactly one of a
//! fixed set of layouts, and a `render` entry point consuming canonical
//! props (post field-normalization).
//!
//! Variants are visual alternatives only: a field means the same thing in
//! every variant of a kind, and each kind owns its own closed variant set.
//! An unrecognized variant name falls back to that kind's documented
//! default rather than failing.

pub mod card;
pub mod contact;
pub mod cta;
pub mod features;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod layout;
pub mod navigation;
pub mod pricing;
pub mod text;

use crate::render::RenderContext;
use maud::{Markup, html};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Deserialize canonical props, falling back to documented defaults on any
/// shape mismatch. Missing optional fields never error.
pub(crate) fn props_or_default<T: DeserializeOwned + Default>(value: &Value) -> T {
    serde_json::from_value(value.clone()).unwrap_or_default()
}

/// A link-like record after normalization: `href` is canonical and already
/// anchor-normalized.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Link {
    pub label: String,
    pub href: String,
}

/// A link styled as a button. In preview mode the button is inert: no
/// navigation, no action.
pub(crate) fn button(link: &Link, ctx: &RenderContext) -> Markup {
    html! {
        @if ctx.options.preview {
            span class="button" { (link.label) }
        } @else {
            a class="button" href=(link.href) { (link.label) }
        }
    }
}
