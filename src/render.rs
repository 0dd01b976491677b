//! The composition engine.
//!
//! Walks the ordered section list, running each node through the same
//! pipeline — render key → field normalization → style resolution → registry
//! dispatch → variant-specific renderer — and stitches the results together
//! in declaration order. Container sections recurse through the bound
//! [`RenderContext::render_child`] capability, so the walk terminates at
//! leaf kinds without any other special case.
//!
//! The engine is a pure, synchronous, single-pass tree transformation. It
//! holds no state across invocations; re-rendering an unchanged document
//! yields byte-identical markup with the same render keys, which is what
//! lets a retained UI layer treat a no-op update as a no-op.
//!
//! Failure containment: a registry miss renders the fault placeholder at the
//! section's position; a malformed child entry inside a container is
//! skipped while its valid siblings render. Nothing here is fatal to the
//! page.

use crate::config::Theme;
use crate::document::SectionNode;
use crate::normalize;
use crate::registry::{self, SectionKind};
use crate::sections;
use crate::style;
use maud::{Markup, html};
use serde_json::Value;

/// Rendering switches threaded through every renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Preview mode: suppress interactive and mutating behavior (form
    /// submission, live links) while keeping the output visually faithful.
    /// Used for scaled-down gallery and template thumbnails.
    pub preview: bool,
}

/// Per-render context: theme token tables plus options.
///
/// Also carries the "render child" capability container sections use to
/// recurse — children go through the exact same pipeline, with the same
/// key-stability rule applied one level down.
pub struct RenderContext<'a> {
    pub theme: &'a Theme,
    pub options: RenderOptions,
}

impl RenderContext<'_> {
    /// Render one nested child node.
    pub fn render_child(&self, node: &SectionNode, index: usize) -> RenderedSection {
        render_node(node, index, self)
    }
}

/// One rendered section: stable key, resolved kind, markup.
#[derive(Debug)]
pub struct RenderedSection {
    /// `id` when declared, else the sequence index. Stable across re-renders
    /// of the same logical list.
    pub key: String,
    pub kind: SectionKind,
    pub markup: Markup,
}

/// Render an ordered section list.
///
/// Every node produces exactly one output at its position — a registry miss
/// yields the fault placeholder, never a gap — so page layout position is
/// preserved whatever the document contains.
pub fn render_sections(nodes: &[SectionNode], ctx: &RenderContext) -> Vec<RenderedSection> {
    nodes
        .iter()
        .enumerate()
        .map(|(index, node)| render_node(node, index, ctx))
        .collect()
}

/// Render a single node through the full pipeline.
pub fn render_node(node: &SectionNode, index: usize, ctx: &RenderContext) -> RenderedSection {
    let key = render_key(node, index);
    let kind = registry::resolve(&node.kind);
    let props = normalize::normalize(kind, &node.props);
    let resolved = style::resolve(&node.styles, ctx.theme);

    let body = match kind {
        SectionKind::Navigation => sections::navigation::render(&props, ctx),
        SectionKind::Hero => sections::hero::render(&props, ctx),
        SectionKind::Text => sections::text::render(&props, ctx),
        SectionKind::Card => sections::card::render(&props, ctx),
        SectionKind::Features => sections::features::render(&props, ctx),
        SectionKind::Layout => sections::layout::render(&props, ctx),
        SectionKind::Pricing => sections::pricing::render(&props, ctx),
        SectionKind::Gallery => sections::gallery::render(&props, ctx),
        SectionKind::Cta => sections::cta::render(&props, ctx),
        SectionKind::Contact => sections::contact::render(&props, ctx),
        SectionKind::Footer => sections::footer::render(&props, ctx),
        SectionKind::Unknown => fault_placeholder(&node.kind),
    };

    // Container shape wraps content shape wraps the body — identical nesting
    // for every kind, so spacing and width rules stay type-agnostic. The
    // declared id doubles as the in-page anchor target.
    let markup = html! {
        section id=[node.id.as_deref()]
            class="site-section"
            data-key=(key)
            data-kind=(kind.name())
            style=(resolved.container.css())
        {
            div class="section-content" style=(resolved.content.css()) {
                (body)
            }
        }
    };

    RenderedSection { key, kind, markup }
}

/// Stable render key: declared id wins, sequence index is the fallback.
///
/// The CLI inventory display keys sections by the same rule, so the key a
/// user sees in `check` output matches the `data-key` in the rendered page.
pub fn render_key(node: &SectionNode, index: usize) -> String {
    node.id.clone().unwrap_or_else(|| index.to_string())
}

/// Parse a canonical `items` value into child nodes, one entry at a time.
///
/// A malformed entry is dropped; its valid siblings still render. Anything
/// that isn't an array yields no children.
pub fn parse_children(items: Option<&Value>) -> Vec<SectionNode> {
    match items {
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
            .collect(),
        _ => Vec::new(),
    }
}

/// Placeholder for a type the registry cannot resolve.
///
/// Occupies the section's position in the sequence, names the offending
/// type for diagnosability, and triggers no side effects.
fn fault_placeholder(type_name: &str) -> Markup {
    html! {
        div class="section-fault" {
            p class="section-fault-label" { "Unknown section type" }
            code { (type_name) }
        }
    }
}
