//! Features section: a container laying out child sections as a grid or
//! list. Children are full `SectionNode`s rendered through the composition
//! engine's render-child capability, so a feature grid can hold cards, text
//! blocks, or even nested containers.

use super::props_or_default;
use crate::render::{RenderContext, parse_children};
use maud::{Markup, html};
use serde::Deserialize;
use serde_json::Value;

/// Heading and variant only — `items` is read as raw child nodes so each
/// entry can fail or succeed independently.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FeaturesProps {
    pub heading: String,
    pub variant: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variant {
    Grid,
    List,
}

impl Variant {
    fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("list") => Variant::List,
            _ => Variant::Grid,
        }
    }
}

pub fn render(props: &Value, ctx: &RenderContext) -> Markup {
    let meta: FeaturesProps = props_or_default(props);
    let children = parse_children(props.get("items"));
    let class = match Variant::from_name(meta.variant.as_deref()) {
        Variant::Grid => "features-grid",
        Variant::List => "features-list",
    };
    html! {
        @if !meta.heading.is_empty() {
            h2 class="container-heading" { (meta.heading) }
        }
        div class=(class) {
            @for (index, child) in children.iter().enumerate() {
                (ctx.render_child(child, index).markup)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::render_with;
    use super::*;
    use serde_json::json;

    #[test]
    fn grid_is_the_default_variant() {
        let html = render_with(false, |ctx| render(&json!({}), ctx));
        assert!(html.contains("features-grid"));
    }

    #[test]
    fn children_render_inside_the_grid() {
        let html = render_with(false, |ctx| {
            render(
                &json!({"items": [
                    {"type": "card", "props": {"title": "One"}},
                    {"type": "card", "props": {"title": "Two"}}
                ]}),
                ctx,
            )
        });
        let one = html.find("One").unwrap();
        let two = html.find("Two").unwrap();
        assert!(one < two);
    }

    #[test]
    fn malformed_child_skipped_valid_ones_render() {
        let html = render_with(false, |ctx| {
            render(
                &json!({"items": [
                    "not a node",
                    {"type": "card", "props": {"title": "Kept"}}
                ]}),
                ctx,
            )
        });
        assert!(html.contains("Kept"));
    }

    #[test]
    fn list_variant_selected_by_name() {
        let html = render_with(false, |ctx| {
            render(&json!({"variant": "list"}), ctx)
        });
        assert!(html.contains("features-list"));
    }

    #[test]
    fn heading_rendered_above_children() {
        let html = render_with(false, |ctx| {
            render(&json!({"heading": "What you get"}), ctx)
        });
        assert!(html.contains("What you get"));
    }
}
