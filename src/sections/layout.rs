//! Layout section: a generic grouping container. Stacks its children
//! vertically or side by side; the children are arbitrary sections,
//! containers included.

use super::props_or_default;
use crate::render::{RenderContext, parse_children};
use maud::{Markup, html};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LayoutProps {
    pub variant: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variant {
    Stack,
    Columns,
}

impl Variant {
    fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("columns") => Variant::Columns,
            _ => Variant::Stack,
        }
    }
}

pub fn render(props: &Value, ctx: &RenderContext) -> Markup {
    let meta: LayoutProps = props_or_default(props);
    let children = parse_children(props.get("items"));
    let class = match Variant::from_name(meta.variant.as_deref()) {
        Variant::Stack => "layout-stack",
        Variant::Columns => "layout-columns",
    };
    html! {
        div class=(class) {
            @for (index, child) in children.iter().enumerate() {
                (ctx.render_child(child, index).markup)
            }
        }
    }
}
