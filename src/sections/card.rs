//! Card section: a small titled block, typically a child of a features
//! grid but renderable standalone.

use super::props_or_default;
use crate::render::RenderContext;
use maud::{Markup, html};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CardProps {
    /// Short decorative glyph (emoji or symbol) above the title.
    pub icon: String,
    pub title: String,
    pub body: String,
    pub variant: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variant {
    Plain,
    Outlined,
}

impl Variant {
    fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("outlined") => Variant::Outlined,
            _ => Variant::Plain,
        }
    }
}

pub fn render(props: &Value, _ctx: &RenderContext) -> Markup {
    let props: CardProps = props_or_default(props);
    let class = match Variant::from_name(props.variant.as_deref()) {
        Variant::Plain => "card",
        Variant::Outlined => "card card-outlined",
    };
    html! {
        div class=(class) {
            @if !props.icon.is_empty() {
                div class="card-icon" { (props.icon) }
            }
            h3 { (props.title) }
            @if !props.body.is_empty() {
                p { (props.body) }
            }
        }
    }
}
