//! Call-to-action section: a short pitch with one button.

use super::{Link, button, props_or_default};
use crate::render::RenderContext;
use maud::{Markup, html};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CtaProps {
    pub heading: String,
    pub body: String,
    pub button: Option<Link>,
    pub variant: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variant {
    Banner,
    Boxed,
}

impl Variant {
    fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("boxed") => Variant::Boxed,
            _ => Variant::Banner,
        }
    }
}

pub fn render(props: &Value, ctx: &RenderContext) -> Markup {
    let props: CtaProps = props_or_default(props);
    let class = match Variant::from_name(props.variant.as_deref()) {
        Variant::Banner => "cta-banner",
        Variant::Boxed => "cta-boxed",
    };
    html! {
        div class=(class) {
            h2 { (props.heading) }
            @if !props.body.is_empty() {
                p class="cta-body" { (props.body) }
            }
            @if let Some(link) = &props.button {
                (button(link, ctx))
            }
        }
    }
}
