//! Text section: markdown-backed rich text.

use super::props_or_default;
use crate::render::RenderContext;
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TextProps {
    pub heading: String,
    /// Markdown body. The `quote` variant renders it as a pull quote with
    /// the heading as attribution.
    pub body: String,
    pub variant: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variant {
    Prose,
    Quote,
}

impl Variant {
    fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("quote") => Variant::Quote,
            _ => Variant::Prose,
        }
    }
}

pub fn render(props: &Value, _ctx: &RenderContext) -> Markup {
    let props: TextProps = props_or_default(props);
    match Variant::from_name(props.variant.as_deref()) {
        Variant::Prose => prose(&props),
        Variant::Quote => quote(&props),
    }
}

/// Convert markdown to HTML. Output is pre-escaped by the markdown renderer.
fn markdown(body: &str) -> Markup {
    let parser = Parser::new(body);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    PreEscaped(out)
}

fn prose(props: &TextProps) -> Markup {
    html! {
        @if !props.heading.is_empty() {
            h2 { (props.heading) }
        }
        div class="prose" {
            (markdown(&props.body))
        }
    }
}

fn quote(props: &TextProps) -> Markup {
    html! {
        div class="text-quote" {
            blockquote {
                (markdown(&props.body))
                @if !props.heading.is_empty() {
                    cite { (props.heading) }
                }
            }
        }
    }
}
