//! Footer section: closing text and secondary links.

use super::{Link, props_or_default};
use crate::render::RenderContext;
use maud::{Markup, html};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FooterProps {
    pub text: String,
    pub links: Vec<Link>,
    pub variant: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variant {
    Simple,
    Columns,
}

impl Variant {
    fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("columns") => Variant::Columns,
            _ => Variant::Simple,
        }
    }
}

pub fn render(props: &Value, ctx: &RenderContext) -> Markup {
    let props: FooterProps = props_or_default(props);
    let class = match Variant::from_name(props.variant.as_deref()) {
        Variant::Simple => "footer footer-simple",
        Variant::Columns => "footer footer-columns",
    };
    html! {
        footer class=(class) {
            @if !props.links.is_empty() {
                div class="footer-links" {
                    @for link in &props.links {
                        @if ctx.options.preview {
                            span { (link.label) }
                        } @else {
                            a href=(link.href) { (link.label) }
                        }
                    }
                }
            }
            @if !props.text.is_empty() {
                p { (props.text) }
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
    fn simple_is_the_default_variant() {
        let html = render_with(false, |ctx| render(&json!({"text": "© 2026"}), ctx));
        assert!(html.contains("footer-simple"));
        assert!(html.contains("© 2026"));
    }

    #[test]
    fn columns_variant_selected_by_name() {
        let html = render_with(false, |ctx| {
            render(&json!({"text": "x", "variant": "columns"}), ctx)
        });
        assert!(html.contains("footer-columns"));
    }

    #[test]
    fn links_render_before_text() {
        let html = render_with(false, |ctx| {
            render(
                &json!({"text": "fine print", "links": [{"label": "Terms", "href": "/terms"}]}),
                ctx,
            )
        });
        let links = html.find("Terms").unwrap();
        let text = html.find("fine print").unwrap();
        assert!(links < text);
        assert!(html.contains(r#"href="/terms""#));
    }

    #[test]
    fn preview_links_are_inert() {
        let html = render_with(true, |ctx| {
            render(&json!({"links": [{"label": "Terms", "href": "/terms"}]}), ctx)
        });
        assert!(!html.contains("href="));
    }
}
