//! Gallery section: a set of captioned images.

use super::props_or_default;
use crate::render::RenderContext;
use maud::{Markup, html};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    pub caption: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GalleryProps {
    pub heading: String,
    pub images: Vec<GalleryImage>,
    pub variant: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variant {
    Grid,
    Strip,
}

impl Variant {
    fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("strip") => Variant::Strip,
            _ => Variant::Grid,
        }
    }
}

pub fn render(props: &Value, _ctx: &RenderContext) -> Markup {
    let props: GalleryProps = props_or_default(props);
    let class = match Variant::from_name(props.variant.as_deref()) {
        Variant::Grid => "gallery-grid",
        Variant::Strip => "gallery-strip",
    };
    html! {
        @if !props.heading.is_empty() {
            h2 class="container-heading" { (props.heading) }
        }
        div class=(class) {
            @for image in &props.images {
                figure {
                    img src=(image.src) alt=(image.alt) loading="lazy";
                    @if !image.caption.is_empty() {
                        figcaption { (image.caption) }
                    }
                }
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
        let html = render_with(false, |ctx| {
            render(&json!({"images": [{"src": "a.jpg"}]}), ctx)
        });
        assert!(html.contains("gallery-grid"));
        assert!(html.contains(r#"src="a.jpg""#));
    }

    #[test]
    fn strip_variant_selected_by_name() {
        let html = render_with(false, |ctx| {
            render(&json!({"variant": "strip"}), ctx)
        });
        assert!(html.contains("gallery-strip"));
    }

    #[test]
    fn captions_render_when_present() {
        let html = render_with(false, |ctx| {
            render(
                &json!({"images": [{"src": "a.jpg", "caption": "Dawn"}]}),
                ctx,
            )
        });
        assert!(html.contains("<figcaption>Dawn</figcaption>"));
    }

    #[test]
    fn images_lazy_load() {
        let html = render_with(false, |ctx| {
            render(&json!({"images": [{"src": "a.jpg"}]}), ctx)
        });
        assert!(html.contains(r#"loading="lazy""#));
    }
}
