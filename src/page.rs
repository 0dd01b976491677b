//! Full-page assembly.
//!
//! Stitches the composition engine's output into a complete HTML document:
//! head with SEO tags from `site_settings`, theme CSS custom properties plus
//! the embedded base stylesheet, the ordered section sequence inside
//! `<main>`, and the smooth-scroll script on live (non-preview) pages.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating:
//! malformed markup is a build error and all interpolation is auto-escaped.

use crate::config::{self, Theme};
use crate::document::SiteConfig;
use crate::preview::NOMINAL_WIDTH;
use crate::render::{self, RenderContext, RenderOptions};
use maud::{DOCTYPE, Markup, PreEscaped, html};

const CSS_STATIC: &str = include_str!("../static/base.css");
const SCROLL_JS: &str = include_str!("../static/scroll.js");

/// Render the complete HTML document for a site.
pub fn render_page(site: &SiteConfig, options: RenderOptions) -> Markup {
    let theme = Theme::from_settings(&site.site_settings);
    let ctx = RenderContext { theme: &theme, options };
    let rendered = render::render_sections(&site.sections, &ctx);
    let css = format!("{}\n\n{}", config::generate_theme_css(&theme), CSS_STATIC);

    let content = html! {
        @for section in &rendered {
            (section.markup)
        }
    };
    base_document(site, &css, options, content)
}

/// The base HTML document structure shared by live and preview output.
fn base_document(
    site: &SiteConfig,
    css: &str,
    options: RenderOptions,
    content: Markup,
) -> Markup {
    let settings = &site.site_settings;
    // Preview documents are laid out at the nominal width so the embedder's
    // scale factor stays meaningful.
    let body_style = options
        .preview
        .then(|| format!("width:{NOMINAL_WIDTH}px"));
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (settings.title) }
                @if !settings.description.is_empty() {
                    meta name="description" content=(settings.description);
                }
                style { (PreEscaped(css)) }
            }
            body class=[options.preview.then_some("preview")] style=[body_style] {
                main { (content) }
                @if !options.preview {
                    script { (PreEscaped(SCROLL_JS)) }
                }
            }
        }
    }
}
