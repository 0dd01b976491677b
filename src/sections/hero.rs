//! Hero section: the big opening banner.

use super::{Link, button, props_or_default};
use crate::render::RenderContext;
use maud::{Markup, html};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HeroProps {
    pub heading: String,
    pub subheading: String,
    /// Illustration shown by the `banner` and `split` variants.
    pub image: String,
    pub cta: Option<Link>,
    pub variant: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variant {
    Banner,
    Split,
    Minimal,
}

impl Variant {
    fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("split") => Variant::Split,
            Some("minimal") => Variant::Minimal,
            _ => Variant::Banner,
        }
    }
}

pub fn render(props: &Value, ctx: &RenderContext) -> Markup {
    let props: HeroProps = props_or_default(props);
    match Variant::from_name(props.variant.as_deref()) {
        Variant::Banner => banner(&props, ctx),
        Variant::Split => split(&props, ctx),
        Variant::Minimal => minimal(&props),
    }
}

fn heading_block(props: &HeroProps, ctx: &RenderContext) -> Markup {
    html! {
        h1 { (props.heading) }
        @if !props.subheading.is_empty() {
            p class="hero-subheading" { (props.subheading) }
        }
        @if let Some(cta) = &props.cta {
            (button(cta, ctx))
        }
    }
}

fn banner(props: &HeroProps, ctx: &RenderContext) -> Markup {
    html! {
        div class="hero hero-banner" {
            (heading_block(props, ctx))
            @if !props.image.is_empty() {
                img class="hero-image" src=(props.image) alt=(props.heading);
            }
        }
    }
}

fn split(props: &HeroProps, ctx: &RenderContext) -> Markup {
    html! {
        div class="hero hero-split" {
            div {
                (heading_block(props, ctx))
            }
            @if !props.image.is_empty() {
                img class="hero-image" src=(props.image) alt=(props.heading);
            }
        }
    }
}

fn minimal(props: &HeroProps) -> Markup {
    html! {
        div class="hero hero-minimal" {
            h1 { (props.heading) }
            @if !props.subheading.is_empty() {
                p class="hero-subheading" { (props.subheading) }
            }
        }
    }
}
