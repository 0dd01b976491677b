//! Navigation section: the site's top link bar.
//!
//! Link targets arrive already normalized (`home` → `#home`), so a bare
//! label scrolls to the section whose `id` matches.

use super::{Link, props_or_default};
use crate::render::RenderContext;
use maud::{Markup, html};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NavigationProps {
    /// Site name shown at the start of the bar.
    pub brand: String,
    pub links: Vec<Link>,
    pub variant: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variant {
    Bar,
    Centered,
    Minimal,
}

impl Variant {
    fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("centered") => Variant::Centered,
            Some("minimal") => Variant::Minimal,
            _ => Variant::Bar,
        }
    }
}

pub fn render(props: &Value, ctx: &RenderContext) -> Markup {
    let props: NavigationProps = props_or_default(props);
    match Variant::from_name(props.variant.as_deref()) {
        Variant::Bar => bar(&props, ctx),
        Variant::Centered => centered(&props, ctx),
        Variant::Minimal => minimal(&props, ctx),
    }
}

/// One nav link. Preview surfaces are non-interactive, so links render as
/// inert text there.
fn nav_link(link: &Link, ctx: &RenderContext) -> Markup {
    html! {
        @if ctx.options.preview {
            span class="nav-link" { (link.label) }
        } @else {
            a class="nav-link" href=(link.href) { (link.label) }
        }
    }
}

fn link_row(props: &NavigationProps, ctx: &RenderContext) -> Markup {
    html! {
        div class="nav-links" {
            @for link in &props.links {
                (nav_link(link, ctx))
            }
        }
    }
}

fn bar(props: &NavigationProps, ctx: &RenderContext) -> Markup {
    html! {
        nav class="nav nav-bar" {
            span class="nav-brand" { (props.brand) }
            (link_row(props, ctx))
        }
    }
}

fn centered(props: &NavigationProps, ctx: &RenderContext) -> Markup {
    html! {
        nav class="nav nav-centered" {
            span class="nav-brand" { (props.brand) }
            (link_row(props, ctx))
        }
    }
}

fn minimal(props: &NavigationProps, ctx: &RenderContext) -> Markup {
    html! {
        nav class="nav nav-minimal" {
            (link_row(props, ctx))
        }
    }
}
