//! Contact section: the one section with a mutating action (form
//! submission). The action belongs entirely to this section — the
//! composition engine neither awaits nor sequences it — and preview mode
//! disables it outright.

use super::props_or_default;
use crate::render::RenderContext;
use maud::{Markup, html};
use serde::Deserialize;
use serde_json::Value;

fn default_button_label() -> String {
    "Send".to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContactProps {
    pub heading: String,
    /// Destination address the form submits to.
    pub email: String,
    #[serde(default = "default_button_label")]
    pub button_label: String,
    pub variant: Option<String>,
}

impl Default for ContactProps {
    fn default() -> Self {
        Self {
            heading: String::new(),
            email: String::new(),
            button_label: default_button_label(),
            variant: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variant {
    Simple,
    Split,
}

impl Variant {
    fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("split") => Variant::Split,
            _ => Variant::Simple,
        }
    }
}

pub fn render(props: &Value, ctx: &RenderContext) -> Markup {
    let props: ContactProps = props_or_default(props);
    match Variant::from_name(props.variant.as_deref()) {
        Variant::Simple => simple(&props, ctx),
        Variant::Split => split(&props, ctx),
    }
}

/// The form itself. Live pages submit to the configured address; preview
/// pages render the same controls with the action stripped and every
/// control disabled, so simulated interaction is a no-op.
fn contact_form(props: &ContactProps, ctx: &RenderContext) -> Markup {
    let preview = ctx.options.preview;
    html! {
        @if preview {
            form class="contact-form" {
                input type="text" name="name" placeholder="Your name" disabled;
                input type="email" name="email" placeholder="Your email" disabled;
                textarea name="message" rows="5" placeholder="Message" disabled {}
                button class="button" type="button" disabled { (props.button_label) }
            }
        } @else {
            form class="contact-form"
                method="post"
                action={ "mailto:" (props.email) }
                enctype="text/plain"
            {
                input type="text" name="name" placeholder="Your name";
                input type="email" name="email" placeholder="Your email";
                textarea name="message" rows="5" placeholder="Message" {}
                button class="button" type="submit" { (props.button_label) }
            }
        }
    }
}

fn simple(props: &ContactProps, ctx: &RenderContext) -> Markup {
    html! {
        div class="contact contact-simple" {
            @if !props.heading.is_empty() {
                h2 class="container-heading" { (props.heading) }
            }
            (contact_form(props, ctx))
        }
    }
}

fn split(props: &ContactProps, ctx: &RenderContext) -> Markup {
    html! {
        div class="contact contact-split" {
            div {
                h2 { (props.heading) }
                @if !props.email.is_empty() {
                    p { (props.email) }
                }
            }
            (contact_form(props, ctx))
        }
    }
}
