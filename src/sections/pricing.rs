//! Pricing section: a set of priced tiers.
//!
//! `price` means the same thing in every variant — the displayed price
//! string for the tier — as do all other tier fields; variants only change
//! the layout.

use super::{Link, button, props_or_default};
use crate::render::RenderContext;
use maud::{Markup, html};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Tier {
    pub name: String,
    /// Displayed price string (`"$9"`, `"Free"`). Not parsed as a number.
    pub price: String,
    /// Billing period suffix (`"/mo"`). Empty for one-time prices.
    pub period: String,
    pub features: Vec<String>,
    pub cta: Option<Link>,
    /// Visually emphasized tier (the "recommended" column).
    pub highlighted: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PricingProps {
    pub heading: String,
    pub tiers: Vec<Tier>,
    pub variant: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variant {
    Columns,
    Table,
    Compact,
}

impl Variant {
    fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("table") => Variant::Table,
            Some("compact") => Variant::Compact,
            _ => Variant::Columns,
        }
    }
}

pub fn render(props: &Value, ctx: &RenderContext) -> Markup {
    let props: PricingProps = props_or_default(props);
    let body = match Variant::from_name(props.variant.as_deref()) {
        Variant::Columns => columns(&props, ctx),
        Variant::Table => table(&props, ctx),
        Variant::Compact => compact(&props),
    };
    html! {
        @if !props.heading.is_empty() {
            h2 class="container-heading" { (props.heading) }
        }
        (body)
    }
}

fn columns(props: &PricingProps, ctx: &RenderContext) -> Markup {
    html! {
        div class="pricing-columns" {
            @for tier in &props.tiers {
                div class=(if tier.highlighted { "tier tier-highlighted" } else { "tier" }) {
                    h3 { (tier.name) }
                    p class="tier-price" {
                        (tier.price)
                        @if !tier.period.is_empty() {
                            span class="tier-period" { (tier.period) }
                        }
                    }
                    ul class="tier-features" {
                        @for feature in &tier.features {
                            li { (feature) }
                        }
                    }
                    @if let Some(cta) = &tier.cta {
                        (button(cta, ctx))
                    }
                }
            }
        }
    }
}

fn table(props: &PricingProps, ctx: &RenderContext) -> Markup {
    html! {
        table class="pricing-table" {
            tbody {
                @for tier in &props.tiers {
                    tr {
                        th { (tier.name) }
                        td {
                            (tier.price)
                            @if !tier.period.is_empty() { (tier.period) }
                        }
                        td { (tier.features.join(", ")) }
                        td {
                            @if let Some(cta) = &tier.cta {
                                (button(cta, ctx))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn compact(props: &PricingProps) -> Markup {
    html! {
        ul class="pricing-compact" {
            @for tier in &props.tiers {
                li {
                    span { (tier.name) }
                    span {
                        (tier.price)
                        @if !tier.period.is_empty() { (tier.period) }
                    }
                }
            }
        }
    }
}
