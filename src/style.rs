//! Style cascade resolution.
//!
//! Every section carries a free-form `styles` object drawn from one shared
//! vocabulary (spacing, background, alignment, width, rounding). The
//! resolver turns it into a fixed pair of shapes — an outer container and an
//! inner content wrapper — that the composition engine applies identically
//! to every section, whatever its type. Individual renderers never
//! re-interpret raw style instructions.
//!
//! Resolution is purely additive: each instruction present replaces its
//! documented default, each absent one falls back. It is a pure function of
//! one section's styles plus the theme, so nothing a section specifies can
//! leak into its siblings.
//!
//! A value may be a symbolic token (resolved through the theme's token
//! tables) or a literal CSS value. Token-table membership decides which:
//! anything outside the vocabulary is an escape hatch that bypasses the
//! theme for that one attribute only.

use crate::config::{self, Theme};
use serde::Deserialize;
use serde_json::Value;

/// The recognized style-instruction keys. Unknown keys are ignored so old
/// and new documents can share the vocabulary.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StyleInstructions {
    /// Background color: token (`primary`, `surface`, ...) or literal.
    pub background: Option<String>,
    /// Vertical padding: token (`none`/`sm`/`md`/`lg`/`xl`) or literal.
    pub padding: Option<String>,
    /// Vertical margin: token or literal.
    pub margin: Option<String>,
    /// Horizontal text alignment (`left`/`center`/`right`).
    pub align: Option<String>,
    /// Content width: token (`narrow`/`normal`/`wide`/`full`) or literal.
    pub max_width: Option<String>,
    /// Corner rounding: token (`none`/`sm`/`md`/`lg`/`full`) or literal.
    pub radius: Option<String>,
}

/// Outer wrapper shape: spacing, background, alignment.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerShape {
    pub background: Option<String>,
    pub padding_y: String,
    pub margin_y: String,
    /// Absent means inherit from the page.
    pub text_align: Option<String>,
}

/// Inner wrapper shape: width and rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentShape {
    pub max_width: String,
    /// Absent means no rounding.
    pub border_radius: Option<String>,
}

/// A section's fully resolved style: container wraps content wraps the
/// renderer's output, in that nesting order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub container: ContainerShape,
    pub content: ContentShape,
}

/// Resolve one section's style instructions against the theme.
pub fn resolve(styles: &Value, theme: &Theme) -> ResolvedStyle {
    let s: StyleInstructions = serde_json::from_value(styles.clone()).unwrap_or_default();

    let container = ContainerShape {
        background: s.background.as_deref().map(|v| resolve_color(v, theme)),
        padding_y: resolve_spacing(s.padding.as_deref().unwrap_or(&theme.default_padding)),
        margin_y: s.margin.as_deref().map(resolve_spacing).unwrap_or_else(|| "0".to_string()),
        text_align: s.align,
    };
    let content = ContentShape {
        max_width: resolve_width(s.max_width.as_deref().unwrap_or(&theme.default_max_width)),
        border_radius: s.radius.as_deref().map(resolve_radius),
    };

    ResolvedStyle { container, content }
}

fn resolve_color(value: &str, theme: &Theme) -> String {
    theme
        .color_token(value)
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string())
}

fn resolve_spacing(value: &str) -> String {
    config::spacing_token(value)
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string())
}

fn resolve_width(value: &str) -> String {
    config::width_token(value)
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string())
}

fn resolve_radius(value: &str) -> String {
    config::radius_token(value)
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string())
}

impl ContainerShape {
    /// Inline style for the outer wrapper. Property order is fixed so
    /// re-rendering the same input is byte-identical.
    pub fn css(&self) -> String {
        let mut out = String::new();
        if let Some(bg) = &self.background {
            out.push_str(&format!("background:{bg};"));
        }
        out.push_str(&format!(
            "padding-top:{p};padding-bottom:{p};",
            p = self.padding_y
        ));
        out.push_str(&format!(
            "margin-top:{m};margin-bottom:{m};",
            m = self.margin_y
        ));
        if let Some(align) = &self.text_align {
            out.push_str(&format!("text-align:{align};"));
        }
        out
    }
}

impl ContentShape {
    /// Inline style for the inner wrapper. Content is always centered within
    /// the container.
    pub fn css(&self) -> String {
        let mut out = format!(
            "max-width:{};margin-left:auto;margin-right:auto;",
            self.max_width
        );
        if let Some(radius) = &self.border_radius {
            out.push_str(&format!("border-radius:{radius};"));
        }
        out
    }
}
