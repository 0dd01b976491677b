//! Site settings and theme resolution.
//!
//! `SiteSettings` is the `site_settings` block of the document: global
//! identity (SEO title/description), theme (colors, font, dark mode), and
//! layout defaults. All fields have sensible defaults so sparse and old
//! documents keep loading — a document only carries the values its editor
//! changed.
//!
//! A [`Theme`] is derived once per render from the settings. It holds the
//! symbolic-token lookup tables the style resolver consults: a style value
//! like `"primary"` resolves through the theme, while a value outside the
//! token vocabulary passes through as a literal CSS value.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Settings validation error: {0}")]
    Validation(String),
}

/// Global site settings carried in the document's `site_settings` block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    /// SEO page title.
    pub title: String,
    /// SEO meta description. Empty means no description tag is emitted.
    pub description: String,
    /// Theme settings (colors, font, dark mode).
    pub theme: ThemeSettings,
    /// Layout defaults applied to sections that don't specify their own.
    pub layout: LayoutSettings,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title: "My Site".to_string(),
            description: String::new(),
            theme: ThemeSettings::default(),
            layout: LayoutSettings::default(),
        }
    }
}

impl SiteSettings {
    /// Validate settings values before rendering.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.theme.primary_color.trim().is_empty() {
            return Err(ConfigError::Validation(
                "theme.primary_color must not be empty".into(),
            ));
        }
        if self.theme.font_family.trim().is_empty() {
            return Err(ConfigError::Validation(
                "theme.font_family must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Theme settings: the palette and typography the whole page shares.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    /// Accent color for buttons, links, and highlights.
    pub primary_color: String,
    /// CSS font-family stack.
    pub font_family: String,
    /// Dark mode flips the default surface palette; explicit color
    /// overrides below still win.
    pub dark_mode: bool,
    /// Page background. Absent → per-mode default.
    pub background: Option<String>,
    /// Raised-surface color (cards, pricing tiers). Absent → per-mode default.
    pub surface: Option<String>,
    /// Body text color. Absent → per-mode default.
    pub text: Option<String>,
    /// Muted/secondary text color. Absent → per-mode default.
    pub muted: Option<String>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            primary_color: "#4f46e5".to_string(),
            font_family: "system-ui, sans-serif".to_string(),
            dark_mode: false,
            background: None,
            surface: None,
            text: None,
            muted: None,
        }
    }
}

/// Layout defaults consumed by the style resolver when a section's style
/// instructions omit the corresponding key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Default content width token (`narrow`/`normal`/`wide`/`full`) or a
    /// literal CSS width.
    pub max_width: String,
    /// Default vertical section padding token (`none`/`sm`/`md`/`lg`/`xl`)
    /// or a literal CSS length.
    pub section_padding: String,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            max_width: "normal".to_string(),
            section_padding: "md".to_string(),
        }
    }
}

// =============================================================================
// Resolved theme and token tables
// =============================================================================

/// The resolved theme: every symbolic slot filled with a concrete CSS value.
///
/// Derived from [`SiteSettings`] once per render; the style resolver and the
/// generated CSS custom properties both read from here, so a token always
/// means the same thing everywhere on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub primary: String,
    pub background: String,
    pub surface: String,
    pub text: String,
    pub muted: String,
    pub font_family: String,
    pub default_max_width: String,
    pub default_padding: String,
}

/// Per-mode surface palettes used when the document doesn't override colors.
const LIGHT_PALETTE: [&str; 4] = ["#ffffff", "#f5f5f7", "#16161a", "#6b6b76"];
const DARK_PALETTE: [&str; 4] = ["#0b0b0f", "#16161d", "#ededf0", "#9a9aa5"];

impl Theme {
    pub fn from_settings(settings: &SiteSettings) -> Self {
        let [bg, surface, text, muted] = if settings.theme.dark_mode {
            DARK_PALETTE
        } else {
            LIGHT_PALETTE
        };
        let t = &settings.theme;
        Self {
            primary: t.primary_color.clone(),
            background: t.background.clone().unwrap_or_else(|| bg.to_string()),
            surface: t.surface.clone().unwrap_or_else(|| surface.to_string()),
            text: t.text.clone().unwrap_or_else(|| text.to_string()),
            muted: t.muted.clone().unwrap_or_else(|| muted.to_string()),
            font_family: t.font_family.clone(),
            default_max_width: settings.layout.max_width.clone(),
            default_padding: settings.layout.section_padding.clone(),
        }
    }

    /// Look up a symbolic color token. `None` means the value is not in the
    /// vocabulary and should be treated as a literal.
    pub fn color_token(&self, name: &str) -> Option<&str> {
        match name {
            "primary" => Some(&self.primary),
            "background" => Some(&self.background),
            "surface" => Some(&self.surface),
            "text" => Some(&self.text),
            "muted" => Some(&self.muted),
            _ => None,
        }
    }
}

/// Vertical spacing token table (section padding and margins).
pub fn spacing_token(name: &str) -> Option<&'static str> {
    match name {
        "none" => Some("0"),
        "sm" => Some("2rem"),
        "md" => Some("4rem"),
        "lg" => Some("6rem"),
        "xl" => Some("8rem"),
        _ => None,
    }
}

/// Content width token table.
pub fn width_token(name: &str) -> Option<&'static str> {
    match name {
        "narrow" => Some("640px"),
        "normal" => Some("960px"),
        "wide" => Some("1200px"),
        "full" => Some("100%"),
        _ => None,
    }
}

/// Corner rounding token table.
pub fn radius_token(name: &str) -> Option<&'static str> {
    match name {
        "none" => Some("0"),
        "sm" => Some("4px"),
        "md" => Some("12px"),
        "lg" => Some("24px"),
        "full" => Some("9999px"),
        _ => None,
    }
}

/// Generate CSS custom properties from the resolved theme.
pub fn generate_theme_css(theme: &Theme) -> String {
    format!(
        r#":root {{
    --color-primary: {primary};
    --color-bg: {background};
    --color-surface: {surface};
    --color-text: {text};
    --color-muted: {muted};
    --font-family: {font_family};
}}"#,
        primary = theme.primary,
        background = theme.background,
        surface = theme.surface,
        text = theme.text,
        muted = theme.muted,
        font_family = theme.font_family,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_validate() {
        let settings = SiteSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.title, "My Site");
        assert_eq!(settings.layout.max_width, "normal");
    }

    #[test]
    fn empty_primary_color_rejected() {
        let mut settings = SiteSettings::default();
        settings.theme.primary_color = "  ".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn parse_partial_settings() {
        let json = r##"{"theme": {"primary_color": "#ff0000"}}"##;
        let settings: SiteSettings = serde_json::from_str(json).unwrap();
        // Overridden value
        assert_eq!(settings.theme.primary_color, "#ff0000");
        // Default values preserved
        assert_eq!(settings.theme.font_family, "system-ui, sans-serif");
        assert_eq!(settings.layout.section_padding, "md");
    }

    #[test]
    fn dark_mode_flips_surface_palette() {
        let mut settings = SiteSettings::default();
        settings.theme.dark_mode = true;
        let theme = Theme::from_settings(&settings);
        assert_eq!(theme.background, "#0b0b0f");
        assert_eq!(theme.text, "#ededf0");
    }

    #[test]
    fn explicit_colors_win_over_mode_defaults() {
        let mut settings = SiteSettings::default();
        settings.theme.dark_mode = true;
        settings.theme.background = Some("#123456".to_string());
        let theme = Theme::from_settings(&settings);
        assert_eq!(theme.background, "#123456");
        // Other slots still take the dark default
        assert_eq!(theme.surface, "#16161d");
    }

    #[test]
    fn color_tokens_resolve_through_theme() {
        let theme = Theme::from_settings(&SiteSettings::default());
        assert_eq!(theme.color_token("primary"), Some("#4f46e5"));
        assert_eq!(theme.color_token("background"), Some("#ffffff"));
        assert_eq!(theme.color_token("#bada55"), None);
    }

    #[test]
    fn spacing_and_width_tokens() {
        assert_eq!(spacing_token("md"), Some("4rem"));
        assert_eq!(spacing_token("4rem"), None);
        assert_eq!(width_token("narrow"), Some("640px"));
        assert_eq!(width_token("full"), Some("100%"));
        assert_eq!(radius_token("full"), Some("9999px"));
    }

    #[test]
    fn theme_css_uses_settings_colors() {
        let mut settings = SiteSettings::default();
        settings.theme.primary_color = "#f0f0f0".to_string();
        let css = generate_theme_css(&Theme::from_settings(&settings));
        assert!(css.contains("--color-primary: #f0f0f0"));
        assert!(css.contains("--font-family: system-ui"));
    }
}
