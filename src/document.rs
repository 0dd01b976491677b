//! The declarative site document.
//!
//! A `SiteConfig` describes one complete site: global settings plus an
//! ordered list of typed sections. It is produced by an external editor,
//! stored and synced by an external persistence layer, and flows read-only
//! through the rendering engine — the engine is a pure projection from
//! document to HTML and never mutates a node.
//!
//! JSON is the wire and storage format; field names and nesting are
//! preserved exactly for round-trip fidelity with stored documents. TOML is
//! accepted as an authoring convenience for hand-written documents (chosen
//! by file extension in [`load`]).

use crate::config::SiteSettings;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// The root declarative document describing one site.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Global identity and theme. Mutated only by the external editor.
    pub site_settings: SiteSettings,
    /// Ordered sections. Order defines page order and is preserved verbatim;
    /// re-ordering is an editor operation, not an engine one.
    pub sections: Vec<SectionNode>,
}

/// One entry in the document's section list.
///
/// `props` and `styles` are free-form: their meaning is defined per type
/// (props) and by the shared style vocabulary (styles). Container types
/// embed nested `SectionNode`s inside props, under `items` (or the legacy
/// `children` key, reconciled by the field normalizer).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionNode {
    /// Stable identifier. When absent, the sequence index is the identity
    /// fallback for render keys only — it is not persisted identity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Registry discriminator. Not guaranteed to be registered: the schema
    /// and the registry evolve independently.
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-form content data, meaning defined per type.
    pub props: Value,
    /// Free-form style instructions from the shared style vocabulary.
    pub styles: Value,
}

impl Default for SectionNode {
    fn default() -> Self {
        Self {
            id: None,
            kind: String::new(),
            props: Value::Null,
            styles: Value::Null,
        }
    }
}

/// Load a site document from disk.
///
/// Format is chosen by extension: `.toml` is parsed as TOML, anything else
/// as JSON (the wire format).
pub fn load(path: &Path) -> Result<SiteConfig, DocumentError> {
    let content = fs::read_to_string(path)?;
    let site = if path.extension().is_some_and(|e| e == "toml") {
        toml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };
    Ok(site)
}

/// A representative starter document with one section of each common kind.
///
/// Used by the `gen-site` CLI command.
pub fn starter_site_json() -> &'static str {
    r##"{
  "site_settings": {
    "title": "My Site",
    "description": "A personal site built from sections",
    "theme": {
      "primary_color": "#4f46e5",
      "font_family": "system-ui, sans-serif",
      "dark_mode": false
    },
    "layout": {
      "max_width": "normal",
      "section_padding": "md"
    }
  },
  "sections": [
    {
      "id": "top",
      "type": "navigation",
      "props": {
        "brand": "My Site",
        "links": [
          { "label": "Features", "href": "features" },
          { "label": "Pricing", "href": "pricing" },
          { "label": "Contact", "href": "contact" }
        ]
      },
      "styles": {}
    },
    {
      "type": "hero",
      "props": {
        "variant": "banner",
        "heading": "Welcome",
        "subheading": "Everything on this page is one editable document.",
        "cta": { "label": "Get started", "href": "pricing" }
      },
      "styles": { "padding": "lg", "align": "center" }
    },
    {
      "id": "features",
      "type": "features",
      "props": {
        "variant": "grid",
        "heading": "What you get",
        "items": [
          { "type": "card", "props": { "icon": "⚡", "title": "Fast", "body": "Static HTML, no runtime." } },
          { "type": "card", "props": { "icon": "✍️", "title": "Editable", "body": "Change the document, not the markup." } },
          { "type": "card", "props": { "icon": "🎨", "title": "Themed", "body": "One palette, every section." } }
        ]
      },
      "styles": { "background": "surface" }
    },
    {
      "id": "pricing",
      "type": "pricing",
      "props": {
        "variant": "columns",
        "heading": "Plans",
        "tiers": [
          { "name": "Free", "price": "$0", "period": "/mo", "features": ["1 site", "Community support"] },
          { "name": "Pro", "price": "$9", "period": "/mo", "features": ["10 sites", "Custom domain"], "highlighted": true }
        ]
      },
      "styles": {}
    },
    {
      "id": "contact",
      "type": "contact",
      "props": { "heading": "Say hello", "email": "hello@example.com" },
      "styles": { "background": "surface" }
    },
    {
      "type": "footer",
      "props": { "text": "Built with sitesmith" },
      "styles": { "padding": "sm" }
    }
  ]
}
"##
}
