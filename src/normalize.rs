//! Field normalization: the backward-compatibility layer.
//!
//! Documents written against older schema revisions carry legacy field names
//! for the same semantic slot (`children` for a container's `items`, `href`
//! for a link's `url`, `title` for `heading`). Rather than scattering
//! fallback chains through every renderer, one declarative alias table per
//! section kind is applied here, before any renderer sees the data — alias
//! rules stay auditable in one place.
//!
//! Precedence is deterministic: the current name wins when both are present;
//! among legacy names, the first listed wins. Missing optional fields never
//! error — renderers deserialize canonical props with serde defaults.
//!
//! Link values are also normalized here (see [`normalize_href`]), because the
//! same raw value drives both the rendered `href` attribute and the in-page
//! smooth-scroll behavior, and the two must agree.

use crate::registry::SectionKind;
use serde_json::{Map, Value};

/// One canonical field and the legacy names it absorbs.
struct FieldAlias {
    canonical: &'static str,
    legacy: &'static [&'static str],
}

/// Where link-like records live inside canonical props, so per-entry
/// `url`/`href` reconciliation and anchor normalization reach every
/// clickable slot.
enum LinkSlot {
    /// A list of link records under this key.
    List(&'static str),
    /// A single link record under this key.
    Object(&'static str),
    /// A list of records each carrying a nested link record, e.g.
    /// `tiers[].cta`.
    NestedList(&'static str, &'static str),
}

fn field_aliases(kind: SectionKind) -> &'static [FieldAlias] {
    match kind {
        SectionKind::Navigation => &[
            FieldAlias { canonical: "links", legacy: &["nav_items"] },
            FieldAlias { canonical: "brand", legacy: &["title"] },
        ],
        SectionKind::Hero => &[
            FieldAlias { canonical: "heading", legacy: &["title"] },
            FieldAlias { canonical: "subheading", legacy: &["subtitle", "tagline"] },
        ],
        SectionKind::Text => &[
            FieldAlias { canonical: "heading", legacy: &["title"] },
            FieldAlias { canonical: "body", legacy: &["content"] },
        ],
        SectionKind::Card => &[
            FieldAlias { canonical: "body", legacy: &["content", "description"] },
        ],
        SectionKind::Features | SectionKind::Layout => &[
            FieldAlias { canonical: "items", legacy: &["children"] },
            FieldAlias { canonical: "heading", legacy: &["title"] },
        ],
        SectionKind::Pricing => &[
            FieldAlias { canonical: "tiers", legacy: &["plans"] },
            FieldAlias { canonical: "heading", legacy: &["title"] },
        ],
        SectionKind::Gallery => &[
            FieldAlias { canonical: "images", legacy: &["photos"] },
            FieldAlias { canonical: "heading", legacy: &["title"] },
        ],
        SectionKind::Cta => &[
            FieldAlias { canonical: "heading", legacy: &["title"] },
            FieldAlias { canonical: "body", legacy: &["content"] },
        ],
        SectionKind::Contact => &[
            FieldAlias { canonical: "heading", legacy: &["title"] },
        ],
        SectionKind::Footer => &[
            FieldAlias { canonical: "text", legacy: &["copyright"] },
            FieldAlias { canonical: "links", legacy: &["nav_items"] },
        ],
        SectionKind::Unknown => &[],
    }
}

fn link_slots(kind: SectionKind) -> &'static [LinkSlot] {
    match kind {
        SectionKind::Navigation | SectionKind::Footer => &[LinkSlot::List("links")],
        SectionKind::Hero => &[LinkSlot::Object("cta")],
        SectionKind::Cta => &[LinkSlot::Object("button")],
        SectionKind::Pricing => &[LinkSlot::NestedList("tiers", "cta")],
        _ => &[],
    }
}

/// Reconcile raw props into the canonical shape for `kind`.
///
/// Pure: the input is never mutated; a fresh canonical object comes back.
/// Non-object props yield an empty object, so renderers fall through to
/// their documented defaults.
pub fn normalize(kind: SectionKind, raw: &Value) -> Value {
    let mut map = match raw {
        Value::Object(m) => m.clone(),
        _ => Map::new(),
    };

    for alias in field_aliases(kind) {
        apply_alias(&mut map, alias);
    }

    for slot in link_slots(kind) {
        match slot {
            LinkSlot::List(key) => {
                if let Some(Value::Array(entries)) = map.get_mut(*key) {
                    for entry in entries {
                        if let Value::Object(record) = entry {
                            normalize_link_record(record);
                        }
                    }
                }
            }
            LinkSlot::Object(key) => {
                if let Some(Value::Object(record)) = map.get_mut(*key) {
                    normalize_link_record(record);
                }
            }
            LinkSlot::NestedList(list_key, inner_key) => {
                if let Some(Value::Array(entries)) = map.get_mut(*list_key) {
                    for entry in entries {
                        if let Some(Value::Object(record)) =
                            entry.get_mut(*inner_key)
                        {
                            normalize_link_record(record);
                        }
                    }
                }
            }
        }
    }

    if kind == SectionKind::Gallery {
        normalize_media_entries(&mut map);
    }

    Value::Object(map)
}

/// Move legacy values under the canonical key. Legacy keys are always
/// removed; the canonical key keeps its value if already present.
fn apply_alias(map: &mut Map<String, Value>, alias: &FieldAlias) {
    for legacy in alias.legacy {
        if let Some(value) = map.remove(*legacy) {
            map.entry(alias.canonical.to_string()).or_insert(value);
        }
    }
}

/// Reconcile one link record: `href` is the legacy name for the current
/// `url` field, so a present `url` value replaces any `href`. The reconciled
/// value lives under `href` (the rendered attribute name) and is
/// anchor-normalized.
fn normalize_link_record(record: &mut Map<String, Value>) {
    if let Some(value) = record.remove("url") {
        record.insert("href".to_string(), value);
    }
    if let Some(Value::String(href)) = record.get("href") {
        let normalized = normalize_href(href);
        record.insert("href".to_string(), Value::String(normalized));
    }
}

/// Gallery image entries accept `url` as a legacy name for `src`.
/// Image sources are never anchor-normalized.
fn normalize_media_entries(map: &mut Map<String, Value>) {
    if let Some(Value::Array(entries)) = map.get_mut("images") {
        for entry in entries {
            if let Value::Object(record) = entry {
                if let Some(value) = record.remove("url") {
                    record.entry("src".to_string()).or_insert(value);
                }
            }
        }
    }
}

/// Normalize a user-supplied link value.
///
/// A value carrying a protocol separator (`:`) or a path separator (`/`)
/// passes through unchanged, as does anything already in `#anchor` form. A
/// bare token is an in-page anchor and gets a `#` prefix.
pub fn normalize_href(raw: &str) -> String {
    if raw.is_empty() || raw.starts_with('#') || raw.contains(':') || raw.contains('/') {
        raw.to_string()
    } else {
        format!("#{raw}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_token_becomes_anchor() {
        assert_eq!(normalize_href("about"), "#about");
    }

    #[test]
    fn existing_anchor_unchanged() {
        assert_eq!(normalize_href("#about"), "#about");
    }

    #[test]
    fn absolute_url_unchanged() {
        assert_eq!(normalize_href("https://x.com/a"), "https://x.com/a");
    }

    #[test]
    fn site_path_unchanged() {
        assert_eq!(normalize_href("/a/b"), "/a/b");
    }

    #[test]
    fn mailto_unchanged() {
        assert_eq!(normalize_href("mailto:a@b.com"), "mailto:a@b.com");
    }

    #[test]
    fn empty_href_unchanged() {
        assert_eq!(normalize_href(""), "");
    }

    #[test]
    fn current_name_alone_is_canonical() {
        let props = normalize(SectionKind::Hero, &json!({"heading": "Hi"}));
        assert_eq!(props["heading"], "Hi");
    }

    #[test]
    fn legacy_name_alone_maps_to_canonical() {
        let props = normalize(SectionKind::Hero, &json!({"title": "Hi"}));
        assert_eq!(props["heading"], "Hi");
        assert!(props.get("title").is_none());
    }

    #[test]
    fn current_name_wins_over_legacy() {
        let props = normalize(
            SectionKind::Hero,
            &json!({"heading": "New", "title": "Old"}),
        );
        assert_eq!(props["heading"], "New");
        assert!(props.get("title").is_none());
    }

    #[test]
    fn alias_equivalence_either_name_same_canonical_props() {
        let from_current = normalize(SectionKind::Layout, &json!({"items": [1, 2]}));
        let from_legacy = normalize(SectionKind::Layout, &json!({"children": [1, 2]}));
        assert_eq!(from_current, from_legacy);
    }

    #[test]
    fn first_legacy_name_wins_among_legacy() {
        let props = normalize(
            SectionKind::Hero,
            &json!({"subtitle": "first", "tagline": "second"}),
        );
        assert_eq!(props["subheading"], "first");
    }

    #[test]
    fn link_list_url_maps_to_href_and_normalizes() {
        let props = normalize(
            SectionKind::Navigation,
            &json!({"links": [{"label": "Home", "url": "home"}]}),
        );
        assert_eq!(props["links"][0]["href"], "#home");
        assert!(props["links"][0].get("url").is_none());
    }

    #[test]
    fn url_wins_over_legacy_href_in_record() {
        let props = normalize(
            SectionKind::Navigation,
            &json!({"links": [{"label": "A", "url": "/current", "href": "/legacy"}]}),
        );
        assert_eq!(props["links"][0]["href"], "/current");
        assert!(props["links"][0].get("url").is_none());
    }

    #[test]
    fn nested_tier_cta_is_normalized() {
        let props = normalize(
            SectionKind::Pricing,
            &json!({"plans": [{"name": "Pro", "cta": {"label": "Buy", "url": "pricing"}}]}),
        );
        assert_eq!(props["tiers"][0]["cta"]["href"], "#pricing");
    }

    #[test]
    fn gallery_photo_url_maps_to_src_without_anchoring() {
        let props = normalize(
            SectionKind::Gallery,
            &json!({"photos": [{"url": "shot.jpg"}]}),
        );
        // Media sources are not link targets; no `#` prefix.
        assert_eq!(props["images"][0]["src"], "shot.jpg");
    }

    #[test]
    fn non_object_props_become_empty_object() {
        assert_eq!(normalize(SectionKind::Hero, &Value::Null), json!({}));
        assert_eq!(normalize(SectionKind::Hero, &json!([1, 2])), json!({}));
    }

    #[test]
    fn unknown_kind_passes_props_through() {
        let raw = json!({"anything": 1, "title": "kept"});
        let props = normalize(SectionKind::Unknown, &raw);
        assert_eq!(props, raw);
    }

    #[test]
    fn normalize_does_not_mutate_input() {
        let raw = json!({"title": "Hi"});
        let _ = normalize(SectionKind::Hero, &raw);
        assert_eq!(raw, json!({"title": "Hi"}));
    }
}
