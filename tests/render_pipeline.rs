//! End-to-end pipeline tests: document file → loaded `SiteConfig` →
//! rendered page, exercising load, normalization, registry dispatch, fault
//! handling, and page assembly together.

use sitesmith::document::{self, SiteConfig};
use sitesmith::page;
use sitesmith::preview;
use sitesmith::render::RenderOptions;
use std::fs;
use tempfile::TempDir;

fn load_from_json(json: &str) -> SiteConfig {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("site.json");
    fs::write(&path, json).unwrap();
    document::load(&path).unwrap()
}

#[test]
fn full_document_renders_every_section_in_order() {
    let site = load_from_json(
        r#"{
            "sections": [
                {"id": "n1", "type": "navigation",
                 "props": {"links": [{"label": "Home", "href": "home"}]}},
                {"id": "z9", "type": "bogus_widget", "props": {}},
                {"type": "hero", "props": {"heading": "Hi"}}
            ]
        }"#,
    );
    let html = page::render_page(&site, RenderOptions::default()).into_string();

    // Three ordered outputs.
    let nav = html.find(r#"data-kind="navigation""#).unwrap();
    let fault = html.find(r#"data-kind="unknown""#).unwrap();
    let hero = html.find(r#"data-kind="hero""#).unwrap();
    assert!(nav < fault && fault < hero);

    // Navigation link was anchor-normalized from "home".
    assert!(html.contains(r##"href="#home""##));

    // The unknown section is a marked placeholder carrying its type name.
    assert!(html.contains("section-fault"));
    assert!(html.contains("bogus_widget"));

    // Declared ids are render keys; the un-id'd hero is keyed by index.
    assert!(html.contains(r#"data-key="n1""#));
    assert!(html.contains(r#"data-key="z9""#));
    assert!(html.contains(r#"data-key="2""#));

    // Unspecified styling falls back to documented defaults.
    assert!(html.contains("padding-top:4rem"));
    assert!(html.contains("max-width:960px"));
}

#[test]
fn legacy_document_renders_like_a_current_one() {
    // Same site expressed with legacy field names and a legacy type alias.
    let legacy = load_from_json(
        r#"{
            "sections": [
                {"type": "navbar",
                 "props": {"title": "Acme", "nav_items": [{"label": "Top", "url": "top"}]}},
                {"type": "jumbotron", "props": {"title": "Big", "subtitle": "Small"}}
            ]
        }"#,
    );
    let current = load_from_json(
        r#"{
            "sections": [
                {"type": "navigation",
                 "props": {"brand": "Acme", "links": [{"label": "Top", "href": "top"}]}},
                {"type": "hero", "props": {"heading": "Big", "subheading": "Small"}}
            ]
        }"#,
    );
    let legacy_html = page::render_page(&legacy, RenderOptions::default()).into_string();
    let current_html = page::render_page(&current, RenderOptions::default()).into_string();
    assert_eq!(legacy_html, current_html);
}

#[test]
fn nested_containers_render_depth_first_in_order() {
    let site = load_from_json(
        r#"{
            "sections": [
                {"type": "layout", "props": {"items": [
                    {"type": "text", "props": {"body": "First"}},
                    {"type": "features", "props": {"items": [
                        {"type": "card", "props": {"title": "Second"}},
                        {"type": "card", "props": {"title": "Third"}}
                    ]}},
                    {"type": "text", "props": {"body": "Fourth"}}
                ]}}
            ]
        }"#,
    );
    let html = page::render_page(&site, RenderOptions::default()).into_string();
    let positions: Vec<usize> = ["First", "Second", "Third", "Fourth"]
        .iter()
        .map(|s| html.find(s).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn toml_document_produces_the_same_page_as_json() {
    let tmp = TempDir::new().unwrap();

    let json_path = tmp.path().join("site.json");
    fs::write(
        &json_path,
        r#"{"site_settings": {"title": "Same"},
            "sections": [{"type": "hero", "props": {"heading": "Hi"}}]}"#,
    )
    .unwrap();

    let toml_path = tmp.path().join("site.toml");
    fs::write(
        &toml_path,
        r#"
[site_settings]
title = "Same"

[[sections]]
type = "hero"

[sections.props]
heading = "Hi"
"#,
    )
    .unwrap();

    let from_json = page::render_page(&document::load(&json_path).unwrap(), RenderOptions::default());
    let from_toml = page::render_page(&document::load(&toml_path).unwrap(), RenderOptions::default());
    assert_eq!(from_json.into_string(), from_toml.into_string());
}

#[test]
fn preview_render_suppresses_every_interaction() {
    let site = load_from_json(
        r#"{
            "sections": [
                {"type": "navigation", "props": {"links": [{"label": "Home", "href": "home"}]}},
                {"type": "contact", "props": {"email": "hi@example.com"}},
                {"type": "cta", "props": {"heading": "Go", "button": {"label": "Now", "href": "x"}}}
            ]
        }"#,
    );
    let html = preview::render_preview(&site).into_string();

    // No live links, no form action, no script.
    assert!(!html.contains("href="));
    assert!(!html.contains("mailto:"));
    assert!(!html.contains("<script>"));
    // Content still present and labeled.
    assert!(html.contains("Home"));
    assert!(html.contains("Now"));
    assert!(html.contains("disabled"));
}

#[test]
fn starter_document_renders_without_placeholders() {
    let site: SiteConfig = serde_json::from_str(document::starter_site_json()).unwrap();
    let html = page::render_page(&site, RenderOptions::default()).into_string();
    assert!(!html.contains("section-fault"));
    assert!(html.contains("<title>My Site</title>"));
}
