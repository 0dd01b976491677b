//! Site generation: the filesystem stage.
//!
//! The rendering core is pure — document in, markup out — so this module is
//! the only place output touches disk: it creates the output directory and
//! writes the rendered page. Live pages land in `index.html`, preview
//! documents in `preview.html`.

use crate::document::SiteConfig;
use crate::page;
use crate::preview;
use crate::render::RenderOptions;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Render the live page and write `index.html` into `output_dir`.
///
/// Returns the path written.
pub fn generate(site: &SiteConfig, output_dir: &Path) -> Result<PathBuf, GenerateError> {
    let html = page::render_page(site, RenderOptions::default()).into_string();
    write_page(output_dir, "index.html", &html)
}

/// Render the non-interactive preview document and write `preview.html`.
pub fn generate_preview(site: &SiteConfig, output_dir: &Path) -> Result<PathBuf, GenerateError> {
    let html = preview::render_preview(site).into_string();
    write_page(output_dir, "preview.html", &html)
}

fn write_page(output_dir: &Path, name: &str, html: &str) -> Result<PathBuf, GenerateError> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(name);
    fs::write(&path, html)?;
    Ok(path)
}
