//! CLI output formatting.
//!
//! Information-first display: the primary line for every section is its
//! semantic identity — positional index, declared type, render key — with
//! registry misses called out inline and container children indented one
//! level per nesting depth. This makes the output readable as a page
//! inventory while still tracing back to the document.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::document::{SectionNode, SiteConfig};
use crate::normalize;
use crate::preview;
use crate::registry::{self, SectionKind};
use crate::render;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Indentation: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Header line for one section: index + declared type + render key, with a
/// marker when the type has no registered renderer.
///
/// ```text
/// 001 navigation  #top
/// 002 bogus_widget  #z9  [unknown type]
/// 003 hero  #2
/// ```
fn section_line(node: &SectionNode, index: usize) -> String {
    let key = render::render_key(node, index);
    let mut line = format!("{} {}  #{}", format_index(index + 1), node.kind, key);
    if registry::resolve(&node.kind) == SectionKind::Unknown {
        line.push_str("  [unknown type]");
    }
    line
}

/// Walk one section and its container children, appending display lines.
fn push_section_lines(
    lines: &mut Vec<String>,
    node: &SectionNode,
    index: usize,
    depth: usize,
    unknown_count: &mut usize,
) {
    let kind = registry::resolve(&node.kind);
    if kind == SectionKind::Unknown {
        *unknown_count += 1;
    }
    lines.push(format!("{}{}", indent(depth), section_line(node, index)));

    if kind.is_container() {
        // Children live under the canonical `items` key after aliasing.
        let props = normalize::normalize(kind, &node.props);
        for (child_index, child) in render::parse_children(props.get("items"))
            .iter()
            .enumerate()
        {
            push_section_lines(lines, child, child_index, depth + 1, unknown_count);
        }
    }
}

/// Format the section inventory plus a summary line.
pub fn format_check_output(site: &SiteConfig) -> Vec<String> {
    let mut lines = vec!["Sections".to_string()];
    let mut unknown_count = 0;
    for (index, node) in site.sections.iter().enumerate() {
        push_section_lines(&mut lines, node, index, 0, &mut unknown_count);
    }
    lines.push(String::new());
    let summary = if unknown_count == 0 {
        format!("{} sections, all types registered", site.sections.len())
    } else {
        // Unknown types are a warning, not an error: they render as
        // placeholders and the rest of the page is unaffected.
        format!(
            "{} sections, {} with unregistered types (rendered as placeholders)",
            site.sections.len(),
            unknown_count
        )
    };
    lines.push(summary);
    lines
}

pub fn print_check_output(site: &SiteConfig) {
    for line in format_check_output(site) {
        println!("{line}");
    }
}

/// Format generate output: the inventory plus the written path.
pub fn format_generate_output(site: &SiteConfig, written: &Path) -> Vec<String> {
    let mut lines = format_check_output(site);
    lines.push(format!("Generated {}", written.display()));
    lines
}

pub fn print_generate_output(site: &SiteConfig, written: &Path) {
    for line in format_generate_output(site, written) {
        println!("{line}");
    }
}

/// Format preview output: the inventory, the written path, and the nominal
/// width the document is laid out at.
pub fn format_preview_output(site: &SiteConfig, written: &Path) -> Vec<String> {
    let mut lines = format_check_output(site);
    lines.push(format!(
        "Generated {} (nominal width {}px)",
        written.display(),
        preview::NOMINAL_WIDTH
    ));
    lines
}

pub fn print_preview_output(site: &SiteConfig, written: &Path) {
    for line in format_preview_output(site, written) {
        println!("{line}");
    }
}
