use clap::{Parser, Subcommand};
use sitesmith::{document, generate, output};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "sitesmith")]
#[command(about = "Declarative section-based website renderer")]
#[command(long_about = "\
Declarative section-based website renderer

A site is one document: global settings plus an ordered list of typed
sections. Edit the document, re-render, done — no markup involved.

Document structure (site.json, or site.toml for hand authoring):

  {
    \"site_settings\": {
      \"title\": \"My Site\",                  # SEO title
      \"theme\": { \"primary_color\": \"#4f46e5\", \"dark_mode\": false },
      \"layout\": { \"max_width\": \"normal\", \"section_padding\": \"md\" }
    },
    \"sections\": [
      { \"id\": \"top\", \"type\": \"navigation\", \"props\": { ... }, \"styles\": { ... } },
      { \"type\": \"hero\", \"props\": { \"heading\": \"Hi\" } }
    ]
  }

Section types: navigation, hero, text, card, features, layout, pricing,
gallery, cta, contact, footer. Each type has several variants selected by a
\"variant\" prop. Unknown types render as marked placeholders; the rest of
the page is unaffected.

Link values: a bare token (\"about\") becomes an in-page anchor (\"#about\")
targeting the section whose id matches; URLs and paths pass through as-is.

Run 'sitesmith gen-site' to print a documented starter document.")]
#[command(version = version_string())]
struct Cli {
    /// Site document (JSON; .toml also accepted)
    #[arg(long, default_value = "site.json", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the site document into a static HTML page
    Render,
    /// Render the non-interactive preview document at the nominal width
    Preview,
    /// Validate the site document without writing output
    Check,
    /// Print a starter site.json
    GenSite,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Render => {
            let site = document::load(&cli.source)?;
            site.site_settings.validate()?;
            let written = generate::generate(&site, &cli.output)?;
            output::print_generate_output(&site, &written);
        }
        Command::Preview => {
            let site = document::load(&cli.source)?;
            site.site_settings.validate()?;
            let written = generate::generate_preview(&site, &cli.output)?;
            output::print_preview_output(&site, &written);
        }
        Command::Check => {
            let site = document::load(&cli.source)?;
            site.site_settings.validate()?;
            output::print_check_output(&site);
        }
        Command::GenSite => {
            print!("{}", document::starter_site_json());
        }
    }

    Ok(())
}
