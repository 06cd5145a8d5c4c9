//! CLI command definitions and handlers.
//!
//! Each subcommand is implemented as a function that takes the parsed arguments
//! and returns an `anyhow::Result<()>`.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use futures::StreamExt;
use reqwest::Url;
use serde::Serialize;
use tokio::runtime::Runtime;
use tracing::{debug, info};

use crate::config;
use crate::error::{Error, Result, ResultExt};
use crate::model::{Shape, Thing, Value};
use crate::provider::PageKind;
use crate::secretary::{Report, ResolutionEvent, Secretary, default_query};

/// Art Secretary CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Fill in artist, album and track details from Bandcamp pages
    Investigate {
        /// Bandcamp artist, album or track URLs
        #[arg(required = true)]
        urls: Vec<String>,
        /// Print the filled entities and reports as JSON
        #[arg(long)]
        json: bool,
        /// Fetch every page again instead of reusing fetched pages
        #[arg(long)]
        no_cache: bool,
    },
    /// Show the config file location and effective settings
    Config {
        /// Write the default settings to the config file if it does not exist
        #[arg(long)]
        init: bool,
    },
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Investigate {
            urls,
            json,
            no_cache,
        } => {
            let rt = Runtime::new()?;
            cmd_investigate(&rt, urls, *json, *no_cache)
        }
        Commands::Config { init } => cmd_config(*init),
    }
}

/// Build an unfilled root Thing for a Bandcamp URL, typed by its page kind.
pub fn root_for_url(url: &str) -> Result<Thing> {
    let parsed = Url::parse(url).map_err(|_| Error::unsupported_url(url))?;
    let page = PageKind::of_url(&parsed).ok_or_else(|| Error::unsupported_url(url))?;

    let mut thing = page.thing_kind().new_thing();
    thing.fill("url", Value::from(parsed.as_str()))?;
    Ok(thing)
}

// ============================================================================
// Individual command implementations
// ============================================================================

#[derive(Serialize)]
struct Investigated<'a> {
    url: &'a str,
    thing: Thing,
    report: Report,
}

fn cmd_investigate(rt: &Runtime, urls: &[String], json: bool, no_cache: bool) -> anyhow::Result<()> {
    let config = config::load();
    let secretary =
        Secretary::from_config(&config, default_query()?)?.with_page_cache(!no_cache);

    rt.block_on(async {
        // One cache for the whole run: roots often share album pages.
        let cache = secretary.new_cache();
        let mut results = Vec::with_capacity(urls.len());

        for url in urls {
            let mut root = root_for_url(url).with_context(format!("Cannot investigate {}", url))?;
            let query = secretary.top_level_query(root.kind());
            info!("Investigating {} ({})", url, root.kind());

            let investigation = secretary
                .investigate_with(&mut root, query, Arc::clone(&cache))
                .with_context(format!("Invalid query for {}", url))?;

            if json {
                let report = investigation.run().await;
                results.push(Investigated {
                    url,
                    thing: root,
                    report,
                });
                continue;
            }

            println!("Investigating: {}", url);
            let mut unresolved = 0;
            {
                let mut events = std::pin::pin!(investigation.into_stream());
                while let Some(event) = events.next().await {
                    unresolved += event.unsatisfied.len();
                    print_event(&event);
                }
            }

            println!();
            print_thing(&root, 0);
            if unresolved > 0 {
                println!("\n{} value(s) could not be found.", unresolved);
            }
            println!();
        }

        if json {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }

        debug!("Page cache holds {} page(s)", cache.len());
        Ok::<_, anyhow::Error>(())
    })
}

fn cmd_config(init: bool) -> anyhow::Result<()> {
    let config = config::load();

    match config::config_path() {
        Some(path) if path.exists() => println!("Config file: {}", path.display()),
        Some(path) if init => {
            config::save(&config).with_context("Failed to write default config")?;
            println!("Config file: {} (created with defaults)", path.display());
        }
        Some(path) => println!("Config file: {} (not created, using defaults)", path.display()),
        None => println!("Config file: unavailable on this platform"),
    }
    println!();

    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

// ============================================================================
// Output helpers
// ============================================================================

fn print_event(event: &ResolutionEvent) {
    let status = if event.is_satisfied() { "✓" } else { "…" };
    println!("  {} {} at {}", status, event.kind, event.location);

    if !event.opened.is_empty() {
        println!("      opened: {}", event.opened.join(", "));
    }
    for path in &event.unsatisfied {
        println!("      missing: {}", path);
    }
    for diagnostic in &event.diagnostics {
        println!("      ⚠ {}", diagnostic);
    }
}

fn print_thing(thing: &Thing, depth: usize) {
    let indent = "  ".repeat(depth);
    println!("{}{}", indent, thing.kind());

    for spec in thing.kind().attributes() {
        match spec.shape {
            Shape::Collection(_) => {
                let Some(children) = thing.children(spec.name) else {
                    continue;
                };
                println!("{}  {} ({}):", indent, spec.name, children.len());
                for child in children {
                    print_thing(child, depth + 2);
                }
            }
            Shape::Text | Shape::Integer => {
                if let Some(value) = thing.value(spec.name) {
                    println!("{}  {}: {}", indent, spec.name, value);
                }
            }
        }
    }
}
