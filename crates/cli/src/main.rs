//! certprep CLI - study content lookup, content validation and progress badges.

mod config;
mod output;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use certprep_knowledge::ContentRegistry;
use certprep_progress::{NumberLocale, ProgressBadge};
use config::{CliConfig, OutputFormat};
use output::{format_entry, truncate, HitSummary, KeyedEntry};

#[derive(Parser)]
#[command(name = "certprep")]
#[command(about = "Certification study content and progress badges", long_about = None)]
struct Cli {
    /// JSON config file
    #[arg(long, global = true, env = "CERTPREP_CONFIG")]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the study entry for a task
    Show {
        /// Task key, e.g. 6-04
        key: String,
    },
    /// List task keys
    List {
        /// Only keys in this category, e.g. 5
        #[arg(long)]
        category: Option<String>,
    },
    /// List categories
    Categories,
    /// Search study content
    Search {
        /// Text to look for
        query: String,
        /// Maximum results
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Check all content; exits non-zero on any defect
    Validate,
    /// Render a progress badge
    Badge {
        /// Experience points
        xp: u64,
        /// Level (1 or more)
        level: u32,
        /// Number grouping locale
        #[arg(long)]
        locale: Option<NumberLocale>,
        /// Print an HTML fragment
        #[arg(long)]
        html: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = CliConfig::load(cli.config.as_deref()).await?;
    if cli.json {
        config.output = OutputFormat::Json;
    }
    debug!(?config, "Loaded configuration");

    let registry = ContentRegistry::builtin();

    match cli.command {
        Commands::Show { key } => match registry.get(&key) {
            Ok(entry) => match config.output {
                OutputFormat::Text => print!("{}", format_entry(&key, entry)),
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&KeyedEntry { key: &key, entry })?)
                }
            },
            Err(err) => match config.output {
                OutputFormat::Text => println!("{err}"),
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::json!({ "key": key, "error": "not_found" })
                ),
            },
        },
        Commands::List { category } => {
            let keys = match &category {
                Some(c) => registry.keys_for_category(c),
                None => registry.keys(),
            };

            match config.output {
                OutputFormat::Text => {
                    println!("Tasks ({})", keys.len());
                    for key in &keys {
                        let overview = registry
                            .get(key.as_str())
                            .map(|e| truncate(&e.overview, 72))
                            .unwrap_or_default();
                        println!("  {key:>5}  {overview}");
                    }
                }
                OutputFormat::Json => {
                    let keys: Vec<&str> = keys.iter().map(|k| k.as_str()).collect();
                    println!("{}", serde_json::to_string_pretty(&keys)?);
                }
            }
        }
        Commands::Categories => {
            let categories = registry.categories();
            match config.output {
                OutputFormat::Text => {
                    for category in categories {
                        let count = registry.keys_for_category(&category.to_string()).len();
                        println!("  {category}: {count} tasks");
                    }
                }
                OutputFormat::Json => println!("{}", serde_json::to_string(&categories)?),
            }
        }
        Commands::Search { query, limit } => {
            let hits = registry.search(&query, limit.unwrap_or(config.search_limit));
            match config.output {
                OutputFormat::Text => {
                    println!("Results ({})", hits.len());
                    for hit in &hits {
                        println!("  {:>5} | {:5.1} | {}", hit.key, hit.score, truncate(&hit.entry.overview, 64));
                    }
                }
                OutputFormat::Json => {
                    let summaries: Vec<HitSummary<'_>> = hits.iter().map(HitSummary::from).collect();
                    println!("{}", serde_json::to_string_pretty(&summaries)?);
                }
            }
        }
        Commands::Validate => {
            let errors = registry.validate();
            if !errors.is_empty() {
                for err in &errors {
                    eprintln!("  {err}");
                }
                bail!("{} content defect(s) in {} entries", errors.len(), registry.len());
            }
            info!("All {} entries valid", registry.len());
            println!("OK: {} entries", registry.len());
        }
        Commands::Badge { xp, level, locale, html } => {
            let badge = ProgressBadge::new(locale.unwrap_or(config.locale));
            let view = badge.render(xp, level);

            if html {
                println!("{}", view.to_html());
            } else {
                match config.output {
                    OutputFormat::Text => println!("{view}"),
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
                }
            }
        }
    }

    Ok(())
}
