//! oppscout CLI
//!
//! Local execution entry point.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use oppscout::{
    error::Result,
    models::{CachedOutcome, Config, OpportunityType, SearchRequest, StudentProfile},
    services::{DiscoveryService, SearchClient, suggest},
    storage::{LocalStore, OpportunityStore},
};

/// oppscout - Student Opportunity Discovery
#[derive(Parser, Debug)]
#[command(name = "oppscout", version, about = "Student opportunity discovery")]

struct Cli {
    /// Path to storage directory containing config and cached data
    #[arg(short, long, default_value = "storage")]
    storage_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search the web for opportunities and cache the results
    Search {
        /// Free-text search query
        query: String,

        /// Restrict results to one opportunity type
        #[arg(long = "type")]
        opportunity_type: Option<OpportunityType>,

        /// Year appended to the query (e.g. 2026)
        #[arg(long)]
        year: Option<String>,
    },

    /// List previously cached opportunities, newest first
    Cached {
        /// Maximum number of records to return
        #[arg(long, default_value_t = 20)]
        limit: usize,

        /// Only records of this opportunity type
        #[arg(long = "type")]
        opportunity_type: Option<OpportunityType>,
    },

    /// Show one cached opportunity by id
    Get {
        /// Storage id as reported by search results
        id: String,
    },

    /// Suggest search queries for a student profile
    Suggest {
        /// Path to a profile JSON file
        #[arg(long)]
        profile: PathBuf,
    },

    /// Validate configuration files
    Validate,

    /// Show cache info
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    log::info!("oppscout starting...");

    // Load configurations
    let config_path = cli.storage_dir.join("config.toml");
    let config = Config::load_or_default(&config_path);

    log::info!("Loaded configuration from {}", cli.storage_dir.display());

    let store = Arc::new(LocalStore::new(&cli.storage_dir));

    match cli.command {
        Command::Search {
            query,
            opportunity_type,
            year,
        } => {
            let search = SearchClient::from_env(&config.search)?;
            let service = DiscoveryService::new(search, store);

            let mut request = SearchRequest::new(query);
            request.opportunity_type = opportunity_type;
            request.deadline_year = year;

            let outcome = service.search_opportunities(&request).await?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);

            log::info!("Found {} opportunities", outcome.count);
        }

        Command::Cached {
            limit,
            opportunity_type,
        } => {
            let opportunities = store.cached_opportunities(limit, opportunity_type).await?;
            let outcome = CachedOutcome {
                count: opportunities.len(),
                opportunities,
            };
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }

        Command::Get { id } => match store.get_opportunity(&id).await? {
            Some(opportunity) => println!("{}", serde_json::to_string_pretty(&opportunity)?),
            None => {
                log::error!("No opportunity with id {}", id);
                return Err(oppscout::error::AppError::validation(format!(
                    "Opportunity not found: {id}"
                )));
            }
        },

        Command::Suggest { profile } => {
            let profile = StudentProfile::load(&profile)?;
            let suggestions = suggest(&profile);
            println!("{}", serde_json::to_string_pretty(&suggestions)?);
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");

            log::info!("All validations passed!");
        }

        Command::Info => {
            log::info!("Storage directory: {}", cli.storage_dir.display());

            let collection_path = cli.storage_dir.join("opportunities.json");
            if collection_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&collection_path) {
                    if let Ok(records) = serde_json::from_str::<serde_json::Value>(&content) {
                        if let Some(list) = records.as_array() {
                            log::info!("Cached opportunities: {}", list.len());

                            let latest = list
                                .iter()
                                .filter_map(|r| r.get("discovered_date").and_then(|d| d.as_str()))
                                .max();
                            if let Some(latest) = latest {
                                log::info!("Most recent discovery: {}", latest);
                            }
                        }
                    }
                }
            } else {
                log::info!("No opportunities cached yet.");
            }
        }
    }

    log::info!("Done!");

    Ok(())
}
