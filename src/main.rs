use clap::{Parser, Subcommand};
use officebot::config::DISTRICT_OFFICES_URL;
use officebot::prelude::*;
use officebot::{dataset, lint, reconcile, roster, scrape};
use std::path::PathBuf;
use tracing::info;

/// Maintain district office addresses for the congress-legislators dataset
#[derive(Parser, Debug)]
#[command(name = "officebot")]
#[command(about = "Scrape member websites and reconcile district office addresses")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrape every sitting member's website into the scraped office list
    Scrape {
        /// Number of pages fetched in parallel
        #[arg(long)]
        parallel: Option<usize>,

        /// Where to write the scraped office list
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Re-scrape one url and patch its entry in the scraped office list
    ScrapeOne {
        /// The member website url to re-scrape
        url: String,
    },

    /// Check scraped coverage against the roster of sitting members
    Check {
        /// Scraped office list to check
        #[arg(long)]
        offices: Option<PathBuf>,
    },

    /// Merge the scraped office list into the canonical dataset
    Reconcile {
        /// Scraped office list to merge
        #[arg(long)]
        offices: Option<PathBuf>,

        /// Where to write the updated dataset
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Sort the updated dataset and backfill missing cross-reference ids
    Lint {
        /// Dataset file to lint in place
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let mut config = Config::from_env();

    match args.command {
        Command::Scrape { parallel, output } => {
            if let Some(parallel) = parallel {
                config.parallel = parallel;
            }
            if let Some(output) = output {
                config.offices_path = output;
            }
            config.require_api_key()?;
            config.validate()?;

            let mut results = scrape::scrape_all(&config).await?;
            dataset::save_scrape_results(&config.offices_path, &mut results)?;
            println!(
                "wrote {} scraped entries to {}",
                results.len(),
                config.offices_path.display()
            );
            Ok(())
        }
        Command::ScrapeOne { url } => {
            config.require_api_key()?;
            scrape::scrape_one(&config, &url).await?;
            println!("updated entry for {}", url);
            Ok(())
        }
        Command::Check { offices } => {
            if let Some(offices) = offices {
                config.offices_path = offices;
            }
            run_check(&config).await
        }
        Command::Reconcile { offices, output } => {
            if let Some(offices) = offices {
                config.offices_path = offices;
            }
            if let Some(output) = output {
                config.updated_path = output;
            }
            run_reconcile(&config).await
        }
        Command::Lint { file } => {
            if let Some(file) = file {
                config.updated_path = file;
            }
            lint::lint_dataset(&config).await?;
            Ok(())
        }
    }
}

async fn run_check(config: &Config) -> anyhow::Result<()> {
    let results = dataset::load_scrape_results(&config.offices_path)?;

    let client = reqwest::Client::new();
    let urls = roster::current_member_urls(&client).await;

    let coverage = roster::check_coverage(&urls, &results);
    for bioguide in &coverage.missing {
        println!("no scraped offices for {}", bioguide);
    }
    for bioguide in &coverage.stale {
        println!("scraped entry for {} who is no longer on the roster", bioguide);
    }

    if !coverage.is_complete() {
        anyhow::bail!(
            "coverage incomplete: {} missing, {} stale",
            coverage.missing.len(),
            coverage.stale.len()
        );
    }

    println!("scraped dataset covers all {} sitting members", results.len());
    Ok(())
}

async fn run_reconcile(config: &Config) -> anyhow::Result<()> {
    let results = dataset::load_scrape_results(&config.offices_path)?;

    let client = reqwest::Client::new();
    let mut legislators = dataset::fetch_district_offices(&client, DISTRICT_OFFICES_URL).await?;

    let filter = CapitalFilter::default();
    let stats = reconcile::apply_scrape(&mut legislators, &results, &filter);

    info!(
        "found {} new offices, removed {} old offices, added {} new legislators",
        stats.new_offices, stats.removed_offices, stats.new_legislators
    );

    dataset::save_district_offices(&config.updated_path, &legislators)?;
    println!(
        "updated dataset written to {}",
        config.updated_path.display()
    );
    Ok(())
}
