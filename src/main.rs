//! Name Request wizard CLI
//!
//! Fills in the wizard form from the command line and runs a name analysis
//! (or fetches usage statistics). Ctrl+C stops an analysis in flight.

use anyhow::Result;
use clap::Parser;
use namerequest::state::Location;
use namerequest::{AnalyzeOutcome, HttpNameRequestApi, NewRequestStore, WizardConfig};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "namerequest", about = "Check a business name with the Name Request service")]
struct Cli {
    /// Proposed business name
    #[arg(required_unless_present = "stats")]
    name: Option<String>,

    /// Jurisdiction: BC, CA or IN
    #[arg(short, long, default_value = "BC")]
    location: Location,

    /// Business structure code (defaults to the location's default)
    #[arg(short, long)]
    entity_type: Option<String>,

    /// Request type code
    #[arg(short, long, default_value = "NEW")]
    request_type: String,

    /// Name request API base URL (overrides the environment and config file)
    #[arg(long)]
    api_url: Option<String>,

    /// Fetch usage statistics instead of analyzing a name
    #[arg(long)]
    stats: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "namerequest=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let config = WizardConfig::load()?.with_api_url_override(cli.api_url.clone());
    let api = HttpNameRequestApi::from_config(&config)?;
    tracing::debug!(api_url = api.base_url(), "using name request API");
    let store = NewRequestStore::new(api);

    if cli.stats {
        let stats = store.get_stats().await?;
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    {
        let mut state = store.state();
        state.set_location(cli.location);
        state.set_request_type(&cli.request_type);
        if let Some(entity_type) = &cli.entity_type {
            state.set_entity_type(entity_type);
        }
        state.set_name(cli.name.as_deref().unwrap_or_default());
    }

    let analysis = store.start_analyze_name();
    tokio::pin!(analysis);
    let outcome = tokio::select! {
        outcome = &mut analysis => outcome?,
        _ = tokio::signal::ctrl_c() => {
            store.stop_analyze_name();
            analysis.await?
        }
    };

    match outcome {
        AnalyzeOutcome::Completed(result) => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        AnalyzeOutcome::Invalid(errors) => {
            for error in &errors {
                eprintln!("{}: {error}", error.tag());
            }
            std::process::exit(2);
        }
        AnalyzeOutcome::Cancelled | AnalyzeOutcome::Superseded => {
            eprintln!("Name analysis cancelled");
            std::process::exit(130);
        }
    }

    Ok(())
}
