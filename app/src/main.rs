#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use whenwhere_config::{Config, LoggingConfig};

mod command;

use command::{
    CommandStrategy, InfoStrategy, InitStrategy, ParseInput, ParseStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "whenwhere")]
#[command(about = "Extract date/time and location from text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract from text and print the JSON result
    Parse {
        /// Text to analyze; read from stdin when omitted
        text: Option<String>,

        /// Reference time in epoch milliseconds for relative expressions
        #[arg(short = 'b', long, allow_negative_numbers = true)]
        base_millis: Option<i64>,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },
    /// Initialize configuration
    Init,
    /// Show configuration and registered strategies
    Info,
    /// Show version
    Version,
}

/// Filter for the configured level, or the default level if it does not parse.
fn build_filter(level: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(level) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(LoggingConfig::default().level), Some(e)),
    }
}

fn init_tracing(level: &str) {
    let (filter, rejected) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, None),
        Err(_) => build_filter(level),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(e) = rejected {
        warn!(
            "Invalid logging.level {level:?} ({e}), using {:?}",
            LoggingConfig::default().level
        );
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load();
    let level = config.as_ref().map_or_else(
        |_| LoggingConfig::default().level,
        |c| c.logging.level.clone(),
    );
    init_tracing(&level);
    debug!("Log level: {level}");

    match cli.command {
        Commands::Parse {
            text,
            base_millis,
            pretty,
        } => {
            let config = config?;
            ParseStrategy
                .execute(ParseInput {
                    text,
                    base_millis,
                    pretty: pretty || config.output.pretty,
                })
                .await?;
        }
        Commands::Init => InitStrategy.execute(()).await?,
        Commands::Info => InfoStrategy.execute(config?).await?,
        Commands::Version => VersionStrategy.execute(()).await?,
    }

    Ok(())
}
