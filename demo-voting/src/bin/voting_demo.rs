//! This binary runs a scripted election and prints its outcome.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sov_voting_demo::{from_toml_path, run_demo, DemoConfig};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the demo configuration.
    #[arg(default_value_os_t = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("voting_config.toml"))]
    config: PathBuf,

    /// Overrides the number of voters from the configuration. At most twice
    /// the configured cap.
    #[arg(long)]
    voters: Option<u64>,

    /// Prints the report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize a logger for the demo
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into()) // If no logging config is set. default to `info` level logs
                .from_env_lossy(), // Parse the log level from the RUST_LOG env var if set
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Unable to set global default subscriber")?;

    let args = Args::parse();
    info!("Reading demo config from {:?}", args.config);

    let config: DemoConfig =
        from_toml_path(&args.config).context("Failed to read demo configuration")?;
    let voters = args.voters.unwrap_or_else(|| config.voter_count());

    let report = run_demo(&config, voters).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }

    Ok(())
}
