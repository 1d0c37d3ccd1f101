mod page;
mod search;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "atlas-cli")]
#[command(about = "Address-to-map bridge command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Geocode an address and print the viewer URL it resolves to.
    Search { address: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = atlas_core::config::load_app_config()?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.log_level))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Search { address } => search::run(&config, &address).await,
    }
}
