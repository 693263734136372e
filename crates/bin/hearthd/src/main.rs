//! # hearthd
//!
//! Loads configuration, initialises logging, wires the services and runs the
//! sub-command given as first argument (`status` when omitted).

use hearthd::config::Config;
use hearthd::{Command, Hearth};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let command = Command::from_args(std::env::args().skip(1))?;
    tracing::info!(?command, database_url = %config.database.url, "starting");

    let hearth = Hearth::connect(&config.database).await?;
    let report = match command {
        Command::Kinds => hearth.kinds_report(),
        Command::Status => hearth.status_report().await?,
    };
    print!("{report}");

    Ok(())
}
