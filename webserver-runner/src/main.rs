use clap::Parser;

use gallery_server::{run_options::RunOptions, start_server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = RunOptions::parse();

    tracing::debug!(command = ?args.command, "Parsed command line");
    log::info!("Starting server...");

    match args.command {
        gallery_server::run_options::RunCommand::Server(s) => start_server(s).await,
    }
}
