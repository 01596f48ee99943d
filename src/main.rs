use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

/// The main entry point for the sword game backend.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file, if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Serve(args) => handle_serve(args).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// The persistence/API service for the game's trading and ranking features.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server.
    Serve(ServeArgs),
}

#[derive(Parser)]
struct ServeArgs {
    /// Override the configured listen port.
    #[arg(long)]
    port: Option<u16>,
}

// ==============================================================================
// Serve Command Logic
// ==============================================================================

/// Loads the configuration, opens the configured record store, and serves
/// the API until the process is stopped.
async fn handle_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = configuration::load_config()?;
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let store = web_server::build_store(&config).await?;

    web_server::run_server(addr, store).await
}
