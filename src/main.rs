//! Mission Control - tool backend for a voice-driven launch assistant
//!
//! Entry point for the stdio tool bridge and the HTTP status API.

mod cli;

use clap::{Parser, Subcommand};
use mission_control_core::{config::MissionConfig, error::Result};
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::{self, EnvFilter};

#[derive(Parser)]
#[command(name = "mission-control")]
#[command(about = "Mission state, notifications and tool dispatch for a voice launch assistant", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Set log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Configuration file (defaults to <config dir>/mission-control/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve tools over stdio (JSON-RPC 2.0)
    Bridge {
        /// Also start the HTTP status API
        #[arg(long)]
        with_api: bool,

        /// Status API address (overrides configuration)
        #[arg(long)]
        addr: Option<String>,
    },

    /// Start the HTTP status API
    Serve {
        /// Server address (overrides configuration)
        #[arg(long)]
        addr: Option<String>,
    },

    /// Print the assistant's system instructions
    Instructions,

    /// Print registered tool schemas as JSON
    Schemas,

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Show the default configuration file path
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Request logs from tower_http only at warn and above
    let filter = EnvFilter::new(format!(
        "mission_control={},mission_control_core={},tower_http=warn",
        level.as_str().to_lowercase(),
        level.as_str().to_lowercase()
    ));

    // stdout belongs to the bridge
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    debug!("Mission Control v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = MissionConfig::load(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Bridge { with_api, addr }) => cli::bridge::handle(with_api, addr, &config).await,
        Some(Commands::Serve { addr }) => cli::serve::handle(addr, &config).await,
        Some(Commands::Instructions) => {
            cli::instructions::handle(&config);
            Ok(())
        }
        Some(Commands::Schemas) => cli::schemas::handle(&config),
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => cli::config::show(&config),
            ConfigAction::Path => {
                cli::config::path();
                Ok(())
            }
        },
        None => cli::bridge::handle(false, None, &config).await,
    }
}
