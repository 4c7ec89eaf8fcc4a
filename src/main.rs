use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// counsel - Legal practice website backend
#[derive(Parser)]
#[command(name = "counsel")]
#[command(about = "Website backend for a legal practice", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Check a contact submission JSON file against the contact form schema
    Check {
        /// Path to the submission file
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = counsel::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    counsel::observability::init_observability(
        "counsel",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => counsel::server::serve(config, host, port).await,
        Commands::Check { file } => check_command(config, file),
    }
}

fn check_command(config: counsel::Config, file: PathBuf) -> Result<()> {
    counsel::check::report(
        &file,
        &config.contact.country_code,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )
}
