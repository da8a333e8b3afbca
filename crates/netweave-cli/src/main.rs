//! Netweave CLI - intent-based network configuration pipeline
//!
//! This CLI gives operators a terminal interface to:
//! - Translate a declarative intent into a configuration document
//! - Deploy a document to a device, with simulation fallback
//! - Probe device connectivity and capabilities
//! - Run a banner-only mock device for reachability checks
//! - Verify deployment health against a metrics backend

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod output;

use commands::{apply, deploy, mock, probe, translate, verify, EndpointArgs};
use error::CliResult;

/// Netweave CLI application
#[derive(Parser)]
#[command(name = "netweave")]
#[command(about = "Netweave - intent-based network configuration pipeline", long_about = None)]
#[command(version)]
struct Cli {
    /// Output format (table, json)
    #[arg(short, long, default_value = "table")]
    output: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Translate an intent file into a configuration document
    Translate(translate::TranslateArgs),

    /// Deploy a persisted configuration document to a device
    Deploy(deploy::DeployArgs),

    /// Translate and deploy in one run
    Apply(apply::ApplyArgs),

    /// Open a protocol session and report peer capabilities
    Probe(EndpointArgs),

    /// Query the monitoring backend for post-deployment health
    Verify(verify::VerifyArgs),

    /// Run a banner-only mock device for reachability checks
    MockDevice(mock::MockDeviceArgs),

    /// Show the resolved endpoint configuration
    Config(EndpointArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let result = run(cli).await;
    if let Err(err) = result {
        output::print_error(&err.to_string());
        std::process::exit(err.exit_code());
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Translate(args) => translate::execute(args),
        Commands::Deploy(args) => deploy::execute(args, cli.output).await,
        Commands::Apply(args) => apply::execute(args, cli.output).await,
        Commands::Probe(args) => probe::execute(args).await,
        Commands::Verify(args) => verify::execute(args, cli.output).await,
        Commands::MockDevice(args) => mock::execute(args).await,
        Commands::Config(args) => {
            let config = args.to_config();
            println!("host:     {}", config.host);
            println!("port:     {}", config.port);
            println!("username: {}", config.username);
            println!("password: {}", "*".repeat(config.password.len()));
            println!("timeout:  {}s", config.timeout.as_secs());
            Ok(())
        }
    }
}
