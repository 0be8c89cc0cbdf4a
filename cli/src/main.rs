//! # CF CLI Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the cf CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to appropriate command handlers
//!
//! ## Architecture
//!
//! The application follows a modular command structure:
//! - Each command (`share-service`, `api`, `target`) is defined as a
//!   variant in the `Commands` enum
//! - Commands are mapped to handler functions in their respective modules
//! - All errors are propagated to this level for consistent handling
//!
//! Command handlers report their own failures through `common::ui` (the
//! `FAILED` marker plus a message on stderr) and then return the
//! `CfError::CommandFailed` sentinel; this level exits 1 without printing
//! anything further for those. Any other error is printed once here.
//!
//! ## Examples
//!
//! Basic usage:
//!
//! ```bash
//! # Get help
//! cf --help
//!
//! # Run a command with increased verbosity
//! cf -vv share-service my-db -s other-space
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to appropriate command handler
//! 4. Map any error to a non-zero exit
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

// Declare the top-level modules of the CLI crate.
mod commands; // Handles specific command logic (share-service, api, target).
mod common; // Contains shared utilities (terminal output).
mod core; // Core infrastructure (errors, config, requirements, version).

use crate::core::error::CfError;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "cf",
    about = "A command line tool to interact with a Cloud Foundry style platform",
    long_about = "Interact with a Cloud Foundry style platform: inspect the targeted\n\
                  endpoint, org and space, and share service instances between spaces.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available commands.
#[derive(Parser, Debug)]
enum Commands {
    /// View the targeted API endpoint.
    Api(commands::api::ApiArgs),
    /// Share a service instance with another space.
    /// `v3-share-service` is kept as a legacy alias from when the command
    /// only existed against the v3 API.
    #[command(name = "share-service", alias = "v3-share-service")]
    ShareService(commands::share_service::ShareServiceArgs),
    /// View the targeted org and space.
    Target(commands::target::TargetArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Api(args) => commands::api::handle_api(args).await,
        Commands::ShareService(args) => {
            commands::share_service::handle_share_service(args).await
        }
        Commands::Target(args) => commands::target::handle_target(args).await,
    };

    if let Err(e) = command_result {
        if matches!(e.downcast_ref::<CfError>(), Some(CfError::CommandFailed)) {
            // Already reported on the terminal by the command handler.
            tracing::debug!("Command failed; details already reported.");
        } else {
            tracing::error!("Command execution failed: {:?}", e);
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }

    Ok(())
}
