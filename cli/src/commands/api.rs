//! # CF API Command
//!
//! File: cli/src/commands/api.rs
//!
//! ## Overview
//!
//! This module implements `cf api` as a read-only view: it prints the
//! targeted API endpoint and the API version it advertised at target time,
//! or a hint when no endpoint is set. Setting and unsetting the endpoint is
//! part of the login/target flows, which live outside this crate.
//!
//! Viewing the endpoint has no preconditions — it is useful precisely when
//! the session is otherwise empty — so this command runs no requirement
//! checks and always exits 0.
//!
use crate::{
    common::ui::{self, HelpText},
    core::{config, error::Result},
};
use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

/// Help block for `cf api`.
pub const HELP: HelpText = HelpText {
    name: "api",
    description: "View the targeted API endpoint",
    usage: "cf api",
    options: &[],
    see_also: "auth, login, target",
};

/// # API Arguments (`ApiArgs`)
/// `cf api` takes no operands; only the explicit help flag.
#[derive(Parser, Debug)]
#[command(about = "View the targeted API endpoint", disable_help_flag = true)]
pub struct ApiArgs {
    /// Print command usage and exit.
    #[arg(short = 'h', long = "help")]
    help: bool,
}

/// # Handle API Command (`handle_api`)
/// Prints the targeted endpoint and version, or the not-set hint.
pub async fn handle_api(args: ApiArgs) -> Result<()> {
    info!("Handling api command...");
    debug!("api args: {:?}", args);

    if args.help {
        ui::print_help(&HELP);
        return Ok(());
    }

    let cfg = config::load_config().context("Failed to load session configuration")?;
    let env = cfg.snapshot();

    match env.api_endpoint {
        Some(endpoint) => {
            println!("api endpoint:   {}", endpoint);
            if let Some(version) = env.api_version {
                println!("api version:    {}", version);
            }
        }
        None => {
            println!("No api endpoint set. Use 'cf api' to set an endpoint");
        }
    }

    Ok(())
}
