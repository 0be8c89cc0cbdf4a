//! # CF Target Command
//!
//! File: cli/src/commands/target.rs
//!
//! ## Overview
//!
//! This module implements `cf target` as a read-only view of the session's
//! targeting state: endpoint, version, user, org, and space. Changing the
//! target is part of the login/target flows, which live outside this crate.
//!
//! Unlike `cf api`, this view is only meaningful with a session: it runs
//! the endpoint and login requirement checks — the same leading checks, in
//! the same order, that the platform-acting commands run — and reports
//! failures through the same reporter.
//!
use crate::{
    common::ui::{self, HelpText},
    core::{
        config,
        error::{CfError, Result},
        requirements,
    },
};
use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

/// Help block for `cf target`.
pub const HELP: HelpText = HelpText {
    name: "target",
    description: "View the targeted org and space",
    usage: "cf target",
    options: &[],
    see_also: "create-org, create-space, login, orgs, spaces",
};

/// # Target Arguments (`TargetArgs`)
/// `cf target` takes no operands; only the explicit help flag.
#[derive(Parser, Debug)]
#[command(about = "View the targeted org and space", disable_help_flag = true)]
pub struct TargetArgs {
    /// Print command usage and exit.
    #[arg(short = 'h', long = "help")]
    help: bool,
}

/// # Handle Target Command (`handle_target`)
/// Displays the current targeting state, after checking that an endpoint is
/// set and the user is logged in (in that order).
pub async fn handle_target(args: TargetArgs) -> Result<()> {
    info!("Handling target command...");
    debug!("target args: {:?}", args);

    if args.help {
        ui::print_help(&HELP);
        return Ok(());
    }

    let cfg = config::load_config().context("Failed to load session configuration")?;
    let env = cfg.snapshot();

    // Same leading checks, same order, as the platform-acting commands.
    let preconditions =
        requirements::check_api_endpoint(&env).and_then(|()| requirements::check_logged_in(&env));
    if let Err(failure) = preconditions {
        debug!("Requirement check failed: {:?}", failure);
        ui::report_requirement_failure(&failure, &HELP);
        return Err(CfError::CommandFailed.into());
    }

    println!(
        "api endpoint:   {}",
        env.api_endpoint.as_deref().unwrap_or_default()
    );
    if let Some(version) = env.api_version {
        println!("api version:    {}", version);
    }
    println!("user:           {}", env.username.as_deref().unwrap_or("unknown"));

    match (&env.org, &env.space) {
        (Some(org), Some(space)) => {
            println!("org:            {}", org);
            println!("space:          {}", space);
        }
        (Some(org), None) => {
            println!("org:            {}", org);
            println!("No space targeted, use 'cf target -s SPACE'");
        }
        (None, _) => {
            println!("No org or space targeted, use 'cf target -o ORG -s SPACE'");
        }
    }

    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_operands() {
        let args = TargetArgs::try_parse_from(["target"]).unwrap();
        assert!(!args.help);
    }

    #[test]
    fn test_parse_help_flag() {
        let args = TargetArgs::try_parse_from(["target", "--help"]).unwrap();
        assert!(args.help);
    }
}
