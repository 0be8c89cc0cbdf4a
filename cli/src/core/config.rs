//! # CF Session Configuration
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements loading of the cf session configuration: the file
//! that records which API endpoint is targeted, the advertised API version,
//! the access token from the last login, and the currently targeted org and
//! space. Commands read this file once per invocation and never write it
//! here — mutation happens through the login/target flows, which are not
//! part of this crate's surface.
//!
//! ## Architecture
//!
//! The configuration system follows these principles:
//! - One configuration source per invocation, located in order of precedence:
//!   1. `$CF_HOME/config.toml` when the `CF_HOME` environment variable is set
//!   2. `config.toml` in the platform-specific user config directory
//! - A missing file is not an error: it yields an empty session (no endpoint
//!   targeted), which the requirements gate then reports appropriately.
//! - Structured serde data models ensure type safety; unknown keys are
//!   rejected so typos surface instead of silently deactivating a session.
//! - Commands consume the configuration through an immutable
//!   [`EnvironmentSnapshot`](crate::core::requirements::EnvironmentSnapshot),
//!   never through the raw file contents.
//!
//! ## Examples
//!
//! Loading and using the session state:
//!
//! ```rust,ignore
//! let cfg = config::load_config()?;
//! let env = cfg.snapshot();
//!
//! if env.logged_in {
//!     println!("user:           {}", env.username.as_deref().unwrap_or("unknown"));
//! }
//! ```
//!
use crate::core::{
    error::{CfError, Result},
    requirements::EnvironmentSnapshot,
    version::ApiVersion,
};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Environment variable overriding the directory that holds `config.toml`.
pub const HOME_ENV_VAR: &str = "CF_HOME";

const CONFIG_FILENAME: &str = "config.toml";

/// Represents the session configuration structure, loaded from the TOML file.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub target: TargetConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

/// The `[target]` section: endpoint and org/space targeting state.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct TargetConfig {
    /// Targeted API endpoint URL. Empty or absent means no endpoint set.
    pub api_endpoint: Option<String>,
    /// API version advertised by the endpoint, recorded at target time.
    pub api_version: Option<String>,
    /// Currently targeted org.
    pub org: Option<String>,
    /// Currently targeted space.
    pub space: Option<String>,
}

/// The `[auth]` section: credentials recorded by the last login.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    /// Display name of the logged-in user.
    pub username: Option<String>,
    /// Opaque access token. Presence of a token means "logged in".
    pub access_token: Option<String>,
}

impl Config {
    /// Builds the immutable session snapshot the requirements gate consumes.
    ///
    /// Empty strings are normalized to "not set" — the login and target
    /// flows historically blank fields out rather than removing them. A
    /// malformed `api_version` is treated as absent (and logged), so it
    /// fails the minimum-version requirement rather than aborting the
    /// command outright.
    pub fn snapshot(&self) -> EnvironmentSnapshot {
        let api_version = non_empty(&self.target.api_version)
            .and_then(|raw| match raw.parse::<ApiVersion>() {
                Ok(version) => Some(version),
                Err(e) => {
                    warn!("Ignoring malformed API version in session config: {}", e);
                    None
                }
            });
        EnvironmentSnapshot {
            api_endpoint: non_empty(&self.target.api_endpoint),
            api_version,
            logged_in: non_empty(&self.auth.access_token).is_some(),
            username: non_empty(&self.auth.username),
            org: non_empty(&self.target.org),
            space: non_empty(&self.target.space),
        }
    }
}

/// Treats `None` and `Some("")` identically as "not set".
fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Loads the session configuration for the current invocation.
///
/// A missing file yields `Config::default()` (an empty session); an
/// unreadable or unparsable file is a hard error, since acting on a
/// half-read session could target the wrong org or space.
pub fn load_config() -> Result<Config> {
    match config_file_path() {
        Some(path) if path.is_file() => {
            info!("Loading session configuration from: {}", path.display());
            load_config_from_path(&path)
        }
        Some(path) => {
            debug!(
                "Session configuration file not found at {}; starting with an empty session.",
                path.display()
            );
            Ok(Config::default())
        }
        None => {
            warn!("Could not determine a configuration directory; starting with an empty session.");
            Ok(Config::default())
        }
    }
}

/// Resolves the path of the session config file.
///
/// `CF_HOME` takes precedence so tests and multi-session scripting can pin
/// the session directory; otherwise the platform config directory is used.
fn config_file_path() -> Option<PathBuf> {
    if let Ok(home) = std::env::var(HOME_ENV_VAR) {
        if !home.is_empty() {
            debug!("Using session directory from {}: {}", HOME_ENV_VAR, home);
            return Some(PathBuf::from(home).join(CONFIG_FILENAME));
        }
    }
    ProjectDirs::from("org", "cloudfoundry", "cf")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    let cfg: Config = toml::from_str(&content).map_err(|e| {
        anyhow!(CfError::Config(format!(
            "Failed to parse TOML from file {}: {}",
            path.display(),
            e
        )))
    })?;
    debug!("Loaded session configuration: {:?}", cfg);
    Ok(cfg)
}
