//! # CF CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! This module provides shared utility functions used across the
//! integration test files (`share_service.rs`, `api.rs`, `target.rs`).
//! This avoids code duplication in the test suite.
//!
//! Integration tests are located in the `cli/tests/` directory and each
//! `.rs` file in that directory (that isn't a module like this one) is
//! compiled as a separate test crate linked against the main `cf` binary
//! crate.
//!
//! The central fixture is [`TestSession`]: a temporary directory used as
//! `CF_HOME`, with helpers that write a session `config.toml` describing a
//! particular environment state (endpoint targeted or not, logged in or
//! not, org/space targeted or not). Every command under test runs with
//! `CF_HOME` pointed at the fixture, so tests never touch — and are never
//! influenced by — the developer's real session.
//!

// Allow potentially unused code in this common module, as different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

/// A disposable `CF_HOME` holding one session configuration.
pub struct TestSession {
    home: TempDir,
}

impl TestSession {
    /// An empty session: no config file at all, so no endpoint is set.
    pub fn empty() -> Self {
        let home = TempDir::new().expect("Failed to create temporary CF_HOME");
        Self { home }
    }

    /// A session with the given `config.toml` contents.
    pub fn with_config(config: &str) -> Self {
        let session = Self::empty();
        fs::write(session.home.path().join("config.toml"), config)
            .expect("Failed to write session config fixture");
        session
    }

    /// Endpoint targeted, but the endpoint never advertised an API version.
    pub fn endpoint_without_version() -> Self {
        Self::with_config(
            r#"
            [target]
            api_endpoint = "https://api.example.com"
            "#,
        )
    }

    /// Endpoint targeted with the given API version; not logged in.
    pub fn logged_out(api_version: &str) -> Self {
        Self::with_config(&format!(
            r#"
            [target]
            api_endpoint = "https://api.example.com"
            api_version = "{}"
            "#,
            api_version
        ))
    }

    /// Logged in against a current endpoint, but no org targeted.
    pub fn logged_in_without_org() -> Self {
        Self::with_config(
            r#"
            [target]
            api_endpoint = "https://api.example.com"
            api_version = "3.27.0"

            [auth]
            username = "admin"
            access_token = "bearer integration-test-token"
            "#,
        )
    }

    /// Logged in with an org targeted, but no space.
    pub fn logged_in_without_space() -> Self {
        Self::with_config(
            r#"
            [target]
            api_endpoint = "https://api.example.com"
            api_version = "3.27.0"
            org = "my-org"

            [auth]
            username = "admin"
            access_token = "bearer integration-test-token"
            "#,
        )
    }

    /// A fully set up session: endpoint, version, login, org, and space.
    pub fn ready() -> Self {
        Self::with_config(
            r#"
            [target]
            api_endpoint = "https://api.example.com"
            api_version = "3.27.0"
            org = "my-org"
            space = "my-space"

            [auth]
            username = "admin"
            access_token = "bearer integration-test-token"
            "#,
        )
    }

    /// An `assert_cmd::Command` for the `cf` binary with `CF_HOME` pointed
    /// at this fixture.
    pub fn cf(&self) -> Command {
        let mut cmd = cf_cmd();
        cmd.env("CF_HOME", self.home.path());
        cmd
    }
}

/// # Get CF Command (`cf_cmd`)
///
/// Helper function to create an `assert_cmd::Command` instance pointing to
/// the compiled `cf` binary target for the current test run.
///
/// This ensures tests execute the correct binary being built.
///
/// ## Panics
/// Panics if the `cf` binary cannot be found via `Command::cargo_bin`.
pub fn cf_cmd() -> Command {
    Command::cargo_bin("cf").expect("Failed to find cf binary for testing")
}
