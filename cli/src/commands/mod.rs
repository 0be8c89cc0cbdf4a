//! # CF CLI Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the commands that comprise the cf CLI. It serves
//! as the central point for importing and re-exporting command modules to
//! make them accessible to the main application entry point (`main.rs`).
//!
//! ## Architecture
//!
//! Each command lives in its own module and defines:
//! - a clap arguments struct parsed by the dispatcher in `main.rs`;
//! - a `HELP` block rendered by `common::ui` for `--help` and usage errors;
//! - an async `handle_*` function implementing the command.
//!
//! Commands that act against the platform run the requirement gate
//! (`core::requirements`) before doing anything else; read-only commands
//! run the prefix of the gate they need.
//!
/// Implements `cf api`: view the targeted API endpoint and version.
pub mod api;
/// Implements `cf share-service` (alias `v3-share-service`): share a
/// service instance with another space.
pub mod share_service;
/// Implements `cf target`: view the targeted org and space.
pub mod target;
