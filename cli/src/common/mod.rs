//! # CF CLI Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! This module serves as the root and organizational entry point for shared
//! utility modules used throughout the cf CLI. Centralizing these under the
//! `common::` namespace keeps a clear separation between command-specific
//! logic (`commands::`) and core infrastructure (`core::`).
//!
//! ## Architecture
//!
//! - **`ui`**: Terminal output helpers — the experimental warning, the
//!   `FAILED` reporter, the `OK` line, and the sectioned help-block
//!   renderer shared by every command.
//!
pub mod ui;
