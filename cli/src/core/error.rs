//! # CF CLI Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types and error handling mechanisms used
//! throughout the cf CLI. It provides a consistent approach to error
//! management with detailed error information and context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `CfError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! Command *requirement* failures (missing arguments, environment
//! preconditions) carry an exact user-facing message contract and live in
//! their own enum, `core::requirements::RequirementError`. The variants here
//! cover infrastructure concerns instead.
//!
//! ## Examples
//!
//! Using the error system:
//!
//! ```rust,ignore
//! // Add context to errors using anyhow
//! let cfg = config::load_config().context("Failed to load session configuration")?;
//!
//! // Signal a failure that has already been printed for the user
//! ui::failed(&message);
//! return Err(CfError::CommandFailed.into());
//! ```
//!
use thiserror::Error;

/// Custom error type for the cf CLI.
#[derive(Error, Debug)]
pub enum CfError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// The command has already reported its failure on the terminal
    /// (e.g. a `FAILED` line plus a message on stderr). `main` must exit
    /// non-zero without printing anything further.
    #[error("command failed")]
    CommandFailed,
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = CfError::Config("Missing section [target]".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: Missing section [target]"
        );

        assert_eq!(CfError::CommandFailed.to_string(), "command failed");
    }
}
