//! # CF API Version Type
//!
//! File: cli/src/core/version.rs
//!
//! ## Overview
//!
//! This module defines `ApiVersion`, the structured representation of the
//! platform API version advertised by a targeted endpoint. Commands that are
//! only available from a certain API level compare the targeted version
//! against a minimum using this type.
//!
//! Comparison is performed field by field (major, then minor, then patch).
//! Comparing the raw strings would be wrong: `"3.9.0"` sorts *after*
//! `"3.27.0"` lexicographically, but is the older release.
//!
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A platform API version, e.g. `3.27.0`.
///
/// Field order matters: the derived `Ord` compares `major`, then `minor`,
/// then `patch`, which is exactly the semantic-version ordering we need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ApiVersion {
    /// Major version component.
    pub major: u32,
    /// Minor version component.
    pub minor: u32,
    /// Patch version component.
    pub patch: u32,
}

impl ApiVersion {
    /// Constructs an `ApiVersion` from its numeric components.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

/// Error returned when a version string is not `MAJOR.MINOR.PATCH` with
/// numeric components.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid API version string: '{0}'")]
pub struct ParseVersionError(String);

impl FromStr for ApiVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut parts = s.split('.');
        // Exactly three dot-separated components; anything else is malformed.
        let (Some(major), Some(minor), Some(patch), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(ParseVersionError(s.to_string()));
        };
        let parse_component = |component: &str| {
            component
                .parse::<u32>()
                .map_err(|_| ParseVersionError(s.to_string()))
        };
        Ok(Self {
            major: parse_component(major)?,
            minor: parse_component(minor)?,
            patch: parse_component(patch)?,
        })
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
