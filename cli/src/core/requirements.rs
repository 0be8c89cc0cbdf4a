//! # CF Command Requirements Gate
//!
//! File: cli/src/core/requirements.rs
//!
//! ## Overview
//!
//! Every cf command that talks to the platform must pass a sequence of
//! preconditions before its action runs: the arguments must be structurally
//! complete, an API endpoint must be targeted, the endpoint must advertise a
//! sufficient API version, the user must be logged in, and an org and space
//! must be targeted. This module implements that gate as a fixed, ordered
//! sequence of pure predicate evaluations over an immutable snapshot of the
//! session state.
//!
//! ## Architecture
//!
//! - `EnvironmentSnapshot`: read-only view of the session/target state,
//!   built once per invocation from the config file (`core::config`).
//! - `ShareServiceRequest`: the parsed invocation of `cf share-service`.
//! - `RequirementError`: one variant per failed check. The `#[error]`
//!   strings *are* the user-facing contract; tests assert them verbatim.
//! - `validate_share_service`: evaluates the checks in order and returns
//!   the first failure. The individual environment checks are small free
//!   functions so other commands (e.g. `cf target`) can run a prefix of the
//!   same sequence.
//!
//! The ordering is deliberate and observable: a session that is
//! simultaneously logged out and has no org targeted must report
//! "Not logged in", never "No org targeted". Argument-shape errors come
//! before any environment check — they are meaningful even with no session
//! at all.
//!
//! The gate performs no I/O and holds no state; validating the same
//! (request, snapshot) pair twice yields the same outcome.
//!
use crate::core::version::ApiVersion;
use thiserror::Error;

/// The lowest platform API version that supports service-instance sharing.
pub const MINIMUM_SHARE_SERVICE_API_VERSION: ApiVersion = ApiVersion::new(3, 27, 0);

/// Read-only snapshot of the session and target state consumed by the gate.
///
/// Built from the session config file once per invocation; the gate never
/// mutates it. A field that is `None` means "not set" regardless of how the
/// underlying storage expressed that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentSnapshot {
    /// Targeted API endpoint URL, if any.
    pub api_endpoint: Option<String>,
    /// API version advertised by the targeted endpoint, if known.
    pub api_version: Option<ApiVersion>,
    /// Whether an access token is present for the session.
    pub logged_in: bool,
    /// Display name of the logged-in user.
    pub username: Option<String>,
    /// Currently targeted org, if any.
    pub org: Option<String>,
    /// Currently targeted space, if any.
    pub space: Option<String>,
}

/// Parsed invocation of `cf share-service`.
///
/// The service instance and space are logically required, but are declared
/// optional at the parser level so this gate owns their error contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareServiceRequest {
    /// Positional SERVICE_INSTANCE argument.
    pub service_instance: Option<String>,
    /// `-s` flag: the space to share the service instance into.
    pub space: Option<String>,
    /// `-o` flag: org of the other space. Defaults to the targeted org.
    pub org: Option<String>,
}

/// A failed requirement check. Exactly one is produced per invocation.
///
/// The `#[error]` strings are an exact, case-sensitive contract (including
/// the GNU-style `` `-s' `` quoting inherited from the flag parser the
/// platform CLI historically used). Do not reword them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequirementError {
    #[error("Incorrect Usage: the required argument `{0}` was not provided")]
    MissingArgument(&'static str),

    #[error("Incorrect Usage: the required flag `{0}' was not specified")]
    MissingFlag(&'static str),

    #[error("No API endpoint set. Use 'cf login' or 'cf api' to target an endpoint.")]
    NoApiEndpoint,

    #[error("This command requires CF API version {required} or higher.")]
    MinimumApiVersion {
        required: ApiVersion,
        /// Version the endpoint actually advertised; `None` when absent.
        actual: Option<ApiVersion>,
    },

    #[error("Not logged in. Use 'cf login' to log in.")]
    NotLoggedIn,

    #[error("No org targeted, use 'cf target -o ORG' to target an org.")]
    NoOrgTargeted,

    #[error("No space targeted, use 'cf target -s SPACE' to target a space.")]
    NoSpaceTargeted,
}

impl RequirementError {
    /// Usage errors (malformed arguments) additionally print the command's
    /// help block; environment errors do not.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::MissingArgument(_) | Self::MissingFlag(_))
    }
}

/// Evaluates the full requirement sequence for `cf share-service`.
///
/// Checks run in a strict, fixed order and the first failure wins:
/// 1. SERVICE_INSTANCE argument present
/// 2. `-s` flag present
/// 3. API endpoint targeted
/// 4. API version at least [`MINIMUM_SHARE_SERVICE_API_VERSION`]
/// 5. logged in
/// 6. org targeted
/// 7. space targeted
pub fn validate_share_service(
    request: &ShareServiceRequest,
    env: &EnvironmentSnapshot,
) -> Result<(), RequirementError> {
    if request.service_instance.is_none() {
        return Err(RequirementError::MissingArgument("SERVICE_INSTANCE"));
    }
    if request.space.is_none() {
        return Err(RequirementError::MissingFlag("-s"));
    }
    check_api_endpoint(env)?;
    check_api_version(env, MINIMUM_SHARE_SERVICE_API_VERSION)?;
    check_logged_in(env)?;
    check_org_targeted(env)?;
    check_space_targeted(env)?;
    Ok(())
}

/// Requires a targeted API endpoint.
pub fn check_api_endpoint(env: &EnvironmentSnapshot) -> Result<(), RequirementError> {
    match env.api_endpoint {
        Some(_) => Ok(()),
        None => Err(RequirementError::NoApiEndpoint),
    }
}

/// Requires the targeted endpoint to advertise at least `required`.
/// An absent version fails the check the same way a too-low one does.
pub fn check_api_version(
    env: &EnvironmentSnapshot,
    required: ApiVersion,
) -> Result<(), RequirementError> {
    match env.api_version {
        Some(actual) if actual >= required => Ok(()),
        actual => Err(RequirementError::MinimumApiVersion { required, actual }),
    }
}

/// Requires a logged-in session.
pub fn check_logged_in(env: &EnvironmentSnapshot) -> Result<(), RequirementError> {
    if env.logged_in {
        Ok(())
    } else {
        Err(RequirementError::NotLoggedIn)
    }
}

/// Requires a targeted org.
pub fn check_org_targeted(env: &EnvironmentSnapshot) -> Result<(), RequirementError> {
    match env.org {
        Some(_) => Ok(()),
        None => Err(RequirementError::NoOrgTargeted),
    }
}

/// Requires a targeted space.
pub fn check_space_targeted(env: &EnvironmentSnapshot) -> Result<(), RequirementError> {
    match env.space {
        Some(_) => Ok(()),
        None => Err(RequirementError::NoSpaceTargeted),
    }
}
