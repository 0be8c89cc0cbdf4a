//! # CF CLI Terminal Output Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! This module centralizes every user-facing line the cf CLI writes, so the
//! output contract lives in one place: the standing experimental-feature
//! warning, the `FAILED` failure reporter, the closing `OK` line, and the
//! sectioned help block (`NAME:` / `USAGE:` / `OPTIONS:` / `SEE ALSO:`)
//! that each command declares as data and this module renders.
//!
//! ## Architecture
//!
//! Routing follows the platform CLI convention:
//! - Progress and result lines (`FAILED`, `OK`, help text, the experimental
//!   warning) go to **stdout**.
//! - The human-readable error message for a failure goes to **stderr**.
//!
//! Requirement failures are reported through
//! [`report_requirement_failure`], which appends the command's help block
//! for usage errors (malformed arguments) but not for environment errors —
//! a user who mistyped the command needs the usage; a user who is merely
//! logged out does not.
//!
use crate::core::requirements::RequirementError;

/// Standing warning printed on every run of an experimental command,
/// regardless of validation outcome.
pub const EXPERIMENTAL_WARNING: &str =
    "This command is in EXPERIMENTAL stage and may change without notice";

/// Help block for one command, rendered by [`print_help`].
///
/// Declared as `const` data in each command module so the help text and the
/// usage-error path share a single source of truth.
pub struct HelpText {
    /// Command name as typed by the user, e.g. `share-service`.
    pub name: &'static str,
    /// One-line description shown next to the name.
    pub description: &'static str,
    /// Full usage line including the binary name.
    pub usage: &'static str,
    /// Flag/description pairs for the OPTIONS section; empty slice omits it.
    pub options: &'static [(&'static str, &'static str)],
    /// Comma-separated related commands; empty string omits the section.
    pub see_also: &'static str,
}

/// Prints the experimental-feature warning followed by a blank line.
pub fn experimental_warning() {
    println!("{}", EXPERIMENTAL_WARNING);
    println!();
}

/// Reports a failure: `FAILED` on stdout, the message on stderr.
pub fn failed(message: &str) {
    println!("FAILED");
    eprintln!("{}", message);
}

/// Prints the closing success marker.
pub fn ok() {
    println!("OK");
}

/// Reports a failed requirement check.
///
/// Usage errors additionally get the command's help block, separated by a
/// blank line; environment errors get the message alone.
pub fn report_requirement_failure(error: &RequirementError, help: &HelpText) {
    failed(&error.to_string());
    if error.is_usage() {
        println!();
        print_help(help);
    }
}

/// Renders and prints a command's sectioned help block.
pub fn print_help(help: &HelpText) {
    print!("{}", render_help(help));
}

/// Renders the help block. Kept separate from the printing so the exact
/// layout is unit-testable.
fn render_help(help: &HelpText) -> String {
    let mut out = format!(
        "NAME:\n   {} - {}\n\nUSAGE:\n   {}\n",
        help.name, help.description, help.usage
    );
    if !help.options.is_empty() {
        out.push_str("\nOPTIONS:\n");
        for (flag, description) in help.options {
            out.push_str(&format!("   {:<7} {}\n", flag, description));
        }
    }
    if !help.see_also.is_empty() {
        out.push_str("\nSEE ALSO:\n");
        out.push_str(&format!("   {}\n", help.see_also));
    }
    out
}
