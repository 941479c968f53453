//! Behavioral specifications for the cws CLI.
//!
//! These tests are black-box: they invoke the CLI binary and verify
//! stdout, stderr, and exit codes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

// cli/
#[path = "specs/cli/errors.rs"]
mod cli_errors;
#[path = "specs/cli/help.rs"]
mod cli_help;

// lifecycle/
#[path = "specs/lifecycle/external.rs"]
mod lifecycle_external;
#[path = "specs/lifecycle/run.rs"]
mod lifecycle_run;
