//! # scriptkit
//!
//! Script helpers as a command line tool.
//!
//! ## Usage
//!
//! - Log a step: `scriptkit msg Starting build`
//! - Run a command, aborting on failure: `scriptkit cmd cargo build --release`
//! - Report bad invocation: `scriptkit usage deploy.sh <env>`
//! - Abort: `scriptkit fatal disk full`

/// Entry point for the CLI tool.
fn main() {
    scriptkit::cli::run_cli();
}
