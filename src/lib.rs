//! # scriptkit
//!
//! Four small helpers for scripts: `usage`, `msg`, `cmd` and `fatal`.
//! Each prints one prefixed line on stdout; `usage` and `fatal` exit with
//! status 1, and `cmd` runs a command whose failure can be turned into the
//! script's exit status with [`OrExit::or_exit`].

pub mod cli;
pub mod completion;
pub mod error;
pub mod exec;
pub mod message;
pub mod support;

pub use error::CmdError;
pub use support::{OrExit, cmd, cmd_or_exit, fatal, msg, usage};
