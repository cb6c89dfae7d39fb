//! The four script helpers: `usage`, `msg`, `cmd` and `fatal`.
//!
//! Every helper prints exactly one line on stdout. `usage` and `fatal` then
//! exit with status 1. `cmd` runs the command and hands back a `Result`, so the
//! calling code decides whether a failure aborts the script (see [`OrExit`]).

use crate::error::{CmdError, EXIT_FAILURE};
use crate::exec::Invocation;
use crate::message::{Prefix, write_line};
use std::io;
use std::process;

/// Print a line on stdout. A closed or broken stdout is not an error for the
/// helpers, so write failures are dropped.
fn print_line<I, S>(prefix: Prefix, tokens: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let _ = write_line(&mut io::stdout().lock(), prefix, tokens);
}

/// Print `Usage: <tokens>` and exit with status 1.
pub fn usage<I, S>(tokens: I) -> !
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    print_line(Prefix::Usage, tokens);
    process::exit(EXIT_FAILURE);
}

/// Print `[*] <tokens>`.
pub fn msg<I, S>(tokens: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    print_line(Prefix::Info, tokens);
}

/// Print `[cmd] <tokens>`, then run the first token as a program with the
/// remaining tokens as its arguments.
///
/// The child inherits stdin, stdout and stderr and this call blocks until it
/// exits.
///
/// # Errors
/// Returns a [`CmdError`] when no tokens are given, the program cannot be
/// found or started, or it exits with a non-zero status.
pub fn cmd<I, S>(tokens: I) -> Result<(), CmdError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let invocation = Invocation::from_tokens(tokens);
    let line = invocation.as_ref().map(Invocation::display).unwrap_or_default();
    print_line(Prefix::Cmd, [line]);
    invocation?.run()
}

/// Run [`cmd`] and exit the process on any failure.
pub fn cmd_or_exit<I, S>(tokens: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    cmd(tokens).or_exit();
}

/// Print `[fatal] <tokens>` and exit with status 1.
pub fn fatal<I, S>(tokens: I) -> !
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    print_line(Prefix::Fatal, tokens);
    process::exit(EXIT_FAILURE);
}

/// Fail-fast check for the top level of a script.
pub trait OrExit<T> {
    /// Return the success value, or terminate the process with the error's
    /// exit code.
    fn or_exit(self) -> T;
}

impl<T> OrExit<T> for Result<T, CmdError> {
    fn or_exit(self) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                // A child that ran has already said why it failed.
                if !e.is_child_failure() {
                    eprintln!("{}: {e}", env!("CARGO_PKG_NAME"));
                }
                process::exit(e.exit_code());
            }
        }
    }
}
