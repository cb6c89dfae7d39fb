//! Synchronous child process execution for `cmd`.

use crate::error::CmdError;
use crate::message::join_tokens;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

/// A program plus its arguments, as given to `cmd`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
}

impl Invocation {
    /// Split tokens into program and arguments.
    ///
    /// # Errors
    /// Returns [`CmdError::EmptyCommand`] when there are no tokens.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, CmdError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut iter = tokens.into_iter().map(|t| t.as_ref().to_string());
        let program = iter.next().ok_or(CmdError::EmptyCommand)?;
        Ok(Self {
            program,
            args: iter.collect(),
        })
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The invocation as it is echoed on the `[cmd]` line.
    #[must_use]
    pub fn display(&self) -> String {
        join_tokens(std::iter::once(&self.program).chain(&self.args))
    }

    /// Locate the program on the search path.
    ///
    /// A program given as a path that exists is accepted as is, executable or
    /// not; whether it can actually start is left to the spawn.
    ///
    /// # Errors
    /// Returns [`CmdError::NotFound`] when no executable matches.
    pub fn resolve(&self) -> Result<PathBuf, CmdError> {
        let path = Path::new(&self.program);
        if self.program.chars().any(std::path::is_separator) && path.exists() {
            return Ok(path.to_path_buf());
        }
        which::which(&self.program).map_err(|_| CmdError::NotFound {
            program: self.program.clone(),
        })
    }

    /// Run the program to completion with inherited standard streams.
    ///
    /// # Errors
    /// Returns a [`CmdError`] if the program cannot be found or started, or
    /// if it does not exit with status 0.
    pub fn run(&self) -> Result<(), CmdError> {
        self.resolve()?;

        // Spawn by name so the child sees argv[0] as typed.
        let status = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| CmdError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        self.check_status(status)
    }

    fn check_status(&self, status: ExitStatus) -> Result<(), CmdError> {
        if status.success() {
            return Ok(());
        }
        match status.code() {
            Some(code) => Err(CmdError::Failed {
                program: self.program.clone(),
                code,
            }),
            None => Err(CmdError::Signaled {
                program: self.program.clone(),
                signal: termination_signal(status),
            }),
        }
    }
}

#[cfg(unix)]
fn termination_signal(status: ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn termination_signal(_status: ExitStatus) -> Option<i32> {
    None
}
