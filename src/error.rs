//! Errors returned by `cmd`.

use thiserror::Error;

/// Exit status a shell uses when a command cannot be found.
pub const EXIT_NOT_FOUND: i32 = 127;
/// Exit status a shell uses when a command is found but cannot be started.
pub const EXIT_NOT_EXECUTABLE: i32 = 126;
/// Exit status used by `usage`, `fatal` and any failure without a better code.
pub const EXIT_FAILURE: i32 = 1;

/// Why a `cmd` invocation did not succeed.
#[derive(Debug, Error)]
pub enum CmdError {
    #[error("no command given")]
    EmptyCommand,

    #[error("{program}: command not found")]
    NotFound { program: String },

    #[error("{program}: failed to start: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program}: exited with status {code}")]
    Failed { program: String, code: i32 },

    #[error("{program}: terminated by signal{}", signal_suffix(.signal))]
    Signaled {
        program: String,
        signal: Option<i32>,
    },
}

fn signal_suffix(signal: &Option<i32>) -> String {
    signal.map(|s| format!(" {s}")).unwrap_or_default()
}

impl CmdError {
    /// The status a fail-fast script should exit with for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            CmdError::EmptyCommand => EXIT_FAILURE,
            CmdError::NotFound { .. } => EXIT_NOT_FOUND,
            CmdError::Spawn { .. } => EXIT_NOT_EXECUTABLE,
            CmdError::Failed { code, .. } => *code,
            CmdError::Signaled { signal, .. } => signal.map_or(EXIT_FAILURE, |s| 128 + s),
        }
    }

    /// Whether the child ran and already reported its own failure.
    #[must_use]
    pub fn is_child_failure(&self) -> bool {
        matches!(self, CmdError::Failed { .. } | CmdError::Signaled { .. })
    }
}
