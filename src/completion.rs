//! Shell completion scripts for the `scriptkit` binary.

use clap::ValueEnum;
use std::io::{self, Write};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell", alias = "pwsh")]
    PowerShell,
}

impl Shell {
    /// The completion script for this shell, embedded at compile time.
    #[must_use]
    pub fn completion_script(self) -> &'static str {
        match self {
            Shell::Bash => include_str!("../completions/scriptkit.bash"),
            Shell::Zsh => include_str!("../completions/scriptkit.zsh"),
            Shell::Fish => include_str!("../completions/scriptkit.fish"),
            Shell::PowerShell => include_str!("../completions/scriptkit.ps1"),
        }
    }
}

/// Write the completion script for `shell` to `out`.
///
/// # Errors
/// Propagates write failures from `out`.
pub fn write_completion_script<W: Write>(out: &mut W, shell: Shell) -> io::Result<()> {
    out.write_all(shell.completion_script().as_bytes())?;
    out.flush()
}
