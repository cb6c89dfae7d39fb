//! Line formatting for the script helpers.

use std::io::{self, Write};

/// Fixed prefix written before the joined tokens of each helper.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Prefix {
    Usage,
    Info,
    Cmd,
    Fatal,
}

impl Prefix {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Prefix::Usage => "Usage: ",
            Prefix::Info => "[*] ",
            Prefix::Cmd => "[cmd] ",
            Prefix::Fatal => "[fatal] ",
        }
    }
}

/// Join tokens with a single space. No quoting or escaping is applied.
pub fn join_tokens<I, S>(tokens: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for (i, token) in tokens.into_iter().enumerate() {
        if i > 0 {
            joined.push(' ');
        }
        joined.push_str(token.as_ref());
    }
    joined
}

/// Build a full line (without the trailing newline).
pub fn format_line<I, S>(prefix: Prefix, tokens: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    format!("{}{}", prefix.as_str(), join_tokens(tokens))
}

/// Write a line and its newline to `out`, then flush.
///
/// Flushing matters for `[cmd]`: the line must reach the terminal before the
/// child process starts writing to the same stream.
pub fn write_line<W, I, S>(out: &mut W, prefix: Prefix, tokens: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    writeln!(out, "{}", format_line(prefix, tokens))?;
    out.flush()
}
