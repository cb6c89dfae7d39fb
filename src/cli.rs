//! CLI module containing the main entry point logic.
//!
//! Each helper is exposed as a subcommand so shell scripts can call
//! `scriptkit msg ...` and friends instead of defining the functions inline.

use crate::completion;
use crate::support::{cmd_or_exit, fatal, msg, usage};
use clap::{Parser as ClapParser, Subcommand};

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI arguments for the scriptkit tool.
#[derive(ClapParser)]
#[command(name = "scriptkit")]
#[command(version = PKG_VERSION)]
#[command(about = "Logging and fail-fast helpers for shell scripts", long_about = None)]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Helper>,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    generate_completion: Option<completion::Shell>,
}

#[derive(Subcommand)]
enum Helper {
    /// Print `Usage: <TOKENS>` and exit with status 1
    Usage {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        tokens: Vec<String>,
    },
    /// Print `[*] <TOKENS>`
    Msg {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        tokens: Vec<String>,
    },
    /// Print `[cmd] <PROGRAM> <ARGS>`, run it, and exit with its status if it fails
    Cmd {
        /// Program to run, looked up on PATH
        program: String,

        /// Arguments passed to the program verbatim
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Print `[fatal] <TOKENS>` and exit with status 1
    Fatal {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        tokens: Vec<String>,
    },
}

/// Main CLI logic, shared by `main.rs`.
pub fn run_cli() {
    let cli = Cli::parse();

    // Handle --generate-completion flag
    if let Some(shell) = cli.generate_completion {
        let _ = completion::write_completion_script(&mut std::io::stdout().lock(), shell);
        return;
    }

    match cli.command {
        Some(Helper::Usage { tokens }) => usage(tokens),
        Some(Helper::Msg { tokens }) => msg(tokens),
        Some(Helper::Cmd { program, args }) => {
            cmd_or_exit(std::iter::once(program).chain(args));
        }
        Some(Helper::Fatal { tokens }) => fatal(tokens),
        None => {}
    }
}
