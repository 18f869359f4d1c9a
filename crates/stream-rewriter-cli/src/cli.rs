//! Command-line argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Apply token-addressed edit scripts to C source files
#[derive(Parser, Debug)]
#[command(name = "stream-rewriter", version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/stream-rewriter/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print every token of FILE with its index, so edits can be addressed
    Tokens {
        file: PathBuf,

        /// Leave whitespace and comments out of the listing
        #[arg(long)]
        skip_trivia: bool,
    },

    /// Queue the edits of an edit script against FILE and print the result
    Apply {
        file: PathBuf,

        /// TOML edit script; relative paths also search the configured scripts directory
        #[arg(short, long, value_name = "SCRIPT")]
        script: PathBuf,

        /// Write the rewritten text here instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// First token index to render
        #[arg(long, value_name = "N")]
        start: Option<usize>,

        /// Last token index to render (clamped to the end of the file)
        #[arg(long, value_name = "N")]
        stop: Option<usize>,
    },
}
