use anyhow::{Context, Result};
use clap::Parser;
use stream_rewriter_config::Config;

mod cli;
mod commands;
mod script;

use cli::{Cli, Command};

const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("Config file {} does not exist", path.display()))?,
        None => Config::load()?.unwrap_or_default(),
    };

    // RUST_LOG wins over the configured filter
    let filter = config.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER);
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    match cli.command {
        Command::Tokens { file, skip_trivia } => {
            let tokens = commands::read_source(&file)?;
            print!("{}", commands::list_tokens(&tokens, skip_trivia));
        }
        Command::Apply {
            file,
            script,
            output,
            start,
            stop,
        } => {
            let text = commands::apply(&config, &file, &script, start, stop)?;
            match output {
                Some(path) => std::fs::write(&path, text)
                    .with_context(|| format!("Failed to write {}", path.display()))?,
                None => print!("{text}"),
            }
        }
    }

    Ok(())
}
