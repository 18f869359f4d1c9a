use anyhow::{Context, Result};
use log::{debug, info};
use std::path::Path;
use stream_rewriter_config::Config;
use stream_rewriter_engine::{BufferedTokenStream, Rewriter};

use crate::script::EditScript;

/// One line per token: index, kind and the escaped token text.
///
/// With `skip_trivia` whitespace and comments are left out; the remaining
/// lines keep their original indices.
pub fn list_tokens(tokens: &BufferedTokenStream, skip_trivia: bool) -> String {
    tokens
        .iter()
        .filter(|t| !(skip_trivia && t.kind.is_trivia()))
        .map(|t| format!("{} {:?} {:?}\n", t.index, t.kind, t.text))
        .collect()
}

/// Render `tokens` with `script` applied over `start..=stop`.
pub fn rewrite(
    tokens: &BufferedTokenStream,
    script: &EditScript,
    start: Option<usize>,
    stop: Option<usize>,
) -> Result<String> {
    let mut rewriter = Rewriter::new(tokens);
    script.queue(&mut rewriter)?;
    debug!("queued {} edits", rewriter.operations().len());

    let text = rewriter.text_for_range(start.unwrap_or(0), stop.unwrap_or(usize::MAX))?;
    Ok(text)
}

pub fn read_source(file: &Path) -> Result<BufferedTokenStream> {
    let source = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read source file {}", file.display()))?;
    let tokens = BufferedTokenStream::lex(&source);
    info!("{}: {} tokens", file.display(), tokens.tokens().len());
    Ok(tokens)
}

pub fn apply(
    config: &Config,
    file: &Path,
    script: &Path,
    start: Option<usize>,
    stop: Option<usize>,
) -> Result<String> {
    let tokens = read_source(file)?;
    let script_path = config.resolve_script(script);
    info!("Edit script: {}", script_path.display());
    let script = EditScript::load(&script_path)?;

    rewrite(&tokens, &script, start, stop)
        .with_context(|| format!("Failed to rewrite {}", file.display()))
}
