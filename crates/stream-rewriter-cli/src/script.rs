//! TOML edit scripts.
//!
//! A script is a list of `[[edit]]` tables queued in file order:
//!
//! ```toml
//! [[edit]]
//! op = "insert_before"
//! index = 0
//! text = "#include \"hapi.h\"\n"
//!
//! [[edit]]
//! op = "delete"
//! from = 4
//! to = 6
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use stream_rewriter_engine::{RewriteError, Rewriter, TokenStream};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read edit script at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse edit script at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// `number` counts `[[edit]]` tables from 1.
    #[error("edit #{number} rejected: {source}")]
    Edit { number: usize, source: RewriteError },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Edit {
    InsertBefore { index: usize, text: String },
    InsertAfter { index: usize, text: String },
    Replace { from: usize, to: usize, text: String },
    Delete { from: usize, to: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EditScript {
    #[serde(default, rename = "edit")]
    pub edits: Vec<Edit>,
}

impl EditScript {
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ScriptError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Queue every edit on `rewriter`, stopping at the first rejected range.
    pub fn queue<S: TokenStream + ?Sized>(
        &self,
        rewriter: &mut Rewriter<'_, S>,
    ) -> Result<(), ScriptError> {
        for (number, edit) in (1..).zip(&self.edits) {
            let queued = match edit {
                Edit::InsertBefore { index, text } => {
                    rewriter.insert_before(*index, text.as_str());
                    Ok(())
                }
                Edit::InsertAfter { index, text } => {
                    rewriter.insert_after(*index, text.as_str());
                    Ok(())
                }
                Edit::Replace { from, to, text } => rewriter.replace(*from, *to, text.as_str()),
                Edit::Delete { from, to } => rewriter.delete(*from, *to),
            };
            queued.map_err(|source| ScriptError::Edit { number, source })?;
        }
        Ok(())
    }
}
