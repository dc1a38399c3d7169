//! Error types for corpus loading and corrector construction.
//!
//! Querying a built corrector never fails; everything that can go wrong
//! happens while reading the corpus or the configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpellError {
    /// The corpus file is missing or unreadable.
    #[error("corpus unavailable at {}: {source}", .path.display())]
    CorpusUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The corpus produced no tokens, so no probabilities can be derived.
    #[error("corpus contains no words")]
    EmptyCorpus,

    /// The tokenizer pattern failed to compile.
    #[error("invalid token pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl SpellError {
    pub fn corpus_unavailable<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        SpellError::CorpusUnavailable {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SpellError>;
