use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for the spelling corrector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectorConfig {
    /// Keep at most this many ranked suggestions. `None` keeps all of them.
    pub max_suggestions: Option<usize>,
    /// Unknown words longer than this many characters get no candidates generated.
    pub max_word_length: Option<usize>,
}

impl CorrectorConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
