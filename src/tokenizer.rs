use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use regex::Regex;

use crate::error::{Result, SpellError};

pub const WORD_PATTERN: &str = r"\w+";

/// Turns raw text into lowercase word tokens.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Extracts every match of a word pattern from case-folded text.
#[derive(Debug, Clone)]
pub struct RegexTokenizer {
    pattern: Regex,
}

impl RegexTokenizer {
    pub fn new() -> Result<Self> {
        Self::with_pattern(WORD_PATTERN)
    }

    pub fn with_pattern(pattern: &str) -> Result<Self> {
        Ok(RegexTokenizer {
            pattern: Regex::new(pattern)?,
        })
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.pattern
            .find_iter(&lowered)
            .map(|m| m.as_str().to_owned())
            .collect()
    }
}

/// Reads a corpus file line by line and returns all of its tokens in order.
pub fn read_corpus<P: AsRef<Path>, T: Tokenizer + ?Sized>(
    path: P,
    tokenizer: &T,
) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| SpellError::corpus_unavailable(path, e))?;
    let reader = BufReader::new(file);

    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| SpellError::corpus_unavailable(path, e))?;
        words.extend(tokenizer.tokenize(&line));
    }
    Ok(words)
}
