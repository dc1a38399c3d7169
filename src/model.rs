use std::collections::{HashMap, HashSet};

use log::debug;

use crate::error::{Result, SpellError};

/// Unigram counts and maximum-likelihood probabilities for a corpus.
///
/// Built once from a token sequence and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyModel {
    vocabulary: HashSet<String>,
    frequencies: HashMap<String, u64>,
    probabilities: HashMap<String, f64>,
    total_tokens: u64,
}

impl FrequencyModel {
    /// Counts every token and derives `count / total` for each distinct word.
    ///
    /// Fails with [`SpellError::EmptyCorpus`] when there are no tokens.
    pub fn build<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut frequencies: HashMap<String, u64> = HashMap::new();
        let mut total_tokens = 0u64;
        for token in tokens {
            *frequencies.entry(token.into()).or_insert(0) += 1;
            total_tokens += 1;
        }

        if total_tokens == 0 {
            return Err(SpellError::EmptyCorpus);
        }

        let total = total_tokens as f64;
        let probabilities = frequencies
            .iter()
            .map(|(word, &count)| (word.clone(), count as f64 / total))
            .collect();
        let vocabulary = frequencies.keys().cloned().collect();

        debug!(
            "built frequency model: {} tokens, {} distinct words",
            total_tokens,
            frequencies.len()
        );

        Ok(FrequencyModel {
            vocabulary,
            frequencies,
            probabilities,
            total_tokens,
        })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.vocabulary.contains(word)
    }

    pub fn count(&self, word: &str) -> u64 {
        self.frequencies.get(word).copied().unwrap_or(0)
    }

    /// Probability of `word`; 0.0 when it never occurred.
    pub fn probability(&self, word: &str) -> f64 {
        self.probabilities.get(word).copied().unwrap_or(0.0)
    }

    pub fn vocabulary(&self) -> &HashSet<String> {
        &self.vocabulary
    }

    pub fn frequencies(&self) -> &HashMap<String, u64> {
        &self.frequencies
    }

    pub fn probabilities(&self) -> &HashMap<String, f64> {
        &self.probabilities
    }

    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }
}
