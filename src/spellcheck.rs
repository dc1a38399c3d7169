use log::{debug, info};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;

use crate::config::CorrectorConfig;
use crate::edits::{edits1, edits2};
use crate::error::Result;
use crate::model::FrequencyModel;
use crate::tokenizer::{RegexTokenizer, read_corpus};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub word: String,
    pub probability: f64,
}

/// Outcome of a single query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "suggestions", rename_all = "snake_case")]
pub enum SuggestedCorrection {
    /// The word is in the vocabulary.
    AlreadyCorrect,
    /// No candidate survived the vocabulary filter.
    NoSuggestions,
    /// Known candidates, most probable first.
    Suggestions(Vec<Suggestion>),
}

impl SuggestedCorrection {
    pub fn is_correct(&self) -> bool {
        matches!(self, SuggestedCorrection::AlreadyCorrect)
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        match self {
            SuggestedCorrection::Suggestions(list) => list,
            _ => &[],
        }
    }

    pub fn best(&self) -> Option<&Suggestion> {
        self.suggestions().first()
    }
}

/// Where the candidates for a query came from.
///
/// Distance two is only explored when distance one produced nothing at all,
/// even if none of the distance-one strings are known words.
#[derive(Debug, Clone, PartialEq)]
pub enum CandidatePool {
    EditDistanceOne(HashSet<String>),
    EditDistanceTwo(HashSet<String>),
    Original(String),
}

impl CandidatePool {
    pub fn len(&self) -> usize {
        match self {
            CandidatePool::EditDistanceOne(set) | CandidatePool::EditDistanceTwo(set) => set.len(),
            CandidatePool::Original(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_words(self) -> Vec<String> {
        match self {
            CandidatePool::EditDistanceOne(set) | CandidatePool::EditDistanceTwo(set) => {
                set.into_iter().collect()
            }
            CandidatePool::Original(word) => vec![word],
        }
    }
}

#[derive(Debug, Clone)]
pub struct SpellCorrector {
    model: FrequencyModel,
    config: CorrectorConfig,
}

impl SpellCorrector {
    pub fn new(model: FrequencyModel) -> Self {
        Self::with_config(model, CorrectorConfig::default())
    }

    pub fn with_config(model: FrequencyModel, config: CorrectorConfig) -> Self {
        SpellCorrector { model, config }
    }

    pub fn from_tokens<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::new(FrequencyModel::build(tokens)?))
    }

    pub fn from_corpus_file<P: AsRef<Path>>(file_path: P) -> Result<Self> {
        Self::from_corpus_file_with_config(file_path, CorrectorConfig::default())
    }

    pub fn from_corpus_file_with_config<P: AsRef<Path>>(
        file_path: P,
        config: CorrectorConfig,
    ) -> Result<Self> {
        let file_path = file_path.as_ref();
        let tokenizer = RegexTokenizer::new()?;
        let words = read_corpus(file_path, &tokenizer)?;
        let model = FrequencyModel::build(words)?;
        info!(
            "loaded corpus {}: {} total words, {} unique words",
            file_path.display(),
            model.total_tokens(),
            model.len()
        );
        Ok(Self::with_config(model, config))
    }

    pub fn model(&self) -> &FrequencyModel {
        &self.model
    }

    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }

    pub fn candidates(&self, word: &str) -> CandidatePool {
        let one = edits1(word);
        if !one.is_empty() {
            return CandidatePool::EditDistanceOne(one);
        }

        let two = edits2(word);
        if !two.is_empty() {
            return CandidatePool::EditDistanceTwo(two);
        }

        CandidatePool::Original(word.to_owned())
    }

    pub fn suggest(&self, word: &str) -> SuggestedCorrection {
        if self.model.contains(word) {
            return SuggestedCorrection::AlreadyCorrect;
        }

        if let Some(limit) = self.config.max_word_length {
            if word.chars().count() > limit {
                debug!("skipping {:?}: longer than {} characters", word, limit);
                return SuggestedCorrection::NoSuggestions;
            }
        }

        let pool = self.candidates(word);
        let pool_size = pool.len();

        let mut suggestions: Vec<Suggestion> = pool
            .into_words()
            .into_iter()
            .filter(|candidate| self.model.contains(candidate))
            .map(|candidate| Suggestion {
                probability: self.model.probability(&candidate),
                word: candidate,
            })
            .collect();

        debug!(
            "{:?}: {} of {} candidates are known words",
            word,
            suggestions.len(),
            pool_size
        );

        if suggestions.is_empty() {
            return SuggestedCorrection::NoSuggestions;
        }

        suggestions.sort_by(|a, b| {
            b.probability
                .total_cmp(&a.probability)
                .then_with(|| a.word.cmp(&b.word))
        });

        if let Some(n) = self.config.max_suggestions {
            suggestions.truncate(n);
        }

        SuggestedCorrection::Suggestions(suggestions)
    }

    /// The single most probable correction, if any.
    pub fn correction(&self, word: &str) -> Option<String> {
        match self.suggest(word) {
            SuggestedCorrection::Suggestions(list) => list.into_iter().next().map(|s| s.word),
            _ => None,
        }
    }

    pub fn suggest_word_corrections(&self, words: &[String]) -> Vec<SuggestedCorrection> {
        words.par_iter().map(|word| self.suggest(word)).collect()
    }
}
