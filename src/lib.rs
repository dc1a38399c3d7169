//! Noisy-channel spelling correction.
//!
//! A [`FrequencyModel`] is built once from a corpus; [`SpellCorrector`] then
//! ranks the known words within one (or, failing that, two) single-character
//! edits of a query by their corpus probability.
//!
//! ```no_run
//! use spellcheck::{SpellCorrector, SuggestedCorrection};
//!
//! let corrector = SpellCorrector::from_corpus_file("english.txt")?;
//! match corrector.suggest("famile") {
//!     SuggestedCorrection::AlreadyCorrect => println!("famile is already correctly spelt"),
//!     SuggestedCorrection::NoSuggestions => println!("no correction found"),
//!     SuggestedCorrection::Suggestions(list) => println!("{} is suggested", list[0].word),
//! }
//! # Ok::<(), spellcheck::SpellError>(())
//! ```

pub mod config;
pub mod edits;
pub mod error;
pub mod model;
pub mod spellcheck;
pub mod tokenizer;

pub use config::CorrectorConfig;
pub use error::{Result, SpellError};
pub use model::FrequencyModel;
pub use spellcheck::{CandidatePool, SpellCorrector, SuggestedCorrection, Suggestion};
pub use tokenizer::{RegexTokenizer, Tokenizer, read_corpus};
