//! Text preprocessing shared by indexing and querying.
//!
//! Raw text goes through, in order: punctuation handling, whitespace
//! collapsing and trimming, lowercasing, diacritic folding, splitting into
//! tokens and stopword removal. The same pipeline runs over indexed keys,
//! query text and the configured stopwords themselves.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalized tokens excluded from indexed keys and lookup keys.
pub type StopWords = HashSet<String>;

/// Pluggable text normalizer: raw text plus stopwords in, ordered tokens out.
///
/// Must be pure and deterministic; the same normalizer serves indexing and
/// querying.
pub type Normalizer = Arc<dyn Fn(&str, &StopWords) -> Vec<String> + Send + Sync>;

/// What the default normalizer does with punctuation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PunctuationMode {
    /// Punctuation separates words: "BTC-USD" becomes "btc usd".
    #[default]
    Split,
    /// Punctuation is deleted: "BTC-USD" becomes "btcusd".
    Remove,
}

/// Normalizes `text` with the default pipeline, splitting on punctuation.
pub fn normalize(text: &str, stopwords: &StopWords) -> Vec<String> {
    normalize_with(text, stopwords, PunctuationMode::Split)
}

pub fn normalize_with(
    text: &str,
    stopwords: &StopWords,
    punctuation: PunctuationMode,
) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .filter_map(|c| match (is_punctuation(c), punctuation) {
            (false, _) => Some(c),
            (true, PunctuationMode::Split) => Some(' '),
            (true, PunctuationMode::Remove) => None,
        })
        .collect();

    cleaned
        .split_whitespace()
        .map(fold_token)
        // A token made only of combining marks folds away to nothing.
        .filter(|token| !token.is_empty() && !stopwords.contains(token))
        .collect()
}

/// Returns the default normalizer for the given punctuation handling.
pub fn default_normalizer(punctuation: PunctuationMode) -> Normalizer {
    Arc::new(move |text, stopwords| normalize_with(text, stopwords, punctuation))
}

/// Builds the stopword set by running each raw word through `normalizer`
/// with no stopwords; every token it yields becomes a stopword.
pub fn stopword_set<S: AsRef<str>>(words: &[S], normalizer: &Normalizer) -> StopWords {
    let empty = StopWords::new();
    words
        .iter()
        .flat_map(|word| normalizer(word.as_ref(), &empty))
        .collect()
}

/// Lowercases and strips diacritics: decompose, drop combining marks, recompose.
fn fold_token(token: &str) -> String {
    token
        .to_lowercase()
        .nfd()
        .filter(|&c| !is_combining_mark(c))
        .nfc()
        .collect()
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(
            c,
            '–' | '—' | '‒' | '―' | '№' | '«' | '»' | '…' | '‘' | '’' | '“' | '”' | '¡' | '¿'
        )
}
