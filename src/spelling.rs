use std::cmp::Ordering;
use std::collections::HashMap;
use strsim::{jaro_winkler, levenshtein};
use tracing::debug;

use crate::corpus::CorpusEntry;
use crate::ranking::parse_categories;

pub const TARGET_SPELLING: &str = "spelling";

// Levenshtein thresholds (max edit distance allowed)
const SHORT_WORD_LEVENSHTEIN: usize = 1;
const DEFAULT_LEVENSHTEIN: usize = 2;
const SHORT_WORD_MAX_LEN: usize = 4;

/// Maps a raw user token to its corrected spelling.
///
/// Never fails: a token with no known correction comes back unchanged.
pub trait SpellCorrector {
    fn correct(&self, token: &str) -> String;
}

/// Corrects words against a frequency-weighted vocabulary using edit distance.
#[derive(Debug, Clone, Default)]
pub struct DictionaryCorrector {
    frequencies: HashMap<String, usize>,
}

impl DictionaryCorrector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vocabulary from arbitrary text; every alphabetic word counts once per occurrence.
    pub fn with_text(mut self, text: &str) -> Self {
        for word in words(text) {
            *self.frequencies.entry(word).or_insert(0) += 1;
        }
        self
    }

    /// Vocabulary made of the corpus titles, bodies and category names.
    pub fn from_corpus(entries: &[CorpusEntry]) -> Self {
        let corrector = entries.iter().fold(Self::new(), |corrector, entry| {
            let categories = parse_categories(entry.category)
                .into_iter()
                .collect::<Vec<_>>()
                .join(" ");
            corrector
                .with_text(entry.title)
                .with_text(entry.content)
                .with_text(&categories)
        });
        debug!(
            target: TARGET_SPELLING,
            "Built vocabulary of {} words from {} articles",
            corrector.len(),
            entries.len()
        );
        corrector
    }

    pub fn is_known(&self, word: &str) -> bool {
        self.frequencies.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    fn levenshtein_threshold(word: &str) -> usize {
        if word.chars().count() <= SHORT_WORD_MAX_LEN {
            SHORT_WORD_LEVENSHTEIN
        } else {
            DEFAULT_LEVENSHTEIN
        }
    }

    /// Correct a single lowercase word, or return it unchanged.
    fn correct_word(&self, word: &str) -> String {
        if !word.chars().all(char::is_alphabetic) || self.is_known(word) {
            return word.to_string();
        }

        let threshold = Self::levenshtein_threshold(word);
        let best = self
            .frequencies
            .iter()
            .filter_map(|(candidate, &frequency)| {
                let distance = levenshtein(word, candidate);
                (distance <= threshold).then(|| {
                    (candidate, distance, jaro_winkler(word, candidate), frequency)
                })
            })
            .min_by(|a, b| {
                a.1.cmp(&b.1)
                    .then_with(|| b.2.partial_cmp(&a.2).unwrap_or(Ordering::Equal))
                    .then_with(|| b.3.cmp(&a.3))
                    .then_with(|| a.0.cmp(b.0))
            });

        match best {
            Some((candidate, distance, similarity, _)) => {
                debug!(
                    target: TARGET_SPELLING,
                    "Corrected '{}' to '{}' (distance {}, jaro-winkler {:.3})",
                    word, candidate, distance, similarity
                );
                candidate.clone()
            }
            None => word.to_string(),
        }
    }
}

impl SpellCorrector for DictionaryCorrector {
    fn correct(&self, token: &str) -> String {
        let words: Vec<&str> = token.split_whitespace().collect();
        if words.is_empty() || self.is_empty() {
            return token.to_string();
        }

        let mut changed = false;
        let corrected: Vec<String> = words
            .iter()
            .map(|word| {
                let lowered = word.to_lowercase();
                let candidate = self.correct_word(&lowered);
                if candidate == lowered {
                    // Matching is case-insensitive, but a found word keeps the caller's casing
                    word.to_string()
                } else {
                    changed = true;
                    candidate
                }
            })
            .collect();

        // Keep the caller's exact text when nothing changed
        if !changed {
            return token.to_string();
        }
        corrected.join(" ")
    }
}

/// Lowercase alphabetic words of `text`
fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::news_dataset;

    fn corpus_corrector() -> DictionaryCorrector {
        DictionaryCorrector::from_corpus(news_dataset(15))
    }

    #[test]
    fn test_known_words_unchanged() {
        let corrector = corpus_corrector();
        assert_eq!(corrector.correct("sports"), "sports");
        assert_eq!(corrector.correct("technology"), "technology");
        assert_eq!(corrector.correct("climate change"), "climate change");
    }

    #[test]
    fn test_misspellings_corrected() {
        let corrector = corpus_corrector();
        assert_eq!(corrector.correct("technlogy"), "technology");
        assert_eq!(corrector.correct("politcs"), "politics");
        assert_eq!(corrector.correct("helth"), "health");
        assert_eq!(corrector.correct("sprots"), "sports");
        assert_eq!(corrector.correct("entertainmnet"), "entertainment");
    }

    #[test]
    fn test_each_word_corrected_independently() {
        let corrector = corpus_corrector();
        assert_eq!(corrector.correct("stok markt"), "stock market");
    }

    #[test]
    fn test_known_words_keep_their_case() {
        let corrector = corpus_corrector();
        assert_eq!(corrector.correct("Sports"), "Sports");
        assert_eq!(corrector.correct("Climate  CHANGE"), "Climate  CHANGE");
        // Only the misspelled word is replaced
        assert_eq!(corrector.correct("Stock Markt"), "Stock market");
    }

    #[test]
    fn test_empty_vocabulary_returns_input() {
        let corrector = DictionaryCorrector::new();
        assert!(corrector.is_empty());
        assert_eq!(corrector.len(), 0);
        assert_eq!(corrector.correct("Sprots"), "Sprots");
    }

    #[test]
    fn test_unknown_words_unchanged() {
        let corrector = corpus_corrector();
        assert_eq!(corrector.correct("xylophone"), "xylophone");
        assert_eq!(corrector.correct("2024"), "2024");
        assert_eq!(corrector.correct(""), "");
    }

    #[test]
    fn test_short_words_use_tighter_threshold() {
        let corrector = DictionaryCorrector::new().with_text("tax tour");
        assert_eq!(corrector.correct("tex"), "tax");
        // Two edits away from both, too far for a short word
        assert_eq!(corrector.correct("xyz"), "xyz");
    }

    #[test]
    fn test_frequency_breaks_ties() {
        let corrector = DictionaryCorrector::new().with_text("cart cart cast");
        // "cazt" is one edit from both, and equally similar by jaro-winkler
        assert_eq!(corrector.correct("cazt"), "cart");
    }

    #[test]
    fn test_vocabulary_includes_categories() {
        let corrector = corpus_corrector();
        assert!(corrector.is_known("environment"));
        assert!(corrector.is_known("business"));
        assert!(!corrector.is_empty());
    }
}
