//! Stateless text cleanup: punctuation stripping, tokenization, padding.
//!
//! These functions are pure and order-sensitive. The loader applies them in
//! a fixed pipeline (punctuation → tokenize → pad) regardless of how a
//! caller spelled its options, so a request can never reorder the pipeline
//! by accident.
//!
//! ## Tokenization
//!
//! Word/punctuation tokens come from Unicode Standard Annex #29 word
//! segmentation via `unicode-segmentation`. The segmentation tables are
//! compiled into the binary, so unlike a model-file-backed tokenizer there
//! is no resource that can be missing at runtime.
//!
//! ## Padding
//!
//! `pad_text` makes every sample exactly `length` words, the way a
//! fixed-width training batch wants it:
//!
//! ```text
//! pad_text("a b", 4)        -> "a b <PAD> <PAD>"
//! pad_text("a b c d e", 3)  -> "a b c"
//! ```

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// The filler token appended by [`pad_text`].
pub const PAD_TOKEN: &str = "<PAD>";

/// Preprocessing switches, applied in declaration order.
///
/// `pad_length` of `Some(0)` is treated as off, matching the truthiness
/// semantics of the option maps the transport layers pass around.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessOpts {
    /// Strip non-word, non-whitespace characters.
    pub remove_punctuation: bool,
    /// Re-tokenize and rejoin with single spaces.
    pub tokenize: bool,
    /// Pad or truncate to exactly this many words.
    pub pad_length: Option<usize>,
}

impl PreprocessOpts {
    /// Whether any preprocessing step is enabled.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.remove_punctuation || self.tokenize || self.pad_length.is_some_and(|n| n > 0)
    }
}

/// Delete every character that is neither a word character (alphanumeric or
/// `_`) nor whitespace. Spacing structure is otherwise preserved, so the
/// operation is idempotent.
///
/// ```rust
/// use excerpts::remove_punctuation;
///
/// assert_eq!(remove_punctuation("Hi, there!"), "Hi there");
/// ```
#[must_use]
pub fn remove_punctuation(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect()
}

/// Split text into word and punctuation tokens (UAX #29 word bounds),
/// dropping whitespace-only tokens.
///
/// ```rust
/// use excerpts::tokenize;
///
/// assert_eq!(tokenize("Hi, there!"), vec!["Hi", ",", "there", "!"]);
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_word_bounds()
        .filter(|t| !t.trim().is_empty())
        .collect()
}

/// Pad or truncate `text` to exactly `length` words using [`PAD_TOKEN`].
///
/// Splits on whitespace; over-long input keeps its first `length` words,
/// short input gets `<PAD>` appended until the count matches. Deterministic.
#[must_use]
pub fn pad_text(text: &str, length: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() > length {
        return words[..length].join(" ");
    }

    let mut padded = words;
    padded.resize(length, PAD_TOKEN);
    padded.join(" ")
}
