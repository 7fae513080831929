//! Stateless text perturbation: random insertion and synonym replacement.
//!
//! Augmentation inflates small text datasets by producing plausible
//! variants of a sample. Two operations are supported:
//!
//! - **Random insertion**: duplicate a random word of the text at a random
//!   position. Grows the text by one word per round.
//! - **Synonym replacement**: swap a random word for one of its synonyms
//!   from the installed [lexicon](crate::lexicon). Word count is preserved.
//!
//! Both operate round by round on the mutated text, so later rounds see
//! (and may re-hit) the effects of earlier ones:
//!
//! ```text
//! random_insertion("a b c", 2)
//!   round 1: pick "c", insert at 1        -> "a c b c"     (len 4)
//!   round 2: pick from 4 words, pos 0..=4 -> "b a c b c"   (len 5)
//! ```
//!
//! Texts shorter than two words pass through untouched; there is nothing
//! meaningful to perturb.
//!
//! Every operation has a `_with_rng` variant for deterministic use with a
//! seeded generator; the plain variants draw from [`rand::thread_rng`].

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::lexicon;

/// Augmentation switches, applied in declaration order.
///
/// Counts of `Some(0)` are treated as off, matching the truthiness
/// semantics of the option maps the transport layers pass around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AugmentOpts {
    /// Number of random word insertions.
    pub random_insertion: Option<usize>,
    /// Number of synonym replacement rounds.
    pub synonym_replacement: Option<usize>,
}

impl AugmentOpts {
    /// Whether any augmentation step is enabled.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.random_insertion.is_some_and(|n| n > 0)
            || self.synonym_replacement.is_some_and(|n| n > 0)
    }
}

/// Insert `n` randomly chosen words of `text` at random positions.
///
/// Each round picks an existing word uniformly (with replacement) from the
/// current text and inserts it at a uniform position in `[0, len]`
/// inclusive, so the word count grows by exactly `n`. Texts with fewer
/// than two words are returned unchanged.
#[must_use]
pub fn random_insertion(text: &str, n: usize) -> String {
    random_insertion_with_rng(text, n, &mut rand::thread_rng())
}

/// [`random_insertion`] with a caller-supplied generator.
pub fn random_insertion_with_rng<R: Rng + ?Sized>(text: &str, n: usize, rng: &mut R) -> String {
    let mut words: Vec<String> = text.split_whitespace().map(str::to_string).collect();
    if words.len() < 2 {
        return text.to_string();
    }

    for _ in 0..n {
        let word = words[rng.gen_range(0..words.len())].clone();
        let pos = rng.gen_range(0..=words.len());
        words.insert(pos, word);
    }

    words.join(" ")
}

/// Replace up to `n` randomly chosen words with a random synonym.
///
/// Each round picks a word position uniformly and consults the installed
/// lexicon; a word with no synonyms leaves that round a no-op, and later
/// rounds may re-select an already-replaced position. Word count is
/// preserved. Texts with fewer than two words are returned unchanged.
#[must_use]
pub fn synonym_replacement(text: &str, n: usize) -> String {
    synonym_replacement_with_rng(text, n, &mut rand::thread_rng())
}

/// [`synonym_replacement`] with a caller-supplied generator.
pub fn synonym_replacement_with_rng<R: Rng + ?Sized>(text: &str, n: usize, rng: &mut R) -> String {
    let mut words: Vec<String> = text.split_whitespace().map(str::to_string).collect();
    if words.len() < 2 {
        return text.to_string();
    }

    for _ in 0..n {
        let idx = rng.gen_range(0..words.len());
        let candidates = lexicon::synonyms(&words[idx]);
        if !candidates.is_empty() {
            words[idx] = candidates[rng.gen_range(0..candidates.len())].clone();
        }
    }

    words.join(" ")
}
