//! The synonym lexicon: a process-wide, optional lexical resource.
//!
//! Synonym replacement needs a word → synonyms dictionary. That dictionary
//! is an external resource (a JSON file mapping words to synonym lists),
//! and the system must keep working when it is absent: lookups degrade to
//! empty synonym sets with a warning instead of failing the request.
//!
//! ## Initialization Is Explicit
//!
//! The hosting application installs the lexicon once, at startup:
//!
//! ```rust,no_run
//! excerpts::lexicon::init("thesaurus.json")?;
//! # Ok::<(), excerpts::Error>(())
//! ```
//!
//! Nothing loads implicitly as a side effect of using the library. If
//! `init` is never called (or the file is unreadable and the host decides
//! to continue), [`synonyms`] returns empty sets and logs a single warning
//! for the process lifetime.
//!
//! ## Lookup Semantics
//!
//! Lookup is an exact, case-sensitive string match against the input word,
//! punctuation and all. `"Hello"` and `"hello"` are different keys, and
//! `"hello,"` (with a trailing comma) matches nothing unless the dictionary
//! contains that exact string. This under-matches in practice but is the
//! contract: callers that want looser matching normalize first.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Once, OnceLock};

use tracing::warn;

use crate::{Error, Result};

static GLOBAL: OnceLock<Lexicon> = OnceLock::new();
static MISSING_WARNING: Once = Once::new();

/// A word → synonyms dictionary.
///
/// Usually installed process-wide via [`init`], but standalone instances
/// are useful for tests and embedding hosts.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, Vec<String>>,
}

impl Lexicon {
    /// Load a lexicon from a JSON file of the form
    /// `{"word": ["synonym", ...], ...}`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::LexiconFormat`] if it is not the expected JSON shape.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let entries: HashMap<String, Vec<String>> =
            serde_json::from_str(&raw).map_err(|source| Error::LexiconFormat {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self { entries })
    }

    /// Build a lexicon from in-memory entries.
    #[must_use]
    pub fn from_entries(entries: HashMap<String, Vec<String>>) -> Self {
        Self { entries }
    }

    /// Distinct synonyms for `word`, excluding the word itself.
    ///
    /// Exact, case-sensitive match; an unknown word yields an empty vector.
    #[must_use]
    pub fn synonyms(&self, word: &str) -> Vec<String> {
        let Some(candidates) = self.entries.get(word) else {
            return Vec::new();
        };

        let mut seen = Vec::new();
        for candidate in candidates {
            if candidate != word && !seen.contains(candidate) {
                seen.push(candidate.clone());
            }
        }
        seen
    }

    /// Number of head words in the lexicon.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Load the lexicon at `path` and install it process-wide.
///
/// Idempotent: if a lexicon is already installed, the call is a no-op and
/// the existing one stays in place.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed. The host decides
/// whether that is fatal; retrieval keeps working either way, with empty
/// synonym sets.
pub fn init(path: impl AsRef<Path>) -> Result<()> {
    let lexicon = Lexicon::from_path(path)?;
    install(lexicon);
    Ok(())
}

/// Install an already-built lexicon process-wide. Idempotent.
pub fn install(lexicon: Lexicon) {
    if GLOBAL.set(lexicon).is_err() {
        warn!("lexicon already installed; keeping the existing one");
    }
}

/// Distinct synonyms for `word` from the process-wide lexicon.
///
/// When no lexicon is installed the result is empty and a warning is
/// logged once per process.
#[must_use]
pub fn synonyms(word: &str) -> Vec<String> {
    match GLOBAL.get() {
        Some(lexicon) => lexicon.synonyms(word),
        None => {
            MISSING_WARNING.call_once(|| {
                warn!("no synonym lexicon installed; synonym replacement is disabled");
            });
            Vec::new()
        }
    }
}
