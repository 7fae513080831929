//! The dataset loader: document ownership and segment retrieval.
//!
//! A [`DatasetLoader`] reads one UTF-8 text file, classifies it into
//! segments once at construction, and then serves retrieval requests over
//! the cached sequence. Each retrieval runs the same pipeline:
//!
//! ```text
//! select segment
//!   -> preprocess   (remove_punctuation -> tokenize -> pad_length)
//!   -> augment      (random_insertion -> synonym_replacement)
//!   -> word window  (random retrieval only)
//! ```
//!
//! The pipeline order is fixed in code. Options only switch stages on and
//! off; a caller cannot reorder them, so two requests with the same options
//! always mean the same computation.
//!
//! Loaders are cheap and self-contained. The surrounding application
//! constructs a fresh one per logical request rather than sharing an
//! instance, so there is no cross-request state to coordinate.

use std::path::Path;

use rand::Rng;

use crate::augment::{random_insertion_with_rng, synonym_replacement_with_rng, AugmentOpts};
use crate::extract::extract_segments;
use crate::preprocess::{pad_text, remove_punctuation, tokenize, PreprocessOpts};
use crate::{Error, Result, Segment};

/// A loaded document and its derived segment sequence.
///
/// ## Example
///
/// ```rust
/// use excerpts::{AugmentOpts, DatasetLoader, PreprocessOpts};
///
/// let loader = DatasetLoader::from_text("Alice:\nHello world.\n\nBob:\nHi there.\n");
/// assert_eq!(loader.len(), 2);
///
/// let sample = loader
///     .get_segment_by_id("Bob", &PreprocessOpts::default(), &AugmentOpts::default())
///     .unwrap();
/// assert_eq!(sample.text, "Hi there.");
/// ```
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    text: String,
    segments: Vec<Segment>,
}

impl DatasetLoader {
    /// Load a document from a file and extract its segments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file is missing or unreadable. This is
    /// the one fatal failure in the system; everything downstream degrades
    /// softly instead.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(text))
    }

    /// Build a loader from an in-memory document.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let segments = extract_segments(&text);
        Self { text, segments }
    }

    /// The raw document text, unmodified since load.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The extracted segments, in document order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of extracted segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the document produced no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Retrieve a uniformly random segment, processed and windowed.
    ///
    /// After preprocessing and augmentation, the text is cut to at most
    /// `n_words` words: short texts pass through whole, longer ones yield
    /// a uniformly random contiguous window of exactly `n_words` words.
    ///
    /// Returns `None` when the document has no segments.
    #[must_use]
    pub fn get_random_segment(
        &self,
        n_words: usize,
        preprocess: &PreprocessOpts,
        augment: &AugmentOpts,
    ) -> Option<Segment> {
        self.get_random_segment_with_rng(n_words, preprocess, augment, &mut rand::thread_rng())
    }

    /// [`Self::get_random_segment`] with a caller-supplied generator.
    pub fn get_random_segment_with_rng<R: Rng + ?Sized>(
        &self,
        n_words: usize,
        preprocess: &PreprocessOpts,
        augment: &AugmentOpts,
        rng: &mut R,
    ) -> Option<Segment> {
        if self.segments.is_empty() {
            return None;
        }

        let segment = &self.segments[rng.gen_range(0..self.segments.len())];
        let processed = apply_pipeline(&segment.text, preprocess, augment, rng);
        let windowed = select_window(&processed, n_words, rng);

        Some(Segment::new(segment.kind, segment.id.clone(), windowed))
    }

    /// Retrieve the first segment whose identifier equals `segment_id`,
    /// processed but not windowed.
    ///
    /// Identifiers are not guaranteed unique (duplicate speaker names);
    /// the first match in document order wins. Returns `None` when no
    /// segment matches.
    #[must_use]
    pub fn get_segment_by_id(
        &self,
        segment_id: &str,
        preprocess: &PreprocessOpts,
        augment: &AugmentOpts,
    ) -> Option<Segment> {
        self.get_segment_by_id_with_rng(segment_id, preprocess, augment, &mut rand::thread_rng())
    }

    /// [`Self::get_segment_by_id`] with a caller-supplied generator.
    pub fn get_segment_by_id_with_rng<R: Rng + ?Sized>(
        &self,
        segment_id: &str,
        preprocess: &PreprocessOpts,
        augment: &AugmentOpts,
        rng: &mut R,
    ) -> Option<Segment> {
        let segment = self.segments.iter().find(|s| s.id == segment_id)?;
        let processed = apply_pipeline(&segment.text, preprocess, augment, rng);

        Some(Segment::new(segment.kind, segment.id.clone(), processed))
    }
}

/// Run the fixed preprocess-then-augment pipeline over one text.
///
/// Stage order is part of the contract: remove_punctuation, tokenize,
/// pad_length, random_insertion, synonym_replacement. A stage runs only if
/// its option is on; counts and lengths of zero count as off.
fn apply_pipeline<R: Rng + ?Sized>(
    text: &str,
    preprocess: &PreprocessOpts,
    augment: &AugmentOpts,
    rng: &mut R,
) -> String {
    let mut text = text.to_string();

    if preprocess.remove_punctuation {
        text = remove_punctuation(&text);
    }
    if preprocess.tokenize {
        text = tokenize(&text).join(" ");
    }
    if let Some(length) = preprocess.pad_length.filter(|&n| n > 0) {
        text = pad_text(&text, length);
    }

    if let Some(n) = augment.random_insertion.filter(|&n| n > 0) {
        text = random_insertion_with_rng(&text, n, rng);
    }
    if let Some(n) = augment.synonym_replacement.filter(|&n| n > 0) {
        text = synonym_replacement_with_rng(&text, n, rng);
    }

    text
}

/// Cut `text` to at most `n_words` words.
///
/// Texts at or under the limit are rejoined whole; longer texts yield a
/// uniformly random contiguous window of exactly `n_words` words, with the
/// start index drawn from `[0, word_count - n_words]`.
fn select_window<R: Rng + ?Sized>(text: &str, n_words: usize, rng: &mut R) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= n_words {
        return words.join(" ");
    }

    let start = rng.gen_range(0..=words.len() - n_words);
    words[start..start + n_words].join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SegmentKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const PLAY: &str = "Alice:\nHello world.\n\nBob:\nHi there.\n";

    fn no_opts() -> (PreprocessOpts, AugmentOpts) {
        (PreprocessOpts::default(), AugmentOpts::default())
    }

    #[test]
    fn test_by_id_returns_processed_segment() {
        let loader = DatasetLoader::from_text(PLAY);
        let (pre, aug) = no_opts();

        let sample = loader.get_segment_by_id("Alice", &pre, &aug).unwrap();
        assert_eq!(sample.kind, SegmentKind::Character);
        assert_eq!(sample.id, "Alice");
        assert_eq!(sample.text, "Hello world.");
    }

    #[test]
    fn test_by_id_unknown_is_none() {
        let loader = DatasetLoader::from_text(PLAY);
        let (pre, aug) = no_opts();
        assert!(loader.get_segment_by_id("Carol", &pre, &aug).is_none());
    }

    #[test]
    fn test_by_id_first_match_wins() {
        let text = "Echo:\nfirst turn.\n\nEcho:\nsecond turn.\n";
        let loader = DatasetLoader::from_text(text);
        let (pre, aug) = no_opts();

        let sample = loader.get_segment_by_id("Echo", &pre, &aug).unwrap();
        assert_eq!(sample.text, "first turn.");
    }

    #[test]
    fn test_random_on_empty_document_is_none() {
        let loader = DatasetLoader::from_text("");
        let (pre, aug) = no_opts();
        assert!(loader.is_empty());
        assert!(loader.get_random_segment(10, &pre, &aug).is_none());
    }

    #[test]
    fn test_random_short_text_not_windowed() {
        let loader = DatasetLoader::from_text(PLAY);
        let (pre, aug) = no_opts();
        let mut rng = StdRng::seed_from_u64(1);

        let sample = loader
            .get_random_segment_with_rng(100, &pre, &aug, &mut rng)
            .unwrap();
        assert!(sample.text == "Hello world." || sample.text == "Hi there.");
    }

    #[test]
    fn test_random_window_has_exact_word_count() {
        let text = "one two three four five six seven eight nine ten";
        let loader = DatasetLoader::from_text(text);
        let (pre, aug) = no_opts();

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let sample = loader
                .get_random_segment_with_rng(4, &pre, &aug, &mut rng)
                .unwrap();
            assert_eq!(sample.text.split_whitespace().count(), 4);
            assert!(
                text.contains(sample.text.as_str()),
                "not contiguous: {}",
                sample.text
            );
        }
    }

    #[test]
    fn test_pipeline_order_punctuation_then_pad() {
        let loader = DatasetLoader::from_text("Hi, there!");
        let pre = PreprocessOpts {
            remove_punctuation: true,
            tokenize: false,
            pad_length: Some(4),
        };
        let aug = AugmentOpts::default();

        let sample = loader.get_segment_by_id("L1", &pre, &aug).unwrap();
        assert_eq!(sample.text, "Hi there <PAD> <PAD>");
    }

    #[test]
    fn test_tokenize_stage_rejoins_with_spaces() {
        let loader = DatasetLoader::from_text("Hi, there!");
        let pre = PreprocessOpts {
            tokenize: true,
            ..Default::default()
        };
        let aug = AugmentOpts::default();

        let sample = loader.get_segment_by_id("L1", &pre, &aug).unwrap();
        assert_eq!(sample.text, "Hi , there !");
    }

    #[test]
    fn test_zero_counts_are_noops() {
        let loader = DatasetLoader::from_text(PLAY);
        let pre = PreprocessOpts {
            pad_length: Some(0),
            ..Default::default()
        };
        let aug = AugmentOpts {
            random_insertion: Some(0),
            synonym_replacement: Some(0),
        };

        let sample = loader.get_segment_by_id("Bob", &pre, &aug).unwrap();
        assert_eq!(sample.text, "Hi there.");
    }

    #[test]
    fn test_insertion_feeds_into_window() {
        let loader = DatasetLoader::from_text("alpha beta gamma delta");
        let pre = PreprocessOpts::default();
        let aug = AugmentOpts {
            random_insertion: Some(2),
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(9);

        // 4 + 2 inserted words, windowed back down to 4.
        let sample = loader
            .get_random_segment_with_rng(4, &pre, &aug, &mut rng)
            .unwrap();
        assert_eq!(sample.text.split_whitespace().count(), 4);
    }

    #[test]
    fn test_seeded_retrieval_reproducible() {
        let loader = DatasetLoader::from_text(PLAY);
        let (pre, aug) = no_opts();

        let a = loader.get_random_segment_with_rng(5, &pre, &aug, &mut StdRng::seed_from_u64(21));
        let b = loader.get_random_segment_with_rng(5, &pre, &aug, &mut StdRng::seed_from_u64(21));
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = DatasetLoader::from_path("/no/such/corpus.txt").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
