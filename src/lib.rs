//! # excerpts
//!
//! Segment extraction and augmentation for sampling text from plain-text
//! corpora.
//!
//! ## The Problem
//!
//! You have a raw text file — a play, an article, a list of lines — and you
//! want labeled samples out of it: "give me a random dialogue turn",
//! "give me paragraph P3, without punctuation, padded to 64 words". The
//! file carries no schema, so the first job is deciding what a "sample"
//! even is for this document.
//!
//! ## Segment Extraction
//!
//! Three heuristics are tried in order; the first that matches classifies
//! the whole document:
//!
//! ```text
//! Alice:                     First paragraph.        just
//! Hello world.                                       some
//!                            Second paragraph.       lines
//! Bob:
//! Hi there.
//!
//! -> CHARACTER turns         -> PARAGRAPH P1, P2     -> LINE L1, L2, L3
//! ```
//!
//! A document never mixes kinds: one well-formed `Speaker:\n body` block
//! makes the whole file dialogue, otherwise more than one blank-line
//! paragraph makes it paragraphs, otherwise it is sampled line by line.
//! Extraction is deterministic and happens once, when the loader is built.
//!
//! ## Retrieval Pipeline
//!
//! Every retrieval applies the same fixed pipeline to the selected
//! segment's text:
//!
//! ```text
//! preprocess:  remove_punctuation -> tokenize -> pad_length
//! augment:     random_insertion -> synonym_replacement
//! window:      random contiguous n-word window (random retrieval only)
//! ```
//!
//! Options switch stages on and off but never reorder them.
//!
//! ## Quick Start
//!
//! ```rust
//! use excerpts::{AugmentOpts, DatasetLoader, PreprocessOpts, SegmentKind};
//!
//! let loader = DatasetLoader::from_text("Alice:\nHello world.\n\nBob:\nHi there.\n");
//!
//! // Addressed retrieval
//! let sample = loader
//!     .get_segment_by_id("Alice", &PreprocessOpts::default(), &AugmentOpts::default())
//!     .unwrap();
//! assert_eq!(sample.kind, SegmentKind::Character);
//! assert_eq!(sample.text, "Hello world.");
//!
//! // Random retrieval, windowed to at most 50 words
//! let sample = loader
//!     .get_random_segment(50, &PreprocessOpts::default(), &AugmentOpts::default())
//!     .unwrap();
//! assert!(sample.text.split_whitespace().count() <= 50);
//! ```
//!
//! ## Synonym Lexicon
//!
//! Synonym replacement consults a process-wide dictionary that the hosting
//! application installs explicitly at startup:
//!
//! ```rust,no_run
//! excerpts::lexicon::init("thesaurus.json")?;
//! # Ok::<(), excerpts::Error>(())
//! ```
//!
//! The lexicon is optional. Without it, synonym replacement degrades to a
//! no-op with a warning instead of failing requests.
//!
//! ## Failure Model
//!
//! | Condition | Behavior |
//! |-----------|----------|
//! | Missing/unreadable document | Fatal [`Error::Io`] at load |
//! | No segments, unknown id | Soft `None` from retrieval |
//! | Missing lexicon | Empty synonym sets + warning |

mod augment;
mod error;
mod extract;
pub mod lexicon;
mod loader;
mod preprocess;
mod segment;

pub use augment::{
    random_insertion, random_insertion_with_rng, synonym_replacement,
    synonym_replacement_with_rng, AugmentOpts,
};
pub use error::{Error, Result};
pub use extract::extract_segments;
pub use lexicon::Lexicon;
pub use loader::DatasetLoader;
pub use preprocess::{pad_text, remove_punctuation, tokenize, PreprocessOpts, PAD_TOKEN};
pub use segment::{Segment, SegmentKind};
