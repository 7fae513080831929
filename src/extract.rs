//! Segment extraction: classifying a raw document into labeled pieces.
//!
//! A plain-text file carries no schema, so the extractor guesses the
//! document's shape from its surface structure. Three heuristics are tried
//! in a fixed precedence order, and the first that matches classifies the
//! *entire* document:
//!
//! ```text
//! 1. Dialogue    "Speaker:\n body"   -> CHARACTER segments, one per turn
//! 2. Paragraphs  blank-line blocks   -> PARAGRAPH segments P1, P2, ...
//! 3. Lines       newline-separated   -> LINE segments L1, L2, ...
//! ```
//!
//! ## The Dialogue Heuristic
//!
//! A speaker marker is a run of letters/spaces, a colon, and a newline. A
//! turn's body runs from its marker to the next marker (or the end of the
//! document) and stops early at any stray colon:
//!
//! ```text
//! Alice:                      ("Alice", "Hello world.")
//! Hello world.
//!                             ("Bob", "Hi there.")
//! Bob:
//! Hi there.
//! ```
//!
//! One well-formed turn anywhere in the document is enough to classify the
//! whole document as dialogue. Turns whose body collapses to nothing are
//! dropped; if *every* candidate turn is empty the heuristic fails and the
//! paragraph heuristic gets its chance.
//!
//! ## Paragraphs vs Lines
//!
//! A document splits into paragraphs on blank-line boundaries. A single
//! block with no blank lines is not "one paragraph" for our purposes — it
//! is more usefully sampled line by line, so the paragraph heuristic only
//! claims the document when it finds *more than one* paragraph.
//!
//! ## Determinism
//!
//! Extraction is pure: the same input blob always yields the same segment
//! sequence, in source order. All whitespace inside a segment collapses to
//! single spaces so downstream word windows are stable.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::{Segment, SegmentKind};

/// Collapse internal whitespace runs to single spaces and trim the ends.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A speaker marker: letters/spaces, colon, newline. Bodies are whatever
/// lies between consecutive markers.
fn speaker_marker_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Za-z ]+:\n").unwrap())
}

/// Blank-line boundary: a newline, optional whitespace, another newline.
fn paragraph_break_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\s*\n").unwrap())
}

/// Extract labeled segments from a raw document.
///
/// Applies the dialogue, paragraph, and line heuristics in that order; the
/// first that matches wins and every returned segment shares its
/// [`SegmentKind`]. An empty or whitespace-only document yields an empty
/// vector.
///
/// ```rust
/// use excerpts::{extract_segments, SegmentKind};
///
/// let segments = extract_segments("Alice:\nHello world.\n\nBob:\nHi there.\n");
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].kind, SegmentKind::Character);
/// assert_eq!(segments[0].id, "Alice");
/// assert_eq!(segments[0].text, "Hello world.");
/// ```
#[must_use]
pub fn extract_segments(text: &str) -> Vec<Segment> {
    let dialogue = extract_dialogue(text);
    if !dialogue.is_empty() {
        debug!(segments = dialogue.len(), "classified document as dialogue");
        return dialogue;
    }

    let paragraphs = extract_paragraphs(text);
    if paragraphs.len() > 1 {
        debug!(
            segments = paragraphs.len(),
            "classified document as paragraphs"
        );
        return paragraphs;
    }

    let lines = extract_lines(text);
    debug!(segments = lines.len(), "classified document as lines");
    lines
}

/// Dialogue turns as `Character` segments, in source order.
fn extract_dialogue(text: &str) -> Vec<Segment> {
    let markers: Vec<_> = speaker_marker_re().find_iter(text).collect();

    let mut segments = Vec::with_capacity(markers.len());
    for (i, marker) in markers.iter().enumerate() {
        let body_end = markers.get(i + 1).map_or(text.len(), regex::Match::start);
        let mut body = &text[marker.end()..body_end];

        // Bodies are colon-free by definition; a stray colon ends the turn.
        if let Some(colon) = body.find(':') {
            body = &body[..colon];
        }

        let body = collapse_whitespace(body);
        if body.is_empty() {
            continue;
        }

        let speaker = marker.as_str().trim_end_matches(":\n").trim();
        segments.push(Segment::new(SegmentKind::Character, speaker, body));
    }

    segments
}

/// Blank-line-delimited blocks as `Paragraph` segments with ids `P1..`.
fn extract_paragraphs(text: &str) -> Vec<Segment> {
    paragraph_break_re()
        .split(text)
        .map(collapse_whitespace)
        .filter(|p| !p.is_empty())
        .enumerate()
        .map(|(i, p)| Segment::new(SegmentKind::Paragraph, format!("P{}", i + 1), p))
        .collect()
}

/// Non-empty lines as `Line` segments with ids `L1..`.
fn extract_lines(text: &str) -> Vec<Segment> {
    text.split('\n')
        .map(collapse_whitespace)
        .filter(|l| !l.is_empty())
        .enumerate()
        .map(|(i, l)| Segment::new(SegmentKind::Line, format!("L{}", i + 1), l))
        .collect()
}
