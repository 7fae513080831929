//! The Segment type: a labeled piece of a document.

use serde::{Deserialize, Serialize};

/// How a document was carved into segments.
///
/// Classification is mutually exclusive for a whole document: the first
/// extraction heuristic that matches decides the kind for every segment
/// the document produces. See [`crate::extract_segments`] for the
/// precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentKind {
    /// A dialogue turn attributed to a named speaker.
    #[serde(rename = "CHARACTER")]
    Character,
    /// A blank-line-delimited paragraph.
    #[serde(rename = "PARAGRAPH")]
    Paragraph,
    /// A single non-empty line.
    #[serde(rename = "LINE")]
    Line,
}

impl SegmentKind {
    /// The wire/display name of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Character => "CHARACTER",
            Self::Paragraph => "PARAGRAPH",
            Self::Line => "LINE",
        }
    }
}

impl std::fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labeled, whitespace-normalized piece of a document.
///
/// Each segment is a self-contained sample: it carries its classification,
/// an identifier, and the text itself.
///
/// ## Identifiers
///
/// For [`SegmentKind::Character`] the identifier is the speaker name taken
/// from the dialogue marker, and speakers who talk more than once produce
/// more than one segment with the same identifier. For the other kinds the
/// identifier is a generated 1-based positional tag (`P1`, `P2`, … or
/// `L1`, `L2`, …) that is unique within the document:
///
/// ```rust
/// use excerpts::{extract_segments, SegmentKind};
///
/// let segments = extract_segments("one\n\ntwo\n\nthree");
/// assert_eq!(segments[1].kind, SegmentKind::Paragraph);
/// assert_eq!(segments[1].id, "P2");
/// assert_eq!(segments[1].text, "two");
/// ```
///
/// ## Normalization
///
/// `text` never contains runs of whitespace: internal whitespace is
/// collapsed to single spaces and the ends are trimmed, so word counts and
/// word windows are well defined downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Classification shared by every segment of the source document.
    pub kind: SegmentKind,
    /// Speaker name or positional tag (`P<n>` / `L<n>`).
    pub id: String,
    /// The whitespace-normalized segment text.
    pub text: String,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub fn new(kind: SegmentKind, id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            text: text.into(),
        }
    }

    /// Number of whitespace-separated words in the segment text.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Whether the segment text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} {}] {}", self.kind, self.id, self.text)
    }
}
