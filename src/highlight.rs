//! Span-based highlighting of clause annotations.
//!
//! The analysis service returns character-offset spans into the exact text
//! it was given. Offsets are UTF-16 code units (the service indexes
//! JavaScript strings); they are only valid against the buffer they were
//! computed from. Normalizing a text after computing spans invalidates
//! them.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Half-open `[start, end)` interval in UTF-16 code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Risk classification of a clause, as produced by the analysis service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl FromStr for RiskLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            "CRITICAL" => Ok(Self::Critical),
            other => Err(Error::InvalidRiskLevel(other.to_string())),
        }
    }
}

/// Externally produced clause annotation consumed for highlighting.
///
/// Spans for a single rendering pass are expected to be pairwise
/// non-overlapping; the highlighter tolerates out-of-order spans by
/// sorting but does not repair overlaps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClauseAnnotation {
    pub spans: Vec<Span>,
    pub identifier: String,
    pub risk_level: RiskLevel,
    pub text: String,
}

/// One rendering-ready piece of the partitioned text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub highlighted: bool,
    /// The clamped source span for highlighted segments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

impl<'a> Segment<'a> {
    fn plain(text: &'a str) -> Self {
        Self {
            text,
            highlighted: false,
            span: None,
        }
    }

    fn marked(text: &'a str, span: Span) -> Self {
        Self {
            text,
            highlighted: true,
            span: Some(span),
        }
    }
}

/// UTF-16 code unit length of a text.
pub fn len_utf16(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Byte offsets for each UTF-16 offset, plus a terminal entry.
///
/// An offset landing inside a surrogate pair rounds down to the character
/// boundary; Rust strings cannot be split mid-scalar.
struct Utf16Index {
    byte_offsets: Vec<usize>,
}

impl Utf16Index {
    fn build(text: &str) -> Self {
        let mut byte_offsets = Vec::with_capacity(text.len() + 1);
        for (byte_idx, ch) in text.char_indices() {
            for _ in 0..ch.len_utf16() {
                byte_offsets.push(byte_idx);
            }
        }
        byte_offsets.push(text.len());
        Self { byte_offsets }
    }

    fn len(&self) -> usize {
        self.byte_offsets.len() - 1
    }

    /// Clamps out-of-range offsets to the end of the text.
    fn byte_at(&self, utf16_offset: usize) -> usize {
        let idx = utf16_offset.min(self.len());
        self.byte_offsets[idx]
    }
}

/// Partitions text into alternating plain/highlighted segments.
///
/// Spans are stably sorted by `start` (equal starts keep caller order) and
/// walked with a cursor: a plain segment is emitted for any gap before a
/// span, then a highlighted segment for the span itself. Span ends past
/// the text length are clamped. Overlapping spans produce duplicated
/// output rather than a panic; repairing overlaps is the producer's job,
/// not this renderer's.
///
/// Concatenating the returned segments reproduces the input exactly for
/// any non-overlapping, in-range span set.
///
/// # Example
///
/// ```
/// use lexnorm::highlight::{highlight, Span};
///
/// let segments = highlight("ABCDE", &[Span::new(1, 3)]);
/// let texts: Vec<&str> = segments.iter().map(|s| s.text).collect();
/// assert_eq!(texts, ["A", "BC", "DE"]);
/// assert!(segments[1].highlighted);
/// ```
pub fn highlight<'a>(text: &'a str, spans: &[Span]) -> Vec<Segment<'a>> {
    if spans.is_empty() {
        return vec![Segment::plain(text)];
    }

    let index = Utf16Index::build(text);
    let mut sorted: Vec<Span> = spans.to_vec();
    sorted.sort_by_key(|s| s.start);

    let mut segments = Vec::with_capacity(sorted.len() * 2 + 1);
    let mut pos = 0usize;

    for span in sorted {
        let start = span.start.min(index.len());
        let end = span.end.clamp(start, index.len());

        if start > pos {
            let gap = &text[index.byte_at(pos)..index.byte_at(start)];
            if !gap.is_empty() {
                segments.push(Segment::plain(gap));
            }
        }
        segments.push(Segment::marked(
            &text[index.byte_at(start)..index.byte_at(end)],
            Span::new(start, end),
        ));
        pos = end;
    }

    if pos < index.len() {
        segments.push(Segment::plain(&text[index.byte_at(pos)..]));
    }

    segments
}

/// Flattens the spans of a set of clause annotations and highlights them.
pub fn highlight_clauses<'a>(text: &'a str, clauses: &[ClauseAnnotation]) -> Vec<Segment<'a>> {
    let spans: Vec<Span> = clauses.iter().flat_map(|c| c.spans.iter().copied()).collect();
    highlight(text, &spans)
}
