//! Suggestion capping and match highlighting
//!
//! Highlighting is a case-insensitive scan for the literal query text. Every
//! non-overlapping occurrence is flagged, left to right. Nothing in the query
//! is interpreted as pattern syntax.

use memchr::memmem;

use crate::suggestion::Suggestion;

/// A slice of a label, flagged when it matched the query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub matched: bool,
}

impl<'a> Segment<'a> {
    fn plain(text: &'a str) -> Self {
        Self {
            text,
            matched: false,
        }
    }

    fn matched(text: &'a str) -> Self {
        Self {
            text,
            matched: true,
        }
    }
}

/// A capped suggestion ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct PresentedSuggestion<'a> {
    /// Position within the capped list
    pub index: usize,
    pub suggestion: &'a Suggestion,
    pub segments: Vec<Segment<'a>>,
}

/// Lowercased copy of a label that remembers, for every folded byte, the
/// byte range of the original character it came from.
struct FoldedText {
    folded: String,
    origin: Vec<(usize, usize)>,
}

impl FoldedText {
    fn new(text: &str) -> Self {
        let mut folded = String::with_capacity(text.len());
        let mut origin = Vec::with_capacity(text.len());

        for (start, ch) in text.char_indices() {
            let end = start + ch.len_utf8();
            for lower in ch.to_lowercase() {
                folded.push(lower);
                origin.resize(folded.len(), (start, end));
            }
        }

        Self { folded, origin }
    }

    /// Map a folded byte range back to a range in the original text
    fn original_range(&self, start: usize, end: usize) -> (usize, usize) {
        let orig_start = self.origin[start].0;
        let orig_end = self.origin[end - 1].1;
        (orig_start, orig_end)
    }
}

/// Split `label` into alternating non-matching and matching segments.
///
/// The result always starts and ends with a non-matching segment (which may
/// be empty), like a capturing split: `"Project Alpha"` against `"pro"` gives
/// `["", "Pro", "ject Alpha"]`. An empty query yields the whole label as one
/// non-matching segment.
pub fn highlight<'a>(label: &'a str, query: &str) -> Vec<Segment<'a>> {
    if query.is_empty() {
        return vec![Segment::plain(label)];
    }

    let needle = FoldedText::new(query).folded;
    if needle.is_empty() {
        return vec![Segment::plain(label)];
    }

    let haystack = FoldedText::new(label);
    let mut segments = Vec::new();
    let mut cursor = 0;

    // find_iter reports non-overlapping matches left to right
    for pos in memmem::find_iter(haystack.folded.as_bytes(), needle.as_bytes()) {
        let (start, end) = haystack.original_range(pos, pos + needle.len());
        // A match starting inside an already-consumed character expansion
        // cannot be represented on the original text
        if start < cursor {
            continue;
        }
        segments.push(Segment::plain(&label[cursor..start]));
        segments.push(Segment::matched(&label[start..end]));
        cursor = end;
    }

    segments.push(Segment::plain(&label[cursor..]));
    segments
}

/// Cap `suggestions` to `max` entries in host order and highlight each label
pub fn present<'a>(suggestions: &'a [Suggestion], query: &str, max: usize) -> Vec<PresentedSuggestion<'a>> {
    suggestions
        .iter()
        .take(max)
        .enumerate()
        .map(|(index, suggestion)| PresentedSuggestion {
            index,
            suggestion,
            segments: highlight(&suggestion.label, query),
        })
        .collect()
}

/// Length of the capped list without building it
pub fn capped_len(total: usize, max: usize) -> usize {
    total.min(max)
}

#[cfg(test)]
#[path = "highlight_tests.rs"]
mod highlight_tests;
