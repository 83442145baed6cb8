//! Case-insensitive keyword highlighting.
//!
//! The term is always literal text. Matching runs on a lowercase-folded copy
//! of the input with a map back to the original byte offsets, so a match is
//! only reported when it starts and ends on original character boundaries.

/// A run of text, either matching the highlighted term or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub is_match: bool,
}

impl<'a> Segment<'a> {
    pub fn plain(text: &'a str) -> Self {
        Segment {
            text,
            is_match: false,
        }
    }

    pub fn matched(text: &'a str) -> Self {
        Segment {
            text,
            is_match: true,
        }
    }
}

fn fold(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Byte ranges of `text` matching the folded `term`, left to right and
/// without overlap. Every range starts and ends on a character boundary of
/// `text`. `needle` must already be folded and non-empty.
fn match_ranges(text: &str, needle: &str) -> Vec<(usize, usize)> {
    let mut folded = String::with_capacity(text.len());
    // (offset in folded, offset in text) for every character start, plus the end.
    let mut boundaries: Vec<(usize, usize)> = Vec::with_capacity(text.len() + 1);
    for (offset, ch) in text.char_indices() {
        boundaries.push((folded.len(), offset));
        folded.extend(ch.to_lowercase());
    }
    boundaries.push((folded.len(), text.len()));

    let original_offset = |folded_offset: usize| {
        boundaries
            .binary_search_by_key(&folded_offset, |&(f, _)| f)
            .ok()
            .map(|i| boundaries[i].1)
    };

    let mut ranges = Vec::new();
    let mut search_from = 0;
    while let Some(found) = folded[search_from..].find(needle) {
        let start = search_from + found;
        let end = start + needle.len();
        match (original_offset(start), original_offset(end)) {
            (Some(match_start), Some(match_end)) => {
                ranges.push((match_start, match_end));
                search_from = end;
            }
            _ => {
                // Match splits a folded character; resume after its first char.
                search_from = start + folded[start..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    ranges
}

/// Whether `highlight(text, term)` would report at least one match.
///
/// A blank term matches nothing here; callers decide what a blank term means.
pub fn contains(text: &str, term: &str) -> bool {
    if term.trim().is_empty() {
        return false;
    }
    !match_ranges(text, &fold(term)).is_empty()
}

/// Splits `text` into matching and non-matching segments for `term`.
///
/// A blank term yields the whole text as one plain segment. Matches are
/// found left to right without overlap; adjacent matches stay separate
/// segments.
///
/// # Examples
///
/// ```
/// use moodlog::journal_core::highlight::{highlight, Segment};
///
/// let segments = highlight("Late, LATE again", "late");
/// assert_eq!(
///     segments,
///     vec![
///         Segment::matched("Late"),
///         Segment::plain(", "),
///         Segment::matched("LATE"),
///         Segment::plain(" again"),
///     ]
/// );
/// ```
pub fn highlight<'a>(text: &'a str, term: &str) -> Vec<Segment<'a>> {
    if term.trim().is_empty() {
        return vec![Segment::plain(text)];
    }

    let mut segments = Vec::new();
    let mut cursor = 0;
    for (start, end) in match_ranges(text, &fold(term)) {
        if start > cursor {
            segments.push(Segment::plain(&text[cursor..start]));
        }
        segments.push(Segment::matched(&text[start..end]));
        cursor = end;
    }

    if cursor < text.len() || segments.is_empty() {
        segments.push(Segment::plain(&text[cursor..]));
    }
    segments
}
