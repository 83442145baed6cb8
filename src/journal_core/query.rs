//! Search criteria and the query engine.
//!
//! A [`SearchSpec`] keeps one payload per search mode. Only the active mode
//! filters, but switching modes never clears the others, so going back to a
//! mode restores what was typed there.
//!
//! # Invariants
//! - Query results are always ordered by date, newest first; entries with the
//!   same date keep their collection order.
//! - An empty payload for the active mode yields the whole collection.

use crate::journal_core::highlight::{self, Segment};
use crate::journal_core::{Emotion, JournalEntry};
use chrono::NaiveDate;

/// Which search payload is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Keyword,
    Date,
    Emotion,
}

/// Inclusive date bounds; either side may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| start <= date) && self.end.map_or(true, |end| date <= end)
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// The search fields of the journal view.
///
/// # Examples
///
/// ```
/// use moodlog::journal_core::query::{SearchMode, SearchSpec};
///
/// let mut spec = SearchSpec::default();
/// spec.set_keyword("train");
/// spec.set_mode(SearchMode::Emotion);
/// spec.set_mode(SearchMode::Keyword);
/// assert_eq!(spec.keyword(), "train");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchSpec {
    mode: SearchMode,
    keyword: String,
    range: DateRange,
    emotion: Option<Emotion>,
}

impl SearchSpec {
    pub fn keyword_search(term: &str) -> Self {
        let mut spec = SearchSpec::default();
        spec.set_keyword(term);
        spec
    }

    pub fn date_search(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        let mut spec = SearchSpec::default();
        spec.set_mode(SearchMode::Date);
        spec.set_range(DateRange { start, end });
        spec
    }

    pub fn emotion_search(emotion: Emotion) -> Self {
        let mut spec = SearchSpec::default();
        spec.set_mode(SearchMode::Emotion);
        spec.select_emotion(Some(emotion));
        spec
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn emotion(&self) -> Option<Emotion> {
        self.emotion
    }

    /// Switches the active mode without touching any payload.
    pub fn set_mode(&mut self, mode: SearchMode) {
        self.mode = mode;
    }

    pub fn set_keyword(&mut self, keyword: &str) {
        self.keyword = keyword.to_string();
    }

    pub fn set_range(&mut self, range: DateRange) {
        self.range = range;
    }

    pub fn set_start(&mut self, start: Option<NaiveDate>) {
        self.range.start = start;
    }

    pub fn set_end(&mut self, end: Option<NaiveDate>) {
        self.range.end = end;
    }

    pub fn select_emotion(&mut self, emotion: Option<Emotion>) {
        self.emotion = emotion;
    }

    /// Selects `emotion`, or clears the selection if it is already selected.
    pub fn toggle_emotion(&mut self, emotion: Emotion) {
        self.emotion = if self.emotion == Some(emotion) {
            None
        } else {
            Some(emotion)
        };
    }

    /// Clears every payload. The active mode is kept.
    pub fn clear(&mut self) {
        self.keyword.clear();
        self.range = DateRange::default();
        self.emotion = None;
    }

    /// Whether any payload, in any mode, is non-empty.
    ///
    /// This is a raw emptiness check: a whitespace-only keyword counts even
    /// though the keyword filter itself treats it as blank.
    pub fn has_criteria(&self) -> bool {
        !self.keyword.is_empty() || self.emotion.is_some() || !self.range.is_empty()
    }

    /// Highlights `text` with the keyword, if keyword mode is active.
    pub fn highlight<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        match self.mode {
            SearchMode::Keyword => highlight::highlight(text, &self.keyword),
            _ => vec![Segment::plain(text)],
        }
    }

    fn matches(&self, entry: &JournalEntry) -> bool {
        match self.mode {
            SearchMode::Keyword => {
                if self.keyword.trim().is_empty() {
                    return true;
                }
                highlight::contains(&entry.event, &self.keyword)
                    || highlight::contains(&entry.realization, &self.keyword)
            }
            SearchMode::Emotion => self.emotion.map_or(true, |emotion| entry.emotion == emotion),
            SearchMode::Date => self.range.contains(entry.date),
        }
    }
}

/// Sorts entries newest first; equal dates keep their relative order.
pub fn sort_newest_first(entries: &mut [&JournalEntry]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
}

/// The `limit` most recently dated entries, newest first.
pub fn most_recent(entries: &[JournalEntry], limit: usize) -> Vec<JournalEntry> {
    let mut sorted: Vec<&JournalEntry> = entries.iter().collect();
    sort_newest_first(&mut sorted);
    sorted.into_iter().take(limit).cloned().collect()
}

/// Runs the active filter of `spec` over `entries`.
///
/// # Examples
///
/// ```
/// use moodlog::journal_core::query::{run_query, SearchSpec};
/// use moodlog::journal_core::{Emotion, JournalEntry};
/// use chrono::NaiveDate;
///
/// let entries = vec![
///     JournalEntry::new(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(), Emotion::Anger, "late train", ""),
///     JournalEntry::new(NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(), Emotion::Guilt, "missed call", ""),
/// ];
///
/// let results = run_query(&entries, &SearchSpec::keyword_search("TRAIN"));
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].event, "late train");
/// ```
pub fn run_query<'a>(entries: &'a [JournalEntry], spec: &SearchSpec) -> Vec<&'a JournalEntry> {
    let mut results: Vec<&JournalEntry> = entries.iter().filter(|e| spec.matches(e)).collect();
    sort_newest_first(&mut results);
    results
}

/// What the journal view shows for a given search state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView<'a> {
    /// No search criteria: the recent view.
    Recent(&'a [JournalEntry]),
    /// Criteria matched at least one entry.
    Matches(Vec<&'a JournalEntry>),
    /// Criteria are set but nothing matched.
    NoMatches,
}

impl ResultView<'_> {
    pub fn len(&self) -> usize {
        match self {
            ResultView::Recent(entries) => entries.len(),
            ResultView::Matches(entries) => entries.len(),
            ResultView::NoMatches => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn entries(&self) -> Vec<&JournalEntry> {
        match self {
            ResultView::Recent(entries) => entries.iter().collect(),
            ResultView::Matches(entries) => entries.clone(),
            ResultView::NoMatches => Vec::new(),
        }
    }
}

/// Decides between the recent view and a query over the full collection.
pub fn resolve_view<'a>(
    entries: &'a [JournalEntry],
    recent: &'a [JournalEntry],
    spec: &SearchSpec,
) -> ResultView<'a> {
    if !spec.has_criteria() {
        return ResultView::Recent(recent);
    }
    let results = run_query(entries, spec);
    if results.is_empty() {
        ResultView::NoMatches
    } else {
        ResultView::Matches(results)
    }
}
