//! Edit session: a working copy of one entry.
//!
//! The session is either closed or holds a working copy. Field updates only
//! touch the copy; the shared collection changes on `commit`, through
//! [`EntryStore::update`], and nowhere else.
//!
//! # Invariants
//! - While the emotion is worthlessness, setting either score sets the other
//!   to its complement, so the pair always sums to 100 and both stay in
//!   [1, 100].
//! - Counselor fields are never settable and pass through commit unchanged.
//! - `commit` and `cancel` always leave the session closed.

use crate::constants::{MIN_SCORE, SCORE_TOTAL};
use crate::errors::SessionError;
use crate::journal_core::calendar::{self, CalendarCell, MonthStep};
use crate::journal_core::{parse_date, Emotion, JournalEntry};
use crate::store::{BlobStore, EntryStore};
use chrono::NaiveDate;
use tracing::{debug, info, warn};

/// Highest value a score can take while its complement stays at or above
/// [`MIN_SCORE`].
pub const MAX_SCORE: u8 = SCORE_TOTAL - MIN_SCORE;

/// The editable fields of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Date,
    Emotion,
    Event,
    Realization,
    SelfEsteemScore,
    WorthlessnessScore,
}

impl EditField {
    pub fn name(self) -> &'static str {
        match self {
            EditField::Date => "date",
            EditField::Emotion => "emotion",
            EditField::Event => "event",
            EditField::Realization => "realization",
            EditField::SelfEsteemScore => "selfEsteemScore",
            EditField::WorthlessnessScore => "worthlessnessScore",
        }
    }
}

/// Parses a score the way a number input does: the leading integer is used,
/// anything non-numeric (or zero) becomes [`MIN_SCORE`], and the result is
/// clamped to `[MIN_SCORE, MAX_SCORE]`.
///
/// # Examples
///
/// ```
/// use moodlog::session::parse_score;
///
/// assert_eq!(parse_score("45"), 45);
/// assert_eq!(parse_score("45abc"), 45);
/// assert_eq!(parse_score("abc"), 1);
/// assert_eq!(parse_score("0"), 1);
/// assert_eq!(parse_score("250"), 99);
/// ```
pub fn parse_score(input: &str) -> u8 {
    match leading_integer(input) {
        None | Some(0) => MIN_SCORE,
        Some(value) => value.clamp(i64::from(MIN_SCORE), i64::from(MAX_SCORE)) as u8,
    }
}

fn leading_integer(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionState {
    Closed,
    Open(Box<JournalEntry>),
}

/// Working-copy editor for a single entry, plus its date-picker state.
///
/// The calendar's reference month belongs to the session object rather than
/// to one open edit, so it carries over from one edit to the next.
///
/// # Examples
///
/// ```
/// use moodlog::session::{EditField, EditSession};
/// use moodlog::journal_core::{Emotion, JournalEntry};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 1, 25).unwrap();
/// let entry = JournalEntry::new(today, Emotion::Worthlessness, "event", "realization");
///
/// let mut session = EditSession::new(today);
/// session.open(&entry).unwrap();
/// session.set_field(EditField::SelfEsteemScore, "45").unwrap();
///
/// let working = session.working().unwrap();
/// assert_eq!(working.worthlessness_score, 55);
/// ```
#[derive(Debug, Clone)]
pub struct EditSession {
    state: SessionState,
    calendar_month: NaiveDate,
    calendar_visible: bool,
}

impl EditSession {
    /// Creates a closed session whose calendar starts on `today`'s month.
    pub fn new(today: NaiveDate) -> Self {
        EditSession {
            state: SessionState::Closed,
            calendar_month: today,
            calendar_visible: false,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, SessionState::Open(_))
    }

    pub fn working(&self) -> Option<&JournalEntry> {
        match &self.state {
            SessionState::Open(working) => Some(working),
            SessionState::Closed => None,
        }
    }

    fn working_mut(&mut self) -> Result<&mut JournalEntry, SessionError> {
        match &mut self.state {
            SessionState::Open(working) => Ok(working),
            SessionState::Closed => Err(SessionError::NotOpen),
        }
    }

    /// Starts editing a copy of `entry`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyOpen` if another edit is in progress.
    pub fn open(&mut self, entry: &JournalEntry) -> Result<(), SessionError> {
        if let SessionState::Open(current) = &self.state {
            return Err(SessionError::AlreadyOpen(current.id.to_string()));
        }
        info!("Opened edit session for entry {}", entry.id);
        self.state = SessionState::Open(Box::new(entry.clone()));
        Ok(())
    }

    /// Sets one field of the working copy from raw input.
    ///
    /// # Errors
    ///
    /// - `SessionError::NotOpen` when closed
    /// - `SessionError::InvalidValue` for an unparseable date or unknown emotion
    /// - `SessionError::ScoresUnavailable` when setting a score while the
    ///   working copy's emotion is not worthlessness
    pub fn set_field(&mut self, field: EditField, value: &str) -> Result<(), SessionError> {
        let working = self.working_mut()?;
        match field {
            EditField::Date => {
                working.date =
                    parse_date(value.trim()).map_err(|e| SessionError::InvalidValue {
                        field: field.name(),
                        message: format!("'{}': {}", value, e),
                    })?;
            }
            EditField::Emotion => {
                working.emotion = value.parse::<Emotion>().map_err(|message| {
                    SessionError::InvalidValue {
                        field: field.name(),
                        message,
                    }
                })?;
            }
            EditField::Event => working.event = value.to_string(),
            EditField::Realization => working.realization = value.to_string(),
            EditField::SelfEsteemScore | EditField::WorthlessnessScore => {
                if !working.emotion.has_scores() {
                    return Err(SessionError::ScoresUnavailable);
                }
                let score = parse_score(value);
                let complement = SCORE_TOTAL - score;
                if field == EditField::SelfEsteemScore {
                    working.self_esteem_score = score;
                    working.worthlessness_score = complement;
                } else {
                    working.worthlessness_score = score;
                    working.self_esteem_score = complement;
                }
            }
        }
        debug!("Set {} on working copy", field.name());
        Ok(())
    }

    /// Sets the working copy's date and hides the calendar.
    pub fn select_date(&mut self, date: NaiveDate) -> Result<(), SessionError> {
        self.working_mut()?.date = date;
        self.calendar_visible = false;
        Ok(())
    }

    pub fn toggle_calendar(&mut self) {
        self.calendar_visible = !self.calendar_visible;
    }

    pub fn close_calendar(&mut self) {
        self.calendar_visible = false;
    }

    pub fn calendar_visible(&self) -> bool {
        self.calendar_visible
    }

    pub fn calendar_month(&self) -> NaiveDate {
        self.calendar_month
    }

    pub fn navigate_month(&mut self, step: MonthStep) {
        self.calendar_month = calendar::navigate(self.calendar_month, step);
    }

    /// The date-picker grid, with the working copy's date selected.
    pub fn calendar(&self, today: NaiveDate) -> Vec<CalendarCell> {
        let selected = self.working().map(|w| w.date);
        calendar::generate(self.calendar_month, selected, today)
    }

    /// Writes the working copy back through the store and closes.
    ///
    /// The session is closed whether or not the write succeeds; on failure
    /// the working copy is gone and the error carries the store failure.
    ///
    /// # Errors
    ///
    /// - `SessionError::NotOpen` when closed
    /// - `SessionError::Persist` when the store write fails
    pub fn commit<B: BlobStore>(
        &mut self,
        store: &mut EntryStore<B>,
    ) -> Result<JournalEntry, SessionError> {
        let working = match std::mem::replace(&mut self.state, SessionState::Closed) {
            SessionState::Open(working) => *working,
            SessionState::Closed => return Err(SessionError::NotOpen),
        };
        self.calendar_visible = false;

        match store.update(working.clone()) {
            Ok(_) => {
                info!("Committed edit session for entry {}", working.id);
                Ok(working)
            }
            Err(e) => {
                warn!("Commit for entry {} failed: {}", working.id, e);
                Err(SessionError::Persist(e))
            }
        }
    }

    /// Discards the working copy.
    pub fn cancel(&mut self) -> Result<(), SessionError> {
        match std::mem::replace(&mut self.state, SessionState::Closed) {
            SessionState::Open(working) => {
                self.calendar_visible = false;
                debug!("Cancelled edit session for entry {}", working.id);
                Ok(())
            }
            SessionState::Closed => Err(SessionError::NotOpen),
        }
    }
}
