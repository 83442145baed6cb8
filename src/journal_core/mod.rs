//! Core journal functionality without I/O operations.
//!
//! This module contains the entry model and the pure logic built on it:
//! the query engine (`query`), keyword highlighting (`highlight`), the
//! date-picker grid (`calendar`) and display formatting (`display`). None of
//! it touches the filesystem; persistence lives in `store`.

pub mod calendar;
pub mod display;
pub mod highlight;
pub mod query;

use crate::constants;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// One of the eight fixed emotion categories.
///
/// Entries are persisted with the Japanese label, which is also what
/// [`fmt::Display`] prints. [`FromStr`] accepts either the label or the
/// English name, case-insensitively for the latter.
///
/// # Examples
///
/// ```
/// use moodlog::journal_core::Emotion;
///
/// let emotion: Emotion = "worthlessness".parse().unwrap();
/// assert_eq!(emotion, Emotion::Worthlessness);
/// assert_eq!(emotion.label(), "無価値感");
/// assert_eq!("怒り".parse::<Emotion>().unwrap(), Emotion::Anger);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emotion {
    #[serde(rename = "恐怖")]
    Fear,
    #[serde(rename = "悲しみ")]
    Sadness,
    #[serde(rename = "怒り")]
    Anger,
    #[serde(rename = "悔しい")]
    Frustration,
    #[serde(rename = "無価値感")]
    Worthlessness,
    #[serde(rename = "罪悪感")]
    Guilt,
    #[serde(rename = "寂しさ")]
    Loneliness,
    #[serde(rename = "恥ずかしさ")]
    Shame,
}

impl Emotion {
    /// All emotions in display order.
    pub const ALL: [Emotion; 8] = [
        Emotion::Fear,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Frustration,
        Emotion::Worthlessness,
        Emotion::Guilt,
        Emotion::Loneliness,
        Emotion::Shame,
    ];

    /// The Japanese label, as persisted and displayed.
    pub fn label(self) -> &'static str {
        match self {
            Emotion::Fear => "恐怖",
            Emotion::Sadness => "悲しみ",
            Emotion::Anger => "怒り",
            Emotion::Frustration => "悔しい",
            Emotion::Worthlessness => "無価値感",
            Emotion::Guilt => "罪悪感",
            Emotion::Loneliness => "寂しさ",
            Emotion::Shame => "恥ずかしさ",
        }
    }

    /// The English name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Emotion::Fear => "fear",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Frustration => "frustration",
            Emotion::Worthlessness => "worthlessness",
            Emotion::Guilt => "guilt",
            Emotion::Loneliness => "loneliness",
            Emotion::Shame => "shame",
        }
    }

    /// Whether entries with this emotion carry meaningful scores.
    pub fn has_scores(self) -> bool {
        self == Emotion::Worthlessness
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Emotion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Emotion::ALL
            .into_iter()
            .find(|e| e.label() == trimmed || e.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("unknown emotion '{}'", s))
    }
}

/// Opaque identifier of a journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        EntryId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        EntryId(value.to_string())
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        EntryId(value)
    }
}

/// A single diary entry.
///
/// Field names on the wire follow the persisted format: camelCase for the
/// entry's own fields, snake_case for the two counselor fields that are
/// written by the reviewer side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: EntryId,
    pub date: NaiveDate,
    pub emotion: Emotion,
    pub event: String,
    pub realization: String,
    #[serde(deserialize_with = "deserialize_score")]
    pub self_esteem_score: u8,
    #[serde(deserialize_with = "deserialize_score")]
    pub worthlessness_score: u8,
    #[serde(
        rename = "counselor_memo",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub counselor_memo: Option<String>,
    #[serde(
        rename = "assigned_counselor",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub assigned_counselor: Option<String>,
}

/// Reads a persisted score, rounding and clamping it into
/// `MIN_SCORE..=SCORE_TOTAL`.
///
/// Collections written by earlier versions can hold negative, oversized or
/// fractional scores.
fn deserialize_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    let clamped = raw
        .round()
        .clamp(f64::from(constants::MIN_SCORE), f64::from(constants::SCORE_TOTAL));
    Ok(clamped as u8)
}

impl JournalEntry {
    /// Creates an entry with a fresh id, balanced scores and no counselor memo.
    pub fn new(date: NaiveDate, emotion: Emotion, event: &str, realization: &str) -> Self {
        let half = constants::SCORE_TOTAL / 2;
        JournalEntry {
            id: EntryId::generate(),
            date,
            emotion,
            event: event.to_string(),
            realization: realization.to_string(),
            self_esteem_score: half,
            worthlessness_score: constants::SCORE_TOTAL - half,
            counselor_memo: None,
            assigned_counselor: None,
        }
    }

    /// Replaces both scores as given; no complement is enforced here.
    pub fn with_scores(mut self, self_esteem: u8, worthlessness: u8) -> Self {
        self.self_esteem_score = self_esteem;
        self.worthlessness_score = worthlessness;
        self
    }

    /// Whether the entry carries a non-blank counselor memo.
    pub fn has_counselor_memo(&self) -> bool {
        self.counselor_memo
            .as_deref()
            .is_some_and(|memo| !memo.trim().is_empty())
    }
}

/// Parse a date string in YYYY-MM-DD or YYYYMMDD format.
///
/// # Errors
///
/// Returns `chrono::ParseError` if the string matches neither format.
///
/// # Examples
///
/// ```
/// use moodlog::journal_core::parse_date;
///
/// assert_eq!(parse_date("2024-01-10").unwrap().to_string(), "2024-01-10");
/// assert_eq!(parse_date("20240110").unwrap().to_string(), "2024-01-10");
/// assert!(parse_date("Jan 10").is_err());
/// ```
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, constants::DATE_FORMAT_ISO)
        .or_else(|_| NaiveDate::parse_from_str(date_str, constants::DATE_FORMAT_COMPACT))
}
