//! Command-line interface for moodlog.

pub mod output;

use crate::constants::{APP_DESCRIPTION, APP_NAME, LOG_FORMAT_JSON, LOG_FORMAT_TEXT};
use crate::errors::{AppError, AppResult};
use crate::journal_core::query::SearchSpec;
use crate::journal_core::{parse_date, Emotion};
use crate::session::EditField;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// An emotion journal for the terminal
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Print verbose output
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Log output format (text or json); json is used by default when CI is set
    #[clap(long, global = true, value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON])]
    pub log_format: Option<String>,

    #[clap(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Shows the current user, entry count and sync state
    Status,
    /// Lists the five most recently dated entries
    Recent,
    /// Searches entries by keyword, date range or emotion
    Search(SearchArgs),
    /// Shows one entry in full, including any counselor memo
    Show {
        /// Entry id
        id: String,
    },
    /// Edits fields of an entry and saves it
    Edit(EditArgs),
    /// Deletes an entry after confirmation
    Delete {
        /// Entry id
        id: String,

        /// Skip the confirmation prompt
        #[clap(short = 'y', long)]
        yes: bool,
    },
    /// Prints the date-picker grid for a month
    Calendar {
        /// Month to show (format: YYYY-MM, defaults to the current month)
        #[clap(short = 'm', long)]
        month: Option<String>,

        /// Date to mark as selected (format: YYYY-MM-DD or YYYYMMDD)
        #[clap(short = 's', long)]
        selected: Option<String>,
    },
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct SearchArgs {
    /// Case-insensitive text to find in the event or realization
    #[clap(short = 'k', long, conflicts_with_all = &["from", "to", "emotion"])]
    pub keyword: Option<String>,

    /// Earliest date, inclusive (format: YYYY-MM-DD or YYYYMMDD)
    #[clap(long, conflicts_with = "emotion")]
    pub from: Option<String>,

    /// Latest date, inclusive (format: YYYY-MM-DD or YYYYMMDD)
    #[clap(long, conflicts_with = "emotion")]
    pub to: Option<String>,

    /// Emotion, as an English name or Japanese label
    #[clap(short = 'e', long)]
    pub emotion: Option<String>,
}

impl SearchArgs {
    /// Builds the search from the given flags.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Journal` for an unparseable date or unknown emotion.
    pub fn to_spec(&self) -> AppResult<SearchSpec> {
        if let Some(emotion) = &self.emotion {
            let emotion = emotion.parse::<Emotion>().map_err(AppError::Journal)?;
            return Ok(SearchSpec::emotion_search(emotion));
        }
        if self.from.is_some() || self.to.is_some() {
            let start = self.from.as_deref().map(parse_cli_date).transpose()?;
            let end = self.to.as_deref().map(parse_cli_date).transpose()?;
            return Ok(SearchSpec::date_search(start, end));
        }
        Ok(SearchSpec::keyword_search(
            self.keyword.as_deref().unwrap_or_default(),
        ))
    }
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct EditArgs {
    /// Entry id
    pub id: String,

    /// New date (format: YYYY-MM-DD or YYYYMMDD)
    #[clap(short = 'd', long)]
    pub date: Option<String>,

    /// New emotion, as an English name or Japanese label
    #[clap(short = 'e', long)]
    pub emotion: Option<String>,

    /// New event text
    #[clap(long)]
    pub event: Option<String>,

    /// New realization text
    #[clap(long)]
    pub realization: Option<String>,

    /// Self-esteem score; the worthlessness score becomes its complement
    #[clap(long, allow_hyphen_values = true)]
    pub self_esteem: Option<String>,

    /// Worthlessness score; the self-esteem score becomes its complement
    #[clap(long, allow_hyphen_values = true)]
    pub worthlessness: Option<String>,
}

impl EditArgs {
    /// The given fields in the order they are applied.
    pub fn fields(&self) -> Vec<(EditField, &str)> {
        [
            (EditField::Date, &self.date),
            (EditField::Emotion, &self.emotion),
            (EditField::Event, &self.event),
            (EditField::Realization, &self.realization),
            (EditField::SelfEsteemScore, &self.self_esteem),
            (EditField::WorthlessnessScore, &self.worthlessness),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        CliArgs::parse_from(std::env::args())
    }
}

/// Parses a date argument in either accepted format.
pub fn parse_cli_date(input: &str) -> AppResult<NaiveDate> {
    parse_date(input).map_err(|e| AppError::Journal(format!("Invalid date '{}': {}", input, e)))
}

/// Parses a `YYYY-MM` month argument into the first day of that month.
pub fn parse_month(input: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", input), "%Y-%m-%d")
        .map_err(|e| AppError::Journal(format!("Invalid month '{}': {}", input, e)))
}
