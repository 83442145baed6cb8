//! Error handling utilities for the moodlog application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! Every failure is local and non-fatal: the caller reports it and the journal
//! stays usable. A malformed persisted blob is not an error at all from the
//! caller's point of view, the entry store recovers it as an empty collection.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents errors raised by the key-addressed blob store and the entry store
/// layered on top of it.
///
/// # Examples
///
/// ```
/// use moodlog::errors::StoreError;
/// use std::io::{self, ErrorKind};
///
/// let error = StoreError::PersistFailure {
///     key: "journalEntries".to_string(),
///     source: io::Error::new(ErrorKind::PermissionDenied, "permission denied"),
/// };
///
/// assert!(format!("{}", error).contains("journalEntries"));
/// assert!(format!("{}", error).contains("permission denied"));
/// ```
#[derive(Debug, Error)]
pub enum StoreError {
    /// The persisted blob could not be read or decoded.
    ///
    /// The entry store recovers from this by treating the store as empty;
    /// it only surfaces from the raw blob-store API.
    #[error("Failed to load '{key}': {message}")]
    LoadFailure {
        /// The blob key that failed to load
        key: String,
        /// A description of the read or decode failure
        message: String,
    },

    /// Writing the blob failed.
    #[error("Failed to persist '{key}': {source}. Your change is kept in memory but is not saved yet; check disk space and permissions, then try again.")]
    PersistFailure {
        /// The blob key that failed to write
        key: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The collection could not be encoded.
    #[error("Failed to encode the entry collection: {0}")]
    Encode(#[from] serde_json::Error),

    /// The blob file is locked by another writer.
    #[error("Blob lock error: {0}")]
    Lock(#[from] LockError),
}

/// Represents errors that can occur when attempting to lock the blob file for writing.
///
/// # Examples
///
/// ```
/// use moodlog::errors::LockError;
/// use std::path::PathBuf;
///
/// let error = LockError::FileBusy {
///     path: PathBuf::from("/path/to/journalEntries.lock"),
/// };
///
/// assert!(format!("{}", error).contains("currently being written"));
/// ```
#[derive(Debug, Error)]
pub enum LockError {
    /// The file is already locked by another process.
    #[error("Journal data is currently being written by another process: {path}. Please wait for the other moodlog process to finish.")]
    FileBusy {
        /// The path to the lock file
        path: PathBuf,
    },

    /// Acquiring the lock failed for a technical reason.
    #[error("Failed to acquire lock {path}: {source}. Please check file permissions and ensure the directory is accessible.")]
    AcquisitionFailed {
        /// The path to the lock file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Represents errors produced by an edit session.
///
/// # Examples
///
/// ```
/// use moodlog::errors::SessionError;
///
/// let error = SessionError::NotOpen;
/// assert!(format!("{}", error).contains("No entry is being edited"));
/// ```
#[derive(Debug, Error)]
pub enum SessionError {
    /// `commit`, `cancel` or a field update was attempted while closed.
    #[error("No entry is being edited")]
    NotOpen,

    /// `open` was attempted while another entry is being edited.
    #[error("Entry '{0}' is already being edited; commit or cancel it first")]
    AlreadyOpen(String),

    /// The requested entry does not exist in the collection.
    #[error("No diary entry with id '{0}'")]
    UnknownEntry(String),

    /// Score fields are only editable for worthlessness entries.
    #[error("Scores can only be edited while the emotion is worthlessness (無価値感)")]
    ScoresUnavailable,

    /// A field value could not be parsed.
    #[error("Invalid value for {field}: {message}")]
    InvalidValue {
        /// The field that was being set
        field: &'static str,
        /// A description of the problem
        message: String,
    },

    /// The commit reached the store but the write failed.
    #[error("Commit failed: {0}")]
    Persist(#[source] StoreError),
}

/// Represents all possible errors that can occur in the moodlog application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use moodlog::errors::AppError;
///
/// let error = AppError::Config("Missing data directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing data directory");
/// ```
///
/// Converting from an IO error:
/// ```
/// use moodlog::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors in journal logic (e.g., invalid date formats or unknown emotions).
    #[error("Journal logic error: {0}")]
    Journal(String),

    /// Errors from the entry store.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Errors from an edit session.
    #[error("Edit error: {0}")]
    Session(#[from] SessionError),

    /// A persistence operation is already in flight.
    #[error("Another save is still in progress; please wait for it to finish")]
    Busy,
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use moodlog::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::Journal("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
