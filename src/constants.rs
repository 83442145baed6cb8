//! Constants used throughout the application.
//!
//! This module contains all constants used in the moodlog application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "moodlog";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "An emotion journal: review, search, edit and remove diary entries";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Log level used when `--verbose` is passed.
pub const VERBOSE_LOG_LEVEL: &str = "debug";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the moodlog data directory.
pub const ENV_VAR_MOODLOG_DIR: &str = "MOODLOG_DIR";
/// Environment variable for the display name of the current user.
pub const ENV_VAR_MOODLOG_USER: &str = "MOODLOG_USER";
/// Standard environment variable for the login name.
pub const ENV_VAR_USER: &str = "USER";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Environment variable often used to indicate a Continuous Integration environment.
pub const ENV_VAR_CI: &str = "CI";
/// Default sub-directory name for the data directory within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = "Documents/moodlog";
/// Display name used when no identity is available.
pub const DEFAULT_USER_NAME: &str = "guest";

// Validation
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// Persistence
/// Fixed key under which the entry collection is stored.
pub const ENTRIES_KEY: &str = "journalEntries";
/// File extension for blobs in the file-backed store.
pub const BLOB_FILE_EXTENSION: &str = "json";
/// File extension for the advisory lock taken while writing a blob.
pub const LOCK_FILE_EXTENSION: &str = "lock";
/// Default POSIX permissions for newly created directories (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;
/// Default POSIX permissions for newly written blobs (owner read/write).
#[cfg(unix)]
pub const DEFAULT_FILE_PERMISSIONS: u32 = 0o600;

// Entries & Scores
/// Number of entries in the recent view.
pub const RECENT_ENTRIES_LIMIT: usize = 5;
/// Lowest value a score may take.
pub const MIN_SCORE: u8 = 1;
/// Sum of the two complementary scores.
pub const SCORE_TOTAL: u8 = 100;
/// Character count after which list previews are truncated.
pub const PREVIEW_CHAR_LIMIT: usize = 60;
/// Suffix appended to truncated previews.
pub const PREVIEW_ELLIPSIS: &str = "...";
/// Attribution used for a counselor memo with no assigned counselor.
pub const DEFAULT_COUNSELOR_LABEL: &str = "カウンセラー";

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format string for compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";
/// Number of cells in a calendar grid (six weeks).
pub const CALENDAR_CELL_COUNT: usize = 42;
/// Number of days in a calendar row.
pub const DAYS_PER_WEEK: usize = 7;
/// Weekday labels, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

// Notifications
/// Shown after a successful commit.
pub const MSG_UPDATE_SUCCEEDED: &str = "Diary entry updated.";
/// Shown after a failed commit.
pub const MSG_UPDATE_FAILED: &str = "Failed to update the diary entry. Please try again.";
/// Shown after a successful delete.
pub const MSG_DELETE_SUCCEEDED: &str = "Diary entry deleted.";
/// Shown after a failed delete.
pub const MSG_DELETE_FAILED: &str = "Failed to delete the diary entry. Please try again.";
/// Question asked before deleting.
pub const PROMPT_DELETE: &str = "Delete this diary entry?";

// Terminal Output
/// Marker placed before a highlighted keyword match.
pub const HIGHLIGHT_OPEN: &str = "[";
/// Marker placed after a highlighted keyword match.
pub const HIGHLIGHT_CLOSE: &str = "]";
/// Heading of the recent view.
pub const HEADING_RECENT: &str = "Recent entries";
/// Shown when the collection is empty.
pub const MSG_NO_ENTRIES: &str = "No diary entries yet. Write your first one!";
/// Shown when search criteria match nothing.
pub const MSG_NO_MATCHES: &str = "No diary entries match the search.";

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "moodlog";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
