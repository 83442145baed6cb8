/*!
# moodlog

moodlog keeps an emotion journal: dated diary entries, each tagged with one of
eight emotion categories, with a pair of complementary self-esteem and
worthlessness scores for worthlessness entries and an optional read-only
comment from a counselor.

## Core Features

- A recent view of the five most recently dated entries
- Search by keyword, inclusive date range or emotion, newest first
- Case-insensitive keyword highlighting in search results
- Editing an entry through a working copy that is committed or cancelled
- A six-week calendar grid for picking dates
- Deleting entries behind a yes/no confirmation

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `cli`: Command-line interface handling using clap, and terminal rendering
- `config`: Configuration loading and validation
- `constants`: Application-wide constants
- `errors`: Error handling infrastructure
- `identity`: The current user shown in the status readout
- `interaction`: Confirmation prompts and outcome notifications
- `journal_core`: The entry model and pure logic (query, highlight, calendar, display)
- `ops`: High-level operations over a [`Workspace`](ops::Workspace)
- `session`: The edit session state machine
- `store`: The entry store and its blob store backends

## Usage Example

```rust,no_run
use moodlog::identity::ConfiguredIdentity;
use moodlog::ops::Workspace;
use moodlog::store::{EntryStore, FileBlobStore};
use moodlog::Config;

fn main() -> moodlog::AppResult<()> {
    let config = Config::load()?;
    config.validate()?;

    let store = EntryStore::new(FileBlobStore::new(&config.data_dir));
    let today = chrono::Local::now().date_naive();
    let mut workspace = Workspace::open(store, &ConfiguredIdentity::from_config(&config), today);

    workspace.search_mut().set_keyword("train");
    println!("{} matching entries", workspace.view().len());
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// Current-user identity
pub mod identity;
/// Confirmation and notification seams
pub mod interaction;
/// Entry model and pure journal logic
pub mod journal_core;
/// High-level operations for the journal
pub mod ops;
/// Edit session over a working copy
pub mod session;
/// Entry persistence
pub mod store;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use journal_core::{Emotion, EntryId, JournalEntry};
pub use ops::Workspace;
