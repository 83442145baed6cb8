//! High-level operations for the journal.
//!
//! This module provides the user-facing operations that orchestrate the core
//! functionality: searching the collection, editing an entry through an edit
//! session and deleting entries behind a confirmation. All of them act on a
//! [`Workspace`], which owns the store and the view state.

pub mod delete;
pub mod edit;
pub mod search;
pub mod workspace;

// Re-export commonly used types
pub use delete::DeleteOutcome;
pub use workspace::{Status, SyncState, Workspace};
