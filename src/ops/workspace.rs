//! The journal workspace: everything one screen of the journal holds.

use crate::errors::{AppError, AppResult};
use crate::identity::{CurrentUser, IdentityProvider};
use crate::journal_core::query::SearchSpec;
use crate::session::EditSession;
use crate::store::{BlobStore, EntryStore};
use chrono::NaiveDate;
use std::fmt;
use tracing::debug;

/// Whether a persistence operation is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncState {
    #[default]
    Idle,
    Syncing,
}

impl fmt::Display for SyncState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncState::Idle => write!(f, "idle"),
            SyncState::Syncing => write!(f, "syncing"),
        }
    }
}

/// Passive readout for the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub user: CurrentUser,
    pub entry_count: usize,
    pub sync: SyncState,
}

/// Owns the entry store together with the search context, the edit session
/// and the busy flag.
///
/// # Examples
///
/// ```
/// use moodlog::identity::ConfiguredIdentity;
/// use moodlog::ops::Workspace;
/// use moodlog::store::{EntryStore, MemoryBlobStore};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 1, 25).unwrap();
/// let workspace = Workspace::open(
///     EntryStore::new(MemoryBlobStore::new()),
///     &ConfiguredIdentity::new("hana"),
///     today,
/// );
/// assert_eq!(workspace.status().entry_count, 0);
/// assert!(workspace.view().is_empty());
/// ```
#[derive(Debug)]
pub struct Workspace<B: BlobStore> {
    pub(crate) store: EntryStore<B>,
    pub(crate) search: SearchSpec,
    pub(crate) session: EditSession,
    pub(crate) sync: SyncState,
    user: CurrentUser,
}

impl<B: BlobStore> Workspace<B> {
    /// Loads the store and starts with an empty search and a closed session.
    pub fn open(mut store: EntryStore<B>, identity: &dyn IdentityProvider, today: NaiveDate) -> Self {
        store.load();
        Workspace {
            store,
            search: SearchSpec::default(),
            session: EditSession::new(today),
            sync: SyncState::Idle,
            user: identity.current_user(),
        }
    }

    pub fn store(&self) -> &EntryStore<B> {
        &self.store
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut EditSession {
        &mut self.session
    }

    pub fn sync_state(&self) -> SyncState {
        self.sync
    }

    pub fn status(&self) -> Status {
        Status {
            user: self.user.clone(),
            entry_count: self.store.entries().len(),
            sync: self.sync,
        }
    }

    /// Runs `write` with the busy flag raised.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Busy` without running `write` if a persistence
    /// operation is already in flight.
    pub(crate) fn with_sync<T>(
        &mut self,
        write: impl FnOnce(&mut Self) -> T,
    ) -> AppResult<T> {
        if self.sync == SyncState::Syncing {
            return Err(AppError::Busy);
        }
        self.sync = SyncState::Syncing;
        debug!("Sync started");
        let result = write(self);
        self.sync = SyncState::Idle;
        debug!("Sync finished");
        Ok(result)
    }
}
