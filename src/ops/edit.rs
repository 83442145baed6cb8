//! Editing entries through the workspace's edit session.

use crate::constants::{MSG_UPDATE_FAILED, MSG_UPDATE_SUCCEEDED};
use crate::errors::{AppResult, SessionError};
use crate::interaction::{Notification, Notifier};
use crate::journal_core::{EntryId, JournalEntry};
use crate::ops::Workspace;
use crate::store::BlobStore;
use tracing::{error, info};

impl<B: BlobStore> Workspace<B> {
    /// Opens the edit session on the stored entry with `id`.
    ///
    /// # Errors
    ///
    /// - `SessionError::UnknownEntry` if no entry has that id
    /// - `SessionError::AlreadyOpen` if another edit is in progress
    pub fn begin_edit(&mut self, id: &EntryId) -> AppResult<()> {
        let entry = self
            .store
            .get(id)
            .ok_or_else(|| SessionError::UnknownEntry(id.to_string()))?;
        self.session.open(entry)?;
        Ok(())
    }

    /// Commits the open edit and reports the outcome through `notifier`.
    ///
    /// Exactly one notification is sent once the write has been attempted.
    /// Either way the session ends closed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Another save is in flight (`AppError::Busy`, no notification)
    /// - No edit is open (`SessionError::NotOpen`, no notification)
    /// - The write fails (`SessionError::Persist`, after a failure notification)
    pub fn commit_edit(&mut self, notifier: &mut dyn Notifier) -> AppResult<JournalEntry> {
        if !self.session.is_open() {
            return Err(SessionError::NotOpen.into());
        }
        let result = self.with_sync(|ws| ws.session.commit(&mut ws.store))?;

        match result {
            Ok(entry) => {
                info!("Entry {} updated", entry.id);
                notifier.notify(Notification::success(MSG_UPDATE_SUCCEEDED));
                Ok(entry)
            }
            Err(e) => {
                error!("Entry update failed: {}", e);
                notifier.notify(Notification::failure(MSG_UPDATE_FAILED));
                Err(e.into())
            }
        }
    }

    pub fn cancel_edit(&mut self) -> AppResult<()> {
        self.session.cancel()?;
        Ok(())
    }
}
