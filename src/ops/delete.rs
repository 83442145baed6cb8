//! Deleting entries behind a confirmation gate.

use crate::constants::{MSG_DELETE_FAILED, MSG_DELETE_SUCCEEDED, PROMPT_DELETE};
use crate::errors::AppResult;
use crate::interaction::{Confirm, Notification, Notifier};
use crate::journal_core::EntryId;
use crate::ops::Workspace;
use crate::store::BlobStore;
use tracing::{error, info};

/// What happened to a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Declined,
}

impl<B: BlobStore> Workspace<B> {
    /// Asks `confirm` and, on yes, deletes the entry with `id`.
    ///
    /// A declined confirmation changes nothing and sends no notification.
    /// Otherwise exactly one notification reports the outcome. An id that is
    /// not in the collection still counts as deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The confirmation prompt cannot be read or written (`AppError::Io`)
    /// - Another save is in flight (`AppError::Busy`)
    /// - The write fails (`AppError::Store`, after a failure notification);
    ///   the entry stays removed in memory
    pub fn delete_entry(
        &mut self,
        id: &EntryId,
        confirm: &mut dyn Confirm,
        notifier: &mut dyn Notifier,
    ) -> AppResult<DeleteOutcome> {
        if !confirm.confirm(PROMPT_DELETE)? {
            info!("Delete of {} declined", id);
            return Ok(DeleteOutcome::Declined);
        }

        let result = self.with_sync(|ws| ws.store.delete(id).map(|_| ()))?;

        match result {
            Ok(()) => {
                info!("Entry {} deleted", id);
                notifier.notify(Notification::success(MSG_DELETE_SUCCEEDED));
                Ok(DeleteOutcome::Deleted)
            }
            Err(e) => {
                error!("Entry delete failed: {}", e);
                notifier.notify(Notification::failure(MSG_DELETE_FAILED));
                Err(e.into())
            }
        }
    }
}
