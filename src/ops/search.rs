//! Search over the journal workspace.

use crate::journal_core::query::{resolve_view, ResultView, SearchSpec};
use crate::ops::Workspace;
use crate::store::BlobStore;
use tracing::debug;

impl<B: BlobStore> Workspace<B> {
    pub fn search(&self) -> &SearchSpec {
        &self.search
    }

    /// Mutable access to the search fields; the next [`Workspace::view`]
    /// reflects any change.
    pub fn search_mut(&mut self) -> &mut SearchSpec {
        &mut self.search
    }

    pub fn clear_search(&mut self) {
        debug!("Clearing search, keeping {:?} mode", self.search.mode());
        self.search.clear();
    }

    /// What the journal list shows: the recent view when no search field is
    /// filled in, otherwise the matches (or none) across the full collection.
    pub fn view(&self) -> ResultView<'_> {
        resolve_view(self.store.entries(), self.store.recent(), &self.search)
    }
}
