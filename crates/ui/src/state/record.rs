use extman_domain::Extension;

/// Where a record stands relative to the server.
///
/// `Confirmed` → `Pending` on a local toggle, then `Confirmed` when the
/// server agrees or `Reverted` when the request failed and the flip was
/// rolled back. `Reverted` behaves like `Confirmed` for further toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Confirmed,
    Pending { previous: bool },
    Reverted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagedRecord {
    pub extension: Extension,
    pub sync: SyncState,
}

impl ManagedRecord {
    pub fn confirmed(extension: Extension) -> Self {
        Self {
            extension,
            sync: SyncState::Confirmed,
        }
    }

    pub fn id(&self) -> i64 {
        self.extension.id
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.sync, SyncState::Pending { .. })
    }

    /// Flip locally ahead of the server.
    pub(crate) fn apply_optimistic_toggle(&mut self) {
        let previous = self.extension.is_active;
        self.extension.is_active = !previous;
        self.sync = SyncState::Pending { previous };
    }

    pub(crate) fn confirm(&mut self, server: Extension) {
        self.extension = server;
        self.sync = SyncState::Confirmed;
    }

    pub(crate) fn revert(&mut self) {
        if let SyncState::Pending { previous } = self.sync {
            self.extension.is_active = previous;
        }
        self.sync = SyncState::Reverted;
    }
}
