use extman_domain::{Extension, ExtensionFilter, Theme};
use tracing::{debug, error, warn};

use super::record::ManagedRecord;
use crate::UiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewPhase {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleResolution {
    /// Server agreed; the record stays in view.
    Confirmed,
    /// Server agreed, but the record no longer matches the filter and was
    /// dropped from local state.
    Evicted,
    /// Request failed; the local flip was rolled back.
    Reverted,
    /// The record left local state while the request was in flight.
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveResolution {
    Removed,
    Failed { surfaced: bool },
}

/// Local view of the directory.
///
/// Holds no I/O: callers start an operation with a `begin_*` method, perform
/// the request, and feed the outcome back through the matching `complete_*`.
#[derive(Debug, Clone)]
pub struct ExtensionManager {
    phase: ViewPhase,
    records: Vec<ManagedRecord>,
    filter: ExtensionFilter,
    theme: Theme,
    surface_remove_errors: bool,
    notice: Option<String>,
}

impl ExtensionManager {
    pub fn new(theme: Theme, surface_remove_errors: bool) -> Self {
        Self {
            phase: ViewPhase::Loading,
            records: Vec::new(),
            filter: ExtensionFilter::All,
            theme,
            surface_remove_errors,
            notice: None,
        }
    }

    pub fn phase(&self) -> &ViewPhase {
        &self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == ViewPhase::Ready
    }

    pub fn records(&self) -> &[ManagedRecord] {
        &self.records
    }

    pub fn record(&self, id: i64) -> Option<&ManagedRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn filter(&self) -> ExtensionFilter {
        self.filter
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Records matching the current filter, in directory order.
    pub fn visible(&self) -> Vec<&ManagedRecord> {
        self.records
            .iter()
            .filter(|r| self.filter.matches(&r.extension))
            .collect()
    }

    pub fn active_count(&self) -> usize {
        self.records.iter().filter(|r| r.extension.is_active).count()
    }

    pub fn set_filter(&mut self, filter: ExtensionFilter) {
        debug!(filter = %filter, "Filter changed");
        self.filter = filter;
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        debug!(theme = %self.theme, "Theme changed");
        self.theme
    }

    // ── loading ──────────────────────────────────────────────────────────────

    pub fn begin_load(&mut self) {
        self.phase = ViewPhase::Loading;
        self.notice = None;
    }

    pub fn finish_load(&mut self, result: Result<Vec<Extension>, UiError>) {
        match result {
            Ok(extensions) => {
                debug!(count = extensions.len(), "Extensions loaded");
                self.records = extensions.into_iter().map(ManagedRecord::confirmed).collect();
                self.phase = ViewPhase::Ready;
            }
            Err(e) => {
                error!(error = %e, "Failed to load extensions");
                self.phase = ViewPhase::Failed(e.to_string());
            }
        }
    }

    // ── toggle ───────────────────────────────────────────────────────────────

    /// Applies the optimistic flip. Rejects a second toggle on a record whose
    /// first one has not resolved yet.
    pub fn begin_toggle(&mut self, id: i64) -> Result<(), UiError> {
        self.ensure_ready()?;
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(UiError::UnknownRecord(id))?;

        if record.is_pending() {
            return Err(UiError::ToggleInFlight(id));
        }

        record.apply_optimistic_toggle();
        Ok(())
    }

    pub fn complete_toggle(
        &mut self,
        id: i64,
        result: Result<Extension, UiError>,
    ) -> ToggleResolution {
        let Some(index) = self.records.iter().position(|r| r.id() == id) else {
            debug!(extension_id = id, "Toggle resolved for a record no longer held");
            return ToggleResolution::Stale;
        };

        match result {
            Ok(server) => {
                let matches = self.filter.matches(&server);
                self.records[index].confirm(server);
                if matches {
                    ToggleResolution::Confirmed
                } else {
                    self.records.remove(index);
                    debug!(extension_id = id, filter = %self.filter, "Evicted after toggle");
                    ToggleResolution::Evicted
                }
            }
            Err(e) => {
                warn!(extension_id = id, error = %e, "Toggle failed, reverting");
                self.records[index].revert();
                self.notice = Some(e.to_string());
                ToggleResolution::Reverted
            }
        }
    }

    // ── remove ───────────────────────────────────────────────────────────────

    /// Validates that a removal can be requested. State is only changed once
    /// the server has answered.
    pub fn begin_remove(&self, id: i64) -> Result<&Extension, UiError> {
        self.ensure_ready()?;
        self.record(id)
            .map(|r| &r.extension)
            .ok_or(UiError::UnknownRecord(id))
    }

    pub fn complete_remove(&mut self, id: i64, result: Result<i64, UiError>) -> RemoveResolution {
        match result {
            Ok(removed) => {
                self.records.retain(|r| r.id() != removed);
                RemoveResolution::Removed
            }
            Err(e) => {
                warn!(extension_id = id, error = %e, "Remove failed");
                if self.surface_remove_errors {
                    self.notice = Some(e.to_string());
                }
                RemoveResolution::Failed {
                    surfaced: self.surface_remove_errors,
                }
            }
        }
    }

    fn ensure_ready(&self) -> Result<(), UiError> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(UiError::NotReady)
        }
    }
}
