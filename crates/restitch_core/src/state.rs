use restitch_protocol::{SearchStatus, SearchValues, StatusPatch, ValuesPatch};

use crate::view_model::PanelViewModel;

/// All panel-local state. Values and Status are exclusively owned here; the
/// presentation layer only ever sees [`PanelViewModel`] snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState {
    values: SearchValues,
    status: SearchStatus,
    mounted: bool,
    show_details: bool,
    dirty: bool,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            values: SearchValues::default(),
            status: SearchStatus::default(),
            mounted: false,
            show_details: true,
            dirty: false,
        }
    }
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &SearchValues {
        &self.values
    }

    pub fn status(&self) -> &SearchStatus {
        &self.status
    }

    pub fn view(&self) -> PanelViewModel {
        PanelViewModel::project(&self.values, &self.status, self.show_details)
    }

    /// Returns whether a render is owed and clears the flag. The shell calls
    /// this once per dispatched message to coalesce redraws.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Marks the panel mounted. Returns true only on the first call.
    pub(crate) fn mark_mounted(&mut self) -> bool {
        !std::mem::replace(&mut self.mounted, true)
    }

    pub(crate) fn merge_status(&mut self, patch: StatusPatch) {
        let before = self.status.clone();
        self.status.apply(patch);
        if self.status != before {
            self.dirty = true;
        }
    }

    pub(crate) fn merge_values(&mut self, patch: ValuesPatch) {
        let before = self.values.clone();
        self.values.apply(patch);
        if self.values != before {
            self.dirty = true;
        }
    }

    pub(crate) fn replace_values(&mut self, values: SearchValues) {
        if self.values != values {
            self.values = values;
            self.dirty = true;
        }
    }

    pub(crate) fn toggle_details(&mut self) {
        self.show_details = !self.show_details;
        self.dirty = true;
    }
}
