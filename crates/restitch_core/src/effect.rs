use restitch_protocol::SearchValues;

/// Side effects requested by `update`, executed by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send `{type: "mount"}` to the host.
    PostMount,
    /// Send the full values snapshot to the host.
    PostValues(SearchValues),
    /// Send `{type: "replace"}` to the host.
    PostReplace,
    /// Persist the full values snapshot into the host state slot.
    SaveState(SearchValues),
}
