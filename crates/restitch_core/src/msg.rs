use restitch_protocol::{SearchValues, StatusPatch, ValuesPatch};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Panel became visible; announce readiness to the host.
    Mounted,
    /// Authoritative progress/result merge from the host.
    HostStatus(StatusPatch),
    /// Authoritative values override from the host (e.g. normalization).
    HostValues(ValuesPatch),
    /// User edited one or more controls. An empty patch is the manual
    /// force-resync chord: nothing changes locally but the full snapshot is
    /// re-announced.
    ValuesEdited(ValuesPatch),
    /// Values recovered from the persisted state slot at startup.
    ValuesRestored(SearchValues),
    /// User clicked replace-all.
    ReplaceAllClicked,
    /// User toggled the detail section of the panel.
    DetailsToggled,
}
