use restitch_core::{update, Msg, PanelState};
use restitch_protocol::{StatusPatch, ValuesPatch};

#[test]
fn empty_inbound_patches_change_nothing() {
    let state = PanelState::new();
    let before = state.view();

    let (state, effects) = update(state, Msg::HostStatus(StatusPatch::default()));
    assert!(effects.is_empty());
    let (mut state, effects) = update(state, Msg::HostValues(ValuesPatch::default()));
    assert!(effects.is_empty());

    assert_eq!(state.view(), before);
    assert!(!state.consume_dirty());
}
