use restitch_core::{update, Effect, Msg, PanelState};
use restitch_protocol::{Parser, SearchValues, ValuesPatch};

fn restored_values() -> SearchValues {
    SearchValues {
        find: "useQuery($$args)".to_string(),
        replace: "useSuspenseQuery($$args)".to_string(),
        include: "src/**/*.ts".to_string(),
        exclude: "**/__tests__/**".to_string(),
        parser: Parser::RecastBabel,
        prettier: true,
    }
}

#[test]
fn restore_replaces_state_and_reannounces_without_resaving() {
    let (state, effects) = update(PanelState::new(), Msg::ValuesRestored(restored_values()));

    assert_eq!(state.values(), &restored_values());
    // The host must learn the restored values, but writing back what was
    // just read from the slot would be a pointless save.
    assert_eq!(effects, vec![Effect::PostValues(restored_values())]);
}

#[test]
fn host_override_after_restore_still_merges_silently() {
    let (state, _) = update(PanelState::new(), Msg::ValuesRestored(restored_values()));

    let (state, effects) = update(
        state,
        Msg::HostValues(ValuesPatch {
            parser: Some(Parser::Babel),
            ..ValuesPatch::default()
        }),
    );

    assert!(effects.is_empty());
    assert_eq!(state.values().parser, Parser::Babel);
    assert_eq!(state.values().find, "useQuery($$args)");
}
