use crate::{Effect, Msg, PanelState};

/// Pure update function: applies a message to state and returns any effects.
///
/// The one correctness-critical rule lives here: a locally originated values
/// merge (`ValuesEdited`, `ValuesRestored`) re-announces the full snapshot to
/// the host, while a host-originated merge (`HostValues`, `HostStatus`) never
/// produces an outbound message. Collapsing the two paths into one generic
/// setter would create an echo loop between panel and host.
pub fn update(mut state: PanelState, msg: Msg) -> (PanelState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted => {
            // Mount is announced exactly once per panel lifetime.
            if state.mark_mounted() {
                vec![Effect::PostMount]
            } else {
                Vec::new()
            }
        }
        Msg::HostStatus(patch) => {
            state.merge_status(patch);
            Vec::new()
        }
        Msg::HostValues(patch) => {
            state.merge_values(patch);
            Vec::new()
        }
        Msg::ValuesEdited(patch) => {
            state.merge_values(patch);
            let snapshot = state.values().clone();
            vec![
                Effect::PostValues(snapshot.clone()),
                Effect::SaveState(snapshot),
            ]
        }
        Msg::ValuesRestored(values) => {
            // Locally originated, so the host must hear about it; but there
            // is no point writing back what was just read from the slot.
            state.replace_values(values);
            vec![Effect::PostValues(state.values().clone())]
        }
        Msg::ReplaceAllClicked => {
            // `running` is not touched locally. The panel cannot know whether
            // the host accepts the request; it waits for a status message.
            vec![Effect::PostReplace]
        }
        Msg::DetailsToggled => {
            state.toggle_details();
            Vec::new()
        }
    };

    (state, effects)
}
