//! Event loop for the stdio-embedded panel.
//!
//! The embedder writes one JSON object per line: either a host protocol
//! message (`status`/`values`) or a local input event for one of our
//! controls. The panel writes outbound protocol messages and `render`
//! batches, one object per line, on its side of the channel. Everything is a
//! discrete, non-blocking reaction on this single thread.

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Context;
use panel_logging::{panel_debug, panel_info, panel_warn};
use restitch_core::{update, Msg, PanelState};
use restitch_protocol::{HostMessage, Parser, ValuesPatch};
use serde::Deserialize;

use super::effects::{EffectRunner, HostApi, StdioHost};
use super::logging::{self, LogDestination};
use super::persistence::{self, StateSlot};
use super::ui::{constants, ControlId, RenderSink, Renderer, ToolkitRenderer};

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);
    panel_info!("Restitch panel starting");

    let slot_path = std::env::var_os("RESTITCH_STATE_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".restitch_state.json"));
    let host = StdioHost::new(io::stdout().lock(), StateSlot::new(slot_path));

    let stdin = io::stdin();
    run_loop(stdin.lock(), host, &ToolkitRenderer)?;
    Ok(())
}

/// Local interaction reported by the embedder, referencing a control id from
/// [`constants`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum InputEvent {
    /// Text input changed (text areas, text fields, dropdown selection).
    Input { control: ControlId, value: String },
    /// A checkbox flipped.
    Toggle { control: ControlId, checked: bool },
    /// A button was clicked.
    Click { control: ControlId },
    /// A modifier chord was pressed anywhere in the panel.
    KeyChord { ctrl: bool, meta: bool },
}

enum Line {
    Host(HostMessage),
    Input(InputEvent),
    Skip,
}

/// Runs until the embedder closes the channel. Returns the host handle so
/// tests can inspect what was sent.
pub(crate) fn run_loop<R, H>(reader: R, host: H, renderer: &dyn Renderer) -> anyhow::Result<H>
where
    R: BufRead,
    H: HostApi + RenderSink,
{
    let mut runner = EffectRunner::new(host);
    let mut state = PanelState::new();

    // First paint with defaults so the embedder has a surface before any
    // traffic, then restore persisted values and announce the mount.
    present(&mut runner, renderer, &state);
    if let Some(values) = persistence::restore_values(runner.host_mut().get_state()) {
        state = dispatch(state, Msg::ValuesRestored(values), &mut runner, renderer);
    }
    state = dispatch(state, Msg::Mounted, &mut runner, renderer);

    for line in reader.lines() {
        let line = line.context("reading embedder channel")?;
        let msg = match classify(&line) {
            Line::Host(message) => Some(host_msg(message)),
            Line::Input(event) => input_event_to_msg(event),
            Line::Skip => None,
        };
        if let Some(msg) = msg {
            state = dispatch(state, msg, &mut runner, renderer);
        }
    }

    panel_info!("Embedder channel closed; panel shutting down");
    Ok(runner.into_host())
}

fn dispatch<H>(
    state: PanelState,
    msg: Msg,
    runner: &mut EffectRunner<H>,
    renderer: &dyn Renderer,
) -> PanelState
where
    H: HostApi + RenderSink,
{
    let (mut state, effects) = update(state, msg);
    runner.run(effects);
    if state.consume_dirty() {
        present(runner, renderer, &state);
    }
    state
}

fn present<H>(runner: &mut EffectRunner<H>, renderer: &dyn Renderer, state: &PanelState)
where
    H: HostApi + RenderSink,
{
    let controls = renderer.render(&state.view());
    if let Err(err) = runner.host_mut().present(&controls) {
        panel_warn!("Dropped render batch: {}", err);
    }
}

/// Unrecognized and malformed lines are skipped, never fatal: the channel
/// may carry message kinds this panel version does not know.
fn classify(line: &str) -> Line {
    match HostMessage::decode(line) {
        Ok(Some(message)) => Line::Host(message),
        Ok(None) => match serde_json::from_str::<InputEvent>(line) {
            Ok(event) => Line::Input(event),
            Err(err) => {
                panel_debug!("Skipping unrecognized line: {}", err);
                Line::Skip
            }
        },
        Err(err) => {
            panel_debug!("Skipping undecodable line: {}", err);
            Line::Skip
        }
    }
}

fn host_msg(message: HostMessage) -> Msg {
    match message {
        HostMessage::Status { status } => Msg::HostStatus(status),
        HostMessage::Values { values } => Msg::HostValues(values),
    }
}

fn input_event_to_msg(event: InputEvent) -> Option<Msg> {
    let edited = |patch: ValuesPatch| Some(Msg::ValuesEdited(patch));
    match event {
        InputEvent::Input { control, value } if control == constants::INPUT_FIND => {
            edited(ValuesPatch {
                find: Some(value),
                ..ValuesPatch::default()
            })
        }
        InputEvent::Input { control, value } if control == constants::INPUT_REPLACE => {
            edited(ValuesPatch {
                replace: Some(value),
                ..ValuesPatch::default()
            })
        }
        InputEvent::Input { control, value } if control == constants::INPUT_INCLUDE => {
            edited(ValuesPatch {
                include: Some(value),
                ..ValuesPatch::default()
            })
        }
        InputEvent::Input { control, value } if control == constants::INPUT_EXCLUDE => {
            edited(ValuesPatch {
                exclude: Some(value),
                ..ValuesPatch::default()
            })
        }
        InputEvent::Input { control, value } if control == constants::DROPDOWN_PARSER => {
            match Parser::from_wire(&value) {
                Some(parser) => edited(ValuesPatch {
                    parser: Some(parser),
                    ..ValuesPatch::default()
                }),
                None => {
                    // The dropdown only offers known options; anything else
                    // is a broken embedder, not a user action.
                    panel_debug!("Ignoring unknown parser option {:?}", value);
                    None
                }
            }
        }
        InputEvent::Toggle { control, checked } if control == constants::CHECKBOX_PRETTIER => {
            edited(ValuesPatch {
                prettier: Some(checked),
                ..ValuesPatch::default()
            })
        }
        InputEvent::Click { control } if control == constants::BUTTON_DETAILS => {
            Some(Msg::DetailsToggled)
        }
        InputEvent::Click { control } if control == constants::BUTTON_REPLACE_ALL => {
            Some(Msg::ReplaceAllClicked)
        }
        // The manual resync escape hatch: an empty edit re-announces the
        // full values snapshot.
        InputEvent::KeyChord { ctrl, meta } if ctrl || meta => edited(ValuesPatch::default()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::effects::tests::FakeHost;
    use pretty_assertions::assert_eq;
    use restitch_protocol::{PanelMessage, SearchValues};

    #[test]
    fn find_input_maps_to_single_field_patch() {
        let msg = input_event_to_msg(InputEvent::Input {
            control: constants::INPUT_FIND,
            value: "foo".to_string(),
        });
        assert_eq!(
            msg,
            Some(Msg::ValuesEdited(ValuesPatch {
                find: Some("foo".to_string()),
                ..ValuesPatch::default()
            }))
        );
    }

    #[test]
    fn modifier_chord_maps_to_empty_patch() {
        let msg = input_event_to_msg(InputEvent::KeyChord {
            ctrl: true,
            meta: false,
        });
        assert_eq!(msg, Some(Msg::ValuesEdited(ValuesPatch::default())));

        let msg = input_event_to_msg(InputEvent::KeyChord {
            ctrl: false,
            meta: false,
        });
        assert_eq!(msg, None);
    }

    #[test]
    fn unknown_parser_option_is_dropped() {
        let msg = input_event_to_msg(InputEvent::Input {
            control: constants::DROPDOWN_PARSER,
            value: "swc".to_string(),
        });
        assert_eq!(msg, None);
    }

    #[test]
    fn events_for_unmapped_controls_are_dropped() {
        let msg = input_event_to_msg(InputEvent::Click {
            control: ControlId(9999),
        });
        assert_eq!(msg, None);
    }

    #[test]
    fn loop_scenario_mount_merge_edit_replace() {
        let input = concat!(
            r#"{"type":"values","values":{"parser":"babel/auto"}}"#,
            "\n",
            r#"{"type":"input","control":1001,"value":"foo"}"#,
            "\n",
            r#"{"type":"status","status":{"running":true,"total":4}}"#,
            "\n",
            r#"{"type":"click","control":1102}"#,
            "\n",
            r#"{"type":"refresh"}"#,
            "\n",
            "not json\n",
        );

        let host = run_loop(input.as_bytes(), FakeHost::default(), &ToolkitRenderer).unwrap();

        let expected_values = SearchValues {
            find: "foo".to_string(),
            parser: Parser::BabelAuto,
            ..SearchValues::default()
        };
        // Exactly one mount, one values post (for the local edit; the host
        // merge produced no echo), one replace. Unknown lines were skipped.
        assert_eq!(
            host.posted,
            vec![
                PanelMessage::Mount,
                PanelMessage::Values {
                    values: expected_values.clone()
                },
                PanelMessage::Replace,
            ]
        );
        // The edit also persisted the snapshot into the state slot.
        assert_eq!(
            host.slot,
            Some(serde_json::to_value(&expected_values).unwrap())
        );
        // Initial paint plus one per state-changing message.
        assert_eq!(host.rendered.len(), 4);
    }

    #[test]
    fn persisted_values_are_restored_and_reannounced_before_mount() {
        let stored = SearchValues {
            find: "needle".to_string(),
            prettier: true,
            ..SearchValues::default()
        };
        let host = FakeHost {
            slot: Some(serde_json::to_value(&stored).unwrap()),
            ..FakeHost::default()
        };

        let host = run_loop(&b""[..], host, &ToolkitRenderer).unwrap();

        assert_eq!(
            host.posted,
            vec![
                PanelMessage::Values {
                    values: stored.clone()
                },
                PanelMessage::Mount,
            ]
        );
        // Restore must not write the slot back.
        assert_eq!(host.slot, Some(serde_json::to_value(&stored).unwrap()));
    }
}
