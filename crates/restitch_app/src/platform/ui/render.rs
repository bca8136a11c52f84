use restitch_core::PanelViewModel;
use restitch_protocol::Parser;

use super::constants::*;
use super::controls::{Control, ControlId, LabelClass};
use crate::platform::effects::TransportError;

/// Rendering strategy: a pure projection of the view model into control
/// descriptions. Renderers carry no protocol knowledge and no merge logic,
/// so swapping toolkits never touches the core or the wire contract.
pub trait Renderer {
    fn render(&self, view: &PanelViewModel) -> Vec<Control>;
}

/// Where finished render batches go. The stdio embedder serializes them onto
/// the channel; tests capture them in memory.
pub trait RenderSink {
    fn present(&mut self, controls: &[Control]) -> Result<(), TransportError>;
}

/// Full panel: search/replace areas, detail section, progress and summary
/// rows. The detail section collapses when `show_details` is off.
pub struct ToolkitRenderer;

impl Renderer for ToolkitRenderer {
    #[allow(clippy::vec_init_then_push)]
    fn render(&self, view: &PanelViewModel) -> Vec<Control> {
        let mut controls = Vec::new();

        controls.push(Control::TextArea {
            id: INPUT_FIND,
            placeholder: "Search",
            value: view.find.clone(),
        });
        controls.push(Control::TextArea {
            id: INPUT_REPLACE,
            placeholder: "Replace",
            value: view.replace.clone(),
        });
        controls.push(Control::Button {
            id: BUTTON_DETAILS,
            label: "Toggle Details",
            enabled: true,
        });
        controls.push(Control::Button {
            id: BUTTON_REPLACE_ALL,
            label: "Replace All",
            enabled: view.replace_all_enabled,
        });

        if view.show_details {
            controls.push(Control::TextField {
                id: INPUT_INCLUDE,
                label: "files to include",
                value: view.include.clone(),
            });
            controls.push(Control::TextField {
                id: INPUT_EXCLUDE,
                label: "files to exclude",
                value: view.exclude.clone(),
            });
            controls.push(Control::Dropdown {
                id: DROPDOWN_PARSER,
                options: parser_options(),
                selected: view.parser.as_str(),
            });
            controls.push(Control::Checkbox {
                id: CHECKBOX_PRETTIER,
                label: "Use Prettier if Available",
                checked: view.prettier,
            });
        }

        controls.push(Control::ProgressBar {
            id: PROGRESS_RUN,
            width: view.progress_width.clone(),
            visible: view.progress_visible,
        });
        if let Some(text) = &view.match_summary {
            controls.push(label(LABEL_MATCHES, text.clone(), LabelClass::Default));
        }
        if let Some(text) = &view.error_summary {
            controls.push(label(LABEL_ERRORS, text.clone(), LabelClass::Error));
        }

        controls
    }
}

/// Bare-bones alternative: the four text inputs and the replace-all button,
/// nothing else. Exists to keep the strategy seam honest.
#[allow(dead_code)]
pub struct FormRenderer;

impl Renderer for FormRenderer {
    fn render(&self, view: &PanelViewModel) -> Vec<Control> {
        vec![
            Control::TextField {
                id: INPUT_FIND,
                label: "find",
                value: view.find.clone(),
            },
            Control::TextField {
                id: INPUT_REPLACE,
                label: "replace",
                value: view.replace.clone(),
            },
            Control::TextField {
                id: INPUT_INCLUDE,
                label: "include",
                value: view.include.clone(),
            },
            Control::TextField {
                id: INPUT_EXCLUDE,
                label: "exclude",
                value: view.exclude.clone(),
            },
            Control::Button {
                id: BUTTON_REPLACE_ALL,
                label: "Replace All",
                enabled: view.replace_all_enabled,
            },
        ]
    }
}

fn parser_options() -> Vec<&'static str> {
    Parser::ALL.iter().map(|p| p.as_str()).collect()
}

fn label(id: ControlId, text: String, class: LabelClass) -> Control {
    Control::Label { id, text, class }
}

#[cfg(test)]
mod tests {
    use super::*;
    use restitch_core::{update, Msg, PanelState};
    use restitch_protocol::StatusPatch;

    fn view_with_status(patch: StatusPatch) -> PanelViewModel {
        let (state, _) = update(PanelState::new(), Msg::HostStatus(patch));
        state.view()
    }

    fn replace_all_enabled(controls: &[Control]) -> bool {
        controls
            .iter()
            .find_map(|control| match control {
                Control::Button { id, enabled, .. } if *id == BUTTON_REPLACE_ALL => Some(*enabled),
                _ => None,
            })
            .expect("replace-all button is always rendered")
    }

    #[test]
    fn replace_all_disabled_while_running_or_without_changes() {
        let controls = ToolkitRenderer.render(&view_with_status(StatusPatch {
            running: Some(true),
            num_files_that_will_change: Some(5),
            ..StatusPatch::default()
        }));
        assert!(!replace_all_enabled(&controls));

        let controls = ToolkitRenderer.render(&view_with_status(StatusPatch::default()));
        assert!(!replace_all_enabled(&controls));

        let controls = ToolkitRenderer.render(&view_with_status(StatusPatch {
            running: Some(false),
            num_files_that_will_change: Some(5),
            ..StatusPatch::default()
        }));
        assert!(replace_all_enabled(&controls));
    }

    #[test]
    fn progress_bar_defaults_to_zero_width_hidden() {
        let controls = ToolkitRenderer.render(&PanelState::new().view());
        let bar = controls
            .iter()
            .find(|c| matches!(c, Control::ProgressBar { .. }))
            .unwrap();
        assert_eq!(
            bar,
            &Control::ProgressBar {
                id: PROGRESS_RUN,
                width: "0.0%".to_string(),
                visible: false,
            }
        );
    }

    #[test]
    fn detail_controls_absent_when_collapsed() {
        let (state, _) = update(PanelState::new(), Msg::DetailsToggled);
        let controls = ToolkitRenderer.render(&state.view());

        assert!(!controls
            .iter()
            .any(|c| matches!(c, Control::Dropdown { .. } | Control::Checkbox { .. })));
        assert!(!controls.iter().any(|c| matches!(
            c,
            Control::TextField { id, .. } if *id == INPUT_INCLUDE || *id == INPUT_EXCLUDE
        )));
    }

    #[test]
    fn summaries_render_with_their_label_classes() {
        let controls = ToolkitRenderer.render(&view_with_status(StatusPatch {
            num_matches: Some(3),
            num_files_with_matches: Some(2),
            num_files_with_errors: Some(1),
            ..StatusPatch::default()
        }));

        assert!(controls.contains(&Control::Label {
            id: LABEL_MATCHES,
            text: "Found 3 matches in 2 files".to_string(),
            class: LabelClass::Default,
        }));
        assert!(controls.contains(&Control::Label {
            id: LABEL_ERRORS,
            text: "1 file had errors".to_string(),
            class: LabelClass::Error,
        }));
    }

    #[test]
    fn form_renderer_honours_the_same_gating() {
        let controls = FormRenderer.render(&view_with_status(StatusPatch {
            running: Some(false),
            num_files_that_will_change: Some(1),
            ..StatusPatch::default()
        }));
        assert!(replace_all_enabled(&controls));
    }
}
