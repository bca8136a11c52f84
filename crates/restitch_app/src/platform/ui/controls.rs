use serde::{Deserialize, Serialize};

/// Stable identifier of one widget in the embedder's surface. Input events
/// reference these ids; render batches describe the widget they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControlId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelClass {
    Default,
    Error,
}

/// Declarative description of one interactive control. The embedder owns the
/// real widgets and reconciles each render batch against them; the panel
/// never holds widget handles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Control {
    TextArea {
        id: ControlId,
        placeholder: &'static str,
        value: String,
    },
    TextField {
        id: ControlId,
        label: &'static str,
        value: String,
    },
    Dropdown {
        id: ControlId,
        options: Vec<&'static str>,
        selected: &'static str,
    },
    Checkbox {
        id: ControlId,
        label: &'static str,
        checked: bool,
    },
    Button {
        id: ControlId,
        label: &'static str,
        enabled: bool,
    },
    ProgressBar {
        id: ControlId,
        width: String,
        visible: bool,
    },
    Label {
        id: ControlId,
        text: String,
        class: LabelClass,
    },
}
