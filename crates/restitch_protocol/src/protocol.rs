use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    domain::{SearchValues, StatusPatch, ValuesPatch},
    error::DecodeError,
};

/// Messages the panel sends to the host.
///
/// `values` always carries the panel's full current snapshot, never a
/// partial; the host is free to echo back a normalized partial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PanelMessage {
    /// Panel is visible and ready to receive state.
    Mount,
    /// Full snapshot of the user-editable values.
    Values { values: SearchValues },
    /// Request to run replace-all. No payload; the panel correlates the
    /// outcome only by watching `running` flip back to false.
    Replace,
}

/// Messages the host sends to the panel. Both carry partial merges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum HostMessage {
    Status { status: StatusPatch },
    Values { values: ValuesPatch },
}

impl HostMessage {
    /// Decodes one inbound line.
    ///
    /// Returns `Ok(None)` for well-formed JSON whose `type` tag is not one
    /// of ours — unknown message kinds are skipped, never a hard failure,
    /// so newer hosts can talk to older panels.
    pub fn decode(raw: &str) -> Result<Option<Self>, DecodeError> {
        Self::from_value(serde_json::from_str(raw)?)
    }

    pub fn from_value(value: Value) -> Result<Option<Self>, DecodeError> {
        let Some(tag) = value.get("type").and_then(Value::as_str) else {
            return Err(DecodeError::MissingTag);
        };
        match tag {
            "status" | "values" => Ok(Some(serde_json::from_value(value)?)),
            _ => Ok(None),
        }
    }
}
