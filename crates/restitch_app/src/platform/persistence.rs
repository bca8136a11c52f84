//! File-backed implementation of the host's opaque state slot.
//!
//! The contract is minimal: whatever was stored is returned unchanged, and
//! "never set" reads as `None`. Corrupt or unreadable content degrades to
//! `None` with a warning rather than failing the panel.

use std::fs;
use std::io;
use std::path::PathBuf;

use panel_logging::{panel_info, panel_warn};
use restitch_protocol::SearchValues;
use serde_json::Value;

pub struct StateSlot {
    path: PathBuf,
}

impl StateSlot {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> Option<Value> {
        let content = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return None;
            }
            Err(err) => {
                panel_warn!("Failed to read state slot {:?}: {}", self.path, err);
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(err) => {
                panel_warn!("Failed to parse state slot {:?}: {}", self.path, err);
                None
            }
        }
    }

    /// Writes via a temp file and rename so a crash mid-write cannot leave a
    /// truncated slot behind.
    pub fn store(&self, value: &Value) -> io::Result<()> {
        let content = serde_json::to_string(value)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)
    }
}

/// Interprets the slot content as persisted search values, if possible.
pub fn restore_values(slot_content: Option<Value>) -> Option<SearchValues> {
    let value = slot_content?;
    match serde_json::from_value(value) {
        Ok(values) => {
            panel_info!("Restored search values from state slot");
            Some(values)
        }
        Err(err) => {
            panel_warn!("State slot content is not a values snapshot: {}", err);
            None
        }
    }
}
