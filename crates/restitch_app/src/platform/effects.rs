//! Execution of core effects against the host capability object.

use std::io::{self, Write};

use panel_logging::{panel_trace, panel_warn};
use restitch_core::Effect;
use restitch_protocol::PanelMessage;
use serde_json::Value;
use thiserror::Error;

use super::persistence::StateSlot;
use super::ui::{Control, RenderSink};

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("transport i/o: {0}")]
    Io(#[from] io::Error),
    #[error("serialization: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The panel's handle on its host environment: outbound messaging plus the
/// opaque persisted-state slot. Injected into the shell at construction so
/// tests can substitute a fake; never a module-level singleton.
pub trait HostApi {
    fn post_message(&mut self, message: &PanelMessage) -> Result<(), TransportError>;
    fn get_state(&mut self) -> Option<Value>;
    fn set_state(&mut self, state: Value) -> Result<(), TransportError>;
}

/// Turns [`Effect`]s into host calls. Send failures are logged and dropped;
/// the transport offers no acknowledgment, so there is nothing to retry
/// against.
pub struct EffectRunner<H> {
    host: H,
}

impl<H: HostApi> EffectRunner<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::PostMount => self.post(&PanelMessage::Mount),
                Effect::PostValues(values) => self.post(&PanelMessage::Values { values }),
                Effect::PostReplace => self.post(&PanelMessage::Replace),
                Effect::SaveState(values) => match serde_json::to_value(&values) {
                    Ok(snapshot) => {
                        if let Err(err) = self.host.set_state(snapshot) {
                            panel_warn!("Failed to persist values snapshot: {}", err);
                        }
                    }
                    Err(err) => {
                        panel_warn!("Values snapshot not serializable: {}", err);
                    }
                },
            }
        }
    }

    fn post(&mut self, message: &PanelMessage) {
        panel_trace!("outbound {:?}", message);
        if let Err(err) = self.host.post_message(message) {
            panel_warn!("Dropped outbound message: {}", err);
        }
    }
}

/// Host binding over the embedder's stdio channel: one JSON object per line
/// on the writer, state slot backed by a file.
pub struct StdioHost<W> {
    out: W,
    slot: StateSlot,
}

impl<W: Write> StdioHost<W> {
    pub fn new(out: W, slot: StateSlot) -> Self {
        Self { out, slot }
    }

    fn write_line(&mut self, value: &Value) -> Result<(), TransportError> {
        serde_json::to_writer(&mut self.out, value)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> HostApi for StdioHost<W> {
    fn post_message(&mut self, message: &PanelMessage) -> Result<(), TransportError> {
        let value = serde_json::to_value(message)?;
        self.write_line(&value)
    }

    fn get_state(&mut self) -> Option<Value> {
        self.slot.load()
    }

    fn set_state(&mut self, state: Value) -> Result<(), TransportError> {
        self.slot.store(&state)?;
        Ok(())
    }
}

impl<W: Write> RenderSink for StdioHost<W> {
    fn present(&mut self, controls: &[Control]) -> Result<(), TransportError> {
        let value = serde_json::json!({
            "type": "render",
            "controls": controls,
        });
        self.write_line(&value)
    }
}
