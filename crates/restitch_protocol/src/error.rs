use thiserror::Error;

/// Failure to decode an inbound message.
///
/// Callers treat every variant as ignorable (log and drop); the distinction
/// only matters for what gets logged.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("message has no string `type` tag")]
    MissingTag,
}
