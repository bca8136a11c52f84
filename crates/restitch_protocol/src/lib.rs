//! Wire contract between the search-and-replace panel and its host process.
//!
//! Shapes only: the full `Values`/`Status` structs, their partial-patch
//! counterparts, and the two tagged message families. Merge policy and echo
//! semantics live in `restitch_core`.

mod domain;
mod error;
mod protocol;

pub use domain::{Parser, SearchStatus, SearchValues, StatusPatch, ValuesPatch};
pub use error::DecodeError;
pub use protocol::{HostMessage, PanelMessage};
