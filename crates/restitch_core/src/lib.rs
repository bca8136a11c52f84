//! Restitch core: pure state machine for the search-and-replace panel.
//!
//! Everything here is side-effect free; `update` consumes a message and
//! returns the next state plus the effects the shell must execute.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::PanelState;
pub use update::update;
pub use view_model::PanelViewModel;
