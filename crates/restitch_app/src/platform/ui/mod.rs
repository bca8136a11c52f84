pub mod constants;
mod controls;
mod render;

pub use controls::{Control, ControlId, LabelClass};
pub use render::{FormRenderer, RenderSink, Renderer, ToolkitRenderer};
