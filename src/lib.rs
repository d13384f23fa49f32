pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use controllers::interactive::{
    ControllerError, ExplorerConfig, ExplorerController, FrameClock, FramePoll, RenderStrategy,
};
pub use crate::core::actions::render_frame::{FrameReport, RenderFrameError};
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::view::{Control, ControlsSnapshot, ViewLimits, ViewState};

#[cfg(feature = "gui")]
pub use input::gui::{GuiError, RunGuiCommand};
