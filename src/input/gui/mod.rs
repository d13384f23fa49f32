//! Windowed input adapter for interactive exploration.
//!
//! Uses winit for the window and keyboard, and presents frames through the
//! pixels surface in `presenters::pixels`.

pub mod app;
pub mod commands;
pub mod errors;

pub use commands::run_gui::RunGuiCommand;
pub use errors::GuiError;
