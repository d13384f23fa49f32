//! Interactive controller for real-time fractal exploration.
//!
//! The controller owns the current [`ViewState`](crate::core::view::ViewState)
//! and turns each frame's held controls into one rendered and presented frame.
//! It is driven by an input adapter (see `input::gui`) that samples the
//! keyboard and paces frames with a [`FrameClock`].

mod controller;
pub mod data;
pub mod errors;
mod frame_clock;

pub use controller::ExplorerController;
pub use data::explorer_config::{ExplorerConfig, RenderStrategy};
pub use errors::controller::ControllerError;
pub use frame_clock::{FrameClock, FramePoll};
