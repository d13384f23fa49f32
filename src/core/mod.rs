//! Domain core: value types, the view state machine, the escape-time
//! evaluator and the frame renderer. Nothing in here knows about windows.

pub mod actions;
pub mod data;
pub mod fractals;
pub mod util;
pub mod view;
