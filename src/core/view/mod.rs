pub mod controls;
pub mod limits;
pub mod step;
pub mod view_state;

pub use controls::{Control, ControlsSnapshot};
pub use limits::ViewLimits;
pub use step::step_view;
pub use view_state::{ViewState, ViewStateError};
