pub mod ports;
pub mod render_frame;
pub mod render_frame_parallel;

pub use render_frame::{FrameReport, RenderFrameError, render_frame, shade_pixel};
pub use render_frame_parallel::render_frame_parallel;
