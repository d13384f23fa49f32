/// Step sizes applied by the view controls each frame a key is held.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewLimits {
    pub zoom_factor: f64,
    pub pan_step: f64,
}

impl Default for ViewLimits {
    fn default() -> Self {
        Self {
            zoom_factor: 1.25,
            pan_step: 0.1,
        }
    }
}
