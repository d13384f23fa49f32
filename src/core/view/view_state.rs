use std::error::Error;
use std::fmt;
use std::num::NonZeroU32;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewStateError {
    InvalidMaxDistance(f64),
    InvalidZoom(f64),
    NonFinitePan { pan_x: f64, pan_y: f64 },
}

impl fmt::Display for ViewStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMaxDistance(distance) => {
                write!(f, "max distance must be positive and finite, got {}", distance)
            }
            Self::InvalidZoom(zoom) => {
                write!(
                    f,
                    "zoom must be finite and at least {}, got {}",
                    ViewState::MIN_ZOOM,
                    zoom
                )
            }
            Self::NonFinitePan { pan_x, pan_y } => {
                write!(f, "pan offset must be finite, got ({}, {})", pan_x, pan_y)
            }
        }
    }
}

impl Error for ViewStateError {}

/// Interactive view parameters read by every pixel of a frame.
///
/// `ViewState` is a plain `Copy` value: the render loop owns the current one,
/// hands a copy to the pixel sweep and replaces it with the result of
/// [`step_view`](crate::core::view::step::step_view) once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    max_iterations: NonZeroU32,
    max_distance: f64,
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
}

impl ViewState {
    pub const MIN_ZOOM: f64 = 1.0;

    pub fn new(
        max_iterations: NonZeroU32,
        max_distance: f64,
        zoom: f64,
        pan_x: f64,
        pan_y: f64,
    ) -> Result<Self, ViewStateError> {
        if !max_distance.is_finite() || max_distance <= 0.0 {
            return Err(ViewStateError::InvalidMaxDistance(max_distance));
        }

        if !zoom.is_finite() || zoom < Self::MIN_ZOOM {
            return Err(ViewStateError::InvalidZoom(zoom));
        }

        if !pan_x.is_finite() || !pan_y.is_finite() {
            return Err(ViewStateError::NonFinitePan { pan_x, pan_y });
        }

        Ok(Self {
            max_iterations,
            max_distance,
            zoom,
            pan_x,
            pan_y,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> NonZeroU32 {
        self.max_iterations
    }

    #[must_use]
    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }

    #[must_use]
    pub fn max_distance_squared(&self) -> f64 {
        self.max_distance * self.max_distance
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    #[must_use]
    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    #[must_use]
    pub fn with_max_iterations(self, max_iterations: NonZeroU32) -> Self {
        Self {
            max_iterations,
            ..self
        }
    }

    /// Doubles the iteration budget, saturating at `u32::MAX`.
    #[must_use]
    pub(crate) fn doubled_iterations(self) -> Self {
        match NonZeroU32::new(self.max_iterations.get().saturating_mul(2)) {
            Some(doubled) => self.with_max_iterations(doubled),
            None => self,
        }
    }

    /// Halves the iteration budget. A budget of 1 is left alone.
    #[must_use]
    pub(crate) fn halved_iterations(self) -> Self {
        match NonZeroU32::new(self.max_iterations.get() / 2) {
            Some(halved) => self.with_max_iterations(halved),
            None => self,
        }
    }

    #[must_use]
    pub(crate) fn zoomed_in(self, factor: f64) -> Self {
        let zoom = self.zoom * factor;

        if !zoom.is_finite() {
            return self;
        }

        Self { zoom, ..self }
    }

    #[must_use]
    pub(crate) fn zoomed_out(self, factor: f64) -> Self {
        if self.zoom <= Self::MIN_ZOOM {
            return self;
        }

        Self {
            zoom: (self.zoom / factor).max(Self::MIN_ZOOM),
            ..self
        }
    }

    /// Moves the view by `(dx, dy)` screen-relative steps, scaled by `1/zoom`.
    #[must_use]
    pub(crate) fn panned(self, dx: f64, dy: f64) -> Self {
        Self {
            pan_x: self.pan_x + dx / self.zoom,
            pan_y: self.pan_y + dy / self.zoom,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iterations(value: u32) -> NonZeroU32 {
        NonZeroU32::new(value).unwrap()
    }

    #[test]
    fn new_accepts_valid_state() {
        let view = ViewState::new(iterations(1000), 2.0, 1.0, 0.5, -0.25).unwrap();

        assert_eq!(view.max_iterations().get(), 1000);
        assert_eq!(view.max_distance(), 2.0);
        assert_eq!(view.max_distance_squared(), 4.0);
        assert_eq!(view.zoom(), 1.0);
        assert_eq!(view.pan_x(), 0.5);
        assert_eq!(view.pan_y(), -0.25);
    }

    #[test]
    fn new_rejects_invalid_max_distance() {
        for distance in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = ViewState::new(iterations(10), distance, 1.0, 0.0, 0.0);
            assert!(
                matches!(result, Err(ViewStateError::InvalidMaxDistance(_))),
                "distance {} should be rejected",
                distance
            );
        }
    }

    #[test]
    fn new_rejects_zoom_below_minimum() {
        assert_eq!(
            ViewState::new(iterations(10), 2.0, 0.5, 0.0, 0.0),
            Err(ViewStateError::InvalidZoom(0.5))
        );
        assert!(ViewState::new(iterations(10), 2.0, f64::INFINITY, 0.0, 0.0).is_err());
    }

    #[test]
    fn new_rejects_non_finite_pan() {
        assert!(matches!(
            ViewState::new(iterations(10), 2.0, 1.0, f64::NAN, 0.0),
            Err(ViewStateError::NonFinitePan { .. })
        ));
    }

    #[test]
    fn doubling_saturates() {
        let view = ViewState::new(iterations(u32::MAX - 1), 2.0, 1.0, 0.0, 0.0).unwrap();

        assert_eq!(view.doubled_iterations().max_iterations().get(), u32::MAX);
    }

    #[test]
    fn halving_stops_at_one() {
        let view = ViewState::new(iterations(3), 2.0, 1.0, 0.0, 0.0).unwrap();

        let once = view.halved_iterations();
        let twice = once.halved_iterations();

        assert_eq!(once.max_iterations().get(), 1);
        assert_eq!(twice.max_iterations().get(), 1);
    }

    #[test]
    fn zoom_out_clamps_to_minimum() {
        let view = ViewState::new(iterations(10), 2.0, 1.1, 0.0, 0.0).unwrap();

        assert_eq!(view.zoomed_out(1.25).zoom(), ViewState::MIN_ZOOM);
    }

    #[test]
    fn zoom_in_ignores_overflow() {
        let view = ViewState::new(iterations(10), 2.0, f64::MAX, 0.0, 0.0).unwrap();

        assert_eq!(view.zoomed_in(1.25).zoom(), f64::MAX);
    }

    #[test]
    fn error_display_names_the_value() {
        let err = ViewStateError::InvalidZoom(0.5);

        assert_eq!(format!("{}", err), "zoom must be finite and at least 1, got 0.5");
    }
}
