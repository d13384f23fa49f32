use crate::core::view::controls::ControlsSnapshot;
use crate::core::view::limits::ViewLimits;
use crate::core::view::view_state::ViewState;

/// Applies one frame's worth of held controls and returns the next view.
///
/// Controls are level-triggered, so a held key is applied again on every
/// frame. They are applied in a fixed order (iterations, zoom, then pan) so
/// a pan in the same frame as a zoom uses the new zoom.
#[must_use]
pub fn step_view(view: ViewState, controls: ControlsSnapshot, limits: &ViewLimits) -> ViewState {
    let mut next = view;

    if controls.iterations_up {
        next = next.doubled_iterations();
    }
    if controls.iterations_down {
        next = next.halved_iterations();
    }
    if controls.zoom_in {
        next = next.zoomed_in(limits.zoom_factor);
    }
    if controls.zoom_out {
        next = next.zoomed_out(limits.zoom_factor);
    }

    let step = limits.pan_step;
    if controls.pan_up {
        next = next.panned(0.0, -step);
    }
    if controls.pan_down {
        next = next.panned(0.0, step);
    }
    if controls.pan_left {
        next = next.panned(-step, 0.0);
    }
    if controls.pan_right {
        next = next.panned(step, 0.0);
    }

    next
}

#[cfg(test)]
mod tests {
    use super::step_view;
    use crate::core::view::{Control, ControlsSnapshot, ViewLimits, ViewState};
    use std::num::NonZeroU32;

    const EPSILON: f64 = 1e-12;

    fn assert_approx_eq(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "actual={} expected={}",
            actual,
            expected
        );
    }

    fn initial_view() -> ViewState {
        ViewState::new(NonZeroU32::new(1000).unwrap(), 2.0, 1.0, 0.0, 0.0).unwrap()
    }

    fn step(view: ViewState, controls: &[Control]) -> ViewState {
        step_view(view, ControlsSnapshot::holding(controls), &ViewLimits::default())
    }

    #[test]
    fn no_controls_leaves_view_unchanged() {
        let view = initial_view();

        assert_eq!(step(view, &[]), view);
    }

    #[test]
    fn step_does_not_mutate_input() {
        let view = initial_view();

        let _ = step(view, &[Control::ZoomIn, Control::PanRight]);

        assert_eq!(view, initial_view());
    }

    #[test]
    fn iterations_up_doubles() {
        let view = step(initial_view(), &[Control::IterationsUp]);

        assert_eq!(view.max_iterations().get(), 2000);
    }

    #[test]
    fn iterations_down_halves() {
        let view = step(initial_view(), &[Control::IterationsDown]);

        assert_eq!(view.max_iterations().get(), 500);
    }

    #[test]
    fn repeated_iterations_down_never_reaches_zero() {
        let mut view = initial_view();

        for _ in 0..64 {
            view = step(view, &[Control::IterationsDown]);
            assert!(view.max_iterations().get() >= 1);
        }

        assert_eq!(view.max_iterations().get(), 1);
    }

    #[test]
    fn zoom_in_multiplies_by_factor() {
        let view = step(initial_view(), &[Control::ZoomIn]);

        assert_approx_eq(view.zoom(), 1.25);
    }

    #[test]
    fn zoom_out_at_minimum_is_ignored() {
        let view = step(initial_view(), &[Control::ZoomOut]);

        assert_eq!(view.zoom(), 1.0);
    }

    #[test]
    fn repeated_zoom_out_never_drops_below_one() {
        let mut view = initial_view();
        for _ in 0..37 {
            view = step(view, &[Control::ZoomIn]);
        }

        for _ in 0..100 {
            view = step(view, &[Control::ZoomOut]);
            assert!(view.zoom() >= 1.0, "zoom dropped to {}", view.zoom());
        }

        assert_eq!(view.zoom(), 1.0);
    }

    #[test]
    fn pan_directions() {
        let up = step(initial_view(), &[Control::PanUp]);
        let down = step(initial_view(), &[Control::PanDown]);
        let left = step(initial_view(), &[Control::PanLeft]);
        let right = step(initial_view(), &[Control::PanRight]);

        assert_approx_eq(up.pan_y(), -0.1);
        assert_approx_eq(down.pan_y(), 0.1);
        assert_approx_eq(left.pan_x(), -0.1);
        assert_approx_eq(right.pan_x(), 0.1);
        assert_eq!(up.pan_x(), 0.0);
        assert_eq!(left.pan_y(), 0.0);
    }

    #[test]
    fn pan_step_is_scaled_by_zoom() {
        let zoomed = ViewState::new(NonZeroU32::new(10).unwrap(), 2.0, 4.0, 0.0, 0.0).unwrap();

        let view = step(zoomed, &[Control::PanRight]);

        assert_approx_eq(view.pan_x(), 0.025);
    }

    #[test]
    fn pan_uses_zoom_applied_in_same_frame() {
        let view = step(initial_view(), &[Control::ZoomIn, Control::PanDown]);

        assert_approx_eq(view.pan_y(), 0.1 / 1.25);
    }

    #[test]
    fn opposite_pans_cancel_within_a_frame() {
        let view = step(initial_view(), &[Control::PanLeft, Control::PanRight]);

        assert_approx_eq(view.pan_x(), 0.0);
    }

    #[test]
    fn zoom_then_pan_round_trip_returns_to_origin() {
        let zoomed = ViewState::new(NonZeroU32::new(1000).unwrap(), 2.0, 2.0, 0.0, 0.0).unwrap();
        let starting_pan_x = zoomed.pan_x();

        let right = step(zoomed, &[Control::PanRight]);
        let back = step(right, &[Control::PanLeft]);

        assert_approx_eq(right.pan_x(), 0.05);
        assert_approx_eq(back.pan_x(), starting_pan_x);
    }

    #[test]
    fn all_controls_held_applies_each_once() {
        let view = step(initial_view(), Control::ALL);

        assert_eq!(view.max_iterations().get(), 1000);
        assert_approx_eq(view.zoom(), 1.0);
        assert_approx_eq(view.pan_x(), 0.0);
        assert_approx_eq(view.pan_y(), 0.0);
    }
}
