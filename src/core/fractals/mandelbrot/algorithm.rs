use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::view::view_state::ViewState;
use std::num::NonZeroU32;

/// Escape-time evaluation of `z ← z² + c` starting from `z = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    max_iterations: NonZeroU32,
    max_distance_squared: f64,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(max_iterations: NonZeroU32, max_distance: f64) -> Self {
        Self {
            max_iterations,
            max_distance_squared: max_distance * max_distance,
        }
    }

    #[must_use]
    pub fn from_view(view: &ViewState) -> Self {
        Self {
            max_iterations: view.max_iterations(),
            max_distance_squared: view.max_distance_squared(),
        }
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    #[inline]
    fn compute(&self, c: Complex) -> u32 {
        let max_iterations = self.max_iterations.get();
        let mut z = Complex::ZERO;
        let mut iteration = 0;

        while z.magnitude_squared() <= self.max_distance_squared && iteration < max_iterations {
            z = z.square() + c;
            iteration += 1;
        }

        iteration
    }

    fn max_iterations(&self) -> NonZeroU32 {
        self.max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn algorithm(max_iterations: u32, max_distance: f64) -> MandelbrotAlgorithm {
        MandelbrotAlgorithm::new(NonZeroU32::new(max_iterations).unwrap(), max_distance)
    }

    #[test]
    fn origin_never_escapes() {
        for max_distance in [0.0, 0.5, 2.0, 100.0] {
            for max_iterations in [1, 7, 1000] {
                let alg = algorithm(max_iterations, max_distance);

                assert_eq!(alg.compute(Complex::ZERO), max_iterations);
            }
        }
    }

    #[test]
    fn points_beyond_two_escape_immediately() {
        let alg = algorithm(1000, 2.0);

        assert_eq!(alg.compute(Complex::new(3.0, 0.0)), 1);
        assert_eq!(alg.compute(Complex::new(-2.5, 0.0)), 1);
        assert!(alg.compute(Complex::new(2.01, 0.0)) <= 2);
    }

    #[test]
    fn known_interior_points_reach_the_budget() {
        let alg = algorithm(500, 2.0);

        // main cardioid, period-2 bulb and the tip of the real axis
        assert_eq!(alg.compute(Complex::new(-0.1, 0.1)), 500);
        assert_eq!(alg.compute(Complex::new(-1.0, 0.0)), 500);
        assert_eq!(alg.compute(Complex::new(-2.0, 0.0)), 500);
    }

    #[test]
    fn count_is_bounded_by_budget() {
        let alg = algorithm(50, 2.0);

        for i in -20..=20 {
            for j in -20..=20 {
                let c = Complex::new(f64::from(i) * 0.15, f64::from(j) * 0.15);
                assert!(alg.compute(c) <= 50);
            }
        }
    }

    #[test]
    fn known_escape_count() {
        // c = 1: z goes 0, 1, 2, 5 and 5² > 4 stops the loop after three steps
        let alg = algorithm(100, 2.0);

        assert_eq!(alg.compute(Complex::new(1.0, 0.0)), 3);
    }

    #[test]
    fn larger_escape_radius_never_lowers_the_count() {
        let small = algorithm(200, 2.0);
        let large = algorithm(200, 10.0);

        for c in [
            Complex::new(0.3, 0.5),
            Complex::new(-0.75, 0.11),
            Complex::new(0.26, 0.0),
        ] {
            assert!(large.compute(c) >= small.compute(c));
        }
    }

    #[test]
    fn from_view_copies_budget_and_radius() {
        let view = ViewState::new(NonZeroU32::new(64).unwrap(), 3.0, 1.0, 0.0, 0.0).unwrap();

        let alg = MandelbrotAlgorithm::from_view(&view);

        assert_eq!(alg, algorithm(64, 3.0));
        assert_eq!(alg.max_iterations().get(), 64);
    }
}
