use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use std::num::NonZeroU32;

/// Linear blend from `outside` (escaped straight away) to `inside` (never
/// escaped), by the fraction of the iteration budget a point used up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearGradient {
    inside: Colour,
    outside: Colour,
}

impl LinearGradient {
    #[must_use]
    pub fn new(inside: Colour, outside: Colour) -> Self {
        Self { inside, outside }
    }
}

impl ColourMap for LinearGradient {
    fn map(&self, iterations: u32, max_iterations: NonZeroU32) -> Colour {
        let ratio = (f64::from(iterations) / f64::from(max_iterations.get())).clamp(0.0, 1.0);
        let inv_ratio = 1.0 - ratio;

        Colour {
            r: blend_channel(self.inside.r, self.outside.r, ratio, inv_ratio),
            g: blend_channel(self.inside.g, self.outside.g, ratio, inv_ratio),
            b: blend_channel(self.inside.b, self.outside.b, ratio, inv_ratio),
            a: 255,
        }
    }
}

// truncates toward zero, clamped to the endpoints so rounding can't step outside them
#[inline]
fn blend_channel(inside: u8, outside: u8, ratio: f64, inv_ratio: f64) -> u8 {
    let low = f64::from(inside.min(outside));
    let high = f64::from(inside.max(outside));
    let value = f64::from(inside) * ratio + f64::from(outside) * inv_ratio;

    value.clamp(low, high) as u8
}
