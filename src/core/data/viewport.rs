use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;

/// The fixed part of the pixel-to-plane mapping: the base region of the
/// complex plane and the surface it is drawn onto.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub bounds: ComplexRect,
    pub pixel_rect: PixelRect,
}

impl Viewport {
    #[must_use]
    pub fn new(bounds: ComplexRect, pixel_rect: PixelRect) -> Self {
        Self { bounds, pixel_rect }
    }
}
