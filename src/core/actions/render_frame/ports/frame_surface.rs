use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;

/// Output surface for one frame at a time.
///
/// The renderer calls [`set_pixel`](Self::set_pixel) for every pixel of
/// [`pixel_rect`](Self::pixel_rect) and then [`present`](Self::present)
/// exactly once. Nothing written since the last present is visible before
/// the next one.
pub trait FrameSurface {
    type PixelError: Error;
    type PresentError: Error;

    fn pixel_rect(&self) -> PixelRect;

    fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), Self::PixelError>;

    fn present(&mut self) -> Result<(), Self::PresentError>;
}
