use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::view::view_state::ViewState;

/// Affine map between surface pixels and points of the complex plane for one
/// frame.
///
/// A pixel is first placed proportionally inside the base viewport bounds,
/// then divided by the zoom and shifted by the pan offset:
///
/// ```text
/// mapped = (x / width) * bounds.width + bounds.min
/// c      = mapped / zoom + pan
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewMapping {
    origin: Point,
    width: f64,
    height: f64,
    min: Complex,
    scale_x: f64,
    scale_y: f64,
    zoom: f64,
    pan: Complex,
}

impl ViewMapping {
    #[must_use]
    pub fn new(viewport: &Viewport, view: &ViewState) -> Self {
        Self {
            origin: viewport.pixel_rect.top_left(),
            width: f64::from(viewport.pixel_rect.width()),
            height: f64::from(viewport.pixel_rect.height()),
            min: viewport.bounds.min(),
            scale_x: viewport.bounds.width(),
            scale_y: viewport.bounds.height(),
            zoom: view.zoom(),
            pan: Complex::new(view.pan_x(), view.pan_y()),
        }
    }

    #[inline]
    #[must_use]
    pub fn to_complex(&self, pixel: Point) -> Complex {
        let x = f64::from(pixel.x - self.origin.x);
        let y = f64::from(pixel.y - self.origin.y);
        let mapped_x = (x / self.width) * self.scale_x + self.min.real;
        let mapped_y = (y / self.height) * self.scale_y + self.min.imag;

        Complex {
            real: mapped_x / self.zoom + self.pan.real,
            imag: mapped_y / self.zoom + self.pan.imag,
        }
    }

    /// Inverse of [`to_complex`](Self::to_complex), in fractional pixels.
    #[must_use]
    pub fn to_pixel(&self, point: Complex) -> (f64, f64) {
        let mapped_x = (point.real - self.pan.real) * self.zoom;
        let mapped_y = (point.imag - self.pan.imag) * self.zoom;
        let x = (mapped_x - self.min.real) / self.scale_x * self.width;
        let y = (mapped_y - self.min.imag) / self.scale_y * self.height;

        (x + f64::from(self.origin.x), y + f64::from(self.origin.y))
    }
}
