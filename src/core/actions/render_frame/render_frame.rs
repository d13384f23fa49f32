use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_frame::ports::frame_surface::FrameSurface;
use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::util::pixel_to_complex_coords::ViewMapping;
use std::error::Error;
use std::fmt;

/// Error type for a frame that could not be shown.
///
/// Individual pixel writes never fail a frame; they are counted in
/// [`FrameReport::pixels_skipped`] instead.
#[derive(Debug)]
pub enum RenderFrameError<E> {
    /// The surface refused to present the completed frame.
    Present(E),
}

impl<E: fmt::Display> fmt::Display for RenderFrameError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderFrameError::Present(e) => write!(f, "present failed: {}", e),
        }
    }
}

impl<E: Error + 'static> Error for RenderFrameError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RenderFrameError::Present(e) => Some(e),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    pub pixels_written: u64,
    pub pixels_skipped: u64,
}

impl FrameReport {
    pub(crate) fn record<E>(&mut self, write: Result<(), E>) {
        match write {
            Ok(()) => self.pixels_written += 1,
            Err(_) => self.pixels_skipped += 1,
        }
    }
}

/// Runs one pixel through mapping, escape-time evaluation and colouring.
#[inline]
pub fn shade_pixel<Alg, CMap>(
    pixel: Point,
    mapping: &ViewMapping,
    algorithm: &Alg,
    colour_map: &CMap,
) -> Colour
where
    Alg: FractalAlgorithm + ?Sized,
    CMap: ColourMap + ?Sized,
{
    let c = mapping.to_complex(pixel);
    let iterations = algorithm.compute(c);

    colour_map.map(iterations, algorithm.max_iterations())
}

/// Renders every pixel of the surface on the calling thread, row by row,
/// then presents the frame.
///
/// For a worker-pool sweep, use
/// [`render_frame_parallel`](super::render_frame_parallel::render_frame_parallel).
pub fn render_frame<S, Alg, CMap>(
    surface: &mut S,
    mapping: &ViewMapping,
    algorithm: &Alg,
    colour_map: &CMap,
) -> Result<FrameReport, RenderFrameError<S::PresentError>>
where
    S: FrameSurface + ?Sized,
    Alg: FractalAlgorithm + ?Sized,
    CMap: ColourMap + ?Sized,
{
    let mut report = FrameReport::default();

    for pixel in surface.pixel_rect().points() {
        let colour = shade_pixel(pixel, mapping, algorithm, colour_map);
        report.record(surface.set_pixel(pixel, colour));
    }

    surface.present().map_err(RenderFrameError::Present)?;

    Ok(report)
}
