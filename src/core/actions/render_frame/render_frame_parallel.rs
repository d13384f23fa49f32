use rayon::ThreadPool;
use rayon::prelude::*;

use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_frame::ports::frame_surface::FrameSurface;
use crate::core::actions::render_frame::render_frame::{FrameReport, RenderFrameError, shade_pixel};
use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::util::partition_into_regions::partition_into_regions;
use crate::core::util::pixel_to_complex_coords::ViewMapping;
use std::num::NonZeroU32;

/// Colours computed for one region, in the region's row-major order.
struct RegionTile {
    region: PixelRect,
    colours: Vec<Colour>,
}

fn shade_region<Alg, CMap>(
    region: PixelRect,
    mapping: &ViewMapping,
    algorithm: &Alg,
    colour_map: &CMap,
) -> RegionTile
where
    Alg: FractalAlgorithm + ?Sized,
    CMap: ColourMap + ?Sized,
{
    let colours = region
        .points()
        .map(|pixel| shade_pixel(pixel, mapping, algorithm, colour_map))
        .collect();

    RegionTile { region, colours }
}

/// Renders the surface by shading disjoint regions of `region_size` pixels on
/// `pool`, then writing every tile into the surface from the calling thread and
/// presenting once.
///
/// Workers never touch the surface. Produces the same pixels as
/// [`render_frame`](super::render_frame::render_frame).
pub fn render_frame_parallel<S, Alg, CMap>(
    pool: &ThreadPool,
    region_size: NonZeroU32,
    surface: &mut S,
    mapping: &ViewMapping,
    algorithm: &Alg,
    colour_map: &CMap,
) -> Result<FrameReport, RenderFrameError<S::PresentError>>
where
    S: FrameSurface + ?Sized,
    Alg: FractalAlgorithm + Sync + ?Sized,
    CMap: ColourMap + Sync + ?Sized,
{
    let regions = partition_into_regions(surface.pixel_rect(), region_size);

    let tiles: Vec<RegionTile> = pool.install(|| {
        regions
            .into_par_iter()
            .map(|region| shade_region(region, mapping, algorithm, colour_map))
            .collect()
    });

    let mut report = FrameReport::default();

    for tile in tiles {
        for (pixel, colour) in tile.region.points().zip(tile.colours) {
            report.record(surface.set_pixel(pixel, colour));
        }
    }

    surface.present().map_err(RenderFrameError::Present)?;

    Ok(report)
}
