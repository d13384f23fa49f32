use crate::controllers::interactive::data::explorer_config::{ExplorerConfig, RenderStrategy};
use crate::controllers::interactive::errors::controller::ControllerError;
use crate::core::actions::render_frame::ports::frame_surface::FrameSurface;
use crate::core::actions::render_frame::render_frame::{FrameReport, RenderFrameError, render_frame};
use crate::core::actions::render_frame::render_frame_parallel::render_frame_parallel;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::LinearGradient;
use crate::core::util::pixel_to_complex_coords::ViewMapping;
use crate::core::view::controls::ControlsSnapshot;
use crate::core::view::limits::ViewLimits;
use crate::core::view::step::step_view;
use crate::core::view::view_state::ViewState;
use log::debug;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::num::NonZeroU32;
use std::time::Instant;

enum FrameRenderer {
    Serial,
    Parallel {
        pool: ThreadPool,
        region_size: NonZeroU32,
    },
}

impl FrameRenderer {
    fn build(strategy: RenderStrategy) -> Result<Self, ControllerError> {
        match strategy {
            RenderStrategy::Serial => Ok(Self::Serial),
            RenderStrategy::Parallel {
                workers,
                region_size,
            } => {
                let pool = ThreadPoolBuilder::new()
                    .num_threads(workers.get())
                    .thread_name(|index| format!("render-worker-{}", index))
                    .build()?;

                Ok(Self::Parallel { pool, region_size })
            }
        }
    }
}

fn validate_limits(limits: ViewLimits) -> Result<ViewLimits, ControllerError> {
    let zoom_ok = limits.zoom_factor.is_finite() && limits.zoom_factor > 1.0;
    let pan_ok = limits.pan_step.is_finite() && limits.pan_step >= 0.0;

    if zoom_ok && pan_ok {
        Ok(limits)
    } else {
        Err(ControllerError::InvalidLimits(limits))
    }
}

/// Owns the interactive view and drives one frame at a time: apply the held
/// controls, then render the whole surface from a snapshot of the new view.
pub struct ExplorerController {
    bounds: ComplexRect,
    view: ViewState,
    limits: ViewLimits,
    colour_map: LinearGradient,
    renderer: FrameRenderer,
    frames_rendered: u64,
}

impl ExplorerController {
    pub fn new(config: &ExplorerConfig) -> Result<Self, ControllerError> {
        let limits = validate_limits(config.limits)?;
        let renderer = FrameRenderer::build(config.render_strategy)?;

        Ok(Self {
            bounds: config.bounds,
            view: config.initial_view,
            limits,
            colour_map: LinearGradient::new(config.inside_colour, config.outside_colour),
            renderer,
            frames_rendered: 0,
        })
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Returns `true` when the held controls changed the view.
    pub fn apply_controls(&mut self, controls: ControlsSnapshot) -> bool {
        if !controls.any_held() {
            return false;
        }

        let next = step_view(self.view, controls, &self.limits);
        if next == self.view {
            return false;
        }

        if next.max_iterations() != self.view.max_iterations() {
            debug!(
                "max iterations {} -> {}",
                self.view.max_iterations(),
                next.max_iterations()
            );
        }
        if next.zoom() != self.view.zoom() {
            debug!("zoom {} -> {}", self.view.zoom(), next.zoom());
        }
        if next.pan_x() != self.view.pan_x() || next.pan_y() != self.view.pan_y() {
            debug!("pan ({}, {})", next.pan_x(), next.pan_y());
        }

        self.view = next;
        true
    }

    /// Renders the current view onto `surface` and presents it.
    pub fn render<S>(
        &mut self,
        surface: &mut S,
    ) -> Result<FrameReport, RenderFrameError<S::PresentError>>
    where
        S: FrameSurface + ?Sized,
    {
        let view = self.view;
        let viewport = Viewport::new(self.bounds, surface.pixel_rect());
        let mapping = ViewMapping::new(&viewport, &view);
        let algorithm = MandelbrotAlgorithm::from_view(&view);
        let start = Instant::now();

        let report = match &self.renderer {
            FrameRenderer::Serial => render_frame(surface, &mapping, &algorithm, &self.colour_map),
            FrameRenderer::Parallel { pool, region_size } => render_frame_parallel(
                pool,
                *region_size,
                surface,
                &mapping,
                &algorithm,
                &self.colour_map,
            ),
        }?;

        self.frames_rendered += 1;
        debug!(
            "frame {} done in {:?}, {} pixels skipped",
            self.frames_rendered,
            start.elapsed(),
            report.pixels_skipped
        );

        Ok(report)
    }

    /// One tick of the interactive loop.
    pub fn run_frame<S>(
        &mut self,
        controls: ControlsSnapshot,
        surface: &mut S,
    ) -> Result<FrameReport, RenderFrameError<S::PresentError>>
    where
        S: FrameSurface + ?Sized,
    {
        self.apply_controls(controls);
        self.render(surface)
    }
}
