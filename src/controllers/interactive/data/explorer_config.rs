use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::view::limits::ViewLimits;
use crate::core::view::view_state::ViewState;
use std::num::{NonZeroU32, NonZeroUsize};
use std::time::Duration;

const DEFAULT_SURFACE_WIDTH: u32 = 1366;
const DEFAULT_SURFACE_HEIGHT: u32 = 768;
const DEFAULT_MAX_ITERATIONS: NonZeroU32 = NonZeroU32::new(1000).unwrap();
const DEFAULT_MAX_DISTANCE: f64 = 2.0;
const DEFAULT_WORKERS: NonZeroUsize = NonZeroUsize::new(8).unwrap();
const DEFAULT_REGION_SIZE: NonZeroU32 = NonZeroU32::new(32).unwrap();
const DEFAULT_FRAME_RATE_HZ: NonZeroU32 = NonZeroU32::new(60).unwrap();
const DEFAULT_WINDOW_TITLE: &str = "Fractal";

pub(crate) fn default_bounds() -> ComplexRect {
    ComplexRect::new(Complex::new(-2.5, -1.0), Complex::new(1.0, 1.0))
        .expect("default viewport bounds are valid")
}

pub(crate) fn default_surface() -> PixelRect {
    PixelRect::from_size(DEFAULT_SURFACE_WIDTH, DEFAULT_SURFACE_HEIGHT)
        .expect("default surface size is valid")
}

pub(crate) fn default_view() -> ViewState {
    ViewState::new(DEFAULT_MAX_ITERATIONS, DEFAULT_MAX_DISTANCE, ViewState::MIN_ZOOM, 0.0, 0.0)
        .expect("default view state is valid")
}

/// How a frame's pixels are distributed over threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStrategy {
    /// Every pixel on the render loop's own thread.
    Serial,
    /// Square regions of `region_size` pixels shaded on a pool of `workers`
    /// threads.
    Parallel {
        workers: NonZeroUsize,
        region_size: NonZeroU32,
    },
}

impl Default for RenderStrategy {
    fn default() -> Self {
        Self::Parallel {
            workers: DEFAULT_WORKERS,
            region_size: DEFAULT_REGION_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerConfig {
    /// Logical drawing surface. Window resizes scale it rather than change it.
    pub surface: PixelRect,
    pub bounds: ComplexRect,
    pub initial_view: ViewState,
    pub inside_colour: Colour,
    pub outside_colour: Colour,
    pub render_strategy: RenderStrategy,
    pub limits: ViewLimits,
    pub frame_rate_hz: NonZeroU32,
    pub window_title: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            surface: default_surface(),
            bounds: default_bounds(),
            initial_view: default_view(),
            inside_colour: Colour::BLACK,
            outside_colour: Colour::WHITE,
            render_strategy: RenderStrategy::default(),
            limits: ViewLimits::default(),
            frame_rate_hz: DEFAULT_FRAME_RATE_HZ,
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
        }
    }
}

impl ExplorerConfig {
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate_hz.get()
    }
}
