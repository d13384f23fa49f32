use crate::controllers::interactive::{ExplorerConfig, ExplorerController, FrameClock, RenderStrategy};
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::errors::GuiError;
use crate::presenters::pixels::presenter::PixelsPresenter;
use log::info;
use std::time::Instant;
use winit::{
    dpi::PhysicalSize,
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

pub struct RunGuiCommand {
    config: ExplorerConfig,
}

impl RunGuiCommand {
    #[must_use]
    pub fn new(config: ExplorerConfig) -> Self {
        Self { config }
    }

    pub fn execute(self) -> Result<(), GuiError> {
        let config = self.config;
        let surface = config.surface;
        let event_loop = EventLoop::new()?;

        // pixels needs a 'static window handle
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(config.window_title.as_str())
                .with_inner_size(PhysicalSize::new(surface.width(), surface.height()))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let presenter = PixelsPresenter::new(window, surface)?;
        let controller = ExplorerController::new(&config)?;
        let clock = FrameClock::from_rate(config.frame_rate_hz, Instant::now());

        match config.render_strategy {
            RenderStrategy::Serial => info!(
                "rendering {}x{} serially at {} Hz",
                surface.width(),
                surface.height(),
                config.frame_rate_hz
            ),
            RenderStrategy::Parallel {
                workers,
                region_size,
            } => info!(
                "rendering {}x{} on {} workers in {}px regions at {} Hz",
                surface.width(),
                surface.height(),
                workers,
                region_size,
                config.frame_rate_hz
            ),
        }
        info!("initial view {:?}", controller.view());

        GuiApp::new(window, presenter, controller, clock).run(event_loop)
    }
}
