use crate::controllers::interactive::{ExplorerController, FrameClock, FramePoll};
use crate::core::actions::render_frame::ports::frame_surface::FrameSurface;
use crate::input::gui::app::keyboard_input::KeyboardInputState;
use crate::input::gui::errors::GuiError;
use crate::presenters::pixels::presenter::PixelsPresenter;
use log::{debug, info, warn};
use std::time::Instant;
use winit::{
    event::{Event, KeyEvent, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    keyboard::PhysicalKey,
    window::Window,
};

pub struct GuiApp {
    window: &'static Window,
    presenter: PixelsPresenter,
    controller: ExplorerController,
    keyboard: KeyboardInputState,
    clock: FrameClock,
}

impl GuiApp {
    pub fn new(
        window: &'static Window,
        presenter: PixelsPresenter,
        controller: ExplorerController,
        clock: FrameClock,
    ) -> Self {
        Self {
            window,
            presenter,
            controller,
            keyboard: KeyboardInputState::default(),
            clock,
        }
    }

    /// Runs until the window is closed or the quit key is pressed.
    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<(), GuiError> {
        event_loop.run(move |event, elwt| match event {
            Event::WindowEvent { event, window_id } if window_id == self.window.id() => {
                self.handle_window_event(event, elwt);
            }
            Event::AboutToWait => self.schedule_frame(elwt),
            _ => {}
        })?;

        Ok(())
    }

    fn handle_window_event(&mut self, event: WindowEvent, elwt: &EventLoopWindowTarget<()>) {
        match event {
            WindowEvent::CloseRequested => self.quit("window closed", elwt),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key_code),
                        state,
                        ..
                    },
                ..
            } => {
                self.keyboard.handle_key_event(key_code, state);

                if self.keyboard.take_quit() {
                    self.quit("quit key pressed", elwt);
                }
            }
            WindowEvent::Focused(false) => self.keyboard.reset(),
            WindowEvent::Resized(size) => {
                if let Err(err) = self.presenter.resize_surface(size.width, size.height) {
                    warn!("failed to resize surface to {}x{}: {}", size.width, size.height, err);
                }
            }
            WindowEvent::RedrawRequested => self.draw_frame(),
            _ => {}
        }
    }

    fn quit(&self, reason: &str, elwt: &EventLoopWindowTarget<()>) {
        info!(
            "{}, quitting after {} frames",
            reason,
            self.controller.frames_rendered()
        );
        elwt.exit();
    }

    fn schedule_frame(&mut self, elwt: &EventLoopWindowTarget<()>) {
        match self.clock.poll(Instant::now()) {
            FramePoll::Due { dropped } => {
                if dropped > 0 {
                    warn!("render loop fell behind, {} frames dropped", dropped);
                }
                self.window.request_redraw();
                elwt.set_control_flow(ControlFlow::WaitUntil(self.clock.next_deadline()));
            }
            FramePoll::Wait { until } => {
                elwt.set_control_flow(ControlFlow::WaitUntil(until));
            }
        }
    }

    fn draw_frame(&mut self) {
        let controls = self.keyboard.snapshot();

        match self.controller.run_frame(controls, &mut self.presenter) {
            Ok(report) if report.pixels_skipped > 0 => {
                debug!(
                    "{} of {} pixels skipped",
                    report.pixels_skipped,
                    self.presenter.pixel_rect().size()
                );
            }
            Ok(_) => {}
            Err(err) => warn!("frame dropped: {}", err),
        }
    }
}
