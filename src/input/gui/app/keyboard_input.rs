use crate::core::view::controls::{Control, ControlsSnapshot};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

fn control_for_key(key_code: KeyCode) -> Option<Control> {
    match key_code {
        KeyCode::PageUp => Some(Control::IterationsUp),
        KeyCode::PageDown => Some(Control::IterationsDown),
        KeyCode::NumpadAdd | KeyCode::Equal => Some(Control::ZoomIn),
        KeyCode::NumpadSubtract | KeyCode::Minus => Some(Control::ZoomOut),
        KeyCode::ArrowUp => Some(Control::PanUp),
        KeyCode::ArrowDown => Some(Control::PanDown),
        KeyCode::ArrowLeft => Some(Control::PanLeft),
        KeyCode::ArrowRight => Some(Control::PanRight),
        _ => None,
    }
}

/// Held view keys plus a pending quit edge, fed by window key events.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardInputState {
    held: ControlsSnapshot,
    quit_edge_pending: bool,
}

impl KeyboardInputState {
    pub fn handle_key_event(&mut self, key_code: KeyCode, state: ElementState) {
        let pressed = state == ElementState::Pressed;

        if key_code == KeyCode::Escape {
            if pressed {
                self.quit_edge_pending = true;
            }
            return;
        }

        if let Some(control) = control_for_key(key_code) {
            self.held.set(control, pressed);
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> ControlsSnapshot {
        self.held
    }

    /// Returns `true` once per quit key press.
    pub fn take_quit(&mut self) -> bool {
        std::mem::take(&mut self.quit_edge_pending)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
