use crate::controllers::interactive::ControllerError;
use std::error::Error;
use std::fmt;
use winit::error::{EventLoopError, OsError};

/// Fatal errors that stop the windowed explorer.
#[derive(Debug)]
pub enum GuiError {
    EventLoop(EventLoopError),
    Window(OsError),
    Surface(pixels::Error),
    Controller(ControllerError),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(err) => write!(f, "event loop error: {}", err),
            Self::Window(err) => write!(f, "failed to create window: {}", err),
            Self::Surface(err) => write!(f, "failed to create pixel surface: {}", err),
            Self::Controller(err) => write!(f, "failed to start controller: {}", err),
        }
    }
}

impl Error for GuiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EventLoop(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Surface(err) => Some(err),
            Self::Controller(err) => Some(err),
        }
    }
}

impl From<EventLoopError> for GuiError {
    fn from(err: EventLoopError) -> Self {
        Self::EventLoop(err)
    }
}

impl From<OsError> for GuiError {
    fn from(err: OsError) -> Self {
        Self::Window(err)
    }
}

impl From<pixels::Error> for GuiError {
    fn from(err: pixels::Error) -> Self {
        Self::Surface(err)
    }
}

impl From<ControllerError> for GuiError {
    fn from(err: ControllerError) -> Self {
        Self::Controller(err)
    }
}
