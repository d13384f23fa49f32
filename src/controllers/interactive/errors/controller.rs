use crate::core::view::limits::ViewLimits;
use rayon::ThreadPoolBuildError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ControllerError {
    /// Zoom factor must be finite and above 1, pan step finite and not negative.
    InvalidLimits(ViewLimits),
    WorkerPool(ThreadPoolBuildError),
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLimits(limits) => write!(
                f,
                "invalid view limits: zoom factor {}, pan step {}",
                limits.zoom_factor, limits.pan_step
            ),
            Self::WorkerPool(err) => write!(f, "failed to start render workers: {}", err),
        }
    }
}

impl Error for ControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidLimits(_) => None,
            Self::WorkerPool(err) => Some(err),
        }
    }
}

impl From<ThreadPoolBuildError> for ControllerError {
    fn from(err: ThreadPoolBuildError) -> Self {
        Self::WorkerPool(err)
    }
}
