use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    InvalidSize { width: f64, height: f64 },
    NonFinite,
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "complex rect size must be positive: {}x{}",
                    width, height
                )
            }
            Self::NonFinite => write!(f, "complex rect bounds must be finite"),
        }
    }
}

impl Error for ComplexRectError {}

/// Axis-aligned rectangle in the complex plane, `min` is the corner mapped to pixel (0, 0).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    min: Complex,
    max: Complex,
}

impl ComplexRect {
    pub fn new(min: Complex, max: Complex) -> Result<Self, ComplexRectError> {
        if ![min.real, min.imag, max.real, max.imag]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(ComplexRectError::NonFinite);
        }

        let width = max.real - min.real;
        let height = max.imag - min.imag;

        if width <= 0.0 || height <= 0.0 {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(&self) -> Complex {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Complex {
        self.max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.real - self.min.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.imag - self.min.imag
    }
}
