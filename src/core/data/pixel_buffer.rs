use crate::core::actions::render_frame::ports::frame_surface::FrameSurface;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::convert::Infallible;
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 4;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    pixel_rect.size() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        pixel_rect: PixelRect,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds { pixel, pixel_rect } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of PixelRect bounds top:{}, left:{}, bottom:{}, right:{}",
                    pixel.x,
                    pixel.y,
                    pixel_rect.top_left().y,
                    pixel_rect.top_left().x,
                    pixel_rect.bottom_right().y,
                    pixel_rect.bottom_right().x
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA8 pixel storage.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        Self {
            pixel_rect,
            buffer: vec![0; pixel_rect_to_buffer_size(pixel_rect)],
        }
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn colour_at(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
            a: self.buffer[index + 3],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel)?;

        self.buffer[index..index + BYTES_PER_PIXEL].copy_from_slice(&colour.to_bytes());

        Ok(())
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.pixel_rect.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                pixel_rect: self.pixel_rect,
            });
        }

        let relative_x = (pixel.x - self.pixel_rect.top_left().x) as usize;
        let relative_y = (pixel.y - self.pixel_rect.top_left().y) as usize;

        Ok((relative_y * self.pixel_rect.width() as usize + relative_x) * BYTES_PER_PIXEL)
    }
}

impl FrameSurface for PixelBuffer {
    type PixelError = PixelBufferError;
    type PresentError = Infallible;

    fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), Self::PixelError> {
        PixelBuffer::set_pixel(self, pixel, colour)
    }

    fn present(&mut self) -> Result<(), Self::PresentError> {
        Ok(())
    }
}
