use crate::core::actions::render_frame::ports::frame_surface::FrameSurface;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use pixels::{Pixels, SurfaceTexture, TextureError};
use winit::window::Window;

/// Window surface backed by `pixels`.
///
/// Pixels are staged in a [`PixelBuffer`] of the logical surface size and
/// only reach the window on [`present`](FrameSurface::present), so a frame is
/// never shown half drawn. Window resizes scale the logical surface.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    staging: PixelBuffer,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, surface: PixelRect) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(surface.width(), surface.height(), surface_texture)?;

        Ok(Self {
            pixels,
            staging: PixelBuffer::new(surface),
        })
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)
    }
}

impl FrameSurface for PixelsPresenter {
    type PixelError = PixelBufferError;
    type PresentError = pixels::Error;

    fn pixel_rect(&self) -> PixelRect {
        self.staging.pixel_rect()
    }

    fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), Self::PixelError> {
        self.staging.set_pixel(pixel, colour)
    }

    fn present(&mut self) -> Result<(), Self::PresentError> {
        copy_rgba_frame(self.staging.buffer(), self.pixels.frame_mut());
        self.pixels.render()
    }
}

/// Copies as many whole RGBA pixels as both buffers hold.
fn copy_rgba_frame(src: &[u8], dest: &mut [u8]) {
    let len = src.len().min(dest.len()) / 4 * 4;

    dest[..len].copy_from_slice(&src[..len]);
}

#[cfg(test)]
mod tests {
    use super::copy_rgba_frame;

    #[test]
    fn copies_matching_frames() {
        let src = [1, 2, 3, 255, 4, 5, 6, 255];
        let mut dest = [0; 8];

        copy_rgba_frame(&src, &mut dest);

        assert_eq!(dest, src);
    }

    #[test]
    fn mismatched_lengths_copy_only_whole_shared_pixels() {
        let src = [9; 10];
        let mut dest = [0; 8];

        copy_rgba_frame(&src, &mut dest);
        assert_eq!(dest, [9; 8]);

        let mut larger = [0; 12];
        copy_rgba_frame(&src, &mut larger);
        assert_eq!(&larger[..8], &[9; 8]);
        assert_eq!(&larger[8..], &[0; 4]);
    }
}
