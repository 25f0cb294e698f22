//! Packed ARGB output buffer.
//!
//! Pixels are `u32` values laid out as `0xAARRGGBB` with alpha always 255,
//! row-major with the top row first. This is the contract the display
//! consumes.

use std::path::Path;

use crate::{Color, RenderError, RenderResult};
use glint_math::Interval;

/// Clamp each channel of a color to [0, 1].
#[inline]
pub fn clamp_color(color: Color) -> Color {
    Color::new(
        Interval::UNIT.clamp(color.x),
        Interval::UNIT.clamp(color.y),
        Interval::UNIT.clamp(color.z),
    )
}

/// Quantize a channel in [0, 1] to 8 bits as `floor(255.99 * c)`.
///
/// Out-of-range input saturates to 0 or 255.
#[inline]
pub fn quantize_channel(c: f64) -> u8 {
    // `as` truncates toward zero and saturates
    (255.99 * c) as u8
}

/// Clamp, quantize and pack a color as `0xFFRRGGBB`.
#[inline]
pub fn pack_argb(color: Color) -> u32 {
    let c = clamp_color(color);
    let r = quantize_channel(c.x) as u32;
    let g = quantize_channel(c.y) as u32;
    let b = quantize_channel(c.z) as u32;
    0xFF00_0000 | (r << 16) | (g << 8) | b
}

/// Rendered frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    pixels: Vec<u32>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with zeros.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    /// Get the packed pixel at (x, y), with y = 0 the top row.
    pub fn get(&self, x: u32, y: u32) -> u32 {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Get the 8-bit RGB channels of the pixel at (x, y).
    pub fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        let [_, r, g, b] = self.get(x, y).to_be_bytes();
        [r, g, b]
    }

    /// All pixels, row-major, top row first.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Expand to RGBA bytes (for saving).
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for pixel in &self.pixels {
            let [a, r, g, b] = pixel.to_be_bytes();
            bytes.extend_from_slice(&[r, g, b, a]);
        }
        bytes
    }

    /// Write the frame as a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        let path = path.as_ref();
        let image = image::RgbaImage::from_raw(self.width, self.height, self.to_rgba8()).ok_or(
            RenderError::InvalidResolution {
                width: self.width,
                height: self.height,
            },
        )?;
        image.save_with_format(path, image::ImageFormat::Png)?;
        log::info!("Saved {}x{} frame to {}", self.width, self.height, path.display());
        Ok(())
    }
}
