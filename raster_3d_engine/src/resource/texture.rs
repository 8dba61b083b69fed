/// Texture - a fixed-size RGBA8 pixel plane
///
/// Pixels are interleaved RGBA, row-major, top row first: pixel `(x, y)`
/// starts at byte `(x + y * width) * 4`. The buffer length is always
/// exactly `width * height * 4`.

use rayon::prelude::*;
use crate::raster_warn;
use super::color::Color;

/// Bytes per RGBA8 pixel
pub const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

/// Byte length of a `width` x `height` RGBA8 plane, `None` if it overflows `usize`
pub fn byte_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(BYTES_PER_PIXEL)
}

impl Texture {
    /// Create a zero-initialized (transparent black) texture
    ///
    /// # Panics
    ///
    /// Panics if `byte_len(width, height)` overflows. `Device` rejects such
    /// dimensions before allocating.
    pub fn new(width: u32, height: u32) -> Self {
        let len = match byte_len(width, height) {
            Some(len) => len,
            None => panic!("texture {}x{} overflows usize", width, height),
        };
        Self {
            width,
            height,
            pixels: vec![0; len],
        }
    }

    /// Create a texture and copy `data` into it.
    ///
    /// `data` must hold exactly `width * height * 4` bytes. Otherwise the
    /// copy is skipped, a warning is logged, and the texture stays
    /// transparent black.
    pub fn from_bytes(width: u32, height: u32, data: &[u8]) -> Self {
        let mut texture = Self::new(width, height);
        if data.len() != texture.pixels.len() {
            raster_warn!("raster3d::Texture",
                "Pixel data is {} bytes, a {}x{} texture needs {}; data ignored",
                data.len(), width, height, texture.pixels.len());
            return texture;
        }
        texture.pixels.copy_from_slice(data);
        texture
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels (`width * height`)
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raw RGBA8 bytes, row-major, top-to-bottom
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((x as usize + y as usize * self.width as usize) * BYTES_PER_PIXEL)
    }

    /// Pixel at `(x, y)`, `Color::TRANSPARENT` when out of range
    pub fn get(&self, x: u32, y: u32) -> Color {
        match self.offset(x, y) {
            Some(offset) => self.read(offset),
            None => Color::TRANSPARENT,
        }
    }

    /// Write pixel `(x, y)`; out-of-range coordinates are ignored
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        if let Some(offset) = self.offset(x, y) {
            self.write(offset, color);
        }
    }

    /// Pixel at linear index `index` (`0..width * height`)
    ///
    /// # Panics
    ///
    /// Panics if `index >= width * height`.
    pub fn get_index(&self, index: usize) -> Color {
        self.read(index * BYTES_PER_PIXEL)
    }

    /// Write the pixel at linear index `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= width * height`.
    pub fn set_index(&mut self, index: usize, color: Color) {
        self.write(index * BYTES_PER_PIXEL, color);
    }

    /// Set every pixel to `color`, split across the rayon pool
    pub fn fill(&mut self, color: Color) {
        let bytes = color.to_array();
        self.pixels
            .par_chunks_exact_mut(BYTES_PER_PIXEL)
            .for_each(|pixel| pixel.copy_from_slice(&bytes));
    }

    fn read(&self, offset: usize) -> Color {
        let px = &self.pixels[offset..offset + BYTES_PER_PIXEL];
        Color::new(px[0], px[1], px[2], px[3])
    }

    fn write(&mut self, offset: usize, color: Color) {
        self.pixels[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&color.to_array());
    }
}

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
