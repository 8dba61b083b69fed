/// Render target - a color plane plus an optional depth plane
///
/// Both planes always have the same dimensions. Toggling the depth plane
/// reallocates or drops it; it is never resized in place.

use super::color::Color;
use super::depth_buffer::DepthBuffer;
use super::texture::Texture;

#[derive(Debug, Clone)]
pub struct RenderTarget {
    texture: Texture,
    depth_buffer: Option<DepthBuffer>,
}

impl RenderTarget {
    /// Create a render target with a depth buffer
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_depth(width, height, true)
    }

    pub fn with_depth(width: u32, height: u32, use_depth: bool) -> Self {
        Self {
            texture: Texture::new(width, height),
            depth_buffer: use_depth.then(|| DepthBuffer::new(width, height)),
        }
    }

    pub fn width(&self) -> u32 {
        self.texture.width()
    }

    pub fn height(&self) -> u32 {
        self.texture.height()
    }

    pub fn texture(&self) -> &Texture {
        &self.texture
    }

    pub fn texture_mut(&mut self) -> &mut Texture {
        &mut self.texture
    }

    /// Raw RGBA8 bytes of the color plane
    pub fn pixels(&self) -> &[u8] {
        self.texture.pixels()
    }

    pub fn get(&self, x: u32, y: u32) -> Color {
        self.texture.get(x, y)
    }

    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.texture.set(x, y, color);
    }

    pub fn has_depth_buffer(&self) -> bool {
        self.depth_buffer.is_some()
    }

    pub fn depth_buffer(&self) -> Option<&DepthBuffer> {
        self.depth_buffer.as_ref()
    }

    pub fn depth_buffer_mut(&mut self) -> Option<&mut DepthBuffer> {
        self.depth_buffer.as_mut()
    }

    /// Allocate a fresh depth plane or drop the current one.
    ///
    /// No-op when the state does not change, so an existing depth plane
    /// keeps its contents.
    pub fn set_depth_buffer_enabled(&mut self, enabled: bool) {
        if enabled == self.has_depth_buffer() {
            return;
        }
        self.depth_buffer = enabled.then(|| DepthBuffer::new(self.width(), self.height()));
    }

    /// Clear the color plane to `color` and the depth plane (if any) to `+infinity`
    pub fn clear(&mut self, color: Color) {
        if let Some(depth) = self.depth_buffer.as_mut() {
            depth.clear(f32::INFINITY);
        }
        self.texture.fill(color);
    }
}

#[cfg(test)]
#[path = "render_target_tests.rs"]
mod tests;
