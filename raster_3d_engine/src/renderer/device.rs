/// Device - top-level orchestrator of the software pipeline.
///
/// Owns the front and back render targets, any registered off-screen
/// targets, the active shader and the render state. Per frame the caller
/// clears, draws one or more vertex buffers, then presents:
///
/// ```text
/// clear(color) -> draw(buffer)* -> present() -> RGBA8 bytes of the new front
/// ```
///
/// The device is not internally synchronized; `&mut self` on every mutating
/// operation enforces the single-writer contract.

use std::mem;
use std::sync::{Arc, RwLock};
use rayon::prelude::*;
use slotmap::{new_key_type, SlotMap};
use crate::error::{Error, Result};
use crate::math::Vector3;
use crate::resource::{texture, Color, RenderTarget, VertexBuffer};
use crate::shader::{DefaultShader, Shader};
use crate::{raster_bail, raster_debug, raster_error, raster_info, raster_trace};
use super::drawer::{Drawer, DEFAULT_FILL_COLOR, DEFAULT_LINE_COLOR};
use super::render_modes::{ColorSource, RenderModes};

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable key for an off-screen render target registered with a Device.
    ///
    /// A key becomes invalid only when its own target is removed.
    pub struct RenderTargetKey;
}

// ===== ACTIVE TARGET =====

/// Which render target draws and clears go to.
///
/// There is no `Front` variant: the front buffer is the one being displayed
/// and is never drawn into. Because `Back` names a role rather than a
/// buffer, the swap in `present()` re-points it at the new back buffer
/// without any bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTarget {
    /// The device back buffer
    #[default]
    Back,
    /// A registered off-screen target
    External(RenderTargetKey),
}

// ===== DEVICE DESC =====

/// Device construction parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceDesc {
    /// Front/back buffer width in pixels
    pub width: u32,
    /// Front/back buffer height in pixels
    pub height: u32,
    pub render_modes: RenderModes,
    /// Attach a depth plane to the front and back buffers
    pub depth_buffer: bool,
    pub fill_color: Color,
    pub line_color: Color,
    pub color_source: ColorSource,
}

impl Default for DeviceDesc {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            render_modes: RenderModes::SOLID,
            depth_buffer: true,
            fill_color: DEFAULT_FILL_COLOR,
            line_color: DEFAULT_LINE_COLOR,
            color_source: ColorSource::Constant,
        }
    }
}

// ===== DEVICE =====

pub struct Device {
    front: RenderTarget,
    back: RenderTarget,
    targets: SlotMap<RenderTargetKey, RenderTarget>,
    active: ActiveTarget,
    shader: Arc<RwLock<dyn Shader>>,
    render_modes: RenderModes,
    depth_buffer: bool,
    fill_color: Color,
    line_color: Color,
    color_source: ColorSource,
}

impl Device {
    /// Create a device with default settings and `width` x `height` buffers
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimensions` if either dimension is zero or the
    /// pixel plane would not fit in memory addressing.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::from_desc(&DeviceDesc {
            width,
            height,
            ..DeviceDesc::default()
        })
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidDimensions` if either dimension is zero or the
    /// pixel plane would not fit in memory addressing.
    pub fn from_desc(desc: &DeviceDesc) -> Result<Self> {
        check_dimensions(desc.width, desc.height)?;

        raster_info!("raster3d::Device", "Creating device {}x{} (modes {:?}, depth {})",
            desc.width, desc.height, desc.render_modes, desc.depth_buffer);

        let shader: Arc<RwLock<dyn Shader>> = Arc::new(RwLock::new(DefaultShader::default()));
        Ok(Self {
            front: RenderTarget::with_depth(desc.width, desc.height, desc.depth_buffer),
            back: RenderTarget::with_depth(desc.width, desc.height, desc.depth_buffer),
            targets: SlotMap::with_key(),
            active: ActiveTarget::Back,
            shader,
            render_modes: desc.render_modes,
            depth_buffer: desc.depth_buffer,
            fill_color: desc.fill_color,
            line_color: desc.line_color,
            color_source: desc.color_source,
        })
    }

    pub fn width(&self) -> u32 {
        self.back.width()
    }

    pub fn height(&self) -> u32 {
        self.back.height()
    }

    /// Reallocate front and back buffers, discarding their contents.
    ///
    /// The active target is reset to the back buffer.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimensions` if either dimension is zero or too
    /// large; the device is left unchanged.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        check_dimensions(width, height)?;

        raster_debug!("raster3d::Device", "Resizing {}x{} -> {}x{}",
            self.width(), self.height(), width, height);

        self.front = RenderTarget::with_depth(width, height, self.depth_buffer);
        self.back = RenderTarget::with_depth(width, height, self.depth_buffer);
        self.active = ActiveTarget::Back;
        Ok(())
    }

    // ===== STATE =====

    pub fn render_modes(&self) -> RenderModes {
        self.render_modes
    }

    pub fn set_render_modes(&mut self, modes: RenderModes) {
        self.render_modes = modes;
    }

    /// Shader used by subsequent draws
    pub fn shader(&self) -> &Arc<RwLock<dyn Shader>> {
        &self.shader
    }

    /// Replace the active shader.
    ///
    /// The caller may keep its own handle to update uniforms between draws.
    pub fn set_shader(&mut self, shader: Arc<RwLock<dyn Shader>>) {
        self.shader = shader;
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    pub fn line_color(&self) -> Color {
        self.line_color
    }

    pub fn set_line_color(&mut self, color: Color) {
        self.line_color = color;
    }

    pub fn color_source(&self) -> ColorSource {
        self.color_source
    }

    pub fn set_color_source(&mut self, source: ColorSource) {
        self.color_source = source;
    }

    pub fn has_depth_buffer(&self) -> bool {
        self.depth_buffer
    }

    /// Attach or drop the depth plane of the front and back buffers
    pub fn set_depth_buffer_enabled(&mut self, enabled: bool) {
        self.depth_buffer = enabled;
        self.front.set_depth_buffer_enabled(enabled);
        self.back.set_depth_buffer_enabled(enabled);
    }

    // ===== RENDER TARGETS =====

    /// Register an off-screen render target
    pub fn add_render_target(&mut self, target: RenderTarget) -> RenderTargetKey {
        let key = self.targets.insert(target);
        raster_debug!("raster3d::Device", "Added render target {:?}", key);
        key
    }

    pub fn render_target(&self, key: RenderTargetKey) -> Option<&RenderTarget> {
        self.targets.get(key)
    }

    pub fn render_target_mut(&mut self, key: RenderTargetKey) -> Option<&mut RenderTarget> {
        self.targets.get_mut(key)
    }

    /// Unregister an off-screen target and hand it back.
    ///
    /// If it was the active target, the back buffer becomes active.
    pub fn remove_render_target(&mut self, key: RenderTargetKey) -> Option<RenderTarget> {
        let removed = self.targets.remove(key)?;
        if self.active == ActiveTarget::External(key) {
            self.active = ActiveTarget::Back;
        }
        raster_debug!("raster3d::Device", "Removed render target {:?}", key);
        Some(removed)
    }

    pub fn render_target_count(&self) -> usize {
        self.targets.len()
    }

    /// Bind the target for subsequent clears and draws; `None` binds the back buffer.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidResource` if `key` is not registered; the
    /// active target is left unchanged.
    pub fn set_render_target(&mut self, key: Option<RenderTargetKey>) -> Result<()> {
        self.active = match key {
            None => ActiveTarget::Back,
            Some(key) => {
                if !self.targets.contains_key(key) {
                    raster_bail!("raster3d::Device", "Render target {:?} is not registered", key);
                }
                ActiveTarget::External(key)
            }
        };
        Ok(())
    }

    pub fn active_target(&self) -> ActiveTarget {
        self.active
    }

    /// Buffer returned by the last `present()`
    pub fn front_buffer(&self) -> &RenderTarget {
        &self.front
    }

    pub fn back_buffer(&self) -> &RenderTarget {
        &self.back
    }

    fn active_target_mut(&mut self) -> &mut RenderTarget {
        match self.active {
            ActiveTarget::Back => &mut self.back,
            ActiveTarget::External(key) => match self.targets.get_mut(key) {
                Some(target) => target,
                None => &mut self.back,
            },
        }
    }

    // ===== FRAME =====

    /// Clear the active target's color plane to `color` and its depth plane to `+infinity`
    pub fn clear(&mut self, color: Color) {
        self.active_target_mut().clear(color);
    }

    /// Run every triangle of `buffer` through the shader and rasterize it
    /// into the active target.
    ///
    /// The vertex stage runs on the rayon pool; rasterization then happens
    /// sequentially in triangle order, so overlapping triangles resolve the
    /// same way on every run (later triangles win).
    ///
    /// # Errors
    ///
    /// - `Error::LockPoisoned` if the shader lock was poisoned.
    /// - `Error::NotImplemented` with `ColorSource::FragmentStage` and a
    ///   shader without a fragment stage. Nothing is drawn in that case.
    pub fn draw(&mut self, buffer: &VertexBuffer) -> Result<()> {
        let shader = Arc::clone(&self.shader);
        let shader = shader
            .read()
            .map_err(|_| Error::LockPoisoned("raster3d::Device shader".to_string()))?;
        let shader: &dyn Shader = &*shader;

        let fill_color = match self.color_source {
            ColorSource::Constant => self.fill_color,
            ColorSource::FragmentStage => shader.calculate_color()?,
        };
        let line_color = self.line_color;
        let modes = self.render_modes;

        let triangles: Vec<[Vector3; 3]> = (0..buffer.triangle_count())
            .into_par_iter()
            .filter_map(|index| buffer.triangle(index))
            .map(|positions| positions.map(|position| shader.calculate_vertex(position)))
            .collect();

        raster_trace!("raster3d::Device", "Drawing {} triangles ({:?})", triangles.len(), modes);

        let mut drawer = Drawer::new(self.active_target_mut());
        drawer.set_fill_color(fill_color);
        drawer.set_line_color(line_color);

        for [p0, p1, p2] in triangles {
            if modes.contains(RenderModes::SOLID) {
                drawer.draw_triangle(p0, p1, p2);
            }
            if modes.contains(RenderModes::WIREFRAME) {
                let (a, b, c) = (p0.truncate(), p1.truncate(), p2.truncate());
                drawer.draw_line(a, b);
                drawer.draw_line(b, c);
                drawer.draw_line(c, a);
            }
        }
        Ok(())
    }

    /// Swap front and back and return the new front buffer's RGBA8 bytes
    /// (`width * height * 4`, row-major, top row first).
    ///
    /// The buffers are exchanged, not copied. Draws after this call go to
    /// the new back buffer (unless an off-screen target is bound).
    pub fn present(&mut self) -> &[u8] {
        mem::swap(&mut self.front, &mut self.back);
        self.front.pixels()
    }
}

/// Both dimensions non-zero and the RGBA8 plane addressable
fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 || texture::byte_len(width, height).is_none() {
        raster_error!("raster3d::Device", "Invalid dimensions {}x{}", width, height);
        return Err(Error::InvalidDimensions { width, height });
    }
    Ok(())
}

#[cfg(test)]
#[path = "device_tests.rs"]
mod tests;
