/// Depth buffer - one `f32` per pixel, same shape as the color plane it serves

use rayon::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct DepthBuffer {
    width: u32,
    height: u32,
    depth: Vec<f32>,
}

impl DepthBuffer {
    /// Create a depth buffer with every cell at `+infinity` (nothing drawn)
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            depth: vec![f32::INFINITY; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn values(&self) -> &[f32] {
        &self.depth
    }

    /// Depth at `(x, y)`, `None` when out of range
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        self.index(x, y).map(|i| self.depth[i])
    }

    /// Write depth at `(x, y)`; out-of-range coordinates are ignored
    pub fn set(&mut self, x: u32, y: u32, value: f32) {
        if let Some(i) = self.index(x, y) {
            self.depth[i] = value;
        }
    }

    /// Set every cell to `value`; cells are independent so the work is split across rayon
    pub fn clear(&mut self, value: f32) {
        self.depth.par_iter_mut().for_each(|cell| *cell = value);
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| x as usize + y as usize * self.width as usize)
    }
}
