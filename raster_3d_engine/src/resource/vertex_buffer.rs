/// Vertex buffer - immutable mesh data for `Device::draw`
///
/// Positions are a flat `[x, y, z, x, y, z, ...]` array. The optional index
/// array lists three vertex indices per triangle. Without indices, every
/// three consecutive vertices form a triangle.

use crate::error::Result;
use crate::math::Vector4;
use crate::raster_bail;

/// Floats per vertex position
pub const FLOATS_PER_VERTEX: usize = 3;

/// Vertices per triangle
pub const VERTICES_PER_TRIANGLE: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct VertexBuffer {
    positions: Vec<f32>,
    indices: Option<Vec<u32>>,
}

impl VertexBuffer {
    /// Create an unindexed vertex buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if `positions.len()` is not a multiple of 3.
    pub fn new(positions: Vec<f32>) -> Result<Self> {
        Self::validate_positions(&positions)?;
        Ok(Self { positions, indices: None })
    }

    /// Create an indexed vertex buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if `positions.len()` or `indices.len()` is not a
    /// multiple of 3, or if any index is `>=` the vertex count.
    pub fn with_indices(positions: Vec<f32>, indices: Vec<u32>) -> Result<Self> {
        Self::validate_positions(&positions)?;

        if indices.len() % VERTICES_PER_TRIANGLE != 0 {
            raster_bail!("raster3d::VertexBuffer",
                "Index count {} is not a multiple of {}", indices.len(), VERTICES_PER_TRIANGLE);
        }

        let vertex_count = positions.len() / FLOATS_PER_VERTEX;
        if let Some((slot, &index)) = indices
            .iter()
            .enumerate()
            .find(|&(_, &index)| index as usize >= vertex_count)
        {
            raster_bail!("raster3d::VertexBuffer",
                "Index {} at slot {} is out of range (vertex count {})", index, slot, vertex_count);
        }

        Ok(Self { positions, indices: Some(indices) })
    }

    fn validate_positions(positions: &[f32]) -> Result<()> {
        if positions.len() % FLOATS_PER_VERTEX != 0 {
            raster_bail!("raster3d::VertexBuffer",
                "Position array length {} is not a multiple of {}", positions.len(), FLOATS_PER_VERTEX);
        }
        Ok(())
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn indices(&self) -> Option<&[u32]> {
        self.indices.as_deref()
    }

    pub fn is_indexed(&self) -> bool {
        self.indices.is_some()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / FLOATS_PER_VERTEX
    }

    /// Triangles drawn by `Device::draw`; a trailing partial triangle of an
    /// unindexed buffer is not counted
    pub fn triangle_count(&self) -> usize {
        match &self.indices {
            Some(indices) => indices.len() / VERTICES_PER_TRIANGLE,
            None => self.vertex_count() / VERTICES_PER_TRIANGLE,
        }
    }

    /// Object-space position of vertex `index` with `w = 1`
    pub fn vertex(&self, index: usize) -> Option<Vector4> {
        let start = index.checked_mul(FLOATS_PER_VERTEX)?;
        let end = start.checked_add(FLOATS_PER_VERTEX)?;
        let xyz = self.positions.get(start..end)?;
        Some(Vector4::new(xyz[0], xyz[1], xyz[2], 1.0))
    }

    /// The three vertices of triangle `triangle`
    pub fn triangle(&self, triangle: usize) -> Option<[Vector4; 3]> {
        let first = triangle.checked_mul(VERTICES_PER_TRIANGLE)?;
        let corner = |i: usize| -> Option<Vector4> {
            let slot = first.checked_add(i)?;
            match &self.indices {
                Some(indices) => self.vertex(*indices.get(slot)? as usize),
                None => self.vertex(slot),
            }
        };
        Some([corner(0)?, corner(1)?, corner(2)?])
    }
}

#[cfg(test)]
#[path = "vertex_buffer_tests.rs"]
mod tests;
