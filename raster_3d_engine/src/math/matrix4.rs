use std::ops::{Add, Mul};
use glam::Mat4;
use super::{Quaternion, Vector3, Vector4};

/// Row-major 4x4 matrix with row-vector convention.
///
/// `M[row][col]` is addressed with `get(row, col)`, zero-based, so the
/// projection term usually written `M34` is `get(2, 3)`.
///
/// Internally each matrix row is stored as a `glam` column: a row-major
/// row-vector matrix and a column-major column-vector matrix share one
/// memory layout, so `glam` does the arithmetic without transposes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4(Mat4);

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix4 {
    pub const IDENTITY: Matrix4 = Matrix4(Mat4::IDENTITY);
    pub const ZERO: Matrix4 = Matrix4(Mat4::ZERO);

    /// Matrix with `value` on the diagonal and zero elsewhere
    pub fn from_diagonal(value: f32) -> Self {
        Self(Mat4::from_diagonal(Vector4::splat(value)))
    }

    /// Build from rows, `rows[r][c]` being `M[r][c]`
    pub fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self(Mat4::from_cols_array_2d(&rows))
    }

    pub fn to_rows(&self) -> [[f32; 4]; 4] {
        self.0.to_cols_array_2d()
    }

    /// Element at `row`, `col` (both `0..4`)
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is greater than 3.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.0.col(row)[col]
    }

    /// # Panics
    ///
    /// Panics if `row` or `col` is greater than 3.
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.0.col_mut(row)[col] = value;
    }

    pub fn row(&self, row: usize) -> Vector4 {
        self.0.col(row)
    }

    pub fn transpose(&self) -> Self {
        Self(self.0.transpose())
    }

    /// `self` applied first, then `other`: `v · (self * other)`
    pub fn multiply(&self, other: &Matrix4) -> Self {
        Self(other.0 * self.0)
    }

    /// Row-vector transform `v · M`
    pub fn transform(&self, v: Vector4) -> Vector4 {
        self.0 * v
    }

    /// Underlying `glam` matrix (column-vector view of the same transform)
    pub fn as_glam(&self) -> &Mat4 {
        &self.0
    }

    // ===== CONSTRUCTORS =====

    pub fn create_translation(translation: Vector3) -> Self {
        Self(Mat4::from_translation(translation))
    }

    pub fn create_scale(scale: Vector3) -> Self {
        Self(Mat4::from_scale(scale))
    }

    pub fn create_rotation_x(radians: f32) -> Self {
        Self(Mat4::from_rotation_x(radians))
    }

    pub fn create_rotation_y(radians: f32) -> Self {
        Self(Mat4::from_rotation_y(radians))
    }

    pub fn create_rotation_z(radians: f32) -> Self {
        Self(Mat4::from_rotation_z(radians))
    }

    /// Rotation of `angle` radians around `axis` (expected normalized)
    pub fn create_from_axis_angle(axis: Vector3, angle: f32) -> Self {
        Self(Mat4::from_axis_angle(axis, angle))
    }

    pub fn create_from_quaternion(quaternion: Quaternion) -> Self {
        Self(Mat4::from_quat(quaternion))
    }

    /// Yaw around Y, pitch around X, roll around Z
    pub fn create_from_yaw_pitch_roll(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self::create_from_quaternion(super::quaternion_from_yaw_pitch_roll(yaw, pitch, roll))
    }

    /// Right-handed view matrix looking from `eye` towards `target`.
    ///
    /// The basis is `z = normalize(eye - target)`, `x = normalize(up × z)`,
    /// `y = z × x`. When `eye == target` or `up` is parallel to the view
    /// direction the normalizations divide by zero and the matrix holds
    /// NaN; use [`Matrix4::try_create_look_at`] to detect that case.
    pub fn create_look_at(eye: Vector3, target: Vector3, up: Vector3) -> Self {
        Self(Mat4::look_at_rh(eye, target, up))
    }

    /// Same as [`Matrix4::create_look_at`], `None` for a degenerate basis
    pub fn try_create_look_at(eye: Vector3, target: Vector3, up: Vector3) -> Option<Self> {
        let z_axis = (eye - target).try_normalize()?;
        up.cross(z_axis).try_normalize()?;
        Some(Self::create_look_at(eye, target, up))
    }

    /// Perspective projection with `M34 = -1`: clip W receives `-z_eye`.
    ///
    /// Paired with the `-W` perspective divide in
    /// [`crate::shader::project_to_screen`]; changing one without the other
    /// mirrors depth.
    pub fn create_perspective_field_of_view(
        fov_y: f32,
        aspect_ratio: f32,
        near_plane: f32,
        far_plane: f32,
    ) -> Self {
        Self(Mat4::perspective_rh(fov_y, aspect_ratio, near_plane, far_plane))
    }

    /// Centered orthographic projection of a `width` x `height` volume
    pub fn create_orthographic(width: f32, height: f32, near_plane: f32, far_plane: f32) -> Self {
        let half_w = width * 0.5;
        let half_h = height * 0.5;
        Self(Mat4::orthographic_rh(-half_w, half_w, -half_h, half_h, near_plane, far_plane))
    }
}

impl Mul for Matrix4 {
    type Output = Matrix4;

    fn mul(self, rhs: Matrix4) -> Matrix4 {
        self.multiply(&rhs)
    }
}

impl Add for Matrix4 {
    type Output = Matrix4;

    fn add(self, rhs: Matrix4) -> Matrix4 {
        Self(self.0 + rhs.0)
    }
}

impl From<Matrix4> for Mat4 {
    fn from(matrix: Matrix4) -> Mat4 {
        matrix.0
    }
}

#[cfg(test)]
#[path = "matrix4_tests.rs"]
mod tests;
