//! Math primitives for the software pipeline.
//!
//! Vectors and quaternions are `glam` types under their pipeline names.
//! `Matrix4` follows the row-vector convention (`v' = v · M`, composition
//! `world * view * projection`), backed by a `glam::Mat4` with the same
//! memory layout.
//!
//! `normalize()` on a zero-length vector divides by zero and produces
//! non-finite components. Use `try_normalize()` or `normalize_or_zero()`
//! whenever the input length is not known to be positive.

mod matrix4;
mod quaternion;
mod scalar;

pub use glam::{Quat as Quaternion, Vec2 as Vector2, Vec3 as Vector3, Vec4 as Vector4};
pub use matrix4::Matrix4;
pub use quaternion::quaternion_from_yaw_pitch_roll;
pub use scalar::{clamp, interpolate, ping_pong, wrap};
