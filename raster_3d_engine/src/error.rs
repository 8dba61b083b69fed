//! Error types for the Raster3D engine
//!
//! The rasterizer itself never fails: out-of-range pixel access and degenerate
//! geometry have defined behavior. Errors only surface at the API edges
//! (invalid mesh data, unknown render target handles, missing shader stages).

use std::fmt;

/// Result type for Raster3D engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Raster3D engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Invalid resource (vertex data, index data, render target handle, etc.)
    InvalidResource(String),

    /// Device or render target dimensions that cannot hold a single pixel
    InvalidDimensions { width: u32, height: u32 },

    /// A shader stage was invoked that the shader does not provide
    NotImplemented(String),

    /// A shared lock was poisoned by a panicking writer
    LockPoisoned(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InvalidDimensions { width, height } => {
                write!(f, "Invalid dimensions: {}x{}", width, height)
            }
            Error::NotImplemented(msg) => write!(f, "Not implemented: {}", msg),
            Error::LockPoisoned(msg) => write!(f, "Lock poisoned: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
