//! Error types for camera_space
//!
//! Every invalid camera parameter is rejected when the parameter type is
//! built, so the transform functions never see values that would produce
//! NaN or infinite matrices.

use std::fmt;

/// Result type for camera_space operations
pub type Result<T> = std::result::Result<T, Error>;

/// camera_space errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Lens parameters out of range (FOV, near/far clip distances)
    InvalidLens(String),

    /// Viewport or resolution out of range (zero or negative size)
    InvalidViewport(String),

    /// Camera pose unusable (non-finite position, non-unit rotation)
    InvalidPose(String),

    /// Field of view outside the open range (0, 180) degrees
    InvalidFov(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLens(msg) => write!(f, "Invalid lens: {}", msg),
            Error::InvalidViewport(msg) => write!(f, "Invalid viewport: {}", msg),
            Error::InvalidPose(msg) => write!(f, "Invalid pose: {}", msg),
            Error::InvalidFov(msg) => write!(f, "Invalid field of view: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Log an error before handing it back to the caller (internal use)
///
/// Keeps every rejected parameter visible in the log with its source
/// location, the same way for every validation site.
pub(crate) fn log_and_return_error(source: &str, error: Error) -> Error {
    crate::space_error!(source, "{}", error);
    error
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
