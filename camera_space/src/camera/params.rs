/// Camera parameters — validated value types.
///
/// Pose, lens and viewport are checked once, when they are built. Every
/// transform function takes these types, so a matrix built from them is
/// always finite and invertible.

use glam::{DQuat, DVec2, DVec3};
use crate::error::{log_and_return_error, Error, Result};

/// Camera placement in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    position: DVec3,
    rotation: DQuat,
}

impl Pose {
    /// Create a pose from a position and a unit quaternion.
    ///
    /// # Errors
    ///
    /// `Error::InvalidPose` if the position is not finite or the rotation
    /// is not normalized.
    pub fn new(position: DVec3, rotation: DQuat) -> Result<Self> {
        if !position.is_finite() {
            return Err(log_and_return_error(
                "camspace::Pose",
                Error::InvalidPose(format!("position must be finite, got {}", position)),
            ));
        }
        if !rotation.is_finite() || !rotation.is_normalized() {
            return Err(log_and_return_error(
                "camspace::Pose",
                Error::InvalidPose(format!("rotation must be a unit quaternion, got {}", rotation)),
            ));
        }
        Ok(Self { position, rotation })
    }

    /// Camera at the origin with no rotation.
    pub fn identity() -> Self {
        Self {
            position: DVec3::ZERO,
            rotation: DQuat::IDENTITY,
        }
    }

    /// Camera at `position` with no rotation.
    ///
    /// # Errors
    ///
    /// `Error::InvalidPose` if the position is not finite.
    pub fn at(position: DVec3) -> Result<Self> {
        Self::new(position, DQuat::IDENTITY)
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    pub fn rotation(&self) -> DQuat {
        self.rotation
    }

    /// Unit vector the camera looks along, in world space.
    ///
    /// The camera's local +Z axis.
    pub fn forward(&self) -> DVec3 {
        self.rotation * DVec3::Z
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

/// Vertical field of view and clip distances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensParameters {
    fov_degrees: f64,
    near: f64,
    far: f64,
}

impl LensParameters {
    /// Create lens parameters.
    ///
    /// # Errors
    ///
    /// `Error::InvalidLens` unless `0 < fov_degrees < 180`, `near > 0` and
    /// `far > near`, all finite.
    pub fn new(fov_degrees: f64, near: f64, far: f64) -> Result<Self> {
        if !fov_degrees.is_finite() || fov_degrees <= 0.0 || fov_degrees >= 180.0 {
            return Err(log_and_return_error(
                "camspace::LensParameters",
                Error::InvalidLens(format!(
                    "vertical fov must be in (0, 180) degrees, got {}",
                    fov_degrees
                )),
            ));
        }
        if !near.is_finite() || near <= 0.0 {
            return Err(log_and_return_error(
                "camspace::LensParameters",
                Error::InvalidLens(format!("near must be > 0, got {}", near)),
            ));
        }
        if !far.is_finite() || far <= near {
            return Err(log_and_return_error(
                "camspace::LensParameters",
                Error::InvalidLens(format!(
                    "far ({}) must be greater than near ({})",
                    far, near
                )),
            ));
        }
        Ok(Self { fov_degrees, near, far })
    }

    /// Vertical field of view in degrees.
    pub fn fov_degrees(&self) -> f64 {
        self.fov_degrees
    }

    pub fn near(&self) -> f64 {
        self.near
    }

    pub fn far(&self) -> f64 {
        self.far
    }

    /// Same lens with the near plane pushed out by `focal_distance`.
    ///
    /// Unprojecting a screen point at the near plane of the returned lens
    /// lands at depth `near + focal_distance` in front of the camera. This is
    /// how `screen_to_world` picks at an arbitrary distance while reusing the
    /// regular projection pipeline.
    ///
    /// # Errors
    ///
    /// `Error::InvalidLens` if the adjusted near plane is not in `(0, far)`.
    pub fn with_near_offset(&self, focal_distance: f64) -> Result<Self> {
        Self::new(self.fov_degrees, self.near + focal_distance, self.far)
    }
}

impl Default for LensParameters {
    /// 60° vertical FOV, near 0.3, far 1000.
    fn default() -> Self {
        Self {
            fov_degrees: 60.0,
            near: 0.3,
            far: 1000.0,
        }
    }
}

/// Screen-space output size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    /// Create a viewport.
    ///
    /// # Errors
    ///
    /// `Error::InvalidViewport` unless both sizes are finite and > 0.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(log_and_return_error(
                "camspace::Viewport",
                Error::InvalidViewport(format!("width must be > 0, got {}", width)),
            ));
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(log_and_return_error(
                "camspace::Viewport",
                Error::InvalidViewport(format!("height must be > 0, got {}", height)),
            ));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// width / height
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }
}

impl Default for Viewport {
    /// 1920×1080.
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
        }
    }
}

#[cfg(test)]
#[path = "params_tests.rs"]
mod tests;
