//! Field-of-view conversion.
//!
//! Pinhole relationship between the two angles of one lens:
//! `tan(horizontal / 2) = tan(vertical / 2) * aspect`.
//!
//! Angles are in degrees everywhere in this module.

use crate::camera::Viewport;
use crate::error::{log_and_return_error, Error, Result};

const SOURCE: &str = "camspace::fov";

fn check_fov(fov_degrees: f64) -> Result<()> {
    if !fov_degrees.is_finite() || fov_degrees <= 0.0 || fov_degrees >= 180.0 {
        return Err(log_and_return_error(
            SOURCE,
            Error::InvalidFov(format!("expected (0, 180) degrees, got {}", fov_degrees)),
        ));
    }
    Ok(())
}

fn check_aspect(aspect: f64) -> Result<()> {
    if !aspect.is_finite() || aspect <= 0.0 {
        return Err(log_and_return_error(
            SOURCE,
            Error::InvalidViewport(format!("aspect must be > 0, got {}", aspect)),
        ));
    }
    Ok(())
}

/// `width / height`.
///
/// # Errors
///
/// `Error::InvalidViewport` if either size is not finite and > 0.
pub fn aspect(width: f64, height: f64) -> Result<f64> {
    Ok(Viewport::new(width, height)?.aspect())
}

/// Horizontal FOV of a lens with vertical FOV `vertical_degrees` on a
/// screen of the given aspect.
pub fn horizontal_fov(vertical_degrees: f64, aspect: f64) -> Result<f64> {
    check_fov(vertical_degrees)?;
    check_aspect(aspect)?;
    let half = (vertical_degrees.to_radians() * 0.5).tan() * aspect;
    Ok((2.0 * half.atan()).to_degrees())
}

/// Vertical FOV of a lens with horizontal FOV `horizontal_degrees` on a
/// screen of the given aspect.
pub fn vertical_fov(horizontal_degrees: f64, aspect: f64) -> Result<f64> {
    check_fov(horizontal_degrees)?;
    check_aspect(aspect)?;
    let half = (horizontal_degrees.to_radians() * 0.5).tan() / aspect;
    Ok((2.0 * half.atan()).to_degrees())
}

/// Carry a vertical FOV tuned for `base` over to `current`.
///
/// The horizontal FOV is what stays fixed: `base_fov` is turned into the
/// horizontal FOV it gives at the base aspect, and that horizontal FOV is
/// turned back into a vertical FOV at the current aspect. A scene framed
/// for 16:9 keeps its left/right extent on 4:3 or 21:9 screens.
pub fn rescale_fov(base_fov: f64, base: &Viewport, current: &Viewport) -> Result<f64> {
    let horizontal = horizontal_fov(base_fov, base.aspect())?;
    vertical_fov(horizontal, current.aspect())
}

#[cfg(test)]
#[path = "fov_tests.rs"]
mod tests;
