//! Screen ↔ world conversion.
//!
//! Both directions rebuild their matrices on every call from the pose, lens
//! and viewport they are given.
//!
//! A homogeneous result with `w == 0` has no finite 3D point. Both
//! conversions report it as `None` instead of dividing by zero, so a
//! degenerate result never looks like a real point at the origin.

use glam::{DMat4, DVec2, DVec3, DVec4};
use crate::camera::{LensParameters, Pose, Viewport};
use crate::error::Result;
use super::projection_matrix::projection_matrix;
use super::view_matrix::view_matrix;
use super::viewport_matrix::viewport_matrix_for_lens;

const SOURCE: &str = "camspace::screen_world";

/// Apply `matrix` to the homogeneous point `point`.
///
/// Each output component is the dot product of one matrix row with the
/// point, accumulated explicitly so the `w` row is visible to the caller
/// before any divide happens.
pub fn transform_homogeneous(matrix: &DMat4, point: DVec4) -> DVec4 {
    let mut out = [0.0; 4];
    for (i, value) in out.iter_mut().enumerate() {
        let row = matrix.row(i);
        *value = row.x * point.x + row.y * point.y + row.z * point.z + row.w * point.w;
    }
    DVec4::from_array(out)
}

/// Divide x, y, z by w.
///
/// Returns `None` when `w == 0` (point at infinity, or on the camera's
/// focal plane).
pub fn perspective_divide(point: DVec4) -> Option<DVec3> {
    if point.w == 0.0 {
        return None;
    }
    Some(point.truncate() / point.w)
}

/// Unproject a screen point to the world point `focal_distance` beyond the
/// near plane.
///
/// `screen` is in pixels, origin at the viewport's bottom-left corner, the
/// same space [`world_to_screen`] produces.
///
/// The lens near plane is moved out to `lens.near() + focal_distance`
/// (see [`LensParameters::with_near_offset`]). Projection and viewport
/// matrices are built for that adjusted lens and the screen point is placed
/// on its near plane, so the result lies at view depth
/// `near + focal_distance` from the camera. To pick at a distance `d` from
/// the camera pass `focal_distance = d - lens.near()`.
///
/// Each matrix is inverted on its own and the inverses are composed as
/// `view⁻¹ · projection⁻¹ · viewport⁻¹`.
///
/// Returns `Ok(None)` when the homogeneous result has `w == 0`.
///
/// # Errors
///
/// `Error::InvalidLens` if the adjusted near plane is not in `(0, far)`.
pub fn screen_to_world(
    screen: DVec2,
    pose: &Pose,
    lens: &LensParameters,
    viewport: &Viewport,
    focal_distance: f64,
) -> Result<Option<DVec3>> {
    let adjusted = lens.with_near_offset(focal_distance)?;

    let view_inverse = view_matrix(pose).inverse();
    let projection_inverse = projection_matrix(&adjusted, viewport).inverse();
    let viewport_inverse = viewport_matrix_for_lens(viewport, &adjusted).inverse();
    let unproject = view_inverse * projection_inverse * viewport_inverse;

    let point = DVec4::new(screen.x, screen.y, adjusted.near(), 1.0);
    let world = transform_homogeneous(&unproject, point);

    let result = perspective_divide(world);
    if result.is_none() {
        crate::space_debug!(SOURCE, "screen_to_world: w == 0 for screen point {}", screen);
    }
    Ok(result)
}

/// Project a world point onto the screen.
///
/// Uses the lens' true near/far planes. The returned x, y are pixels in
/// `[0, width]` × `[0, height]` for points inside the view; z stays in
/// normalized device depth (-1 at near, 1 at far).
///
/// Returns `None` when the homogeneous result has `w == 0`, which happens
/// for points on the plane through the camera perpendicular to its view
/// direction.
pub fn world_to_screen(
    world: DVec3,
    pose: &Pose,
    lens: &LensParameters,
    viewport: &Viewport,
) -> Option<DVec3> {
    let world_to_clip = projection_matrix(lens, viewport) * view_matrix(pose);
    let clip = transform_homogeneous(&world_to_clip, world.extend(1.0));

    if clip.w < 0.0 {
        crate::space_trace!(SOURCE, "world_to_screen: {} is behind the camera", world);
    }

    let Some(ndc) = perspective_divide(clip) else {
        crate::space_debug!(SOURCE, "world_to_screen: w == 0 for world point {}", world);
        return None;
    };

    let size = viewport.size();
    let pixels = ((ndc.truncate() + DVec2::ONE) * 0.5) * size;
    Some(pixels.extend(ndc.z))
}

#[cfg(test)]
#[path = "screen_world_tests.rs"]
mod tests;
