/// View matrix — world space to camera space.

use glam::{DMat4, DVec3};
use crate::camera::Pose;

/// Scale applied to the camera's local frame before rotation.
///
/// Flipping Z turns "camera looks down +Z in its local frame" into the
/// "looks down -Z" view space the projection matrix expects. Without it
/// every projected image is mirrored.
const VIEW_SPACE_FLIP: DVec3 = DVec3::new(1.0, 1.0, -1.0);

/// Build the world→camera matrix for `pose`.
///
/// The camera's world transform is `Translate(position) · Rotate(rotation) ·
/// Scale(1, 1, -1)`; the view matrix is its inverse.
pub fn view_matrix(pose: &Pose) -> DMat4 {
    DMat4::from_scale_rotation_translation(VIEW_SPACE_FLIP, pose.rotation(), pose.position())
        .inverse()
}

#[cfg(test)]
#[path = "view_matrix_tests.rs"]
mod tests;
