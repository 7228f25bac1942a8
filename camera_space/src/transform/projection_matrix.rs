/// Projection matrix — camera space to clip space.

use glam::{DMat4, DVec4};
use crate::camera::{LensParameters, Viewport};

/// Build the perspective matrix for `lens` on `viewport`.
///
/// Right-handed, OpenGL depth convention: view-space points in front of
/// the camera have negative Z and map to NDC depth in [-1, 1]
/// (near → -1, far → 1). Aspect is `viewport.width / viewport.height`.
///
/// Written element by element so the layout is explicit:
///
/// ```text
/// | f/aspect  0   0                 0               |
/// | 0         f   0                 0               |
/// | 0         0   (far+near)/(n-f)  2·far·near/(n-f) |
/// | 0         0   -1                0               |
/// ```
///
/// with `f = 1 / tan(fov / 2)`.
pub fn projection_matrix(lens: &LensParameters, viewport: &Viewport) -> DMat4 {
    let f = 1.0 / (lens.fov_degrees().to_radians() * 0.5).tan();
    let aspect = viewport.aspect();
    let near = lens.near();
    let far = lens.far();
    let inv_range = 1.0 / (near - far);

    DMat4::from_cols(
        DVec4::new(f / aspect, 0.0, 0.0, 0.0),
        DVec4::new(0.0, f, 0.0, 0.0),
        DVec4::new(0.0, 0.0, (far + near) * inv_range, -1.0),
        DVec4::new(0.0, 0.0, 2.0 * far * near * inv_range, 0.0),
    )
}

#[cfg(test)]
#[path = "projection_matrix_tests.rs"]
mod tests;
