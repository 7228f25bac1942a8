/// Viewport matrix — normalized device coordinates to pixels.
///
/// This is a convention of this crate, used to keep unprojection
/// consistent. It is not the viewport transform of any graphics API and
/// its depth output is not meant for a rasterizer.

use glam::{DMat4, DVec4};
use crate::camera::{LensParameters, Viewport};

/// Build the NDC→screen matrix.
///
/// - X: [-1, 1] → [0, width]
/// - Y: [-1, 1] → [0, height]
/// - Z: [-1, 1] → [near, far]
///
/// ```text
/// | w/2  0    0            w/2          |
/// | 0    h/2  0            h/2          |
/// | 0    0    (far-near)/2 (far+near)/2 |
/// | 0    0    0            1            |
/// ```
pub fn viewport_matrix(viewport: &Viewport, near: f64, far: f64) -> DMat4 {
    let half_width = viewport.width() * 0.5;
    let half_height = viewport.height() * 0.5;
    let half_depth = (far - near) * 0.5;
    let mid_depth = (far + near) * 0.5;

    DMat4::from_cols(
        DVec4::new(half_width, 0.0, 0.0, 0.0),
        DVec4::new(0.0, half_height, 0.0, 0.0),
        DVec4::new(0.0, 0.0, half_depth, 0.0),
        DVec4::new(half_width, half_height, mid_depth, 1.0),
    )
}

/// [`viewport_matrix`] using the clip distances of `lens`.
pub fn viewport_matrix_for_lens(viewport: &Viewport, lens: &LensParameters) -> DMat4 {
    viewport_matrix(viewport, lens.near(), lens.far())
}

#[cfg(test)]
#[path = "viewport_matrix_tests.rs"]
mod tests;
