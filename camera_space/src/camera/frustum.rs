/// Frustum — six clipping planes in world space.
///
/// Each plane is a DVec4 (A, B, C, D) where:
/// - (A, B, C) is the inward-pointing unit normal
/// - D is the signed distance
/// - A point P is inside when dot(plane, P_homogeneous) >= 0 for all planes
///
/// Lets a caller tell whether a world point is on screen before asking
/// `world_to_screen` for its pixel position.

use glam::{DMat4, DVec3, DVec4};

/// Result of a 3-way frustum/sphere classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrustumTest {
    /// Sphere is entirely outside the frustum
    Outside,
    /// Sphere is entirely inside the frustum
    Inside,
    /// Sphere straddles at least one plane
    Partial,
}

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Six frustum planes.
#[derive(Debug, Clone, Copy)]
pub struct Frustum {
    /// Frustum planes: left, right, bottom, top, near, far
    pub planes: [DVec4; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix.
    ///
    /// Gribb & Hartmann method, for matrices producing NDC depth in [-1, 1]
    /// (the convention of `projection_matrix`).
    pub fn from_view_projection(vp: &DMat4) -> Self {
        // Clip-space w row against the x, y and z rows:
        // -w <= x, y, z <= w  <=>  (w ± row) · P >= 0
        let w = vp.row(3);
        let [x, y, z] = [vp.row(0), vp.row(1), vp.row(2)];

        let mut planes = [w + x, w - x, w + y, w - y, w + z, w - z];

        for plane in &mut planes {
            let normal_len = plane.truncate().length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }

        Self { planes }
    }

    /// Signed distance from `point` to plane `index` (positive = inside).
    pub fn signed_distance(&self, index: usize, point: DVec3) -> f64 {
        let plane = self.planes[index];
        plane.truncate().dot(point) + plane.w
    }

    /// Whether `point` lies inside or on the frustum.
    pub fn contains_point(&self, point: DVec3) -> bool {
        (0..6).all(|i| self.signed_distance(i, point) >= 0.0)
    }

    /// Whether a sphere touches the frustum.
    ///
    /// Conservative near the frustum corners: may report spheres that are
    /// just outside as intersecting, never the other way round.
    pub fn intersects_sphere(&self, center: DVec3, radius: f64) -> bool {
        self.classify_sphere(center, radius) != FrustumTest::Outside
    }

    /// Classify a sphere against the frustum (3-way test).
    pub fn classify_sphere(&self, center: DVec3, radius: f64) -> FrustumTest {
        let mut all_inside = true;

        for i in 0..6 {
            let distance = self.signed_distance(i, center);
            if distance < -radius {
                return FrustumTest::Outside;
            }
            if distance < radius {
                all_inside = false;
            }
        }

        if all_inside { FrustumTest::Inside } else { FrustumTest::Partial }
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
