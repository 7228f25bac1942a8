/// Camera — pose, lens and viewport bundled as one value.
///
/// The Camera stores no matrices. Every accessor rebuilds what it returns
/// from the three stored parameters, so changing one parameter can never
/// leave a stale matrix behind.
///
/// Nothing in the crate keeps a "current" camera. Callers own their
/// Camera values and pass them around as they see fit.

use glam::{DMat4, DVec2, DVec3};
use crate::error::Result;
use crate::transform::{
    self, fov, projection_matrix, view_matrix, viewport_matrix_for_lens,
};
use super::frustum::Frustum;
use super::params::{LensParameters, Pose, Viewport};

/// Camera parameters with convenience conversions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera {
    pose: Pose,
    lens: LensParameters,
    viewport: Viewport,
}

impl Camera {
    pub fn new(pose: Pose, lens: LensParameters, viewport: Viewport) -> Self {
        Self { pose, lens, viewport }
    }

    // ===== GETTERS =====

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn lens(&self) -> &LensParameters {
        &self.lens
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    // ===== SETTERS =====

    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    pub fn set_lens(&mut self, lens: LensParameters) {
        self.lens = lens;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    // ===== DERIVED MATRICES =====

    /// View matrix (inverse of the camera's world transform).
    pub fn view_matrix(&self) -> DMat4 {
        view_matrix(&self.pose)
    }

    /// Perspective projection matrix.
    pub fn projection_matrix(&self) -> DMat4 {
        projection_matrix(&self.lens, &self.viewport)
    }

    /// NDC→screen matrix for the lens' clip distances.
    pub fn viewport_matrix(&self) -> DMat4 {
        viewport_matrix_for_lens(&self.viewport, &self.lens)
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> DMat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Frustum planes in world space.
    pub fn frustum(&self) -> Frustum {
        Frustum::from_view_projection(&self.view_projection_matrix())
    }

    /// Horizontal field of view in degrees.
    pub fn horizontal_fov(&self) -> Result<f64> {
        fov::horizontal_fov(self.lens.fov_degrees(), self.viewport.aspect())
    }

    // ===== CONVERSIONS =====

    /// Depth of `world` along the view direction (not the Euclidean distance).
    ///
    /// Off the view axis the two differ; only this depth round-trips through
    /// [`Camera::pick_distance_offset`] and [`Camera::screen_to_world`].
    pub fn view_depth(&self, world: DVec3) -> f64 {
        (world - self.pose.position()).dot(self.pose.forward())
    }

    /// `focal_distance` to pass to [`Camera::screen_to_world`] to pick at
    /// view depth `depth` (see [`Camera::view_depth`]).
    pub fn pick_distance_offset(&self, depth: f64) -> f64 {
        depth - self.lens.near()
    }

    /// See [`transform::screen_to_world`].
    pub fn screen_to_world(&self, screen: DVec2, focal_distance: f64) -> Result<Option<DVec3>> {
        transform::screen_to_world(screen, &self.pose, &self.lens, &self.viewport, focal_distance)
    }

    /// See [`transform::world_to_screen`].
    pub fn world_to_screen(&self, world: DVec3) -> Option<DVec3> {
        transform::world_to_screen(world, &self.pose, &self.lens, &self.viewport)
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
