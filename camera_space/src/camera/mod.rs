//! Camera module — camera parameters, camera bundle and frustum.
//!
//! Passive value types. The crate does NOT store or manage cameras;
//! callers own them and pass them to the transform functions.

mod camera;
mod frustum;
mod params;

pub use camera::Camera;
pub use frustum::{
    Frustum, FrustumTest,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use params::{LensParameters, Pose, Viewport};
