//! Transform module — matrix builders and screen/world conversion.
//!
//! All functions are pure: they take validated camera parameters and
//! return fresh matrices or points. Nothing is cached between calls.
//!
//! Matrices are glam `DMat4` (column-major, column vectors, `M * p`).

mod view_matrix;
mod projection_matrix;
mod viewport_matrix;
pub mod fov;
mod screen_world;

pub use view_matrix::view_matrix;
pub use projection_matrix::projection_matrix;
pub use viewport_matrix::{viewport_matrix, viewport_matrix_for_lens};
pub use screen_world::{
    screen_to_world, world_to_screen, transform_homogeneous, perspective_divide,
};
