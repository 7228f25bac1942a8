/*!
# camera_space

Conversions between world space, camera (view) space and screen space for
a perspective camera, without any rendering engine in the loop.

Callers pass camera pose, lens and viewport as plain values; the crate
builds the matrices on the fly and never keeps a "current camera".

## Architecture

- **Pose / LensParameters / Viewport**: validated camera parameters
- **view_matrix**: world → camera
- **projection_matrix**: camera → clip (OpenGL-style perspective)
- **viewport_matrix**: NDC → pixels
- **fov**: horizontal/vertical FOV conversion and resolution rescaling
- **screen_to_world / world_to_screen**: the composed conversions
- **Camera**: pose + lens + viewport bundle with convenience accessors
- **Frustum**: visibility tests in world space

Matrices are glam `DMat4`, column-major, applied to column vectors.

## Example

```no_run
use camera_space::camspace::camera::{Camera, LensParameters, Pose, Viewport};
use camera_space::glam::DVec3;

let camera = Camera::new(
    Pose::at(DVec3::new(0.0, 0.0, -10.0))?,
    LensParameters::new(60.0, 0.3, 1000.0)?,
    Viewport::new(1920.0, 1080.0)?,
);

if let Some(screen) = camera.world_to_screen(DVec3::ZERO) {
    let focal_distance = camera.pick_distance_offset(camera.view_depth(DVec3::ZERO));
    let world = camera.screen_to_world(screen.truncate(), focal_distance)?;
    assert!(world.is_some());
}
# Ok::<(), camera_space::camspace::Error>(())
```
*/

// Internal modules
mod error;
mod diagnostics;
pub mod log;
pub mod camera;
pub mod transform;

// Main camspace namespace module
pub mod camspace {
    // Error types
    pub use crate::error::{Error, Result};

    // Logger slot
    pub use crate::diagnostics::Diagnostics;

    // Logging sub-module (types only, macros live at crate root)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger, SeverityFilter, format_entry,
        };
    }

    // Camera parameters, camera bundle and frustum
    pub mod camera {
        pub use crate::camera::*;
    }

    // Matrix builders and conversions
    pub mod transform {
        pub use crate::transform::*;
    }
}

// Re-export math library at crate root
pub use glam;
