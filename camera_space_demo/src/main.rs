/// camera_space demo
///
/// Projects a few world points, picks back through the screen center at
/// several distances, and shows how a vertical FOV tuned for 16:9 carries
/// over to other screens.

use camera_space::camspace::{Diagnostics, Result};
use camera_space::camspace::camera::{Camera, LensParameters, Pose, Viewport};
use camera_space::camspace::log::{DefaultLogger, LogSeverity, SeverityFilter};
use camera_space::camspace::transform::fov;
use camera_space::glam::{DQuat, DVec2, DVec3};

fn main() -> Result<()> {
    Diagnostics::set_logger(SeverityFilter::new(DefaultLogger, LogSeverity::Debug));

    let base = Viewport::new(1920.0, 1080.0)?;
    let camera = Camera::new(
        Pose::new(DVec3::new(0.0, 2.0, -10.0), DQuat::from_rotation_x(0.15))?,
        LensParameters::new(60.0, 0.3, 1000.0)?,
        base,
    );

    println!("Camera at {}, looking along {}", camera.pose().position(), camera.pose().forward());
    println!(
        "Vertical FOV {:.2}°, horizontal FOV {:.2}°",
        camera.lens().fov_degrees(),
        camera.horizontal_fov()?
    );

    // ===== WORLD → SCREEN =====

    let frustum = camera.frustum();
    for world in [
        DVec3::ZERO,
        DVec3::new(4.0, 1.0, 15.0),
        DVec3::new(0.0, 2.0, -10.0),
        DVec3::new(0.0, 0.0, -40.0),
    ] {
        match camera.world_to_screen(world) {
            Some(screen) => println!(
                "{} -> pixel ({:.1}, {:.1}), depth {:.4}, visible: {}",
                world,
                screen.x,
                screen.y,
                screen.z,
                frustum.contains_point(world)
            ),
            None => println!("{} -> no screen position (on the camera plane)", world),
        }
    }

    // ===== SCREEN → WORLD =====

    let center = base.size() * 0.5;
    for depth in [1.0, 10.0, 100.0] {
        let focal_distance = camera.pick_distance_offset(depth);
        match camera.screen_to_world(center, focal_distance)? {
            Some(world) => println!("Screen center at depth {} -> {}", depth, world),
            None => println!("Screen center at depth {} -> undefined", depth),
        }
    }

    let corner = camera.screen_to_world(DVec2::ZERO, camera.pick_distance_offset(10.0))?;
    println!("Bottom-left corner at depth 10 -> {:?}", corner);

    let off_axis = DVec3::new(4.0, 1.0, 15.0);
    if let Some(screen) = camera.world_to_screen(off_axis) {
        let depth = camera.view_depth(off_axis);
        let back = camera.screen_to_world(screen.truncate(), camera.pick_distance_offset(depth))?;
        println!("{} picked back at view depth {:.3} -> {:?}", off_axis, depth, back);
    }

    // ===== FOV RESCALING =====

    for (width, height) in [(1024.0, 768.0), (2560.0, 1080.0), (1080.0, 1920.0)] {
        let current = Viewport::new(width, height)?;
        let rescaled = fov::rescale_fov(camera.lens().fov_degrees(), &base, &current)?;
        println!(
            "{}x{} (aspect {:.3}): vertical FOV {:.2}°",
            width,
            height,
            fov::aspect(width, height)?,
            rescaled
        );
    }

    // Rejected parameters are logged and returned as errors
    if let Err(error) = LensParameters::new(60.0, 5.0, 1.0) {
        println!("Rejected lens: {}", error);
    }

    Ok(())
}
