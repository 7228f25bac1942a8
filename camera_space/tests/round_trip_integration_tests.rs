//! Integration tests for the screen ↔ world pipeline
//!
//! Exercises the public API the way a picking/placement caller would.
//!
//! Run with: cargo test --test round_trip_integration_tests

use camera_space::camspace::camera::{Camera, LensParameters, Pose, Viewport};
use camera_space::camspace::transform::{fov, screen_to_world, view_matrix, world_to_screen};
use camera_space::glam::{DMat4, DQuat, DVec2, DVec3, EulerRot};

fn reference_camera() -> Camera {
    Camera::new(
        Pose::at(DVec3::new(0.0, 0.0, -10.0)).unwrap(),
        LensParameters::new(60.0, 0.3, 1000.0).unwrap(),
        Viewport::new(1920.0, 1080.0).unwrap(),
    )
}

// ============================================================================
// ROUND TRIP
// ============================================================================

#[test]
fn test_integration_reference_round_trip() {
    let camera = reference_camera();
    let world = DVec3::ZERO;

    let screen = world_to_screen(world, camera.pose(), camera.lens(), camera.viewport()).unwrap();
    let focal_distance = camera.pose().position().distance(world) - camera.lens().near();
    let back = screen_to_world(
        screen.truncate(),
        camera.pose(),
        camera.lens(),
        camera.viewport(),
        focal_distance,
    )
    .unwrap()
    .unwrap();

    assert!(back.abs_diff_eq(world, 1e-3));
}

#[test]
fn test_integration_round_trip_grid_rotated_camera() {
    let pose = Pose::new(
        DVec3::new(12.0, 4.0, -30.0),
        DQuat::from_euler(EulerRot::YXZ, -0.4, 0.2, 0.0),
    )
    .unwrap();
    let camera = Camera::new(pose, LensParameters::new(50.0, 0.5, 2000.0).unwrap(), Viewport::new(2560.0, 1440.0).unwrap());
    let view = view_matrix(&pose);

    for x in [0.0, 640.0, 1280.0, 1920.0, 2560.0] {
        for y in [0.0, 720.0, 1440.0] {
            for depth in [1.0, 37.5, 900.0] {
                let screen = DVec2::new(x, y);
                let world = camera
                    .screen_to_world(screen, camera.pick_distance_offset(depth))
                    .unwrap()
                    .unwrap();

                // Lands at the requested view depth
                let local = view.transform_point3(world);
                assert!((-local.z - depth).abs() < 1e-6 * depth.max(1.0));

                // And projects back onto the same pixel
                let projected = camera.world_to_screen(world).unwrap();
                assert!(projected.truncate().abs_diff_eq(screen, 1e-6));
            }
        }
    }
}

// ============================================================================
// FOV
// ============================================================================

#[test]
fn test_integration_rescaled_fov_keeps_screen_edges() {
    // A point on the right edge at 1920×1080 stays on the right edge at
    // 1024×768 when the vertical FOV is rescaled.
    let base = Viewport::new(1920.0, 1080.0).unwrap();
    let current = Viewport::new(1024.0, 768.0).unwrap();
    let pose = Pose::at(DVec3::new(0.0, 0.0, -10.0)).unwrap();

    let base_lens = LensParameters::new(60.0, 0.3, 1000.0).unwrap();
    let rescaled_lens = LensParameters::new(fov::rescale_fov(60.0, &base, &current).unwrap(), 0.3, 1000.0).unwrap();

    let h = fov::horizontal_fov(60.0, base.aspect()).unwrap();
    let edge = DVec3::new(10.0 * (h.to_radians() * 0.5).tan(), 0.0, 0.0);

    let on_base = world_to_screen(edge, &pose, &base_lens, &base).unwrap();
    let on_current = world_to_screen(edge, &pose, &rescaled_lens, &current).unwrap();

    assert!((on_base.x - 1920.0).abs() < 1e-6);
    assert!((on_current.x - 1024.0).abs() < 1e-6);
}

// ============================================================================
// MATRICES
// ============================================================================

#[test]
fn test_integration_view_projection_inverse() {
    let camera = reference_camera();
    let vp = camera.view_projection_matrix();
    assert!((vp.inverse() * vp).abs_diff_eq(DMat4::IDENTITY, 1e-9));
}

#[test]
fn test_integration_frustum_agrees_with_projection() {
    let camera = reference_camera();
    let frustum = camera.frustum();

    for world in [
        DVec3::ZERO,
        DVec3::new(3.0, -2.0, 40.0),
        DVec3::new(-50.0, 10.0, 200.0),
        DVec3::new(300.0, 0.0, 200.0),
        DVec3::new(0.0, 0.0, -20.0),
    ] {
        let screen = camera.world_to_screen(world).unwrap();
        let on_screen = (0.0..=1920.0).contains(&screen.x)
            && (0.0..=1080.0).contains(&screen.y)
            && (-1.0..=1.0).contains(&screen.z);
        assert_eq!(frustum.contains_point(world), on_screen, "{}", world);
    }
}
