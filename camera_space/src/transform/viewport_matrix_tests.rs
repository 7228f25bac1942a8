use glam::{DMat4, DVec3, DVec4};
use crate::camera::{LensParameters, Viewport};
use super::*;

#[test]
fn test_viewport_matrix_layout() {
    let viewport = Viewport::new(1920.0, 1080.0).unwrap();
    let m = viewport_matrix(&viewport, 0.3, 1000.0);

    assert_eq!(m.x_axis, DVec4::new(960.0, 0.0, 0.0, 0.0));
    assert_eq!(m.y_axis, DVec4::new(0.0, 540.0, 0.0, 0.0));
    assert!(m.z_axis.abs_diff_eq(DVec4::new(0.0, 0.0, 499.85, 0.0), 1e-9));
    assert!(m.w_axis.abs_diff_eq(DVec4::new(960.0, 540.0, 500.15, 1.0), 1e-9));
}

#[test]
fn test_ndc_corners_map_to_screen_corners() {
    let viewport = Viewport::new(800.0, 600.0).unwrap();
    let m = viewport_matrix(&viewport, 1.0, 11.0);

    let low = m.transform_point3(DVec3::new(-1.0, -1.0, -1.0));
    let high = m.transform_point3(DVec3::new(1.0, 1.0, 1.0));
    let center = m.transform_point3(DVec3::ZERO);

    assert_eq!(low, DVec3::new(0.0, 0.0, 1.0));
    assert_eq!(high, DVec3::new(800.0, 600.0, 11.0));
    assert_eq!(center, DVec3::new(400.0, 300.0, 6.0));
}

#[test]
fn test_for_lens_uses_clip_distances() {
    let viewport = Viewport::default();
    let lens = LensParameters::new(60.0, 2.0, 50.0).unwrap();

    assert_eq!(
        viewport_matrix_for_lens(&viewport, &lens),
        viewport_matrix(&viewport, 2.0, 50.0)
    );
}

// ============================================================================
// Matrix primitives
// ============================================================================

#[test]
fn test_inverse_of_identity() {
    assert_eq!(DMat4::IDENTITY.inverse(), DMat4::IDENTITY);
}

#[test]
fn test_viewport_inverse_round_trip() {
    let m = viewport_matrix(&Viewport::new(1024.0, 768.0).unwrap(), 0.3, 1000.0);
    assert!((m * m.inverse()).abs_diff_eq(DMat4::IDENTITY, 1e-12));
    assert!(m.inverse().inverse().abs_diff_eq(m, 1e-9));
}

#[test]
fn test_multiply_is_associative() {
    let viewport = Viewport::new(1024.0, 768.0).unwrap();
    let a = viewport_matrix(&viewport, 0.3, 1000.0);
    let b = DMat4::from_rotation_y(0.4) * DMat4::from_translation(DVec3::new(1.0, 2.0, 3.0));
    let c = DMat4::from_scale(DVec3::new(2.0, 0.5, -1.0));

    assert!(((a * b) * c).abs_diff_eq(a * (b * c), 1e-9));
}
