use glam::{DMat4, DVec3, DVec4};
use crate::camera::{Camera, LensParameters, Pose, Viewport};
use super::*;

/// Camera at z = -10 looking toward +Z, 60° vertical FOV, 16:9, clip 0.3..1000.
fn reference_frustum() -> Frustum {
    Camera::new(
        Pose::at(DVec3::new(0.0, 0.0, -10.0)).unwrap(),
        LensParameters::default(),
        Viewport::default(),
    )
    .frustum()
}

// ============================================================================
// Frustum::from_view_projection
// ============================================================================

#[test]
fn test_frustum_from_identity_matrix() {
    let frustum = Frustum::from_view_projection(&DMat4::IDENTITY);

    // Identity VP → NDC cube: x,y,z in [-1, 1]
    for plane in &frustum.planes {
        assert!((plane.truncate().length() - 1.0).abs() < 1e-12);
    }
    assert!(frustum.contains_point(DVec3::ZERO));
    assert!(frustum.contains_point(DVec3::new(1.0, -1.0, 1.0)));
    assert!(!frustum.contains_point(DVec3::new(1.01, 0.0, 0.0)));
}

#[test]
fn test_planes_match_clip_space_bounds() {
    // Skewed, non-symmetric matrix so every row contributes
    let vp = DMat4::from_cols(
        DVec4::new(1.2, 0.3, -0.1, 0.05),
        DVec4::new(-0.2, 1.7, 0.4, -0.1),
        DVec4::new(0.1, -0.3, -1.1, -1.0),
        DVec4::new(0.5, 0.2, -0.4, 3.0),
    );
    let frustum = Frustum::from_view_projection(&vp);

    let points = [
        DVec3::ZERO,
        DVec3::new(2.0, -1.0, 4.0),
        DVec3::new(-3.0, 5.0, -2.0),
        DVec3::new(0.5, 0.5, 10.0),
    ];
    for point in points {
        let clip = vp * point.extend(1.0);
        let bounds = [
            clip.w + clip.x,
            clip.w - clip.x,
            clip.w + clip.y,
            clip.w - clip.y,
            clip.w + clip.z,
            clip.w - clip.z,
        ];
        for (index, bound) in bounds.iter().enumerate() {
            let length = frustum.planes[index].truncate().length();
            assert!((length - 1.0).abs() < 1e-12);
            let distance = frustum.signed_distance(index, point);
            assert_eq!(distance > 0.0, *bound > 0.0, "plane {} at {}", index, point);
        }
    }
}

#[test]
fn test_frustum_planes_are_normalized() {
    for plane in &reference_frustum().planes {
        assert!((plane.truncate().length() - 1.0).abs() < 1e-9);
    }
}

#[test]
fn test_near_plane_faces_view_direction() {
    let frustum = reference_frustum();
    let normal = frustum.planes[PLANE_NEAR].truncate();
    assert!(normal.abs_diff_eq(DVec3::Z, 1e-9));

    let normal = frustum.planes[PLANE_FAR].truncate();
    assert!(normal.abs_diff_eq(DVec3::NEG_Z, 1e-9));
}

// ============================================================================
// contains_point
// ============================================================================

#[test]
fn test_point_on_view_axis_is_inside() {
    assert!(reference_frustum().contains_point(DVec3::ZERO));
}

#[test]
fn test_point_behind_camera_is_outside() {
    assert!(!reference_frustum().contains_point(DVec3::new(0.0, 0.0, -20.0)));
}

#[test]
fn test_near_and_far_limits() {
    let frustum = reference_frustum();
    assert!(!frustum.contains_point(DVec3::new(0.0, 0.0, -9.8)));
    assert!(frustum.contains_point(DVec3::new(0.0, 0.0, -9.6)));
    assert!(frustum.contains_point(DVec3::new(0.0, 0.0, 980.0)));
    assert!(!frustum.contains_point(DVec3::new(0.0, 0.0, 1000.0)));
}

#[test]
fn test_side_limits() {
    // Half width at depth 10 is 10 * tan(30°) * 16/9 ≈ 10.26
    let frustum = reference_frustum();
    assert!(frustum.contains_point(DVec3::new(10.0, 0.0, 0.0)));
    assert!(!frustum.contains_point(DVec3::new(10.5, 0.0, 0.0)));
    assert!(!frustum.contains_point(DVec3::new(-10.5, 0.0, 0.0)));

    // Half height at depth 10 is 10 * tan(30°) ≈ 5.77
    assert!(frustum.contains_point(DVec3::new(0.0, 5.5, 0.0)));
    assert!(!frustum.contains_point(DVec3::new(0.0, 6.0, 0.0)));
}

#[test]
fn test_signed_distance_to_near_plane() {
    let frustum = reference_frustum();
    // Near plane sits at z = -10 + 0.3
    let d = frustum.signed_distance(PLANE_NEAR, DVec3::new(0.0, 0.0, 0.0));
    assert!((d - 9.7).abs() < 1e-6);
}

// ============================================================================
// Spheres
// ============================================================================

#[test]
fn test_sphere_inside() {
    let frustum = reference_frustum();
    assert_eq!(frustum.classify_sphere(DVec3::ZERO, 1.0), FrustumTest::Inside);
    assert!(frustum.intersects_sphere(DVec3::ZERO, 1.0));
}

#[test]
fn test_sphere_partial() {
    let frustum = reference_frustum();
    assert_eq!(frustum.classify_sphere(DVec3::new(10.0, 0.0, 0.0), 2.0), FrustumTest::Partial);
}

#[test]
fn test_sphere_outside() {
    let frustum = reference_frustum();
    assert_eq!(frustum.classify_sphere(DVec3::new(0.0, 0.0, -30.0), 5.0), FrustumTest::Outside);
    assert!(!frustum.intersects_sphere(DVec3::new(100.0, 0.0, 0.0), 1.0));
}
