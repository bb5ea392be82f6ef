// Host-side tests for the scene camera helpers.

#![allow(dead_code)]
mod camera {
    include!("../src/camera.rs");
}
mod constants {
    include!("../src/constants.rs");
}

use camera::visible_half_extent;
use constants::*;

#[test]
fn square_view_at_unit_distance() {
    let half = visible_half_extent(90.0, 1.0, 1.0);
    assert!((half.x - 1.0).abs() < 1e-5);
    assert!((half.y - 1.0).abs() < 1e-5);
}

#[test]
fn extent_scales_with_aspect_and_distance() {
    let a = visible_half_extent(CAMERA_FOV_DEG, CAMERA_Z, 1.0);
    let wide = visible_half_extent(CAMERA_FOV_DEG, CAMERA_Z, 2.0);
    let far = visible_half_extent(CAMERA_FOV_DEG, CAMERA_Z * 2.0, 1.0);
    assert!((wide.x - 2.0 * a.x).abs() < 1e-5);
    assert_eq!(wide.y, a.y);
    assert!((far.y - 2.0 * a.y).abs() < 1e-5);
}

#[test]
fn plane_row_fits_a_wide_view() {
    // outer plane edge at spacing + half width
    let half = visible_half_extent(CAMERA_FOV_DEG, CAMERA_Z, 2.0);
    let row_half_width = PLANE_SPACING + PLANE_SIZE[0] * 0.5;
    assert!(row_half_width < half.x);
    assert!(PLANE_SIZE[1] * 0.5 < half.y);
}
