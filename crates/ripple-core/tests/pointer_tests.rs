// Host-side tests for pointer tracking and the distortion controls.

use glam::Vec2;
use ripple_core::*;

#[test]
fn centered_coordinates_flip_y() {
    let vp = Viewport::new(800.0, 600.0);
    assert_eq!(vp.centered(400.0, 300.0), Vec2::ZERO);
    assert_eq!(vp.centered(0.0, 0.0), Vec2::new(-400.0, 300.0));
    assert_eq!(vp.centered(800.0, 600.0), Vec2::new(400.0, -300.0));
    assert_eq!(vp.half_extent(), Vec2::new(400.0, 300.0));
}

#[test]
fn degenerate_viewport_keeps_positive_extent() {
    let vp = Viewport::new(0.0, 0.0);
    assert!(vp.half_extent().x > 0.0 && vp.half_extent().y > 0.0);
    assert!(vp.aspect().is_finite());
}

#[test]
fn sample_rolls_previous_forward() {
    let vp = Viewport::new(100.0, 100.0);
    let mut t = PointerTracker::default();
    t.move_to_client(60.0, 50.0, &vp);
    let s = t.sample();
    assert_eq!(s.current, Vec2::new(10.0, 0.0));
    assert_eq!(s.previous, Vec2::ZERO);
    assert!((s.displacement() - 10.0).abs() < 1e-6);

    // No movement since the last frame.
    let s = t.sample();
    assert_eq!(s.current, s.previous);
    assert_eq!(s.displacement(), 0.0);
}

#[test]
fn several_moves_per_frame_collapse_to_latest() {
    let mut t = PointerTracker::default();
    t.move_to(Vec2::new(1.0, 1.0));
    t.move_to(Vec2::new(2.0, 2.0));
    t.move_to(Vec2::new(3.0, 4.0));
    let s = t.sample();
    assert_eq!(s.current, Vec2::new(3.0, 4.0));
    assert!((s.displacement() - 5.0).abs() < 1e-6);
}

#[test]
fn tracker_drives_pool_once_per_frame() {
    let mut pool = RipplePool::new(RippleConfig::default().with_capacity(4)).unwrap();
    let vp = Viewport::new(200.0, 200.0);
    let mut t = PointerTracker::default();
    t.move_to_client(100.0, 100.0, &vp);
    pool.on_sample(t.sample());
    assert_eq!(pool.active_count(), 0);

    t.move_to_client(130.0, 100.0, &vp);
    pool.on_sample(t.sample());
    assert_eq!(pool.active_count(), 1);
    assert_eq!(pool.snapshot()[0].position, Vec2::new(30.0, 0.0));
}

#[test]
fn settings_clamp_and_snap() {
    let mut s = DistortionSettings::default();
    assert_eq!(s.progress(), 0.0);
    assert_eq!(s.scale(), 1.0);

    s.set_progress(0.456);
    assert!((s.progress() - 0.46).abs() < 1e-6);
    s.set_progress(3.0);
    assert_eq!(s.progress(), 1.0);
    s.nudge_progress(-2.0);
    assert_eq!(s.progress(), 0.0);

    s.set_scale(42.0);
    assert_eq!(s.scale(), 10.0);
    s.set_scale(f32::NAN);
    assert_eq!(s.scale(), 10.0);
    s.nudge_scale(-0.5);
    assert!((s.scale() - 9.5).abs() < 1e-5);
}

#[test]
fn reset_keeps_time() {
    let mut s = DistortionSettings::default();
    s.advance(1.0);
    s.set_progress(0.7);
    s.reset();
    assert_eq!(s.progress(), 0.0);
    assert!((s.time() - DISTORTION_TIME_RATE).abs() < 1e-6);
}

#[test]
fn time_ignores_negative_dt() {
    let mut s = DistortionSettings::default();
    s.advance(-5.0);
    assert_eq!(s.time(), 0.0);
    s.advance(0.5);
    assert!(s.time() > 0.0);
}

#[test]
fn zero_progress_warp_is_identity() {
    let mut s = DistortionSettings::default();
    s.advance(3.0);
    for uv in [Vec2::ZERO, Vec2::new(0.25, 0.75), Vec2::ONE, Vec2::splat(0.5)] {
        assert_eq!(s.warp_uv(uv), uv);
    }
}

#[test]
fn full_progress_collapses_v_to_center() {
    let mut s = DistortionSettings::default();
    s.set_progress(1.0);
    for uv in [Vec2::new(0.1, 0.9), Vec2::new(0.8, 0.2)] {
        let w = s.warp_uv(uv);
        assert!((w.y - 0.5).abs() < 1e-6);
        assert!(w.x >= 0.0 && w.x.is_finite());
    }
}

#[test]
fn plane_rotation_tracks_progress() {
    let mut s = DistortionSettings::default();
    assert_eq!(s.plane_rotation(), 0.0);
    s.set_progress(1.0);
    assert!((s.plane_rotation() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
}
