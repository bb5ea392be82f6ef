// Host-side tests for the ripple pool: slot recycling, threshold gating,
// decay and disposal.

use glam::Vec2;
use ripple_core::*;
use std::cell::Cell;
use std::rc::Rc;

fn pool_with(capacity: usize, trigger: f32) -> RipplePool {
    RipplePool::new(
        RippleConfig::default()
            .with_capacity(capacity)
            .with_trigger_distance(trigger),
    )
    .unwrap()
}

// Pointer jump that always clears the threshold, landing at `x`.
fn spawn_at(pool: &mut RipplePool, x: f32) {
    pool.on_pointer_sample(Vec2::new(x, 0.0), Vec2::new(x - 1000.0, 0.0));
}

#[test]
fn snapshot_length_is_capacity_under_any_input() {
    let mut pool = pool_with(7, 2.0);
    assert_eq!(pool.snapshot().len(), 7);
    let mut prev = Vec2::ZERO;
    for i in 0..500 {
        let cur = Vec2::new((i as f32 * 1.7).sin() * 50.0, (i as f32 * 0.3).cos() * 50.0);
        pool.on_pointer_sample(cur, prev);
        if i % 3 == 0 {
            pool.advance_frame();
        }
        prev = cur;
        assert_eq!(pool.snapshot().len(), 7);
        assert!(pool.active_count() <= pool.capacity());
    }
}

#[test]
fn round_robin_reuses_oldest_slot_regardless_of_state() {
    let capacity = 4;
    for k in 0..capacity {
        let mut pool = pool_with(capacity, 4.0);
        for i in 0..(capacity + k) {
            spawn_at(&mut pool, i as f32);
        }
        // All slots are still active; the next spawn must land on slot k.
        assert!(pool.snapshot().iter().all(|w| w.active));
        spawn_at(&mut pool, 999.0);
        for (i, w) in pool.snapshot().iter().enumerate() {
            if i == k {
                assert_eq!(w.position, Vec2::new(999.0, 0.0));
            } else {
                assert_ne!(w.position, Vec2::new(999.0, 0.0));
            }
        }
    }
}

#[test]
fn inactive_slots_are_not_skipped() {
    let mut pool = pool_with(3, 4.0);
    spawn_at(&mut pool, 1.0);
    // Let slot 0 fade out completely.
    for _ in 0..1000 {
        pool.advance_frame();
    }
    assert_eq!(pool.active_count(), 0);
    spawn_at(&mut pool, 2.0);
    assert!(!pool.snapshot()[0].active);
    assert!(pool.snapshot()[1].active);
    assert_eq!(pool.snapshot()[1].position, Vec2::new(2.0, 0.0));
}

#[test]
fn zero_displacement_never_spawns() {
    let mut pool = pool_with(5, 4.0);
    for i in 0..20 {
        let p = Vec2::new(i as f32 * 10.0, -3.0);
        pool.on_pointer_sample(p, p);
    }
    assert_eq!(pool.active_count(), 0);
}

#[test]
fn smallest_valid_trigger_ignores_a_still_pointer() {
    let mut pool = pool_with(3, f32::MIN_POSITIVE);
    let p = Vec2::new(7.0, 7.0);
    pool.on_pointer_sample(p, p);
    assert_eq!(pool.active_count(), 0);
    assert!(RipplePool::new(
        RippleConfig::default()
            .with_capacity(3)
            .with_trigger_distance(0.0)
    )
    .is_err());
}

#[test]
fn threshold_is_inclusive() {
    let mut pool = pool_with(5, 4.0);
    pool.on_pointer_sample(Vec2::new(13.9, 0.0), Vec2::new(10.0, 0.0));
    assert_eq!(pool.active_count(), 0);
    pool.on_pointer_sample(Vec2::new(14.0, 0.0), Vec2::new(10.0, 0.0));
    assert_eq!(pool.active_count(), 1);
    // 3-4-5 triangle: distance exactly 5 with a threshold of 5.
    let mut pool = pool_with(5, 5.0);
    pool.on_pointer_sample(Vec2::new(3.0, 4.0), Vec2::ZERO);
    assert!(pool.snapshot()[0].active);
}

#[test]
fn activation_resets_transients_but_keeps_rotation() {
    let cfg = RippleConfig::default()
        .with_capacity(1)
        .with_trigger_distance(1.0);
    let mut pool = RipplePool::new(cfg.clone()).unwrap();
    let r0 = pool.snapshot()[0].rotation;
    spawn_at(&mut pool, 5.0);
    for _ in 0..10 {
        pool.advance_frame();
    }
    let mid = pool.snapshot()[0];
    assert!(mid.opacity < cfg.initial_opacity);
    assert!(mid.scale > cfg.initial_scale);

    spawn_at(&mut pool, 6.0);
    let w = pool.snapshot()[0];
    assert!(w.active);
    assert_eq!(w.position, Vec2::new(6.0, 0.0));
    assert_eq!(w.opacity, cfg.initial_opacity);
    assert_eq!(w.scale, cfg.initial_scale);
    assert_eq!(w.rotation, mid.rotation);
    assert!(w.rotation > r0);
}

#[test]
fn opacity_strictly_decreases_then_stays_off() {
    let mut pool = pool_with(2, 4.0);
    spawn_at(&mut pool, 0.0);
    let eps = pool.config().opacity_epsilon;
    let mut last = pool.snapshot()[0].opacity;
    let mut frames = 0;
    while pool.snapshot()[0].active {
        pool.advance_frame();
        let o = pool.snapshot()[0].opacity;
        assert!(o < last, "opacity did not decrease at frame {frames}");
        last = o;
        frames += 1;
        assert!(frames < 10_000);
    }
    assert!(last < eps);

    let frozen = pool.snapshot().to_vec();
    for _ in 0..50 {
        pool.advance_frame();
    }
    assert_eq!(pool.snapshot(), frozen.as_slice());
}

#[test]
fn scale_approaches_target() {
    let decay = DecayParams {
        rotation_step: 0.02,
        opacity_factor: 0.999,
        scale_blend: 0.9,
        scale_target: 3.0,
    };
    let mut pool = RipplePool::new(
        RippleConfig::default()
            .with_capacity(1)
            .with_decay(decay)
            .with_initial(0.5, 1.0),
    )
    .unwrap();
    spawn_at(&mut pool, 0.0);
    pool.advance_frame();
    let s1 = pool.snapshot()[0].scale;
    assert!((s1 - (0.9 * 0.5 + 0.1 * 3.0)).abs() < 1e-6);
    for _ in 0..200 {
        pool.advance_frame();
    }
    assert!((pool.snapshot()[0].scale - 3.0).abs() < 1e-3);
}

#[test]
fn scenario_capacity_three() {
    let initial_opacity = 0.5;
    let cfg = RippleConfig::default()
        .with_capacity(3)
        .with_trigger_distance(4.0)
        .with_initial(0.2, initial_opacity)
        .with_opacity_epsilon(initial_opacity * 0.002);
    let mut pool = RipplePool::new(cfg).unwrap();
    assert_eq!(pool.active_count(), 0);

    pool.on_pointer_sample(Vec2::new(0.0, 0.0), Vec2::new(0.0, 0.0));
    assert_eq!(pool.active_count(), 0);

    pool.on_pointer_sample(Vec2::new(10.0, 0.0), Vec2::new(0.0, 0.0));
    assert!(pool.snapshot()[0].active);
    assert_eq!(pool.snapshot()[0].position, Vec2::new(10.0, 0.0));

    pool.on_pointer_sample(Vec2::new(10.0, 0.0), Vec2::new(10.0, 0.0));
    assert_eq!(pool.active_count(), 1);

    pool.on_pointer_sample(Vec2::new(20.0, 0.0), Vec2::new(10.0, 0.0));
    assert!(pool.snapshot()[1].active);
    assert_eq!(pool.snapshot()[1].position, Vec2::new(20.0, 0.0));
    assert!(!pool.snapshot()[2].active);

    for _ in 0..50 {
        pool.advance_frame();
    }
    let mut expected = initial_opacity;
    for _ in 0..50 {
        expected *= 0.97;
    }
    let w0 = pool.snapshot()[0];
    assert!(w0.active);
    assert_eq!(w0.opacity, expected);
    assert!((w0.opacity / initial_opacity - 0.218).abs() < 1e-3);
}

struct CountingDetach(Rc<Cell<u32>>);

impl Detach for CountingDetach {
    fn detach(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn dispose_twice_detaches_once() {
    let calls = Rc::new(Cell::new(0));
    let mut pool = pool_with(3, 4.0);
    pool.attach(Subscription::new(CountingDetach(calls.clone())));
    assert!(pool.is_attached());
    pool.dispose();
    pool.dispose();
    assert_eq!(calls.get(), 1);
    assert!(!pool.is_attached());
    drop(pool);
    assert_eq!(calls.get(), 1);
}

#[test]
fn dispose_without_subscription_is_noop() {
    let mut pool = pool_with(3, 4.0);
    pool.dispose();
    pool.dispose();
    spawn_at(&mut pool, 1.0);
    pool.advance_frame();
    assert_eq!(pool.active_count(), 1);
}

#[test]
fn dropping_pool_detaches() {
    let calls = Rc::new(Cell::new(0));
    {
        let mut pool = pool_with(3, 4.0);
        pool.attach(Subscription::new(CountingDetach(calls.clone())));
    }
    assert_eq!(calls.get(), 1);
}

#[test]
fn reattach_releases_previous_subscription() {
    let first = Rc::new(Cell::new(0));
    let second = Rc::new(Cell::new(0));
    let mut pool = pool_with(3, 4.0);
    pool.attach(Subscription::new(CountingDetach(first.clone())));
    pool.attach(Subscription::new(CountingDetach(second.clone())));
    assert_eq!(first.get(), 1);
    assert_eq!(second.get(), 0);
    pool.dispose();
    assert_eq!(second.get(), 1);
}
