//! Fixed-capacity pool of ripple waves.
//!
//! Waves are pre-allocated once and recycled in round-robin order: each
//! pointer sample that travels far enough claims the next slot, whether or
//! not that slot is still fading. Every frame the active waves spin, grow
//! toward their target scale and fade until they drop below the opacity
//! epsilon.

use crate::config::RippleConfig;
use crate::error::RippleError;
use crate::lifecycle::Subscription;
use crate::pointer::PointerSample;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

/// One reusable ripple marker.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WaveInstance {
    /// Window-centered position, +y up.
    pub position: Vec2,
    pub rotation: f32,
    pub scale: f32,
    pub opacity: f32,
    pub active: bool,
}

pub struct RipplePool {
    waves: Box<[WaveInstance]>,
    cursor: usize,
    config: RippleConfig,
    subscription: Option<Subscription>,
}

impl RipplePool {
    pub fn new(config: RippleConfig) -> Result<Self, RippleError> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(config.rotation_seed);
        let waves = (0..config.capacity)
            .map(|_| WaveInstance {
                position: Vec2::ZERO,
                rotation: rng.gen::<f32>() * TAU,
                scale: config.initial_scale,
                opacity: 0.0,
                active: false,
            })
            .collect::<Vec<_>>()
            .into_boxed_slice();
        log::debug!(
            "[ripple] pool ready: capacity={} trigger={:.2}",
            config.capacity,
            config.trigger_distance
        );
        Ok(Self {
            waves,
            cursor: 0,
            config,
            subscription: None,
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.waves.len()
    }

    pub fn config(&self) -> &RippleConfig {
        &self.config
    }

    /// Spawn a wave at `current` when the pointer moved at least
    /// `trigger_distance` since `previous`.
    pub fn on_pointer_sample(&mut self, current: Vec2, previous: Vec2) {
        self.on_sample(PointerSample { current, previous });
    }

    /// Same as [`Self::on_pointer_sample`], taking a tracker sample.
    pub fn on_sample(&mut self, sample: PointerSample) {
        if sample.displacement() < self.config.trigger_distance {
            return;
        }
        let current = sample.current;
        let index = self.cursor;
        let wave = &mut self.waves[index];
        wave.position = current;
        wave.scale = self.config.initial_scale;
        wave.opacity = self.config.initial_opacity;
        wave.active = true;
        self.cursor = (index + 1) % self.waves.len();
        log::trace!(
            "[ripple] wave {} at ({:.1},{:.1})",
            index,
            current.x,
            current.y
        );
    }

    /// Step every active wave by one frame.
    pub fn advance_frame(&mut self) {
        let decay = self.config.decay;
        let epsilon = self.config.opacity_epsilon;
        for wave in self.waves.iter_mut().filter(|w| w.active) {
            wave.rotation += decay.rotation_step;
            wave.opacity *= decay.opacity_factor;
            wave.scale =
                decay.scale_blend * wave.scale + (1.0 - decay.scale_blend) * decay.scale_target;
            if wave.opacity < epsilon {
                wave.active = false;
            }
        }
    }

    /// All waves in pool order, active or not.
    #[inline]
    pub fn snapshot(&self) -> &[WaveInstance] {
        &self.waves
    }

    pub fn active_waves(&self) -> impl Iterator<Item = &WaveInstance> + '_ {
        self.waves.iter().filter(|w| w.active)
    }

    pub fn active_count(&self) -> usize {
        self.active_waves().count()
    }

    /// Hand over the pointer-source subscription so that disposing the pool
    /// detaches it. Replacing an existing subscription disposes the old one.
    pub fn attach(&mut self, subscription: Subscription) {
        if let Some(mut old) = self.subscription.replace(subscription) {
            old.dispose();
        }
    }

    pub fn is_attached(&self) -> bool {
        self.subscription
            .as_ref()
            .is_some_and(Subscription::is_attached)
    }

    /// Release the pointer subscription. Safe to call any number of times.
    pub fn dispose(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.dispose();
            log::debug!("[ripple] pool disposed");
        }
    }
}

impl Drop for RipplePool {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for RipplePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RipplePool")
            .field("capacity", &self.capacity())
            .field("active", &self.active_count())
            .field("attached", &self.is_attached())
            .finish()
    }
}
