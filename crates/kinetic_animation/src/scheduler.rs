//! Animation scheduler
//!
//! The tick driver for the common case: a bag of animations advanced once
//! per frame. Whether frames come from a dedicated loop thread, a render
//! hook, or a timer callback makes no difference to the animations - the
//! scheduler just turns "now" into a delta and feeds it to everything alive.

use slotmap::{new_key_type, SlotMap};
use std::time::Instant;
use tracing::trace;

use crate::animation::Animation;

new_key_type! {
    pub struct AnimationId;
}

/// Longest delta a single tick may apply, in seconds. A stalled driver
/// (debugger pause, suspended laptop) otherwise lands one huge step that
/// skips the whole animation.
pub const MAX_STEP: f64 = 0.1;

/// Ticks a collection of animations from one clock
pub struct AnimationScheduler {
    animations: SlotMap<AnimationId, Animation>,
    last_tick: Instant,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            animations: SlotMap::with_key(),
            last_tick: Instant::now(),
        }
    }

    pub fn add(&mut self, animation: Animation) -> AnimationId {
        self.animations.insert(animation)
    }

    pub fn get(&self, id: AnimationId) -> Option<&Animation> {
        self.animations.get(id)
    }

    pub fn get_mut(&mut self, id: AnimationId) -> Option<&mut Animation> {
        self.animations.get_mut(id)
    }

    pub fn remove(&mut self, id: AnimationId) -> Option<Animation> {
        self.animations.remove(id)
    }

    /// Tick all animations with the wall-clock delta since the last tick
    pub fn tick(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_tick).as_secs_f64();
        self.last_tick = now;
        self.tick_with(dt);
    }

    /// Tick all animations with an externally supplied delta, for render
    /// loops and frame hooks that already track their own time
    pub fn tick_with(&mut self, dt: f64) {
        // f64::min would map a NaN delta onto MAX_STEP; drop it instead
        if !dt.is_finite() {
            return;
        }
        let dt = dt.min(MAX_STEP);
        if dt <= 0.0 {
            return;
        }
        trace!(dt, animations = self.animations.len(), "scheduler tick");

        for (_, animation) in self.animations.iter_mut() {
            if animation.is_alive() {
                // dt is positive here, so update cannot fail
                let _ = animation.update(dt);
            }
        }
    }

    /// Whether any animation still wants ticks
    pub fn has_active_animations(&self) -> bool {
        self.animations.iter().any(|(_, a)| a.is_alive())
    }

    pub fn animations_iter(&self) -> impl Iterator<Item = (AnimationId, &Animation)> {
        self.animations.iter()
    }

    pub fn animations_iter_mut(&mut self) -> impl Iterator<Item = (AnimationId, &mut Animation)> {
        self.animations.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}
