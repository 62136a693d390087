//! The animation state machine
//!
//! Owns `(from, to, elapsed, tween)` and turns delta-time ticks into a
//! monotonic progress fraction: `progress = min(elapsed / duration, 1)` is
//! shaped by the tween's curve, then the value is the linear interpolation of
//! the two endpoints weighted by the eased fraction.
//!
//! Lifecycle: `Idle → Delaying → Running → Finished`, where `Finished` is
//! terminal until an explicit [`Animation::animate`] or [`Animation::reset`].

use std::fmt;

use tracing::debug;

use crate::error::AnimationError;
use crate::tween::Tween;

/// Where an animation is in its lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Constructed or reset; never armed
    #[default]
    Idle,
    /// Armed, waiting out the start delay; the value does not move
    Delaying,
    /// Interpolating toward the target
    Running,
    /// Reached the target or was interrupted; ticks are no-ops
    Finished,
}

/// A scalar value animated toward a target
///
/// Single-owner by contract: all mutation must come from one logical owner at
/// a time. Independent instances own disjoint state and may be advanced in
/// parallel without coordination.
pub struct Animation {
    from: f64,
    to: f64,
    current: f64,
    elapsed: f64,
    remaining_delay: f64,
    tween: Tween,
    phase: Phase,
    on_update: Option<Box<dyn FnMut(f64)>>,
    on_complete: Option<Box<dyn FnMut()>>,
}

impl Animation {
    /// An idle animation resting at `initial`
    pub fn new(initial: f64) -> Self {
        Self {
            from: initial,
            to: initial,
            current: initial,
            elapsed: 0.0,
            remaining_delay: 0.0,
            tween: Tween::default(),
            phase: Phase::Idle,
            on_update: None,
            on_complete: None,
        }
    }

    /// (Re)arm the animation toward `target`
    ///
    /// Captures the current value as the new start point and restarts the
    /// clock. Always re-arms, even mid-flight; use [`Self::animate_safe`] to
    /// suppress redundant restarts.
    pub fn animate(&mut self, target: f64, tween: Tween) {
        self.from = self.current;
        self.to = target;
        self.elapsed = 0.0;
        self.remaining_delay = tween.delay();
        self.tween = tween;

        debug!(
            from = self.from,
            to = self.to,
            duration = self.tween.duration(),
            delay = self.remaining_delay,
            "animation armed"
        );

        if self.remaining_delay > 0.0 {
            self.phase = Phase::Delaying;
        } else {
            self.phase = Phase::Running;
            // Initial notification carries the t=0 interpolant, which is the
            // start value, not the target.
            self.notify_update();
        }
    }

    /// Arm toward `target` unless an equivalent animation is already in
    /// flight
    ///
    /// While alive, a request whose target equals the start value, the
    /// in-flight target, or the current value is a no-op; this keeps
    /// "request the same target every frame" callers from restarting the
    /// animation endlessly. Returns whether the animation was re-armed.
    pub fn animate_safe(&mut self, target: f64, tween: Tween) -> bool {
        if self.is_alive()
            && (target == self.from || target == self.to || target == self.current)
        {
            debug!(
                requested = target,
                current = self.current,
                "animate ignored: target already in flight"
            );
            return false;
        }
        self.animate(target, tween);
        true
    }

    /// Advance by `dt` seconds
    ///
    /// Returns whether the animation is still alive after the step. `Idle`
    /// and `Finished` animations ignore ticks. Fails if `dt` is not a
    /// positive finite number - a delta tick must represent forward progress.
    pub fn update(&mut self, dt: f64) -> Result<bool, AnimationError> {
        if !(dt > 0.0 && dt.is_finite()) {
            return Err(AnimationError::NonPositiveDelta(dt));
        }

        match self.phase {
            Phase::Idle | Phase::Finished => Ok(false),
            Phase::Delaying => {
                self.remaining_delay -= dt;
                if self.remaining_delay <= 0.0 {
                    // Whatever the tick did not spend on the delay counts
                    // toward running time.
                    let spill = -self.remaining_delay;
                    self.remaining_delay = 0.0;
                    self.phase = Phase::Running;
                    self.notify_update();
                    if spill > 0.0 {
                        self.advance(spill);
                    }
                }
                Ok(self.is_alive())
            }
            Phase::Running => {
                self.advance(dt);
                Ok(self.is_alive())
            }
        }
    }

    /// Force the animation to finish where it stands
    ///
    /// Transitions straight to `Finished` and fires the completion
    /// notification once, without snapping to the target - unlike a natural
    /// finish, `value()` keeps the last computed point.
    pub fn interrupt(&mut self) {
        if self.is_alive() {
            self.phase = Phase::Finished;
            debug!(value = self.current, to = self.to, "animation interrupted");
            self.notify_complete();
        }
    }

    /// Return to `Idle` at the start value, clearing all progress
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.current = self.from;
        self.elapsed = 0.0;
        self.remaining_delay = self.tween.delay();
    }

    /// Called with the current value on every tick that moves it
    pub fn on_update(&mut self, callback: impl FnMut(f64) + 'static) {
        self.on_update = Some(Box::new(callback));
    }

    /// Called exactly once per arm when the animation finishes, naturally or
    /// by interruption
    pub fn on_complete(&mut self, callback: impl FnMut() + 'static) {
        self.on_complete = Some(Box::new(callback));
    }

    /// Current interpolated value
    pub fn value(&self) -> f64 {
        self.current
    }

    /// Value the running animation started from
    pub fn from_value(&self) -> f64 {
        self.from
    }

    /// Target of the running animation
    pub fn to_value(&self) -> f64 {
        self.to
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Normalized progress in [0, 1]; zero while idle or delaying
    pub fn progress(&self) -> f64 {
        match self.phase {
            Phase::Idle | Phase::Delaying => 0.0,
            Phase::Running | Phase::Finished => (self.elapsed / self.tween.duration()).min(1.0),
        }
    }

    /// Armed and not yet finished (delaying counts as alive)
    pub fn is_alive(&self) -> bool {
        matches!(self.phase, Phase::Delaying | Phase::Running)
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    fn advance(&mut self, dt: f64) {
        self.elapsed += dt;
        let progress = (self.elapsed / self.tween.duration()).min(1.0);

        if progress >= 1.0 {
            // Snap exactly; eased endpoints are only float-close to 1.0
            self.current = self.to;
            self.phase = Phase::Finished;
            self.notify_update();
            debug!(to = self.to, "animation finished");
            self.notify_complete();
        } else {
            let eased = self.tween.curve().evaluate(progress);
            self.current = self.from + (self.to - self.from) * eased;
            self.notify_update();
        }
    }

    fn notify_update(&mut self) {
        let value = self.current;
        if let Some(on_update) = self.on_update.as_mut() {
            on_update(value);
        }
    }

    fn notify_complete(&mut self) {
        if let Some(on_complete) = self.on_complete.as_mut() {
            on_complete();
        }
    }
}

impl fmt::Debug for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animation")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("current", &self.current)
            .field("elapsed", &self.elapsed)
            .field("remaining_delay", &self.remaining_delay)
            .field("tween", &self.tween)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(duration: f64) -> Tween {
        Tween::new(duration).unwrap()
    }

    #[test]
    fn starts_idle_at_initial_value() {
        let animation = Animation::new(42.0);
        assert_eq!(animation.phase(), Phase::Idle);
        assert_eq!(animation.value(), 42.0);
        assert!(!animation.is_alive());
        assert!(!animation.is_finished());
    }

    #[test]
    fn idle_ticks_are_no_ops() {
        let mut animation = Animation::new(1.0);
        assert_eq!(animation.update(0.5), Ok(false));
        assert_eq!(animation.value(), 1.0);
    }

    #[test]
    fn rejects_non_positive_delta() {
        let mut animation = Animation::new(0.0);
        animation.animate(10.0, linear(1.0));
        assert_eq!(
            animation.update(0.0),
            Err(AnimationError::NonPositiveDelta(0.0))
        );
        assert_eq!(
            animation.update(-0.1),
            Err(AnimationError::NonPositiveDelta(-0.1))
        );
        assert!(animation.update(f64::NAN).is_err());
    }

    #[test]
    fn linear_interpolation_hits_midpoint_and_target() {
        let mut animation = Animation::new(0.0);
        animation.animate(100.0, linear(1.0));

        animation.update(0.5).unwrap();
        assert!((animation.value() - 50.0).abs() < 1e-3);
        assert!(animation.is_alive());

        // Cumulative elapsed well past the duration: exact snap
        animation.update(1.0).unwrap();
        assert_eq!(animation.value(), 100.0);
        assert!(animation.is_finished());
    }

    #[test]
    fn finished_ticks_are_no_ops() {
        let mut animation = Animation::new(0.0);
        animation.animate(10.0, linear(0.5));
        animation.update(1.0).unwrap();
        assert!(animation.is_finished());

        assert_eq!(animation.update(0.25), Ok(false));
        assert_eq!(animation.value(), 10.0);
    }

    #[test]
    fn rearm_captures_current_value_as_start() {
        let mut animation = Animation::new(0.0);
        animation.animate(100.0, linear(1.0));
        animation.update(0.5).unwrap();

        animation.animate(0.0, linear(1.0));
        assert!((animation.from_value() - 50.0).abs() < 1e-3);
        assert_eq!(animation.to_value(), 0.0);
        assert_eq!(animation.progress(), 0.0);
    }

    #[test]
    fn safe_mode_suppresses_redundant_restart() {
        let mut animation = Animation::new(0.0);
        animation.animate(100.0, linear(1.0));
        animation.update(0.25).unwrap();
        let mid_value = animation.value();
        let mid_from = animation.from_value();

        // Same target while alive: untouched
        assert!(!animation.animate_safe(100.0, linear(1.0)));
        assert_eq!(animation.from_value(), mid_from);
        assert_eq!(animation.value(), mid_value);
        assert!(animation.is_alive());

        // A genuinely new target re-arms
        assert!(animation.animate_safe(-50.0, linear(1.0)));
        assert_eq!(animation.to_value(), -50.0);
    }

    #[test]
    fn safe_mode_rearms_after_finish() {
        let mut animation = Animation::new(0.0);
        animation.animate(100.0, linear(0.5));
        animation.update(1.0).unwrap();
        assert!(animation.is_finished());

        assert!(animation.animate_safe(100.0, linear(0.5)));
        assert!(animation.is_alive());
    }

    #[test]
    fn delay_pins_the_value() {
        let mut animation = Animation::new(0.0);
        animation.animate(100.0, linear(1.0).with_delay(0.5).unwrap());
        assert_eq!(animation.phase(), Phase::Delaying);

        animation.update(0.3).unwrap();
        assert_eq!(animation.value(), 0.0);
        assert_eq!(animation.phase(), Phase::Delaying);
        assert_eq!(animation.progress(), 0.0);

        // Exactly exhausting the delay starts running with zero progress
        animation.update(0.2).unwrap();
        assert_eq!(animation.phase(), Phase::Running);
        assert_eq!(animation.value(), 0.0);
        assert_eq!(animation.progress(), 0.0);
    }

    #[test]
    fn delay_overshoot_spills_into_running_time() {
        let mut animation = Animation::new(0.0);
        animation.animate(100.0, linear(1.0).with_delay(0.5).unwrap());

        // 0.7 tick: 0.5 spent on the delay, 0.2 on the animation
        animation.update(0.7).unwrap();
        assert_eq!(animation.phase(), Phase::Running);
        assert!((animation.value() - 20.0).abs() < 1e-3);
    }

    #[test]
    fn interrupt_finishes_without_snapping() {
        let mut animation = Animation::new(0.0);
        animation.animate(100.0, linear(1.0));
        animation.update(0.25).unwrap();
        let before = animation.value();

        animation.interrupt();
        assert!(animation.is_finished());
        assert_eq!(animation.value(), before);

        // Subsequent ticks and interrupts do nothing
        assert_eq!(animation.update(0.5), Ok(false));
        animation.interrupt();
        assert_eq!(animation.value(), before);
    }

    #[test]
    fn reset_returns_to_idle_at_start_value() {
        let mut animation = Animation::new(5.0);
        animation.animate(100.0, linear(1.0));
        animation.update(0.5).unwrap();

        animation.reset();
        assert_eq!(animation.phase(), Phase::Idle);
        assert_eq!(animation.value(), 5.0);
        assert_eq!(animation.progress(), 0.0);
    }
}
