//! Tween configuration
//!
//! An immutable description of how to reach a target: duration, optional
//! start delay, and the shaping curve. Passed by value to
//! [`Animation::animate`](crate::Animation::animate); the animation keeps its
//! own copy, so one `Tween` can arm many animations.

use kinetic_easing::Curve;

use crate::error::AnimationError;

/// How an animation should run: duration, delay, and curve
///
/// Validation happens here, at configuration time - a constructed `Tween` is
/// always usable and ticking never re-checks it.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    duration: f64,
    delay: f64,
    curve: Curve,
}

impl Default for Tween {
    /// One linear second, no delay
    fn default() -> Self {
        Self {
            duration: 1.0,
            delay: 0.0,
            curve: Curve::default(),
        }
    }
}

impl Tween {
    /// A linear tween over `duration` seconds with no delay
    pub fn new(duration: f64) -> Result<Self, AnimationError> {
        if !(duration > 0.0 && duration.is_finite()) {
            return Err(AnimationError::NonPositiveDuration(duration));
        }
        Ok(Self {
            duration,
            delay: 0.0,
            curve: Curve::default(),
        })
    }

    /// Delay the start by `delay` seconds
    pub fn with_delay(self, delay: f64) -> Result<Self, AnimationError> {
        if !(delay >= 0.0 && delay.is_finite()) {
            return Err(AnimationError::NegativeDelay(delay));
        }
        Ok(Self { delay, ..self })
    }

    /// Shape progress with `curve` instead of linear
    pub fn with_curve(self, curve: impl Into<Curve>) -> Self {
        Self {
            curve: curve.into(),
            ..self
        }
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn delay(&self) -> f64 {
        self.delay
    }

    pub fn curve(&self) -> &Curve {
        &self.curve
    }
}
