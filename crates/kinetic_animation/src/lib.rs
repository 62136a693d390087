//! Kinetic animation runtime
//!
//! Tick-driven interpolation of a scalar value toward a target: arm an
//! [`Animation`] with a target, a duration, and a [`Curve`], then feed it
//! time deltas from whatever drives your frames. The animation answers with
//! the current value and whether it is still alive.
//!
//! A single [`Animation`] must be mutated from one logical owner at a time;
//! independent animations share nothing and can be advanced in parallel.
//! [`AnimationScheduler`] is the batteries-included driver for the common
//! "tick everything once per frame" case.
//!
//! [`Curve`]: kinetic_easing::Curve

pub mod animation;
pub mod error;
pub mod scheduler;
pub mod tween;

pub use animation::{Animation, Phase};
pub use error::AnimationError;
pub use scheduler::{AnimationId, AnimationScheduler};
pub use tween::Tween;
