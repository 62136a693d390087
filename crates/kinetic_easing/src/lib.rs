//! Kinetic easing curves
//!
//! Pure curve evaluation for animations: a catalog of closed-form easing
//! functions, cubic/quadratic bezier easing with numeric x→t inversion, and
//! piecewise keyframe curves.
//!
//! Everything here is stateless and cheap to copy or share; the companion
//! `kinetic_animation` crate owns the time accounting.

pub mod bezier;
pub mod curve;
pub mod easing;
pub mod error;
pub mod keyframes;

pub use bezier::{CubicBezier, QuadBezier};
pub use curve::Curve;
pub use easing::Easing;
pub use error::EasingError;
pub use keyframes::{Keyframe, KeyframeCurve};
