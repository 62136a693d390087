//! Animation runtime errors

use thiserror::Error;

/// Errors raised by animation configuration and ticking.
///
/// These are programmer errors, raised synchronously at the call that
/// introduced the bad value - never deferred to evaluation time and never
/// retried.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum AnimationError {
    /// Durations must be positive and finite
    #[error("duration must be positive, got {0}")]
    NonPositiveDuration(f64),

    /// Delays must be non-negative and finite
    #[error("delay must be non-negative, got {0}")]
    NegativeDelay(f64),

    /// A delta-time tick must represent forward progress
    #[error("delta time must be positive, got {0}")]
    NonPositiveDelta(f64),
}
