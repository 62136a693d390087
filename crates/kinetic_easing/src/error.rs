//! Curve construction errors

use thiserror::Error;

/// Errors raised while constructing a curve from untrusted input.
///
/// All validation happens at construction time; evaluation never fails.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EasingError {
    /// Bezier control-point string did not parse
    #[error("could not parse {0:?} as a bezier, expected \"x1,y1,x2,y2\"")]
    MalformedBezier(String),

    /// A keyframe curve needs at least two frames to interpolate between
    #[error("keyframe curve needs at least 2 frames, got {0}")]
    TooFewKeyframes(usize),

    /// Keyframe time outside the normalized [0,1] window
    #[error("keyframe {index} has time {time} outside [0, 1]")]
    KeyframeOutOfRange { index: usize, time: f64 },

    /// Keyframe times must be strictly ascending
    #[error("keyframe {index} has time {time} <= previous time {previous}")]
    NonMonotonicKeyframes {
        index: usize,
        time: f64,
        previous: f64,
    },
}
