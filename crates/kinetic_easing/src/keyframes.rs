//! Keyframe curves
//!
//! Piecewise interpolation across an ordered list of (time, value) anchors,
//! each segment optionally shaped by its own easing. The curve behaves as an
//! easing function over [0, 1] and anchors its boundary values for
//! out-of-range input.

use smallvec::SmallVec;

use crate::easing::Easing;
use crate::error::EasingError;

/// A fixed (time, value) anchor in a keyframe curve
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    /// Time position (0.0 to 1.0)
    pub time: f64,
    /// Value at this keyframe
    pub value: f64,
    /// Easing applied to the segment leaving this keyframe; linear if `None`
    pub easing: Option<Easing>,
}

impl Keyframe {
    pub const fn new(time: f64, value: f64) -> Self {
        Self {
            time,
            value,
            easing: None,
        }
    }

    pub const fn with_easing(time: f64, value: f64, easing: Easing) -> Self {
        Self {
            time,
            value,
            easing: Some(easing),
        }
    }
}

/// A validated, ordered sequence of keyframes
///
/// The frame list is untrusted caller input, so every invariant is checked at
/// construction: at least two frames, all times within [0, 1], and times
/// strictly ascending. Evaluation cannot fail after that.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeCurve {
    frames: SmallVec<[Keyframe; 8]>,
}

impl KeyframeCurve {
    pub fn new(frames: impl IntoIterator<Item = Keyframe>) -> Result<Self, EasingError> {
        let frames: SmallVec<[Keyframe; 8]> = frames.into_iter().collect();

        if frames.len() < 2 {
            return Err(EasingError::TooFewKeyframes(frames.len()));
        }
        for (index, frame) in frames.iter().enumerate() {
            if !(0.0..=1.0).contains(&frame.time) {
                return Err(EasingError::KeyframeOutOfRange {
                    index,
                    time: frame.time,
                });
            }
            if index > 0 {
                let previous = frames[index - 1].time;
                if frame.time <= previous {
                    return Err(EasingError::NonMonotonicKeyframes {
                        index,
                        time: frame.time,
                        previous,
                    });
                }
            }
        }

        Ok(Self { frames })
    }

    /// Evaluate the curve at normalized time `t`
    pub fn ease(&self, t: f64) -> f64 {
        let first = self.frames[0];
        let last = self.frames[self.frames.len() - 1];
        if t <= first.time {
            return first.value;
        }
        if t >= last.time {
            return last.value;
        }

        for pair in self.frames.windows(2) {
            let (current, next) = (pair[0], pair[1]);
            if t >= current.time && t <= next.time {
                let mut s = (t - current.time) / (next.time - current.time);
                if let Some(easing) = current.easing {
                    s = easing.ease(s);
                }
                return current.value + (next.value - current.value) * s;
            }
        }

        last.value
    }

    pub fn frames(&self) -> &[Keyframe] {
        &self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> KeyframeCurve {
        KeyframeCurve::new([
            Keyframe::new(0.0, 10.0),
            Keyframe::new(0.5, 20.0),
            Keyframe::new(1.0, 40.0),
        ])
        .unwrap()
    }

    #[test]
    fn boundaries_anchor_first_and_last_values() {
        let curve = ramp();
        assert_eq!(curve.ease(0.0), 10.0);
        assert_eq!(curve.ease(1.0), 40.0);
        // Out of range clamps to the anchors
        assert_eq!(curve.ease(-0.25), 10.0);
        assert_eq!(curve.ease(1.25), 40.0);
    }

    #[test]
    fn segments_interpolate_linearly_by_default() {
        let curve = ramp();
        assert!((curve.ease(0.25) - 15.0).abs() < 1e-9);
        assert!((curve.ease(0.75) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn segment_easing_shapes_the_local_fraction() {
        let curve = KeyframeCurve::new([
            Keyframe::with_easing(0.0, 0.0, Easing::QuadIn),
            Keyframe::new(1.0, 100.0),
        ])
        .unwrap();
        // quad_in(0.5) = 0.25
        assert!((curve.ease(0.5) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_short_lists() {
        assert_eq!(
            KeyframeCurve::new([]),
            Err(EasingError::TooFewKeyframes(0))
        );
        assert_eq!(
            KeyframeCurve::new([Keyframe::new(0.0, 1.0)]),
            Err(EasingError::TooFewKeyframes(1))
        );
    }

    #[test]
    fn rejects_descending_and_duplicate_times() {
        let descending = KeyframeCurve::new([Keyframe::new(0.8, 1.0), Keyframe::new(0.2, 2.0)]);
        assert!(matches!(
            descending,
            Err(EasingError::NonMonotonicKeyframes { index: 1, .. })
        ));

        let duplicate = KeyframeCurve::new([Keyframe::new(0.5, 1.0), Keyframe::new(0.5, 2.0)]);
        assert!(matches!(
            duplicate,
            Err(EasingError::NonMonotonicKeyframes { index: 1, .. })
        ));
    }

    #[test]
    fn rejects_times_outside_unit_window() {
        let out = KeyframeCurve::new([Keyframe::new(-0.1, 0.0), Keyframe::new(1.0, 1.0)]);
        assert!(matches!(
            out,
            Err(EasingError::KeyframeOutOfRange { index: 0, .. })
        ));

        let out = KeyframeCurve::new([Keyframe::new(0.0, 0.0), Keyframe::new(1.1, 1.0)]);
        assert!(matches!(
            out,
            Err(EasingError::KeyframeOutOfRange { index: 1, .. })
        ));
    }
}
