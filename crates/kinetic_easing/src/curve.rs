//! Polymorphic curve dispatch
//!
//! One value type covering every way an animation can be shaped: a named
//! easing, a cubic or quadratic bezier, a keyframe curve, or a chain feeding
//! the output of one curve into the next.

use crate::bezier::{CubicBezier, QuadBezier};
use crate::easing::Easing;
use crate::keyframes::KeyframeCurve;

/// A shaping function from normalized progress to eased progress
#[derive(Clone, Debug, PartialEq)]
pub enum Curve {
    /// A catalog easing
    Easing(Easing),
    Cubic(CubicBezier),
    Quad(QuadBezier),
    Keyframes(KeyframeCurve),
    /// Applies each curve in sequence, output of one feeding the next
    Chain(Vec<Curve>),
}

impl Curve {
    /// Compose curves left to right
    pub fn chain(curves: impl IntoIterator<Item = Curve>) -> Self {
        Curve::Chain(curves.into_iter().collect())
    }

    /// Evaluate the curve at normalized time `t`
    pub fn evaluate(&self, t: f64) -> f64 {
        match self {
            Curve::Easing(easing) => easing.ease(t),
            Curve::Cubic(bezier) => bezier.ease(t),
            Curve::Quad(bezier) => bezier.ease(t),
            Curve::Keyframes(keyframes) => keyframes.ease(t),
            Curve::Chain(curves) => curves.iter().fold(t, |acc, curve| curve.evaluate(acc)),
        }
    }
}

impl Default for Curve {
    /// Linear, matching `Easing::default`
    fn default() -> Self {
        Curve::Easing(Easing::Linear)
    }
}

impl From<Easing> for Curve {
    fn from(easing: Easing) -> Self {
        Curve::Easing(easing)
    }
}

impl From<CubicBezier> for Curve {
    fn from(bezier: CubicBezier) -> Self {
        Curve::Cubic(bezier)
    }
}

impl From<QuadBezier> for Curve {
    fn from(bezier: QuadBezier) -> Self {
        Curve::Quad(bezier)
    }
}

impl From<KeyframeCurve> for Curve {
    fn from(keyframes: KeyframeCurve) -> Self {
        Curve::Keyframes(keyframes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyframes::Keyframe;

    #[test]
    fn default_is_linear() {
        let curve = Curve::default();
        assert_eq!(curve.evaluate(0.37), 0.37);
    }

    #[test]
    fn dispatches_to_each_payload() {
        assert_eq!(Curve::from(Easing::QuadIn).evaluate(0.5), 0.25);
        assert!((Curve::from(CubicBezier::default()).evaluate(0.5) - 0.5).abs() < 1e-3);

        let keyframes = KeyframeCurve::new([Keyframe::new(0.0, 0.0), Keyframe::new(1.0, 2.0)])
            .expect("valid frames");
        assert!((Curve::from(keyframes).evaluate(0.5) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn chain_feeds_output_forward() {
        // quad_in(quad_in(t)) == t^4
        let chained = Curve::chain([Easing::QuadIn.into(), Easing::QuadIn.into()]);
        assert!((chained.evaluate(0.5) - 0.0625).abs() < 1e-9);

        // An empty chain is the identity
        assert_eq!(Curve::chain([]).evaluate(0.42), 0.42);
    }
}
