//! Bezier easing curves
//!
//! Parametric curves with endpoints pinned at (0,0) and (1,1), used as easing
//! shapes. The curve is parametric in `t`, so answering "what is y for this
//! x" requires inverting x(t) numerically: Newton-Raphson with a bounded
//! bisection fallback for the cubic, plain bisection for the quadratic.
//!
//! The inversion assumes x(t) is monotonic non-decreasing over [0,1], which
//! every standard easing curve satisfies. Pathological control points yield
//! approximate results, never a panic or an unbounded loop.

use std::str::FromStr;

use crate::error::EasingError;

/// Cubic bezier easing defined by its two free control points.
///
/// P0 = (0,0) and P3 = (1,1) are implicit; `(x1, y1)` and `(x2, y2)` are the
/// inner control points, in the same order css `cubic-bezier(x1, y1, x2, y2)`
/// uses. Immutable once constructed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Evaluate the eased value for progress `x` (0.0 to 1.0)
    pub fn ease(&self, x: f64) -> f64 {
        // Pinned endpoints never need a solve
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }

        // Newton-Raphson on x(p) - x; the identity curve makes x itself a
        // decent starting point. Flat spots hand over to bisection below.
        let mut p = x;
        for _ in 0..8 {
            let err = bezier_sample(p, self.x1, self.x2) - x;
            if err.abs() < 1e-7 {
                return bezier_sample(p, self.y1, self.y2);
            }
            let slope = bezier_slope(p, self.x1, self.x2);
            if slope.abs() < 1e-7 {
                break;
            }
            p -= err / slope;
        }

        // Monotonic x(t) keeps the bracket valid, so 20 halvings bound the
        // worst case.
        let mut lo = 0.0_f64;
        let mut hi = 1.0_f64;
        p = x;
        for _ in 0..20 {
            let val = bezier_sample(p, self.x1, self.x2);
            if (val - x).abs() < 1e-7 {
                break;
            }
            if val < x {
                lo = p;
            } else {
                hi = p;
            }
            p = (lo + hi) * 0.5;
        }

        bezier_sample(p, self.y1, self.y2)
    }
}

/// Parses the `"x1,y1,x2,y2"` format used by cubic-bezier design tools.
impl FromStr for CubicBezier {
    type Err = EasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || EasingError::MalformedBezier(s.to_owned());

        let mut coords = [0.0_f64; 4];
        let mut parts = s.split(',');
        for slot in &mut coords {
            let part = parts.next().ok_or_else(malformed)?;
            *slot = part
                .trim()
                .trim_matches('\u{feff}')
                .parse()
                .map_err(|_| malformed())?;
        }
        if parts.next().is_some() {
            return Err(malformed());
        }

        let [x1, y1, x2, y2] = coords;
        Ok(Self::new(x1, y1, x2, y2))
    }
}

/// Named control-point presets, cubic approximations of the classic easing
/// shapes. Control points match the widely used easings.net table.
impl CubicBezier {
    pub const SINE_IN: Self = Self::new(0.12, 0.0, 0.39, 0.0);
    pub const SINE_OUT: Self = Self::new(0.61, 1.0, 0.88, 1.0);
    pub const SINE_BOTH: Self = Self::new(0.37, 0.0, 0.63, 1.0);

    pub const QUAD_IN: Self = Self::new(0.11, 0.0, 0.5, 0.0);
    pub const QUAD_OUT: Self = Self::new(0.5, 1.0, 0.89, 1.0);
    pub const QUAD_BOTH: Self = Self::new(0.45, 0.0, 0.55, 1.0);

    pub const CUBIC_IN: Self = Self::new(0.32, 0.0, 0.67, 0.0);
    pub const CUBIC_OUT: Self = Self::new(0.33, 1.0, 0.68, 1.0);
    pub const CUBIC_BOTH: Self = Self::new(0.65, 0.0, 0.35, 1.0);

    pub const QUART_IN: Self = Self::new(0.5, 0.0, 0.75, 0.0);
    pub const QUART_OUT: Self = Self::new(0.25, 1.0, 0.5, 1.0);
    pub const QUART_BOTH: Self = Self::new(0.76, 0.0, 0.24, 1.0);

    pub const QUINT_IN: Self = Self::new(0.64, 0.0, 0.78, 0.0);
    pub const QUINT_OUT: Self = Self::new(0.22, 1.0, 0.36, 1.0);
    pub const QUINT_BOTH: Self = Self::new(0.83, 0.0, 0.17, 1.0);

    pub const EXPO_IN: Self = Self::new(0.7, 0.0, 0.84, 0.0);
    pub const EXPO_OUT: Self = Self::new(0.16, 1.0, 0.3, 1.0);
    pub const EXPO_BOTH: Self = Self::new(0.87, 0.0, 0.13, 1.0);

    pub const CIRC_IN: Self = Self::new(0.55, 0.0, 1.0, 0.45);
    pub const CIRC_OUT: Self = Self::new(0.0, 0.55, 0.45, 1.0);
    pub const CIRC_BOTH: Self = Self::new(0.85, 0.0, 0.15, 1.0);

    pub const BACK_IN: Self = Self::new(0.36, 0.0, 0.66, -0.56);
    pub const BACK_OUT: Self = Self::new(0.34, 1.56, 0.64, 1.0);
    pub const BACK_BOTH: Self = Self::new(0.68, -0.6, 0.32, 1.6);

    /// The preset table keyed by catalog name, for enumeration.
    pub const PRESETS: &'static [(&'static str, CubicBezier)] = &[
        ("sine_in", Self::SINE_IN),
        ("sine_out", Self::SINE_OUT),
        ("sine_both", Self::SINE_BOTH),
        ("quad_in", Self::QUAD_IN),
        ("quad_out", Self::QUAD_OUT),
        ("quad_both", Self::QUAD_BOTH),
        ("cubic_in", Self::CUBIC_IN),
        ("cubic_out", Self::CUBIC_OUT),
        ("cubic_both", Self::CUBIC_BOTH),
        ("quart_in", Self::QUART_IN),
        ("quart_out", Self::QUART_OUT),
        ("quart_both", Self::QUART_BOTH),
        ("quint_in", Self::QUINT_IN),
        ("quint_out", Self::QUINT_OUT),
        ("quint_both", Self::QUINT_BOTH),
        ("expo_in", Self::EXPO_IN),
        ("expo_out", Self::EXPO_OUT),
        ("expo_both", Self::EXPO_BOTH),
        ("circ_in", Self::CIRC_IN),
        ("circ_out", Self::CIRC_OUT),
        ("circ_both", Self::CIRC_BOTH),
        ("back_in", Self::BACK_IN),
        ("back_out", Self::BACK_OUT),
        ("back_both", Self::BACK_BOTH),
    ];
}

impl Default for CubicBezier {
    /// The identity curve: control points on the diagonal.
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }
}

/// Evaluate one coordinate of the cubic at parameter t, Horner form of
/// B(t) = 3(1-t)²t·p1 + 3(1-t)t²·p2 + t³.
#[inline]
fn bezier_sample(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    ((a * t + b) * t + c) * t
}

/// Derivative of the cubic coordinate: B'(t).
#[inline]
fn bezier_slope(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    (3.0 * a * t + 2.0 * b) * t + c
}

/// Quadratic bezier easing with a single free control point.
///
/// P0 = (0,0) and P2 = (1,1) are implicit. Rarely sharper than a cubic but
/// cheaper to invert.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadBezier {
    pub cx: f64,
    pub cy: f64,
}

impl QuadBezier {
    pub const fn new(cx: f64, cy: f64) -> Self {
        Self { cx, cy }
    }

    /// Evaluate the eased value for progress `x` (0.0 to 1.0)
    pub fn ease(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }

        let t = self.invert_x(x);
        quad_sample(t, self.cy)
    }

    /// Bisect [0,1] for the parameter whose x-coordinate matches `x`.
    /// 20 iterations narrow the interval below 1e-6, well inside the 1e-4
    /// tolerance the eased output needs.
    fn invert_x(&self, x: f64) -> f64 {
        let mut lo = 0.0_f64;
        let mut hi = 1.0_f64;

        for _ in 0..20 {
            let mid = (lo + hi) * 0.5;
            let current = quad_sample(mid, self.cx);
            if (current - x).abs() < 1e-4 {
                return mid;
            }
            if current < x {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        (lo + hi) * 0.5
    }
}

/// One coordinate of the quadratic Bernstein form:
/// B(t) = 2(1-t)t·p + t².
#[inline]
fn quad_sample(t: f64, p: f64) -> f64 {
    2.0 * (1.0 - t) * t * p + t * t
}
