//! Closed-form easing functions
//!
//! Each named shape comes in an `In`, `Out`, and `Both` (symmetric in/out)
//! variant. All functions map 0.0 → 0.0 and 1.0 → 1.0 exactly; `Back` and
//! `Elastic` overshoot the [0,1] range mid-curve by design of the shape.

use std::f64::consts::PI;

/// Overshoot constant for the back family.
const C1: f64 = 1.70158;
/// Back-both overshoot, scaled for the symmetric variant.
const C2: f64 = C1 * 1.525;
/// Back in/out cubic coefficient.
const C3: f64 = C1 + 1.0;
/// Elastic period for the one-sided variants.
const C4: f64 = 2.0 * PI / 3.0;
/// Elastic period for the symmetric variant.
const C5: f64 = 2.0 * PI / 4.5;

/// A named easing function
///
/// Pure and deterministic over `[0, 1]`; inputs outside that range do not
/// panic but the result is unspecified.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    QuadIn,
    QuadOut,
    QuadBoth,
    CubicIn,
    CubicOut,
    CubicBoth,
    QuartIn,
    QuartOut,
    QuartBoth,
    QuintIn,
    QuintOut,
    QuintBoth,
    SineIn,
    SineOut,
    SineBoth,
    CircIn,
    CircOut,
    CircBoth,
    ExpoIn,
    ExpoOut,
    ExpoBoth,
    ElasticIn,
    ElasticOut,
    ElasticBoth,
    BackIn,
    BackOut,
    BackBoth,
    BounceIn,
    BounceOut,
    BounceBoth,
}

impl Easing {
    /// Every catalog entry, for tooling and demo enumeration.
    pub const ALL: [Easing; 31] = [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadBoth,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicBoth,
        Easing::QuartIn,
        Easing::QuartOut,
        Easing::QuartBoth,
        Easing::QuintIn,
        Easing::QuintOut,
        Easing::QuintBoth,
        Easing::SineIn,
        Easing::SineOut,
        Easing::SineBoth,
        Easing::CircIn,
        Easing::CircOut,
        Easing::CircBoth,
        Easing::ExpoIn,
        Easing::ExpoOut,
        Easing::ExpoBoth,
        Easing::ElasticIn,
        Easing::ElasticOut,
        Easing::ElasticBoth,
        Easing::BackIn,
        Easing::BackOut,
        Easing::BackBoth,
        Easing::BounceIn,
        Easing::BounceOut,
        Easing::BounceBoth,
    ];

    /// Stable catalog name
    pub fn name(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::QuadIn => "quad_in",
            Easing::QuadOut => "quad_out",
            Easing::QuadBoth => "quad_both",
            Easing::CubicIn => "cubic_in",
            Easing::CubicOut => "cubic_out",
            Easing::CubicBoth => "cubic_both",
            Easing::QuartIn => "quart_in",
            Easing::QuartOut => "quart_out",
            Easing::QuartBoth => "quart_both",
            Easing::QuintIn => "quint_in",
            Easing::QuintOut => "quint_out",
            Easing::QuintBoth => "quint_both",
            Easing::SineIn => "sine_in",
            Easing::SineOut => "sine_out",
            Easing::SineBoth => "sine_both",
            Easing::CircIn => "circ_in",
            Easing::CircOut => "circ_out",
            Easing::CircBoth => "circ_both",
            Easing::ExpoIn => "expo_in",
            Easing::ExpoOut => "expo_out",
            Easing::ExpoBoth => "expo_both",
            Easing::ElasticIn => "elastic_in",
            Easing::ElasticOut => "elastic_out",
            Easing::ElasticBoth => "elastic_both",
            Easing::BackIn => "back_in",
            Easing::BackOut => "back_out",
            Easing::BackBoth => "back_both",
            Easing::BounceIn => "bounce_in",
            Easing::BounceOut => "bounce_out",
            Easing::BounceBoth => "bounce_both",
        }
    }

    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn ease(&self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::QuadIn => pow_in(t, 2),
            Easing::QuadOut => pow_out(t, 2),
            Easing::QuadBoth => pow_both(t, 2),
            Easing::CubicIn => pow_in(t, 3),
            Easing::CubicOut => pow_out(t, 3),
            Easing::CubicBoth => pow_both(t, 3),
            Easing::QuartIn => pow_in(t, 4),
            Easing::QuartOut => pow_out(t, 4),
            Easing::QuartBoth => pow_both(t, 4),
            Easing::QuintIn => pow_in(t, 5),
            Easing::QuintOut => pow_out(t, 5),
            Easing::QuintBoth => pow_both(t, 5),
            Easing::SineIn => 1.0 - (t * PI / 2.0).cos(),
            Easing::SineOut => (t * PI / 2.0).sin(),
            Easing::SineBoth => -((PI * t).cos() - 1.0) / 2.0,
            Easing::CircIn => 1.0 - (1.0 - t * t).sqrt(),
            Easing::CircOut => (1.0 - (t - 1.0) * (t - 1.0)).sqrt(),
            Easing::CircBoth => {
                if t < 0.5 {
                    (1.0 - (1.0 - (2.0 * t).powi(2)).sqrt()) / 2.0
                } else {
                    ((1.0 - (-2.0 * t + 2.0).powi(2)).sqrt() + 1.0) / 2.0
                }
            }
            // Expo and elastic formulas are discontinuous at the endpoints:
            // 2^(10*0 - 10) is 1/1024, not 0. Return the boundary exactly.
            Easing::ExpoIn => {
                if t == 0.0 {
                    t
                } else {
                    2f64.powf(10.0 * t - 10.0)
                }
            }
            Easing::ExpoOut => {
                if t == 1.0 {
                    t
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
            Easing::ExpoBoth => {
                if t == 0.0 || t == 1.0 {
                    t
                } else if t < 0.5 {
                    2f64.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2f64.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
            Easing::ElasticIn => {
                if t == 0.0 || t == 1.0 {
                    t
                } else {
                    -(2f64.powf(10.0 * t - 10.0)) * ((t * 10.0 - 10.75) * C4).sin()
                }
            }
            Easing::ElasticOut => {
                if t == 0.0 || t == 1.0 {
                    t
                } else {
                    2f64.powf(-10.0 * t) * ((t * 10.0 - 0.75) * C4).sin() + 1.0
                }
            }
            Easing::ElasticBoth => {
                if t == 0.0 || t == 1.0 {
                    t
                } else if t < 0.5 {
                    -(2f64.powf(20.0 * t - 10.0) * ((20.0 * t - 11.125) * C5).sin()) / 2.0
                } else {
                    2f64.powf(-20.0 * t + 10.0) * ((20.0 * t - 11.125) * C5).sin() / 2.0 + 1.0
                }
            }
            Easing::BackIn => C3 * t * t * t - C1 * t * t,
            Easing::BackOut => 1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0).powi(2),
            Easing::BackBoth => {
                if t < 0.5 {
                    (2.0 * t).powi(2) * ((C2 + 1.0) * 2.0 * t - C2) / 2.0
                } else {
                    ((2.0 * t - 2.0).powi(2) * ((C2 + 1.0) * (t * 2.0 - 2.0) + C2) + 2.0) / 2.0
                }
            }
            Easing::BounceIn => 1.0 - bounce_out(1.0 - t),
            Easing::BounceOut => bounce_out(t),
            Easing::BounceBoth => {
                if t < 0.5 {
                    (1.0 - bounce_out(1.0 - 2.0 * t)) / 2.0
                } else {
                    (1.0 + bounce_out(2.0 * t - 1.0)) / 2.0
                }
            }
        }
    }
}

fn pow_in(t: f64, n: i32) -> f64 {
    t.powi(n)
}

fn pow_out(t: f64, n: i32) -> f64 {
    1.0 - (1.0 - t).powi(n)
}

fn pow_both(t: f64, n: i32) -> f64 {
    if t < 0.5 {
        (2.0 * t).powi(n) / 2.0
    } else {
        1.0 - (2.0 * (1.0 - t)).powi(n) / 2.0
    }
}

/// Four-segment bouncing parabola, the basis of the bounce family.
fn bounce_out(t: f64) -> f64 {
    const N1: f64 = 7.5625;
    const D1: f64 = 2.75;

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}
