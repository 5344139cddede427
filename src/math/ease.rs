//! Easing curves.
//!
//! Every curve maps a normalized progress `t` in `[0, 1]` to an eased value.
//! Inputs are not clamped, and elastic and back curves overshoot `[0, 1]`.
//!
//! The curves exist both as free functions (`ease_in_quad`, ...) and as the
//! [`Easing`] enum that tweens carry around.

use std::f64::consts::PI;

/// Default period used by the elastic curves.
pub const DEFAULT_ELASTIC_PERIOD: f64 = 0.5;

const BACK_OVERSHOOT: f64 = 1.70158;

/// Selectable easing curve.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum Easing {
    #[default]
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuartIn,
    QuartOut,
    QuartInOut,
    QuintIn,
    QuintOut,
    QuintInOut,
    SineIn,
    SineOut,
    SineInOut,
    ExpoIn,
    ExpoOut,
    ExpoInOut,
    CircIn,
    CircOut,
    CircInOut,
    /// Elastic curve with the given period.
    ElasticIn(f64),
    ElasticOut(f64),
    ElasticInOut(f64),
    BackIn,
    BackOut,
    BackInOut,
    BounceIn,
    BounceOut,
    BounceInOut,
    Custom(fn(f64) -> f64),
}

impl Easing {
    pub const ELASTIC_IN: Easing = Easing::ElasticIn(DEFAULT_ELASTIC_PERIOD);
    pub const ELASTIC_OUT: Easing = Easing::ElasticOut(DEFAULT_ELASTIC_PERIOD);
    pub const ELASTIC_IN_OUT: Easing = Easing::ElasticInOut(DEFAULT_ELASTIC_PERIOD);

    pub fn apply(self, t: f64) -> f64 {
        match self {
            Easing::Linear => ease_linear(t),
            Easing::QuadIn => ease_in_quad(t),
            Easing::QuadOut => ease_out_quad(t),
            Easing::QuadInOut => ease_in_out_quad(t),
            Easing::CubicIn => ease_in_cubic(t),
            Easing::CubicOut => ease_out_cubic(t),
            Easing::CubicInOut => ease_in_out_cubic(t),
            Easing::QuartIn => ease_in_quart(t),
            Easing::QuartOut => ease_out_quart(t),
            Easing::QuartInOut => ease_in_out_quart(t),
            Easing::QuintIn => ease_in_quint(t),
            Easing::QuintOut => ease_out_quint(t),
            Easing::QuintInOut => ease_in_out_quint(t),
            Easing::SineIn => ease_in_sine(t),
            Easing::SineOut => ease_out_sine(t),
            Easing::SineInOut => ease_in_out_sine(t),
            Easing::ExpoIn => ease_in_expo(t),
            Easing::ExpoOut => ease_out_expo(t),
            Easing::ExpoInOut => ease_in_out_expo(t),
            Easing::CircIn => ease_in_circ(t),
            Easing::CircOut => ease_out_circ(t),
            Easing::CircInOut => ease_in_out_circ(t),
            Easing::ElasticIn(p) => ease_in_elastic_with(p, t),
            Easing::ElasticOut(p) => ease_out_elastic_with(p, t),
            Easing::ElasticInOut(p) => ease_in_out_elastic_with(p, t),
            Easing::BackIn => ease_in_back(t),
            Easing::BackOut => ease_out_back(t),
            Easing::BackInOut => ease_in_out_back(t),
            Easing::BounceIn => ease_in_bounce(t),
            Easing::BounceOut => ease_out_bounce(t),
            Easing::BounceInOut => ease_in_out_bounce(t),
            Easing::Custom(f) => f(t),
        }
    }
}

pub fn ease_linear(t: f64) -> f64 {
    t
}

// ==================== POLYNOMIAL ====================

pub fn ease_in_quad(t: f64) -> f64 {
    t * t
}

pub fn ease_out_quad(t: f64) -> f64 {
    -t * (t - 2.0)
}

pub fn ease_in_out_quad(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        let t = 2.0 * t - 1.0;
        -0.5 * (t * (t - 2.0) - 1.0)
    }
}

pub fn ease_in_cubic(t: f64) -> f64 {
    t * t * t
}

pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t - 1.0;
    t * t * t + 1.0
}

pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t * 2.0;
    if t < 1.0 {
        0.5 * t * t * t
    } else {
        let t = t - 2.0;
        0.5 * (t * t * t + 2.0)
    }
}

pub fn ease_in_quart(t: f64) -> f64 {
    t * t * t * t
}

pub fn ease_out_quart(t: f64) -> f64 {
    let t = t - 1.0;
    -(t * t * t * t - 1.0)
}

pub fn ease_in_out_quart(t: f64) -> f64 {
    let t = t * 2.0;
    if t < 1.0 {
        0.5 * t * t * t * t
    } else {
        let t = t - 2.0;
        -0.5 * (t * t * t * t - 2.0)
    }
}

pub fn ease_in_quint(t: f64) -> f64 {
    t * t * t * t * t
}

pub fn ease_out_quint(t: f64) -> f64 {
    let t = t - 1.0;
    t * t * t * t * t + 1.0
}

pub fn ease_in_out_quint(t: f64) -> f64 {
    let t = t * 2.0;
    if t < 1.0 {
        0.5 * t * t * t * t * t
    } else {
        let t = t - 2.0;
        0.5 * (t * t * t * t * t + 2.0)
    }
}

// ==================== SINE / EXPO / CIRC ====================

pub fn ease_in_sine(t: f64) -> f64 {
    -1.0 * (t * PI / 2.0).cos() + 1.0
}

pub fn ease_out_sine(t: f64) -> f64 {
    (t * PI / 2.0).sin()
}

pub fn ease_in_out_sine(t: f64) -> f64 {
    -0.5 * ((PI * t).cos() - 1.0)
}

pub fn ease_in_expo(t: f64) -> f64 {
    if t == 0.0 {
        0.0
    } else {
        2f64.powf(10.0 * (t - 1.0))
    }
}

pub fn ease_out_expo(t: f64) -> f64 {
    if t == 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * t)
    }
}

pub fn ease_in_out_expo(t: f64) -> f64 {
    if t == 0.0 {
        0.0
    } else if t == 1.0 {
        1.0
    } else if t < 0.5 {
        0.5 * 2f64.powf(20.0 * t - 10.0)
    } else {
        1.0 - 0.5 * 2f64.powf(-20.0 * t + 10.0)
    }
}

pub fn ease_in_circ(t: f64) -> f64 {
    -1.0 * ((1.0 - t * t).sqrt() - 1.0)
}

pub fn ease_out_circ(t: f64) -> f64 {
    let t = t - 1.0;
    (1.0 - t * t).sqrt()
}

pub fn ease_in_out_circ(t: f64) -> f64 {
    let t = t * 2.0;
    if t < 1.0 {
        -0.5 * ((1.0 - t * t).sqrt() - 1.0)
    } else {
        let t = t - 2.0;
        0.5 * ((1.0 - t * t).sqrt() + 1.0)
    }
}

// ==================== ELASTIC ====================

pub fn ease_in_elastic(t: f64) -> f64 {
    ease_in_elastic_with(DEFAULT_ELASTIC_PERIOD, t)
}

pub fn ease_out_elastic(t: f64) -> f64 {
    ease_out_elastic_with(DEFAULT_ELASTIC_PERIOD, t)
}

pub fn ease_in_out_elastic(t: f64) -> f64 {
    ease_in_out_elastic_with(DEFAULT_ELASTIC_PERIOD, t)
}

pub fn ease_in_elastic_with(period: f64, t: f64) -> f64 {
    let t = t - 1.0;
    -1.0 * (2f64.powf(10.0 * t) * ((t - period / 4.0) * (2.0 * PI) / period).sin())
}

pub fn ease_out_elastic_with(period: f64, t: f64) -> f64 {
    2f64.powf(-10.0 * t) * ((t - period / 4.0) * (2.0 * PI / period)).sin() + 1.0
}

pub fn ease_in_out_elastic_with(period: f64, t: f64) -> f64 {
    let t = t * 2.0;
    if t < 1.0 {
        let t = t - 1.0;
        -0.5 * (2f64.powf(10.0 * t) * ((t - period / 4.0) * 2.0 * PI / period).sin())
    } else {
        let t = t - 1.0;
        2f64.powf(-10.0 * t) * ((t - period / 4.0) * 2.0 * PI / period).sin() * 0.5 + 1.0
    }
}

// ==================== BACK ====================

pub fn ease_in_back(t: f64) -> f64 {
    let s = BACK_OVERSHOOT;
    t * t * ((s + 1.0) * t - s)
}

pub fn ease_out_back(t: f64) -> f64 {
    let s = BACK_OVERSHOOT;
    let t = t - 1.0;
    t * t * ((s + 1.0) * t + s) + 1.0
}

pub fn ease_in_out_back(t: f64) -> f64 {
    let s = BACK_OVERSHOOT * 1.525;
    let t = t * 2.0;
    if t < 1.0 {
        0.5 * (t * t * ((s + 1.0) * t - s))
    } else {
        let t = t - 2.0;
        0.5 * (t * t * ((s + 1.0) * t + s) + 2.0)
    }
}

// ==================== BOUNCE ====================

pub fn ease_in_bounce(t: f64) -> f64 {
    1.0 - ease_out_bounce(1.0 - t)
}

pub fn ease_out_bounce(t: f64) -> f64 {
    if t < 4.0 / 11.0 {
        (121.0 * t * t) / 16.0
    } else if t < 8.0 / 11.0 {
        (363.0 / 40.0 * t * t) - (99.0 / 10.0 * t) + 17.0 / 5.0
    } else if t < 9.0 / 10.0 {
        (4356.0 / 361.0 * t * t) - (35442.0 / 1805.0 * t) + 16061.0 / 1805.0
    } else {
        (54.0 / 5.0 * t * t) - (513.0 / 25.0 * t) + 268.0 / 25.0
    }
}

pub fn ease_in_out_bounce(t: f64) -> f64 {
    if t < 0.5 {
        ease_in_bounce(2.0 * t) * 0.5
    } else {
        ease_out_bounce(2.0 * t - 1.0) * 0.5 + 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn samples() -> impl Iterator<Item = f64> {
        (0..=20).map(|i| i as f64 / 20.0)
    }

    const ALL: [Easing; 31] = [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::QuartIn,
        Easing::QuartOut,
        Easing::QuartInOut,
        Easing::QuintIn,
        Easing::QuintOut,
        Easing::QuintInOut,
        Easing::SineIn,
        Easing::SineOut,
        Easing::SineInOut,
        Easing::ExpoIn,
        Easing::ExpoOut,
        Easing::ExpoInOut,
        Easing::CircIn,
        Easing::CircOut,
        Easing::CircInOut,
        Easing::ELASTIC_IN,
        Easing::ELASTIC_OUT,
        Easing::ELASTIC_IN_OUT,
        Easing::BackIn,
        Easing::BackOut,
        Easing::BackInOut,
        Easing::BounceIn,
        Easing::BounceOut,
        Easing::BounceInOut,
    ];

    /// `(curve, value at 0.3, value at 0.7)`.
    const INTERIOR: [(Easing, f64, f64); 31] = [
        (Easing::Linear, 0.3, 0.7),
        (Easing::QuadIn, 0.09, 0.48999999999999994),
        (Easing::QuadOut, 0.51, 0.9099999999999999),
        (Easing::QuadInOut, 0.18, 0.82),
        (Easing::CubicIn, 0.027, 0.3429999999999999),
        (Easing::CubicOut, 0.657, 0.973),
        (Easing::CubicInOut, 0.108, 0.8919999999999999),
        (Easing::QuartIn, 0.0081, 0.24009999999999992),
        (Easing::QuartOut, 0.7599, 0.9919),
        (Easing::QuartInOut, 0.0648, 0.9351999999999999),
        (Easing::QuintIn, 0.00243, 0.16806999999999994),
        (Easing::QuintOut, 0.8319300000000001, 0.99757),
        (Easing::QuintInOut, 0.03888, 0.96112),
        (Easing::SineIn, 0.1089934758116321, 0.5460095002604533),
        (Easing::SineOut, 0.45399049973954675, 0.8910065241883678),
        (Easing::SineInOut, 0.20610737385376343, 0.7938926261462365),
        (Easing::ExpoIn, 0.0078125, 0.12499999999999996),
        (Easing::ExpoOut, 0.875, 0.9921875),
        (Easing::ExpoInOut, 0.03125, 0.96875),
        (Easing::CircIn, 0.04606079858305434, 0.285857157145715),
        (Easing::CircOut, 0.714142842854285, 0.9539392014169457),
        (Easing::CircInOut, 0.09999999999999998, 0.8999999999999999),
        (Easing::ELASTIC_IN, -0.006320445268554275, -0.10112712429686835),
        (Easing::ELASTIC_OUT, 1.1011271242968683, 1.0063204452685544),
        (Easing::ELASTIC_IN_OUT, 0.0096567810742171, 0.9903432189257829),
        (Easing::BackIn, -0.08019954000000001, 0.09286773999999981),
        (Easing::BackOut, 0.9071322600000002, 1.08019954),
        (Easing::BackInOut, -0.07883348399999998, 1.078833484),
        (Easing::BounceIn, 0.08325000000000093, 0.31937499999999985),
        (Easing::BounceOut, 0.6806249999999999, 0.9167499999999991),
        (Easing::BounceInOut, 0.05400000000000027, 0.946),
    ];

    // ==================== INTERIOR VALUES ====================

    #[test]
    fn test_interior_values() {
        for (e, at_03, at_07) in INTERIOR {
            let (a, b) = (e.apply(0.3), e.apply(0.7));
            assert!((a - at_03).abs() < 1e-12, "{e:?} at 0.3 gave {a}, want {at_03}");
            assert!((b - at_07).abs() < 1e-12, "{e:?} at 0.7 gave {b}, want {at_07}");
        }
    }

    #[test]
    fn test_interior_table_covers_every_curve() {
        for (e, (listed, _, _)) in ALL.iter().zip(INTERIOR.iter()) {
            assert_eq!(e, listed);
        }
    }

    // ==================== ENDPOINTS ====================

    #[test]
    fn test_linear_is_identity() {
        for t in samples() {
            assert_eq!(ease_linear(t), t);
            assert_eq!(Easing::Linear.apply(t), t);
        }
    }

    #[test]
    fn test_quad_endpoints() {
        assert_eq!(ease_in_quad(0.0), 0.0);
        assert_eq!(ease_in_quad(1.0), 1.0);
    }

    #[test]
    fn test_all_curves_hit_endpoints() {
        // elastic in/out do not land exactly on 0 or 1
        for e in ALL {
            let start = e.apply(0.0);
            let end = e.apply(1.0);
            assert!((start - 0.0).abs() < 1e-3, "{e:?} at 0 gave {start}");
            assert!((end - 1.0).abs() < 1e-3, "{e:?} at 1 gave {end}");
        }
    }

    // ==================== IDENTITIES ====================

    #[test]
    fn test_in_bounce_mirrors_out_bounce() {
        for t in samples() {
            assert_eq!(ease_in_bounce(t), 1.0 - ease_out_bounce(1.0 - t));
        }
    }

    #[test]
    fn test_in_out_curves_hit_half_at_midpoint() {
        let in_outs = [
            Easing::QuadInOut,
            Easing::CubicInOut,
            Easing::QuartInOut,
            Easing::QuintInOut,
            Easing::SineInOut,
            Easing::ExpoInOut,
            Easing::CircInOut,
            Easing::BackInOut,
            Easing::BounceInOut,
        ];
        for e in in_outs {
            assert!(approx_eq(e.apply(0.5), 0.5), "{e:?} at 0.5 gave {}", e.apply(0.5));
        }
    }

    #[test]
    fn test_back_overshoots() {
        assert!(ease_in_back(0.2) < 0.0);
        assert!(ease_out_back(0.8) > 1.0);
    }

    #[test]
    fn test_elastic_period_changes_curve() {
        let a = Easing::ElasticOut(0.5).apply(0.3);
        let b = Easing::ElasticOut(0.3).apply(0.3);
        assert!(!approx_eq(a, b));
        assert_eq!(ease_out_elastic(0.3), a);
    }

    #[test]
    fn test_custom_curve() {
        fn half(t: f64) -> f64 {
            t * 0.5
        }
        assert_eq!(Easing::Custom(half).apply(0.8), 0.4);
    }

    #[test]
    fn test_default_is_linear() {
        assert_eq!(Easing::default(), Easing::Linear);
    }
}
