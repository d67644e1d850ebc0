//! Easing functions for camera transitions.
//!
//! Every curve maps `[0, 1]` onto `[0, 1]` with `f(0) = 0` and `f(1) = 1`.
//! Inputs outside the unit interval are clamped and NaN is treated as the
//! start of the curve, so a bad clock sample never produces a NaN pose.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for transition curves.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Piecewise quadratic ease-in-out: `2t²` below the midpoint,
    /// `1 - (2 - 2t)² / 2` above it.
    QuadraticInOut,
}

impl EasingFunction {
    /// Curve used for camera mode transitions.
    pub const DEFAULT: EasingFunction = EasingFunction::QuadraticInOut;

    /// Evaluate the easing function at time t.
    #[inline]
    pub fn evaluate(&self, t: f32) -> f32 {
        if t.is_nan() {
            return 0.0;
        }
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let tail = -2.0 * t + 2.0;
                    1.0 - tail * tail / 2.0
                }
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingFunction; 4] = [
        EasingFunction::Linear,
        EasingFunction::QuadraticIn,
        EasingFunction::QuadraticOut,
        EasingFunction::QuadraticInOut,
    ];

    #[test]
    fn endpoints_are_exact() {
        for f in ALL {
            assert_eq!(f.evaluate(0.0), 0.0, "{f:?} at 0");
            assert!((f.evaluate(1.0) - 1.0).abs() < 1e-6, "{f:?} at 1");
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for f in ALL {
            let mut prev = f.evaluate(0.0);
            for i in 1..=1000 {
                let v = f.evaluate(i as f32 / 1000.0);
                assert!(v >= prev, "{f:?} decreased at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn ease_in_out_midpoint_is_half() {
        let f = EasingFunction::QuadraticInOut;
        assert_eq!(f.evaluate(0.5), 0.5);
        assert_eq!(f.evaluate(0.25), 0.125);
        assert_eq!(f.evaluate(0.75), 0.875);
    }

    #[test]
    fn ease_in_out_is_point_symmetric() {
        let f = EasingFunction::QuadraticInOut;
        for i in 0..=20 {
            let t = i as f32 / 20.0;
            let sum = f.evaluate(t) + f.evaluate(1.0 - t);
            assert!((sum - 1.0).abs() < 1e-6, "asymmetric at t={t}");
        }
    }

    #[test]
    fn test_input_clamping() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(-0.5), 0.0);
        assert_eq!(linear.evaluate(1.5), 1.0);

        let in_out = EasingFunction::QuadraticInOut;
        assert_eq!(in_out.evaluate(-3.0), 0.0);
        assert_eq!(in_out.evaluate(7.0), 1.0);
    }

    #[test]
    fn nan_maps_to_start() {
        for f in ALL {
            assert_eq!(f.evaluate(f32::NAN), 0.0);
        }
    }

    #[test]
    fn test_quadratic_out() {
        let quad_out = EasingFunction::QuadraticOut;
        assert_eq!(quad_out.evaluate(0.5), 0.75);
    }

    #[test]
    fn default_is_ease_in_out() {
        assert_eq!(EasingFunction::default(), EasingFunction::QuadraticInOut);
    }
}
