//! Easing functions for transform transitions.
//!
//! Every curve here is a one-dimensional cubic Bézier with its x control
//! points fixed at 1/3 and 2/3, which means it maps exactly onto a CSS
//! `cubic-bezier()` timing function. Hosts that animate natively (a browser)
//! use [`EasingFunction::css`]; hosts that tween themselves (the simulated
//! host) call [`EasingFunction::evaluate`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for transition curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First control value.
        c1: f32,
        /// Second control value.
        c2: f32,
    },
}

impl EasingFunction {
    /// Default easing: CubicHermite with c1=0.33, c2=1.0 for a natural
    /// ease-out feel.
    pub const DEFAULT: EasingFunction =
        EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }

    /// Control values `(y1, y2)` of the equivalent Bézier curve.
    #[must_use]
    pub fn control_points(&self) -> (f32, f32) {
        match *self {
            EasingFunction::Linear => (1.0 / 3.0, 2.0 / 3.0),
            EasingFunction::QuadraticIn => (0.0, 1.0 / 3.0),
            EasingFunction::QuadraticOut => (2.0 / 3.0, 1.0),
            EasingFunction::CubicHermite { c1, c2 } => (c1, c2),
        }
    }

    /// CSS `transition-timing-function` value for this curve.
    #[must_use]
    pub fn css(&self) -> String {
        if *self == EasingFunction::Linear {
            return "linear".to_owned();
        }
        let (y1, y2) = self.control_points();
        format!("cubic-bezier(0.333, {y1:.3}, 0.667, {y2:.3})")
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}
