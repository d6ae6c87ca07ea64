//! Easing functions for animations.

use std::f32::consts::PI;

/// Easing curves applied to a normalized time parameter t ∈ [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Easing {
    /// Linear interpolation.
    Linear,

    /// Ease-in quadratic (starts slow).
    EaseInQuad,

    /// Ease-out quadratic (ends slow).
    EaseOutQuad,

    /// Ease-in-out quadratic (smooth S-curve).
    EaseInOutQuad,

    /// Ease-in cubic (stronger acceleration).
    EaseInCubic,

    /// Ease-out cubic (stronger deceleration).
    EaseOutCubic,

    /// Ease-in-out cubic.
    EaseInOutCubic,

    /// Sine-based ease-in-out (gentle on both ends).
    EaseInOutSine,

    /// Critically damped spring approximation (natural settle).
    Spring,
}

impl Easing {
    /// Apply the easing function to a value t, clamped to [0, 1].
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::EaseInCubic => t * t * t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::EaseInOutSine => -((PI * t).cos() - 1.0) / 2.0,
            Easing::Spring => {
                // Analytical critically-damped spring approximation.
                // x(t) = 1 - (1 + ωt) * e^(-ωt)  where ω ≈ 8 for 150ms settle
                let omega = 8.0;
                let et = (-omega * t).exp();
                1.0 - (1.0 + omega * t) * et
            }
        }
    }

    /// Parse from string, accepting hyphen, underscore, and dot-separated
    /// spellings (e.g. "power2-out", "power2.out").
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().replace(['_', '.'], "-").as_str() {
            "linear" | "none" => Self::Linear,
            "ease-in-quad" | "power2-in" | "quad-in" => Self::EaseInQuad,
            "ease-out-quad" | "power2-out" | "quad-out" | "ease-out" => Self::EaseOutQuad,
            "ease-in-out-quad" | "power2-in-out" | "power2-inout" => Self::EaseInOutQuad,
            "ease-in-cubic" | "power3-in" | "cubic-in" => Self::EaseInCubic,
            "ease-out-cubic" | "power3-out" | "cubic-out" | "cubic" => Self::EaseOutCubic,
            "ease-in-out-cubic" | "power3-in-out" | "power3-inout" | "ease-in-out" => {
                Self::EaseInOutCubic
            }
            "ease-in-out-sine" | "sine-in-out" | "sine-inout" => Self::EaseInOutSine,
            "spring" | "damped" => Self::Spring,
            _ => Self::EaseOutQuad,
        }
    }

    /// Convert to kebab-case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseInQuad => "ease-in-quad",
            Self::EaseOutQuad => "ease-out-quad",
            Self::EaseInOutQuad => "ease-in-out-quad",
            Self::EaseInCubic => "ease-in-cubic",
            Self::EaseOutCubic => "ease-out-cubic",
            Self::EaseInOutCubic => "ease-in-out-cubic",
            Self::EaseInOutSine => "ease-in-out-sine",
            Self::Spring => "spring",
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::EaseOutQuad
    }
}
