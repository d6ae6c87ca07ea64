//! Tweens: time-parameterized interpolation of animated properties.
//!
//! Sampling is pure in elapsed time. Nothing here reads the wall clock;
//! callers pass elapsed durations in, which keeps every animation step
//! reproducible under test.

use std::time::Duration;

use crate::core::easing::Easing;

/// The set of visual properties the engine animates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionProps {
    /// Horizontal offset in pixels.
    pub x: f32,

    /// Vertical offset in pixels.
    pub y: f32,

    /// Rotation in degrees.
    pub rotation: f32,

    /// Uniform scale factor.
    pub scale: f32,

    /// Opacity (0.0 - 1.0).
    pub opacity: f32,
}

impl MotionProps {
    /// The resting state: no offset, no rotation, full scale and opacity.
    pub const IDENTITY: MotionProps = MotionProps {
        x: 0.0,
        y: 0.0,
        rotation: 0.0,
        scale: 1.0,
        opacity: 1.0,
    };

    /// Linear interpolation between two property sets.
    pub fn lerp(from: &MotionProps, to: &MotionProps, t: f32) -> MotionProps {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        MotionProps {
            x: mix(from.x, to.x),
            y: mix(from.y, to.y),
            rotation: mix(from.rotation, to.rotation),
            scale: mix(from.scale, to.scale),
            opacity: mix(from.opacity, to.opacity),
        }
    }
}

impl Default for MotionProps {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A single scalar animation from one value to another.
#[derive(Debug, Clone)]
pub struct Tween {
    /// Start value
    pub from: f32,

    /// End value
    pub to: f32,

    /// Duration of the active phase
    pub duration: Duration,

    /// Delay before the active phase begins
    pub delay: Duration,

    /// Easing function
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            delay: Duration::ZERO,
            easing,
        }
    }

    /// Set the start delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Total time from scheduling to completion.
    pub fn total_duration(&self) -> Duration {
        self.delay + self.duration
    }

    /// Value at `elapsed` since the tween was scheduled.
    pub fn sample(&self, elapsed: Duration) -> f32 {
        let active = match elapsed.checked_sub(self.delay) {
            Some(a) => a,
            None => return self.from,
        };
        if active >= self.duration || self.duration.is_zero() {
            return self.to;
        }
        let t = active.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    /// Whether the tween has reached its end value.
    pub fn is_done(&self, elapsed: Duration) -> bool {
        elapsed >= self.total_duration()
    }
}

/// A tween over a full property set.
#[derive(Debug, Clone)]
pub struct PropsTween {
    pub from: MotionProps,
    pub to: MotionProps,
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

impl PropsTween {
    pub fn new(from: MotionProps, to: MotionProps, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            delay: Duration::ZERO,
            easing,
        }
    }

    /// Set the start delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Total time from scheduling to completion.
    pub fn total_duration(&self) -> Duration {
        self.delay + self.duration
    }

    /// Property values at `elapsed` since the tween was scheduled.
    pub fn sample(&self, elapsed: Duration) -> MotionProps {
        let active = match elapsed.checked_sub(self.delay) {
            Some(a) => a,
            None => return self.from,
        };
        if active >= self.duration || self.duration.is_zero() {
            return self.to;
        }
        let t = active.as_secs_f32() / self.duration.as_secs_f32();
        MotionProps::lerp(&self.from, &self.to, self.easing.apply(t))
    }

    /// Whether the tween has reached its end state.
    pub fn is_done(&self, elapsed: Duration) -> bool {
        elapsed >= self.total_duration()
    }
}
