//! Custom cursor: a dot pinned to the pointer and a ring that trails it,
//! with a scale-up while hovering interactive targets.
//!
//! The ring eases toward the pointer by a fixed fraction per frame, so
//! the trail length is frame-rate bound the way a per-frame lerp is. The
//! hover scale is a proper tween and resumes from its current value when
//! the hover state flips mid-flight.

use std::time::Instant;

use crate::core::tween::{MotionProps, Tween};
use crate::motion_config::CursorConfig;

/// Tracks the pointer and produces ring and dot properties each frame.
pub struct CustomCursor {
    config: CursorConfig,
    pointer: (f32, f32),
    ring: (f32, f32),
    scale_tween: Tween,
    scale_started: Instant,
    hovering: bool,
}

impl CustomCursor {
    pub fn new(config: CursorConfig, now: Instant) -> Self {
        Self {
            scale_tween: Tween::new(1.0, 1.0, config.hover_duration, config.hover_easing),
            config,
            pointer: (0.0, 0.0),
            ring: (0.0, 0.0),
            scale_started: now,
            hovering: false,
        }
    }

    /// Report a pointer move. The dot jumps immediately; the ring catches
    /// up over the following frames.
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.pointer = (x, y);
    }

    /// Flip the hover state. Retargets the scale tween from its current
    /// value, so rapid enter/leave stays continuous.
    pub fn set_hover(&mut self, hovering: bool, now: Instant) {
        if hovering == self.hovering {
            return;
        }
        self.hovering = hovering;
        let from = self.scale(now);
        let to = if hovering { self.config.hover_scale } else { 1.0 };
        self.scale_tween = Tween::new(from, to, self.config.hover_duration, self.config.hover_easing);
        self.scale_started = now;
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Advance the ring one frame toward the pointer.
    pub fn step(&mut self) {
        let f = self.config.follow;
        self.ring.0 += (self.pointer.0 - self.ring.0) * f;
        self.ring.1 += (self.pointer.1 - self.ring.1) * f;
    }

    fn scale(&self, now: Instant) -> f32 {
        self.scale_tween
            .sample(now.saturating_duration_since(self.scale_started))
    }

    /// Ring properties: trailing position, centered by its offset, scaled
    /// by the hover tween.
    pub fn ring_props(&self, now: Instant) -> MotionProps {
        MotionProps {
            x: self.ring.0 + self.config.ring_offset,
            y: self.ring.1 + self.config.ring_offset,
            scale: self.scale(now),
            ..MotionProps::IDENTITY
        }
    }

    /// Dot properties: pinned to the pointer.
    pub fn dot_props(&self) -> MotionProps {
        MotionProps {
            x: self.pointer.0 + self.config.dot_offset,
            y: self.pointer.1 + self.config.dot_offset,
            ..MotionProps::IDENTITY
        }
    }
}
