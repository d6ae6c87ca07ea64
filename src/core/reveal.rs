//! Viewport-entry reveals: play a transition when a trigger crosses the
//! reveal threshold, reverse it when the trigger leaves again.
//!
//! Several targets may share one trigger (a card grid): target *i* starts
//! `i × stagger` after the trigger condition is met. Reversals pick up
//! from the interrupted value rather than snapping, so rapid scroll
//! jitter around the threshold stays smooth.

use std::time::{Duration, Instant};

use crate::core::scene::{ElementId, Scene};
use crate::core::scroll::TriggerRegion;
use crate::core::tween::MotionProps;
use crate::motion_config::RevealConfig;

/// Playback phase of a reveal.
#[derive(Debug, Clone, Copy)]
enum RevealPhase {
    /// Initial state: offset and transparent
    Hidden,

    /// Playing toward fully shown, starting at value `from`
    Forward { started: Instant, from: f32 },

    /// Fully shown
    Shown,

    /// Playing back toward hidden, starting at value `from`
    Reverse { started: Instant, from: f32 },
}

/// One-shot (but reversible) reveal of one or more targets when a trigger
/// element crosses the viewport threshold.
pub struct RevealOnEntry {
    region: TriggerRegion,
    targets: Vec<ElementId>,
    config: RevealConfig,
    phase: RevealPhase,
    was_crossed: bool,
    /// Trigger fired before all targets were mounted; start on mount.
    pending_forward: bool,
    forward_count: u32,
}

impl RevealOnEntry {
    /// Reveal `targets` when `trigger` crosses the configured threshold.
    pub fn new(trigger: ElementId, targets: Vec<ElementId>, config: RevealConfig) -> Self {
        let region = TriggerRegion::new(trigger, config.threshold, config.threshold, false);
        Self {
            region,
            targets,
            config,
            phase: RevealPhase::Hidden,
            was_crossed: false,
            pending_forward: false,
            forward_count: 0,
        }
    }

    /// How many times the forward transition has started.
    pub fn forward_count(&self) -> u32 {
        self.forward_count
    }

    /// Advance the reveal state machine and write target properties.
    pub fn update(&mut self, scene: &mut Scene, now: Instant) {
        // Trigger not mounted yet: nothing to observe.
        let Some(crossed) = self.region.threshold_crossed(scene) else {
            return;
        };
        let mounted = self
            .targets
            .iter()
            .all(|t| scene.element(*t).is_some());

        if crossed && !self.was_crossed {
            if self.config.once && self.forward_count > 0 {
                // Fired already; never reset.
            } else if mounted {
                self.start_forward(now);
            } else {
                self.pending_forward = true;
            }
        } else if self.pending_forward && mounted {
            self.start_forward(now);
        }

        if !crossed && self.was_crossed {
            self.pending_forward = false;
            if !self.config.once {
                self.start_reverse(now);
            }
        }
        self.was_crossed = crossed;

        // Settle finished phases, counting the last staggered target.
        let tail = self.config.stagger * self.targets.len().saturating_sub(1) as u32;
        match self.phase {
            RevealPhase::Forward { started, from } => {
                if self.phase_elapsed(started, now) >= self.scaled(1.0 - from) + tail {
                    self.phase = RevealPhase::Shown;
                }
            }
            RevealPhase::Reverse { started, from } => {
                if self.phase_elapsed(started, now) >= self.scaled(from) + tail {
                    self.phase = RevealPhase::Hidden;
                }
            }
            _ => {}
        }

        for (i, target) in self.targets.iter().enumerate() {
            let shift = self.config.stagger * i as u32;
            let v = self.value_at(now, shift);
            scene.set_props(*target, self.props_for(v));
        }
    }

    fn start_forward(&mut self, now: Instant) {
        let from = self.value_at(now, Duration::ZERO);
        self.phase = if from >= 1.0 {
            RevealPhase::Shown
        } else {
            RevealPhase::Forward { started: now, from }
        };
        self.forward_count += 1;
        self.pending_forward = false;
    }

    fn start_reverse(&mut self, now: Instant) {
        let from = self.value_at(now, Duration::ZERO);
        self.phase = if from <= 0.0 {
            RevealPhase::Hidden
        } else {
            RevealPhase::Reverse { started: now, from }
        };
    }

    /// Remaining play time scaled to the span being traversed, so partial
    /// reversals keep the configured speed.
    fn scaled(&self, span: f32) -> Duration {
        self.config.duration.mul_f32(span.clamp(0.0, 1.0))
    }

    fn phase_elapsed(&self, started: Instant, now: Instant) -> Duration {
        now.saturating_duration_since(started)
    }

    /// Reveal value in [0, 1] for a target whose start is shifted by
    /// `shift` (stagger).
    fn value_at(&self, now: Instant, shift: Duration) -> f32 {
        match self.phase {
            RevealPhase::Hidden => 0.0,
            RevealPhase::Shown => 1.0,
            RevealPhase::Forward { started, from } => {
                let span = 1.0 - from;
                let dur = self.scaled(span);
                let elapsed = match now.checked_duration_since(started + shift) {
                    Some(e) => e,
                    None => return from,
                };
                if dur.is_zero() || elapsed >= dur {
                    return 1.0;
                }
                let t = elapsed.as_secs_f32() / dur.as_secs_f32();
                from + span * self.config.easing.apply(t)
            }
            RevealPhase::Reverse { started, from } => {
                let dur = self.scaled(from);
                let elapsed = match now.checked_duration_since(started + shift) {
                    Some(e) => e,
                    None => return from,
                };
                if dur.is_zero() || elapsed >= dur {
                    return 0.0;
                }
                let t = elapsed.as_secs_f32() / dur.as_secs_f32();
                from * (1.0 - self.config.easing.apply(t))
            }
        }
    }

    fn props_for(&self, v: f32) -> MotionProps {
        MotionProps {
            y: self.config.offset_y * (1.0 - v),
            opacity: v,
            ..MotionProps::IDENTITY
        }
    }
}
