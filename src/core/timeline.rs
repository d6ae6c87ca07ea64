//! Timeline sequencing: tweens on multiple targets played in order, with
//! optional overlap between consecutive steps.
//!
//! Start times are resolved once, when a step is added: step *i* begins
//! `overlap` before step *i − 1* ends (clamped to the timeline start).
//! The whole timeline is then just a bag of delayed tweens sampled
//! against a single start instant.

use std::time::{Duration, Instant};

use crate::core::error::{EngineError, EngineResult};
use crate::core::scene::{ElementId, Scene};
use crate::core::tween::PropsTween;

/// Playback state of a sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineState {
    Idle,
    Playing,
    Done,
    Aborted,
}

struct ScheduledStep {
    target: ElementId,
    /// Tween with its resolved start offset baked in as the delay.
    tween: PropsTween,
}

/// Plays a sequence of property tweens across targets, firing an optional
/// completion callback when the last one finishes.
pub struct TimelineSequencer {
    steps: Vec<ScheduledStep>,
    total: Duration,
    state: TimelineState,
    started: Option<Instant>,
    on_complete: Option<Box<dyn FnOnce() + Send>>,
}

impl TimelineSequencer {
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            total: Duration::ZERO,
            state: TimelineState::Idle,
            started: None,
            on_complete: None,
        }
    }

    /// Append a step starting when the previous one ends.
    pub fn step(self, target: ElementId, tween: PropsTween) -> Self {
        self.step_overlapping(target, tween, Duration::ZERO)
    }

    /// Append a step starting `overlap` before the previous one ends.
    /// An overlap past the timeline start clamps to zero.
    pub fn step_overlapping(
        mut self,
        target: ElementId,
        tween: PropsTween,
        overlap: Duration,
    ) -> Self {
        let offset = self.total.saturating_sub(overlap);
        let tween = tween.with_delay(offset);
        self.total = self.total.max(tween.total_duration());
        self.steps.push(ScheduledStep { target, tween });
        self
    }

    /// Run a callback once when the final step completes. Dropped without
    /// firing if the timeline is aborted.
    pub fn on_complete(mut self, callback: impl FnOnce() + Send + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Time from start to the end of the last step.
    pub fn total_duration(&self) -> Duration {
        self.total
    }

    pub fn state(&self) -> TimelineState {
        self.state
    }

    /// Begin playback at `now`.
    pub fn play(&mut self, now: Instant) -> EngineResult<()> {
        if self.steps.is_empty() {
            return Err(EngineError::EmptyTimeline);
        }
        self.state = TimelineState::Playing;
        self.started = Some(now);
        log::debug!(
            "timeline started: {} steps over {:?}",
            self.steps.len(),
            self.total
        );
        Ok(())
    }

    /// Stop playback. Targets keep their current values; the completion
    /// callback never fires.
    pub fn abort(&mut self) {
        if self.state == TimelineState::Playing {
            self.state = TimelineState::Aborted;
            self.on_complete = None;
            log::debug!("timeline aborted");
        }
    }

    /// Sample every step at `now` and write target properties. Fires the
    /// completion callback on the tick the last step finishes.
    pub fn update(&mut self, scene: &mut Scene, now: Instant) {
        if self.state != TimelineState::Playing {
            return;
        }
        let Some(started) = self.started else {
            return;
        };
        let elapsed = now.saturating_duration_since(started);
        for step in &self.steps {
            scene.set_props(step.target, step.tween.sample(elapsed));
        }
        if elapsed >= self.total {
            self.state = TimelineState::Done;
            if let Some(callback) = self.on_complete.take() {
                callback();
            }
        }
    }
}

impl Default for TimelineSequencer {
    fn default() -> Self {
        Self::new()
    }
}
