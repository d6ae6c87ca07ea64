//! View orchestration: the landing/portfolio state machine, the landing
//! intro and exit transitions, and background media control.
//!
//! Media playback is owned by the host; the controller only emits
//! [`MediaCommand`]s over a channel. Audio settings are announced at
//! startup, and Play is sent once, on the first entry into the
//! portfolio, matching autoplay-on-first-interaction.

use std::time::Instant;

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::core::easing::Easing;
use crate::core::scene::{ElementId, Scene};
use crate::core::timeline::TimelineSequencer;
use crate::core::tween::{MotionProps, PropsTween};
use crate::motion_config::{AudioConfig, LandingConfig};

/// The two top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Landing,
    Portfolio,
}

/// Commands for the host's background audio player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaCommand {
    /// Announce playback settings, sent once at startup.
    Configure { looped: bool, volume: f32 },
    Play,
    Pause,
    SetMuted(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewState {
    Landing,
    Exiting,
    Portfolio,
}

/// Build the landing intro: title rises and settles, subtitle follows
/// while the title is still moving.
pub fn landing_intro(
    title: ElementId,
    subtitle: ElementId,
    config: &LandingConfig,
) -> TimelineSequencer {
    let title_from = MotionProps {
        y: config.title_offset_y,
        scale: config.title_scale,
        opacity: 0.0,
        ..MotionProps::IDENTITY
    };
    let subtitle_from = MotionProps {
        y: config.subtitle_offset_y,
        opacity: 0.0,
        ..MotionProps::IDENTITY
    };
    TimelineSequencer::new()
        .step(
            title,
            PropsTween::new(
                title_from,
                MotionProps::IDENTITY,
                config.title_duration,
                Easing::EaseOutCubic,
            ),
        )
        .step_overlapping(
            subtitle,
            PropsTween::new(
                subtitle_from,
                MotionProps::IDENTITY,
                config.subtitle_duration,
                Easing::EaseOutCubic,
            ),
            config.subtitle_overlap,
        )
}

/// Drives the landing → portfolio transition and the media channel.
pub struct ViewController {
    state: ViewState,
    config: LandingConfig,
    audio: AudioConfig,
    exit: Option<(ElementId, PropsTween, Instant)>,
    /// Landing root detached by the exit transition, restored by go_home
    landing_root: Option<ElementId>,
    media_tx: Sender<MediaCommand>,
    play_sent: bool,
    muted: bool,
}

impl ViewController {
    /// Create a controller and the receiving end of its media channel.
    /// The audio settings are announced on the channel immediately.
    pub fn new(config: LandingConfig, audio: AudioConfig) -> (Self, Receiver<MediaCommand>) {
        let (tx, rx) = unbounded();
        let controller = Self {
            state: ViewState::Landing,
            config,
            muted: audio.start_muted,
            audio,
            exit: None,
            landing_root: None,
            media_tx: tx,
            play_sent: false,
        };
        controller.send(MediaCommand::Configure {
            looped: controller.audio.looped,
            volume: controller.audio.volume,
        });
        if controller.muted {
            controller.send(MediaCommand::SetMuted(true));
        }
        (controller, rx)
    }

    /// The currently presented view. The exit transition still shows the
    /// landing view until it completes.
    pub fn view(&self) -> View {
        match self.state {
            ViewState::Landing | ViewState::Exiting => View::Landing,
            ViewState::Portfolio => View::Portfolio,
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.state == ViewState::Exiting
    }

    /// Begin leaving the landing view: the landing root fades out while
    /// scaling up slightly. Ignored unless the landing view is at rest.
    pub fn enter_portfolio(&mut self, landing_root: ElementId, now: Instant) {
        if self.state != ViewState::Landing {
            return;
        }
        let exit_to = MotionProps {
            scale: self.config.exit_scale,
            opacity: 0.0,
            ..MotionProps::IDENTITY
        };
        let tween = PropsTween::new(
            MotionProps::IDENTITY,
            exit_to,
            self.config.exit_duration,
            Easing::EaseInOutQuad,
        );
        self.exit = Some((landing_root, tween, now));
        self.state = ViewState::Exiting;
        log::info!("leaving landing view");
    }

    /// Return to the landing view from the portfolio, scrolled to the
    /// top. The landing root detached by the exit transition comes back
    /// at rest.
    pub fn go_home(&mut self, scene: &mut Scene) {
        if self.state != ViewState::Portfolio {
            return;
        }
        scene.reset_scroll();
        if let Some(root) = self.landing_root.take() {
            scene.attach(root);
        }
        self.state = ViewState::Landing;
        log::info!("returned to landing view");
    }

    /// Advance the exit transition, if one is running. Flips the view
    /// when it completes and, with autoplay enabled, sends the one-time
    /// Play command.
    pub fn update(&mut self, scene: &mut Scene, now: Instant) {
        if self.state != ViewState::Exiting {
            return;
        }
        let Some((root, tween, started)) = &self.exit else {
            return;
        };
        let elapsed = now.saturating_duration_since(*started);
        scene.set_props(*root, tween.sample(elapsed));
        if tween.is_done(elapsed) {
            let root = *root;
            scene.detach(root);
            self.landing_root = Some(root);
            self.exit = None;
            self.state = ViewState::Portfolio;
            log::info!("entered portfolio view");
            if self.audio.autoplay && !self.play_sent {
                self.play_sent = true;
                self.send(MediaCommand::Play);
            }
        }
    }

    /// Toggle background audio mute and report the new state.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.send(MediaCommand::SetMuted(self.muted));
        self.muted
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Ask the host to pause background audio.
    pub fn pause_media(&self) {
        self.send(MediaCommand::Pause);
    }

    fn send(&self, command: MediaCommand) {
        if self.media_tx.send(command).is_err() {
            log::warn!("media receiver gone, dropping {:?}", command);
        }
    }
}
