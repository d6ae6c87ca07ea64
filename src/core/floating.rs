//! Floating ambience: seeded particle fields that drift with scroll, and
//! looping rise-and-fade particle bursts.
//!
//! Generation is split from playback. [`FloatingFieldGenerator`] produces
//! pure descriptors from a seed, so a field is reproducible frame by
//! frame; [`FloatingField`] mounts the descriptors into the scene and
//! animates them.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::easing::Easing;
use crate::core::scene::{ElementId, LayoutBox, Scene};
use crate::core::scheduler::TaskStatus;
use crate::core::scroll::TriggerRegion;
use crate::core::tween::MotionProps;
use crate::motion_config::{FloatingFieldConfig, ParticleBurstConfig};

/// Sample a half-open range, tolerating a degenerate configuration where
/// the bounds coincide or invert.
fn sample_range(rng: &mut StdRng, lo: f32, hi: f32) -> f32 {
    if hi <= lo {
        lo
    } else {
        rng.gen_range(lo..hi)
    }
}

/// One floating element's full description: where it sits, how it looks,
/// and how it moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingSpec {
    /// Initial position in document coordinates
    pub x: f32,
    pub y: f32,

    /// Side length in pixels
    pub size: f32,

    /// Resting opacity
    pub opacity: f32,

    /// Fixed rotation in degrees
    pub rotation: f32,

    /// Loop travel per axis, ping-ponged forever
    pub loop_dx: f32,
    pub loop_dy: f32,

    /// One direction of the ping-pong
    pub loop_duration: Duration,

    /// Extra vertical travel over the container's scroll span
    pub drift: f32,

    /// Scroll-smoothing time constant in seconds
    pub scrub_lag: f32,
}

impl FloatingSpec {
    /// Loop offset at `elapsed`: a sine-eased triangle wave, out and back.
    pub fn loop_offset(&self, elapsed: Duration) -> (f32, f32) {
        if self.loop_duration.is_zero() {
            return (0.0, 0.0);
        }
        let phase = elapsed.as_secs_f32() / self.loop_duration.as_secs_f32();
        let cycle = phase % 2.0;
        let t = if cycle < 1.0 { cycle } else { 2.0 - cycle };
        let eased = Easing::EaseInOutSine.apply(t);
        (self.loop_dx * eased, self.loop_dy * eased)
    }
}

/// Produces floating-element descriptors from a seed. Same seed, same
/// field.
pub struct FloatingFieldGenerator;

impl FloatingFieldGenerator {
    pub fn generate(
        config: &FloatingFieldConfig,
        area_width: f32,
        area_height: f32,
        seed: u64,
    ) -> Vec<FloatingSpec> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..config.count)
            .map(|_| FloatingSpec {
                x: sample_range(&mut rng, 0.0, area_width),
                y: sample_range(&mut rng, 0.0, area_height),
                size: sample_range(&mut rng, config.min_size, config.max_size),
                opacity: sample_range(&mut rng, config.min_opacity, config.max_opacity),
                rotation: sample_range(&mut rng, 0.0, 360.0),
                loop_dx: sample_range(&mut rng, -config.loop_travel, config.loop_travel),
                loop_dy: sample_range(&mut rng, -config.loop_travel, config.loop_travel),
                loop_duration: Duration::from_secs_f32(sample_range(
                    &mut rng,
                    config.min_loop_secs,
                    config.max_loop_secs,
                )),
                drift: sample_range(&mut rng, -config.drift, config.drift),
                scrub_lag: sample_range(&mut rng, config.min_scrub_lag, config.max_scrub_lag),
            })
            .collect()
    }
}

struct MountedParticle {
    spec: FloatingSpec,
    element: ElementId,
    /// Scroll progress after exponential smoothing
    smoothed: f32,
}

/// A mounted floating field: loops forever, drifts with the container's
/// scroll progress, smoothed per particle.
pub struct FloatingField {
    container: ElementId,
    particles: Vec<MountedParticle>,
    started: Instant,
    last_tick: Option<Instant>,
}

impl FloatingField {
    /// Mount `specs` into the scene over `container`'s area.
    pub fn mount(
        scene: &mut Scene,
        container: ElementId,
        specs: Vec<FloatingSpec>,
        now: Instant,
    ) -> Self {
        let particles = specs
            .into_iter()
            .map(|spec| {
                let element =
                    scene.add_element(LayoutBox::new(spec.x, spec.y, spec.size, spec.size));
                MountedParticle {
                    spec,
                    element,
                    smoothed: 0.0,
                }
            })
            .collect();
        Self {
            container,
            particles,
            started: now,
            last_tick: None,
        }
    }

    /// Remove every particle element from the scene.
    pub fn unmount(&mut self, scene: &mut Scene) {
        for p in self.particles.drain(..) {
            scene.remove_element(p.element);
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Advance loops and scroll drift, writing particle properties.
    pub fn update(&mut self, scene: &mut Scene, now: Instant) {
        let elapsed = now.saturating_duration_since(self.started);
        let dt = self
            .last_tick
            .map(|last| now.saturating_duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_tick = Some(now);

        let progress = TriggerRegion::full_span(self.container)
            .progress(scene)
            .unwrap_or(0.0);

        for p in &mut self.particles {
            if p.spec.scrub_lag > 0.0 {
                // A zero-dt tick (the first one) takes no smoothing step.
                if dt > 0.0 {
                    let alpha = 1.0 - (-dt / p.spec.scrub_lag).exp();
                    p.smoothed += (progress - p.smoothed) * alpha;
                }
            } else {
                p.smoothed = progress;
            }
            let (lx, ly) = p.spec.loop_offset(elapsed);
            scene.set_props(
                p.element,
                MotionProps {
                    x: lx,
                    y: ly + p.spec.drift * p.smoothed,
                    rotation: p.spec.rotation,
                    opacity: p.spec.opacity,
                    ..MotionProps::IDENTITY
                },
            );
        }
    }
}

struct BurstParticle {
    element: ElementId,
    opacity: f32,
    dx: f32,
    rise: f32,
    cycle: Duration,
    delay: Duration,
}

/// The landing particle burst: particles scattered over an area rise and
/// fade on individual looping cycles until the burst is despawned.
pub struct ParticleBurst {
    particles: Vec<BurstParticle>,
    started: Instant,
}

impl ParticleBurst {
    /// Spawn a burst over the given area.
    pub fn spawn(
        scene: &mut Scene,
        area: LayoutBox,
        config: &ParticleBurstConfig,
        seed: u64,
        now: Instant,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..config.count)
            .map(|_| {
                let size = sample_range(&mut rng, config.min_size, config.max_size);
                let x = sample_range(&mut rng, area.left, area.left + area.width);
                let y = sample_range(&mut rng, area.top, area.top + area.height);
                let element = scene.add_element(LayoutBox::new(x, y, size, size));
                BurstParticle {
                    element,
                    opacity: sample_range(&mut rng, config.min_opacity, config.max_opacity),
                    dx: sample_range(&mut rng, -config.drift, config.drift),
                    rise: config.rise,
                    cycle: Duration::from_secs_f32(sample_range(
                        &mut rng,
                        config.min_cycle_secs,
                        config.max_cycle_secs,
                    )),
                    delay: Duration::from_secs_f32(sample_range(
                        &mut rng,
                        0.0,
                        config.max_delay_secs,
                    )),
                }
            })
            .collect();
        log::debug!("particle burst spawned over {:?}", area);
        Self {
            particles,
            started: now,
        }
    }

    pub fn live_count(&self) -> usize {
        self.particles.len()
    }

    /// Advance every particle's looping rise-and-fade cycle.
    pub fn update(&mut self, scene: &mut Scene, now: Instant) -> TaskStatus {
        let elapsed = now.saturating_duration_since(self.started);
        for p in &self.particles {
            let Some(active) = elapsed.checked_sub(p.delay) else {
                scene.set_props(
                    p.element,
                    MotionProps {
                        opacity: p.opacity,
                        ..MotionProps::IDENTITY
                    },
                );
                continue;
            };
            let cycle = p.cycle.as_secs_f32().max(f32::EPSILON);
            let t = (active.as_secs_f32() % cycle) / cycle;
            let reach = Easing::EaseOutQuad.apply(t);
            scene.set_props(
                p.element,
                MotionProps {
                    x: p.dx * reach,
                    y: -p.rise * reach,
                    opacity: p.opacity * (1.0 - t),
                    ..MotionProps::IDENTITY
                },
            );
        }
        TaskStatus::Running
    }

    /// Remove every particle element from the scene.
    pub fn despawn(&mut self, scene: &mut Scene) {
        for p in self.particles.drain(..) {
            scene.remove_element(p.element);
        }
    }
}
