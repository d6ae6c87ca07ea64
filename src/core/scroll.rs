//! Scroll-driven bindings: trigger regions and continuous (scrubbed)
//! progress outputs.
//!
//! A [`TriggerRegion`] maps an element's travel through the viewport onto
//! a normalized progress value. A [`ScrollBinding`] turns that progress
//! into animated properties every frame the page scrolls — the parallax
//! primitive the rest of the engine is built on.

use crate::core::error::{EngineError, EngineResult};
use crate::core::scene::{ElementId, Scene};
use crate::core::tween::MotionProps;
use crate::motion_config::ParallaxConfig;

/// A scroll-position span associated with an element.
///
/// `start` and `end` are viewport fractions (0.0 = viewport top,
/// 1.0 = viewport bottom): progress is 0 when the element's top edge sits
/// at fraction `start`, and 1 when its bottom edge sits at fraction `end`.
/// The default full span (1.0 → 0.0) runs from "top enters at the bottom"
/// to "bottom leaves at the top".
#[derive(Debug, Clone, Copy)]
pub struct TriggerRegion {
    /// Element whose travel defines the span
    pub element: ElementId,

    /// Viewport fraction aligned with the element top at progress 0
    pub start: f32,

    /// Viewport fraction aligned with the element bottom at progress 1
    pub end: f32,

    /// Continuous binding (true) vs. one-shot play/reverse toggle (false)
    pub scrub: bool,
}

impl TriggerRegion {
    pub fn new(element: ElementId, start: f32, end: f32, scrub: bool) -> Self {
        Self {
            element,
            start,
            end,
            scrub,
        }
    }

    /// The full viewport traversal: element top entering at the viewport
    /// bottom through element bottom leaving at the viewport top.
    pub fn full_span(element: ElementId) -> Self {
        Self::new(element, 1.0, 0.0, true)
    }

    /// The scroll offsets at which progress is 0 and 1.
    ///
    /// Fails when the element's geometry puts the boundaries out of scroll
    /// order (the span would be empty or inverted).
    pub fn span(&self, scene: &Scene) -> Option<EngineResult<(f32, f32)>> {
        let el = scene.element(self.element)?;
        let vp = scene.viewport.height;
        let start_scroll = el.bounds.top - vp * self.start;
        let end_scroll = el.bounds.bottom() - vp * self.end;
        if end_scroll <= start_scroll {
            return Some(Err(EngineError::InvalidRegion {
                start: start_scroll,
                end: end_scroll,
            }));
        }
        Some(Ok((start_scroll, end_scroll)))
    }

    /// Fraction of the span traversed at the scene's scroll snapshot,
    /// clamped to [0, 1]. `None` when the element is absent or detached,
    /// or the span is invalid.
    pub fn progress(&self, scene: &Scene) -> Option<f32> {
        match self.span(scene)? {
            Ok((start, end)) => {
                Some(((scene.scroll_y - start) / (end - start)).clamp(0.0, 1.0))
            }
            Err(e) => {
                log::warn!("scroll trigger skipped: {}", e);
                None
            }
        }
    }

    /// For non-scrubbed regions: whether the element's top edge has
    /// crossed the viewport fraction `start` (the reveal threshold).
    pub fn threshold_crossed(&self, scene: &Scene) -> Option<bool> {
        let el = scene.element(self.element)?;
        let threshold_line = scene.scroll_y + scene.viewport.height * self.start;
        Some(el.bounds.top <= threshold_line)
    }
}

/// Continuously maps a trigger region's progress onto an element's
/// animated properties.
pub struct ScrollBinding {
    /// Region driving the progress value
    pub region: TriggerRegion,

    /// Element receiving the computed properties
    pub target: ElementId,

    output: Box<dyn FnMut(f32) -> MotionProps + Send>,
}

impl ScrollBinding {
    /// Bind `target`'s properties to `region`'s progress through `output`.
    pub fn new(
        region: TriggerRegion,
        target: ElementId,
        output: impl FnMut(f32) -> MotionProps + Send + 'static,
    ) -> Self {
        Self {
            region,
            target,
            output: Box::new(output),
        }
    }

    /// Recompute and write the target's properties from the current
    /// scroll snapshot. No-op when the trigger or target is gone.
    pub fn apply(&mut self, scene: &mut Scene) {
        let Some(progress) = self.region.progress(scene) else {
            return;
        };
        let props = (self.output)(progress);
        scene.set_props(self.target, props);
    }
}

/// Parallax axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParallaxDirection {
    Vertical,
    Horizontal,
}

/// A full-span parallax binding: the element drifts `progress × speed ×
/// pixels_per_unit` pixels along the chosen axis as it traverses the
/// viewport.
pub fn parallax_binding(
    element: ElementId,
    config: &ParallaxConfig,
    direction: ParallaxDirection,
) -> ScrollBinding {
    let region = TriggerRegion::full_span(element);
    let (speed, pixels_per_unit) = (config.speed, config.pixels_per_unit);
    ScrollBinding::new(region, element, move |progress| {
        let offset = progress * speed * pixels_per_unit;
        match direction {
            ParallaxDirection::Vertical => MotionProps {
                y: offset,
                ..MotionProps::IDENTITY
            },
            ParallaxDirection::Horizontal => MotionProps {
                x: offset,
                ..MotionProps::IDENTITY
            },
        }
    })
}

/// A background-layer parallax binding: the layer rises by half its own
/// height scaled by `speed` over the trigger's full span.
pub fn layer_parallax_binding(
    trigger: ElementId,
    layer: ElementId,
    speed: f32,
    layer_height: f32,
) -> ScrollBinding {
    let region = TriggerRegion::full_span(trigger);
    ScrollBinding::new(region, layer, move |progress| MotionProps {
        y: -0.5 * speed * layer_height * progress,
        ..MotionProps::IDENTITY
    })
}
