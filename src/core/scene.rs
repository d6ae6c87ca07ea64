//! Scene: the element registry bindings write into.
//!
//! The host mirrors its layout here — one [`Element`] per animated view
//! node, with document-space bounds — and reads the computed
//! [`MotionProps`] back after each scheduler tick. The scene also carries
//! the per-frame scroll snapshot: all scroll bindings evaluated within one
//! tick observe the same `scroll_y`, so visually simultaneous elements
//! stay in sync.

use std::collections::HashMap;

use crate::core::tween::MotionProps;

/// Stable handle for an element registered in a [`Scene`].
pub type ElementId = u32;

/// Axis-aligned layout box in document coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutBox {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl LayoutBox {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Viewport dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// One animated element.
#[derive(Debug, Clone)]
pub struct Element {
    /// Stable ID assigned by the scene
    pub id: ElementId,

    /// Document-space layout box (pre-animation)
    pub bounds: LayoutBox,

    /// Current animated properties
    pub props: MotionProps,

    /// A detached element is never mutated by bindings
    pub live: bool,
}

/// The element registry plus the current scroll snapshot.
#[derive(Debug)]
pub struct Scene {
    /// Viewport dimensions
    pub viewport: Viewport,

    /// Scroll offset snapshot for the current frame
    pub scroll_y: f32,

    elements: HashMap<ElementId, Element>,
    next_id: ElementId,
}

impl Scene {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            viewport: Viewport {
                width: viewport_width,
                height: viewport_height,
            },
            scroll_y: 0.0,
            elements: HashMap::new(),
            next_id: 1,
        }
    }

    /// Register an element and return its ID.
    pub fn add_element(&mut self, bounds: LayoutBox) -> ElementId {
        let id = self.next_id;
        self.next_id += 1;
        self.elements.insert(
            id,
            Element {
                id,
                bounds,
                props: MotionProps::IDENTITY,
                live: true,
            },
        );
        id
    }

    /// Remove an element. Removing an already-removed element is tolerated.
    pub fn remove_element(&mut self, id: ElementId) {
        self.elements.remove(&id);
    }

    /// Mark an element detached without removing it. Bindings stop
    /// mutating it immediately.
    pub fn detach(&mut self, id: ElementId) {
        if let Some(el) = self.elements.get_mut(&id) {
            el.live = false;
        }
    }

    /// Re-attach a detached element, making it visible to bindings again.
    /// Its properties are reset to rest.
    pub fn attach(&mut self, id: ElementId) {
        if let Some(el) = self.elements.get_mut(&id) {
            el.live = true;
            el.props = MotionProps::IDENTITY;
        }
    }

    /// Look up a live element.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id).filter(|el| el.live)
    }

    /// Write an element's animated properties. Silent no-op when the
    /// element is absent or detached.
    pub fn set_props(&mut self, id: ElementId, props: MotionProps) {
        if let Some(el) = self.elements.get_mut(&id) {
            if el.live {
                el.props = props;
            }
        }
    }

    /// Read an element's animated properties.
    pub fn props(&self, id: ElementId) -> Option<MotionProps> {
        self.elements.get(&id).map(|el| el.props)
    }

    /// Update the scroll snapshot. The host calls this once per frame,
    /// before ticking the scheduler.
    pub fn set_scroll(&mut self, scroll_y: f32) {
        self.scroll_y = scroll_y;
    }

    /// Reset scroll to the top of the document.
    pub fn reset_scroll(&mut self) {
        self.scroll_y = 0.0;
    }

    /// Number of registered elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
