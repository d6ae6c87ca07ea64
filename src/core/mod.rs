//! Core types and behaviors of the animation engine.

pub mod contact;
pub mod cursor;
pub mod easing;
pub mod error;
pub mod floating;
pub mod reveal;
pub mod scene;
pub mod scheduler;
pub mod scroll;
pub mod timeline;
pub mod tween;
pub mod view;

pub use contact::*;
pub use cursor::*;
pub use easing::*;
pub use error::*;
pub use floating::*;
pub use reveal::*;
pub use scene::*;
pub use scheduler::*;
pub use scroll::*;
pub use timeline::*;
pub use tween::*;
pub use view::*;
