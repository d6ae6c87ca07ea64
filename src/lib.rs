//! Scrollweave Animation Engine
//!
//! A headless scroll-reaction engine for single-page layouts.
//!
//! # Architecture
//!
//! ```text
//! Host events (scroll/pointer/frame) ──► Scheduler ──► Bindings ──► Scene props ──► Host applies
//! ```
//!
//! The engine never touches a real view tree: the host mirrors its layout
//! into a [`Scene`], feeds scroll and pointer positions in, ticks the
//! [`FrameScheduler`] once per rendered frame, and reads the resulting
//! transform/opacity properties back out.

pub mod core;
pub mod motion_config;

pub use crate::core::*;
pub use crate::motion_config::*;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the engine's logging.
pub fn init() {
    let _ = env_logger::try_init();
    log::info!("scrollweave engine v{} initializing", VERSION);
}
