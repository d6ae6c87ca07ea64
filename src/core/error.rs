//! Error types for the animation engine.
//!
//! Missing element references are deliberately NOT errors: every binding
//! treats an absent or detached target as a silent no-op. Errors are
//! reserved for genuinely invalid construction.

use thiserror::Error;

/// Engine error type
#[derive(Debug, Error)]
pub enum EngineError {
    /// A trigger region whose start boundary does not precede its end
    /// boundary in scroll order.
    #[error("invalid trigger region: start scroll {start} must precede end scroll {end}")]
    InvalidRegion { start: f32, end: f32 },

    /// A timeline must contain at least one step.
    #[error("timeline has no steps")]
    EmptyTimeline,

    /// A form submission with required fields left empty.
    #[error("missing required fields: {0}")]
    IncompleteForm(String),

    /// A second submission was attempted while one is pending.
    #[error("submission already in progress")]
    SubmissionInProgress,
}

/// Result alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
