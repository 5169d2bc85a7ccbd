//! Airmouse - hand-gesture mouse control.
//!
//! Maps tracked hand poses to cursor movement and clicks. The camera and
//! the hand landmark model live outside the crate and are injected behind
//! the [`tracking::FrameSource`] and [`tracking::LandmarkDetector`] traits;
//! OS cursor control is a [`sink::CursorSink`] selected once at startup.
//! What the crate owns is the pipeline in between: finger-state
//! extraction, gesture classification with a shared click cooldown, and
//! the synchronous frame loop that drives the sink.

pub mod gesture;
pub mod runtime;
pub mod sink;
pub mod tracking;

pub use gesture::{GestureAction, GestureClassifier, MouseButton, ScreenBounds};
pub use runtime::{ControlConfig, ControlSession, SessionStats};
pub use sink::{CursorSink, NoOpCursorSink};
pub use tracking::{FingerState, Frame, FrameSource, HandLandmarks, LandmarkDetector, Trace};

/// Result type alias for control operations
pub type ControlResult<T> = std::result::Result<T, ControlError>;

/// Errors that can surface while driving the control pipeline
#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    /// The frame source failed mid-stream; the session ends
    #[error("Frame read error: {0}")]
    FrameRead(String),

    /// The external detector failed on a frame; the session ends
    #[error("Detector error: {0}")]
    Detector(String),

    /// An OS-level cursor operation failed
    #[error("Platform error: {0}")]
    Platform(String),

    /// A trace file broke the expected layout (header, version)
    #[error("Trace format error: {0}")]
    TraceFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
