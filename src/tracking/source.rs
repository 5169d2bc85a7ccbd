//! Capture and detection boundaries.
//!
//! Both the camera and the hand landmark model live outside this crate.
//! Whatever provides them is injected behind [`FrameSource`] and
//! [`LandmarkDetector`]; the control loop itself never touches a device or
//! inspects pixels.

use crate::tracking::landmarks::HandLandmarks;
use crate::ControlResult;

/// A single video frame handed to the detector.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Raw pixel data (RGB, 3 bytes per pixel). Replayed frames carry an
    /// empty buffer; only a live detector reads pixels.
    pub data: Vec<u8>,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Timestamp in milliseconds since the session started
    pub timestamp_ms: f64,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, timestamp_ms: f64) -> Self {
        Self {
            data,
            width,
            height,
            timestamp_ms,
        }
    }
}

/// Blocking source of video frames, read strictly in capture order.
pub trait FrameSource {
    /// Read the next frame.
    ///
    /// `Ok(None)` means the stream ended cleanly. Both `Ok(None)` and `Err`
    /// terminate the control loop; there is no retry.
    fn next_frame(&mut self) -> ControlResult<Option<Frame>>;
}

/// Hand landmark detector boundary.
///
/// Implementations wrap an external model. At most one hand is reported
/// per frame; `Ok(None)` means no hand was found and the frame is skipped
/// without side effects.
pub trait LandmarkDetector {
    fn detect(&mut self, frame: &Frame) -> ControlResult<Option<HandLandmarks>>;
}
