//! Hand tracking data model and capture boundaries.
//!
//! Detection itself is external to the crate; these modules define what a
//! detected hand looks like ([`landmarks`]), what the pipeline derives from
//! it ([`fingers`]), the injection seams for cameras and detectors
//! ([`source`]), and a file-backed replay of both ([`replay`]).

pub mod fingers;
pub mod landmarks;
pub mod replay;
pub mod source;

pub use fingers::FingerState;
pub use landmarks::{HandLandmarks, Landmark, LandmarkIndex, LANDMARK_COUNT};
pub use replay::{Trace, TraceDetector, TraceFrame, TraceFrameSource, TraceHeader};
pub use source::{Frame, FrameSource, LandmarkDetector};
