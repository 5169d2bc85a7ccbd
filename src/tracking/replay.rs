//! Recorded tracking session replay.
//!
//! A trace is a JSON Lines file: one header record, then one record per
//! frame carrying the detector output for that frame. Replaying a trace
//! feeds the pipeline the exact sequence a live camera and detector pair
//! produced, with neither present. Any detector harness that writes this
//! schema can produce traces.
//!
//! [`Trace::into_pipeline`] splits a trace into a [`FrameSource`] and a
//! [`LandmarkDetector`] that advance in lockstep, one record per frame.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::tracking::landmarks::HandLandmarks;
use crate::tracking::source::{Frame, FrameSource, LandmarkDetector};
use crate::{ControlError, ControlResult};

/// Current trace format version.
pub const TRACE_VERSION: u32 = 1;

/// First record of a trace file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceHeader {
    /// Format version, checked on load
    pub version: u32,
    /// Unique id for this capture
    pub capture_id: Uuid,
    /// When the capture was recorded
    pub recorded_at: DateTime<Utc>,
    /// Source frame width in pixels
    pub width: u32,
    /// Source frame height in pixels
    pub height: u32,
}

/// One frame record: the detector output at one timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceFrame {
    /// Milliseconds since the capture started
    pub timestamp_ms: f64,
    /// Detected hand, if any
    pub hand: Option<HandLandmarks>,
}

/// A complete recorded tracking session.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub header: TraceHeader,
    pub frames: Vec<TraceFrame>,
}

impl Trace {
    /// Start an empty trace for the given frame dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            header: TraceHeader {
                version: TRACE_VERSION,
                capture_id: Uuid::new_v4(),
                recorded_at: Utc::now(),
                width,
                height,
            },
            frames: Vec::new(),
        }
    }

    /// Append one frame record.
    pub fn push_frame(&mut self, timestamp_ms: f64, hand: Option<HandLandmarks>) {
        self.frames.push(TraceFrame { timestamp_ms, hand });
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Parse a trace from a line-oriented reader.
    ///
    /// The first non-blank line must be the header; every later non-blank
    /// line is one frame record. A missing header or a version mismatch is
    /// a format error, a malformed line is a serialization error.
    pub fn read_from<R: BufRead>(reader: R) -> ControlResult<Self> {
        let mut lines = reader.lines();

        let header_line = loop {
            match lines.next() {
                Some(line) => {
                    let line = line?;
                    if !line.trim().is_empty() {
                        break line;
                    }
                }
                None => {
                    return Err(ControlError::TraceFormat(
                        "trace file has no header record".to_string(),
                    ))
                }
            }
        };

        let header: TraceHeader = serde_json::from_str(&header_line)?;
        if header.version != TRACE_VERSION {
            return Err(ControlError::TraceFormat(format!(
                "unsupported trace version {} (expected {})",
                header.version, TRACE_VERSION
            )));
        }

        let mut frames = Vec::new();
        for line in lines {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            frames.push(serde_json::from_str(&line)?);
        }

        debug!("parsed trace {} with {} frames", header.capture_id, frames.len());
        Ok(Self { header, frames })
    }

    /// Load a trace from a file on disk.
    pub fn load(path: impl AsRef<Path>) -> ControlResult<Self> {
        let file = File::open(path.as_ref())?;
        Self::read_from(BufReader::new(file))
    }

    /// Write the trace as JSON Lines.
    pub fn write_to<W: Write>(&self, mut writer: W) -> ControlResult<()> {
        let header = serde_json::to_string(&self.header)?;
        writeln!(writer, "{}", header)?;
        for frame in &self.frames {
            let line = serde_json::to_string(frame)?;
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }

    /// Save the trace to a file on disk.
    pub fn save(&self, path: impl AsRef<Path>) -> ControlResult<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Split into a frame source and detector that replay this trace in
    /// lockstep, one record per `next_frame` / `detect` pair.
    pub fn into_pipeline(self) -> (TraceFrameSource, TraceDetector) {
        let mut timestamps = VecDeque::with_capacity(self.frames.len());
        let mut hands = VecDeque::with_capacity(self.frames.len());
        for frame in self.frames {
            timestamps.push_back(frame.timestamp_ms);
            hands.push_back(frame.hand);
        }
        (
            TraceFrameSource {
                width: self.header.width,
                height: self.header.height,
                timestamps,
            },
            TraceDetector { hands },
        )
    }
}

/// Frame source that replays the timestamps of a recorded trace.
///
/// Replayed frames carry no pixel data; the paired [`TraceDetector`] serves
/// the recorded landmarks instead of looking at pixels.
#[derive(Debug)]
pub struct TraceFrameSource {
    width: u32,
    height: u32,
    timestamps: VecDeque<f64>,
}

impl FrameSource for TraceFrameSource {
    fn next_frame(&mut self) -> ControlResult<Option<Frame>> {
        Ok(self
            .timestamps
            .pop_front()
            .map(|timestamp_ms| Frame::new(Vec::new(), self.width, self.height, timestamp_ms)))
    }
}

/// Detector that replays the recorded per-frame hands.
#[derive(Debug)]
pub struct TraceDetector {
    hands: VecDeque<Option<HandLandmarks>>,
}

impl LandmarkDetector for TraceDetector {
    fn detect(&mut self, _frame: &Frame) -> ControlResult<Option<HandLandmarks>> {
        Ok(self.hands.pop_front().flatten())
    }
}
