//! Frame-by-frame control loop.
//!
//! Single-threaded and synchronous: frames are read, classified and acted
//! on strictly in capture order, one at a time. There is no queueing and
//! no skip-ahead; a slow detector simply lowers the effective frame rate.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex as ParkingMutex;
use tracing::{debug, info, warn};

use crate::gesture::{CooldownGate, GestureAction, GestureClassifier};
use crate::runtime::config::ControlConfig;
use crate::sink::CursorSink;
use crate::tracking::{FingerState, FrameSource, LandmarkDetector};
use crate::ControlResult;

/// Counters accumulated over one session run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Frames read from the source
    pub frames: u64,
    /// Frames where no hand was detected
    pub frames_without_hand: u64,
    /// Pointer moves from the single-finger gesture
    pub moves: u64,
    /// Pointer moves from the two-finger pan gesture
    pub pans: u64,
    /// Clicks that fired (left and right)
    pub clicks: u64,
    /// Sink calls that failed and were dropped
    pub sink_errors: u64,
}

/// One gesture control run over a frame source and detector.
///
/// Owns the classifier state and the cursor sink. The session itself stays
/// on the calling thread; only the stop flag and the stats handle are
/// shared out.
pub struct ControlSession {
    config: ControlConfig,
    classifier: GestureClassifier,
    sink: Box<dyn CursorSink>,
    stop: Arc<AtomicBool>,
    stats: Arc<ParkingMutex<SessionStats>>,
}

impl ControlSession {
    pub fn new(config: ControlConfig, sink: Box<dyn CursorSink>) -> Self {
        let classifier =
            GestureClassifier::new(config.screen, CooldownGate::new(config.cooldown));
        Self {
            config,
            classifier,
            sink,
            stop: Arc::new(AtomicBool::new(false)),
            stats: Arc::new(ParkingMutex::new(SessionStats::default())),
        }
    }

    /// Flag that ends the loop when set, e.g. from a Ctrl+C handler.
    ///
    /// Checked once per frame, so a blocking `next_frame` finishes before
    /// the stop takes effect.
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Live counters, for observation while `run` blocks another thread.
    pub fn stats_handle(&self) -> Arc<ParkingMutex<SessionStats>> {
        Arc::clone(&self.stats)
    }

    /// Snapshot of the counters.
    pub fn stats(&self) -> SessionStats {
        *self.stats.lock()
    }

    /// Drive the loop until the source ends, a read fails, or the stop
    /// flag is raised.
    ///
    /// A frame with no detected hand is skipped without side effects. A
    /// source or detector error ends the run and is returned as-is; sink
    /// errors are logged, counted and dropped.
    pub fn run(
        &mut self,
        frames: &mut dyn FrameSource,
        detector: &mut dyn LandmarkDetector,
    ) -> ControlResult<SessionStats> {
        info!(
            "control session started (sink={}, screen={}x{}, cooldown={:?}, mirror={})",
            self.sink.name(),
            self.config.screen.width,
            self.config.screen.height,
            self.config.cooldown,
            self.config.mirror
        );

        loop {
            if self.stop.load(Ordering::SeqCst) {
                info!("stop requested");
                break;
            }

            let frame = match frames.next_frame()? {
                Some(frame) => frame,
                None => break,
            };

            let frame_count = {
                let mut stats = self.stats.lock();
                stats.frames += 1;
                stats.frames
            };
            if frame_count % 300 == 0 {
                debug!("processed {} frames", frame_count);
            }

            let hand = match detector.detect(&frame)? {
                Some(hand) if self.config.mirror => hand.mirrored(),
                Some(hand) => hand,
                None => {
                    self.stats.lock().frames_without_hand += 1;
                    continue;
                }
            };

            let fingers = FingerState::from_landmarks(&hand);
            let actions = self.classifier.classify(fingers, hand.wrist(), Instant::now());
            for action in actions {
                self.dispatch(action);
            }
        }

        let stats = self.stats();
        info!(
            "control session stopped (frames={}, moves={}, pans={}, clicks={}, no-hand={})",
            stats.frames, stats.moves, stats.pans, stats.clicks, stats.frames_without_hand
        );
        Ok(stats)
    }

    fn dispatch(&mut self, action: GestureAction) {
        let result = match action {
            GestureAction::Idle => return,
            GestureAction::MoveCursor { x, y } => {
                self.stats.lock().moves += 1;
                self.sink.move_to(x, y)
            }
            GestureAction::PanCursor { x, y } => {
                self.stats.lock().pans += 1;
                self.sink.move_to(x, y)
            }
            GestureAction::Click { button } => {
                self.stats.lock().clicks += 1;
                self.sink.click(button)
            }
        };

        if let Err(e) = result {
            self.stats.lock().sink_errors += 1;
            warn!("cursor action dropped: {}", e);
        }
    }
}
