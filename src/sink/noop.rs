//! Fallback sink for platforms without cursor injection.

use tracing::{debug, warn};

use crate::gesture::MouseButton;
use crate::sink::CursorSink;
use crate::ControlResult;

/// Sink that drops every action.
///
/// Used when the current platform has no cursor injection support, and in
/// dry runs where classification should happen without moving anything.
/// The first dropped action logs a warning; later ones are counted and
/// logged at debug level.
#[derive(Debug, Default)]
pub struct NoOpCursorSink {
    dropped: u64,
    warned: bool,
}

impl NoOpCursorSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of actions dropped so far.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    fn note_drop(&mut self) {
        if !self.warned {
            warn!("cursor control is not active on this platform; dropping actions");
            self.warned = true;
        }
        self.dropped += 1;
    }
}

impl CursorSink for NoOpCursorSink {
    fn name(&self) -> &str {
        "noop"
    }

    fn move_to(&mut self, x: i32, y: i32) -> ControlResult<()> {
        self.note_drop();
        debug!("dropped cursor move to ({}, {})", x, y);
        Ok(())
    }

    fn click(&mut self, button: MouseButton) -> ControlResult<()> {
        self.note_drop();
        debug!("dropped {} click", button);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_are_dropped_not_failed() {
        let mut sink = NoOpCursorSink::new();

        assert!(sink.move_to(100, 200).is_ok());
        assert!(sink.click(MouseButton::Left).is_ok());
        assert!(sink.click(MouseButton::Right).is_ok());
        assert_eq!(sink.dropped(), 3);
    }

    #[test]
    fn test_fresh_sink_has_dropped_nothing() {
        assert_eq!(NoOpCursorSink::new().dropped(), 0);
    }
}
