//! Cursor control capability.
//!
//! The sink is the only part of the crate that touches the OS. It is
//! selected once at startup by [`platform_sink`] and injected into the
//! session; the control loop itself never branches on the platform.

pub mod noop;

#[cfg(target_os = "windows")]
pub mod windows;

pub use noop::NoOpCursorSink;

#[cfg(target_os = "windows")]
pub use windows::WindowsCursorSink;

use crate::gesture::MouseButton;
use crate::ControlResult;

/// OS cursor injection boundary.
///
/// Both operations are fire-and-forget: the caller does not wait on the
/// cursor actually moving, and a failed call is logged and dropped rather
/// than ending the session.
pub trait CursorSink {
    /// Short sink name for logs.
    fn name(&self) -> &str;

    /// Position the cursor at the given screen pixel.
    fn move_to(&mut self, x: i32, y: i32) -> ControlResult<()>;

    /// Press and release a mouse button at the current cursor position.
    fn click(&mut self, button: MouseButton) -> ControlResult<()>;
}

/// Select the cursor sink for the current platform.
///
/// Windows gets the real input-injecting sink. Every other platform falls
/// back to [`NoOpCursorSink`], which warns once and drops actions, so the
/// pipeline still runs end to end.
pub fn platform_sink() -> Box<dyn CursorSink> {
    #[cfg(target_os = "windows")]
    {
        Box::new(WindowsCursorSink::new())
    }
    #[cfg(not(target_os = "windows"))]
    {
        Box::new(NoOpCursorSink::new())
    }
}
