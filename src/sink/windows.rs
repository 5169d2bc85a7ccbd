//! Windows cursor injection.
//!
//! `SetCursorPos` handles absolute cursor placement; clicks go through
//! `SendInput` as a press/release pair at the current cursor position.

use windows::Win32::UI::Input::KeyboardAndMouse::{
    SendInput, INPUT, INPUT_0, INPUT_MOUSE, MOUSEEVENTF_LEFTDOWN, MOUSEEVENTF_LEFTUP,
    MOUSEEVENTF_RIGHTDOWN, MOUSEEVENTF_RIGHTUP, MOUSEINPUT, MOUSE_EVENT_FLAGS,
};
use windows::Win32::UI::WindowsAndMessaging::SetCursorPos;

use crate::gesture::MouseButton;
use crate::sink::CursorSink;
use crate::{ControlError, ControlResult};

/// Cursor sink backed by the Win32 input APIs.
#[derive(Debug, Default)]
pub struct WindowsCursorSink;

impl WindowsCursorSink {
    pub fn new() -> Self {
        Self
    }

    fn mouse_input(flags: MOUSE_EVENT_FLAGS) -> INPUT {
        INPUT {
            r#type: INPUT_MOUSE,
            Anonymous: INPUT_0 {
                mi: MOUSEINPUT {
                    dx: 0,
                    dy: 0,
                    mouseData: 0,
                    dwFlags: flags,
                    time: 0,
                    dwExtraInfo: 0,
                },
            },
        }
    }

    fn send_pair(down: MOUSE_EVENT_FLAGS, up: MOUSE_EVENT_FLAGS) -> ControlResult<()> {
        let inputs = [Self::mouse_input(down), Self::mouse_input(up)];
        let sent = unsafe { SendInput(&inputs, std::mem::size_of::<INPUT>() as i32) };
        if sent as usize != inputs.len() {
            return Err(ControlError::Platform(format!(
                "SendInput injected {} of {} events",
                sent,
                inputs.len()
            )));
        }
        Ok(())
    }
}

impl CursorSink for WindowsCursorSink {
    fn name(&self) -> &str {
        "windows"
    }

    fn move_to(&mut self, x: i32, y: i32) -> ControlResult<()> {
        unsafe { SetCursorPos(x, y) }
            .map_err(|e| ControlError::Platform(format!("SetCursorPos failed: {}", e)))
    }

    fn click(&mut self, button: MouseButton) -> ControlResult<()> {
        match button {
            MouseButton::Left => Self::send_pair(MOUSEEVENTF_LEFTDOWN, MOUSEEVENTF_LEFTUP),
            MouseButton::Right => Self::send_pair(MOUSEEVENTF_RIGHTDOWN, MOUSEEVENTF_RIGHTUP),
        }
    }
}
