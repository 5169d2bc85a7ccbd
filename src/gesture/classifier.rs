//! Gesture classification.
//!
//! Turns one frame's finger flags into cursor actions. Only the index and
//! middle fingers select gestures; thumb, ring and pinky are extracted but
//! never consulted. Rules are checked in priority order and exactly one
//! matches per frame.

use std::fmt;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::gesture::cooldown::CooldownGate;
use crate::tracking::{FingerState, Landmark};

/// Mouse button for discrete click actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    Left,
    Right,
}

impl MouseButton {
    pub fn as_str(&self) -> &'static str {
        match self {
            MouseButton::Left => "left",
            MouseButton::Right => "right",
        }
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Target display resolution the wrist position is projected onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenBounds {
    pub width: u32,
    pub height: u32,
}

impl ScreenBounds {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Project a normalized point onto this screen, truncating to whole
    /// pixels.
    ///
    /// The projection is a plain scale with no clamping: a point outside
    /// `[0, 1]` maps outside the screen, and the sink receives it as-is.
    pub fn project(&self, point: Landmark) -> (i32, i32) {
        (
            (point.x * self.width as f32) as i32,
            (point.y * self.height as f32) as i32,
        )
    }
}

impl Default for ScreenBounds {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

/// A single classified action for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureAction {
    /// No effect this frame
    Idle,
    /// Position the cursor at a screen pixel (pointing gesture)
    MoveCursor { x: i32, y: i32 },
    /// Press and release of a mouse button
    Click { button: MouseButton },
    /// Position the cursor while panning (two-finger gesture)
    PanCursor { x: i32, y: i32 },
}

/// Per-frame gesture classifier.
///
/// Owns the screen mapping and the one [`CooldownGate`] shared by every
/// click. State changes only through [`classify`](Self::classify); nothing
/// here is global.
#[derive(Debug, Clone, Default)]
pub struct GestureClassifier {
    screen: ScreenBounds,
    gate: CooldownGate,
}

impl GestureClassifier {
    pub fn new(screen: ScreenBounds, gate: CooldownGate) -> Self {
        Self { screen, gate }
    }

    /// The shared click gate, for inspection.
    pub fn gate(&self) -> &CooldownGate {
        &self.gate
    }

    /// Classify one frame of finger flags at time `now`.
    ///
    /// Always returns at least one action; a frame with no effect yields
    /// `[Idle]`. Rules, first match wins:
    ///
    /// 1. Index extended, middle not: the cursor follows the wrist every
    ///    frame, and a left click rides along when the gate allows it.
    /// 2. Middle extended, index not: a right click when the gate allows
    ///    it, otherwise idle.
    /// 3. Index and middle both extended: pan the cursor; the gate is
    ///    never consulted, so panning cannot delay a later click.
    /// 4. Anything else: idle.
    pub fn classify(
        &mut self,
        fingers: FingerState,
        wrist: Landmark,
        now: Instant,
    ) -> Vec<GestureAction> {
        let (x, y) = self.screen.project(wrist);

        if fingers.index && !fingers.middle {
            let mut actions = vec![GestureAction::MoveCursor { x, y }];
            if self.gate.try_fire(now) {
                debug!("left click at ({}, {})", x, y);
                actions.push(GestureAction::Click {
                    button: MouseButton::Left,
                });
            }
            actions
        } else if fingers.middle && !fingers.index {
            if self.gate.try_fire(now) {
                debug!("right click at ({}, {})", x, y);
                vec![GestureAction::Click {
                    button: MouseButton::Right,
                }]
            } else {
                vec![GestureAction::Idle]
            }
        } else if fingers.index && fingers.middle {
            vec![GestureAction::PanCursor { x, y }]
        } else {
            vec![GestureAction::Idle]
        }
    }
}
