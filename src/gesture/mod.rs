//! Gesture classification over per-frame finger flags.

pub mod classifier;
pub mod cooldown;

pub use classifier::{GestureAction, GestureClassifier, MouseButton, ScreenBounds};
pub use cooldown::{CooldownGate, DEFAULT_COOLDOWN};
