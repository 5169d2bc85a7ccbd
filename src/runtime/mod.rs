//! Session wiring: configuration and the frame-by-frame control loop.

pub mod config;
pub mod session;

pub use config::ControlConfig;
pub use session::{ControlSession, SessionStats};
