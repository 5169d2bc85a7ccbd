//! Session configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::gesture::{ScreenBounds, DEFAULT_COOLDOWN};

/// Construction-time settings for a control session.
///
/// Fixed for the lifetime of a session; there is no runtime reload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlConfig {
    /// Display resolution the wrist position maps onto
    pub screen: ScreenBounds,
    /// Minimum interval between discrete click actions
    pub cooldown: Duration,
    /// Mirror landmarks horizontally before processing, so the selfie view
    /// of a front-facing camera tracks hand motion naturally
    pub mirror: bool,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            screen: ScreenBounds::default(),
            cooldown: DEFAULT_COOLDOWN,
            mirror: true,
        }
    }
}
