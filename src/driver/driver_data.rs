//! Driver Data - Pure DOP
//!
//! NO METHODS. Just data.

use serde::{Deserialize, Serialize};

/// Oscillates a control value between `min` and `max`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PingPongDriverData {
    /// Full sweeps from min to max per second
    pub speed: f32,
    pub min: f32,
    pub max: f32,
}

impl Default for PingPongDriverData {
    fn default() -> Self {
        Self {
            speed: 1.0,
            min: 0.0,
            max: 1.0,
        }
    }
}
