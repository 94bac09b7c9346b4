//! Simulation tuning knobs.
//!
//! The store carries no persisted configuration; these structs exist so
//! embedding applications and tests can tune the simulated timelines.
//! Defaults match the shipped product behavior.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timing and pacing for simulated upload timelines.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct UploadConfig {
    /// Interval between progress ticks, in milliseconds.
    pub tick_interval_ms: u64,
    /// Lower bound of the random progress increment per tick.
    pub min_increment: f64,
    /// Upper bound of the random progress increment per tick.
    pub max_increment: f64,
    /// How long a completed task stays visible before expiry, in milliseconds.
    pub completed_linger_ms: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 200,
            min_increment: 0.0,
            max_increment: 15.0,
            completed_linger_ms: 2000,
        }
    }
}

impl UploadConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn completed_linger(&self) -> Duration {
        Duration::from_millis(self.completed_linger_ms)
    }
}

/// Pacing for the simulated assistant.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct AssistantConfig {
    /// Delay before the assistant reply lands, in milliseconds.
    pub typing_delay_ms: u64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: 1500,
        }
    }
}

impl AssistantConfig {
    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }
}

/// Root configuration for all simulated behavior.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SimulationConfig {
    pub upload: UploadConfig,
    pub assistant: AssistantConfig,
}
