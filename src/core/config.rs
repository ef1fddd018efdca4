//! Agent configuration loaded from TOML
//!
//! Only runtime knobs live here. The decision-table thresholds are fixed
//! constants next to the tables that use them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, TacticsError};

/// Runtime configuration for one agent
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Display name announced to the engine
    pub name: String,

    /// Seed for the agent's random source (strafe choice, patrol points)
    ///
    /// The same seed and the same sensed inputs reproduce the same commands.
    pub seed: u64,

    /// Seconds a reactive turn (noise, pickup) keeps the focus before free
    /// facing resumes
    pub reactive_facing_secs: f64,

    /// Distance under which a forced destination counts as reached
    pub arrival_tolerance: f32,

    /// Length of the projection used to turn a heard rotation into an aim point
    pub noise_focus_distance: f32,

    /// Heard pickups closer than this are our own and are ignored
    pub pickup_noise_min_distance: f32,

    /// Seconds a vanished adversary's last position stays a spam target
    pub spam_window_secs: f64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: "Sentinel".to_string(),
            seed: 42,
            reactive_facing_secs: 2.0,
            arrival_tolerance: 50.0,
            noise_focus_distance: 500.0,
            pickup_noise_min_distance: 200.0,
            spam_window_secs: 1.5,
        }
    }
}

impl AgentConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: AgentConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(TacticsError::Config("name must not be empty".into()));
        }

        if self.reactive_facing_secs <= 0.0 {
            return Err(TacticsError::Config(format!(
                "reactive_facing_secs ({}) must be positive",
                self.reactive_facing_secs
            )));
        }

        if self.arrival_tolerance <= 0.0 || self.noise_focus_distance <= 0.0 {
            return Err(TacticsError::Config(
                "arrival_tolerance and noise_focus_distance must be positive".into(),
            ));
        }

        if self.pickup_noise_min_distance < 0.0 || self.spam_window_secs < 0.0 {
            return Err(TacticsError::Config(
                "pickup_noise_min_distance and spam_window_secs must not be negative".into(),
            ));
        }

        Ok(())
    }
}

/// Load and validate a config file
pub fn load_config(path: impl AsRef<Path>) -> Result<AgentConfig> {
    let contents = fs::read_to_string(path.as_ref())?;
    AgentConfig::from_toml_str(&contents)
}
