//! Loop settings
//!
//! Native builds read JSON from the `SHUTTLE_RALLY_SETTINGS` environment
//! variable; the browser build always uses defaults.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SUBSTEPS, TICK_PERIOD_MS};

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Milliseconds between simulation ticks (fixed for a session)
    pub tick_period_ms: f64,
    /// Maximum ticks caught up in a single pump
    pub max_substeps: u32,
    /// Fixed seed for reproducible sessions; random when absent
    pub seed: Option<u64>,

    // === Demo player ===
    /// Tick limit for the headless demo run
    pub demo_max_ticks: u64,
    /// Fraction of the distance to the shuttle the demo racket covers per tick
    pub demo_lag: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_period_ms: TICK_PERIOD_MS,
            max_substeps: MAX_SUBSTEPS,
            seed: None,
            demo_max_ticks: 20_000,
            demo_lag: 0.15,
        }
    }
}

impl Settings {
    /// Environment variable holding JSON settings (native only)
    pub const ENV_VAR: &'static str = "SHUTTLE_RALLY_SETTINGS";

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Replace out-of-range values with defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !self.tick_period_ms.is_finite() || self.tick_period_ms <= 0.0 {
            log::warn!(
                "Invalid tick_period_ms {}, using {}",
                self.tick_period_ms,
                defaults.tick_period_ms
            );
            self.tick_period_ms = defaults.tick_period_ms;
        }
        if self.max_substeps == 0 {
            log::warn!("max_substeps must be at least 1, using {}", defaults.max_substeps);
            self.max_substeps = defaults.max_substeps;
        }
        if !(0.0..=1.0).contains(&self.demo_lag) {
            log::warn!("demo_lag {} outside [0, 1], using {}", self.demo_lag, defaults.demo_lag);
            self.demo_lag = defaults.demo_lag;
        }

        self
    }

    /// Load settings from the environment (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::env::var(Self::ENV_VAR) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", Self::ENV_VAR);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring {}: {}", Self::ENV_VAR, e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Browser build: defaults only
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::default()
    }
}
