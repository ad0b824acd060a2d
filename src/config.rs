use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::params::{QosClass, SimulationParameters};
use crate::UmtsError;

/// Runtime configuration for one visualizer invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of users sharing the channel
    pub users: usize,
    /// Chips per data bit
    pub spreading_factor: usize,
    /// User distance from cell A [km]
    pub distance_km: f64,
    /// Traffic class to describe
    pub qos_class: QosClass,
    /// RNG seed; `None` draws fresh entropy every run
    pub seed: Option<u64>,
    /// Extra handover draws used to estimate cell A's win rate; 0 disables
    pub handover_trials: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        let params = SimulationParameters::default();
        Self {
            users: params.users(),
            spreading_factor: params.spreading_factor(),
            distance_km: params.distance_km(),
            qos_class: params.qos_class(),
            seed: None,
            handover_trials: 0,
        }
    }
}

/// Values given on the command line; `None` keeps the configured value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub users: Option<usize>,
    pub spreading_factor: Option<usize>,
    pub distance_km: Option<f64>,
    pub qos_class: Option<QosClass>,
    pub seed: Option<u64>,
    pub handover_trials: Option<usize>,
}

impl SimConfig {
    /// Replace every field that has an override
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.users {
            self.users = v;
        }
        if let Some(v) = overrides.spreading_factor {
            self.spreading_factor = v;
        }
        if let Some(v) = overrides.distance_km {
            self.distance_km = v;
        }
        if let Some(v) = overrides.qos_class {
            self.qos_class = v;
        }
        if let Some(v) = overrides.seed {
            self.seed = Some(v);
        }
        if let Some(v) = overrides.handover_trials {
            self.handover_trials = v;
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, UmtsError> {
        let raw = fs::read_to_string(path)?;
        let config: SimConfig = serde_json::from_str(&raw)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<SimulationParameters, UmtsError> {
        SimulationParameters::new(
            self.users,
            self.spreading_factor,
            self.distance_km,
            self.qos_class,
        )
    }
}
