//! Simulation parameters
//!
//! The four inputs of the control surface, range-checked once on entry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::UmtsError;

pub const MIN_USERS: usize = 1;
pub const MAX_USERS: usize = 10;
pub const MIN_SPREADING_FACTOR: usize = 2;
pub const MAX_SPREADING_FACTOR: usize = 16;
pub const MIN_DISTANCE_KM: f64 = 0.1;
pub const MAX_DISTANCE_KM: f64 = 5.0;

/// UMTS traffic class
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum QosClass {
    #[default]
    Conversational,
    Streaming,
    Interactive,
    Background,
}

impl QosClass {
    /// All classes in table order
    pub const ALL: [QosClass; 4] = [
        QosClass::Conversational,
        QosClass::Streaming,
        QosClass::Interactive,
        QosClass::Background,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Conversational => "Conversational",
            Self::Streaming => "Streaming",
            Self::Interactive => "Interactive",
            Self::Background => "Background",
        }
    }
}

impl fmt::Display for QosClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for QosClass {
    type Err = UmtsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|class| class.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UmtsError::UnknownQosClass(s.to_string()))
    }
}

impl TryFrom<String> for QosClass {
    type Error = UmtsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Inputs for one simulation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationParameters {
    users: usize,
    spreading_factor: usize,
    distance_km: f64,
    qos_class: QosClass,
}

impl SimulationParameters {
    /// Create parameters, rejecting anything outside the control ranges
    pub fn new(
        users: usize,
        spreading_factor: usize,
        distance_km: f64,
        qos_class: QosClass,
    ) -> Result<Self, UmtsError> {
        check_range("users", users as f64, MIN_USERS as f64, MAX_USERS as f64)?;
        check_range(
            "spreading_factor",
            spreading_factor as f64,
            MIN_SPREADING_FACTOR as f64,
            MAX_SPREADING_FACTOR as f64,
        )?;
        check_range("distance_km", distance_km, MIN_DISTANCE_KM, MAX_DISTANCE_KM)?;

        Ok(Self {
            users,
            spreading_factor,
            distance_km,
            qos_class,
        })
    }

    pub fn users(&self) -> usize {
        self.users
    }

    pub fn spreading_factor(&self) -> usize {
        self.spreading_factor
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn qos_class(&self) -> QosClass {
        self.qos_class
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            users: 3,
            spreading_factor: 8,
            distance_km: 1.0,
            qos_class: QosClass::Conversational,
        }
    }
}

fn check_range(name: &'static str, got: f64, min: f64, max: f64) -> Result<(), UmtsError> {
    // NaN falls through to the error branch
    if got >= min && got <= max {
        Ok(())
    } else {
        Err(UmtsError::InvalidParameter {
            name,
            min,
            max,
            got,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_in_range() {
        let d = SimulationParameters::default();
        let checked =
            SimulationParameters::new(d.users(), d.spreading_factor(), d.distance_km(), d.qos_class())
                .unwrap();
        assert_eq!(checked, d);
    }

    #[test]
    fn test_range_edges_accepted() {
        assert!(SimulationParameters::new(1, 2, 0.1, QosClass::Background).is_ok());
        assert!(SimulationParameters::new(10, 16, 5.0, QosClass::Streaming).is_ok());
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(SimulationParameters::new(0, 8, 1.0, QosClass::Streaming).is_err());
        assert!(SimulationParameters::new(11, 8, 1.0, QosClass::Streaming).is_err());
        assert!(SimulationParameters::new(3, 1, 1.0, QosClass::Streaming).is_err());
        assert!(SimulationParameters::new(3, 17, 1.0, QosClass::Streaming).is_err());
        assert!(SimulationParameters::new(3, 8, 0.0, QosClass::Streaming).is_err());
        assert!(SimulationParameters::new(3, 8, 5.1, QosClass::Streaming).is_err());
        assert!(SimulationParameters::new(3, 8, f64::NAN, QosClass::Streaming).is_err());
    }

    #[test]
    fn test_error_names_the_parameter() {
        let err = SimulationParameters::new(3, 8, 7.5, QosClass::Streaming).unwrap_err();
        assert_eq!(err.to_string(), "distance_km must be in [0.1, 5], got 7.5");
    }

    #[test]
    fn test_qos_class_parse() {
        assert_eq!("streaming".parse::<QosClass>().unwrap(), QosClass::Streaming);
        assert_eq!(" Background ".parse::<QosClass>().unwrap(), QosClass::Background);
        assert!("premium".parse::<QosClass>().is_err());
    }

    #[test]
    fn test_qos_class_deserialize_any_case() {
        let class: QosClass = serde_json::from_str(r#""interactive""#).unwrap();
        assert_eq!(class, QosClass::Interactive);
        let class: QosClass = serde_json::from_str(r#""STREAMING""#).unwrap();
        assert_eq!(class, QosClass::Streaming);

        let err = serde_json::from_str::<QosClass>(r#""premium""#).unwrap_err();
        assert!(err.to_string().contains("unknown QoS class: premium"));
    }

    #[test]
    fn test_qos_class_serializes_label() {
        let json = serde_json::to_string(&QosClass::Background).unwrap();
        assert_eq!(json, r#""Background""#);
    }
}
