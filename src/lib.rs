//! UMTS Viz - 3G radio concepts for the classroom
//!
//! Four independent toy simulations recomputed from scratch on every run:
//! CDMA code spreading, open-loop power control, a one-shot handover
//! decision and the static UMTS QoS class table.

pub mod config;
pub mod handover;
pub mod output;
pub mod params;
pub mod power;
pub mod qos;
pub mod report;
pub mod sim;
pub mod spreader;

use thiserror::Error;

// Re-export main types
pub use config::{ConfigOverrides, SimConfig};
pub use handover::{Cell, HandoverOutcome, WinRateEstimate};
pub use params::{QosClass, SimulationParameters};
pub use power::PowerProfile;
pub use qos::QosDescriptor;
pub use sim::{run, run_seeded, SimulationRun};
pub use spreader::Spreading;

#[derive(Debug, Error)]
pub enum UmtsError {
    #[error("io error")]
    Io(#[from] std::io::Error),
    #[error("json error")]
    Json(#[from] serde_json::Error),
    #[error("{name} must be in [{min}, {max}], got {got}")]
    InvalidParameter {
        name: &'static str,
        min: f64,
        max: f64,
        got: f64,
    },
    #[error("unknown QoS class: {0}")]
    UnknownQosClass(String),
    #[error("plot error: {0}")]
    Plot(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_wrapped_errors_keep_cause_as_source() {
        let json_err = serde_json::from_str::<SimConfig>("{").unwrap_err();
        let cause = json_err.to_string();
        let err = UmtsError::from(json_err);

        assert_eq!(err.to_string(), "json error");
        assert_eq!(err.source().map(|s| s.to_string()), Some(cause));
    }

    #[test]
    fn test_chain_prints_cause_once() {
        let err = anyhow::Error::new(UmtsError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        )))
        .context("failed to load config c.json");

        assert_eq!(
            format!("{err:#}"),
            "failed to load config c.json: io error: no such file"
        );
    }
}
