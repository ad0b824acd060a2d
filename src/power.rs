//! Open-loop power control
//!
//! Received power per user under a free-space style inverse-square path loss.
//! No randomness: the same distance and user count always give the same
//! profile.

use serde::Serialize;

/// Lowest transmit power in the linear ramp
pub const TX_POWER_MIN: f64 = 0.1;
/// Highest transmit power in the linear ramp
pub const TX_POWER_MAX: f64 = 1.0;

/// Inverse-square path loss factor for a distance in km
pub fn path_loss(distance_km: f64) -> f64 {
    1.0 / (distance_km * distance_km)
}

/// `n` evenly spaced points from `start` to `end` inclusive
///
/// A single point sits at `start`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![start];
    }

    let span = end - start;
    let denom = n.saturating_sub(1) as f64;

    (0..n).map(|idx| start + span * idx as f64 / denom).collect()
}

/// Per-user power budget at one distance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerProfile {
    pub distance_km: f64,
    pub path_loss: f64,
    pub tx_power: Vec<f64>,
    pub received_power: Vec<f64>,
}

impl PowerProfile {
    pub fn compute(distance_km: f64, users: usize) -> Self {
        let path_loss = path_loss(distance_km);
        let tx_power = linspace(TX_POWER_MIN, TX_POWER_MAX, users);
        let received_power = tx_power.iter().map(|&p| p * path_loss).collect();

        Self {
            distance_km,
            path_loss,
            tx_power,
            received_power,
        }
    }

    /// Strongest received power across users
    pub fn peak(&self) -> f64 {
        self.received_power.iter().copied().fold(0.0_f64, f64::max)
    }
}
