//! Simulation run
//!
//! One full recomputation of all four components from the current
//! parameters. Nothing survives between runs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::handover::{HandoverOutcome, WinRateEstimate};
use crate::params::SimulationParameters;
use crate::power::PowerProfile;
use crate::qos::{self, QosDescriptor};
use crate::spreader::Spreading;

/// Everything derived from one set of parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationRun {
    pub params: SimulationParameters,
    pub spreading: Spreading,
    pub power: PowerProfile,
    pub handover: HandoverOutcome,
    pub qos: QosDescriptor,
    /// Cell A's win rate over extra handover draws, when requested
    pub handover_win_rate: Option<WinRateEstimate>,
}

impl SimulationRun {
    /// Attach a win-rate estimate from `trials` further handover draws
    ///
    /// Zero trials leaves the run untouched.
    pub fn with_win_rate<R: Rng + ?Sized>(mut self, rng: &mut R, trials: usize) -> Self {
        if trials > 0 {
            self.handover_win_rate = Some(WinRateEstimate::sample(
                rng,
                self.params.distance_km(),
                trials,
            ));
        }
        self
    }
}

/// Run every component against `rng`
///
/// Draw order is fixed (chips, data bits, cell A, cell B) so a seeded
/// generator reproduces the whole run.
pub fn run<R: Rng + ?Sized>(params: &SimulationParameters, rng: &mut R) -> SimulationRun {
    tracing::debug!(
        users = params.users(),
        spreading_factor = params.spreading_factor(),
        distance_km = params.distance_km(),
        qos_class = %params.qos_class(),
        "starting simulation run"
    );

    let spreading = Spreading::generate(rng, params.users(), params.spreading_factor());
    let power = PowerProfile::compute(params.distance_km(), params.users());
    let handover = HandoverOutcome::select(rng, params.distance_km());
    let qos = qos::lookup(params.qos_class());

    SimulationRun {
        params: *params,
        spreading,
        power,
        handover,
        qos,
        handover_win_rate: None,
    }
}

/// Run with a fresh `StdRng` seeded from `seed`
pub fn run_seeded(params: &SimulationParameters, seed: u64) -> SimulationRun {
    let mut rng = StdRng::seed_from_u64(seed);
    run(params, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handover::Cell;
    use crate::params::QosClass;

    #[test]
    fn test_run_shapes() {
        let params = SimulationParameters::new(5, 12, 3.3, QosClass::Interactive).unwrap();
        let run = run_seeded(&params, 42);
        assert_eq!(run.spreading.composite.len(), 12);
        assert_eq!(run.spreading.data_bits.len(), 5);
        assert_eq!(run.power.received_power.len(), 5);
        assert!(matches!(run.handover.winner, Cell::A | Cell::B));
        assert_eq!(run.qos.latency, "Medium");
    }

    #[test]
    fn test_seeded_runs_match() {
        let params = SimulationParameters::default();
        assert_eq!(run_seeded(&params, 17), run_seeded(&params, 17));
    }

    #[test]
    fn test_win_rate_attached_only_when_requested() {
        let params = SimulationParameters::new(3, 8, 0.5, QosClass::Streaming).unwrap();
        let mut rng = StdRng::seed_from_u64(4);

        let plain = run(&params, &mut rng).with_win_rate(&mut rng, 0);
        assert_eq!(plain.handover_win_rate, None);

        let estimated = run(&params, &mut rng).with_win_rate(&mut rng, 500);
        let estimate = estimated.handover_win_rate.unwrap();
        assert_eq!(estimate.trials, 500);
        // at 0.5 km cell A is always the stronger cell
        assert_eq!(estimate.cell_a_rate, 1.0);
    }

    #[test]
    fn test_run_accepts_unsized_rng() {
        let params = SimulationParameters::default();
        let mut rng = StdRng::seed_from_u64(3);
        let dyn_rng: &mut dyn rand::RngCore = &mut rng;
        let run = run(&params, dyn_rng);
        assert_eq!(run.spreading.composite.len(), 8);
    }
}
