//! One-shot handover decision between two cells
//!
//! Cell A sits at the user's origin and cell B at the far end of a 5 km
//! segment. Each cell's strength is a uniform draw in [0.4, 1.0] divided by
//! the distance to that cell. There is no hysteresis and no history, so two
//! calls at the same distance can pick different cells.

use std::fmt;

use rand::Rng;
use rand_distr::{Distribution, Uniform};
use serde::Serialize;

/// Distance between the two cell sites [km]
pub const INTER_SITE_DISTANCE_KM: f64 = 5.0;
/// Floor on the distance to either cell [km]
///
/// A user standing on cell B's site (5.0 km) would otherwise divide by zero.
/// With the floor, cell B's strength is large but finite and cell B wins.
pub const MIN_CELL_SEPARATION_KM: f64 = 1e-3;
/// Lower bound of the strength draw
pub const DRAW_LOW: f64 = 0.4;
/// Upper bound of the strength draw
pub const DRAW_HIGH: f64 = 1.0;

/// Candidate serving cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cell {
    #[serde(rename = "Cell A")]
    A,
    #[serde(rename = "Cell B")]
    B,
}

impl Cell {
    pub fn label(&self) -> &'static str {
        match self {
            Self::A => "Cell A",
            Self::B => "Cell B",
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of one handover decision
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HandoverOutcome {
    pub cell_a_strength: f64,
    pub cell_b_strength: f64,
    pub winner: Cell,
}

impl HandoverOutcome {
    /// Decide from two draws already taken from [0.4, 1.0]
    ///
    /// Cell A must be strictly stronger to win; ties go to cell B.
    pub fn decide(draw_a: f64, draw_b: f64, distance_km: f64) -> Self {
        let to_a = distance_km.max(MIN_CELL_SEPARATION_KM);
        let to_b = (INTER_SITE_DISTANCE_KM - distance_km).max(MIN_CELL_SEPARATION_KM);

        let cell_a_strength = draw_a / to_a;
        let cell_b_strength = draw_b / to_b;
        let winner = if cell_a_strength > cell_b_strength {
            Cell::A
        } else {
            Cell::B
        };

        Self {
            cell_a_strength,
            cell_b_strength,
            winner,
        }
    }

    /// Draw both strengths from `rng` and decide
    pub fn select<R: Rng + ?Sized>(rng: &mut R, distance_km: f64) -> Self {
        let draw = Uniform::new_inclusive(DRAW_LOW, DRAW_HIGH);
        let draw_a = draw.sample(rng);
        let draw_b = draw.sample(rng);
        let outcome = Self::decide(draw_a, draw_b, distance_km);

        tracing::debug!(
            distance_km,
            cell_a = outcome.cell_a_strength,
            cell_b = outcome.cell_b_strength,
            winner = %outcome.winner,
            "handover decision"
        );

        outcome
    }
}

/// Cell A's share of repeated handover decisions at one distance
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WinRateEstimate {
    pub trials: usize,
    pub cell_a_rate: f64,
}

impl WinRateEstimate {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, distance_km: f64, trials: usize) -> Self {
        Self {
            trials,
            cell_a_rate: cell_a_win_rate(rng, distance_km, trials),
        }
    }
}

/// Fraction of `trials` independent decisions won by cell A
pub fn cell_a_win_rate<R: Rng + ?Sized>(rng: &mut R, distance_km: f64, trials: usize) -> f64 {
    if trials == 0 {
        return 0.0;
    }

    let wins = (0..trials)
        .filter(|_| HandoverOutcome::select(rng, distance_km).winner == Cell::A)
        .count();
    wins as f64 / trials as f64
}
