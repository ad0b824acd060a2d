//! CDMA code spreading
//!
//! Every user multiplies its data bit by one shared ±1 chip sequence and the
//! base station sees the sum. This only illustrates superposition; nothing is
//! despread on the way back.

use rand::Rng;
use serde::Serialize;

/// Draw a random ±1 chip sequence of the given length
pub fn random_chips<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<i8> {
    (0..len).map(|_| random_sign(rng)).collect()
}

/// Draw one random ±1 data bit per user
pub fn random_bits<R: Rng + ?Sized>(rng: &mut R, users: usize) -> Vec<i8> {
    (0..users).map(|_| random_sign(rng)).collect()
}

fn random_sign<R: Rng + ?Sized>(rng: &mut R) -> i8 {
    if rng.gen_bool(0.5) {
        1
    } else {
        -1
    }
}

/// Spread a single data bit over the chip sequence
pub fn spread(chips: &[i8], bit: i8) -> Vec<f64> {
    chips.iter().map(|&c| f64::from(c * bit)).collect()
}

/// Elementwise sum of every user's spread signal
pub fn composite_signal(chips: &[i8], bits: &[i8]) -> Vec<f64> {
    let mut composite = vec![0.0; chips.len()];
    for &bit in bits {
        for (acc, chip) in composite.iter_mut().zip(spread(chips, bit)) {
            *acc += chip;
        }
    }
    composite
}

/// Output of one spreading step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Spreading {
    /// Shared chip sequence
    pub chips: Vec<i8>,
    /// One data bit per user
    pub data_bits: Vec<i8>,
    /// Sum of all spread signals, one sample per chip
    pub composite: Vec<f64>,
}

impl Spreading {
    /// Draw chips and data bits, then build the composite signal
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, users: usize, spreading_factor: usize) -> Self {
        let chips = random_chips(rng, spreading_factor);
        let data_bits = random_bits(rng, users);
        let composite = composite_signal(&chips, &data_bits);

        Self {
            chips,
            data_bits,
            composite,
        }
    }

    /// Spread signal of one user (zero-based), if that user exists
    pub fn user_signal(&self, user: usize) -> Option<Vec<f64>> {
        self.data_bits.get(user).map(|&bit| spread(&self.chips, bit))
    }

    pub fn users(&self) -> usize {
        self.data_bits.len()
    }
}
