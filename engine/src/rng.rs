//! Seeded pseudo-random draws for maze carving and traversal.
//!
//! The constants, the seed formula, and the draw order are load-bearing:
//! changing any of them changes every maze ever rendered.

const MULTIPLIER: u64 = 1103515245;
const INCREMENT: u64 = 12345;
const MODULUS: u64 = 1 << 31;

/// Linear congruential generator with a single integer register.
///
/// The register is seeded from the grid dimensions and then only ever
/// advanced, never reset: the traversal continues from wherever carving left
/// the state, which is what makes the combined pipeline reproducible.
#[derive(Clone, Debug)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed % MODULUS,
        }
    }

    /// Seeds from the grid dimensions so that maze shape is a pure function
    /// of grid size, across runs and processes.
    pub fn from_dimensions(rows: usize, cols: usize) -> Self {
        Self::new((rows * 1000 + cols) as u64)
    }

    /// Advances the register and returns a draw in `[0, ~1]`.
    ///
    /// The product stays below 2^61, so plain `u64` arithmetic computes the
    /// recurrence exactly.
    pub fn next(&mut self) -> f64 {
        self.state = (MULTIPLIER * self.state + INCREMENT) % MODULUS;
        self.state as f64 / (MODULUS - 1) as f64
    }

    /// In-place Fisher-Yates shuffle.
    ///
    /// Consumes exactly `seq.len() - 1` draws, in strictly decreasing index
    /// order, so callers can rely on how far one shuffle advances the
    /// register.
    pub fn shuffle<T>(&mut self, seq: &mut [T]) {
        for i in (1..seq.len()).rev() {
            let j = (self.next() * (i as f64 + 1.0)).floor() as usize;
            seq.swap(i, j);
        }
    }
}
