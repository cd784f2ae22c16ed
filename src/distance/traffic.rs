//! Per-edge traffic multipliers.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of congestion multipliers applied to great-circle distances.
///
/// Implementations must be symmetric in `(i, j)` and independent of the
/// order in which edges are evaluated, so graph construction stays
/// reproducible.
pub trait TrafficModel {
    /// Congestion multiplier for the edge between nodes `i` and `j`.
    ///
    /// Expected to lie in `[1.0, 1.2)`.
    fn multiplier(&self, i: usize, j: usize) -> f64;
}

/// Deterministic traffic model keyed by a request-level seed.
///
/// Each unordered node pair gets its own RNG stream derived from the
/// seed and the pair, so the multiplier for an edge is the same no
/// matter when or in what order the edge is computed.
///
/// # Examples
///
/// ```
/// use fleet_routing::distance::{SeededTraffic, TrafficModel};
///
/// let traffic = SeededTraffic::new(7);
/// let m = traffic.multiplier(1, 4);
/// assert!((1.0..1.2).contains(&m));
/// assert_eq!(m, traffic.multiplier(4, 1));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SeededTraffic {
    seed: u64,
}

impl SeededTraffic {
    /// Creates a traffic model for the given request seed.
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    fn pair_seed(&self, i: usize, j: usize) -> u64 {
        let (lo, hi) = if i <= j { (i, j) } else { (j, i) };
        let key = (lo as u64)
            .wrapping_mul(0x9e37_79b9_7f4a_7c15)
            .wrapping_add(hi as u64)
            .wrapping_mul(0xbf58_476d_1ce4_e5b9);
        self.seed ^ key
    }
}

impl TrafficModel for SeededTraffic {
    fn multiplier(&self, i: usize, j: usize) -> f64 {
        let mut rng = StdRng::seed_from_u64(self.pair_seed(i, j));
        1.0 + rng.random_range(0.0..0.2)
    }
}

/// Traffic model that applies no congestion at all.
///
/// Useful for tests and for reasoning about raw great-circle distances.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreeFlow;

impl TrafficModel for FreeFlow {
    fn multiplier(&self, _i: usize, _j: usize) -> f64 {
        1.0
    }
}
