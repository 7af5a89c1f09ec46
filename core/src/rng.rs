//! Deterministic random number generation.
//!
//! RULE: No generator may call any platform RNG.
//! All randomness flows through StreamRng instances derived
//! from the single seed handed to `Datasets::generate`.
//!
//! Each dataset gets its own RNG stream, seeded deterministically
//! from (seed XOR slot_index * phi64). This means:
//!   - Adding a new dataset never changes existing datasets' streams.
//!   - Each dataset's stream is fully reproducible in isolation.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG for a single dataset.
pub struct StreamRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl StreamRng {
    /// Create a stream from the master seed and a stable slot index.
    /// The index must never change once assigned.
    pub fn new(master_seed: u64, slot_index: u64) -> Self {
        let derived_seed = master_seed ^ (slot_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        use rand::RngCore;
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Roll a float in [lo, hi).
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// Symmetric noise in [-amplitude, amplitude).
    pub fn noise(&mut self, amplitude: f64) -> f64 {
        (self.next_f64() - 0.5) * 2.0 * amplitude
    }

    /// Roll an integer in [lo, hi]. Returns `lo` when the range is inverted.
    pub fn int_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        lo + self.next_u64_below(u64::from(hi - lo) + 1) as u32
    }

    /// Pick one element uniformly. `None` for an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.next_u64_below(items.len() as u64) as usize;
        items.get(idx)
    }
}

/// All dataset RNGs for one generation pass, indexed by stable slot.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn for_dataset(&self, slot: DatasetSlot) -> StreamRng {
        StreamRng::new(self.master_seed, slot as u64).with_name(slot.name())
    }
}

/// Stable dataset slot assignments.
/// NEVER reorder or remove entries, only append.
/// Reordering changes every dataset's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum DatasetSlot {
    Churn = 0,
    RealEstate = 1,
    AbTest = 2,
    Sales = 3,
}

impl DatasetSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Churn => "churn",
            Self::RealEstate => "real_estate",
            Self::AbTest => "ab_test",
            Self::Sales => "sales",
        }
    }
}
