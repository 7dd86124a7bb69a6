//! Random index source used for shuffling the word pool.
//!
//! The engine only ever needs "uniform index below a bound", so that is the
//! whole trait surface; tests substitute a deterministic implementation.

/// Uniform random index provider.
pub trait RandomSource {
    /// Returns a uniform index in `[0, bound)`. `bound` of 0 or 1 returns 0.
    fn pick(&mut self, bound: usize) -> usize;
}

/// Entropy-backed source: `getrandom` (js backend in the browser, OS entropy
/// natively). Falls back to a time-free LCG stream if entropy is unavailable,
/// so drawing a word can never fail.
pub struct EntropyRandom {
    fallback: u64,
}

impl EntropyRandom {
    pub fn new() -> Self {
        Self {
            fallback: 0x9e37_79b9_7f4a_7c15,
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        if getrandom::getrandom(&mut buf).is_ok() {
            u64::from_le_bytes(buf)
        } else {
            self.fallback = self
                .fallback
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            self.fallback
        }
    }
}

impl Default for EntropyRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropyRandom {
    fn pick(&mut self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }
        // Rejection sampling keeps the Fisher-Yates shuffle unbiased.
        let bound64 = bound as u64;
        let zone = u64::MAX - (u64::MAX % bound64);
        loop {
            let r = self.next_u64();
            if r < zone {
                return (r % bound64) as usize;
            }
        }
    }
}
