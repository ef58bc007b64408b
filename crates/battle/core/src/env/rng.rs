//! Deterministic RNG oracle for in-battle decisions.
//!
//! The only randomness inside a battle is the opponent AI picking an
//! ability and a target. Implementations must be deterministic: the same
//! seed always yields the same value, so scripted battles replay exactly
//! and the AI policy can be asserted in tests.

/// Stateless random source keyed by an explicit seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Pick a uniformly distributed index into a collection of `len`
    /// elements. `len` must be non-zero.
    fn pick_index(&self, seed: u64, len: usize) -> usize {
        debug_assert!(len > 0, "pick_index requires a non-empty collection");
        (self.next_u32(seed) as usize) % len
    }
}

/// PCG random number generator (PCG-XSH-RR variant).
///
/// Small 64-bit state, a single multiply plus xorshift and rotate, and good
/// statistical quality. Being stateless per call, it derives every output
/// purely from the seed handed in.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the LCG state by one step.
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation: xorshift high bits, then rotate by the
    /// top bits of the state.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Derive a per-decision seed from the battle seed, the decision counter,
/// and a context discriminant (distinct rolls within one decision use
/// different contexts).
pub fn compute_seed(battle_seed: u64, nonce: u64, context: u64) -> u64 {
    battle_seed
        .wrapping_mul(0x9E3779B97F4A7C15)
        .wrapping_add(nonce.wrapping_mul(0xBF58476D1CE4E5B9))
        .wrapping_add(context.wrapping_mul(0x94D049BB133111EB))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_output() {
        let rng = PcgRng;
        assert_eq!(rng.next_u32(42), rng.next_u32(42));
        assert_eq!(rng.pick_index(7, 4), rng.pick_index(7, 4));
    }

    #[test]
    fn different_seeds_diverge() {
        let rng = PcgRng;
        // Not a statistical claim, just a sanity check on the permutation.
        assert_ne!(rng.next_u32(1), rng.next_u32(2));
    }

    #[test]
    fn pick_index_stays_in_bounds() {
        let rng = PcgRng;
        for seed in 0..256u64 {
            assert!(rng.pick_index(seed, 3) < 3);
        }
    }

    #[test]
    fn decision_seeds_are_distinct_per_nonce_and_context() {
        let base = compute_seed(99, 0, 0);
        assert_ne!(base, compute_seed(99, 1, 0));
        assert_ne!(base, compute_seed(99, 0, 1));
    }
}
