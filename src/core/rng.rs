//! Deterministic random number streams

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::types::Tick;

/// Large odd constant used to spread tick numbers across seeds
const TICK_DERIVATION_PRIME: u64 = 0x9E37_79B9_7F4A_7C15;

/// Create a deterministic RNG from a seed.
pub fn create_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Derive an independent stream for one agent on one tick.
///
/// The result depends only on its inputs, so agents can be advanced in any
/// order (or in parallel) and still draw the same numbers.
pub fn derive_agent_rng(seed: u64, tick: Tick, agent_index: usize) -> ChaCha8Rng {
    // Offset by one so tick 0 never reuses the setup seed
    let mixed = seed ^ tick.wrapping_add(1).wrapping_mul(TICK_DERIVATION_PRIME);
    let mut rng = ChaCha8Rng::seed_from_u64(mixed);
    rng.set_stream(agent_index as u64);
    rng
}
