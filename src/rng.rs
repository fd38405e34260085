/*
 * Random Source Module
 *
 * This module defines the RandomSource trait used for all random draws,
 * plus its two implementations: Mulberry32 for seeded, reproducible
 * runs, and ThreadRandom for the default non-deterministic mode.
 * The caller picks an implementation once (based on the configured
 * seed) and injects it wherever random values are needed.
 */

use rand::rngs::ThreadRng;
use rand::Rng;

/// A stream of uniform values in [0, 1).
pub trait RandomSource {
    fn next(&mut self) -> f64;
}

/// Mulberry32 generator with a single 32-bit word of state.
///
/// Identical seeds yield bit-identical sequences, which keeps seeded
/// animations reproducible run to run.
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }
}

impl RandomSource for Mulberry32 {
    fn next(&mut self) -> f64 {
        // 2^32 divisor maps the full u32 range onto [0, 1)
        self.next_u32() as f64 / 4_294_967_296.0
    }
}

/// Thread-local OS-seeded generator; every draw is independent.
pub struct ThreadRandom {
    rng: ThreadRng,
}

impl ThreadRandom {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn next(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Select the random source for a configured seed: 0 is the sentinel
/// for non-deterministic animation, anything else seeds Mulberry32.
pub fn source_for_seed(seed: u32) -> Box<dyn RandomSource> {
    if seed == 0 {
        Box::new(ThreadRandom::new())
    } else {
        Box::new(Mulberry32::new(seed))
    }
}
