//! Random place selection
//!
//! The random source is an explicit, injectable trait so selection can be
//! made deterministic (in tests and via `--seed`) instead of reading
//! ambient RNG state.

use crate::error::{Error, Result};
use crate::places::NormalizedPlace;
use rand::Rng;
use std::sync::Mutex;

/// Source of uniform random indices
///
/// Implementations must be thread-safe (Send + Sync).
pub trait RandomSource: Send + Sync {
    /// Returns the source name (e.g. "thread", "seeded")
    fn name(&self) -> &'static str;

    /// Draw one index uniformly from `[0, len)`
    ///
    /// `len` must be non-zero; callers guard the empty case.
    fn pick_index(&self, len: usize) -> usize;
}

/// Thread-local RNG source, the default for normal runs
#[derive(Debug, Default)]
pub struct ThreadRandom;

impl ThreadRandom {
    /// Create a new thread-local RNG source
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRandom {
    fn name(&self) -> &'static str {
        "thread"
    }

    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Seeded RNG source for reproducible selection
///
/// Using the same seed produces the same sequence of picks.
pub struct SeededRandom {
    rng: Mutex<rand::rngs::StdRng>,
}

impl SeededRandom {
    /// Create a new seeded RNG source
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self {
            rng: Mutex::new(rand::rngs::StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn name(&self) -> &'static str {
        "seeded"
    }

    fn pick_index(&self, len: usize) -> usize {
        let mut rng = self.rng.lock().unwrap();
        rng.gen_range(0..len)
    }
}

/// Get a random source, seeded when a seed is given
pub fn get_source(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom::new()),
    }
}

/// Pick one place uniformly at random from the filtered set
///
/// Fails with `EmptyResults` when no place qualifies, rather than faulting
/// on an empty range.
pub fn pick_place<'a>(
    places: &'a [NormalizedPlace],
    source: &dyn RandomSource,
) -> Result<&'a NormalizedPlace> {
    if places.is_empty() {
        return Err(Error::EmptyResults);
    }
    let index = source.pick_index(places.len());
    Ok(&places[index])
}
