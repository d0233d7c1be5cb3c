//! Seeded index draws

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Seed value meaning "no seed given": draws fall back to the clock
pub const UNSPECIFIED_SEED: i64 = 0;

/// Build a generator for `seed`
///
/// Any non-zero seed gives the same sequence on every run. `UNSPECIFIED_SEED`
/// seeds from the current time instead.
#[must_use]
pub fn seeded_rng(seed: i64) -> StdRng {
    let raw = if seed == UNSPECIFIED_SEED {
        let now = time_seed();
        debug!("No seed given, seeding from clock ({now})");
        now
    } else {
        // Reinterpret the bits so negative seeds stay distinct
        seed as u64
    };
    StdRng::seed_from_u64(raw)
}

/// Nanoseconds since the Unix epoch, truncated to 64 bits
#[must_use]
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos() as u64)
}

/// Draw a uniform index in `[0, len)`
///
/// # Panics
/// Panics if `len` is zero; selectors reject empty candidate sets first.
#[must_use]
pub fn draw_index(seed: i64, len: usize) -> usize {
    seeded_rng(seed).random_range(0..len)
}
