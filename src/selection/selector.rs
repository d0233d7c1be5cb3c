//! Target word selection policies
//!
//! Defines the Selector trait and its two implementations: the indexed
//! selector used for random puzzles and the seeded selector used for daily
//! puzzles.

use super::rng::draw_index;
use log::debug;

/// A policy for choosing one word from a candidate set
pub trait Selector {
    /// Choose a candidate using `seed`
    ///
    /// Returns `None` if `candidates` is empty.
    fn choose<'a>(&self, candidates: &[&'a str], seed: i64) -> Option<&'a str>;
}

/// Enum wrapper for all selector types
///
/// Allows runtime selection of the policy while keeping static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorType {
    /// Seed doubles as a direct index (random puzzles)
    Indexed(IndexedSelector),
    /// Seed only ever feeds the generator (daily puzzles)
    Seeded(SeededSelector),
}

impl Selector for SelectorType {
    fn choose<'a>(&self, candidates: &[&'a str], seed: i64) -> Option<&'a str> {
        match self {
            Self::Indexed(s) => s.choose(candidates, seed),
            Self::Seeded(s) => s.choose(candidates, seed),
        }
    }
}

impl SelectorType {
    /// Create selector from name string
    ///
    /// Supported names: "indexed", "random", "seeded", "daily".
    /// Defaults to indexed if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "seeded" | "daily" => Self::Seeded(SeededSelector),
            _ => Self::Indexed(IndexedSelector),
        }
    }
}

/// Seed-as-index selector
///
/// A seed in `[0, len)` is used directly as an index into the candidates, so
/// small non-negative seeds are fully predictable (seed 0 is always the first
/// candidate in load order). Any other seed feeds the generator.
///
/// This dual use of the seed is part of the public contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexedSelector;

impl Selector for IndexedSelector {
    fn choose<'a>(&self, candidates: &[&'a str], seed: i64) -> Option<&'a str> {
        if candidates.is_empty() {
            return None;
        }

        let index = match usize::try_from(seed) {
            Ok(index) if index < candidates.len() => {
                debug!("Seed {seed} used as index into {} candidates", candidates.len());
                index
            }
            _ => {
                let index = draw_index(seed, candidates.len());
                debug!("Seed {seed} drew index {index} of {}", candidates.len());
                index
            }
        };

        candidates.get(index).copied()
    }
}

/// Generator-only selector
///
/// Every call draws from the generator keyed by the seed; the unspecified
/// seed falls back to the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeededSelector;

impl Selector for SeededSelector {
    fn choose<'a>(&self, candidates: &[&'a str], seed: i64) -> Option<&'a str> {
        if candidates.is_empty() {
            return None;
        }

        let index = draw_index(seed, candidates.len());
        debug!("Seed {seed} drew daily index {index} of {}", candidates.len());
        candidates.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRUIT: [&str; 4] = ["apple", "grape", "berry", "melon"];

    #[test]
    fn indexed_uses_seed_as_index_in_range() {
        for (i, &expected) in FRUIT.iter().enumerate() {
            let seed = i64::try_from(i).unwrap();
            assert_eq!(IndexedSelector.choose(&FRUIT, seed), Some(expected));
        }
    }

    #[test]
    fn indexed_seed_zero_is_first_candidate() {
        assert_eq!(IndexedSelector.choose(&FRUIT, 0), Some("apple"));
        assert_eq!(IndexedSelector.choose(&FRUIT, 0), Some("apple"));
    }

    #[test]
    fn indexed_out_of_range_seed_is_reproducible() {
        for seed in [4, 5, 100, -1, -42, i64::MAX, i64::MIN] {
            let first = IndexedSelector.choose(&FRUIT, seed);
            assert!(first.is_some());
            assert_eq!(first, IndexedSelector.choose(&FRUIT, seed));
            assert!(FRUIT.contains(&first.unwrap()));
        }
    }

    #[test]
    fn indexed_out_of_range_matches_generator() {
        let index = draw_index(100, FRUIT.len());
        assert_eq!(IndexedSelector.choose(&FRUIT, 100), Some(FRUIT[index]));
    }

    #[test]
    fn seeded_never_uses_seed_as_index() {
        let index = draw_index(2, FRUIT.len());
        assert_eq!(SeededSelector.choose(&FRUIT, 2), Some(FRUIT[index]));
    }

    #[test]
    fn seeded_is_reproducible() {
        for seed in [1, 2, 3, -7, 1_000_000] {
            assert_eq!(
                SeededSelector.choose(&FRUIT, seed),
                SeededSelector.choose(&FRUIT, seed)
            );
        }
    }

    #[test]
    fn empty_candidates() {
        assert_eq!(IndexedSelector.choose(&[], 0), None);
        assert_eq!(SeededSelector.choose(&[], 5), None);
    }

    #[test]
    fn selector_type_from_name() {
        assert_eq!(
            SelectorType::from_name("daily"),
            SelectorType::Seeded(SeededSelector)
        );
        assert_eq!(
            SelectorType::from_name("seeded"),
            SelectorType::Seeded(SeededSelector)
        );
        assert_eq!(
            SelectorType::from_name("indexed"),
            SelectorType::Indexed(IndexedSelector)
        );
        assert_eq!(
            SelectorType::from_name("whatever"),
            SelectorType::Indexed(IndexedSelector)
        );
    }

    #[test]
    fn selector_type_dispatches() {
        let indexed = SelectorType::from_name("indexed");
        assert_eq!(indexed.choose(&FRUIT, 3), Some("melon"));
    }
}
