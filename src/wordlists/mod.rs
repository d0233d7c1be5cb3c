//! Word lists for the game
//!
//! Provides the embedded word lists, file loading, and the owned `WordStore`.

mod embedded;
pub mod loader;
mod store;

pub use embedded::{DAILY, DAILY_COUNT, WORDS, WORDS_COUNT};
pub use store::WordStore;
