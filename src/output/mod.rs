//! Terminal output formatting
//!
//! Display utilities for CLI results, as colored tiles or JSON.

pub mod display;
pub mod formatters;

pub use display::{
    print_added, print_check_result, print_feedback, print_guess_outcome, print_json,
    print_pick_result,
};
