//! Terminal output formatting
//!
//! Banners and prompts for a round, written to any `Write` sink.

pub mod display;
pub mod formatters;

pub use display::{
    print_continue_prompt, print_farewell, print_guess_prompt, print_masked, print_outcome,
    print_title,
};
