//! Hungman
//!
//! A console word-guessing game: an answer is drawn from a word list, shown
//! with a random half of its characters hidden, and the player gets one guess.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hungman::game::run_session;
//! use hungman::random::SeededRandom;
//! use hungman::wordlists::load_from_file;
//!
//! let words = load_from_file("words.txt").unwrap();
//! let mut rng = SeededRandom::from_clock();
//! let mut input = std::io::stdin().lock();
//! let mut output = std::io::stdout().lock();
//! run_session(&words, &mut rng, &mut input, &mut output).unwrap();
//! ```

// Core domain types
pub mod core;

// Seeded random source
pub mod random;

// Word lists
pub mod wordlists;

// Rounds and the session loop
pub mod game;

// Terminal output formatting
pub mod output;
