//! Bracket simulator
//!
//! This crate provides infrastructure for:
//! - Loading a seeded field of teams with starting Elo ratings
//! - Playing a single-elimination bracket round by round
//! - Exporting each round's survivors and ratings to CSV/JSON
//!
//! # Usage
//!
//! ```bash
//! # Simulate a bracket and write the round log
//! cargo run -p tournament -- --input teams.json --output results.csv
//!
//! # Reproducible run with a JSON summary
//! cargo run -p tournament -- --input teams.json --output results.csv --seed 7 --summary run.json
//! ```

mod config;
mod error;
mod input;
pub mod logging;
mod results;
mod simulator;

pub use config::*;
pub use error::*;
pub use input::*;
pub use results::*;
pub use simulator::*;
