//! Core rating model for single-elimination bracket simulations
//!
//! This crate provides:
//! - Elo win-probability prediction and rating updates
//! - A rating store keyed by team name
//! - Grouping of an ordered field into regions of first-round matchups
//!
//! The round-by-round driver lives in the `tournament` crate.

pub mod bracket;
pub mod elo;
pub mod types;

pub use bracket::*;
pub use elo::*;
pub use types::*;
