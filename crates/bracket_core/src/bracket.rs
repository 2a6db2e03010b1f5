//! Region grouping and first-round matchups

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Teams per region in a standard 64-team field
pub const DEFAULT_REGION_SIZE: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BracketError {
    #[error("A bracket needs at least one group")]
    InvalidGroupCount,

    #[error("Region size must be positive")]
    InvalidRegionSize,
}

/// A first-round pairing. `away` is empty only for the last entry of an
/// odd-sized region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchup {
    pub home: String,
    pub away: Option<String>,
}

impl fmt::Display for Matchup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.away {
            Some(away) => write!(f, "{} vs {}", self.home, away),
            None => write!(f, "{} (unpaired)", self.home),
        }
    }
}

/// One contiguous slice of the field, paired off in input order
pub type Region = Vec<Matchup>;

/// Split `teams` into `num_groups` contiguous regions of equal size and pair
/// neighbours (0 & 1, 2 & 3, ...) within each region.
///
/// The region size is `teams.len() / num_groups`; teams past
/// `num_groups * region_size` are dropped, not redistributed.
pub fn group(teams: &[String], num_groups: usize) -> Result<Vec<Region>, BracketError> {
    if num_groups == 0 {
        return Err(BracketError::InvalidGroupCount);
    }

    let group_size = teams.len() / num_groups;
    let dropped = teams.len() - group_size * num_groups;
    if dropped > 0 {
        tracing::warn!(
            dropped,
            num_groups,
            "field does not divide evenly into regions; trailing teams left out"
        );
    }

    let regions = (0..num_groups)
        .map(|g| {
            let slice = &teams[g * group_size..(g + 1) * group_size];
            slice
                .chunks(2)
                .map(|pair| Matchup {
                    home: pair[0].clone(),
                    away: pair.get(1).cloned(),
                })
                .collect()
        })
        .collect();

    Ok(regions)
}

/// Group the field into blocks of `region_size`, always at least one region
pub fn regions_for(teams: &[String], region_size: usize) -> Result<Vec<Region>, BracketError> {
    if region_size == 0 {
        return Err(BracketError::InvalidRegionSize);
    }
    let num_groups = (teams.len() / region_size).max(1);
    group(teams, num_groups)
}

#[cfg(test)]
#[path = "bracket_tests.rs"]
mod bracket_tests;
