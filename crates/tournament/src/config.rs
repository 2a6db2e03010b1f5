//! Simulation settings

use bracket_core::{EloError, EloSystem, Team, DEFAULT_K_FACTOR, DEFAULT_REGION_SIZE};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::LoadError;

/// Settings for a bracket simulation.
///
/// Every field is optional in a TOML file; missing keys take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Rating points exchanged per match
    pub k_factor: f64,
    /// Bonus for the first team of each pair (0 = neutral site)
    pub home_advantage: f64,
    /// Fixed seed for reproducible runs (None = fresh entropy)
    pub seed: Option<u64>,
    /// Teams per region when listing the bracket
    pub region_size: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            k_factor: DEFAULT_K_FACTOR,
            home_advantage: 0.0,
            seed: None,
            region_size: DEFAULT_REGION_SIZE,
        }
    }
}

impl SimConfig {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, LoadError> {
        Ok(toml::from_str(contents)?)
    }

    /// Random source for a run: seeded when configured
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Rating system seeded with the field's starting ratings
    pub fn elo_system(&self, teams: &[Team]) -> Result<EloSystem, EloError> {
        EloSystem::from_teams(teams, self.k_factor, self.home_advantage)
    }
}
