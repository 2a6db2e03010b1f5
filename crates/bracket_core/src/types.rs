//! Shared data types for bracket simulations

use serde::{Deserialize, Serialize};

/// A team entered in the field, with its starting rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Unique identifier within a run
    pub name: String,
    /// Starting Elo rating
    #[serde(alias = "rating")]
    pub elo: f64,
}

impl Team {
    pub fn new(name: &str, elo: f64) -> Self {
        Self {
            name: name.to_string(),
            elo,
        }
    }
}

/// Names of the teams in input order
pub fn team_names(teams: &[Team]) -> Vec<String> {
    teams.iter().map(|team| team.name.clone()).collect()
}
