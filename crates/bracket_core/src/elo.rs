//! Elo rating calculation and tracking

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::types::Team;

/// K-factor for Elo updates (higher = more volatile)
pub const DEFAULT_K_FACTOR: f64 = 20.0;

/// Rating bonus given to the first-named side of a match
pub const DEFAULT_HOME_ADVANTAGE: f64 = 100.0;

/// Rating difference that corresponds to 10:1 odds
const LOGISTIC_SCALE: f64 = 400.0;

/// Errors raised while looking up or registering ratings
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EloError {
    #[error("No rating registered for team '{0}'")]
    UnknownTeam(String),

    #[error("Team '{0}' appears more than once in the field")]
    DuplicateTeam(String),
}

/// Result of a single match from the first team's perspective
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Outcome {
    AWins,
    Draw,
    BWins,
}

impl Outcome {
    /// Actual score for team A (1 for win, 0.5 for draw, 0 for loss)
    pub fn score_a(self) -> f64 {
        match self {
            Outcome::AWins => 1.0,
            Outcome::Draw => 0.5,
            Outcome::BWins => 0.0,
        }
    }
}

/// Probability that a team rated `rating_a` beats one rated `rating_b`.
///
/// `home_advantage` is added to `rating_a` only. With a zero advantage this is
/// the classical Elo expectation and `predict(a, b, 0) + predict(b, a, 0) == 1`.
pub fn predict(rating_a: f64, rating_b: f64, home_advantage: f64) -> f64 {
    let effective_a = rating_a + home_advantage;
    1.0 / (1.0 + 10.0_f64.powf((rating_b - effective_a) / LOGISTIC_SCALE))
}

/// New ratings for both sides after a match.
///
/// Both sides are scored against the same prediction pair: `predicted_a` from
/// [`predict`] and `1 - predicted_a`. Callers must pass the same home advantage
/// they predicted with.
pub fn update(
    rating_a: f64,
    rating_b: f64,
    outcome: Outcome,
    k_factor: f64,
    home_advantage: f64,
) -> (f64, f64) {
    let predicted_a = predict(rating_a, rating_b, home_advantage);
    let predicted_b = 1.0 - predicted_a;

    let actual_a = outcome.score_a();
    let actual_b = 1.0 - actual_a;

    (
        rating_a + k_factor * (actual_a - predicted_a),
        rating_b + k_factor * (actual_b - predicted_b),
    )
}

/// Ratings keyed by team name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatingStore {
    ratings: HashMap<String, f64>,
}

impl RatingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from the input field, rejecting repeated names
    pub fn from_teams(teams: &[Team]) -> Result<Self, EloError> {
        let mut store = Self::new();
        for team in teams {
            if store.ratings.contains_key(&team.name) {
                return Err(EloError::DuplicateTeam(team.name.clone()));
            }
            store.set(&team.name, team.elo);
        }
        Ok(store)
    }

    pub fn get(&self, team: &str) -> Result<f64, EloError> {
        self.ratings
            .get(team)
            .copied()
            .ok_or_else(|| EloError::UnknownTeam(team.to_string()))
    }

    pub fn set(&mut self, team: &str, rating: f64) {
        self.ratings.insert(team.to_string(), rating);
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}

/// Elo rating system: a rating store plus the constants used to move it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EloSystem {
    pub k_factor: f64,
    pub home_advantage: f64,
    store: RatingStore,
}

impl Default for EloSystem {
    fn default() -> Self {
        Self::new(DEFAULT_K_FACTOR, DEFAULT_HOME_ADVANTAGE)
    }
}

impl EloSystem {
    pub fn new(k_factor: f64, home_advantage: f64) -> Self {
        Self::with_store(k_factor, home_advantage, RatingStore::new())
    }

    pub fn with_store(k_factor: f64, home_advantage: f64, store: RatingStore) -> Self {
        Self {
            k_factor,
            home_advantage,
            store,
        }
    }

    /// Build a system seeded with each team's starting rating
    pub fn from_teams(
        teams: &[Team],
        k_factor: f64,
        home_advantage: f64,
    ) -> Result<Self, EloError> {
        let store = RatingStore::from_teams(teams)?;
        Ok(Self::with_store(k_factor, home_advantage, store))
    }

    pub fn ratings(&self) -> &RatingStore {
        &self.store
    }

    pub fn rating(&self, team: &str) -> Result<f64, EloError> {
        self.store.get(team)
    }

    /// Probability that `team_a` beats `team_b`, home advantage going to `team_a`
    pub fn predict_outcome(&self, team_a: &str, team_b: &str) -> Result<f64, EloError> {
        let rating_a = self.store.get(team_a)?;
        let rating_b = self.store.get(team_b)?;
        Ok(predict(rating_a, rating_b, self.home_advantage))
    }

    /// Apply a match result to both teams' stored ratings
    pub fn update_ratings(
        &mut self,
        team_a: &str,
        team_b: &str,
        outcome: Outcome,
    ) -> Result<(f64, f64), EloError> {
        let rating_a = self.store.get(team_a)?;
        let rating_b = self.store.get(team_b)?;

        let (new_a, new_b) = update(
            rating_a,
            rating_b,
            outcome,
            self.k_factor,
            self.home_advantage,
        );
        self.store.set(team_a, new_a);
        self.store.set(team_b, new_b);

        tracing::trace!(team_a, team_b, ?outcome, new_a, new_b, "ratings updated");
        Ok((new_a, new_b))
    }
}

#[cfg(test)]
#[path = "elo_tests.rs"]
mod elo_tests;
