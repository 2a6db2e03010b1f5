//! Round-by-round single-elimination simulation

use bracket_core::{EloSystem, Outcome};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SimulationError;

/// A team's rating at the start of a round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRating {
    pub team: String,
    pub rating: f64,
}

/// Every team alive entering a round, in bracket order
pub type RoundSnapshot = Vec<TeamRating>;

/// Snapshots for each round, from the full field down to the champion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TournamentLog {
    rounds: Vec<RoundSnapshot>,
}

impl TournamentLog {
    pub fn from_rounds(rounds: Vec<RoundSnapshot>) -> Self {
        Self { rounds }
    }

    pub fn rounds(&self) -> &[RoundSnapshot] {
        &self.rounds
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// The last team standing, once the log is complete
    pub fn champion(&self) -> Option<&TeamRating> {
        match self.rounds.last() {
            Some(last) if last.len() == 1 => last.first(),
            _ => None,
        }
    }

    fn push(&mut self, snapshot: RoundSnapshot) {
        self.rounds.push(snapshot);
    }
}

/// Plays out a bracket, updating Elo ratings after every match.
///
/// The random source is injected so a seeded generator reproduces a run.
pub struct TournamentSimulator<R: Rng> {
    elo: EloSystem,
    rng: R,
}

impl<R: Rng> TournamentSimulator<R> {
    pub fn new(elo: EloSystem, rng: R) -> Self {
        Self { elo, rng }
    }

    pub fn elo(&self) -> &EloSystem {
        &self.elo
    }

    /// Hand back the rating system with its end-of-tournament ratings
    pub fn into_elo(self) -> EloSystem {
        self.elo
    }

    /// Play one round and return the winners in bracket order.
    ///
    /// Teams are paired as (0, 1), (2, 3), ... The first team of a pair wins
    /// when the uniform draw is at or below its predicted win probability.
    pub fn simulate_round(&mut self, teams: &[String]) -> Result<Vec<String>, SimulationError> {
        if teams.len() % 2 != 0 {
            let team = teams.last().cloned().unwrap_or_default();
            return Err(SimulationError::UnpairedTeam {
                team,
                field_size: teams.len(),
            });
        }

        let mut next_round = Vec::with_capacity(teams.len() / 2);
        for pair in teams.chunks_exact(2) {
            let (team_a, team_b) = (&pair[0], &pair[1]);

            let expected = self.elo.predict_outcome(team_a, team_b)?;
            let draw: f64 = self.rng.gen();

            let (outcome, winner) = if draw <= expected {
                (Outcome::AWins, team_a)
            } else {
                (Outcome::BWins, team_b)
            };
            let (rating_a, rating_b) = self.elo.update_ratings(team_a, team_b, outcome)?;

            tracing::debug!(
                team_a = team_a.as_str(),
                team_b = team_b.as_str(),
                expected,
                draw,
                winner = winner.as_str(),
                rating_a,
                rating_b,
                "match played"
            );
            next_round.push(winner.clone());
        }

        Ok(next_round)
    }

    /// Play rounds until a single team remains.
    ///
    /// The log starts with the full field and gains one snapshot per round,
    /// taken after that round's rating updates.
    pub fn simulate(&mut self, teams: &[String]) -> Result<TournamentLog, SimulationError> {
        if teams.is_empty() {
            return Err(SimulationError::EmptyField);
        }

        let mut log = TournamentLog::default();
        log.push(self.snapshot(teams)?);

        let mut current = teams.to_vec();
        let mut round = 1;
        while current.len() > 1 {
            current = self.simulate_round(&current)?;
            log.push(self.snapshot(&current)?);

            tracing::info!(round, survivors = current.len(), "round complete");
            round += 1;
        }

        Ok(log)
    }

    fn snapshot(&self, teams: &[String]) -> Result<RoundSnapshot, SimulationError> {
        teams
            .iter()
            .map(|team| -> Result<TeamRating, SimulationError> {
                Ok(TeamRating {
                    team: team.clone(),
                    rating: self.elo.rating(team)?,
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "simulator_tests.rs"]
mod simulator_tests;
