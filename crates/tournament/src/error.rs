//! Error types for loading, simulating and exporting tournaments

use bracket_core::EloError;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while playing out a bracket
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Elo(#[from] EloError),

    #[error("Round of {field_size} leaves '{team}' without an opponent; the field must stay even until one team remains")]
    UnpairedTeam { team: String, field_size: usize },

    #[error("Cannot simulate a tournament with no teams")]
    EmptyField,
}

/// Failures while reading team lists or config files
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Failures while writing results
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to serialize: {0}")]
    Json(#[from] serde_json::Error),
}
