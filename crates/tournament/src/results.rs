//! Tournament results export and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::SimConfig;
use crate::error::ExportError;
use crate::simulator::{RoundSnapshot, TeamRating, TournamentLog};

/// One line of the flat CSV export
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    pub index: usize,
    pub team: String,
    pub rating: f64,
    pub round: usize,
}

/// Flatten a log into export rows, champion first.
///
/// Rounds are numbered while walking the log backwards, so the champion's row
/// is round 0 and the full field carries the highest round number.
pub fn export_rows(log: &TournamentLog) -> Vec<ExportRow> {
    log.rounds()
        .iter()
        .rev()
        .enumerate()
        .flat_map(|(round, snapshot)| {
            snapshot.iter().map(move |entry| (round, entry))
        })
        .enumerate()
        .map(|(index, (round, entry))| ExportRow {
            index,
            team: entry.team.clone(),
            rating: entry.rating,
            round,
        })
        .collect()
}

/// Render the export as CSV: an unnamed row-index column, then
/// `team,rating,round`
pub fn render_csv(log: &TournamentLog) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(["", "team", "rating", "round"])?;
    for row in export_rows(log) {
        writer.write_record([
            row.index.to_string(),
            row.team,
            format_rating(row.rating),
            row.round.to_string(),
        ])?;
    }
    writer.into_inner().map_err(|e| ExportError::Io(e.into_error()))
}

/// Ratings as the CSV shows them: whole numbers keep a trailing `.0`
pub fn format_rating(rating: f64) -> String {
    if rating.is_finite() && rating.fract() == 0.0 {
        format!("{:.1}", rating)
    } else {
        rating.to_string()
    }
}

/// Write the CSV export. The file is only touched once rendering succeeded.
pub fn write_csv(log: &TournamentLog, path: &Path) -> Result<(), ExportError> {
    let bytes = render_csv(log)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Write the CSV and, when requested, the JSON summary.
///
/// Both documents are rendered before either file is created. The summary is
/// written first and removed again if the CSV cannot be written, so a failed
/// run leaves neither file behind.
pub fn write_outputs(
    log: &TournamentLog,
    config: &SimConfig,
    csv_path: &Path,
    summary_path: Option<&Path>,
) -> Result<(), ExportError> {
    let csv_bytes = render_csv(log)?;
    let summary_json = match summary_path {
        Some(_) => Some(TournamentSummary::new(log, config).to_json()?),
        None => None,
    };

    if let (Some(path), Some(json)) = (summary_path, &summary_json) {
        std::fs::write(path, json)?;
    }
    if let Err(e) = std::fs::write(csv_path, csv_bytes) {
        if let Some(path) = summary_path {
            let _ = std::fs::remove_file(path);
        }
        return Err(e.into());
    }
    Ok(())
}

/// Complete record of a run, for the optional JSON summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentSummary {
    pub field_size: usize,
    pub champion: Option<TeamRating>,
    pub config: SimConfig,
    pub rounds: Vec<RoundSnapshot>,
}

impl TournamentSummary {
    pub fn new(log: &TournamentLog, config: &SimConfig) -> Self {
        Self {
            field_size: log.rounds().first().map_or(0, |r| r.len()),
            champion: log.champion().cloned(),
            config: config.clone(),
            rounds: log.rounds().to_vec(),
        }
    }

    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save summary to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), ExportError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Load summary from a JSON file
    pub fn load(path: &Path) -> Result<Self, ExportError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Bracket: {} teams ===\n\n", self.field_size));
        report.push_str(&format!(
            "Config: k-factor {}, home advantage {}\n",
            self.config.k_factor, self.config.home_advantage
        ));
        if let Some(seed) = self.config.seed {
            report.push_str(&format!("Seed: {}\n", seed));
        }
        report.push('\n');

        for (played, snapshot) in self.rounds.iter().enumerate().skip(1) {
            report.push_str(&format!("After round {} ({} left):\n", played, snapshot.len()));
            for entry in snapshot {
                report.push_str(&format!("  {:<30} {:>8.1}\n", entry.team, entry.rating));
            }
        }

        match &self.champion {
            Some(champion) => report.push_str(&format!(
                "\nChampion: {} ({:.1})\n",
                champion.team, champion.rating
            )),
            None => report.push_str("\nNo champion decided\n"),
        }

        report
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
