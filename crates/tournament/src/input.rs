//! Team list input

use bracket_core::{team_names, Team};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::LoadError;

/// The `{"teams": [...]}` document a simulation starts from.
///
/// Order matters: positions 0 and 1 meet in the first round, then 2 and 3,
/// and so on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamList {
    pub teams: Vec<Team>,
}

impl TeamList {
    /// Load a team list from a JSON file
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Team names in bracket order
    pub fn names(&self) -> Vec<String> {
        team_names(&self.teams)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_team_list() {
        let json = r#"{"teams": [
            {"name": "Houston", "elo": 1850.5, "seed": 1},
            {"name": "Northern Kentucky", "elo": 1420}
        ]}"#;
        let list = TeamList::from_json(json).unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list.teams[0], Team::new("Houston", 1850.5));
        assert_eq!(list.teams[1].elo, 1420.0);
        assert_eq!(list.names(), vec!["Houston", "Northern Kentucky"]);
    }

    #[test]
    fn test_rating_alias_is_accepted() {
        let list = TeamList::from_json(r#"{"teams": [{"name": "UConn", "rating": 1900}]}"#).unwrap();
        assert_eq!(list.teams[0].elo, 1900.0);
    }

    #[test]
    fn test_missing_rating_is_an_error() {
        let err = TeamList::from_json(r#"{"teams": [{"name": "UConn"}]}"#).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_missing_teams_key_is_an_error() {
        let err = TeamList::from_json(r#"{"squads": []}"#).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = TeamList::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
