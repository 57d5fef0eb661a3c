//! Goal catalogue loading and report persistence.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::data::{Goal, SuggestionReport};
use crate::errors::SuggestError;
use crate::transport::fs::write_json_pretty;

/// Catalogue layouts accepted on input: the generated `{"doelen": [...]}`
/// payload, or a bare array of goals.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogueFile {
    Wrapped { doelen: Vec<Goal> },
    Bare(Vec<Goal>),
}

/// Parse a goal catalogue from JSON text. `origin` names the input in errors.
pub fn parse_goal_catalogue(raw: &str, origin: &str) -> Result<Vec<Goal>, SuggestError> {
    let file: CatalogueFile =
        serde_json::from_str(raw).map_err(|err| SuggestError::MalformedCatalogue {
            path: origin.to_string(),
            details: err.to_string(),
        })?;
    Ok(match file {
        CatalogueFile::Wrapped { doelen } => doelen,
        CatalogueFile::Bare(goals) => goals,
    })
}

/// Load the goal catalogue at `path`.
pub fn load_goal_catalogue(path: impl AsRef<Path>) -> Result<Vec<Goal>, SuggestError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let goals = parse_goal_catalogue(&raw, &path.display().to_string())?;
    debug!(path = %path.display(), goals = goals.len(), "goal catalogue loaded");
    Ok(goals)
}

/// Persist a report as pretty UTF-8 JSON, replacing any previous file atomically.
pub fn write_report(path: impl AsRef<Path>, report: &SuggestionReport) -> Result<(), SuggestError> {
    let path = path.as_ref();
    write_json_pretty(path, report)?;
    info!(
        path = %path.display(),
        suggestions = report.suggestions.len(),
        "suggestion report written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ReportMeta;
    use tempfile::tempdir;

    #[test]
    fn parses_wrapped_and_bare_catalogues() {
        let wrapped =
            r#"{"meta": {"aantal": 1}, "doelen": [{"id": "WIS-2", "vak": "Wiskunde"}], "bronnen": []}"#;
        let goals = parse_goal_catalogue(wrapped, "wrapped").unwrap();
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].subject, "Wiskunde");

        let bare = r#"[{"id": "A"}, {"id": "B"}]"#;
        let goals = parse_goal_catalogue(bare, "bare").unwrap();
        let ids: Vec<&str> = goals.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B"]);
    }

    #[test]
    fn malformed_catalogue_names_its_origin() {
        let err = parse_goal_catalogue(r#"{"doelen": 5}"#, "data/goals.json").unwrap_err();
        match err {
            SuggestError::MalformedCatalogue { path, .. } => assert_eq!(path, "data/goals.json"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_catalogue_is_an_io_error() {
        let temp = tempdir().unwrap();
        let err = load_goal_catalogue(temp.path().join("goals.json")).unwrap_err();
        assert!(matches!(err, SuggestError::Io(_)));
    }

    #[test]
    fn report_round_trips_through_disk() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("suggestions.json");
        let report = SuggestionReport {
            meta: ReportMeta {
                generated_at: "2026-01-30T09:15:00".into(),
                based_on: vec!["data/goals.json".into()],
                goal_count: 0,
                fields: vec![],
            },
            suggestions: vec![],
        };
        write_report(&path, &report).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("{\n  \"meta\": {\n    \"generated_at\""));
        let back: SuggestionReport = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, report);
    }
}
