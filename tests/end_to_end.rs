use std::fs;
use std::path::Path;

use serde_json::Value;
use tempfile::tempdir;

use goalmine::app::run_generate;
use goalmine::ingestion::load_goal_catalogue;
use goalmine::{PageSource, SuggestConfig, SuggestError, SuggestionReport, TextDirectoryPages};

const CATALOGUE: &str = r#"{
  "meta": {"bron": "leerplan.xlsx"},
  "doelen": [
    {
      "id": "WIS-1",
      "code": "WIS.2.1",
      "vak": "Wiskunde",
      "nrmd": "2.1",
      "subdomein": "Getallen",
      "cluster": "tellen",
      "fase": "Fase 2.",
      "leerplandoel": "Hoeveelheden tellen en vergelijken",
      "voorbeelden": "Tellen met blokjes.",
      "woordenschat": "tellen, meer, minder"
    },
    {
      "id": "WIS-2",
      "code": "WIS.1.1",
      "vak": "Wiskunde",
      "nrmd": "1.1",
      "subdomein": "Meten",
      "cluster": "tijd",
      "leerplandoel": "De tijd inschatten"
    },
    {
      "id": "WIS-3",
      "vak": "Wiskunde",
      "nrmd": "1.1",
      "subdomein": "Meten",
      "cluster": "tijd",
      "woordenschat": "tijdsbesef, klok"
    },
    {
      "id": "WT-1",
      "vak": "Wetenschap en techniek",
      "domein": "Materie",
      "leerplandoel": "Materialen onderzoeken"
    }
  ]
}"#;

const CONFIG: &str = r#"{
  "document_groups": {
    "Wiskunde": ["Opstap_visie-wiskunde.pdf"],
    "Wetenschap en techniek": ["W_T_Bijlage_1.pdf"]
  },
  "fragments_per_goal": 2
}"#;

fn write_inputs(root: &Path) {
    let pages = root.join("pages");
    fs::create_dir_all(&pages).unwrap();
    fs::write(
        pages.join("Opstap_visie-wiskunde.pdf.txt"),
        [
            "Kinderen leren tellen met blokjes en vergelijken hoeveelheden tijdens het spel.",
            "Tijdsbesef groeit wanneer kinderen dagritmekaarten ordenen en de klok bekijken.",
        ]
        .join("\u{000C}"),
    )
    .unwrap();
    fs::write(root.join("goals.json"), CATALOGUE).unwrap();
    fs::write(root.join("config.json"), CONFIG).unwrap();
}

fn args(root: &Path, out: &Path) -> Vec<String> {
    vec![
        "--goals".into(),
        root.join("goals.json").display().to_string(),
        "--documents".into(),
        root.join("pages").display().to_string(),
        "--out".into(),
        out.display().to_string(),
        "--config".into(),
        root.join("config.json").display().to_string(),
    ]
}

#[test]
fn command_writes_report_for_every_goal() {
    let temp = tempdir().unwrap();
    write_inputs(temp.path());
    let out = temp.path().join("out/suggestions.json");

    run_generate(args(temp.path(), &out).into_iter()).unwrap();

    let raw = fs::read_to_string(&out).unwrap();
    let report: SuggestionReport = serde_json::from_str(&raw).unwrap();
    assert_eq!(report.meta.goal_count, 4);
    assert_eq!(report.suggestions.len(), 4);

    let counting = &report.suggestions[0];
    assert_eq!(counting.goal_id, "WIS-1");
    assert_eq!(counting.code, "WIS.2.1");
    assert_eq!(counting.sources, vec!["Opstap_visie-wiskunde.pdf"]);
    assert!(counting.examples.starts_with("Originele voorbeelden:\nTellen met blokjes.\n"));
    assert!(counting.examples.contains(
        "- Gebruik ook dit principe uit de visietekst: Kinderen leren tellen met blokjes"
    ));
    assert_eq!(counting.vocabulary, "tellen, meer, minder");

    assert_eq!(report.suggestions[1].vocabulary, "tijdsbesef");

    let science = &report.suggestions[3];
    assert!(science.sources.is_empty());
    assert!(science.teacher_note.contains("'Materie'"));
}

#[test]
fn report_uses_dutch_field_names() {
    let temp = tempdir().unwrap();
    write_inputs(temp.path());
    let out = temp.path().join("suggestions.json");

    run_generate(args(temp.path(), &out).into_iter()).unwrap();

    let value: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let meta = &value["meta"];
    assert_eq!(meta["aantal_leerdoelen"], 4);
    assert!(meta["generated_at"].as_str().unwrap().contains('T'));
    assert_eq!(meta["velden"].as_array().unwrap().len(), 3);

    let first = &value["suggestions"][0];
    for key in [
        "id",
        "code",
        "vak",
        "suggested_voorbeelden",
        "suggested_extra_toelichting",
        "suggested_woordenschat",
        "source_pdfs",
    ] {
        assert!(first.get(key).is_some(), "missing {key}");
    }
}

#[test]
fn rerun_replaces_previous_report() {
    let temp = tempdir().unwrap();
    write_inputs(temp.path());
    let out = temp.path().join("suggestions.json");
    fs::write(&out, "stale").unwrap();

    run_generate(args(temp.path(), &out).into_iter()).unwrap();
    let first: SuggestionReport = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    run_generate(args(temp.path(), &out).into_iter()).unwrap();
    let second: SuggestionReport =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();

    assert_eq!(first.suggestions, second.suggestions);
}

#[test]
fn missing_catalogue_fails_without_writing() {
    let temp = tempdir().unwrap();
    write_inputs(temp.path());
    fs::remove_file(temp.path().join("goals.json")).unwrap();
    let out = temp.path().join("suggestions.json");

    assert!(run_generate(args(temp.path(), &out).into_iter()).is_err());
    assert!(!out.exists());
}

#[test]
fn config_file_keeps_defaults_for_absent_keys() {
    let temp = tempdir().unwrap();
    write_inputs(temp.path());
    let config = SuggestConfig::from_json_file(temp.path().join("config.json")).unwrap();
    assert_eq!(config.fragments_per_goal, 2);
    assert_eq!(config.document_groups.len(), 2);
    assert_eq!(config.lexicon, SuggestConfig::default().lexicon);

    fs::write(temp.path().join("zero.json"), r#"{"fragments_per_goal": 0}"#).unwrap();
    assert!(matches!(
        SuggestConfig::from_json_file(temp.path().join("zero.json")),
        Err(SuggestError::Configuration(_))
    ));
}

#[test]
fn text_directory_serves_form_feed_pages() {
    let temp = tempdir().unwrap();
    write_inputs(temp.path());
    let pages = TextDirectoryPages::open(temp.path().join("pages")).unwrap();
    assert_eq!(pages.pages("Opstap_visie-wiskunde.pdf").unwrap().len(), 2);
    assert!(matches!(
        pages.pages("W_T_Bijlage_1.pdf"),
        Err(SuggestError::DocumentUnavailable { .. })
    ));

    let goals = load_goal_catalogue(temp.path().join("goals.json")).unwrap();
    assert_eq!(goals.len(), 4);
    assert_eq!(goals[1].cluster, "tijd");
}
