use std::fs;
use std::path::PathBuf;

use squad_analytics::model::{MatchRecord, MatchResult, PlayerStatus, parse_matches_json};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

fn fixture_matches() -> Vec<MatchRecord> {
    parse_matches_json(&read_fixture("match_log.json")).expect("fixture should parse")
}

#[test]
fn absent_numbers_default_to_zero() {
    let matches = fixture_matches();
    assert_eq!(matches.len(), 3);

    let caro = &matches[0].players[2];
    assert_eq!(caro.name, "Caro");
    assert_eq!(caro.goals, 0);
    assert_eq!(caro.assists, 0);
    assert_eq!(caro.minutes_played, 90);

    let bea = &matches[1].players[1];
    assert_eq!(bea.assists, 0);
    assert_eq!(bea.status, PlayerStatus::Substitute);
}

#[test]
fn negative_numbers_and_unknown_status_are_normalized() {
    let matches = fixture_matches();
    let dani = &matches[1].players[2];
    assert_eq!(dani.goals, 0);
    assert_eq!(dani.status, PlayerStatus::Unknown);
}

#[test]
fn result_is_derived_from_scores() {
    let matches = fixture_matches();
    assert_eq!(matches[0].result(), MatchResult::Win);
    assert_eq!(matches[0].goal_difference(), 2);
    assert_eq!(matches[1].result(), MatchResult::Draw);

    // Missing scores read as 0-0.
    assert_eq!(matches[2].team_score(), 0);
    assert_eq!(matches[2].opponent_score(), 0);
    assert_eq!(matches[2].result(), MatchResult::Draw);
    assert!(matches[2].is_clean_sheet());
}

#[test]
fn names_are_trimmed_and_blank_tournaments_dropped() {
    let matches = fixture_matches();
    assert_eq!(matches[2].players[0].name, "Ana");
    assert_eq!(matches[0].tournament.as_deref(), Some("League"));
    assert!(matches[2].tournament.is_none());
    assert!(!matches[0].players[3].is_named());
}

#[test]
fn stored_result_is_recomputed_on_reload() {
    let matches = fixture_matches();
    let mut json: serde_json::Value = serde_json::to_value(&matches).expect("serialize");
    // A stale derived field must not survive a reload.
    json[0]["result"] = serde_json::Value::String("LOSS".to_string());
    let reloaded: Vec<MatchRecord> = serde_json::from_value(json).expect("reload");
    assert_eq!(reloaded[0].result(), MatchResult::Win);
    assert_eq!(reloaded, matches);
}

#[test]
fn malformed_json_is_an_error() {
    let err = parse_matches_json("{\"id\": 1}").unwrap_err();
    assert!(err.to_string().contains("invalid match log json"));
}
