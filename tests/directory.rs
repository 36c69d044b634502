use std::path::Path;
use std::time::{Duration, Instant};

use rusty_talent::config::DEFAULT_DATA_PATH;
use rusty_talent::data::filter::{FilterPatch, Selection};
use rusty_talent::data::loader::{load_file, DatasetLoader};
use rusty_talent::data::model::{Facet, Profile};
use rusty_talent::data::stats::AggregateStats;
use rusty_talent::state::{AppState, LoadState};

fn record(id: u32, area: &str, location: &str, tech: &[&str]) -> Profile {
    let json = serde_json::json!({
        "id": id,
        "nome": format!("Pessoa {id}"),
        "foto": "",
        "cargo": "Analista",
        "resumo": "",
        "localizacao": location,
        "area": area,
        "habilidadesTecnicas": tech,
        "softSkills": [],
        "experiencias": [],
        "formacao": [],
        "projetos": [],
        "certificacoes": [],
        "idiomas": [],
        "areaInteresses": [],
        "hobbies": []
    });
    serde_json::from_value(json).expect("valid profile record")
}

fn scenario_state() -> AppState {
    let mut state = AppState::default();
    state.begin_loading();
    state.set_dataset(vec![
        record(1, "Dados", "SP", &["Python"]),
        record(2, "Design", "RJ", &["Figma"]),
    ]);
    state
}

fn visible_ids(state: &AppState) -> Vec<u32> {
    state.filtered_profiles().iter().map(|p| p.id).collect()
}

#[test]
fn area_filter_scenario() {
    let mut state = scenario_state();
    state.set_filters(FilterPatch {
        search: Some(String::new()),
        area: Some(Selection::Only("Dados".into())),
        location: Some(Selection::All),
        technology: Some(Selection::All),
    });
    assert_eq!(visible_ids(&state), vec![1]);
}

#[test]
fn search_matches_technology_in_any_case() {
    let mut state = scenario_state();
    for term in ["python", "PYTHON", "Python"] {
        state.set_filters(FilterPatch::search(term));
        assert_eq!(visible_ids(&state), vec![1], "term {term:?}");
    }
}

#[test]
fn whitespace_search_is_no_constraint() {
    let mut state = scenario_state();
    state.set_filters(FilterPatch::search("   "));
    let spaced = visible_ids(&state);
    state.set_filters(FilterPatch::search(""));
    assert_eq!(spaced, visible_ids(&state));
    assert_eq!(spaced, vec![1, 2]);
}

#[test]
fn clear_filters_restores_full_dataset() {
    let mut state = scenario_state();
    state.set_filters(FilterPatch::facet(Facet::Technology, Selection::Only("Figma".into())));
    state.set_filters(FilterPatch::search("pessoa"));
    assert_eq!(visible_ids(&state), vec![2]);

    state.clear_filters();
    assert_eq!(visible_ids(&state), vec![1, 2]);
}

#[test]
fn options_and_stats_ignore_filters() {
    let mut state = scenario_state();
    let options = state.derived_options().clone();
    let stats = state.aggregate_stats();

    state.set_filters(FilterPatch::facet(Facet::Location, Selection::Only("RJ".into())));
    assert_eq!(state.derived_options(), &options);
    assert_eq!(state.aggregate_stats(), stats);
    assert_eq!(
        stats,
        AggregateStats {
            profiles: 2,
            areas: 2,
            locations: 2,
            technologies: 2,
        }
    );
}

#[test]
fn recommendations_scenario() {
    let mut state = scenario_state();
    state.increment_recommendation(1);
    state.increment_recommendation(1);
    assert_eq!(state.recommendation_count(1), 2);
    assert_eq!(state.recommendation_count(2), 0);
}

#[test]
fn shipped_dataset_parses() {
    let profiles = load_file(Path::new(DEFAULT_DATA_PATH)).expect("bundled dataset");
    assert_eq!(profiles.len(), 60);

    let mut state = AppState::default();
    state.set_dataset(profiles);
    assert_eq!(
        state.aggregate_stats(),
        AggregateStats {
            profiles: 60,
            areas: 5,
            locations: 10,
            technologies: 30,
        }
    );
    assert_eq!(state.visible_count(), 60);
}

#[test]
fn background_load_drives_state_machine() {
    let mut loader = DatasetLoader::default();
    let mut state = AppState::default();
    assert_eq!(state.load_state, LoadState::Idle);

    loader.request(Path::new(DEFAULT_DATA_PATH));
    state.begin_loading();
    assert!(state.filtered_profiles().is_empty());

    let deadline = Instant::now() + Duration::from_secs(5);
    let outcome = loop {
        if let Some(outcome) = loader.poll() {
            break outcome;
        }
        assert!(Instant::now() < deadline, "dataset load timed out");
        std::thread::sleep(Duration::from_millis(5));
    };
    state.finish_loading(outcome);

    assert_eq!(state.load_state, LoadState::Ready);
    assert_eq!(state.filtered_profiles().len(), 60);
}

#[test]
fn failed_load_surfaces_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut loader = DatasetLoader::default();
    let mut state = AppState::default();

    loader.request(&dir.path().join("missing.json"));
    state.begin_loading();

    let deadline = Instant::now() + Duration::from_secs(5);
    let outcome = loop {
        if let Some(outcome) = loader.poll() {
            break outcome;
        }
        assert!(Instant::now() < deadline, "dataset load timed out");
        std::thread::sleep(Duration::from_millis(5));
    };
    state.finish_loading(outcome);

    assert!(state.error_message().is_some());
    assert!(state.profiles().is_empty());
    assert_eq!(state.aggregate_stats(), AggregateStats::default());
}
