use std::fs;

use tempfile::TempDir;

use times_tables::quiz::{QuizSession, RoundConfigError, SettingsError};
use times_tables::store::json_store::JsonPreferenceStore;
use times_tables::store::{PreferenceKey, PreferenceStore};

fn open(dir: &TempDir) -> JsonPreferenceStore {
    JsonPreferenceStore::with_base_dir(dir.path().to_path_buf()).unwrap()
}

#[test]
fn first_launch_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let session = QuizSession::new(Box::new(open(&dir)));
    let config = session.state().config;
    assert_eq!(config.selected_table.value(), 5);
    assert_eq!(config.questions_per_round.value(), 5);
}

#[test]
fn settings_survive_a_restart() {
    let dir = TempDir::new().unwrap();
    {
        let mut session = QuizSession::new(Box::new(open(&dir)));
        session.change_operand(7).unwrap();
        session.change_questions_per_round(20).unwrap();
    }

    let session = QuizSession::new(Box::new(open(&dir)));
    let config = session.state().config;
    assert_eq!(config.selected_table.value(), 7);
    assert_eq!(config.questions_per_round.value(), 20);
}

#[test]
fn rejected_settings_are_not_written() {
    let dir = TempDir::new().unwrap();
    let mut session = QuizSession::new(Box::new(open(&dir)));
    assert!(matches!(
        session.change_operand(1),
        Err(SettingsError::Invalid(RoundConfigError::TableOutOfRange(1)))
    ));
    assert!(matches!(
        session.change_questions_per_round(15),
        Err(SettingsError::Invalid(RoundConfigError::InvalidRoundLength(15)))
    ));
    assert!(!dir.path().join("preferences.json").exists());
}

#[test]
fn hand_edited_out_of_range_values_fall_back() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    store.set(PreferenceKey::SelectedTable, 40).unwrap();
    store.set(PreferenceKey::QuestionsPerRound, 0).unwrap();

    let session = QuizSession::new(Box::new(open(&dir)));
    let config = session.state().config;
    assert_eq!(config.selected_table.value(), 5);
    assert_eq!(config.questions_per_round.value(), 5);
}

#[test]
fn unwritable_store_keeps_change_in_memory() {
    let dir = TempDir::new().unwrap();
    let store = open(&dir);
    // A directory where the file should be makes the final rename fail
    fs::create_dir(dir.path().join("preferences.json")).unwrap();

    let mut session = QuizSession::new(Box::new(store));
    let result = session.change_operand(9);
    assert!(matches!(result, Err(SettingsError::Persist(_))));
    assert_eq!(session.state().config.selected_table.value(), 9);
}
