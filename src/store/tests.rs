use serde_json::json;

use super::*;

fn temp_registry(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("quizdeck-{}-{}.json", name, std::process::id()))
}

fn sample_file() -> Value {
    json!([
        { "Number": 1, "Question": "2+2?", "Options": ["3", "4"], "Answer": "4" },
        { "Number": 2, "Question": "3+3?", "Options": ["5", "6"], "Answer": "6" }
    ])
}

#[test]
fn loads_a_valid_question_file() {
    let mut store = QuestionStore::new(None);
    assert_eq!(store.load(sample_file()).unwrap(), 2);
    assert_eq!(store.question_count(), 2);
    assert_eq!(store.questions()[0].number, 1);
    assert_eq!(store.questions()[0].text, "2+2?");
    assert_eq!(store.questions()[0].answer, "4");
}

#[test]
fn rejects_a_non_array_file() {
    let mut store = QuestionStore::new(None);
    let result = store.load(json!({ "Number": 1 }));
    assert!(matches!(result, Err(QuizError::Format(_))));
}

#[test]
fn rejects_an_empty_file() {
    let mut store = QuestionStore::new(None);
    assert!(matches!(store.load(json!([])), Err(QuizError::Format(_))));
}

#[test]
fn rejects_a_question_with_a_missing_field() {
    let mut store = QuestionStore::new(None);
    let result = store.load(json!([
        { "Number": 1, "Question": "2+2?", "Options": ["3", "4"] }
    ]));
    assert!(matches!(result, Err(QuizError::Format(_))));
}

#[test]
fn rejects_a_question_with_a_single_option() {
    let mut store = QuestionStore::new(None);
    let result = store.load(json!([
        { "Number": 1, "Question": "2+2?", "Options": ["4"], "Answer": "4" }
    ]));
    assert!(matches!(result, Err(QuizError::Format(_))));
}

#[test]
fn rejects_an_answer_that_is_not_an_option() {
    let mut store = QuestionStore::new(None);
    let result = store.load(json!([
        { "Number": 1, "Question": "2+2?", "Options": ["3", "4"], "Answer": "5" }
    ]));
    assert!(matches!(result, Err(QuizError::Format(_))));
}

#[test]
fn rejects_duplicate_question_numbers() {
    let mut store = QuestionStore::new(None);
    let result = store.load(json!([
        { "Number": 1, "Question": "2+2?", "Options": ["3", "4"], "Answer": "4" },
        { "Number": 1, "Question": "3+3?", "Options": ["5", "6"], "Answer": "6" }
    ]));
    assert!(matches!(result, Err(QuizError::Format(_))));
}

#[test]
fn malformed_text_is_a_format_error() {
    let mut store = QuestionStore::new(None);
    assert!(matches!(
        store.load_json("{not valid}"),
        Err(QuizError::Format(_))
    ));
}

#[test]
fn a_failed_load_keeps_the_previous_set() {
    let mut store = QuestionStore::new(None);
    store.load(sample_file()).unwrap();
    assert!(store.load(json!([])).is_err());
    assert!(store.load_json("{not valid}").is_err());
    assert_eq!(store.question_count(), 2);
}

#[test]
fn incorrect_outcomes_are_recorded_without_duplicates() {
    let mut store = QuestionStore::new(None);
    store.record_outcome(1, false);
    store.record_outcome(1, false);
    assert_eq!(store.mistake_count(), 1);
    assert!(store.mistakes().contains(&1));
}

#[test]
fn a_correct_outcome_clears_a_recorded_mistake() {
    let mut store = QuestionStore::new(None);
    store.record_outcome(1, false);
    store.record_outcome(1, true);
    assert_eq!(store.mistake_count(), 0);
}

#[test]
fn the_registry_round_trips_through_disk() {
    let path = temp_registry("round-trip");
    let _ = fs::remove_file(&path);
    {
        let mut store = QuestionStore::new(Some(path.clone()));
        store.record_outcome(3, false);
        store.record_outcome(1, false);
    }
    let mut store = QuestionStore::new(Some(path.clone()));
    store.load_mistakes();
    assert_eq!(store.mistake_count(), 2);
    assert!(store.mistakes().contains(&1));
    assert!(store.mistakes().contains(&3));
    let _ = fs::remove_file(&path);
}

#[test]
fn clearing_an_absent_number_is_a_no_op_across_reloads() {
    let path = temp_registry("absent-clear");
    let _ = fs::remove_file(&path);
    {
        let mut store = QuestionStore::new(Some(path.clone()));
        store.record_outcome(5, true);
    }
    let mut store = QuestionStore::new(Some(path.clone()));
    store.load_mistakes();
    assert_eq!(store.mistake_count(), 0);
    let _ = fs::remove_file(&path);
}

#[test]
fn a_malformed_registry_degrades_to_empty() {
    let path = temp_registry("malformed");
    fs::write(&path, "not json at all").unwrap();
    let mut store = QuestionStore::new(Some(path.clone()));
    store.load_mistakes();
    assert_eq!(store.mistake_count(), 0);
    let _ = fs::remove_file(&path);
}

#[test]
fn a_missing_registry_is_empty() {
    let path = temp_registry("missing");
    let _ = fs::remove_file(&path);
    let mut store = QuestionStore::new(Some(path));
    store.load_mistakes();
    assert_eq!(store.mistake_count(), 0);
}

#[test]
fn reset_persists_an_empty_registry() {
    let path = temp_registry("reset");
    let _ = fs::remove_file(&path);
    {
        let mut store = QuestionStore::new(Some(path.clone()));
        store.record_outcome(2, false);
        store.reset_mistakes();
    }
    let mut store = QuestionStore::new(Some(path.clone()));
    store.load_mistakes();
    assert_eq!(store.mistake_count(), 0);
    let _ = fs::remove_file(&path);
}

#[test]
fn storage_failures_do_not_block_recording() {
    let mut store = QuestionStore::new(Some(PathBuf::from("/dev/null/quizdeck/mistakes.json")));
    store.record_outcome(7, false);
    assert!(store.mistakes().contains(&7));
}
