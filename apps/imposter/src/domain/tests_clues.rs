use crate::domain::clues::{is_valid_clue, validate_clue, UsedWords};
use crate::domain::topic::Topic;
use crate::errors::domain::ValidationKind;

fn netflix() -> Topic {
    Topic::new("Netflix", "A popular streaming platform for movies.")
}

#[test]
fn accepts_single_fresh_word() {
    let used = UsedWords::new();
    assert_eq!(
        validate_clue("  Streaming ", &netflix(), &used).unwrap(),
        "Streaming"
    );
}

#[test]
fn rejects_multi_word_and_empty_input() {
    let used = UsedWords::new();
    for raw in ["red car", "", "   ", "a b c"] {
        let err = validate_clue(raw, &netflix(), &used).unwrap_err();
        assert_eq!(err.kind(), Some(ValidationKind::NotOneWord), "input {raw:?}");
        assert_eq!(err.to_string(), "You must enter exactly ONE word.");
    }
}

#[test]
fn rejects_topic_word_in_any_case() {
    let used = UsedWords::new();
    let err = validate_clue("netflix", &netflix(), &used).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::TopicWord));
    assert_eq!(err.to_string(), "You cannot say the secret word!");
}

#[test]
fn rejects_word_already_used_case_insensitively() {
    let used: UsedWords = ["Red"].into_iter().collect();
    let err = validate_clue("red", &netflix(), &used).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::WordAlreadyUsed));
    assert_eq!(
        err.to_string(),
        "The word 'red' has already been used this round."
    );
}

#[test]
fn used_words_are_lower_cased() {
    let mut used = UsedWords::new();
    assert!(used.insert("Digital"));
    assert!(!used.insert("DIGITAL"));
    assert_eq!(used.iter().collect::<Vec<_>>(), vec!["digital"]);
    assert!(used.contains("digital"));
}

#[test]
fn is_valid_clue_matches_validation() {
    let used: UsedWords = ["tech"].into_iter().collect();
    assert!(is_valid_clue("Video", "Netflix", &used));
    assert!(!is_valid_clue("Tech", "Netflix", &used));
    assert!(!is_valid_clue("NETFLIX", "Netflix", &used));
    assert!(!is_valid_clue("two words", "Netflix", &used));
}
