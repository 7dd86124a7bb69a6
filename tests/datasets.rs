// Dataset invariant tests for the built-in word list.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

#[test]
fn word_list_entries_are_unique_and_lowercase() {
    let mut seen = HashSet::new();
    for (word, hint) in word_guess::WORD_LIST {
        assert!(seen.insert(*word), "duplicate word '{}' in WORD_LIST", word);
        assert!(!word.is_empty(), "empty word in WORD_LIST");
        assert!(
            word.chars().all(|c| c.is_ascii_lowercase()),
            "word '{}' must be lowercase ascii letters only",
            word
        );
        assert!(!hint.is_empty(), "empty hint for word '{}'", word);
    }
}

#[test]
fn word_list_converts_to_hinted_words() {
    let words = word_guess::word_list();
    assert_eq!(words.len(), word_guess::WORD_LIST.len());
    for word in &words {
        assert!(word.hint.is_some(), "word '{}' lost its hint", word.text);
    }
}

#[test]
fn word_list_is_nonempty() {
    assert!(!word_guess::WORD_LIST.is_empty());
}
