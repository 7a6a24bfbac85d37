//! Loading word lists from disk.

use std::io::Write;

use pretty_assertions::assert_eq;
use sprach_core::Dictionary;
use sprach_lexicon::{FrequencyDictionary, LexiconError};
use tempfile::NamedTempFile;

fn write(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write word list");
    file
}

#[test]
fn loads_json_frequency_map() {
    let file = write(r#"{"Hund": 12, "Katze": 8, "kommt": 20}"#);
    let dictionary = FrequencyDictionary::from_path(file.path(), 2).unwrap();

    assert_eq!(dictionary.len(), 3);
    assert_eq!(dictionary.frequency("hund"), 12);
    assert_eq!(dictionary.suggest_correction("katse").as_deref(), Some("katze"));
}

#[test]
fn loads_plain_text_list() {
    let file = write("# sample\nschläft 9\nstadt 4\nbus\n");
    let dictionary = FrequencyDictionary::from_path(file.path(), 1).unwrap();

    assert!(!dictionary.is_unknown("schläft"));
    assert!(dictionary.is_unknown("schlaft"));
    assert_eq!(dictionary.suggest_correction("schlaft").as_deref(), Some("schläft"));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = FrequencyDictionary::from_path(&dir.path().join("missing.txt"), 2);
    assert!(matches!(result, Err(LexiconError::Io { .. })));
}

#[test]
fn malformed_json_is_rejected() {
    let file = write(r#"{"hund": "viele"}"#);
    let result = FrequencyDictionary::from_path(file.path(), 2);
    assert!(matches!(result, Err(LexiconError::Json(_))));
}

#[test]
fn empty_list_is_rejected() {
    let file = write("# nothing here\n\n");
    let result = FrequencyDictionary::from_path(file.path(), 2);
    assert!(matches!(result, Err(LexiconError::Empty)));
}
