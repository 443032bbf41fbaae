//! Name registry behaviour across survey documents.

use tempfile::TempDir;

use crate::helpers::archive_helpers::write_tml;
use crate::helpers::survey_fixtures::SURVEY_PAYLOAD;
use openspeleo::interchange::{ArianeOptions, read_tree};
use openspeleo::{ModelError, Name, NameError, NameRegistry, Survey, read_survey};

#[test]
fn test_auto_names_are_distinct() {
    let mut names = NameRegistry::new();
    let a = Name::new("", &mut names).unwrap();
    let b = Name::new("", &mut names).unwrap();

    assert_ne!(a, b);
    for name in [&a, &b] {
        assert_eq!(name.as_str().len(), 6);
        assert!(name.as_str().chars().all(|c| NameRegistry::VOCAB.contains(c)));
    }
}

#[test]
fn test_dollar_sign_is_rejected() {
    let err = Name::new("A$B", &mut NameRegistry::new()).unwrap_err();
    assert!(matches!(err, NameError::InvalidCharacter { character: '$', .. }));
    assert!(err.to_string().contains('$'));
}

#[test]
fn test_duplicate_explicit_names_are_rejected() {
    let mut names = NameRegistry::new();
    Name::new("STATION1", &mut names).unwrap();
    let err = Name::new("STATION1", &mut names).unwrap_err();
    assert!(matches!(err, NameError::DuplicateName(_)));
}

#[test]
fn test_independent_reads_do_not_collide() {
    let dir = TempDir::new().unwrap();
    let path = write_tml(dir.path(), "survey.tml", SURVEY_PAYLOAD);

    // each read opens its own scope, so the explicit name `ABC` is accepted twice
    let first = read_survey(&path, &ArianeOptions::default()).unwrap();
    let second = read_survey(&path, &ArianeOptions::default()).unwrap();
    assert!(first.shot_by_name("ABC").is_some());
    assert!(second.shot_by_name("ABC").is_some());
}

#[test]
fn test_shared_scope_detects_cross_document_collision() {
    let dir = TempDir::new().unwrap();
    let path = write_tml(dir.path(), "survey.tml", SURVEY_PAYLOAD);
    let options = ArianeOptions::default();

    let mut names = NameRegistry::new();
    Survey::from_tree_in(read_tree(&path, &options).unwrap(), &mut names).unwrap();
    let err = Survey::from_tree_in(read_tree(&path, &options).unwrap(), &mut names).unwrap_err();
    assert!(matches!(err, ModelError::Name(NameError::DuplicateName(ref n)) if n == "ABC"));

    names.reset();
    Survey::from_tree_in(read_tree(&path, &options).unwrap(), &mut names).unwrap();
}
