//! Container tests for `.tml` and `.tmlu` files.

use std::fs;
use std::path::Path;

use rstest::rstest;
use tempfile::TempDir;

use crate::helpers::archive_helpers::*;
use crate::helpers::survey_fixtures::TEST_VALUE_PAYLOAD;
use openspeleo::interchange::{
    ArianeFileType, ArianeOptions, FormatCapability, InterchangeError, detect_format,
    read_payload, read_tree, supported_extensions, write_payload,
};

// =============================================================================
// FORMAT DETECTION
// =============================================================================

#[rstest]
#[case("cave.tml", ArianeFileType::Tml)]
#[case("cave.TML", ArianeFileType::Tml)]
#[case("cave.tmlu", ArianeFileType::Tmlu)]
#[case("cave.TMLU", ArianeFileType::Tmlu)]
fn test_detects_known_extension(#[case] file: &str, #[case] expected: ArianeFileType) {
    assert_eq!(ArianeFileType::from_path(Path::new(file)).unwrap(), expected);
}

#[rstest]
#[case("cave.invalid", "INVALID")]
#[case("cave.xml", "XML")]
#[case("cave.Zip", "ZIP")]
fn test_unknown_extension_is_uppercased(#[case] file: &str, #[case] token: &str) {
    let err = ArianeFileType::from_path(Path::new(file)).unwrap_err();
    match err {
        InterchangeError::UnknownFormat(found) => assert_eq!(found, token),
        other => panic!("expected UnknownFormat, got {other:?}"),
    }
}

#[test]
fn test_supported_extensions() {
    assert_eq!(supported_extensions(), &["tml", "tmlu"]);
    for ext in supported_extensions() {
        let file = format!("cave.{ext}");
        assert!(detect_format(Path::new(&file)).is_some(), "{file} not detected");
    }
}

#[rstest]
#[case("cave.tml", "TML", FormatCapability::FULL)]
#[case("cave.TMLU", "TMLU", FormatCapability::READ_ONLY)]
fn test_detect_format_capabilities(
    #[case] file: &str,
    #[case] name: &str,
    #[case] capabilities: FormatCapability,
) {
    let format = detect_format(Path::new(file)).unwrap();
    assert_eq!(format.name(), name);
    assert_eq!(format.capabilities(), capabilities);
}

#[rstest]
#[case("cave.xml")]
#[case("cave")]
fn test_detect_format_unknown(#[case] file: &str) {
    assert!(detect_format(Path::new(file)).is_none());
}

// =============================================================================
// READING
// =============================================================================

#[test]
fn test_read_tml_surfaces_test_value() {
    let dir = TempDir::new().unwrap();
    let path = write_tml(dir.path(), "test.tml", TEST_VALUE_PAYLOAD);

    let body = read_tree(&path, &ArianeOptions::default()).unwrap();
    assert_eq!(body.get_text("Test"), Some("Value"));
}

#[test]
fn test_read_tmlu_returns_bytes_verbatim() {
    let dir = TempDir::new().unwrap();
    let path = write_tmlu(dir.path(), "test.tmlu", TEST_VALUE_PAYLOAD);

    let payload = read_payload(&path, &ArianeOptions::default()).unwrap();
    assert_eq!(payload, TEST_VALUE_PAYLOAD.as_bytes());

    let body = read_tree(&path, &ArianeOptions::default()).unwrap();
    assert_eq!(body.get_text("Test"), Some("Value"));
}

#[test]
fn test_read_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.tml");

    let err = read_payload(&path, &ArianeOptions::default()).unwrap_err();
    assert!(matches!(err, InterchangeError::NotFound { path: ref p } if p == &path));
    assert!(err.to_string().contains("missing.tml"));
}

#[test]
fn test_read_unknown_extension() {
    let dir = TempDir::new().unwrap();
    let path = write_tmlu(dir.path(), "test.invalid", TEST_VALUE_PAYLOAD);

    let err = read_payload(&path, &ArianeOptions::default()).unwrap_err();
    assert!(err.to_string().contains("INVALID"), "{err}");
}

#[test]
fn test_read_tml_without_data_entry() {
    let dir = TempDir::new().unwrap();
    let path = write_zip(dir.path(), "test.tml", &[("Other.xml", TEST_VALUE_PAYLOAD)]);

    let err = read_payload(&path, &ArianeOptions::default()).unwrap_err();
    assert!(err.is_malformed_container(), "{err:?}");
}

#[test]
fn test_read_tml_that_is_not_a_zip() {
    let dir = TempDir::new().unwrap();
    let path = write_tmlu(dir.path(), "test.tml", TEST_VALUE_PAYLOAD);

    let err = read_payload(&path, &ArianeOptions::default()).unwrap_err();
    assert!(err.is_malformed_container(), "{err:?}");
}

#[test]
fn test_read_malformed_xml() {
    let dir = TempDir::new().unwrap();
    let path = write_tml(dir.path(), "test.tml", "<CaveFile><Test>Value</CaveFile>");

    let err = read_tree(&path, &ArianeOptions::default()).unwrap_err();
    assert!(matches!(err, InterchangeError::Xml(_)), "{err:?}");
}

#[test]
fn test_read_debug_dumps_payload() {
    let dir = TempDir::new().unwrap();
    let path = write_tml(dir.path(), "test.tml", TEST_VALUE_PAYLOAD);
    let dump = dir.path().join("Data.xml");

    let options = ArianeOptions::debug().with_debug_dump(&dump);
    read_payload(&path, &options).unwrap();

    assert_eq!(fs::read_to_string(&dump).unwrap(), TEST_VALUE_PAYLOAD);
}

#[test]
fn test_read_without_debug_does_not_dump() {
    let dir = TempDir::new().unwrap();
    let path = write_tml(dir.path(), "test.tml", TEST_VALUE_PAYLOAD);
    let dump = dir.path().join("dump.xml");

    let options = ArianeOptions::default().with_debug_dump(&dump);
    read_payload(&path, &options).unwrap();

    assert!(!dump.exists());
}

// =============================================================================
// WRITING
// =============================================================================

#[test]
fn test_write_tml_has_single_data_entry() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.tml");

    write_payload(TEST_VALUE_PAYLOAD.as_bytes(), &path, &ArianeOptions::default()).unwrap();

    assert_eq!(entry_names(&path), vec!["Data.xml"]);
    assert_eq!(read_entry(&path, "Data.xml"), TEST_VALUE_PAYLOAD);
}

#[test]
fn test_write_tml_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = write_tml(dir.path(), "out.tml", "<CaveFile><Old/></CaveFile>");

    write_payload(TEST_VALUE_PAYLOAD.as_bytes(), &path, &ArianeOptions::default()).unwrap();

    assert_eq!(read_entry(&path, "Data.xml"), TEST_VALUE_PAYLOAD);
    // the staging file is renamed away
    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(leftovers.len(), 1);
}

#[test]
fn test_failed_write_leaves_no_staging_file() {
    let dir = TempDir::new().unwrap();
    // a non-empty directory in place of the target makes the final rename fail
    let path = dir.path().join("out.tml");
    fs::create_dir(&path).unwrap();
    fs::write(path.join("keep.txt"), "x").unwrap();

    let err = write_payload(TEST_VALUE_PAYLOAD.as_bytes(), &path, &ArianeOptions::default())
        .unwrap_err();
    assert!(matches!(err, InterchangeError::Io(_)), "{err:?}");

    assert!(!dir.path().join(".out.tml.partial").exists());
    let entries: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec!["out.tml"]);
    assert!(path.join("keep.txt").exists());
}

#[rstest]
#[case("out.tmlu")]
#[case("out.TMLU")]
fn test_write_tmlu_is_unsupported(#[case] file: &str) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(file);

    let err = write_payload(TEST_VALUE_PAYLOAD.as_bytes(), &path, &ArianeOptions::default())
        .unwrap_err();
    assert!(matches!(err, InterchangeError::UnsupportedOperation(_)), "{err:?}");
    assert!(!path.exists());
}

#[test]
fn test_write_unknown_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.zip");

    let err = write_payload(b"<CaveFile/>", &path, &ArianeOptions::default()).unwrap_err();
    assert!(matches!(err, InterchangeError::UnknownFormat(ref t) if t == "ZIP"));
}

#[test]
fn test_write_debug_dumps_payload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.tml");
    let dump = dir.path().join("dump.xml");

    let options = ArianeOptions::debug().with_debug_dump(&dump);
    write_payload(TEST_VALUE_PAYLOAD.as_bytes(), &path, &options).unwrap();

    assert_eq!(fs::read_to_string(&dump).unwrap(), TEST_VALUE_PAYLOAD);
}

#[test]
fn test_failed_debug_dump_is_not_fatal() {
    let dir = TempDir::new().unwrap();
    let path = write_tml(dir.path(), "test.tml", TEST_VALUE_PAYLOAD);
    let dump = dir.path().join("no_such_dir").join("Data.xml");

    let options = ArianeOptions::debug().with_debug_dump(&dump);
    assert!(read_payload(&path, &options).is_ok());
}
