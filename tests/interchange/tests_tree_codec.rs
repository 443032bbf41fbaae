//! Tree codec tests over complete Ariane documents.

use tempfile::TempDir;

use crate::helpers::archive_helpers::*;
use crate::helpers::survey_fixtures::SURVEY_PAYLOAD;
use openspeleo::interchange::{ArianeOptions, Node, Tree, read_tree, write_tree, xml};

#[test]
fn test_repeated_siblings_become_list() {
    let document = xml::parse(SURVEY_PAYLOAD.as_bytes()).unwrap();
    let body = document.get("CaveFile").and_then(Node::as_map).unwrap();

    let shots = body
        .get("Data")
        .and_then(Node::as_map)
        .and_then(|data| data.get("SRVD"))
        .and_then(Node::as_list)
        .unwrap();
    assert_eq!(shots.len(), 2);

    // a single layerList stays a bare map
    let layers = body.get("Layers").and_then(Node::as_map).unwrap();
    assert!(matches!(layers.get("layerList"), Some(Node::Map(_))));
}

#[test]
fn test_sibling_order_is_preserved() {
    let document = xml::parse(SURVEY_PAYLOAD.as_bytes()).unwrap();
    let body = document.get("CaveFile").and_then(Node::as_map).unwrap();

    let keys: Vec<_> = body.keys().collect();
    assert_eq!(
        keys,
        vec![
            "Data",
            "caveName",
            "unit",
            "firstStartAbsoluteElevation",
            "useMagneticAzimuth",
            "Layers",
            "CartoPage"
        ]
    );
}

#[test]
fn test_empty_element_is_null() {
    let document = xml::parse(SURVEY_PAYLOAD.as_bytes()).unwrap();
    let second_shape = document
        .get("CaveFile")
        .and_then(Node::as_map)
        .and_then(|b| b.get("Data"))
        .and_then(Node::as_map)
        .and_then(|d| d.get("SRVD"))
        .and_then(Node::as_list)
        .and_then(|shots| shots[1].as_map())
        .and_then(|shot| shot.get("Shape"))
        .and_then(Node::as_map)
        .unwrap();
    assert_eq!(second_shape.get("RadiusCollection"), Some(&Node::Null));
}

#[test]
fn test_parse_render_parse_is_stable() {
    let first = xml::parse(SURVEY_PAYLOAD.as_bytes()).unwrap();
    let rendered = xml::render(&first).unwrap();
    let second = xml::parse(&rendered).unwrap();
    assert_eq!(first, second);
    assert_eq!(xml::render(&second).unwrap(), rendered);
}

#[test]
fn test_special_characters_round_trip() {
    let body = Tree::new()
        .with("caveName", "Sac Actun & <Dos Ojos> \"quoted\"")
        .with("Comment", "  padded  ")
        .with("Blank", "   ");

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("special.tml");
    write_tree(&body, &path, &ArianeOptions::default()).unwrap();

    let reread = read_tree(&path, &ArianeOptions::default()).unwrap();
    assert_eq!(reread, body);
}

#[test]
fn test_write_tree_renders_cave_file_root() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("test.tml");
    write_tree(&Tree::new().with("Test", "Value"), &path, &ArianeOptions::default()).unwrap();

    assert_eq!(
        read_entry(&path, "Data.xml"),
        "<?xml version=\"1.0\" encoding=\"utf-8\" standalone=\"yes\"?>\n<CaveFile>\n    <Test>Value</Test>\n</CaveFile>\n"
    );
}
