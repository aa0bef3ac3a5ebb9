//! Integration tests: saved annotation documents.
//!
//! Decodes a document as a host would hand it back and checks it survives
//! re-encoding in both formats.

use ink_core::{AnnotationDocument, Color, Point, ToolKind};
use pretty_assertions::assert_eq;

fn fixture() -> AnnotationDocument {
    AnnotationDocument::from_json(include_str!("fixtures/lathe_inspection.json")).unwrap()
}

#[test]
fn fixture_decodes_in_drawing_order() {
    let doc = fixture();
    assert_eq!(doc.image, "content://media/external/images/media/4711");

    let tools: Vec<ToolKind> = doc.strokes.iter().map(|s| s.tool()).collect();
    assert_eq!(
        tools,
        vec![
            ToolKind::Pen,
            ToolKind::Arrow,
            ToolKind::Circle,
            ToolKind::Rectangle,
            ToolKind::Pen,
        ]
    );
    assert_eq!(doc.strokes[0].points().len(), 4);
    assert_eq!(doc.strokes[1].points()[1], Point::new(180.0, 260.0));
}

#[test]
fn colour_strings_are_normalized() {
    let doc = fixture();
    assert_eq!(doc.strokes[1].color().to_hex(), "#0000FF");
    assert_eq!(doc.strokes[3].color(), Color::BLACK);
    assert!(doc.strokes[4].color().is_transparent());

    let json = doc.to_json().unwrap();
    assert!(json.contains("\"#0000FF\""));
    assert!(!json.contains("rgb("));
}

#[test]
fn reencoding_preserves_strokes() {
    let doc = fixture();
    let from_json = AnnotationDocument::from_json(&doc.to_json().unwrap()).unwrap();
    let from_msgpack = AnnotationDocument::from_msgpack(&doc.to_msgpack().unwrap()).unwrap();
    assert_eq!(from_json, doc);
    assert_eq!(from_msgpack, doc);
}
