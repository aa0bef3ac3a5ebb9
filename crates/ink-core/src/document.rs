//! Saved annotation documents.
//!
//! What a session hands back to its host on save: the image it was opened
//! over and the committed strokes, in drawing order. Encoded as JSON for
//! hosts that pass strings around, or MessagePack for compact storage.

use crate::error::{InkError, Result};
use crate::model::Stroke;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationDocument {
    /// Opaque reference (URI, asset id) to the annotated image.
    pub image: String,
    pub strokes: Vec<Stroke>,
}

impl AnnotationDocument {
    pub fn new(image: impl Into<String>, strokes: Vec<Stroke>) -> Self {
        Self {
            image: image.into(),
            strokes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let doc: Self = serde_json::from_str(json)?;
        log::debug!("decoded {} strokes for {:?}", doc.strokes.len(), doc.image);
        Ok(doc)
    }

    pub fn to_msgpack(&self) -> Result<Vec<u8>> {
        Ok(rmp_serde::to_vec_named(self)?)
    }

    pub fn from_msgpack(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(InkError::Document("empty buffer".into()));
        }
        Ok(rmp_serde::from_slice(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::model::{Point, ToolKind};
    use pretty_assertions::assert_eq;

    fn sample() -> AnnotationDocument {
        let strokes = vec![
            Stroke::new(
                ToolKind::Pen,
                Color::BLACK,
                3.0,
                vec![Point::new(0.0, 0.0), Point::new(4.0, 2.0), Point::new(9.0, 1.0)],
            )
            .unwrap(),
            Stroke::new(
                ToolKind::Arrow,
                Color::TRANSPARENT,
                5.0,
                vec![Point::new(1.0, 1.0), Point::new(30.0, 40.0)],
            )
            .unwrap(),
        ];
        AnnotationDocument::new("file:///machines/lathe-02.jpg", strokes)
    }

    #[test]
    fn json_shape() {
        let json = sample().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["image"], "file:///machines/lathe-02.jpg");
        assert_eq!(value["strokes"][0]["tool"], "pen");
        assert_eq!(value["strokes"][1]["color"], "#00000000");
        assert_eq!(value["strokes"][1]["points"][1][0], 30.0);
    }

    #[test]
    fn json_and_msgpack_decode_to_same_strokes() {
        let doc = sample();
        assert_eq!(AnnotationDocument::from_json(&doc.to_json().unwrap()).unwrap(), doc);
        assert_eq!(
            AnnotationDocument::from_msgpack(&doc.to_msgpack().unwrap()).unwrap(),
            doc
        );
    }

    #[test]
    fn corrupt_inputs_are_errors() {
        assert!(matches!(
            AnnotationDocument::from_msgpack(&[]),
            Err(InkError::Document(_))
        ));
        assert!(matches!(
            AnnotationDocument::from_msgpack(&[0xc1]),
            Err(InkError::Decode(_))
        ));
        let short = r##"{"image":"x","strokes":[{"tool":"pen","color":"#000","width":1,"points":[[0,0]]}]}"##;
        assert!(matches!(
            AnnotationDocument::from_json(short),
            Err(InkError::Json(_))
        ));
    }
}
