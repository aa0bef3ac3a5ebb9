//! Annotator configuration.
//!
//! Everything a host may tune about a session: the colour palette, stroke
//! widths, the arrow-head size and the eraser colour. Every field has a
//! default, so `{}` is a valid configuration.

use crate::color::Color;
use crate::error::{InkError, Result};
use crate::model::is_valid_width;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotatorConfig {
    /// Selectable stroke colours. The first entry is the colour a session
    /// opens with.
    pub palette: Vec<Color>,

    /// Width a session opens with.
    pub default_width: f32,

    /// Widths cycled by the "next width" shortcut.
    pub width_presets: Vec<f32>,

    /// Length of each arrow-head chevron segment, independent of the
    /// shaft length.
    pub arrow_head_length: f32,

    /// Colour stamped on strokes drawn in eraser mode. Eraser strokes paint
    /// over what is below; they never remove earlier strokes.
    pub eraser_color: Color,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            palette: vec![
                Color::from_rgba8(0xFF, 0x00, 0x00, 0xFF),
                Color::from_rgba8(0x00, 0x00, 0xFF, 0xFF),
                Color::from_rgba8(0x00, 0xFF, 0x00, 0xFF),
                Color::from_rgba8(0xFF, 0xFF, 0x00, 0xFF),
                Color::BLACK,
                Color::WHITE,
            ],
            default_width: 3.0,
            width_presets: vec![2.0, 3.0, 5.0, 8.0],
            arrow_head_length: 15.0,
            eraser_color: Color::TRANSPARENT,
        }
    }
}

impl AnnotatorConfig {
    /// Parse and validate a JSON configuration. Missing fields take their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.palette.is_empty() {
            return Err(InkError::Config("palette must not be empty".into()));
        }
        if !is_valid_width(self.default_width) {
            return Err(InkError::Config(format!(
                "default_width must be positive, got {}",
                self.default_width
            )));
        }
        if let Some(bad) = self.width_presets.iter().find(|w| !is_valid_width(**w)) {
            return Err(InkError::Config(format!(
                "width presets must be positive, got {bad}"
            )));
        }
        if !(self.arrow_head_length.is_finite() && self.arrow_head_length >= 0.0) {
            return Err(InkError::Config(format!(
                "arrow_head_length must be non-negative, got {}",
                self.arrow_head_length
            )));
        }
        Ok(())
    }

    /// The colour a session opens with.
    pub fn initial_color(&self) -> Color {
        self.palette.first().copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(AnnotatorConfig::from_json("{}").unwrap(), AnnotatorConfig::default());
    }

    #[test]
    fn partial_override() {
        let config = AnnotatorConfig::from_json(
            r##"{"palette": ["#000", "white"], "eraser_color": "#FFFFFF", "default_width": 6}"##,
        )
        .unwrap();
        assert_eq!(config.initial_color(), Color::BLACK);
        assert_eq!(config.eraser_color, Color::WHITE);
        assert_eq!(config.default_width, 6.0);
        assert_eq!(config.arrow_head_length, 15.0);
    }

    #[test]
    fn rejects_invalid_values() {
        for json in [
            r#"{"palette": []}"#,
            r#"{"default_width": 0}"#,
            r#"{"width_presets": [2, -1]}"#,
            r#"{"arrow_head_length": -4}"#,
        ] {
            assert!(
                matches!(AnnotatorConfig::from_json(json), Err(InkError::Config(_))),
                "{json} should be rejected"
            );
        }
    }

    #[test]
    fn bad_colour_is_a_json_error() {
        assert!(matches!(
            AnnotatorConfig::from_json(r#"{"palette": ["not-a-colour"]}"#),
            Err(InkError::Json(_))
        ));
    }
}
