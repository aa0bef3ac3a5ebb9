//! Stroke colours and the colour-string parser.
//!
//! Hosts hand colours over as CSS-like strings (`#F00`, `#FF000080`,
//! `rgba(255, 0, 0, 0.5)`, `transparent`). They are parsed once, at the
//! boundary, into a plain RGBA value.

use crate::error::{InkError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use winnow::ascii::{float, space0};
use winnow::combinator::{alt, delimited, separated};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::take_while;

/// RGBA color. Stored as 4 × f32 [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Parse a hex color string: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
    /// The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let digits = hex
            .bytes()
            .map(hex_val)
            .collect::<Option<Vec<u8>>>()?;

        match *digits.as_slice() {
            [r, g, b] => Some(Self::from_rgba8(r * 17, g * 17, b * 17, 255)),
            [r, g, b, a] => Some(Self::from_rgba8(r * 17, g * 17, b * 17, a * 17)),
            [r1, r0, g1, g0, b1, b0] => {
                Some(Self::from_rgba8(r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0, 255))
            }
            [r1, r0, g1, g0, b1, b0, a1, a0] => Some(Self::from_rgba8(
                r1 << 4 | r0,
                g1 << 4 | g0,
                b1 << 4 | b0,
                a1 << 4 | a0,
            )),
            _ => None,
        }
    }

    /// Channels as 8-bit values, rounded.
    pub fn to_rgba8(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a].map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    /// `#RRGGBB` when opaque, `#RRGGBBAA` otherwise.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.to_rgba8()[3] == 0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for Color {
    type Err = InkError;

    fn from_str(s: &str) -> Result<Self> {
        parse_color(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_color(&s).map_err(serde::de::Error::custom)
    }
}

fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

// ─── Parser ──────────────────────────────────────────────────────────────

/// Parse a host colour string.
///
/// Accepts hex forms, `rgb(r, g, b)` / `rgba(r, g, b, a)` with channels in
/// 0–255 and alpha in 0–1, and a handful of keywords. Case and surrounding
/// whitespace are ignored.
pub fn parse_color(input: &str) -> Result<Color> {
    let lowered = input.trim().to_ascii_lowercase();
    let mut rest = lowered.as_str();
    let color = color_value
        .parse_next(&mut rest)
        .map_err(|_| InkError::InvalidColor(input.to_string()))?;
    if !rest.trim().is_empty() {
        return Err(InkError::InvalidColor(input.to_string()));
    }
    Ok(color)
}

fn color_value(input: &mut &str) -> ModalResult<Color> {
    alt((parse_hex_color, parse_rgb_function, parse_named_color)).parse_next(input)
}

fn backtrack() -> ErrMode<ContextError> {
    ErrMode::Backtrack(ContextError::new())
}

fn parse_hex_color(input: &mut &str) -> ModalResult<Color> {
    let _ = '#'.parse_next(input)?;
    let digits: &str = take_while(1.., |c: char| c.is_ascii_hexdigit()).parse_next(input)?;
    Color::from_hex(digits).ok_or_else(backtrack)
}

fn parse_rgb_function(input: &mut &str) -> ModalResult<Color> {
    let name = alt(("rgba", "rgb")).parse_next(input)?;
    let _ = space0.parse_next(input)?;
    let channels: Vec<f32> = delimited(
        '(',
        separated(3..=4, delimited(space0, float::<_, f32, _>, space0), ','),
        ')',
    )
    .parse_next(input)?;

    let arity = if name == "rgba" { 4 } else { 3 };
    if channels.len() != arity {
        return Err(backtrack());
    }
    let rgb_ok = channels[..3].iter().all(|c| (0.0..=255.0).contains(c));
    let alpha = channels.get(3).copied().unwrap_or(1.0);
    if !rgb_ok || !(0.0..=1.0).contains(&alpha) {
        return Err(backtrack());
    }
    Ok(Color::rgba(
        channels[0] / 255.0,
        channels[1] / 255.0,
        channels[2] / 255.0,
        alpha,
    ))
}

fn parse_named_color(input: &mut &str) -> ModalResult<Color> {
    let name: &str = take_while(1.., |c: char| c.is_ascii_alphabetic()).parse_next(input)?;
    match name {
        "transparent" => Ok(Color::TRANSPARENT),
        "black" => Ok(Color::BLACK),
        "white" => Ok(Color::WHITE),
        "red" => Ok(Color::from_rgba8(255, 0, 0, 255)),
        "green" => Ok(Color::from_rgba8(0, 128, 0, 255)),
        "blue" => Ok(Color::from_rgba8(0, 0, 255, 255)),
        "yellow" => Ok(Color::from_rgba8(255, 255, 0, 255)),
        _ => Err(backtrack()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_forms() {
        assert_eq!(parse_color("#F00").unwrap().to_hex(), "#FF0000");
        assert_eq!(parse_color("#ff000080").unwrap().to_hex(), "#FF000080");
        assert_eq!(parse_color("  #00FF00 ").unwrap().to_hex(), "#00FF00");
        assert_eq!(parse_color("#0000").unwrap(), Color::TRANSPARENT);
    }

    #[test]
    fn rgb_functions() {
        let c = parse_color("rgb(255, 128, 0)").unwrap();
        assert_eq!(c.to_rgba8(), [255, 128, 0, 255]);

        let c = parse_color("RGBA(0,0,255, 0.5)").unwrap();
        assert_eq!(c.to_rgba8(), [0, 0, 255, 128]);
    }

    #[test]
    fn keywords() {
        assert!(parse_color("transparent").unwrap().is_transparent());
        assert_eq!(parse_color("White").unwrap(), Color::WHITE);
    }

    #[test]
    fn rejects_garbage() {
        for bad in [
            "",
            "#12",
            "rgb(255, 0, 0, 0.5)",
            "rgba(255, 0, 0)",
            "#1234567",
            "rgb(300, 0, 0)",
            "rgba(0,0,0,2)",
            "mauve",
            "#FFF x",
        ] {
            assert!(
                matches!(parse_color(bad), Err(InkError::InvalidColor(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn serde_uses_hex_strings() {
        let json = serde_json::to_string(&Color::WHITE).unwrap();
        assert_eq!(json, "\"#FFFFFF\"");
        let back: Color = serde_json::from_str("\"rgb(0, 0, 0)\"").unwrap();
        assert_eq!(back, Color::BLACK);
    }
}
