//! Stroke model.
//!
//! A `Stroke` is one committed mark on the canvas: the raw pointer samples
//! of a single gesture, tagged with the tool and style that were active when
//! the gesture ended. Strokes are values: once built they are never mutated,
//! only dropped by undo or clear.

use crate::color::Color;
use crate::error::{InkError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum number of samples for a gesture to become a stroke.
/// A single tap is noise.
pub const MIN_STROKE_POINTS: usize = 2;

// ─── Point ───────────────────────────────────────────────────────────────

/// A position in canvas-local pixels (top-left origin, relative to the
/// displayed image). Serialized as `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "(f32, f32)", into = "(f32, f32)")]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    pub fn distance(self, other: Point) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f32, f32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

// ─── Tool kind ───────────────────────────────────────────────────────────

/// The shape a stroke is drawn as.
///
/// Erasing is a drawing mode, not a tool: eraser strokes are stored as
/// `Pen` strokes in the eraser colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    Pen,
    Line,
    Arrow,
    Circle,
    Rectangle,
}

impl ToolKind {
    pub const ALL: [ToolKind; 5] = [
        ToolKind::Pen,
        ToolKind::Line,
        ToolKind::Arrow,
        ToolKind::Circle,
        ToolKind::Rectangle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Pen => "pen",
            ToolKind::Line => "line",
            ToolKind::Arrow => "arrow",
            ToolKind::Circle => "circle",
            ToolKind::Rectangle => "rectangle",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolKind {
    type Err = InkError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        ToolKind::ALL
            .into_iter()
            .find(|tool| tool.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| InkError::UnknownTool(s.to_string()))
    }
}

// ─── Stroke ──────────────────────────────────────────────────────────────

/// One committed drawn shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stroke {
    tool: ToolKind,
    color: Color,
    width: f32,
    points: Vec<Point>,
}

impl Stroke {
    /// Build a stroke, or `None` if the samples or width cannot form one
    /// (fewer than two points, non-positive or non-finite width).
    pub fn new(tool: ToolKind, color: Color, width: f32, points: Vec<Point>) -> Option<Self> {
        if points.len() < MIN_STROKE_POINTS || !is_valid_width(width) {
            return None;
        }
        Some(Self {
            tool,
            color,
            width,
            points,
        })
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Every captured sample, in drawing order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn first_point(&self) -> Point {
        self.points[0]
    }

    pub fn last_point(&self) -> Point {
        self.points[self.points.len() - 1]
    }
}

/// Widths must be positive and finite.
pub fn is_valid_width(width: f32) -> bool {
    width.is_finite() && width > 0.0
}

/// Mirror of `Stroke` used to re-validate decoded strokes.
#[derive(Deserialize)]
struct RawStroke {
    tool: ToolKind,
    color: Color,
    width: f32,
    points: Vec<Point>,
}

impl<'de> Deserialize<'de> for Stroke {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let raw = RawStroke::deserialize(deserializer)?;
        let count = raw.points.len();
        Stroke::new(raw.tool, raw.color, raw.width, raw.points).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "stroke needs at least {MIN_STROKE_POINTS} points and a positive width \
                 (got {count} points, width {})",
                raw.width
            ))
        })
    }
}
