//! Stroke history → drawable primitives.
//!
//! The projection is a pure function of each stroke: identical history
//! always yields identical primitives, so back ends can re-derive the whole
//! drawing on every change. Everything is stroked (never filled) with round
//! joins and caps.

use ink_core::model::{Point, Stroke, ToolKind};
use ink_core::{AnnotatorConfig, Color};
use smallvec::{SmallVec, smallvec};
use std::f32::consts::FRAC_PI_6;

/// A single stroked shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Connected segments through every point, in order.
    Polyline(Vec<Point>),
    Segment { from: Point, to: Point },
    Circle { center: Point, radius: f32 },
    /// Axis-aligned, `(x, y)` is the top-left corner.
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

/// Everything needed to draw one stroke. Arrows are the largest batch
/// (shaft + two chevron segments).
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeBatch {
    pub primitives: SmallVec<[Primitive; 3]>,
    pub color: Color,
    pub width: f32,
}

/// Geometry parameters that are not part of a stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub arrow_head_length: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            arrow_head_length: 15.0,
        }
    }
}

impl From<&AnnotatorConfig> for RenderOptions {
    fn from(config: &AnnotatorConfig) -> Self {
        Self {
            arrow_head_length: config.arrow_head_length,
        }
    }
}

/// Project one stroke into its primitive batch.
pub fn project_stroke(stroke: &Stroke, options: &RenderOptions) -> StrokeBatch {
    StrokeBatch {
        primitives: project_points(stroke.tool(), stroke.points(), options),
        color: stroke.color(),
        width: stroke.width(),
    }
}

/// Lazy projection of a whole history, one batch per stroke in commit
/// order. The iterator is `Clone`, so it can be restarted from any point.
pub fn render<'a>(
    strokes: &'a [Stroke],
    options: RenderOptions,
) -> impl Iterator<Item = StrokeBatch> + Clone + 'a {
    strokes
        .iter()
        .map(move |stroke| project_stroke(stroke, &options))
}

/// Per-tool geometry over raw samples. Also used for live previews of a
/// gesture that has not been committed yet; returns nothing for fewer than
/// two points.
pub fn project_points(
    tool: ToolKind,
    points: &[Point],
    options: &RenderOptions,
) -> SmallVec<[Primitive; 3]> {
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return SmallVec::new();
    };
    if points.len() < 2 {
        return SmallVec::new();
    }

    match tool {
        ToolKind::Pen => smallvec![Primitive::Polyline(points.to_vec())],
        ToolKind::Line => smallvec![Primitive::Segment {
            from: first,
            to: last
        }],
        ToolKind::Arrow => arrow(first, last, options.arrow_head_length),
        ToolKind::Circle => smallvec![Primitive::Circle {
            center: first.midpoint(last),
            radius: first.distance(last) / 2.0,
        }],
        ToolKind::Rectangle => smallvec![Primitive::Rect {
            x: first.x.min(last.x),
            y: first.y.min(last.y),
            width: (last.x - first.x).abs(),
            height: (last.y - first.y).abs(),
        }],
    }
}

/// Shaft plus two chevron segments at `tip`, each ±30° off the reversed
/// shaft direction. A zero-length arrow has no direction: shaft only.
fn arrow(tail: Point, tip: Point, head_length: f32) -> SmallVec<[Primitive; 3]> {
    let mut out: SmallVec<[Primitive; 3]> = smallvec![Primitive::Segment { from: tail, to: tip }];
    if tail == tip {
        return out;
    }

    let back = (tail.y - tip.y).atan2(tail.x - tip.x);
    for angle in [back + FRAC_PI_6, back - FRAC_PI_6] {
        out.push(Primitive::Segment {
            from: tip,
            to: Point::new(
                tip.x + head_length * angle.cos(),
                tip.y + head_length * angle.sin(),
            ),
        });
    }
    out
}
