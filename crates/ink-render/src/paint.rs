//! Stroke batches → Vello drawing commands.
//!
//! Each primitive is converted to kurbo geometry and stroked with round
//! joins and caps. Nothing is filled.

use crate::primitives::{Primitive, StrokeBatch};
use ink_core::Color as InkColor;
use ink_core::model::Point as InkPoint;
use kurbo::{Affine, BezPath, Cap, Circle, Join, Line, Point, Rect, Stroke as KurboStroke};
use peniko::Color;
use vello::Scene;

/// Paint every batch, in order, into a Vello scene.
///
/// Call once per frame with a freshly-cleared `Scene`.
/// Presenting the scene is left to the host.
pub fn paint_batches<I>(scene: &mut Scene, batches: I)
where
    I: IntoIterator<Item = StrokeBatch>,
{
    for batch in batches {
        paint_batch(scene, &batch);
    }
}

pub fn paint_batch(scene: &mut Scene, batch: &StrokeBatch) {
    let style = round_stroke(batch.width);
    let color = to_peniko(batch.color);

    for primitive in &batch.primitives {
        match primitive {
            Primitive::Polyline(points) => {
                let path = polyline_path(points);
                scene.stroke(&style, Affine::IDENTITY, color, None, &path);
            }
            Primitive::Segment { from, to } => {
                let line = Line::new(to_kurbo(*from), to_kurbo(*to));
                scene.stroke(&style, Affine::IDENTITY, color, None, &line);
            }
            Primitive::Circle { center, radius } => {
                let circle = Circle::new(to_kurbo(*center), *radius as f64);
                scene.stroke(&style, Affine::IDENTITY, color, None, &circle);
            }
            Primitive::Rect {
                x,
                y,
                width,
                height,
            } => {
                let rect = Rect::new(
                    *x as f64,
                    *y as f64,
                    (*x + *width) as f64,
                    (*y + *height) as f64,
                );
                scene.stroke(&style, Affine::IDENTITY, color, None, &rect);
            }
        }
    }
    log::trace!(
        "painted {} primitives in {} (w={})",
        batch.primitives.len(),
        batch.color,
        batch.width
    );
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn round_stroke(width: f32) -> KurboStroke {
    KurboStroke {
        width: width as f64,
        join: Join::Round,
        start_cap: Cap::Round,
        end_cap: Cap::Round,
        ..Default::default()
    }
}

pub(crate) fn polyline_path(points: &[InkPoint]) -> BezPath {
    let mut bez = BezPath::new();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        bez.move_to(to_kurbo(*first));
        for p in iter {
            bez.line_to(to_kurbo(*p));
        }
    }
    bez
}

fn to_kurbo(p: InkPoint) -> Point {
    Point::new(p.x as f64, p.y as f64)
}

fn to_peniko(c: InkColor) -> Color {
    let [r, g, b, a] = c.to_rgba8();
    Color::from_rgba8(r, g, b, a)
}
