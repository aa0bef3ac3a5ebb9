//! Canvas2D software renderer.
//!
//! Draws stroke batches to an HTML `<canvas>` layered over the annotated
//! image via `CanvasRenderingContext2d`. The image itself is drawn by the
//! host; this canvas only carries the marks.

use ink_core::Color;
use ink_render::{Primitive, StrokeBatch};
use std::f64::consts::TAU;
use web_sys::CanvasRenderingContext2d;

const ERASER_GUIDE: Color = Color::rgba(0.5, 0.5, 0.5, 0.8);

/// Clear the overlay and draw every batch, then the live preview on top.
pub fn render_overlay<I>(
    ctx: &CanvasRenderingContext2d,
    canvas_width: f64,
    canvas_height: f64,
    batches: I,
    preview: Option<&StrokeBatch>,
) where
    I: IntoIterator<Item = StrokeBatch>,
{
    ctx.clear_rect(0.0, 0.0, canvas_width, canvas_height);
    ctx.set_line_cap("round");
    ctx.set_line_join("round");

    for batch in batches {
        draw_batch(ctx, &batch);
    }
    if let Some(batch) = preview {
        if batch.color.is_transparent() {
            draw_eraser_guide(ctx, batch);
        } else {
            draw_batch(ctx, batch);
        }
    }
}

/// A transparent eraser leaves no visible mark, so its live preview is
/// drawn as a thin dashed guide instead.
fn draw_eraser_guide(ctx: &CanvasRenderingContext2d, batch: &StrokeBatch) {
    ctx.save();
    let _ = ctx.set_line_dash(&js_sys::Array::of2(
        &wasm_bindgen::JsValue::from_f64(4.0),
        &wasm_bindgen::JsValue::from_f64(4.0),
    ));
    let guide = StrokeBatch {
        primitives: batch.primitives.clone(),
        color: ERASER_GUIDE,
        width: 1.0,
    };
    draw_batch(ctx, &guide);
    ctx.restore();
}

fn draw_batch(ctx: &CanvasRenderingContext2d, batch: &StrokeBatch) {
    ctx.set_stroke_style_str(&css_color(batch.color));
    ctx.set_line_width(batch.width as f64);

    for primitive in &batch.primitives {
        ctx.begin_path();
        match primitive {
            Primitive::Polyline(points) => {
                let mut iter = points.iter();
                if let Some(first) = iter.next() {
                    ctx.move_to(first.x as f64, first.y as f64);
                    for p in iter {
                        ctx.line_to(p.x as f64, p.y as f64);
                    }
                }
            }
            Primitive::Segment { from, to } => {
                ctx.move_to(from.x as f64, from.y as f64);
                ctx.line_to(to.x as f64, to.y as f64);
            }
            Primitive::Circle { center, radius } => {
                let _ = ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU);
            }
            Primitive::Rect {
                x,
                y,
                width,
                height,
            } => {
                ctx.rect(*x as f64, *y as f64, *width as f64, *height as f64);
            }
        }
        ctx.stroke();
    }
}

fn css_color(c: Color) -> String {
    let [r, g, b, _] = c.to_rgba8();
    format!("rgba({r}, {g}, {b}, {})", c.a.clamp(0.0, 1.0))
}
