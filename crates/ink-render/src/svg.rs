//! SVG export of stroke batches.
//!
//! Produces a standalone document sized to the annotated image, one `<g>`
//! per stroke so the drawing order survives in the markup.

use crate::primitives::{Primitive, StrokeBatch};
use ink_core::Color;
use std::fmt::Write;

pub fn render_svg<I>(batches: I, width: f32, height: f32) -> String
where
    I: IntoIterator<Item = StrokeBatch>,
{
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    );

    for batch in batches {
        let _ = writeln!(
            svg,
            "<g fill=\"none\" stroke=\"{}\"{} stroke-width=\"{}\" stroke-linecap=\"round\" stroke-linejoin=\"round\">",
            svg_color(batch.color),
            svg_opacity(batch.color),
            batch.width
        );
        for primitive in &batch.primitives {
            write_primitive(&mut svg, primitive);
        }
        svg.push_str("</g>\n");
    }

    svg.push_str("</svg>");
    svg
}

fn write_primitive(out: &mut String, primitive: &Primitive) {
    let _ = match primitive {
        Primitive::Polyline(points) => {
            let coords: Vec<String> = points.iter().map(|p| format!("{},{}", p.x, p.y)).collect();
            writeln!(out, "  <polyline points=\"{}\" />", coords.join(" "))
        }
        Primitive::Segment { from, to } => writeln!(
            out,
            "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" />",
            from.x, from.y, to.x, to.y
        ),
        Primitive::Circle { center, radius } => writeln!(
            out,
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" />",
            center.x, center.y, radius
        ),
        Primitive::Rect {
            x,
            y,
            width,
            height,
        } => writeln!(
            out,
            "  <rect x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\" />"
        ),
    };
}

fn svg_color(c: Color) -> String {
    let [r, g, b, _] = c.to_rgba8();
    format!("#{r:02X}{g:02X}{b:02X}")
}

fn svg_opacity(c: Color) -> String {
    let a = c.a.clamp(0.0, 1.0);
    if (a - 1.0).abs() < f32::EPSILON {
        String::new()
    } else {
        format!(" stroke-opacity=\"{a}\"")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{RenderOptions, render};
    use ink_core::model::{Point, Stroke, ToolKind};

    fn stroke(tool: ToolKind, color: Color, raw: &[(f32, f32)]) -> Stroke {
        let points = raw.iter().copied().map(Point::from).collect();
        Stroke::new(tool, color, 2.0, points).unwrap()
    }

    #[test]
    fn one_group_per_stroke_in_order() {
        let history = vec![
            stroke(ToolKind::Pen, Color::BLACK, &[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]),
            stroke(ToolKind::Rectangle, Color::WHITE, &[(5.0, 5.0), (2.0, 9.0)]),
            stroke(ToolKind::Circle, Color::BLACK, &[(0.0, 0.0), (6.0, 8.0)]),
        ];
        let svg = render_svg(render(&history, RenderOptions::default()), 640.0, 480.0);

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<g ").count(), 3);
        let poly = svg.find("<polyline points=\"0,0 1,1 2,0\"").unwrap();
        let rect = svg.find("<rect x=\"2\" y=\"5\" width=\"3\" height=\"4\"").unwrap();
        let circle = svg.find("<circle cx=\"3\" cy=\"4\" r=\"5\"").unwrap();
        assert!(poly < rect && rect < circle);
    }

    #[test]
    fn transparent_eraser_strokes_have_zero_opacity() {
        let history = vec![stroke(
            ToolKind::Pen,
            Color::TRANSPARENT,
            &[(0.0, 0.0), (3.0, 3.0)],
        )];
        let svg = render_svg(render(&history, RenderOptions::default()), 10.0, 10.0);
        assert!(svg.contains("stroke-opacity=\"0\""));
        assert!(svg.contains("fill=\"none\""));
    }

    #[test]
    fn empty_history_is_an_empty_canvas() {
        let svg = render_svg(Vec::<StrokeBatch>::new(), 10.0, 20.0);
        assert!(svg.contains("viewBox=\"0 0 10 20\""));
        assert!(!svg.contains("<g"));
    }
}
