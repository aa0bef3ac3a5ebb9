//! Stroke history: the ordered list of committed strokes, used as an undo
//! stack.
//!
//! Strokes are only ever appended at the end, popped from the end (undo) or
//! dropped all at once (clear). There is no redo.

use ink_core::{Color, Point, Stroke, ToolKind};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct StrokeHistory {
    strokes: Vec<Stroke>,
}

impl StrokeHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a stroke from the inputs and append it. Inputs that cannot
    /// form a stroke (fewer than two points, bad width) are rejected
    /// silently. Returns whether a stroke was appended.
    pub fn commit(&mut self, tool: ToolKind, color: Color, width: f32, points: Vec<Point>) -> bool {
        let count = points.len();
        match Stroke::new(tool, color, width, points) {
            Some(stroke) => {
                self.push(stroke);
                true
            }
            None => {
                log::trace!("rejected {tool} stroke ({count} points, width {width})");
                false
            }
        }
    }

    /// Append an already-built stroke.
    pub fn push(&mut self, stroke: Stroke) {
        log::debug!(
            "commit #{} {} {} w={} ({} points)",
            self.strokes.len(),
            stroke.tool(),
            stroke.color(),
            stroke.width(),
            stroke.points().len()
        );
        self.strokes.push(stroke);
    }

    /// Remove and return the most recent stroke, if any.
    pub fn undo(&mut self) -> Option<Stroke> {
        let stroke = self.strokes.pop()?;
        log::debug!("undo {} stroke, {} left", stroke.tool(), self.strokes.len());
        Some(stroke)
    }

    /// Remove every stroke. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.strokes.len();
        self.strokes.clear();
        if removed > 0 {
            log::debug!("cleared {removed} strokes");
        }
        removed
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn into_strokes(self) -> Vec<Stroke> {
        self.strokes
    }
}
