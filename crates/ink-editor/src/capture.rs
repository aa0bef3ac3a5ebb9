//! Gesture capture.
//!
//! Turns one continuous pointer interaction into an ordered sequence of raw
//! samples. The capture only knows about points: tool and style are applied
//! by the session when the gesture ends.
//!
//! ```text
//!            start            finish
//!   Idle ───────────▶ Gesturing ───────▶ Idle
//!                      │    ▲
//!                      └────┘ extend
//! ```

use crate::input::InputEvent;
use ink_core::{MIN_STROKE_POINTS, Point};

/// Whether a gesture is currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingState {
    Idle,
    Gesturing,
}

#[derive(Debug, Default)]
pub struct GestureCapture {
    /// `Some` while gesturing. Never empty when `Some`.
    points: Option<Vec<Point>>,
}

impl GestureCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DrawingState {
        if self.points.is_some() {
            DrawingState::Gesturing
        } else {
            DrawingState::Idle
        }
    }

    /// Begin a gesture at `point`. A gesture already in progress is dropped.
    pub fn start(&mut self, point: Point) {
        if let Some(prev) = self.points.replace(vec![point]) {
            log::trace!("restart discarded {} in-progress points", prev.len());
        }
    }

    /// Append a sample verbatim. Ignored while idle.
    pub fn extend(&mut self, point: Point) {
        if let Some(points) = self.points.as_mut() {
            points.push(point);
        }
    }

    /// End the gesture. Returns the samples if there are enough to form a
    /// stroke; shorter sequences are discarded.
    pub fn finish(&mut self) -> Option<Vec<Point>> {
        let points = self.points.take()?;
        if points.len() < MIN_STROKE_POINTS {
            log::trace!("discarded {}-point gesture", points.len());
            return None;
        }
        Some(points)
    }

    /// Feed a pointer event. Returns the finished samples on pointer-up.
    /// The pointer-up position is not appended.
    pub fn handle(&mut self, event: &InputEvent) -> Option<Vec<Point>> {
        match *event {
            InputEvent::PointerDown { x, y } => {
                self.start(Point::new(x, y));
                None
            }
            InputEvent::PointerMove { x, y } => {
                self.extend(Point::new(x, y));
                None
            }
            InputEvent::PointerUp { .. } => self.finish(),
        }
    }

    /// Samples of the gesture in progress, empty when idle.
    pub fn in_progress(&self) -> &[Point] {
        self.points.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tap_is_discarded() {
        let mut capture = GestureCapture::new();
        capture.start(Point::new(3.0, 3.0));
        assert_eq!(capture.state(), DrawingState::Gesturing);
        assert_eq!(capture.finish(), None);
        assert_eq!(capture.state(), DrawingState::Idle);
    }

    #[test]
    fn samples_are_kept_verbatim_in_order() {
        let mut capture = GestureCapture::new();
        let events = [
            InputEvent::from_pointer_down(0.0, 0.0),
            InputEvent::from_pointer_move(0.0, 0.0),
            InputEvent::from_pointer_move(5.0, 2.0),
            InputEvent::from_pointer_move(4.0, 9.0),
        ];
        for e in &events {
            assert_eq!(capture.handle(e), None);
        }
        assert_eq!(capture.in_progress().len(), 4);

        let points = capture
            .handle(&InputEvent::from_pointer_up(100.0, 100.0))
            .unwrap();
        assert_eq!(
            points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(0.0, 0.0),
                Point::new(5.0, 2.0),
                Point::new(4.0, 9.0),
            ]
        );
        assert!(capture.in_progress().is_empty());
    }

    #[test]
    fn restart_discards_previous_gesture() {
        let mut capture = GestureCapture::new();
        capture.start(Point::new(0.0, 0.0));
        capture.extend(Point::new(1.0, 1.0));
        capture.start(Point::new(50.0, 50.0));
        capture.extend(Point::new(60.0, 60.0));
        assert_eq!(
            capture.finish(),
            Some(vec![Point::new(50.0, 50.0), Point::new(60.0, 60.0)])
        );
    }

    #[test]
    fn moves_and_ends_while_idle_are_noops() {
        let mut capture = GestureCapture::new();
        capture.extend(Point::new(1.0, 1.0));
        assert_eq!(capture.state(), DrawingState::Idle);
        assert_eq!(capture.finish(), None);
        assert!(capture.in_progress().is_empty());
    }
}
