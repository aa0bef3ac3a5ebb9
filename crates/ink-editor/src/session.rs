//! Annotation session: one open → close cycle of the editor over an image.
//!
//! The session exclusively owns the stroke history, the drawing settings
//! and the gesture capture. Everything runs synchronously on the caller's
//! thread; rendering is a pure projection of the history, so any render
//! after a mutation reflects it.
//!
//! Closing consumes the session: `save` hands the strokes back as an
//! `AnnotationDocument`, `cancel` drops them.

use crate::capture::{DrawingState, GestureCapture};
use crate::history::StrokeHistory;
use crate::input::InputEvent;
use crate::shortcuts::ShortcutAction;
use crate::tools::ToolSettings;
use ink_core::{AnnotationDocument, AnnotatorConfig, Color, Point, Stroke, ToolKind};
use ink_render::{RenderOptions, StrokeBatch, project_points};

/// What a dispatched shortcut asks of the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Applied inside the session; `true` when the drawing changed.
    Updated(bool),
    /// The host should close the session with `save`.
    Save,
    /// The host should close the session with `cancel`.
    Cancel,
}

#[derive(Debug)]
pub struct AnnotationSession {
    image: String,
    config: AnnotatorConfig,
    settings: ToolSettings,
    capture: GestureCapture,
    history: StrokeHistory,
}

impl AnnotationSession {
    /// Open a session over `image` (an opaque handle, URI or asset id).
    /// Settings start at pen, first palette colour and the default width.
    pub fn open(image: impl Into<String>, config: AnnotatorConfig) -> Self {
        let image = image.into();
        log::debug!("open annotation session over {image:?}");
        Self {
            settings: ToolSettings::reset(&config),
            image,
            config,
            capture: GestureCapture::new(),
            history: StrokeHistory::new(),
        }
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn config(&self) -> &AnnotatorConfig {
        &self.config
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn history(&self) -> &StrokeHistory {
        &self.history
    }

    pub fn strokes(&self) -> &[Stroke] {
        self.history.strokes()
    }

    pub fn drawing_state(&self) -> DrawingState {
        self.capture.state()
    }

    // ─── Gestures ────────────────────────────────────────────────────────

    pub fn gesture_start(&mut self, point: Point) {
        self.capture.start(point);
    }

    pub fn gesture_move(&mut self, point: Point) {
        self.capture.extend(point);
    }

    /// End the current gesture, committing it with the current settings.
    /// Returns whether a stroke was committed.
    pub fn gesture_end(&mut self) -> bool {
        match self.capture.finish() {
            Some(points) => self.commit_with_settings(points),
            None => false,
        }
    }

    /// Feed a pointer event. Returns whether the history changed.
    pub fn handle(&mut self, event: &InputEvent) -> bool {
        match self.capture.handle(event) {
            Some(points) => self.commit_with_settings(points),
            None => false,
        }
    }

    fn commit_with_settings(&mut self, points: Vec<Point>) -> bool {
        let (tool, color, width) = self.settings.commit_style(&self.config);
        self.history.commit(tool, color, width, points)
    }

    // ─── History ─────────────────────────────────────────────────────────

    /// Append a stroke built from the inputs. Fewer than two points (or a
    /// bad width) is rejected without error.
    pub fn commit_stroke(
        &mut self,
        tool: ToolKind,
        color: Color,
        width: f32,
        points: Vec<Point>,
    ) -> bool {
        self.history.commit(tool, color, width, points)
    }

    /// Remove the most recent stroke. A gesture in progress is untouched.
    pub fn undo(&mut self) -> bool {
        self.history.undo().is_some()
    }

    /// Remove every stroke. Returns whether anything was removed.
    pub fn clear(&mut self) -> bool {
        self.history.clear() > 0
    }

    // ─── Settings ────────────────────────────────────────────────────────

    pub fn set_tool(&mut self, tool: ToolKind) {
        self.settings.set_tool(tool);
    }

    pub fn set_color(&mut self, color: Color) {
        self.settings.set_color(color);
    }

    pub fn set_width(&mut self, width: f32) -> bool {
        self.settings.set_width(width)
    }

    pub fn set_eraser(&mut self, on: bool) {
        self.settings.set_eraser(on);
    }

    pub fn toggle_eraser(&mut self) {
        let on = !self.settings.is_eraser();
        self.settings.set_eraser(on);
    }

    pub fn next_color(&mut self) {
        self.settings.cycle_color(&self.config.palette);
    }

    pub fn next_width(&mut self) {
        self.settings.cycle_width(&self.config.width_presets);
    }

    /// Apply a keyboard shortcut. Save and cancel are handed back to the
    /// host, which owns the session and closes it.
    pub fn dispatch(&mut self, action: ShortcutAction) -> DispatchOutcome {
        let changed = match action {
            ShortcutAction::Tool(tool) => {
                self.set_tool(tool);
                false
            }
            ShortcutAction::ToggleEraser => {
                self.toggle_eraser();
                false
            }
            ShortcutAction::NextColor => {
                self.next_color();
                false
            }
            ShortcutAction::NextWidth => {
                self.next_width();
                false
            }
            ShortcutAction::Undo => self.undo(),
            ShortcutAction::ClearAll => self.clear(),
            ShortcutAction::Save => return DispatchOutcome::Save,
            ShortcutAction::Cancel => return DispatchOutcome::Cancel,
        };
        DispatchOutcome::Updated(changed)
    }

    // ─── Rendering ───────────────────────────────────────────────────────

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::from(&self.config)
    }

    /// One primitive batch per committed stroke, in history order.
    pub fn render(&self) -> impl Iterator<Item = StrokeBatch> + Clone + '_ {
        ink_render::render(self.history.strokes(), self.render_options())
    }

    /// Live feedback for the gesture in progress, drawn as it would be
    /// committed right now.
    pub fn preview(&self) -> Option<StrokeBatch> {
        let (tool, color, width) = self.settings.commit_style(&self.config);
        let primitives = project_points(tool, self.capture.in_progress(), &self.render_options());
        if primitives.is_empty() {
            return None;
        }
        Some(StrokeBatch {
            primitives,
            color,
            width,
        })
    }

    // ─── Closing ─────────────────────────────────────────────────────────

    /// Close the session and hand the strokes back. A gesture still in
    /// progress is dropped.
    pub fn save(self) -> AnnotationDocument {
        log::debug!(
            "save {} strokes over {:?}",
            self.history.len(),
            self.image
        );
        AnnotationDocument::new(self.image, self.history.into_strokes())
    }

    /// Close the session without persisting anything.
    pub fn cancel(self) {
        log::debug!(
            "cancel session over {:?}, dropping {} strokes",
            self.image,
            self.history.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ink_render::Primitive;

    fn session() -> AnnotationSession {
        AnnotationSession::open("asset://tool/42", AnnotatorConfig::default())
    }

    #[test]
    fn preview_follows_current_tool() {
        let mut s = session();
        s.set_tool(ToolKind::Rectangle);
        s.gesture_start(Point::new(5.0, 5.0));
        assert!(s.preview().is_none());

        s.gesture_move(Point::new(2.0, 9.0));
        let preview = s.preview().unwrap();
        assert_eq!(
            preview.primitives.as_slice(),
            &[Primitive::Rect {
                x: 2.0,
                y: 5.0,
                width: 3.0,
                height: 4.0,
            }]
        );
        assert_eq!(preview.color, s.config().palette[0]);

        assert!(s.gesture_end());
        assert!(s.preview().is_none());
    }

    #[test]
    fn undo_during_gesture_keeps_gesture() {
        let mut s = session();
        s.commit_stroke(
            ToolKind::Line,
            Color::BLACK,
            2.0,
            vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)],
        );
        s.gesture_start(Point::new(10.0, 10.0));
        s.gesture_move(Point::new(20.0, 20.0));
        assert!(s.undo());
        assert_eq!(s.drawing_state(), DrawingState::Gesturing);
        assert!(s.gesture_end());
        assert_eq!(s.strokes().len(), 1);
        assert_eq!(s.strokes()[0].first_point(), Point::new(10.0, 10.0));
    }

    #[test]
    fn dispatch_routes_actions() {
        let mut s = session();
        assert_eq!(
            s.dispatch(ShortcutAction::Tool(ToolKind::Arrow)),
            DispatchOutcome::Updated(false)
        );
        assert_eq!(s.settings().tool(), ToolKind::Arrow);
        assert_eq!(s.dispatch(ShortcutAction::Undo), DispatchOutcome::Updated(false));

        s.gesture_start(Point::new(0.0, 0.0));
        s.gesture_move(Point::new(9.0, 0.0));
        s.gesture_end();
        assert_eq!(s.dispatch(ShortcutAction::Undo), DispatchOutcome::Updated(true));
        assert_eq!(s.dispatch(ShortcutAction::Save), DispatchOutcome::Save);
        assert_eq!(s.dispatch(ShortcutAction::Cancel), DispatchOutcome::Cancel);
    }
}
