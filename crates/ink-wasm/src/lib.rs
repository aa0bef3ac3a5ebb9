//! WASM bridge for Inkmark: exposes an annotation session to JavaScript.
//!
//! Compiled via `wasm-pack build --target web` and loaded by the hosting
//! image-picker screen (web or hybrid mobile shell).

mod render2d;

use ink_core::{AnnotatorConfig, ToolKind, parse_color};
use ink_editor::{AnnotationSession, DispatchOutcome, InputEvent, ShortcutMap};
use ink_render::StrokeBatch;
use ink_render::svg::render_svg;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// Result of `InkCanvas::handle_key`, serialized for the host.
#[derive(Serialize)]
struct KeyResult {
    changed: bool,
    action: &'static str,
    tool: String,
}

/// The main WASM-facing canvas controller.
///
/// Owns one annotation session. After `save` or `cancel` the session is
/// closed: drawing calls become no-ops returning `false`.
#[wasm_bindgen]
pub struct InkCanvas {
    session: Option<AnnotationSession>,
    width: f64,
    height: f64,
}

#[wasm_bindgen]
impl InkCanvas {
    /// Open a session over `image` with the given canvas size.
    /// `config_json` may be empty for the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(image: &str, width: f64, height: f64, config_json: &str) -> Result<InkCanvas, JsValue> {
        console_error_panic_hook_setup();

        let config = if config_json.trim().is_empty() {
            AnnotatorConfig::default()
        } else {
            AnnotatorConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?
        };

        Ok(Self {
            session: Some(AnnotationSession::open(image, config)),
            width,
            height,
        })
    }

    /// Whether the session is still open.
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Resize the overlay canvas.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Render committed strokes and the gesture in progress.
    pub fn render(&self, ctx: &CanvasRenderingContext2d) {
        let Some(session) = &self.session else {
            ctx.clear_rect(0.0, 0.0, self.width, self.height);
            return;
        };
        let preview = session.preview();
        render2d::render_overlay(ctx, self.width, self.height, session.render(), preview.as_ref());
    }

    /// Export the committed strokes as an SVG document.
    pub fn to_svg(&self) -> String {
        match &self.session {
            Some(session) => render_svg(session.render(), self.width as f32, self.height as f32),
            None => render_svg(Vec::<StrokeBatch>::new(), self.width as f32, self.height as f32),
        }
    }

    // ─── Pointer API ─────────────────────────────────────────────────────
    //
    // Each handler returns `true` when the overlay needs a repaint.

    pub fn handle_pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.handle(InputEvent::from_pointer_down(x, y)) || self.is_open()
    }

    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.handle(InputEvent::from_pointer_move(x, y)) || self.is_gesturing()
    }

    /// Returns `true` when a stroke was committed.
    pub fn handle_pointer_up(&mut self, x: f32, y: f32) -> bool {
        self.handle(InputEvent::from_pointer_up(x, y))
    }

    // ─── Settings ────────────────────────────────────────────────────────

    /// Switch tool by name (`pen`, `line`, `arrow`, `circle`, `rectangle`,
    /// or `eraser`). Unknown names are ignored and return `false`.
    pub fn set_tool(&mut self, name: &str) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if name.trim().eq_ignore_ascii_case("eraser") {
            session.set_eraser(true);
            return true;
        }
        match name.parse::<ToolKind>() {
            Ok(tool) => {
                session.set_tool(tool);
                true
            }
            Err(e) => {
                log::warn!("{e}");
                false
            }
        }
    }

    /// Current tool name, `eraser` while erasing.
    pub fn get_tool_name(&self) -> String {
        match &self.session {
            Some(s) if s.settings().is_eraser() => "eraser".to_string(),
            Some(s) => s.settings().tool().name().to_string(),
            None => String::new(),
        }
    }

    pub fn set_eraser(&mut self, on: bool) -> bool {
        match self.session.as_mut() {
            Some(session) => {
                session.set_eraser(on);
                true
            }
            None => false,
        }
    }

    /// Set the stroke colour from a CSS-like string. Unparseable colours
    /// are ignored and return `false`.
    pub fn set_color(&mut self, color: &str) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        match parse_color(color) {
            Ok(c) => {
                session.set_color(c);
                true
            }
            Err(e) => {
                log::warn!("{e}");
                false
            }
        }
    }

    pub fn get_color(&self) -> String {
        self.session
            .as_ref()
            .map(|s| s.settings().color.to_hex())
            .unwrap_or_default()
    }

    pub fn set_width(&mut self, width: f32) -> bool {
        self.session
            .as_mut()
            .is_some_and(|session| session.set_width(width))
    }

    // ─── Edit ────────────────────────────────────────────────────────────

    /// Undo the last stroke. Returns `true` if one was removed.
    pub fn undo(&mut self) -> bool {
        self.session.as_mut().is_some_and(|s| s.undo())
    }

    /// Remove every stroke. Returns `true` if any were removed.
    pub fn clear(&mut self) -> bool {
        self.session.as_mut().is_some_and(|s| s.clear())
    }

    pub fn stroke_count(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.strokes().len())
    }

    // ─── Keyboard Shortcut API ───────────────────────────────────────────

    /// Handle a keyboard event. Returns a JSON string:
    /// `{"changed":bool, "action":"<action_name>", "tool":"<tool_name>"}`
    ///
    /// Save and cancel shortcuts are reported with `"action":"save"` /
    /// `"cancel"`; the host then calls `save()` or `cancel()`.
    pub fn handle_key(&mut self, key: &str, ctrl: bool, shift: bool, alt: bool, meta: bool) -> String {
        let action = ShortcutMap::resolve(key, ctrl, shift, alt, meta);
        let (changed, action_name) = match (action, self.session.as_mut()) {
            (Some(action), Some(session)) => match session.dispatch(action) {
                DispatchOutcome::Updated(changed) => (changed, action.name()),
                DispatchOutcome::Save | DispatchOutcome::Cancel => (false, action.name()),
            },
            _ => (false, "none"),
        };
        let result = KeyResult {
            changed,
            action: action_name,
            tool: self.get_tool_name(),
        };
        serde_json::to_string(&result).unwrap_or_default()
    }

    // ─── Closing ─────────────────────────────────────────────────────────

    /// Close the session and return the saved document as JSON.
    /// Returns an empty string if the session was already closed.
    pub fn save(&mut self) -> String {
        let Some(session) = self.session.take() else {
            return String::new();
        };
        match session.save().to_json() {
            Ok(json) => json,
            Err(e) => {
                log::error!("failed to encode annotation document: {e}");
                String::new()
            }
        }
    }

    /// Close the session and discard every stroke.
    pub fn cancel(&mut self) {
        if let Some(session) = self.session.take() {
            session.cancel();
        }
    }
}

impl InkCanvas {
    fn handle(&mut self, event: InputEvent) -> bool {
        self.session
            .as_mut()
            .is_some_and(|session| session.handle(&event))
    }

    fn is_gesturing(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.drawing_state() == ink_editor::DrawingState::Gesturing)
    }
}

/// Install a panic hook that forwards panics to the browser console.
fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Inkmark WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

// ─── Standalone helpers (no canvas needed) ───────────────────────────────

/// Render a saved JSON document to SVG at the given size.
/// Returns an empty string if the document does not decode.
#[wasm_bindgen]
pub fn document_to_svg(json: &str, width: f32, height: f32, config_json: &str) -> String {
    let config = if config_json.trim().is_empty() {
        AnnotatorConfig::default()
    } else {
        match AnnotatorConfig::from_json(config_json) {
            Ok(c) => c,
            Err(_) => return String::new(),
        }
    };
    match ink_core::AnnotationDocument::from_json(json) {
        Ok(doc) => render_svg(
            ink_render::render(&doc.strokes, (&config).into()),
            width,
            height,
        ),
        Err(_) => String::new(),
    }
}

/// Validate a colour string. Returns the normalized hex form, or an empty
/// string if it does not parse.
#[wasm_bindgen]
pub fn normalize_color(color: &str) -> String {
    parse_color(color).map(|c| c.to_hex()).unwrap_or_default()
}
