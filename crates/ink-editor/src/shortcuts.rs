//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s, so hardware
//! keyboards (tablets, desktop web hosts) drive the annotator the same way
//! the on-screen toolbar does.

use ink_core::ToolKind;

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    // ── Tool switching ──
    Tool(ToolKind),
    ToggleEraser,

    // ── Style ──
    NextColor,
    NextWidth,

    // ── Edit ──
    Undo,
    ClearAll,

    // ── Session ──
    Save,
    Cancel,
}

impl ShortcutAction {
    /// Stable name reported to hosts.
    pub fn name(self) -> &'static str {
        match self {
            ShortcutAction::Tool(tool) => tool.name(),
            ShortcutAction::ToggleEraser => "eraser",
            ShortcutAction::NextColor => "next_color",
            ShortcutAction::NextWidth => "next_width",
            ShortcutAction::Undo => "undo",
            ShortcutAction::ClearAll => "clear",
            ShortcutAction::Save => "save",
            ShortcutAction::Cancel => "cancel",
        }
    }
}

/// Resolves key events into shortcut actions.
///
/// On macOS `meta` is ⌘; elsewhere `ctrl` plays the same role.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// `key` is the `KeyboardEvent.key` value (e.g. `"z"`, `"Escape"`).
    /// Returns `None` if the key combo has no binding.
    pub fn resolve(
        key: &str,
        ctrl: bool,
        shift: bool,
        _alt: bool,
        meta: bool,
    ) -> Option<ShortcutAction> {
        let cmd = ctrl || meta;

        if cmd {
            if shift {
                return None;
            }
            return match key {
                "z" | "Z" => Some(ShortcutAction::Undo),
                "s" | "S" => Some(ShortcutAction::Save),
                "Delete" | "Backspace" => Some(ShortcutAction::ClearAll),
                _ => None,
            };
        }

        if shift {
            return None;
        }

        match key {
            "p" | "P" => Some(ShortcutAction::Tool(ToolKind::Pen)),
            "l" | "L" => Some(ShortcutAction::Tool(ToolKind::Line)),
            "a" | "A" => Some(ShortcutAction::Tool(ToolKind::Arrow)),
            "c" | "C" => Some(ShortcutAction::Tool(ToolKind::Circle)),
            "r" | "R" => Some(ShortcutAction::Tool(ToolKind::Rectangle)),
            "e" | "E" => Some(ShortcutAction::ToggleEraser),
            "x" | "X" => Some(ShortcutAction::NextColor),
            "w" | "W" => Some(ShortcutAction::NextWidth),
            "Enter" => Some(ShortcutAction::Save),
            "Escape" => Some(ShortcutAction::Cancel),
            _ => None,
        }
    }
}
