//! Drawing-session settings: the tool, colour and width the *next* stroke
//! is committed with.
//!
//! Changing a setting never touches strokes that are already committed.

use ink_core::model::is_valid_width;
use ink_core::{AnnotatorConfig, Color, ToolKind};

/// What a finished gesture turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    Draw(ToolKind),
    /// Freehand strokes in the eraser colour, painted over earlier strokes.
    Eraser,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolSettings {
    pub mode: DrawMode,
    /// Session colour. Kept while the eraser is active so leaving eraser
    /// mode restores it.
    pub color: Color,
    pub width: f32,
    /// Last drawing tool, restored when the eraser is switched off.
    last_tool: ToolKind,
}

impl ToolSettings {
    /// Opening state: pen, first palette colour, default width.
    pub fn reset(config: &AnnotatorConfig) -> Self {
        Self {
            mode: DrawMode::Draw(ToolKind::Pen),
            color: config.initial_color(),
            width: config.default_width,
            last_tool: ToolKind::Pen,
        }
    }

    pub fn tool(&self) -> ToolKind {
        match self.mode {
            DrawMode::Draw(tool) => tool,
            DrawMode::Eraser => ToolKind::Pen,
        }
    }

    pub fn is_eraser(&self) -> bool {
        self.mode == DrawMode::Eraser
    }

    /// Selecting a tool leaves eraser mode.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.mode = DrawMode::Draw(tool);
        self.last_tool = tool;
    }

    pub fn set_eraser(&mut self, on: bool) {
        self.mode = if on {
            DrawMode::Eraser
        } else {
            DrawMode::Draw(self.last_tool)
        };
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Non-positive or non-finite widths are ignored. Returns whether the
    /// width was applied.
    pub fn set_width(&mut self, width: f32) -> bool {
        if !is_valid_width(width) {
            return false;
        }
        self.width = width;
        true
    }

    /// `(tool, color, width)` the next committed stroke is tagged with.
    pub fn commit_style(&self, config: &AnnotatorConfig) -> (ToolKind, Color, f32) {
        match self.mode {
            DrawMode::Draw(tool) => (tool, self.color, self.width),
            DrawMode::Eraser => (ToolKind::Pen, config.eraser_color, self.width),
        }
    }

    /// Advance to the palette entry after the current colour (wrapping).
    /// A colour not in the palette jumps to the first entry.
    pub fn cycle_color(&mut self, palette: &[Color]) {
        if palette.is_empty() {
            return;
        }
        let next = palette
            .iter()
            .position(|c| *c == self.color)
            .map_or(0, |i| (i + 1) % palette.len());
        self.color = palette[next];
    }

    /// Advance to the smallest preset wider than the current width, wrapping
    /// to the narrowest.
    pub fn cycle_width(&mut self, presets: &[f32]) {
        let wider = presets
            .iter()
            .copied()
            .filter(|w| *w > self.width)
            .min_by(f32::total_cmp);
        let next = wider.or_else(|| presets.iter().copied().min_by(f32::total_cmp));
        if let Some(w) = next {
            self.width = w;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_uses_config_defaults() {
        let config = AnnotatorConfig::default();
        let settings = ToolSettings::reset(&config);
        assert_eq!(settings.mode, DrawMode::Draw(ToolKind::Pen));
        assert_eq!(settings.color, config.palette[0]);
        assert_eq!(settings.width, config.default_width);
    }

    #[test]
    fn eraser_commits_pen_in_eraser_colour() {
        let config = AnnotatorConfig {
            eraser_color: Color::WHITE,
            ..AnnotatorConfig::default()
        };
        let mut settings = ToolSettings::reset(&config);
        settings.set_tool(ToolKind::Arrow);
        settings.set_eraser(true);
        assert_eq!(
            settings.commit_style(&config),
            (ToolKind::Pen, Color::WHITE, config.default_width)
        );

        settings.set_eraser(false);
        assert_eq!(settings.tool(), ToolKind::Arrow);
        assert_eq!(settings.commit_style(&config).1, config.palette[0]);
    }

    #[test]
    fn invalid_width_is_ignored() {
        let config = AnnotatorConfig::default();
        let mut settings = ToolSettings::reset(&config);
        assert!(!settings.set_width(0.0));
        assert!(!settings.set_width(f32::INFINITY));
        assert_eq!(settings.width, 3.0);
        assert!(settings.set_width(8.0));
        assert_eq!(settings.width, 8.0);
    }

    #[test]
    fn cycling_wraps() {
        let config = AnnotatorConfig::default();
        let mut settings = ToolSettings::reset(&config);

        for expected in config.palette.iter().skip(1).chain(config.palette.first()) {
            settings.cycle_color(&config.palette);
            assert_eq!(settings.color, *expected);
        }

        // 3 → 5 → 8 → 2
        let presets = [2.0, 3.0, 5.0, 8.0];
        settings.cycle_width(&presets);
        assert_eq!(settings.width, 5.0);
        settings.cycle_width(&presets);
        assert_eq!(settings.width, 8.0);
        settings.cycle_width(&presets);
        assert_eq!(settings.width, 2.0);
    }
}
