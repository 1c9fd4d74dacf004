use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::element::StrokeStyle;
use crate::filter::DEFAULT_BRIGHTNESS_DELTA;
use crate::tools::ToolKind;

pub const MIN_BRUSH_SIZE: f32 = 1.0;
pub const MAX_BRUSH_SIZE: f32 = 50.0;

/// Quick-pick colors shown above the color picker
pub const PALETTE: [Color32; 6] = [
    Color32::BLACK,
    Color32::WHITE,
    Color32::RED,
    Color32::GREEN,
    Color32::BLUE,
    Color32::YELLOW,
];

/// Color and size applied to newly drawn elements.
/// The size doubles as the eraser's hit tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushSettings {
    pub color: Color32,
    pub size: f32,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            size: 5.0,
        }
    }
}

impl BrushSettings {
    pub fn set_size(&mut self, size: f32) {
        self.size = size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
    }

    pub fn style(&self) -> StrokeStyle {
        StrokeStyle::new(self.color, self.size)
    }
}

/// User settings persisted between sessions through eframe storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PaintSettings {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub brush: BrushSettings,
    pub brightness_delta: i16,
    pub tool: ToolKind,
}

impl Default for PaintSettings {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 600,
            brush: BrushSettings::default(),
            brightness_delta: DEFAULT_BRIGHTNESS_DELTA,
            tool: ToolKind::Pencil,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brush_size_is_clamped() {
        let mut brush = BrushSettings::default();
        brush.set_size(0.0);
        assert_eq!(brush.size, MIN_BRUSH_SIZE);
        brush.set_size(500.0);
        assert_eq!(brush.size, MAX_BRUSH_SIZE);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let settings: PaintSettings =
            serde_json::from_str(r#"{ "canvas_width": 320, "tool": "Eraser" }"#).unwrap();
        assert_eq!(settings.canvas_width, 320);
        assert_eq!(settings.canvas_height, 600);
        assert_eq!(settings.tool, ToolKind::Eraser);
        assert_eq!(settings.brush, BrushSettings::default());
    }
}
