//! Editor-side state that lives outside the canvas: the active tool, the
//! brush, and the last pointer position shown in the status bar.
//!
//! Exactly one tool is active at a time. Switching tools drops whatever
//! gesture or selection the previous tool was holding, so a half-finished
//! drag can never leak into the next tool.
use eframe::egui::{Pos2, Rect};

use crate::command::Command;
use crate::settings::{BrushSettings, PaintSettings};
use crate::tools::{Tool, ToolKind, ToolType};

#[derive(Debug, Clone)]
pub struct EditorState {
    active_tool: ToolType,
    pub brush: BrushSettings,
    pub brightness_delta: i16,
    pointer_pos: Option<Pos2>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::from_settings(&PaintSettings::default())
    }
}

impl EditorState {
    pub fn from_settings(settings: &PaintSettings) -> Self {
        let mut brush = settings.brush;
        brush.set_size(brush.size);
        Self {
            active_tool: ToolType::new(settings.tool),
            brush,
            brightness_delta: settings.brightness_delta,
            pointer_pos: None,
        }
    }

    /// Writes the persisted parts of the editor state back into `settings`
    pub fn store_settings(&self, settings: &mut PaintSettings) {
        settings.brush = self.brush;
        settings.brightness_delta = self.brightness_delta;
        settings.tool = self.tool_kind();
    }

    pub fn active_tool(&self) -> &ToolType {
        &self.active_tool
    }

    pub fn active_tool_mut(&mut self) -> &mut ToolType {
        &mut self.active_tool
    }

    pub fn tool_kind(&self) -> ToolKind {
        self.active_tool.kind()
    }

    /// Replace the active tool. Re-selecting the current tool is a no-op.
    pub fn set_active_tool(&mut self, kind: ToolKind) {
        if self.tool_kind() == kind {
            return;
        }
        log::info!("Tool changed: {} -> {}", self.tool_kind().name(), kind.name());
        self.active_tool = ToolType::new(kind);
    }

    /// Abandon the current gesture, e.g. when history rewinds under it
    pub fn cancel_gesture(&mut self) {
        self.active_tool.reset();
    }

    pub fn selection(&self) -> Option<Rect> {
        self.active_tool.selection()
    }

    pub fn clear_selection(&mut self) {
        if let ToolType::Selection(tool) = &mut self.active_tool {
            tool.reset();
        }
    }

    /// Crop command for the live selection, if the select tool holds one
    pub fn crop_command(&self) -> Option<Command> {
        match &self.active_tool {
            ToolType::Selection(tool) => tool.crop_command(),
            _ => None,
        }
    }

    pub fn pointer_pos(&self) -> Option<Pos2> {
        self.pointer_pos
    }

    pub fn set_pointer_pos(&mut self, pos: Option<Pos2>) {
        self.pointer_pos = pos;
    }
}
