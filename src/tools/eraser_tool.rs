use egui::Pos2;

use super::{Tool, ToolContext, ToolKind};
use crate::command::Command;

/// Removes the topmost element under the pointer, on press and while dragging.
/// The hit tolerance is the current brush size.
#[derive(Debug, Clone, Default)]
pub struct EraserTool {
    pressed: bool,
}

impl EraserTool {
    fn erase_at(&self, pos: Pos2, ctx: &ToolContext<'_>) -> Option<Command> {
        ctx.canvas
            .topmost_hit(pos, ctx.brush.size)
            .map(|index| Command::RemoveElement { index })
    }
}

impl Tool for EraserTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Eraser
    }

    fn reset(&mut self) {
        self.pressed = false;
    }

    fn on_pointer_down(&mut self, pos: Pos2, ctx: &ToolContext<'_>) -> Option<Command> {
        self.pressed = true;
        self.erase_at(pos, ctx)
    }

    fn on_pointer_move(&mut self, pos: Pos2, ctx: &ToolContext<'_>) -> Option<Command> {
        if !self.pressed {
            return None;
        }
        self.erase_at(pos, ctx)
    }

    fn on_pointer_up(&mut self, _pos: Pos2, _ctx: &ToolContext<'_>) -> Option<Command> {
        self.pressed = false;
        None
    }

    fn is_active(&self) -> bool {
        self.pressed
    }
}
