use egui::Pos2;

use super::{Tool, ToolContext, ToolKind};
use crate::command::Command;
use crate::element::{ElementType, Stroke};

/// Pencil: records every pointer position into a freehand stroke
#[derive(Debug, Clone, Default)]
pub struct FreehandTool {
    /// Canvas index of the stroke being drawn
    current: Option<usize>,
}

impl Tool for FreehandTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Pencil
    }

    fn reset(&mut self) {
        self.current = None;
    }

    fn on_pointer_down(&mut self, pos: Pos2, ctx: &ToolContext<'_>) -> Option<Command> {
        let stroke = Stroke::new(vec![pos], ctx.brush.style());
        // AddElement always appends, so the new stroke lands at the current length.
        self.current = Some(ctx.canvas.elements().len());
        Some(Command::AddElement(ElementType::Stroke(stroke)))
    }

    fn on_pointer_move(&mut self, pos: Pos2, _ctx: &ToolContext<'_>) -> Option<Command> {
        let index = self.current?;
        Some(Command::AppendPoint { index, point: pos })
    }

    fn on_pointer_up(&mut self, _pos: Pos2, _ctx: &ToolContext<'_>) -> Option<Command> {
        self.current = None;
        None
    }

    fn is_active(&self) -> bool {
        self.current.is_some()
    }
}
