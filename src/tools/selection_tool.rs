use egui::{Pos2, Rect};

use super::{Tool, ToolContext, ToolKind};
use crate::command::Command;

/// Rubber-band rectangle used as the crop region
#[derive(Debug, Clone, Default)]
pub struct SelectionTool {
    anchor: Option<Pos2>,
    rect: Option<Rect>,
}

impl SelectionTool {
    /// Crop command for the current selection, if there is one
    pub fn crop_command(&self) -> Option<Command> {
        self.rect.map(Command::Crop)
    }
}

impl Tool for SelectionTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Select
    }

    fn reset(&mut self) {
        self.anchor = None;
        self.rect = None;
    }

    fn on_pointer_down(&mut self, pos: Pos2, _ctx: &ToolContext<'_>) -> Option<Command> {
        self.anchor = Some(pos);
        self.rect = Some(Rect::from_two_pos(pos, pos));
        None
    }

    fn on_pointer_move(&mut self, pos: Pos2, _ctx: &ToolContext<'_>) -> Option<Command> {
        let anchor = self.anchor?;
        self.rect = Some(Rect::from_two_pos(anchor, pos));
        None
    }

    fn on_pointer_up(&mut self, pos: Pos2, ctx: &ToolContext<'_>) -> Option<Command> {
        let anchor = self.anchor.take()?;
        // A click without a drag, or a drag entirely off the canvas, selects nothing.
        let rect = Rect::from_two_pos(anchor, pos);
        self.rect = ctx.canvas.clamp_region(rect).map(|_| rect);
        None
    }

    fn is_active(&self) -> bool {
        self.anchor.is_some()
    }

    fn selection(&self) -> Option<Rect> {
        self.rect
    }
}
