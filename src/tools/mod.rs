use egui::{Pos2, Rect};
use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::command::Command;
use crate::settings::BrushSettings;

mod eraser_tool;
mod freehand_tool;
mod selection_tool;
mod shape_tool;

pub use eraser_tool::EraserTool;
pub use freehand_tool::FreehandTool;
pub use selection_tool::SelectionTool;
pub use shape_tool::{ShapeKind, ShapeTool};

/// Which behaviour pointer events on the canvas trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    Pencil,
    Line,
    Rectangle,
    Ellipse,
    Eraser,
    Select,
}

impl ToolKind {
    pub const ALL: [ToolKind; 6] = [
        ToolKind::Pencil,
        ToolKind::Line,
        ToolKind::Rectangle,
        ToolKind::Ellipse,
        ToolKind::Eraser,
        ToolKind::Select,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::Pencil => "Pencil",
            ToolKind::Line => "Line",
            ToolKind::Rectangle => "Rectangle",
            ToolKind::Ellipse => "Ellipse",
            ToolKind::Eraser => "Eraser",
            ToolKind::Select => "Select",
        }
    }
}

/// What a tool can see while handling a pointer event
pub struct ToolContext<'a> {
    pub canvas: &'a Canvas,
    pub brush: BrushSettings,
}

/// Tool trait defines the interface for all canvas tools.
///
/// Tools never mutate the canvas themselves; they return a [`Command`] for the
/// application to run through the history.
pub trait Tool {
    fn kind(&self) -> ToolKind;

    /// Drop any in-progress gesture
    fn reset(&mut self);

    /// Handle pointer press on the canvas
    fn on_pointer_down(&mut self, pos: Pos2, ctx: &ToolContext<'_>) -> Option<Command>;

    /// Handle pointer movement while the button is held
    fn on_pointer_move(&mut self, pos: Pos2, ctx: &ToolContext<'_>) -> Option<Command>;

    /// Handle pointer release
    fn on_pointer_up(&mut self, pos: Pos2, ctx: &ToolContext<'_>) -> Option<Command>;

    /// True between pointer down and pointer up
    fn is_active(&self) -> bool;

    /// Current selection rectangle, for tools that keep one
    fn selection(&self) -> Option<Rect> {
        None
    }
}

/// Enum of all available tools, used instead of `Box<dyn Tool>`
#[derive(Debug, Clone)]
pub enum ToolType {
    Freehand(FreehandTool),
    Shape(ShapeTool),
    Eraser(EraserTool),
    Selection(SelectionTool),
}

impl ToolType {
    pub fn new(kind: ToolKind) -> Self {
        match kind {
            ToolKind::Pencil => Self::Freehand(FreehandTool::default()),
            ToolKind::Line => Self::Shape(ShapeTool::new(ShapeKind::Line)),
            ToolKind::Rectangle => Self::Shape(ShapeTool::new(ShapeKind::Rectangle)),
            ToolKind::Ellipse => Self::Shape(ShapeTool::new(ShapeKind::Ellipse)),
            ToolKind::Eraser => Self::Eraser(EraserTool::default()),
            ToolKind::Select => Self::Selection(SelectionTool::default()),
        }
    }

    fn as_tool(&self) -> &dyn Tool {
        match self {
            Self::Freehand(tool) => tool,
            Self::Shape(tool) => tool,
            Self::Eraser(tool) => tool,
            Self::Selection(tool) => tool,
        }
    }

    fn as_tool_mut(&mut self) -> &mut dyn Tool {
        match self {
            Self::Freehand(tool) => tool,
            Self::Shape(tool) => tool,
            Self::Eraser(tool) => tool,
            Self::Selection(tool) => tool,
        }
    }
}

impl Tool for ToolType {
    fn kind(&self) -> ToolKind {
        self.as_tool().kind()
    }

    fn reset(&mut self) {
        self.as_tool_mut().reset();
    }

    fn on_pointer_down(&mut self, pos: Pos2, ctx: &ToolContext<'_>) -> Option<Command> {
        self.as_tool_mut().on_pointer_down(pos, ctx)
    }

    fn on_pointer_move(&mut self, pos: Pos2, ctx: &ToolContext<'_>) -> Option<Command> {
        self.as_tool_mut().on_pointer_move(pos, ctx)
    }

    fn on_pointer_up(&mut self, pos: Pos2, ctx: &ToolContext<'_>) -> Option<Command> {
        self.as_tool_mut().on_pointer_up(pos, ctx)
    }

    fn is_active(&self) -> bool {
        self.as_tool().is_active()
    }

    fn selection(&self) -> Option<Rect> {
        self.as_tool().selection()
    }
}
