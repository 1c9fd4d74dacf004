use egui::Pos2;

use super::{Tool, ToolContext, ToolKind};
use crate::command::Command;
use crate::element::{BoxKind, BoxShape, ElementType, Line};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Line,
    Rectangle,
    Ellipse,
}

#[derive(Debug, Clone)]
struct ShapeDrag {
    index: usize,
    anchor: Pos2,
    element: ElementType,
}

/// Line, rectangle and ellipse: the shape spans from the press point to the pointer
#[derive(Debug, Clone)]
pub struct ShapeTool {
    shape: ShapeKind,
    drag: Option<ShapeDrag>,
}

impl ShapeTool {
    pub fn new(shape: ShapeKind) -> Self {
        Self { shape, drag: None }
    }

    pub fn shape(&self) -> ShapeKind {
        self.shape
    }
}

impl Tool for ShapeTool {
    fn kind(&self) -> ToolKind {
        match self.shape {
            ShapeKind::Line => ToolKind::Line,
            ShapeKind::Rectangle => ToolKind::Rectangle,
            ShapeKind::Ellipse => ToolKind::Ellipse,
        }
    }

    fn reset(&mut self) {
        self.drag = None;
    }

    fn on_pointer_down(&mut self, pos: Pos2, ctx: &ToolContext<'_>) -> Option<Command> {
        let style = ctx.brush.style();
        let element = match self.shape {
            ShapeKind::Line => ElementType::Line(Line::new(pos, pos, style)),
            ShapeKind::Rectangle => ElementType::Box(BoxShape::new(BoxKind::Rectangle, pos, pos, style)),
            ShapeKind::Ellipse => ElementType::Box(BoxShape::new(BoxKind::Ellipse, pos, pos, style)),
        };
        self.drag = Some(ShapeDrag {
            index: ctx.canvas.elements().len(),
            anchor: pos,
            element: element.clone(),
        });
        Some(Command::AddElement(element))
    }

    fn on_pointer_move(&mut self, pos: Pos2, _ctx: &ToolContext<'_>) -> Option<Command> {
        let drag = self.drag.as_mut()?;
        match &mut drag.element {
            ElementType::Line(line) => line.set_end(pos),
            ElementType::Box(shape) => shape.set_corners(drag.anchor, pos),
            ElementType::Stroke(_) => return None,
        }
        Some(Command::UpdateElement {
            index: drag.index,
            element: drag.element.clone(),
        })
    }

    fn on_pointer_up(&mut self, _pos: Pos2, _ctx: &ToolContext<'_>) -> Option<Command> {
        self.drag = None;
        None
    }

    fn is_active(&self) -> bool {
        self.drag.is_some()
    }
}
