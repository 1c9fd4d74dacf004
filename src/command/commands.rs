use egui::{Pos2, Rect};

use super::CommandResult;
use crate::canvas::{Canvas, Rotation};
use crate::element::ElementType;
use crate::filter::FilterKind;

/// Mutations that tools and panels request on the canvas
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Put a new element on top of the canvas
    AddElement(ElementType),

    /// Replace an element while a drag is in progress
    UpdateElement { index: usize, element: ElementType },

    /// Extend the freehand stroke at `index` while it is being drawn
    AppendPoint { index: usize, point: Pos2 },

    /// Remove the element at `index` (eraser)
    RemoveElement { index: usize },

    /// Remove every element and reset the bitmap
    Clear,

    /// Toggle a whole-canvas filter
    ApplyFilter(FilterKind),

    Rotate(Rotation),

    /// Crop the canvas to a region in canvas coordinates
    Crop(Rect),
}

impl Command {
    pub fn execute(self, canvas: &mut Canvas) -> CommandResult {
        match self {
            Command::AddElement(element) => {
                canvas.add_element(element);
                Ok(())
            }
            Command::UpdateElement { index, element } => canvas.update_element(index, element),
            Command::AppendPoint { index, point } => canvas.append_point(index, point),
            Command::RemoveElement { index } => canvas.remove_element(index).map(|_| ()),
            Command::Clear => {
                canvas.clear();
                Ok(())
            }
            Command::ApplyFilter(kind) => canvas.apply_filter(kind),
            Command::Rotate(rotation) => {
                canvas.rotate(rotation);
                Ok(())
            }
            Command::Crop(rect) => canvas.crop(rect),
        }
    }

    /// Live drag updates share the snapshot taken when the element was added
    pub fn can_undo(&self) -> bool {
        !matches!(
            self,
            Command::UpdateElement { .. } | Command::AppendPoint { .. }
        )
    }

    /// Short description shown in the history list
    pub fn label(&self) -> &'static str {
        match self {
            Command::AddElement(ElementType::Stroke(_)) => "Draw Stroke",
            Command::AddElement(ElementType::Line(_)) => "Draw Line",
            Command::AddElement(ElementType::Box(_)) => "Draw Shape",
            Command::UpdateElement { .. } => "Update Element",
            Command::AppendPoint { .. } => "Extend Stroke",
            Command::RemoveElement { .. } => "Erase",
            Command::Clear => "Clear",
            Command::ApplyFilter(kind) => kind.label(),
            Command::Rotate(rotation) => rotation.label(),
            Command::Crop(_) => "Crop",
        }
    }
}
