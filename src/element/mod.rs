use egui::{Painter, Pos2, Rect, Vec2};
use tiny_skia::Pixmap;
use uuid::Uuid;

mod boxed;
mod common;
mod line;
mod stroke;

pub use boxed::{BoxKind, BoxShape};
pub use common::{StrokeStyle, distance_to_line_segment};
pub use line::Line;
pub use stroke::Stroke;

/// Common trait that all canvas elements implement
pub trait Element {
    /// Get the unique identifier for this element
    fn id(&self) -> Uuid;

    /// Get the element type as a string
    fn element_type(&self) -> &'static str;

    /// Stroke color and width
    fn style(&self) -> StrokeStyle;

    /// Get the bounding rectangle for this element in canvas coordinates
    fn rect(&self) -> Rect;

    /// Draw the element on screen; `origin` is the screen position of the canvas origin
    fn draw(&self, painter: &Painter, origin: Vec2);

    /// Render the element into an offscreen pixmap in canvas coordinates
    fn rasterize(&self, pixmap: &mut Pixmap);

    /// Test whether `pos` lies on the element, within `tolerance` pixels
    fn hit_test(&self, pos: Pos2, tolerance: f32) -> bool;

    /// Move every defining point through `f`
    fn map_points(&mut self, f: &dyn Fn(Pos2) -> Pos2);

    /// Translate the element by the given delta
    fn translate(&mut self, delta: Vec2) {
        self.map_points(&|p| p + delta);
    }
}

/// Enumeration of all element types that can live on the canvas
#[derive(Debug, Clone, PartialEq)]
pub enum ElementType {
    Stroke(Stroke),
    Line(Line),
    Box(BoxShape),
}

impl Element for ElementType {
    fn id(&self) -> Uuid {
        match self {
            ElementType::Stroke(s) => s.id(),
            ElementType::Line(l) => l.id(),
            ElementType::Box(b) => b.id(),
        }
    }

    fn element_type(&self) -> &'static str {
        match self {
            ElementType::Stroke(s) => s.element_type(),
            ElementType::Line(l) => l.element_type(),
            ElementType::Box(b) => b.element_type(),
        }
    }

    fn style(&self) -> StrokeStyle {
        match self {
            ElementType::Stroke(s) => s.style(),
            ElementType::Line(l) => l.style(),
            ElementType::Box(b) => b.style(),
        }
    }

    fn rect(&self) -> Rect {
        match self {
            ElementType::Stroke(s) => s.rect(),
            ElementType::Line(l) => l.rect(),
            ElementType::Box(b) => b.rect(),
        }
    }

    fn draw(&self, painter: &Painter, origin: Vec2) {
        match self {
            ElementType::Stroke(s) => s.draw(painter, origin),
            ElementType::Line(l) => l.draw(painter, origin),
            ElementType::Box(b) => b.draw(painter, origin),
        }
    }

    fn rasterize(&self, pixmap: &mut Pixmap) {
        match self {
            ElementType::Stroke(s) => s.rasterize(pixmap),
            ElementType::Line(l) => l.rasterize(pixmap),
            ElementType::Box(b) => b.rasterize(pixmap),
        }
    }

    fn hit_test(&self, pos: Pos2, tolerance: f32) -> bool {
        match self {
            ElementType::Stroke(s) => s.hit_test(pos, tolerance),
            ElementType::Line(l) => l.hit_test(pos, tolerance),
            ElementType::Box(b) => b.hit_test(pos, tolerance),
        }
    }

    fn map_points(&mut self, f: &dyn Fn(Pos2) -> Pos2) {
        match self {
            ElementType::Stroke(s) => s.map_points(f),
            ElementType::Line(l) => l.map_points(f),
            ElementType::Box(b) => b.map_points(f),
        }
    }
}

/// Factory functions for creating elements
pub mod factory {
    use super::*;

    /// Freehand stroke starting with a single point
    pub fn create_stroke(points: Vec<Pos2>, style: StrokeStyle) -> ElementType {
        ElementType::Stroke(Stroke::new(points, style))
    }

    pub fn create_line(start: Pos2, end: Pos2, style: StrokeStyle) -> ElementType {
        ElementType::Line(Line::new(start, end, style))
    }

    pub fn create_rectangle(corner_a: Pos2, corner_b: Pos2, style: StrokeStyle) -> ElementType {
        ElementType::Box(BoxShape::new(BoxKind::Rectangle, corner_a, corner_b, style))
    }

    pub fn create_ellipse(corner_a: Pos2, corner_b: Pos2, style: StrokeStyle) -> ElementType {
        ElementType::Box(BoxShape::new(BoxKind::Ellipse, corner_a, corner_b, style))
    }
}
