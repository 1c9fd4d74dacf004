use egui::{Painter, Pos2, Rect, Shape, Vec2};
use tiny_skia::{PathBuilder, Pixmap, Transform};
use uuid::Uuid;

use super::Element;
use super::common::{self, StrokeStyle};

/// Outline shapes whose geometry is an axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxKind {
    Rectangle,
    Ellipse,
}

/// Rectangle or ellipse outline spanned by two drag corners.
///
/// The stored rect is always normalized, so dragging up or to the left moves
/// the origin instead of producing a negative size.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxShape {
    id: Uuid,
    kind: BoxKind,
    bounds: Rect,
    style: StrokeStyle,
}

impl BoxShape {
    pub fn new(kind: BoxKind, corner_a: Pos2, corner_b: Pos2, style: StrokeStyle) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            bounds: Rect::from_two_pos(corner_a, corner_b),
            style,
        }
    }

    pub fn kind(&self) -> BoxKind {
        self.kind
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Re-span the box between the drag anchor and the current pointer
    pub fn set_corners(&mut self, corner_a: Pos2, corner_b: Pos2) {
        self.bounds = Rect::from_two_pos(corner_a, corner_b);
    }

    fn has_area(&self) -> bool {
        self.bounds.width() > 0.0 && self.bounds.height() > 0.0
    }

    fn ellipse_outline(&self, origin: Vec2) -> Vec<Pos2> {
        let center = self.bounds.center() + origin;
        let radius = self.bounds.size() / 2.0;
        (0..common::ELLIPSE_SEGMENTS)
            .map(|i| {
                let angle = i as f32 / common::ELLIPSE_SEGMENTS as f32 * std::f32::consts::TAU;
                Pos2::new(
                    center.x + radius.x * angle.cos(),
                    center.y + radius.y * angle.sin(),
                )
            })
            .collect()
    }
}

impl Element for BoxShape {
    fn id(&self) -> Uuid {
        self.id
    }

    fn element_type(&self) -> &'static str {
        match self.kind {
            BoxKind::Rectangle => "rectangle",
            BoxKind::Ellipse => "ellipse",
        }
    }

    fn style(&self) -> StrokeStyle {
        self.style
    }

    fn rect(&self) -> Rect {
        self.bounds
    }

    fn draw(&self, painter: &Painter, origin: Vec2) {
        if !self.has_area() {
            return;
        }
        match self.kind {
            BoxKind::Rectangle => {
                painter.rect_stroke(self.bounds.translate(origin), 0.0, self.style.egui_stroke());
            }
            BoxKind::Ellipse => {
                painter.add(Shape::closed_line(
                    self.ellipse_outline(origin),
                    self.style.egui_stroke(),
                ));
            }
        }
    }

    fn rasterize(&self, pixmap: &mut Pixmap) {
        let Some(rect) = common::skia_rect(self.bounds) else {
            return;
        };
        let path = match self.kind {
            BoxKind::Rectangle => Some(PathBuilder::from_rect(rect)),
            BoxKind::Ellipse => PathBuilder::from_oval(rect),
        };
        if let Some(path) = path {
            let mut stroke = self.style.skia_stroke();
            stroke.line_cap = tiny_skia::LineCap::Butt;
            stroke.line_join = tiny_skia::LineJoin::Miter;
            pixmap.stroke_path(
                &path,
                &self.style.skia_paint(),
                &stroke,
                Transform::identity(),
                None,
            );
        }
    }

    /// Bounds containment; the tolerance only applies to segment-based shapes.
    fn hit_test(&self, pos: Pos2, _tolerance: f32) -> bool {
        self.bounds.contains(pos)
    }

    fn map_points(&mut self, f: &dyn Fn(Pos2) -> Pos2) {
        self.bounds = Rect::from_two_pos(f(self.bounds.min), f(self.bounds.max));
    }
}
