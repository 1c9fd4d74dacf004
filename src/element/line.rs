use egui::{Painter, Pos2, Rect, Vec2};
use tiny_skia::{PathBuilder, Pixmap, Transform};
use uuid::Uuid;

use super::Element;
use super::common::{self, StrokeStyle};

/// Straight segment between two points
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    id: Uuid,
    start: Pos2,
    end: Pos2,
    style: StrokeStyle,
}

impl Line {
    pub fn new(start: Pos2, end: Pos2, style: StrokeStyle) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            end,
            style,
        }
    }

    pub fn start(&self) -> Pos2 {
        self.start
    }

    pub fn end(&self) -> Pos2 {
        self.end
    }

    pub fn set_end(&mut self, end: Pos2) {
        self.end = end;
    }
}

impl Element for Line {
    fn id(&self) -> Uuid {
        self.id
    }

    fn element_type(&self) -> &'static str {
        "line"
    }

    fn style(&self) -> StrokeStyle {
        self.style
    }

    fn rect(&self) -> Rect {
        common::calculate_bounds(&[self.start, self.end], self.style.width / 2.0)
    }

    fn draw(&self, painter: &Painter, origin: Vec2) {
        painter.line_segment(
            [self.start + origin, self.end + origin],
            self.style.egui_stroke(),
        );
    }

    fn rasterize(&self, pixmap: &mut Pixmap) {
        let mut builder = PathBuilder::new();
        builder.move_to(self.start.x, self.start.y);
        builder.line_to(self.end.x, self.end.y);
        if let Some(path) = builder.finish() {
            pixmap.stroke_path(
                &path,
                &self.style.skia_paint(),
                &self.style.skia_stroke(),
                Transform::identity(),
                None,
            );
        }
    }

    fn hit_test(&self, pos: Pos2, tolerance: f32) -> bool {
        common::distance_to_line_segment(pos, self.start, self.end) <= tolerance
    }

    fn map_points(&mut self, f: &dyn Fn(Pos2) -> Pos2) {
        self.start = f(self.start);
        self.end = f(self.end);
    }
}
