use egui::{Painter, Pos2, Rect, Shape, Vec2};
use tiny_skia::{FillRule, PathBuilder, Pixmap, Transform};
use uuid::Uuid;

use super::Element;
use super::common::{self, StrokeStyle};

/// Freehand stroke: an ordered polyline drawn with round caps and joins
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    id: Uuid,
    points: Vec<Pos2>,
    style: StrokeStyle,
}

impl Stroke {
    pub fn new(points: Vec<Pos2>, style: StrokeStyle) -> Self {
        Self {
            id: Uuid::new_v4(),
            points,
            style,
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }
}

impl Element for Stroke {
    fn id(&self) -> Uuid {
        self.id
    }

    fn element_type(&self) -> &'static str {
        "stroke"
    }

    fn style(&self) -> StrokeStyle {
        self.style
    }

    fn rect(&self) -> Rect {
        common::calculate_bounds(&self.points, self.style.width / 2.0)
    }

    fn draw(&self, painter: &Painter, origin: Vec2) {
        match self.points.as_slice() {
            [] => {}
            [point] => {
                painter.circle_filled(*point + origin, self.style.width / 2.0, self.style.color);
            }
            points => {
                let points = points.iter().map(|p| *p + origin).collect();
                painter.add(Shape::line(points, self.style.egui_stroke()));
            }
        }
    }

    fn rasterize(&self, pixmap: &mut Pixmap) {
        let paint = self.style.skia_paint();
        match self.points.as_slice() {
            [] => {}
            [point] => {
                if let Some(dot) = PathBuilder::from_circle(point.x, point.y, self.style.width / 2.0) {
                    pixmap.fill_path(&dot, &paint, FillRule::Winding, Transform::identity(), None);
                }
            }
            [first, rest @ ..] => {
                let mut builder = PathBuilder::new();
                builder.move_to(first.x, first.y);
                for point in rest {
                    builder.line_to(point.x, point.y);
                }
                if let Some(path) = builder.finish() {
                    pixmap.stroke_path(
                        &path,
                        &paint,
                        &self.style.skia_stroke(),
                        Transform::identity(),
                        None,
                    );
                }
            }
        }
    }

    fn hit_test(&self, pos: Pos2, tolerance: f32) -> bool {
        match self.points.as_slice() {
            [] => false,
            [point] => point.distance(pos) <= tolerance,
            points => points
                .windows(2)
                .any(|pair| common::distance_to_line_segment(pos, pair[0], pair[1]) <= tolerance),
        }
    }

    fn map_points(&mut self, f: &dyn Fn(Pos2) -> Pos2) {
        for point in &mut self.points {
            *point = f(*point);
        }
    }
}
