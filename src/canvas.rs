use std::sync::atomic::{AtomicU64, Ordering};

use egui::{Pos2, Rect, Vec2};
use image::{Rgba, RgbaImage, imageops};
use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementType};
use crate::error::CanvasError;
use crate::filter::{AppliedFilter, FilterKind};
use crate::raster;

pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

// Revisions are unique across every canvas and snapshot, so a restored
// snapshot never collides with a revision the renderer has already uploaded.
static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

fn next_revision() -> u64 {
    NEXT_REVISION.fetch_add(1, Ordering::Relaxed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotation {
    Clockwise90,
    CounterClockwise90,
    Half,
}

impl Rotation {
    pub fn label(&self) -> &'static str {
        match self {
            Rotation::Clockwise90 => "Rotate 90° CW",
            Rotation::CounterClockwise90 => "Rotate 90° CCW",
            Rotation::Half => "Rotate 180°",
        }
    }
}

/// The drawing surface: an opaque base bitmap with live elements on top.
///
/// Elements are kept in paint order; the last one is drawn topmost.
#[derive(Debug, Clone)]
pub struct Canvas {
    bitmap: RgbaImage,
    elements: Vec<ElementType>,
    applied_filter: Option<AppliedFilter>,
    revision: u64,
}

impl Canvas {
    /// Creates a white canvas. Zero dimensions are bumped to one pixel.
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_bitmap(RgbaImage::from_pixel(width.max(1), height.max(1), BACKGROUND))
    }

    pub fn from_bitmap(bitmap: RgbaImage) -> Self {
        Self {
            bitmap,
            elements: Vec::new(),
            applied_filter: None,
            revision: next_revision(),
        }
    }

    pub fn width(&self) -> u32 {
        self.bitmap.width()
    }

    pub fn height(&self) -> u32 {
        self.bitmap.height()
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width() as f32, self.height() as f32)
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_min_size(Pos2::ZERO, self.size())
    }

    pub fn bitmap(&self) -> &RgbaImage {
        &self.bitmap
    }

    /// Changes whenever the base bitmap is replaced
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn elements(&self) -> &[ElementType] {
        &self.elements
    }

    pub fn applied_filter(&self) -> Option<FilterKind> {
        self.applied_filter.as_ref().map(|f| f.kind)
    }

    fn set_bitmap(&mut self, bitmap: RgbaImage) {
        self.bitmap = bitmap;
        self.revision = next_revision();
    }

    /// Appends an element on top and returns its index
    pub fn add_element(&mut self, element: ElementType) -> usize {
        self.applied_filter = None;
        self.elements.push(element);
        self.elements.len() - 1
    }

    pub fn update_element(&mut self, index: usize, element: ElementType) -> Result<(), CanvasError> {
        let len = self.elements.len();
        let slot = self
            .elements
            .get_mut(index)
            .ok_or(CanvasError::IndexOutOfRange { index, len })?;
        *slot = element;
        self.applied_filter = None;
        Ok(())
    }

    /// Extends the freehand stroke at `index` by one point
    pub fn append_point(&mut self, index: usize, point: Pos2) -> Result<(), CanvasError> {
        let len = self.elements.len();
        match self.elements.get_mut(index) {
            Some(ElementType::Stroke(stroke)) => stroke.add_point(point),
            Some(_) => return Err(CanvasError::NotAStroke { index }),
            None => return Err(CanvasError::IndexOutOfRange { index, len }),
        }
        self.applied_filter = None;
        Ok(())
    }

    pub fn remove_element(&mut self, index: usize) -> Result<ElementType, CanvasError> {
        if index >= self.elements.len() {
            return Err(CanvasError::IndexOutOfRange {
                index,
                len: self.elements.len(),
            });
        }
        self.applied_filter = None;
        Ok(self.elements.remove(index))
    }

    /// Index of the most recently added element within `tolerance` of `pos`
    pub fn topmost_hit(&self, pos: Pos2, tolerance: f32) -> Option<usize> {
        self.elements
            .iter()
            .rposition(|element| element.hit_test(pos, tolerance))
    }

    /// Removes every element and paints the bitmap white
    pub fn clear(&mut self) {
        self.elements.clear();
        self.applied_filter = None;
        let (w, h) = self.bitmap.dimensions();
        self.set_bitmap(RgbaImage::from_pixel(w, h, BACKGROUND));
    }

    /// Base bitmap with every element composited on top
    pub fn render(&self) -> Result<RgbaImage, CanvasError> {
        raster::render(&self.bitmap, &self.elements)
    }

    /// Burns the elements into the base bitmap
    pub fn flatten(&mut self) -> Result<(), CanvasError> {
        if self.elements.is_empty() {
            return Ok(());
        }
        let rendered = self.render()?;
        self.elements.clear();
        self.applied_filter = None;
        self.set_bitmap(rendered);
        Ok(())
    }

    /// Applies `kind`, or removes it when it is already the active filter.
    ///
    /// Filters never stack: switching to another filter starts again from the
    /// unfiltered pixels.
    pub fn apply_filter(&mut self, kind: FilterKind) -> Result<(), CanvasError> {
        self.flatten()?;
        match self.applied_filter.take() {
            Some(active) if active.kind.same_filter(&kind) => {
                self.set_bitmap(active.original);
            }
            Some(active) => {
                self.set_bitmap(kind.apply(&active.original));
                self.applied_filter = Some(AppliedFilter {
                    kind,
                    original: active.original,
                });
            }
            None => {
                let original = self.bitmap.clone();
                self.set_bitmap(kind.apply(&original));
                self.applied_filter = Some(AppliedFilter { kind, original });
            }
        }
        Ok(())
    }

    /// Rotates the bitmap and every element around the canvas
    pub fn rotate(&mut self, rotation: Rotation) {
        let w = self.width() as f32;
        let h = self.height() as f32;
        let (bitmap, map): (RgbaImage, Box<dyn Fn(Pos2) -> Pos2>) = match rotation {
            Rotation::Clockwise90 => (
                imageops::rotate90(&self.bitmap),
                Box::new(move |p: Pos2| Pos2::new(h - p.y, p.x)),
            ),
            Rotation::CounterClockwise90 => (
                imageops::rotate270(&self.bitmap),
                Box::new(move |p: Pos2| Pos2::new(p.y, w - p.x)),
            ),
            Rotation::Half => (
                imageops::rotate180(&self.bitmap),
                Box::new(move |p: Pos2| Pos2::new(w - p.x, h - p.y)),
            ),
        };
        for element in &mut self.elements {
            element.map_points(map.as_ref());
        }
        self.applied_filter = None;
        self.set_bitmap(bitmap);
    }

    /// Whole-pixel region of `rect` that lies on the canvas, if it has any area
    pub fn clamp_region(&self, rect: Rect) -> Option<Rect> {
        let bounds = self.bounds();
        let left = rect.min.x.clamp(0.0, bounds.max.x).round();
        let top = rect.min.y.clamp(0.0, bounds.max.y).round();
        let right = rect.max.x.clamp(0.0, bounds.max.x).round();
        let bottom = rect.max.y.clamp(0.0, bounds.max.y).round();
        (right - left >= 1.0 && bottom - top >= 1.0)
            .then(|| Rect::from_min_max(Pos2::new(left, top), Pos2::new(right, bottom)))
    }

    /// Crops the canvas to `rect`. Elements keep their position relative to the
    /// pixels they cover and may extend past the new edges.
    pub fn crop(&mut self, rect: Rect) -> Result<(), CanvasError> {
        let region = self.clamp_region(rect).ok_or(CanvasError::EmptyCrop)?;
        let cropped = imageops::crop_imm(
            &self.bitmap,
            region.min.x as u32,
            region.min.y as u32,
            region.width() as u32,
            region.height() as u32,
        )
        .to_image();

        let offset = -region.min.to_vec2();
        for element in &mut self.elements {
            element.translate(offset);
        }
        self.applied_filter = None;
        self.set_bitmap(cropped);
        Ok(())
    }
}
