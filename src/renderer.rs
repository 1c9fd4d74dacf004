use eframe::egui::{self, Color32, ColorImage, Pos2, Rect, Shape, Stroke, TextureHandle, TextureOptions};

use crate::canvas::Canvas;
use crate::element::Element;

const SELECTION_STROKE: Stroke = Stroke {
    width: 1.0,
    color: Color32::from_rgb(30, 144, 255),
};
const CANVAS_BORDER: Stroke = Stroke {
    width: 1.0,
    color: Color32::from_gray(120),
};

/// Draws the canvas on screen.
///
/// The base bitmap is uploaded as a texture and only re-uploaded when the
/// canvas revision changes. Elements are drawn as egui shapes every frame.
#[derive(Default)]
pub struct Renderer {
    texture: Option<TextureHandle>,
    texture_revision: Option<u64>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn sync_texture(&mut self, ctx: &egui::Context, canvas: &Canvas) -> Option<egui::TextureId> {
        let bitmap = canvas.bitmap();
        let stale = self.texture_revision != Some(canvas.revision());
        let image = || {
            ColorImage::from_rgba_unmultiplied(
                [bitmap.width() as usize, bitmap.height() as usize],
                bitmap.as_raw(),
            )
        };

        if let Some(texture) = &mut self.texture {
            if stale {
                texture.set(image(), TextureOptions::NEAREST);
            }
        } else {
            self.texture = Some(ctx.load_texture("canvas", image(), TextureOptions::NEAREST));
        }
        self.texture_revision = Some(canvas.revision());

        self.texture.as_ref().map(TextureHandle::id)
    }

    /// Renders the canvas with its top-left corner at `origin` in screen space
    pub fn render(
        &mut self,
        ctx: &egui::Context,
        painter: &egui::Painter,
        origin: Pos2,
        canvas: &Canvas,
        selection: Option<Rect>,
    ) {
        let canvas_rect = Rect::from_min_size(origin, canvas.size());
        if let Some(texture_id) = self.sync_texture(ctx, canvas) {
            painter.image(
                texture_id,
                canvas_rect,
                Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                Color32::WHITE,
            );
        }

        let clipped = painter.with_clip_rect(canvas_rect.intersect(painter.clip_rect()));
        for element in canvas.elements() {
            element.draw(&clipped, origin.to_vec2());
        }

        if let Some(selection) = selection {
            let rect = selection.translate(origin.to_vec2());
            let outline = [
                rect.left_top(),
                rect.right_top(),
                rect.right_bottom(),
                rect.left_bottom(),
                rect.left_top(),
            ];
            clipped.extend(Shape::dashed_line(&outline, SELECTION_STROKE, 6.0, 4.0));
        }

        painter.rect_stroke(canvas_rect.expand(0.5), 0.0, CANVAS_BORDER);
    }
}
