//! Offscreen rendering of a canvas into an RGBA bitmap.
//!
//! tiny-skia works in premultiplied alpha; the canvas bitmap and every image
//! encoder expect straight alpha, so pixels are converted on the way in and out.

use image::RgbaImage;
use tiny_skia::{IntSize, Pixmap};

use crate::element::{Element, ElementType};
use crate::error::CanvasError;

/// Draws `elements` on top of `base` and returns the composited bitmap
pub fn render(base: &RgbaImage, elements: &[ElementType]) -> Result<RgbaImage, CanvasError> {
    let (width, height) = base.dimensions();
    let size = IntSize::from_wh(width, height)
        .ok_or_else(|| CanvasError::Render(format!("invalid canvas size {width}x{height}")))?;

    let mut pixmap = Pixmap::from_vec(premultiply_alpha(base.as_raw()), size)
        .ok_or_else(|| CanvasError::Render("failed to create pixmap".into()))?;

    for element in elements {
        element.rasterize(&mut pixmap);
    }

    RgbaImage::from_raw(width, height, unpremultiply_alpha(pixmap.data()))
        .ok_or_else(|| CanvasError::Render("pixel buffer size mismatch".into()))
}

fn premultiply_alpha(data: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(data.len());
    for chunk in data.chunks_exact(4) {
        let a = chunk[3] as u16;
        let mul = |c: u8| ((c as u16 * a + 127) / 255) as u8;
        result.extend_from_slice(&[mul(chunk[0]), mul(chunk[1]), mul(chunk[2]), chunk[3]]);
    }
    result
}

fn unpremultiply_alpha(data: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(data.len());
    for chunk in data.chunks_exact(4) {
        let a = chunk[3] as f32 / 255.0;
        if a > 0.0 {
            let r = (chunk[0] as f32 / a).round().min(255.0) as u8;
            let g = (chunk[1] as f32 / a).round().min(255.0) as u8;
            let b = (chunk[2] as f32 / a).round().min(255.0) as u8;
            result.extend_from_slice(&[r, g, b, chunk[3]]);
        } else {
            result.extend_from_slice(&[0, 0, 0, 0]);
        }
    }
    result
}
