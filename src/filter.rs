//! Whole-canvas pixel filters.
//!
//! Every filter is a pure function from one RGBA buffer to a freshly
//! allocated one. Alpha is never modified.

use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

/// Default brightness step used by the tools panel
pub const DEFAULT_BRIGHTNESS_DELTA: i16 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterKind {
    /// Clamp-add a signed delta to every color channel
    Brightness(i16),
    Invert,
    Sepia,
    /// 3x3 box blur
    Blur,
}

impl FilterKind {
    pub fn label(&self) -> &'static str {
        match self {
            FilterKind::Brightness(_) => "Brightness",
            FilterKind::Invert => "Invert",
            FilterKind::Sepia => "Sepia",
            FilterKind::Blur => "Blur",
        }
    }

    /// Whether two filters toggle each other, ignoring parameters
    pub fn same_filter(&self, other: &FilterKind) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    pub fn apply(&self, src: &RgbaImage) -> RgbaImage {
        match *self {
            FilterKind::Brightness(delta) => brightness(src, delta),
            FilterKind::Invert => invert(src),
            FilterKind::Sepia => sepia(src),
            FilterKind::Blur => box_blur_3x3(src),
        }
    }
}

/// The filter currently shown on the canvas together with the pixels it replaced
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedFilter {
    pub kind: FilterKind,
    pub original: RgbaImage,
}

fn map_pixels(src: &RgbaImage, f: impl Fn([u8; 4]) -> [u8; 4]) -> RgbaImage {
    let mut out = src.clone();
    for pixel in out.pixels_mut() {
        pixel.0 = f(pixel.0);
    }
    out
}

pub fn brightness(src: &RgbaImage, delta: i16) -> RgbaImage {
    let shift = |c: u8| (c as i16 + delta).clamp(0, 255) as u8;
    map_pixels(src, |[r, g, b, a]| [shift(r), shift(g), shift(b), a])
}

pub fn invert(src: &RgbaImage) -> RgbaImage {
    map_pixels(src, |[r, g, b, a]| [255 - r, 255 - g, 255 - b, a])
}

pub fn sepia(src: &RgbaImage) -> RgbaImage {
    map_pixels(src, |[r, g, b, a]| {
        let (r, g, b) = (r as f32, g as f32, b as f32);
        let sr = 0.393 * r + 0.769 * g + 0.189 * b;
        let sg = 0.349 * r + 0.686 * g + 0.168 * b;
        let sb = 0.272 * r + 0.534 * g + 0.131 * b;
        [
            sr.min(255.0) as u8,
            sg.min(255.0) as u8,
            sb.min(255.0) as u8,
            a,
        ]
    })
}

/// Mean of the in-bounds 3x3 neighbourhood. Edge pixels average fewer samples.
pub fn box_blur_3x3(src: &RgbaImage) -> RgbaImage {
    let (w, h) = src.dimensions();
    RgbaImage::from_fn(w, h, |x, y| {
        let mut sums = [0u32; 3];
        let mut count = 0u32;
        for ny in y.saturating_sub(1)..=(y + 1).min(h - 1) {
            for nx in x.saturating_sub(1)..=(x + 1).min(w - 1) {
                let p = src.get_pixel(nx, ny);
                for c in 0..3 {
                    sums[c] += p[c] as u32;
                }
                count += 1;
            }
        }
        let avg = |sum: u32| ((sum + count / 2) / count) as u8;
        Rgba([
            avg(sums[0]),
            avg(sums[1]),
            avg(sums[2]),
            src.get_pixel(x, y)[3],
        ])
    })
}
