use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::{DynamicImage, ImageFormat};

use crate::canvas::Canvas;
use crate::error::ExportError;

/// Encoders offered by the save dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Jpeg,
    Bmp,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Png, ExportFormat::Jpeg, ExportFormat::Bmp];

    /// Picks the encoder from the file extension; unknown or missing extensions save as PNG
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "jpg" | "jpeg" => ExportFormat::Jpeg,
            "bmp" => ExportFormat::Bmp,
            _ => ExportFormat::Png,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ExportFormat::Png => "PNG Image",
            ExportFormat::Jpeg => "JPEG Image",
            ExportFormat::Bmp => "Bitmap Image",
        }
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            ExportFormat::Png => &["png"],
            ExportFormat::Jpeg => &["jpg", "jpeg"],
            ExportFormat::Bmp => &["bmp"],
        }
    }

    fn image_format(&self) -> ImageFormat {
        match self {
            ExportFormat::Png => ImageFormat::Png,
            ExportFormat::Jpeg => ImageFormat::Jpeg,
            ExportFormat::Bmp => ImageFormat::Bmp,
        }
    }
}

/// Renders the canvas with all its elements and writes it to `path`
pub fn export_canvas(canvas: &Canvas, path: &Path) -> Result<ExportFormat, ExportError> {
    let format = ExportFormat::from_path(path);
    let rendered = DynamicImage::ImageRgba8(canvas.render()?);

    // JPEG has no alpha channel.
    let image = match format {
        ExportFormat::Jpeg => DynamicImage::ImageRgb8(rendered.to_rgb8()),
        ExportFormat::Png | ExportFormat::Bmp => rendered,
    };

    let mut writer = BufWriter::new(File::create(path)?);
    image.write_to(&mut writer, format.image_format())?;
    log::info!("Saved {}x{} canvas to {}", canvas.width(), canvas.height(), path.display());
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn format_follows_extension() {
        assert_eq!(ExportFormat::from_path(&PathBuf::from("a.JPG")), ExportFormat::Jpeg);
        assert_eq!(ExportFormat::from_path(&PathBuf::from("a.jpeg")), ExportFormat::Jpeg);
        assert_eq!(ExportFormat::from_path(&PathBuf::from("a.bmp")), ExportFormat::Bmp);
        assert_eq!(ExportFormat::from_path(&PathBuf::from("a.png")), ExportFormat::Png);
        assert_eq!(ExportFormat::from_path(&PathBuf::from("a.gif")), ExportFormat::Png);
        assert_eq!(ExportFormat::from_path(&PathBuf::from("drawing")), ExportFormat::Png);
    }
}
