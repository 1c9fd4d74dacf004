use thiserror::Error;

/// Errors raised by canvas mutations
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("Element index {index} out of range (canvas has {len} elements)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Element {index} is not a freehand stroke")]
    NotAStroke { index: usize },

    #[error("Crop region is empty after clamping to the canvas")]
    EmptyCrop,

    #[error("Failed to render canvas: {0}")]
    Render(String),
}

/// Errors that can occur while exporting the canvas to an image file
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error(transparent)]
    Canvas(#[from] CanvasError),
}
