#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod command;
pub mod element;
pub mod error;
pub mod export;
pub mod filter;
pub mod input;
mod panels;
pub mod raster;
pub mod renderer;
pub mod settings;
pub mod state;
pub mod tools;

pub use app::PaintApp;
pub use canvas::{Canvas, Rotation};
pub use command::{Command, CommandHistory};
pub use element::{Element, ElementType, StrokeStyle};
pub use error::{CanvasError, ExportError};
pub use filter::FilterKind;
pub use input::{InputEvent, route_event};
pub use renderer::Renderer;
pub use settings::{BrushSettings, PaintSettings};
pub use state::EditorState;
pub use tools::{Tool, ToolKind, ToolType};
