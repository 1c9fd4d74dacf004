use std::path::PathBuf;

use egui::{Color32, Pos2};
use simple_paint::PaintApp;
use simple_paint::canvas::Canvas;
use simple_paint::element::{StrokeStyle, factory};
use simple_paint::error::ExportError;
use simple_paint::export::{ExportFormat, export_canvas};

fn temp_path(extension: &str) -> PathBuf {
    std::env::temp_dir().join(format!("simple_paint_{}.{extension}", uuid::Uuid::new_v4()))
}

fn drawn_canvas() -> Canvas {
    let mut canvas = Canvas::new(48, 32);
    canvas.add_element(factory::create_rectangle(
        Pos2::new(4.0, 4.0),
        Pos2::new(40.0, 28.0),
        StrokeStyle::new(Color32::BLUE, 4.0),
    ));
    canvas
}

#[test]
fn test_export_writes_each_format() {
    let canvas = drawn_canvas();

    for (extension, expected) in [
        ("png", ExportFormat::Png),
        ("jpg", ExportFormat::Jpeg),
        ("bmp", ExportFormat::Bmp),
    ] {
        let path = temp_path(extension);
        let format = export_canvas(&canvas, &path).unwrap();
        assert_eq!(format, expected);

        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (48, 32));
        std::fs::remove_file(&path).unwrap();
    }
}

#[test]
fn test_png_export_includes_elements() {
    let canvas = drawn_canvas();
    let path = temp_path("png");
    export_canvas(&canvas, &path).unwrap();

    let decoded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(decoded.get_pixel(20, 20).0, [255, 255, 255, 255]);
    let edge = decoded.get_pixel(4, 16).0;
    assert!(edge[2] > 200 && edge[0] < 60, "edge pixel {edge:?}");
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_unknown_extension_saves_png() {
    let path = temp_path("drawing");
    let format = export_canvas(&Canvas::new(8, 8), &path).unwrap();
    assert_eq!(format, ExportFormat::Png);
    assert_eq!(
        image::guess_format(&std::fs::read(&path).unwrap()).unwrap(),
        image::ImageFormat::Png
    );
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_export_to_missing_directory_fails() {
    let path = std::env::temp_dir()
        .join(format!("simple_paint_missing_{}", uuid::Uuid::new_v4()))
        .join("drawing.png");

    let result = export_canvas(&Canvas::new(8, 8), &path);
    assert!(matches!(result, Err(ExportError::Io(_))));
}

#[test]
fn test_app_reports_save_outcome() {
    let mut app = PaintApp::default();

    let path = temp_path("png");
    app.save_to(&path);
    assert_eq!(app.message().map(|m| m.title.as_str()), Some("Saved"));
    std::fs::remove_file(&path).unwrap();

    let missing = std::env::temp_dir()
        .join(format!("simple_paint_missing_{}", uuid::Uuid::new_v4()))
        .join("drawing.png");
    app.save_to(&missing);
    assert_eq!(app.message().map(|m| m.title.as_str()), Some("Error"));
}
