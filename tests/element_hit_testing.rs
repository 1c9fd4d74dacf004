use egui::{Color32, Pos2};
use simple_paint::canvas::Canvas;
use simple_paint::element::{Element, ElementType, StrokeStyle, factory};

fn style() -> StrokeStyle {
    StrokeStyle::new(Color32::RED, 2.0)
}

fn horizontal_stroke() -> ElementType {
    let points = vec![Pos2::new(10.0, 10.0), Pos2::new(30.0, 10.0)];
    factory::create_stroke(points, style())
}

#[test]
fn test_element_kinds() {
    let stroke = horizontal_stroke();
    assert_eq!(stroke.element_type(), "stroke");

    let line = factory::create_line(Pos2::ZERO, Pos2::new(5.0, 5.0), style());
    assert_eq!(line.element_type(), "line");

    let rect = factory::create_rectangle(Pos2::ZERO, Pos2::new(5.0, 5.0), style());
    let ellipse = factory::create_ellipse(Pos2::ZERO, Pos2::new(5.0, 5.0), style());
    assert_ne!(rect.id(), ellipse.id());
}

#[test]
fn test_stroke_hit_within_tolerance() {
    let stroke = horizontal_stroke();

    assert!(stroke.hit_test(Pos2::new(20.0, 13.0), 5.0));
    assert!(!stroke.hit_test(Pos2::new(20.0, 20.0), 5.0));
    // Past the end of the polyline the distance is measured to the endpoint
    assert!(stroke.hit_test(Pos2::new(33.0, 10.0), 5.0));
    assert!(!stroke.hit_test(Pos2::new(40.0, 10.0), 5.0));
}

#[test]
fn test_single_point_stroke_hit_by_distance() {
    let dot = factory::create_stroke(vec![Pos2::new(50.0, 50.0)], style());

    assert!(dot.hit_test(Pos2::new(53.0, 54.0), 5.0));
    assert!(!dot.hit_test(Pos2::new(60.0, 50.0), 5.0));
}

#[test]
fn test_line_hit_within_tolerance() {
    let line = factory::create_line(Pos2::new(0.0, 0.0), Pos2::new(100.0, 100.0), style());

    assert!(line.hit_test(Pos2::new(50.0, 52.0), 3.0));
    assert!(!line.hit_test(Pos2::new(50.0, 70.0), 3.0));
}

#[test]
fn test_boxed_shapes_hit_by_bounds() {
    let rect = factory::create_rectangle(Pos2::new(50.0, 50.0), Pos2::new(10.0, 10.0), style());
    let ellipse = factory::create_ellipse(Pos2::new(10.0, 10.0), Pos2::new(50.0, 50.0), style());

    // Bounds are normalized whatever order the corners come in
    assert_eq!(rect.rect().min, Pos2::new(10.0, 10.0));
    assert_eq!(rect.rect().max, Pos2::new(50.0, 50.0));

    for shape in [&rect, &ellipse] {
        assert!(shape.hit_test(Pos2::new(30.0, 30.0), 0.0));
        assert!(!shape.hit_test(Pos2::new(60.0, 60.0), 5.0));
    }
}

#[test]
fn test_topmost_hit_prefers_latest_element() {
    let mut canvas = Canvas::new(100, 100);
    canvas.add_element(factory::create_rectangle(
        Pos2::new(0.0, 0.0),
        Pos2::new(60.0, 60.0),
        style(),
    ));
    canvas.add_element(factory::create_rectangle(
        Pos2::new(40.0, 40.0),
        Pos2::new(90.0, 90.0),
        style(),
    ));

    assert_eq!(canvas.topmost_hit(Pos2::new(50.0, 50.0), 5.0), Some(1));
    assert_eq!(canvas.topmost_hit(Pos2::new(10.0, 10.0), 5.0), Some(0));
    assert_eq!(canvas.topmost_hit(Pos2::new(95.0, 5.0), 1.0), None);
}
