use egui::{Color32, Pos2};
use simple_paint::canvas::Canvas;
use simple_paint::command::CommandHistory;
use simple_paint::element::{BoxKind, Element, ElementType};
use simple_paint::input::{InputEvent, route_event};
use simple_paint::state::EditorState;
use simple_paint::tools::{Tool, ToolKind};

struct Harness {
    state: EditorState,
    canvas: Canvas,
    history: CommandHistory,
}

impl Harness {
    fn new(tool: ToolKind) -> Self {
        let mut state = EditorState::default();
        state.set_active_tool(tool);
        Self {
            state,
            canvas: Canvas::new(200, 200),
            history: CommandHistory::new(),
        }
    }

    fn send(&mut self, event: InputEvent) {
        route_event(&event, &mut self.state, &mut self.canvas, &mut self.history);
    }

    fn drag(&mut self, from: Pos2, through: &[Pos2]) {
        self.send(InputEvent::PointerDown { pos: from });
        let mut last = from;
        for &pos in through {
            self.send(InputEvent::PointerMove { pos });
            last = pos;
        }
        self.send(InputEvent::PointerUp { pos: last });
    }
}

#[test]
fn test_pencil_records_every_point() {
    let mut harness = Harness::new(ToolKind::Pencil);
    harness.state.brush.color = Color32::RED;

    harness.drag(
        Pos2::new(10.0, 10.0),
        &[Pos2::new(20.0, 10.0), Pos2::new(30.0, 15.0)],
    );

    assert_eq!(harness.canvas.elements().len(), 1);
    let ElementType::Stroke(stroke) = &harness.canvas.elements()[0] else {
        panic!("expected a stroke");
    };
    assert_eq!(stroke.points().len(), 3);
    assert_eq!(stroke.style().color, Color32::RED);
    assert!(!harness.state.active_tool().is_active());

    // The whole stroke is one undo step
    assert_eq!(harness.history.undo_stack().len(), 1);
    harness.history.undo(&mut harness.canvas);
    assert!(harness.canvas.elements().is_empty());
}

#[test]
fn test_pencil_click_leaves_a_dot() {
    let mut harness = Harness::new(ToolKind::Pencil);
    harness.drag(Pos2::new(50.0, 50.0), &[]);

    let ElementType::Stroke(stroke) = &harness.canvas.elements()[0] else {
        panic!("expected a stroke");
    };
    assert_eq!(stroke.points(), &[Pos2::new(50.0, 50.0)]);
}

#[test]
fn test_move_without_press_does_nothing() {
    let mut harness = Harness::new(ToolKind::Pencil);
    harness.send(InputEvent::PointerMove {
        pos: Pos2::new(40.0, 40.0),
    });
    harness.send(InputEvent::PointerUp {
        pos: Pos2::new(40.0, 40.0),
    });

    assert!(harness.canvas.elements().is_empty());
    assert!(!harness.history.can_undo());
    assert_eq!(harness.state.pointer_pos(), Some(Pos2::new(40.0, 40.0)));

    harness.send(InputEvent::PointerLeave);
    assert_eq!(harness.state.pointer_pos(), None);
}

#[test]
fn test_line_follows_pointer() {
    let mut harness = Harness::new(ToolKind::Line);
    harness.drag(
        Pos2::new(10.0, 10.0),
        &[Pos2::new(50.0, 50.0), Pos2::new(80.0, 20.0)],
    );

    let ElementType::Line(line) = &harness.canvas.elements()[0] else {
        panic!("expected a line");
    };
    assert_eq!(line.start(), Pos2::new(10.0, 10.0));
    assert_eq!(line.end(), Pos2::new(80.0, 20.0));
}

#[test]
fn test_rectangle_drag_is_normalized() {
    let mut harness = Harness::new(ToolKind::Rectangle);
    harness.drag(Pos2::new(50.0, 50.0), &[Pos2::new(20.0, 30.0)]);

    let ElementType::Box(shape) = &harness.canvas.elements()[0] else {
        panic!("expected a rectangle");
    };
    assert_eq!(shape.kind(), BoxKind::Rectangle);
    assert_eq!(shape.bounds().min, Pos2::new(20.0, 30.0));
    assert_eq!(shape.bounds().max, Pos2::new(50.0, 50.0));
    assert_eq!(harness.history.undo_stack().len(), 1);
}

#[test]
fn test_ellipse_uses_brush_size() {
    let mut harness = Harness::new(ToolKind::Ellipse);
    harness.state.brush.set_size(12.0);
    harness.drag(Pos2::new(10.0, 10.0), &[Pos2::new(60.0, 40.0)]);

    let element = &harness.canvas.elements()[0];
    assert_eq!(element.element_type(), "ellipse");
    assert_eq!(element.style().width, 12.0);
}

#[test]
fn test_eraser_removes_topmost_under_pointer() {
    let mut harness = Harness::new(ToolKind::Rectangle);
    harness.drag(Pos2::new(10.0, 10.0), &[Pos2::new(100.0, 100.0)]);
    harness.drag(Pos2::new(50.0, 50.0), &[Pos2::new(150.0, 150.0)]);
    assert_eq!(harness.canvas.elements().len(), 2);
    let bottom_id = harness.canvas.elements()[0].id();

    harness.state.set_active_tool(ToolKind::Eraser);
    harness.drag(Pos2::new(75.0, 75.0), &[]);
    assert_eq!(harness.canvas.elements().len(), 1);
    assert_eq!(harness.canvas.elements()[0].id(), bottom_id);

    // Missing everything records nothing
    harness.drag(Pos2::new(190.0, 190.0), &[]);
    assert_eq!(harness.history.undo_stack().len(), 3);

    harness.history.undo(&mut harness.canvas);
    assert_eq!(harness.canvas.elements().len(), 2);
}

#[test]
fn test_eraser_drag_removes_each_element_crossed() {
    let mut harness = Harness::new(ToolKind::Line);
    harness.drag(Pos2::new(20.0, 0.0), &[Pos2::new(20.0, 200.0)]);
    harness.drag(Pos2::new(60.0, 0.0), &[Pos2::new(60.0, 200.0)]);

    harness.state.set_active_tool(ToolKind::Eraser);
    harness.drag(
        Pos2::new(0.0, 100.0),
        &[Pos2::new(20.0, 100.0), Pos2::new(40.0, 100.0), Pos2::new(60.0, 100.0)],
    );

    assert!(harness.canvas.elements().is_empty());
    assert_eq!(harness.history.undo_stack().len(), 4);
}

#[test]
fn test_selection_then_crop() {
    let mut harness = Harness::new(ToolKind::Select);
    harness.drag(Pos2::new(10.0, 10.0), &[Pos2::new(60.0, 40.0)]);

    assert!(harness.state.selection().is_some());
    assert!(!harness.history.can_undo());

    let command = harness.state.crop_command().unwrap();
    harness.history.execute(command, &mut harness.canvas).unwrap();
    assert_eq!((harness.canvas.width(), harness.canvas.height()), (50, 30));
}

#[test]
fn test_click_without_drag_selects_nothing() {
    let mut harness = Harness::new(ToolKind::Select);
    harness.drag(Pos2::new(10.0, 10.0), &[]);

    assert!(harness.state.selection().is_none());
    assert!(harness.state.crop_command().is_none());
}
