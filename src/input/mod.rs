use egui::{Pos2, Rect, Vec2};

mod router;
pub use router::route_event;

/// Pointer events on the canvas, in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed over the canvas
    PointerDown { pos: Pos2 },
    /// Pointer moved, with or without the button held
    PointerMove { pos: Pos2 },
    /// Primary button released after a press that started on the canvas
    PointerUp { pos: Pos2 },
    /// Pointer left the canvas while no button was held
    PointerLeave,
}

impl InputEvent {
    pub fn position(&self) -> Option<Pos2> {
        match self {
            InputEvent::PointerDown { pos }
            | InputEvent::PointerMove { pos }
            | InputEvent::PointerUp { pos } => Some(*pos),
            InputEvent::PointerLeave => None,
        }
    }
}

/// Raw pointer state for one frame, as read from egui
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerFrame {
    pub latest_pos: Option<Pos2>,
    pub primary_pressed: bool,
    pub primary_released: bool,
    /// False when another widget or layer (a popup, a side panel) is on top of
    /// the canvas under the pointer
    pub canvas_hovered: bool,
}

impl PointerFrame {
    /// Reads the pointer state for the canvas widget behind `response`
    pub fn read(response: &egui::Response) -> Self {
        let canvas_hovered = response.contains_pointer();
        response.ctx.input(|i| Self {
            latest_pos: i.pointer.latest_pos(),
            primary_pressed: i.pointer.primary_pressed(),
            primary_released: i.pointer.primary_released(),
            canvas_hovered,
        })
    }
}

/// Handles converting raw egui pointer input into canvas [`InputEvent`]s.
///
/// A press only counts when it starts over the visible, uncovered part of the
/// canvas; once it has, moves and the release are reported even if the
/// pointer wanders outside.
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pos: Option<Pos2>,
    hovering: bool,
    pressed_on_canvas: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate one frame of pointer state.
    ///
    /// `canvas_rect` is the full canvas area on screen and sets the coordinate
    /// origin. `visible_rect` is the part of the screen the canvas is actually
    /// shown in, e.g. the clip rect of a scroll area.
    pub fn collect(
        &mut self,
        frame: PointerFrame,
        canvas_rect: Rect,
        visible_rect: Rect,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let origin: Vec2 = canvas_rect.min.to_vec2();

        let Some(screen_pos) = frame.latest_pos else {
            self.last_pos = None;
            if std::mem::take(&mut self.hovering) && !self.pressed_on_canvas {
                events.push(InputEvent::PointerLeave);
            }
            return events;
        };
        let pos = screen_pos - origin;
        let over_canvas =
            frame.canvas_hovered && canvas_rect.intersect(visible_rect).contains(screen_pos);

        if frame.primary_pressed && over_canvas {
            self.pressed_on_canvas = true;
            events.push(InputEvent::PointerDown { pos });
        } else if self.last_pos != Some(screen_pos) {
            if over_canvas || self.pressed_on_canvas {
                events.push(InputEvent::PointerMove { pos });
            } else if self.hovering {
                events.push(InputEvent::PointerLeave);
            }
        }

        if frame.primary_released && self.pressed_on_canvas {
            self.pressed_on_canvas = false;
            events.push(InputEvent::PointerUp { pos });
        }

        self.last_pos = Some(screen_pos);
        self.hovering = over_canvas;
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas_rect() -> Rect {
        Rect::from_min_size(Pos2::new(100.0, 50.0), Vec2::new(200.0, 100.0))
    }

    fn screen_rect() -> Rect {
        Rect::from_min_size(Pos2::ZERO, Vec2::new(1000.0, 800.0))
    }

    fn frame(x: f32, y: f32, pressed: bool, released: bool) -> PointerFrame {
        PointerFrame {
            latest_pos: Some(Pos2::new(x, y)),
            primary_pressed: pressed,
            primary_released: released,
            canvas_hovered: true,
        }
    }

    #[test]
    fn press_is_translated_to_canvas_space() {
        let mut handler = InputHandler::new();
        let events = handler.collect(frame(110.0, 60.0, true, false), canvas_rect(), screen_rect());
        assert_eq!(events, vec![InputEvent::PointerDown { pos: Pos2::new(10.0, 10.0) }]);
    }

    #[test]
    fn press_outside_canvas_is_ignored() {
        let mut handler = InputHandler::new();
        assert!(handler.collect(frame(10.0, 10.0, true, false), canvas_rect(), screen_rect()).is_empty());
        assert!(handler.collect(frame(10.0, 10.0, false, true), canvas_rect(), screen_rect()).is_empty());
    }

    #[test]
    fn drag_continues_outside_canvas_until_release() {
        let mut handler = InputHandler::new();
        handler.collect(frame(110.0, 60.0, true, false), canvas_rect(), screen_rect());
        let events = handler.collect(frame(400.0, 60.0, false, false), canvas_rect(), screen_rect());
        assert_eq!(events, vec![InputEvent::PointerMove { pos: Pos2::new(300.0, 10.0) }]);
        let events = handler.collect(frame(400.0, 60.0, false, true), canvas_rect(), screen_rect());
        assert_eq!(events, vec![InputEvent::PointerUp { pos: Pos2::new(300.0, 10.0) }]);
    }

    #[test]
    fn quick_click_reports_down_and_up_in_one_frame() {
        let mut handler = InputHandler::new();
        let events = handler.collect(frame(150.0, 70.0, true, true), canvas_rect(), screen_rect());
        assert_eq!(
            events,
            vec![
                InputEvent::PointerDown { pos: Pos2::new(50.0, 20.0) },
                InputEvent::PointerUp { pos: Pos2::new(50.0, 20.0) },
            ]
        );
    }

    #[test]
    fn hover_leaving_canvas_reports_leave() {
        let mut handler = InputHandler::new();
        handler.collect(frame(150.0, 70.0, false, false), canvas_rect(), screen_rect());
        let events = handler.collect(frame(10.0, 10.0, false, false), canvas_rect(), screen_rect());
        assert_eq!(events, vec![InputEvent::PointerLeave]);
    }

    #[test]
    fn press_on_hidden_part_of_scrolled_canvas_is_ignored() {
        let mut handler = InputHandler::new();
        // Canvas scrolled left so its first 300px sit under a 200px side panel
        let canvas = Rect::from_min_size(Pos2::new(-100.0, 0.0), Vec2::new(800.0, 600.0));
        let visible = Rect::from_min_max(Pos2::new(200.0, 0.0), Pos2::new(1000.0, 600.0));

        assert!(handler.collect(frame(50.0, 50.0, true, false), canvas, visible).is_empty());
        assert!(handler.collect(frame(50.0, 50.0, false, true), canvas, visible).is_empty());

        let events = handler.collect(frame(250.0, 50.0, true, true), canvas, visible);
        assert_eq!(
            events,
            vec![
                InputEvent::PointerDown { pos: Pos2::new(350.0, 50.0) },
                InputEvent::PointerUp { pos: Pos2::new(350.0, 50.0) },
            ]
        );
    }

    #[test]
    fn press_under_covering_popup_is_ignored() {
        let mut handler = InputHandler::new();
        let covered = PointerFrame {
            canvas_hovered: false,
            ..frame(150.0, 70.0, true, false)
        };
        assert!(handler.collect(covered, canvas_rect(), screen_rect()).is_empty());

        let release = PointerFrame {
            canvas_hovered: false,
            ..frame(150.0, 70.0, false, true)
        };
        assert!(handler.collect(release, canvas_rect(), screen_rect()).is_empty());
    }
}
