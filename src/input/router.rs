use crate::canvas::Canvas;
use crate::command::CommandHistory;
use crate::state::EditorState;
use crate::tools::{Tool, ToolContext};

use super::InputEvent;

/// Routes an input event to the active tool and runs whatever command it produces
pub fn route_event(
    event: &InputEvent,
    state: &mut EditorState,
    canvas: &mut Canvas,
    history: &mut CommandHistory,
) {
    state.set_pointer_pos(event.position());

    let command = {
        let ctx = ToolContext {
            canvas: &*canvas,
            brush: state.brush,
        };
        let tool = state.active_tool_mut();
        match *event {
            InputEvent::PointerDown { pos } => tool.on_pointer_down(pos, &ctx),
            InputEvent::PointerMove { pos } => tool.on_pointer_move(pos, &ctx),
            InputEvent::PointerUp { pos } => tool.on_pointer_up(pos, &ctx),
            InputEvent::PointerLeave => None,
        }
    };

    if let Some(command) = command {
        let label = command.label();
        if let Err(err) = history.execute(command, canvas) {
            log::debug!("Ignored {label}: {err}");
        }
    }
}
