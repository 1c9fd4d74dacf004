use super::{Command, CommandResult};
use crate::canvas::Canvas;

/// Full copy of the canvas taken before an undoable command ran
#[derive(Debug, Clone)]
pub struct Snapshot {
    canvas: Canvas,
    label: &'static str,
}

impl Snapshot {
    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }
}

/// Linear undo/redo history of full canvas snapshots
#[derive(Debug, Default)]
pub struct CommandHistory {
    /// States to return to on undo, oldest first
    undo_stack: Vec<Snapshot>,
    /// States to return to on redo, most recently undone last
    redo_stack: Vec<Snapshot>,
}

impl CommandHistory {
    /// Creates a new empty command history
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute a command, recording the prior canvas if the command is undoable.
    ///
    /// A failed command leaves both the canvas and the history untouched.
    pub fn execute(&mut self, command: Command, canvas: &mut Canvas) -> CommandResult {
        if !command.can_undo() {
            return command.execute(canvas);
        }

        let snapshot = Snapshot {
            canvas: canvas.clone(),
            label: command.label(),
        };
        command.execute(canvas)?;

        self.undo_stack.push(snapshot);
        self.redo_stack.clear();
        Ok(())
    }

    /// Restore the state before the last command. Returns false when there is nothing to undo.
    pub fn undo(&mut self, canvas: &mut Canvas) -> bool {
        let Some(snapshot) = self.undo_stack.pop() else {
            return false;
        };
        let current = std::mem::replace(canvas, snapshot.canvas);
        self.redo_stack.push(Snapshot {
            canvas: current,
            label: snapshot.label,
        });
        true
    }

    /// Re-apply the last undone command. Returns false when there is nothing to redo.
    pub fn redo(&mut self, canvas: &mut Canvas) -> bool {
        let Some(snapshot) = self.redo_stack.pop() else {
            return false;
        };
        let current = std::mem::replace(canvas, snapshot.canvas);
        self.undo_stack.push(Snapshot {
            canvas: current,
            label: snapshot.label,
        });
        true
    }

    /// Returns true if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_stack(&self) -> &[Snapshot] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[Snapshot] {
        &self.redo_stack
    }

    /// Clear the command history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
