use std::path::Path;

use eframe::egui::{self, Align2, Key, Modifiers};

use crate::canvas::{Canvas, Rotation};
use crate::command::{Command, CommandHistory};
use crate::export::{self, ExportFormat};
use crate::filter::FilterKind;
use crate::input::InputHandler;
use crate::panels;
use crate::renderer::Renderer;
use crate::settings::PaintSettings;
use crate::state::EditorState;

/// Message shown in a modal window until the user dismisses it
#[derive(Debug, Clone, PartialEq)]
pub struct MessageModal {
    pub title: String,
    pub body: String,
}

pub struct PaintApp {
    pub(crate) settings: PaintSettings,
    pub(crate) canvas: Canvas,
    pub(crate) history: CommandHistory,
    pub(crate) state: EditorState,
    pub(crate) renderer: Renderer,
    pub(crate) input: InputHandler,
    pub(crate) message: Option<MessageModal>,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::with_settings(PaintSettings::default())
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Load previous settings (if any).
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value::<PaintSettings>(storage, eframe::APP_KEY))
            .unwrap_or_default();
        Self::with_settings(settings)
    }

    pub fn with_settings(settings: PaintSettings) -> Self {
        Self {
            canvas: Canvas::new(settings.canvas_width, settings.canvas_height),
            history: CommandHistory::new(),
            state: EditorState::from_settings(&settings),
            renderer: Renderer::new(),
            input: InputHandler::new(),
            message: None,
            settings,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn command_history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn editor_state(&self) -> &EditorState {
        &self.state
    }

    pub fn editor_state_mut(&mut self) -> &mut EditorState {
        &mut self.state
    }

    pub fn message(&self) -> Option<&MessageModal> {
        self.message.as_ref()
    }

    /// Run a command through the history. Failures are no-ops.
    pub fn execute_command(&mut self, command: Command) {
        let label = command.label();
        let resets_selection = matches!(command, Command::Crop(_) | Command::Rotate(_) | Command::Clear);
        match self.history.execute(command, &mut self.canvas) {
            Ok(()) => {
                log::info!("{label}");
                if resets_selection {
                    self.state.clear_selection();
                }
            }
            Err(err) => log::debug!("Ignored {label}: {err}"),
        }
    }

    pub fn undo(&mut self) {
        self.state.cancel_gesture();
        if self.history.undo(&mut self.canvas) {
            log::info!("Undo");
        }
    }

    pub fn redo(&mut self) {
        self.state.cancel_gesture();
        if self.history.redo(&mut self.canvas) {
            log::info!("Redo");
        }
    }

    pub fn apply_filter(&mut self, kind: FilterKind) {
        self.execute_command(Command::ApplyFilter(kind));
    }

    pub fn rotate(&mut self, rotation: Rotation) {
        self.execute_command(Command::Rotate(rotation));
    }

    pub fn clear_canvas(&mut self) {
        self.execute_command(Command::Clear);
    }

    /// Crops to the live selection; does nothing without one
    pub fn crop_to_selection(&mut self) {
        if let Some(command) = self.state.crop_command() {
            self.execute_command(command);
        }
    }

    /// Ask for a destination with the native dialog, then save
    pub fn save_with_dialog(&mut self) {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Save Drawing")
            .set_file_name("drawing.png");
        for format in ExportFormat::ALL {
            dialog = dialog.add_filter(format.name(), format.extensions());
        }
        if let Some(path) = dialog.save_file() {
            self.save_to(&path);
        }
    }

    /// Export the canvas and report the outcome in a modal message
    pub fn save_to(&mut self, path: &Path) {
        self.message = Some(match export::export_canvas(&self.canvas, path) {
            Ok(_) => MessageModal {
                title: "Saved".to_owned(),
                body: format!("Image saved to {}", display_name(path)),
            },
            Err(err) => {
                log::error!("Failed to save {}: {}", path.display(), err);
                MessageModal {
                    title: "Error".to_owned(),
                    body: format!("Could not save the image: {err}"),
                }
            }
        });
    }

    /// Settings as they should be persisted: the editor state plus the size
    /// of the canvas, so the next session starts with a blank canvas of the
    /// same dimensions
    pub fn current_settings(&mut self) -> &PaintSettings {
        self.state.store_settings(&mut self.settings);
        self.settings.canvas_width = self.canvas.width();
        self.settings.canvas_height = self.canvas.height();
        &self.settings
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Keys typed into a focused field (the color picker's hex edit, a
        // slider value) belong to that field.
        if ctx.wants_keyboard_input() {
            return;
        }

        let (redo, undo) = ctx.input_mut(|i| {
            let redo = i.consume_key(Modifiers::COMMAND | Modifiers::SHIFT, Key::Z)
                || i.consume_key(Modifiers::COMMAND, Key::Y);
            (redo, i.consume_key(Modifiers::COMMAND, Key::Z))
        });
        let (crop, cancel) = ctx.input(|i| (i.key_pressed(Key::Enter), i.key_pressed(Key::Escape)));

        if undo {
            self.undo();
        }
        if redo {
            self.redo();
        }
        if crop {
            self.crop_to_selection();
        }
        if cancel {
            self.state.clear_selection();
        }
    }

    fn show_message(&mut self, ctx: &egui::Context) {
        let Some(message) = &self.message else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new(message.title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message.body.as_str());
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.message = None;
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self.current_settings());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.message.is_none() {
            self.handle_shortcuts(ctx);
        }

        panels::tools_panel(self, ctx);
        panels::status_bar(self, ctx);
        panels::central_panel(self, ctx);

        self.show_message(ctx);
    }
}
