use eframe::egui::{self, Color32, Slider, Stroke};

use crate::PaintApp;
use crate::canvas::Rotation;
use crate::filter::FilterKind;
use crate::settings::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE, PALETTE};
use crate::tools::ToolKind;

const SWATCH_SIZE: egui::Vec2 = egui::vec2(22.0, 22.0);

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                tool_picker(app, ui);
                ui.separator();
                brush_controls(app, ui);
                ui.separator();
                filter_controls(app, ui);
                ui.separator();
                canvas_controls(app, ui);
                ui.separator();
                history_controls(app, ui);
            });
        });
}

fn tool_picker(app: &mut PaintApp, ui: &mut egui::Ui) {
    ui.heading("Tools");
    let active = app.state.tool_kind();
    for kind in ToolKind::ALL {
        if ui.selectable_label(active == kind, kind.name()).clicked() {
            app.state.set_active_tool(kind);
        }
    }
}

fn brush_controls(app: &mut PaintApp, ui: &mut egui::Ui) {
    ui.heading("Brush");

    ui.horizontal_wrapped(|ui| {
        for color in PALETTE {
            let selected = app.state.brush.color == color;
            let outline = if selected {
                Stroke::new(2.0, Color32::from_rgb(30, 144, 255))
            } else {
                Stroke::new(1.0, Color32::GRAY)
            };
            let swatch = egui::Button::new("")
                .fill(color)
                .stroke(outline)
                .min_size(SWATCH_SIZE);
            if ui.add(swatch).clicked() {
                app.state.brush.color = color;
            }
        }
    });

    ui.horizontal(|ui| {
        ui.label("Color:");
        egui::color_picker::color_edit_button_srgba(
            ui,
            &mut app.state.brush.color,
            egui::color_picker::Alpha::Opaque,
        );
    });

    ui.horizontal(|ui| {
        ui.label("Size:");
        let mut size = app.state.brush.size;
        if ui
            .add(Slider::new(&mut size, MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE).step_by(1.0))
            .changed()
        {
            app.state.brush.set_size(size);
        }
    });
}

fn filter_controls(app: &mut PaintApp, ui: &mut egui::Ui) {
    ui.heading("Filters");
    let active = app.canvas.applied_filter();
    let filters = [
        FilterKind::Brightness(app.state.brightness_delta),
        FilterKind::Invert,
        FilterKind::Sepia,
        FilterKind::Blur,
    ];

    ui.horizontal_wrapped(|ui| {
        for filter in filters {
            let is_active = active.is_some_and(|a| a.same_filter(&filter));
            if ui.selectable_label(is_active, filter.label()).clicked() {
                app.apply_filter(filter);
            }
        }
    });

    ui.horizontal(|ui| {
        ui.label("Brightness:");
        ui.add(Slider::new(&mut app.state.brightness_delta, -100..=100));
    });
}

fn canvas_controls(app: &mut PaintApp, ui: &mut egui::Ui) {
    ui.heading("Canvas");
    ui.horizontal_wrapped(|ui| {
        if ui.button("90° CW").on_hover_text(Rotation::Clockwise90.label()).clicked() {
            app.rotate(Rotation::Clockwise90);
        }
        if ui.button("90° CCW").on_hover_text(Rotation::CounterClockwise90.label()).clicked() {
            app.rotate(Rotation::CounterClockwise90);
        }
        if ui.button("180°").on_hover_text(Rotation::Half.label()).clicked() {
            app.rotate(Rotation::Half);
        }
    });

    ui.horizontal(|ui| {
        let has_selection = app.state.selection().is_some();
        if ui
            .add_enabled(has_selection, egui::Button::new("Crop"))
            .on_disabled_hover_text("Drag a selection with the Select tool first")
            .clicked()
        {
            app.crop_to_selection();
        }
        if ui.button("Clear").clicked() {
            app.clear_canvas();
        }
        if ui.button("Save…").clicked() {
            app.save_with_dialog();
        }
    });
}

fn history_controls(app: &mut PaintApp, ui: &mut egui::Ui) {
    ui.heading("History");
    ui.horizontal(|ui| {
        let can_undo = app.history.can_undo();
        let can_redo = app.history.can_redo();

        if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
            app.undo();
        }
        if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
            app.redo();
        }
    });

    let history = &app.history;
    ui.horizontal(|ui| {
        ui.label(format!("Undo: {}", history.undo_stack().len()));
        ui.label(format!("Redo: {}", history.redo_stack().len()));
    });

    egui::Grid::new("command_history_grid")
        .num_columns(2)
        .spacing([24.0, 4.0])
        .striped(true)
        .show(ui, |ui| {
            ui.strong("Undo Stack");
            ui.strong("Redo Stack");
            ui.end_row();

            let undo_stack = history.undo_stack();
            let redo_stack = history.redo_stack();
            for i in 0..undo_stack.len().max(redo_stack.len()) {
                ui.label(undo_stack.get(i).map_or("", |s| s.label()));
                ui.label(redo_stack.get(i).map_or("", |s| s.label()));
                ui.end_row();
            }
        });
}
