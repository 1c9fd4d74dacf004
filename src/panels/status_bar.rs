use eframe::egui;

use crate::PaintApp;

pub fn status_bar(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Tool: {}", app.state.tool_kind().name()));
            ui.separator();
            match app.state.pointer_pos() {
                Some(pos) => ui.label(format!("X: {}, Y: {}", pos.x as i32, pos.y as i32)),
                None => ui.label("X: -, Y: -"),
            };
            ui.separator();
            ui.label(format!("{} × {}", app.canvas.width(), app.canvas.height()));
            if let Some(filter) = app.canvas.applied_filter() {
                ui.separator();
                ui.label(format!("Filter: {}", filter.label()));
            }
        });
    });
}
