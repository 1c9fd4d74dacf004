use eframe::egui::{self, Color32, CursorIcon};

use crate::PaintApp;
use crate::input::{PointerFrame, route_event};

const BACKDROP: Color32 = Color32::from_gray(70);

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::central_panel(&ctx.style()).fill(BACKDROP))
        .show(ctx, |ui| {
            egui::ScrollArea::both()
                .drag_to_scroll(false)
                .show(ui, |ui| {
                    let (response, painter) =
                        ui.allocate_painter(app.canvas.size(), egui::Sense::drag());

                    if response.hovered() {
                        ctx.set_cursor_icon(CursorIcon::Crosshair);
                    }

                    // Modal messages block canvas input.
                    if app.message.is_none() {
                        let frame = PointerFrame::read(&response);
                        for event in app.input.collect(frame, response.rect, ui.clip_rect()) {
                            route_event(&event, &mut app.state, &mut app.canvas, &mut app.history);
                        }
                    }

                    let selection = app.state.selection();
                    app.renderer
                        .render(ctx, &painter, response.rect.min, &app.canvas, selection);
                });
        });
}
