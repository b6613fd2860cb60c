use egui::{Button, CentralPanel, Context, Frame, Ui, Visuals};

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Modo oscuro").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀Modo claro").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                let w = ui.available_width().min(max_width);
                ui.set_width(w);
                inner(ui);
            });
        ui.add_space(extra);
    });
}

/// Botón ancho centrado en el panel. Devuelve true si se pulsó.
pub fn wide_button(ui: &mut Ui, panel_width: f32, label: &str, enabled: bool) -> bool {
    let btn_w = (panel_width * 0.9).clamp(120.0, 400.0);
    let mut clicked = false;
    ui.vertical_centered(|ui| {
        clicked = ui
            .add_enabled(enabled, Button::new(label).min_size(egui::Vec2::new(btn_w, 40.0)))
            .clicked();
    });
    clicked
}
