use crate::app::EncuestaApp;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText, Spinner};

/// Cuenta atrás tras un envío aceptado; al vencer, la app se cierra sola.
pub fn ui_cierre(app: &mut EncuestaApp, ctx: &Context) {
    let ahora = ctx.input(|i| i.time);
    let restante = app
        .cierre_programado
        .map(|c| c.restante(ahora).ceil() as u64)
        .unwrap_or(0);

    centered_panel(ctx, 300.0, 400.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.label(
                RichText::new("¡Gracias por participar!")
                    .heading()
                    .color(egui::Color32::LIGHT_GREEN),
            );
            ui.add_space(10.0);
            ui.label(format!("La aplicación se cerrará en {restante} s"));
            ui.add_space(20.0);
            ui.add(Spinner::new());
        });
    });
}
