use crate::app::EncuestaApp;
use egui::{Align2, Button, Context, RichText};

/// Pinta el aviso modal activo (bienvenida, validación o resultado del envío)
/// y aplica su acción cuando el usuario lo confirma.
pub fn ui_aviso(app: &mut EncuestaApp, ctx: &Context) {
    let Some(aviso) = app.aviso.clone() else {
        return;
    };

    let mut confirmado = false;

    egui::Window::new(format!("{} {}", aviso.severidad.icono(), aviso.titulo))
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_max_width(420.0);
            ui.label(RichText::new(&aviso.cuerpo));
            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                if ui
                    .add_sized([120.0, 32.0], Button::new(&aviso.boton))
                    .clicked()
                {
                    confirmado = true;
                }
            });
        });

    if confirmado {
        let ahora = ctx.input(|i| i.time);
        app.confirmar_aviso(ahora);
    }
}
