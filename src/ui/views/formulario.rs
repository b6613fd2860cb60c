use crate::app::EncuestaApp;
use crate::ui::layout::wide_button;
use egui::{CentralPanel, Context, RichText, ScrollArea, Spinner};

/// Vista principal: todas las preguntas con sus cinco opciones excluyentes,
/// en orden, más el botón de envío.
pub fn ui_formulario(app: &mut EncuestaApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            ui.heading("Cuestionario de bienestar emocional");
            ui.label(format!(
                "Respondidas {} de {}",
                app.respondidas(),
                app.preguntas.len()
            ));
            ui.add_space(8.0);
        });

        // Copia barata de las filas para no pelear con el borrow de `seleccion`.
        let filas = app.filas.clone();

        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_width(panel_width);

                    for fila in &filas {
                        let idx = fila.numero - 1;
                        ui.label(RichText::new(fila.titulo()).strong());
                        ui.horizontal_wrapped(|ui| {
                            for opcion in &fila.opciones {
                                ui.radio_value(
                                    &mut app.seleccion[idx],
                                    Some(opcion.valor),
                                    opcion.label(),
                                );
                            }
                        });
                        ui.add_space(14.0);
                    }

                    ui.add_space(6.0);

                    if app.envio_pendiente {
                        ui.horizontal(|ui| {
                            ui.add(Spinner::new());
                            ui.label("⏳ Enviando respuestas...");
                        });
                        ui.add_space(6.0);
                    }

                    if wide_button(ui, panel_width, "📨 Enviar respuestas", !app.envio_pendiente) {
                        app.enviar_formulario();
                    }

                    ui.add_space(16.0);
                });
            });
    });
}
