pub mod aviso;
pub mod layout;
pub mod views;

use crate::app::EncuestaApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::bottom_panel;

impl App for EncuestaApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Recoge el resultado del envío en curso, si ya llegó.
        self.poll_resultado_envio();

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Dispatch por estado a las vistas
        match self.state {
            AppState::Formulario => views::formulario::ui_formulario(self, ctx),
            AppState::Cierre => views::cierre::ui_cierre(self, ctx),
        }

        // Aviso modal por encima de cualquier vista
        if self.aviso.is_some() {
            aviso::ui_aviso(self, ctx);
        }

        self.tick_cierre(ctx);

        // Mientras hay envío en vuelo o cuenta atrás, no esperamos a un evento.
        if self.envio_pendiente || self.cierre_programado.is_some() {
            ctx.request_repaint();
        }
    }
}
