use super::*;
use crate::envio::{self, EnvioResult};
use crate::model::AccionAviso;
use std::sync::mpsc;

impl EncuestaApp {
    /// Lectura pura del estado actual de selección, en orden de pregunta.
    pub fn obtener_respuestas(&self) -> Vec<Option<u8>> {
        self.seleccion.clone()
    }

    /// Intento de envío. Tres desenlaces terminales: aviso de validación
    /// sin tocar la red, envío aceptado, o error (del servidor o de conexión).
    pub fn enviar_formulario(&mut self) {
        // El botón ya está deshabilitado durante un envío en curso; esto
        // cubre cualquier otro camino que dispare el envío.
        if self.envio_pendiente {
            return;
        }

        let respuestas = self.obtener_respuestas();
        if envio::respuestas_incompletas(&respuestas) {
            self.aviso = Some(Aviso::advertencia(
                "Faltan respuestas",
                "Por favor, responda todas las preguntas antes de enviar.",
            ));
            return;
        }

        let payload = envio::construir_payload(&respuestas);
        let (tx, rx) = mpsc::channel::<EnvioResult>();
        self.envio_rx = Some(rx);
        self.envio_pendiente = true;

        #[cfg(not(target_arch = "wasm32"))]
        std::thread::spawn(move || {
            let _ = tx.send(envio::enviar_respuestas(&payload));
        });

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            let _ = tx.send(envio::enviar_respuestas(&payload).await);
        });
    }

    /// Se llama una vez por frame: recoge el resultado del envío si ya llegó.
    pub fn poll_resultado_envio(&mut self) {
        let resultado = self.envio_rx.as_ref().and_then(|rx| rx.try_recv().ok());

        if let Some(resultado) = resultado {
            self.envio_rx = None;
            self.envio_pendiente = false;
            self.aplicar_resultado_envio(resultado);
        }
    }

    pub fn aplicar_resultado_envio(&mut self, resultado: EnvioResult) {
        self.aviso = Some(match resultado {
            EnvioResult::Aceptado { mensaje } => Aviso::exito(
                "¡Respuestas enviadas!",
                mensaje.unwrap_or_else(|| envio::MSG_EXITO_DEFECTO.to_string()),
            ),
            EnvioResult::ErrorServidor { mensaje } => Aviso::error("Error", mensaje),
            EnvioResult::ErrorConexion { mensaje } => Aviso::error("Error", mensaje),
        });
    }

    /// El usuario confirmó el aviso activo. `ahora` es el reloj de frames de egui.
    /// Tras el aviso de éxito queda programado el cierre de un solo disparo.
    pub fn confirmar_aviso(&mut self, ahora: f64) {
        if let Some(aviso) = self.aviso.take() {
            match aviso.accion {
                AccionAviso::Ninguna => {}
                AccionAviso::ProgramarCierre => {
                    self.cierre_programado = Some(CierreProgramado::nuevo(ahora));
                    self.state = AppState::Cierre;
                }
            }
        }
    }

    /// Cierra la app cuando vence el cierre programado.
    pub fn tick_cierre(&mut self, ctx: &egui::Context) {
        let Some(cierre) = self.cierre_programado else {
            return;
        };
        if cierre.vencido(ctx.input(|i| i.time)) {
            self.cierre_programado = None;
            cerrar_aplicacion(ctx);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn cerrar_aplicacion(ctx: &egui::Context) {
    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
}

#[cfg(target_arch = "wasm32")]
fn cerrar_aplicacion(_ctx: &egui::Context) {
    // window.close() solo surte efecto en pestañas abiertas por script;
    // si el navegador lo ignora, falla en silencio.
    if let Some(window) = web_sys::window() {
        let _ = window.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RETARDO_CIERRE_SEGUNDOS, Severidad};

    fn app_de_prueba() -> EncuestaApp {
        let mut app = EncuestaApp::new();
        // Descarta la bienvenida, igual que haría el usuario.
        app.confirmar_aviso(0.0);
        app
    }

    #[test]
    fn arranca_con_bienvenida_y_sin_respuestas() {
        let app = EncuestaApp::new();
        assert_eq!(app.state, AppState::Formulario);
        assert_eq!(app.aviso.as_ref().unwrap().titulo, "Bienvenido");

        let respuestas = app.obtener_respuestas();
        assert_eq!(respuestas.len(), 16);
        assert!(respuestas.iter().all(|r| r.is_none()));
    }

    #[test]
    fn obtener_respuestas_conserva_el_orden() {
        let mut app = app_de_prueba();
        for (i, sel) in app.seleccion.iter_mut().enumerate() {
            *sel = Some((i % 5 + 1) as u8);
        }

        let respuestas = app.obtener_respuestas();
        for (i, r) in respuestas.iter().enumerate() {
            assert_eq!(*r, Some((i % 5 + 1) as u8));
        }
    }

    #[test]
    fn envio_incompleto_avisa_y_no_toca_la_red() {
        let mut app = app_de_prueba();
        app.seleccion = vec![Some(3); 16];
        app.seleccion[6] = None; // pregunta 7 sin responder

        app.enviar_formulario();

        assert!(!app.envio_pendiente);
        assert!(app.envio_rx.is_none());
        let aviso = app.aviso.expect("debe avisar de la validación");
        assert_eq!(aviso.severidad, Severidad::Advertencia);
        assert_eq!(aviso.titulo, "Faltan respuestas");
    }

    #[test]
    fn envio_completo_queda_pendiente() {
        let mut app = app_de_prueba();
        app.seleccion = vec![Some(3); 16];

        app.enviar_formulario();

        assert!(app.envio_pendiente);
        assert!(app.envio_rx.is_some());
        assert!(app.aviso.is_none());
    }

    #[test]
    fn resultado_aceptado_muestra_mensaje_del_servidor() {
        let mut app = app_de_prueba();
        app.aplicar_resultado_envio(EnvioResult::Aceptado {
            mensaje: Some("ok".into()),
        });

        let aviso = app.aviso.as_ref().unwrap();
        assert_eq!(aviso.severidad, Severidad::Exito);
        assert!(aviso.cuerpo.contains("ok"));
    }

    #[test]
    fn resultado_aceptado_sin_mensaje_usa_el_texto_por_defecto() {
        let mut app = app_de_prueba();
        app.aplicar_resultado_envio(EnvioResult::Aceptado { mensaje: None });
        assert_eq!(app.aviso.as_ref().unwrap().cuerpo, envio::MSG_EXITO_DEFECTO);
    }

    #[test]
    fn confirmar_exito_programa_un_unico_cierre_a_cinco_segundos() {
        let mut app = app_de_prueba();
        app.aplicar_resultado_envio(EnvioResult::Aceptado { mensaje: None });

        app.confirmar_aviso(10.0);

        assert_eq!(app.state, AppState::Cierre);
        let cierre = app.cierre_programado.expect("debe quedar programado");
        assert!(!cierre.vencido(10.0 + RETARDO_CIERRE_SEGUNDOS - 0.1));
        assert!(cierre.vencido(10.0 + RETARDO_CIERRE_SEGUNDOS));
        assert!(app.aviso.is_none());
    }

    #[test]
    fn los_errores_no_programan_cierre() {
        let mut app = app_de_prueba();

        app.aplicar_resultado_envio(EnvioResult::ErrorServidor {
            mensaje: "bad".into(),
        });
        let aviso = app.aviso.as_ref().unwrap();
        assert_eq!(aviso.severidad, Severidad::Error);
        assert!(aviso.cuerpo.contains("bad"));

        app.confirmar_aviso(10.0);
        assert!(app.cierre_programado.is_none());
        assert_eq!(app.state, AppState::Formulario);

        app.aplicar_resultado_envio(EnvioResult::ErrorConexion {
            mensaje: envio::MSG_ERROR_CONEXION.into(),
        });
        app.confirmar_aviso(20.0);
        assert!(app.cierre_programado.is_none());
    }

    #[test]
    fn confirmar_bienvenida_no_programa_cierre() {
        let mut app = EncuestaApp::new();
        app.confirmar_aviso(1.0);
        assert!(app.cierre_programado.is_none());
        assert_eq!(app.state, AppState::Formulario);
    }
}
