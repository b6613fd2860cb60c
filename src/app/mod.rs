use crate::data::read_preguntas_embedded;
use crate::envio::EnvioResult;
use crate::model::{AppState, Aviso, CierreProgramado, Pregunta};
use crate::view_models::{FilaPregunta, filas_formulario};
use std::sync::mpsc::Receiver;

// Submódulos
pub mod actions;

/// Estado del formulario de bienestar emocional.
///
/// Las preguntas (y sus filas de vista) son inmutables tras la carga;
/// `seleccion` es el estado vivo de los grupos de radio, un hueco por
/// pregunta y en el mismo orden. Nada se persiste entre ejecuciones.
pub struct EncuestaApp {
    pub preguntas: Vec<Pregunta>,
    pub filas: Vec<FilaPregunta>,
    pub seleccion: Vec<Option<u8>>,
    pub state: AppState,
    /// Aviso modal activo (bienvenida, validación o resultado). Uno a la vez.
    pub aviso: Option<Aviso>,
    pub envio_pendiente: bool,
    pub(crate) envio_rx: Option<Receiver<EnvioResult>>,
    pub cierre_programado: Option<CierreProgramado>,
}

impl EncuestaApp {
    pub fn new() -> Self {
        Self::con_preguntas(read_preguntas_embedded())
    }

    /// Construye la app con un banco concreto (lo usan los tests).
    pub fn con_preguntas(preguntas: Vec<Pregunta>) -> Self {
        let filas = filas_formulario(&preguntas);
        let seleccion = vec![None; preguntas.len()];

        Self {
            preguntas,
            filas,
            seleccion,
            state: AppState::Formulario,
            // Aviso informativo de una sola vez al arrancar.
            aviso: Some(Aviso::bienvenida()),
            envio_pendiente: false,
            envio_rx: None,
            cierre_programado: None,
        }
    }

    pub fn respondidas(&self) -> usize {
        self.seleccion.iter().filter(|s| s.is_some()).count()
    }
}

impl Default for EncuestaApp {
    fn default() -> Self {
        Self::new()
    }
}
