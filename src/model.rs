use serde::{Deserialize, Serialize};

/// Etiquetas fijas de la escala Likert, mapeadas 1:1 a los valores 1..=5.
/// Solo se usan para el texto en pantalla; el payload lleva el valor numérico.
pub const ETIQUETAS_ESCALA: [&str; 5] = [
    "Nunca",
    "Rara vez",
    "A veces",
    "Frecuentemente",
    "Siempre",
];

/// Segundos entre la confirmación del aviso de éxito y el cierre de la app.
pub const RETARDO_CIERRE_SEGUNDOS: f64 = 5.0;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Pregunta {
    /// Número "humano" (1..=N), usado para mostrar y para el campo del payload.
    pub numero: usize,
    pub texto: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Formulario,
    Cierre,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Formulario
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severidad {
    Info,
    Exito,
    Advertencia,
    Error,
}

impl Severidad {
    pub fn icono(&self) -> &'static str {
        match self {
            Severidad::Info => "ℹ",
            Severidad::Exito => "✅",
            Severidad::Advertencia => "⚠",
            Severidad::Error => "❌",
        }
    }
}

/// Qué hacer cuando el usuario confirma un aviso.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccionAviso {
    Ninguna,
    ProgramarCierre,
}

/// Aviso modal al estilo SweetAlert: icono, título, cuerpo y botón único.
#[derive(Clone, Debug)]
pub struct Aviso {
    pub severidad: Severidad,
    pub titulo: String,
    pub cuerpo: String,
    pub boton: String,
    pub accion: AccionAviso,
}

impl Aviso {
    pub fn bienvenida() -> Self {
        Self {
            severidad: Severidad::Info,
            titulo: "Bienvenido".into(),
            cuerpo: "Este cuestionario es totalmente anónimo.\n\n\
                     Hace parte de un proyecto para la materia de Computación en la nube, \
                     que hace parte de la Corporación Universitaria Iberoamericana.\n\n\
                     Al enviar las respuestas, la aplicación se cerrará 5 segundos después del envío."
                .into(),
            boton: "Entendido".into(),
            accion: AccionAviso::Ninguna,
        }
    }

    pub fn advertencia(titulo: &str, cuerpo: &str) -> Self {
        Self {
            severidad: Severidad::Advertencia,
            titulo: titulo.into(),
            cuerpo: cuerpo.into(),
            boton: "OK".into(),
            accion: AccionAviso::Ninguna,
        }
    }

    pub fn exito(titulo: &str, cuerpo: String) -> Self {
        Self {
            severidad: Severidad::Exito,
            titulo: titulo.into(),
            cuerpo,
            boton: "Aceptar".into(),
            accion: AccionAviso::ProgramarCierre,
        }
    }

    pub fn error(titulo: &str, cuerpo: String) -> Self {
        Self {
            severidad: Severidad::Error,
            titulo: titulo.into(),
            cuerpo,
            boton: "OK".into(),
            accion: AccionAviso::Ninguna,
        }
    }
}

/// Cierre diferido de un solo disparo, sobre el reloj de frames de egui
/// (`ctx.input(|i| i.time)`), que funciona igual en nativo y en WASM.
/// Se guarda como `Option<CierreProgramado>` para poder cancelarlo.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CierreProgramado {
    limite: f64,
}

impl CierreProgramado {
    pub fn nuevo(ahora: f64) -> Self {
        Self {
            limite: ahora + RETARDO_CIERRE_SEGUNDOS,
        }
    }

    pub fn vencido(&self, ahora: f64) -> bool {
        ahora >= self.limite
    }

    pub fn restante(&self, ahora: f64) -> f64 {
        (self.limite - ahora).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escala_tiene_cinco_etiquetas() {
        assert_eq!(ETIQUETAS_ESCALA.len(), 5);
        assert_eq!(ETIQUETAS_ESCALA[0], "Nunca");
        assert_eq!(ETIQUETAS_ESCALA[4], "Siempre");
    }

    #[test]
    fn cierre_programado_vence_a_los_cinco_segundos() {
        let cierre = CierreProgramado::nuevo(10.0);
        assert!(!cierre.vencido(10.0));
        assert!(!cierre.vencido(14.9));
        assert!(cierre.vencido(15.0));
        assert!(cierre.vencido(20.0));
    }

    #[test]
    fn cierre_programado_restante_no_es_negativo() {
        let cierre = CierreProgramado::nuevo(0.0);
        assert_eq!(cierre.restante(2.0), 3.0);
        assert_eq!(cierre.restante(99.0), 0.0);
    }

    #[test]
    fn aviso_de_exito_programa_cierre_y_los_demas_no() {
        assert_eq!(
            Aviso::exito("t", "c".into()).accion,
            AccionAviso::ProgramarCierre
        );
        assert_eq!(Aviso::bienvenida().accion, AccionAviso::Ninguna);
        assert_eq!(Aviso::advertencia("t", "c").accion, AccionAviso::Ninguna);
        assert_eq!(Aviso::error("t", "c".into()).accion, AccionAviso::Ninguna);
    }
}
