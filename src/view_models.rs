// src/view_models.rs

use crate::model::{ETIQUETAS_ESCALA, Pregunta};

/// Una opción de la escala: valor numérico 1..=5 más su etiqueta fija.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpcionEscala {
    pub valor: u8,
    pub etiqueta: &'static str,
}

impl OpcionEscala {
    pub fn label(&self) -> String {
        format!("{} - {}", self.valor, self.etiqueta)
    }
}

/// Fila del formulario ya lista para pintar: título, nombre de campo
/// y las cinco opciones excluyentes de la escala.
#[derive(Clone, Debug)]
pub struct FilaPregunta {
    pub numero: usize,
    pub enunciado: String,
    pub opciones: [OpcionEscala; 5],
}

impl FilaPregunta {
    pub fn titulo(&self) -> String {
        format!("{}. {}", self.numero, self.enunciado)
    }

    /// Nombre del campo en el payload JSON (`pregunta1`, `pregunta2`, …).
    pub fn nombre_campo(&self) -> String {
        format!("pregunta{}", self.numero)
    }
}

fn opciones_escala() -> [OpcionEscala; 5] {
    let mut opciones = [OpcionEscala {
        valor: 0,
        etiqueta: "",
    }; 5];
    for (i, etiqueta) in ETIQUETAS_ESCALA.iter().copied().enumerate() {
        opciones[i] = OpcionEscala {
            valor: (i + 1) as u8,
            etiqueta,
        };
    }
    opciones
}

/// Proyección pura de las preguntas a filas del formulario, en el mismo orden.
pub fn filas_formulario(preguntas: &[Pregunta]) -> Vec<FilaPregunta> {
    preguntas
        .iter()
        .map(|p| FilaPregunta {
            numero: p.numero,
            enunciado: p.texto.clone(),
            opciones: opciones_escala(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_preguntas_embedded;

    #[test]
    fn una_fila_por_pregunta_con_cinco_opciones() {
        let preguntas = read_preguntas_embedded();
        let filas = filas_formulario(&preguntas);

        assert_eq!(filas.len(), preguntas.len());
        for (fila, pregunta) in filas.iter().zip(&preguntas) {
            assert_eq!(fila.numero, pregunta.numero);
            assert_eq!(fila.opciones.len(), 5);
            let valores: Vec<u8> = fila.opciones.iter().map(|o| o.valor).collect();
            assert_eq!(valores, vec![1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn titulo_y_nombre_de_campo_usan_el_numero_humano() {
        let fila = FilaPregunta {
            numero: 7,
            enunciado: "¿Cómo estás?".into(),
            opciones: opciones_escala(),
        };
        assert_eq!(fila.titulo(), "7. ¿Cómo estás?");
        assert_eq!(fila.nombre_campo(), "pregunta7");
    }

    #[test]
    fn las_opciones_llevan_valor_y_etiqueta() {
        let opciones = opciones_escala();
        assert_eq!(opciones[0].label(), "1 - Nunca");
        assert_eq!(opciones[2].label(), "3 - A veces");
        assert_eq!(opciones[4].label(), "5 - Siempre");
    }
}
