// src/data.rs

use crate::model::Pregunta;

/// Carga el banco de preguntas desde el YAML embebido.
/// El banco es una lista ordenada de enunciados; la numeración 1..=N
/// se asigna aquí y ya no cambia durante la vida de la app.
pub fn read_preguntas_embedded() -> Vec<Pregunta> {
    let file_content = include_str!("data/preguntas.yaml");
    let textos: Vec<String> =
        serde_yaml::from_str(file_content).expect("No se pudo parsear el banco de preguntas YAML");

    textos
        .into_iter()
        .enumerate()
        .map(|(i, texto)| Pregunta {
            numero: i + 1,
            texto,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn el_banco_tiene_dieciseis_preguntas_numeradas() {
        let preguntas = read_preguntas_embedded();
        assert_eq!(preguntas.len(), 16);
        for (i, p) in preguntas.iter().enumerate() {
            assert_eq!(p.numero, i + 1);
            assert!(!p.texto.trim().is_empty());
        }
    }
}
