//! Normalización y clasificación de etiquetas de evaluación.
//!
//! El clasificador de exámenes es de dos niveles: primero una lista de
//! subcadenas excluyentes (la exclusión manda), después pertenencia exacta
//! al conjunto de etiquetas de examen. Las notas de presentación se
//! reconocen con una familia de patrones anclada al final de la etiqueta.

use std::collections::HashSet;
use std::sync::OnceLock;

use log::warn;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normaliza una etiqueta para comparación: mayúsculas, guiones a espacio,
/// sin puntos, sin espacios iniciales y sin tildes (NFD menos marcas
/// combinantes). Total sobre cualquier string, vacío incluido, e
/// idempotente.
pub fn limpiar_texto(texto: &str) -> String {
    let mayuscula = texto.to_uppercase().replace('-', " ").replace('.', "");
    let sin_inicio = mayuscula.trim_start_matches(' ');
    sin_inicio.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Etiquetas que son un examen (comparación exacta sobre la forma
/// normalizada).
fn lista_examen() -> &'static HashSet<String> {
    static LISTA: OnceLock<HashSet<String>> = OnceLock::new();
    LISTA.get_or_init(|| {
        [
            "Examen",
            "Examen 2 no presencial",
            "Examen Adicional",
            "Examen no presencial",
            "Examen Recuperativo",
            "Examen v1",
            "Examen v2",
            "Nota Examen",
            "Examen-Promedio",
        ]
        .iter()
        .map(|s| limpiar_texto(s))
        .collect()
    })
}

/// Subcadenas que descartan una etiqueta como examen aunque se parezca.
fn lista_no_examen() -> &'static Vec<String> {
    static LISTA: OnceLock<Vec<String>> = OnceLock::new();
    LISTA.get_or_init(|| {
        [
            "Nota Post ",
            "Nota Post-",
            "Nota Presentación a ",
            "Nota Presentación ",
            "Notas Controles y ",
            "Promedio Controles y ",
            "Promedio Ponderado presentación a .",
            "Situación pre-",
            "Nota de Presentación a ",
            "-Pregunta1",
            "-Pregunta2",
            "-Pregunta3",
            "-Pregunta4",
            "-P1",
            "-P2",
            "-P3",
            "-P4",
        ]
        .iter()
        .map(|s| limpiar_texto(s))
        .collect()
    })
}

/// Familia de etiquetas "nota de presentación", anclada al final:
/// NOTA [DE] PRESENTACIÓN [(NP)] [[A] EXAMEN], PROMEDIO PONDERADO
/// PRESENTACIÓN A EXAMEN, SITUACION PRE-EXAMEN, NOTA PRE-EXAMEN, PRE-EXAMEN.
fn patron_np() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)(?:NOTA\s+(?:DE\s+)?PRESENTACI[ÓO]N(?:\s*\(NP\))?(?:\s+(?:A\s+)?EXAMEN)?|PROMEDIO\s+PONDERADO\s+PRESENTACI[ÓO]N\s+A\s+EXAMEN|SITUACION\s+PRE[- ]?EXAMEN|NOTA\s+PRE[- ]?EXAMEN|PRE[- ]?EXAMEN)$",
        )
        .unwrap()
    })
}

/// Una etiqueta normalizada queda excluida de ser examen si contiene alguna
/// subcadena de la lista de exclusión.
pub fn es_excluida_de_examen(normalizada: &str) -> bool {
    lista_no_examen().iter().any(|p| normalizada.contains(p.as_str()))
}

/// Clasificación de examen: exclusión primero, después pertenencia exacta.
pub fn es_examen(normalizada: &str) -> bool {
    !es_excluida_de_examen(normalizada) && lista_examen().contains(normalizada)
}

/// ¿La etiqueta normalizada es una nota de presentación?
pub fn es_nota_presentacion(normalizada: &str) -> bool {
    patron_np().is_match(normalizada)
}

/// Aviso no vinculante: etiqueta que no clasifica como examen pero se parece
/// mucho a uno conocido. Sólo registra; no altera la clasificación.
pub fn advertir_etiqueta_cercana(normalizada: &str) {
    if normalizada.is_empty() || es_examen(normalizada) || es_excluida_de_examen(normalizada) {
        return;
    }
    let mejor = lista_examen()
        .iter()
        .map(|e| strsim::jaro_winkler(normalizada, e))
        .fold(0.0_f64, f64::max);
    if mejor > 0.93 {
        warn!(
            "⚠️ La etiqueta '{}' se parece a un examen conocido (similitud {:.2}); revisar los datos",
            normalizada, mejor
        );
    }
}
