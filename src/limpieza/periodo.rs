//! Helpers de período académico: años, semestres y URLs de curso.
//!
//! La institución codifica los semestres con dos convenciones distintas:
//! en texto ("Otoño 2021") el otoño es el semestre 2, mientras que en el
//! segmento numérico de las URLs de u-cursos el 1 corresponde a Otoño.
//! Ambas direcciones se conservan tal cual.

use std::sync::OnceLock;

use regex::Regex;

fn patron_anio() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d{4})").unwrap())
}

/// Extrae el primer año de 4 dígitos de un texto ("Otoño 2021" -> 2021).
pub fn extraer_anio(texto: &str) -> Option<i32> {
    patron_anio()
        .captures(texto)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<i32>().ok())
}

/// Mapea el nombre de semestre embebido en un texto a su número:
/// Otoño -> 2, Primavera -> 1, Verano -> 3.
pub fn semestre_a_numero(texto: &str) -> Option<i32> {
    if texto.contains("Otoño") {
        Some(2)
    } else if texto.contains("Primavera") {
        Some(1)
    } else if texto.contains("Verano") {
        Some(3)
    } else {
        None
    }
}

/// Nombre del semestre según el segmento numérico de una URL de u-cursos:
/// 1 -> Otoño, 2 -> Primavera, otro -> Verano.
pub fn nombre_semestre_url(segmento: &str) -> &'static str {
    match segmento.trim() {
        "1" => "Otoño",
        "2" => "Primavera",
        _ => "Verano",
    }
}

/// Descompone una URL de curso de u-cursos en (código, año, semestre).
///
/// Las URLs tienen la forma
/// `https://www.u-cursos.cl/<unidad>/<año>/<sem>/<código>/<sección>/`:
/// el código es el tercer segmento desde el final y año/semestre son los
/// segmentos 4 y 5 desde el inicio.
pub fn segmentos_curso_url(url: &str) -> Option<(String, i32, i32)> {
    let partes: Vec<&str> = url.split('/').collect();
    if partes.len() < 7 {
        return None;
    }
    let codigo = partes[partes.len() - 3].to_string();
    let anio = partes.get(4)?.parse::<i32>().ok()?;
    let semestre = partes.get(5)?.parse::<i32>().ok()?;
    if codigo.is_empty() {
        return None;
    }
    Some((codigo, anio, semestre))
}

/// Etiqueta de período "AAAA Nombre" a partir de los segmentos de URL.
pub fn periodo_desde_url(anio: i32, semestre: i32) -> String {
    format!("{} {}", anio, nombre_semestre_url(&semestre.to_string()))
}
