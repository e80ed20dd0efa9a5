//! Filtro, orden y selección del curso Acta Milagrosa.

use std::cmp::Ordering;

use log::info;

use crate::milagro::MilagroError;
use crate::models::{Candidata, Tabla};

/// Una candidata válida tiene el examen estrictamente sobre la nota final.
pub fn filtrar_candidatas(mut candidatas: Vec<Candidata>) -> Vec<Candidata> {
    candidatas.retain(|c| c.nota_examen > c.promedio_final);
    candidatas
}

fn comparar(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Orden ascendente por (nota final, NP final). Orden estable: los empates
/// completos conservan el orden de entrada.
pub fn ordenar_candidatas(candidatas: &mut [Candidata]) {
    candidatas.sort_by(|a, b| {
        comparar(a.promedio_final, b.promedio_final).then(comparar(a.np_final, b.np_final))
    });
}

/// La Acta Milagrosa es la candidata con la NP final mínima global; entre
/// empatadas gana la primera según el orden anterior.
pub fn seleccionar_curso(candidatas: &[Candidata]) -> Result<&Candidata, MilagroError> {
    let minimo = candidatas
        .iter()
        .map(|c| c.np_final)
        .fold(f64::INFINITY, f64::min);
    candidatas
        .iter()
        .find(|c| c.np_final == minimo)
        .ok_or(MilagroError::SinCandidatas)
}

/// Arma la tabla Acta_Milagrosa: todas las evaluaciones del curso elegido
/// más una fila sintética "Acta" con la nota final del historial, alineada
/// al esquema de Evaluaciones.
pub fn tabla_acta_milagrosa(codigo: &str, evaluaciones: &Tabla, historial: &Tabla) -> Tabla {
    let mut acta = evaluaciones.filtrar("Codigo_curso", codigo);
    acta.nombre = "Acta_Milagrosa".to_string();

    if let Some(i) = (0..historial.n_filas())
        .find(|&i| historial.celda(i, "Codigo_curso") == Some(codigo))
    {
        let mut sintetica = Tabla::nueva(
            "fila_acta",
            &["Curso URL", "Evaluación", "Promedio", "Codigo_curso", "Año", "Semestre", "Periodo"],
        );
        sintetica.agregar_fila(vec![
            historial.celda(i, "Curso URL").unwrap_or("").to_string(),
            "Acta".to_string(),
            historial.celda(i, "Nota Final").unwrap_or("").to_string(),
            codigo.to_string(),
            historial.celda(i, "Año").unwrap_or("").to_string(),
            historial.celda(i, "Semestre").unwrap_or("").to_string(),
            historial.celda(i, "Periodo").unwrap_or("").to_string(),
        ]);
        acta.concatenar(&sintetica);
    }

    info!("✅ Tabla Acta_Milagrosa con {} filas", acta.n_filas());
    acta
}
