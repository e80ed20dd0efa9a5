//! Extracción del examen de cada curso desde la tabla de evaluaciones.

use std::collections::HashMap;

use log::warn;

use crate::milagro::etiquetas::{advertir_etiqueta_cercana, es_examen, limpiar_texto};
use crate::models::{Evaluacion, ExamenCurso};

/// Aísla las filas de examen y deja a lo más una por curso.
///
/// Desambiguación de duplicados, en este orden: período más reciente
/// (año, semestre), etiqueta normalizada más corta, primera aparición.
pub fn extraer_examenes(evaluaciones: &[Evaluacion]) -> Vec<ExamenCurso> {
    let mut filas: Vec<ExamenCurso> = Vec::new();

    for ev in evaluaciones {
        if ev.promedio.trim().is_empty() {
            continue;
        }
        let etiqueta = limpiar_texto(&ev.evaluacion);
        if !es_examen(&etiqueta) {
            advertir_etiqueta_cercana(&etiqueta);
            continue;
        }
        let Some(nota) = ev.nota().and_then(|n| n.como_f64()) else {
            warn!(
                "⚠️ Examen con nota no numérica en {} ({}); fila descartada",
                ev.codigo_curso, ev.promedio
            );
            continue;
        };
        filas.push(ExamenCurso {
            curso_url: ev.curso_url.clone(),
            codigo_curso: ev.codigo_curso.clone(),
            anio: ev.anio,
            semestre: ev.semestre,
            periodo: ev.periodo.clone(),
            evaluacion: etiqueta,
            nota,
        });
    }

    // Agrupar por curso conservando el orden de primera aparición.
    let mut orden: Vec<String> = Vec::new();
    let mut grupos: HashMap<String, Vec<ExamenCurso>> = HashMap::new();
    for fila in filas {
        if !grupos.contains_key(&fila.codigo_curso) {
            orden.push(fila.codigo_curso.clone());
        }
        grupos.entry(fila.codigo_curso.clone()).or_default().push(fila);
    }

    let mut salida = Vec::with_capacity(orden.len());
    let mut hubo_duplicados = false;
    for codigo in orden {
        let grupo = grupos.remove(&codigo).unwrap_or_default();
        if grupo.len() > 1 {
            hubo_duplicados = true;
        }
        let reciente = grupo
            .iter()
            .map(|e| (e.anio, e.semestre))
            .max()
            .unwrap_or_default();
        let elegido = grupo
            .into_iter()
            .enumerate()
            .filter(|(_, e)| (e.anio, e.semestre) == reciente)
            .min_by_key(|(i, e)| (e.evaluacion.chars().count(), *i))
            .map(|(_, e)| e);
        if let Some(examen) = elegido {
            salida.push(examen);
        }
    }
    if hubo_duplicados {
        warn!("⚠️ Hay cursos con más de una entrada de examen; revisar los datos");
    }
    salida
}
