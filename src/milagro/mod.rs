//! Identificación de la Acta Milagrosa: el curso aprobado cuyo examen
//! superó la nota final del acta, con la nota de presentación (real o
//! estimada) mínima entre los candidatos.
//!
//! Submódulos:
//! - `etiquetas`: normalización y clasificación de etiquetas de evaluación
//! - `examen`: extracción del examen único por curso
//! - `presentacion`: NP observadas y estimación de las faltantes
//! - `seleccion`: filtro, orden y selección final

pub mod etiquetas;

mod examen;
mod presentacion;
mod seleccion;

pub use examen::extraer_examenes;
pub use presentacion::{estimar_candidatas, extraer_notas_presentacion, PESO_EXAMEN};
pub use seleccion::{
    filtrar_candidatas, ordenar_candidatas, seleccionar_curso, tabla_acta_milagrosa,
};

use log::info;
use thiserror::Error;

use crate::models::{Candidata, Evaluacion, ExamenCurso, NotaPresentacion, RegistroHistorial, Tabla};

#[derive(Debug, Error)]
pub enum MilagroError {
    /// Ningún curso cumple examen > nota final: no hay acta que reportar.
    #[error("no hay cursos candidatos a Acta Milagrosa")]
    SinCandidatas,
}

/// Resultado completo de la identificación, incluidas las vistas
/// intermedias por si el llamador quiere inspeccionarlas.
#[derive(Debug, Clone)]
pub struct ResultadoMilagro {
    pub examenes: Vec<ExamenCurso>,
    pub notas_presentacion: Vec<NotaPresentacion>,
    pub candidatas: Vec<Candidata>,
    pub codigo_curso: String,
    pub acta: Tabla,
}

/// Esquema de la hoja Acta_Milagrosa cuando no hay candidato: las columnas
/// de Evaluaciones, sin filas.
pub fn esquema_acta(evaluaciones: &Tabla) -> Tabla {
    let mut acta = Tabla {
        nombre: "Acta_Milagrosa".to_string(),
        columnas: evaluaciones.columnas.clone(),
        filas: Vec::new(),
    };
    if acta.columnas.is_empty() {
        acta = Tabla::vacia(
            "Acta_Milagrosa",
            &["Curso URL", "Evaluación", "Promedio", "Codigo_curso", "Año", "Semestre", "Periodo"],
        );
    }
    acta
}

/// Corre la identificación completa sobre las tablas canónicas.
pub fn identificar_acta_milagrosa(
    evaluaciones: &Tabla,
    historial: &Tabla,
) -> Result<ResultadoMilagro, MilagroError> {
    info!("ℹ️ Inicio identificación del Acta Milagrosa");

    let evs = Evaluacion::desde_tabla(evaluaciones);
    let registros = RegistroHistorial::desde_tabla(historial);

    let examenes = extraer_examenes(&evs);
    let notas_presentacion = extraer_notas_presentacion(&evs);
    let mut candidatas =
        filtrar_candidatas(estimar_candidatas(&examenes, &registros, &notas_presentacion));
    ordenar_candidatas(&mut candidatas);

    let codigo_curso = seleccionar_curso(&candidatas)?.codigo_curso.clone();
    let acta = tabla_acta_milagrosa(&codigo_curso, evaluaciones, historial);

    info!("✅ Acta Milagrosa identificada: {}", codigo_curso);
    Ok(ResultadoMilagro { examenes, notas_presentacion, candidatas, codigo_curso, acta })
}
