//! Limpieza y reconciliación de las tablas crudas de los dos portales.
//!
//! Submódulos:
//! - `periodo`: helpers de años, semestres y URLs de curso
//! - `recuento`: máquina de bloques del recuento de créditos
//! - `ucursos`: pivoteo de actas y enriquecimiento de notas
//! - `ucampus`: resumen, título/indicadores, semestre, docencia y UB
//! - `finales`: ensamble de las tablas canónicas
//!
//! Cada paso es una función pura sobre tablas; una fuente ausente o
//! malformada se registra y se reemplaza por una tabla vacía del esquema
//! esperado para que el pipeline siga con datos parciales.

pub mod periodo;

mod recuento;
mod ucampus;
mod ucursos;

mod finales;

pub use finales::creacion_tablas_finales;
pub use recuento::{limpiar_recuento, RecuentoLimpio, ESQUEMA_RECUENTO};
pub use ucampus::{
    limpiar_docencia, limpiar_indicadores, limpiar_semestre, limpiar_tabla_notas, limpiar_titulo,
    limpiar_ub,
};
pub use ucursos::{limpiar_actas_ucursos, limpiar_notas_ucursos};

use log::warn;

use crate::models::{Tabla, TablasCrudas};

/// Conjunto de tablas ya limpias, listo para el ensamble final.
#[derive(Debug, Clone)]
pub struct TablasLimpias {
    pub recuento: RecuentoLimpio,
    pub actas_ucursos: Tabla,
    pub notas_ucursos: Tabla,
    pub notas: Tabla,
    pub titulo: Tabla,
    pub indicadores: Tabla,
    pub semestre: Tabla,
    pub docencia: Tabla,
    pub ub: Tabla,
    pub ub_eliminadas: Tabla,
}

/// Toma la tabla si está presente; si no, avisa y sustituye por una vacía
/// del esquema esperado.
fn o_vacia(fuente: &Option<Tabla>, nombre: &str, columnas: &[&str]) -> Tabla {
    match fuente {
        Some(t) => t.clone(),
        None => {
            warn!("⚠️ Falta la tabla {}; se usa una vacía", nombre);
            Tabla::vacia(nombre, columnas)
        }
    }
}

/// Ejecuta todos los pasos de limpieza sobre las tablas crudas.
pub fn limpiar_datos(crudas: &TablasCrudas) -> TablasLimpias {
    let recuento = limpiar_recuento(&o_vacia(&crudas.recuento, "recuento", &ESQUEMA_RECUENTO));
    let actas_ucursos = limpiar_actas_ucursos(&o_vacia(
        &crudas.actas_ucursos,
        "Actas_ucursos",
        &["Curso URL", "Indicador", "Valor"],
    ));
    let notas_ucursos = limpiar_notas_ucursos(&o_vacia(
        &crudas.notas_ucursos,
        "Notas_ucursos",
        &["Curso URL", "Evaluación", "Promedio"],
    ));
    let notas = limpiar_tabla_notas(&o_vacia(&crudas.notas, "notas", &["Periodo", "CRA", "CAR"]));
    let titulo = limpiar_titulo(&o_vacia(
        &crudas.titulo,
        "titulo",
        &["Examen / Título", "Fecha", "Nota", "Profesor Guía"],
    ));
    let indicadores =
        limpiar_indicadores(&o_vacia(&crudas.indicadores, "indicadores", &["Indicador", "Valor"]));
    let semestre = limpiar_semestre(&o_vacia(
        &crudas.semestre,
        "semestre",
        &["Periodo", "Curso", "Creditos", "Nota"],
    ));
    let docencia = limpiar_docencia(&o_vacia(
        &crudas.docencia,
        "docencia",
        &["Año", "Semestre", "Nombre", "Código", "Cargo"],
    ));
    let (ub, ub_eliminadas) = limpiar_ub(
        &o_vacia(&crudas.ub, "UB", &["Año", "Estado"]),
        &o_vacia(&crudas.ub_eliminadas, "UB_eliminadas", &["Año", "Estado"]),
    );

    TablasLimpias {
        recuento,
        actas_ucursos,
        notas_ucursos,
        notas,
        titulo,
        indicadores,
        semestre,
        docencia,
        ub,
        ub_eliminadas,
    }
}
