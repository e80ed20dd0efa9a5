//! Orquestación del pipeline: carga -> limpieza -> tablas canónicas ->
//! Acta Milagrosa -> exportación.
//!
//! Cada etapa que falla se registra y se sustituye por tablas vacías del
//! esquema esperado, de modo que siempre se emite un libro de salida aunque
//! sea parcial.

use std::error::Error;

use log::{info, warn};

use crate::config::{directorio_datos, Settings};
use crate::excel::{carga_datos, exportar_libro};
use crate::limpieza::{creacion_tablas_finales, limpiar_datos};
use crate::milagro::{esquema_acta, identificar_acta_milagrosa, MilagroError};
use crate::models::{TablasCrudas, TablasFinales};

/// Nombre del libro de salida dentro del directorio de datos.
pub const LIBRO_SALIDA: &str = "clean_data.xlsx";

/// Corre el pipeline completo y devuelve el conjunto final de tablas.
pub fn ejecutar_pipeline(settings: &Settings) -> Result<TablasFinales, Box<dyn Error>> {
    let directorio = directorio_datos(settings);

    let crudas = match carga_datos(&directorio) {
        Ok(c) => c,
        Err(e) => {
            warn!("⚠️ Falló la carga de datos ({}); se sigue con tablas vacías", e);
            TablasCrudas::default()
        }
    };

    let limpias = limpiar_datos(&crudas);
    let (evaluaciones, datos, historial, ub, docencia) = creacion_tablas_finales(&limpias);

    let acta_milagrosa = match identificar_acta_milagrosa(&evaluaciones, &historial) {
        Ok(resultado) => resultado.acta,
        Err(MilagroError::SinCandidatas) => {
            warn!("⚠️ Sin candidatos a Acta Milagrosa; la hoja sale vacía");
            esquema_acta(&evaluaciones)
        }
    };

    let finales = TablasFinales { evaluaciones, datos, historial, ub, docencia, acta_milagrosa };

    if settings.export_excel {
        let salida = directorio.join(LIBRO_SALIDA);
        exportar_libro(&salida, &finales.hojas())?;
    } else {
        info!("ℹ️ export_excel deshabilitado; no se escribe el libro");
    }
    Ok(finales)
}
