use std::collections::HashMap;
use std::error::Error;
use std::path::Path;

use log::{info, warn};

use crate::excel::io::leer_libro;
use crate::models::{Tabla, TablasCrudas};

/// Carga los dos libros scrapeados desde el directorio de datos y junta sus
/// hojas en un solo conjunto de tablas crudas.
///
/// Se aceptan archivos `.xlsx` cuyo nombre contenga `ucursos` o `ucampus`
/// (en cualquier capitalización); los lock files de Office (`~$...`) se
/// ignoran. Un directorio ausente no es fatal: se avisa y se devuelve un
/// conjunto vacío para que el pipeline siga degradado.
pub fn carga_datos(directorio: &Path) -> Result<TablasCrudas, Box<dyn Error>> {
    let mut hojas: HashMap<String, Tabla> = HashMap::new();

    if !directorio.exists() {
        warn!("⚠️ El directorio {:?} no existe", directorio);
        return Ok(TablasCrudas::default());
    }

    for entrada in std::fs::read_dir(directorio)? {
        let entrada = entrada?;
        let nombre = entrada.file_name().to_string_lossy().to_string();
        if !nombre.ends_with(".xlsx") || nombre.starts_with("~$") {
            continue;
        }
        let minuscula = nombre.to_lowercase();
        if !minuscula.contains("ucursos") && !minuscula.contains("ucampus") {
            continue;
        }
        match leer_libro(entrada.path()) {
            Ok(libro) => {
                info!("📦 Leído {} ({} hojas)", nombre, libro.len());
                hojas.extend(libro);
            }
            Err(e) => {
                warn!("⚠️ No se pudo leer {}: {}", nombre, e);
            }
        }
    }

    if hojas.is_empty() {
        warn!("⚠️ No se encontraron libros de u-cursos/u-campus en {:?}", directorio);
    }
    Ok(TablasCrudas::desde_mapa(hojas))
}
