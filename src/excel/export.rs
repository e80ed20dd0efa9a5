use std::error::Error;
use std::path::Path;

use log::info;

use crate::models::Tabla;

/// Excel limita los nombres de hoja a 31 caracteres.
fn nombre_hoja(nombre: &str) -> String {
    nombre.chars().take(31).collect()
}

/// Convierte un índice de columna 1-based a letras de Excel (1 -> "A",
/// 27 -> "AA").
fn letras_columna(mut indice: usize) -> String {
    let mut letras = Vec::new();
    while indice > 0 {
        let resto = (indice - 1) % 26;
        letras.push((b'A' + resto as u8) as char);
        indice = (indice - 1) / 26;
    }
    letras.iter().rev().collect()
}

fn referencia(columna: usize, fila: usize) -> String {
    format!("{}{}", letras_columna(columna), fila)
}

fn escribir_tabla(hoja: &mut umya_spreadsheet::Worksheet, tabla: &Tabla) {
    for (c, columna) in tabla.columnas.iter().enumerate() {
        hoja.get_cell_mut(referencia(c + 1, 1).as_str()).set_value(columna);
    }
    for (f, fila) in tabla.filas.iter().enumerate() {
        for (c, valor) in fila.iter().enumerate() {
            if valor.is_empty() {
                continue;
            }
            hoja.get_cell_mut(referencia(c + 1, f + 2).as_str()).set_value(valor);
        }
    }
}

/// Escribe las tablas como hojas de un único libro `.xlsx`.
///
/// La primera tabla reutiliza la hoja que `new_file` crea por defecto; el
/// resto se agrega con `new_sheet`.
pub fn exportar_libro(path: &Path, tablas: &[&Tabla]) -> Result<(), Box<dyn Error>> {
    let mut book = umya_spreadsheet::new_file();

    for (i, tabla) in tablas.iter().enumerate() {
        let nombre = nombre_hoja(&tabla.nombre);
        if i == 0 {
            let hoja = book
                .get_sheet_collection_mut()
                .get_mut(0)
                .ok_or("el libro nuevo no tiene hoja inicial")?;
            hoja.set_title(nombre);
            escribir_tabla(hoja, tabla);
        } else {
            let hoja = book
                .new_sheet(&nombre)
                .map_err(|e| format!("no se pudo crear la hoja {}: {}", nombre, e))?;
            escribir_tabla(hoja, tabla);
        }
    }

    umya_spreadsheet::writer::xlsx::write(&book, path)
        .map_err(|e| format!("no se pudo escribir el libro: {:?}", e))?;
    info!("💾 Libro exportado en {:?}", path);
    Ok(())
}
