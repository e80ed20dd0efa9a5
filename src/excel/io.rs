use std::collections::HashMap;
use std::error::Error;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::models::Tabla;

/// Convierte un `Data` de calamine a String. Los flotantes enteros se
/// imprimen sin parte decimal para que "2021.0" no contamine códigos ni años.
pub fn celda_a_texto(c: &Data) -> String {
    match c {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => {
            if (f.floor() - f).abs() < f64::EPSILON {
                format!("{}", *f as i64)
            } else {
                format!("{}", f)
            }
        }
        Data::Int(i) => format!("{}", i),
        Data::Bool(b) => format!("{}", b),
        Data::Empty => String::new(),
        Data::Error(_) => String::new(),
        Data::DateTime(s) => s.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

/// Lee todas las hojas de un libro y las devuelve como tablas nombradas.
/// La primera fila de cada hoja se toma como encabezados; una hoja vacía
/// produce una tabla sin columnas.
pub fn leer_libro<P: AsRef<Path>>(path: P) -> Result<HashMap<String, Tabla>, Box<dyn Error>> {
    let mut workbook = open_workbook_auto(path)?;
    let nombres = workbook.sheet_names().to_owned();
    let mut hojas = HashMap::new();

    for nombre in nombres {
        let range = match workbook.worksheet_range(&nombre) {
            Ok(r) => r,
            Err(_) => continue,
        };
        let mut filas_iter = range.rows();
        let columnas: Vec<String> = match filas_iter.next() {
            Some(encabezado) => encabezado.iter().map(celda_a_texto).collect(),
            None => Vec::new(),
        };
        let mut tabla = Tabla {
            nombre: nombre.clone(),
            columnas,
            filas: Vec::new(),
        };
        for fila in filas_iter {
            tabla.agregar_fila(fila.iter().map(celda_a_texto).collect());
        }
        hojas.insert(nombre, tabla);
    }
    Ok(hojas)
}
