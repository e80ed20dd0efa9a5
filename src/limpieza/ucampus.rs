//! Limpieza de las tablas de u-campus: resumen semestral, título e
//! indicadores, semestre, docencia y unidades becarias.

use log::warn;

use crate::limpieza::periodo::{extraer_anio, semestre_a_numero};
use crate::models::Tabla;

/// Agrega a la tabla resumen ("notas") el porcentaje de avance CAR, derivado
/// del campo CRA con forma "completadas/totales".
pub fn limpiar_tabla_notas(crudo: &Tabla) -> Tabla {
    let mut salida = crudo.clone();
    salida.nombre = "notas".to_string();
    if crudo.indice("CRA").is_none() {
        warn!("⚠️ Tabla notas sin columna CRA; CAR queda vacío");
        salida.establecer_columna("CAR", vec![String::new(); crudo.n_filas()]);
        return salida;
    }
    let mut car = Vec::with_capacity(crudo.n_filas());
    for i in 0..crudo.n_filas() {
        let cra = crudo.celda(i, "CRA").unwrap_or("");
        let valor = cra
            .split_once('/')
            .and_then(|(c, t)| {
                let completadas = c.trim().parse::<f64>().ok()?;
                let totales = t.trim().parse::<f64>().ok()?;
                if totales == 0.0 {
                    return None;
                }
                Some(((completadas * 100.0 / totales) * 10.0).round() / 10.0)
            })
            .map(|v| v.to_string())
            .unwrap_or_default();
        car.push(valor);
    }
    salida.establecer_columna("CAR", car);
    salida
}

/// Reestructura la tabla de título a formato (Campo, Valor): separa la fecha
/// embebida en "Examen / Título", recorta el nombre del título y reparte la
/// primera fila en pares campo/valor.
pub fn limpiar_titulo(crudo: &Tabla) -> Tabla {
    let mut salida = Tabla::nueva("titulo", &["Campo", "Valor"]);
    if crudo.es_vacia() || crudo.indice("Examen / Título").is_none() {
        warn!("⚠️ Tabla titulo vacía o sin columna Examen / Título");
        return salida;
    }

    let examen_titulo = crudo.celda(0, "Examen / Título").unwrap_or("").to_string();
    let fecha = examen_titulo
        .split_once(" Fecha ")
        .map(|(_, f)| f.trim().to_string())
        .unwrap_or_else(|| crudo.celda(0, "Fecha").unwrap_or("").to_string());
    let titulo = examen_titulo
        .split(" Ingeniería Civil")
        .next()
        .unwrap_or("")
        .to_string();

    for columna in &crudo.columnas {
        let valor = match columna.as_str() {
            "Examen / Título" => titulo.clone(),
            "Fecha" => fecha.clone(),
            _ => crudo.celda(0, columna).unwrap_or("").to_string(),
        };
        salida.agregar_fila(vec![columna.clone(), valor]);
    }
    salida
}

/// Renombra las columnas de indicadores a (Campo, Valor) para poder
/// concatenarlas con la tabla de título.
pub fn limpiar_indicadores(crudo: &Tabla) -> Tabla {
    let mut salida = Tabla::nueva("indicadores", &["Campo", "Valor"]);
    for i in 0..crudo.n_filas() {
        let campo = crudo.celda(i, "Indicador").unwrap_or("").to_string();
        let valor = crudo.celda(i, "Valor").unwrap_or("").to_string();
        salida.agregar_fila(vec![campo, valor]);
    }
    salida
}

/// Enriquece la tabla semestre con año, semestre numérico y código de curso
/// (parte de `Curso` antes del primer guion).
pub fn limpiar_semestre(crudo: &Tabla) -> Tabla {
    let mut salida = crudo.clone();
    salida.nombre = "semestre".to_string();
    if crudo.indice("Periodo").is_none() || crudo.indice("Curso").is_none() {
        warn!("⚠️ Tabla semestre sin columnas Periodo/Curso; se deja tal cual");
        return salida;
    }
    let mut anios = Vec::with_capacity(crudo.n_filas());
    let mut semestres = Vec::with_capacity(crudo.n_filas());
    let mut codigos = Vec::with_capacity(crudo.n_filas());
    for i in 0..crudo.n_filas() {
        let periodo = crudo.celda(i, "Periodo").unwrap_or("");
        anios.push(extraer_anio(periodo).map(|a| a.to_string()).unwrap_or_default());
        semestres.push(
            semestre_a_numero(periodo)
                .map(|s| s.to_string())
                .unwrap_or_default(),
        );
        let curso = crudo.celda(i, "Curso").unwrap_or("");
        codigos.push(curso.split('-').next().unwrap_or("").trim().to_string());
    }
    salida.establecer_columna("Año", anios);
    salida.establecer_columna("Semestre", semestres);
    salida.establecer_columna("Codigo_curso", codigos);
    salida
}

/// Limpia la tabla de docencia: construye el período "AAAA Nombre" y deja el
/// semestre en su forma numérica.
pub fn limpiar_docencia(crudo: &Tabla) -> Tabla {
    let mut salida = crudo.clone();
    salida.nombre = "docencia".to_string();
    if crudo.indice("Año").is_none() || crudo.indice("Semestre").is_none() {
        warn!("⚠️ Tabla docencia sin columnas Año/Semestre; se deja tal cual");
        return salida;
    }
    let mut periodos = Vec::with_capacity(crudo.n_filas());
    let mut semestres = Vec::with_capacity(crudo.n_filas());
    let mut anios = Vec::with_capacity(crudo.n_filas());
    for i in 0..crudo.n_filas() {
        let anio = crudo.celda(i, "Año").unwrap_or("").trim().to_string();
        let semestre = crudo.celda(i, "Semestre").unwrap_or("").trim().to_string();
        periodos.push(format!("{} {}", anio, semestre));
        semestres.push(
            semestre_a_numero(&semestre)
                .map(|s| s.to_string())
                .unwrap_or_default(),
        );
        anios.push(
            anio.parse::<i32>()
                .map(|a| a.to_string())
                .unwrap_or_default(),
        );
    }
    salida.establecer_columna("Periodo", periodos);
    salida.establecer_columna("Semestre", semestres);
    salida.establecer_columna("Año", anios);
    salida
}

/// Marca las UB eliminadas con Estado = "Eliminada" y alinea sus columnas al
/// esquema de las UB activas para la concatenación posterior.
pub fn limpiar_ub(ub: &Tabla, ub_eliminadas: &Tabla) -> (Tabla, Tabla) {
    let activas = ub.clone();
    let mut eliminadas = ub_eliminadas.clone();
    eliminadas.establecer_columna("Estado", vec!["Eliminada".to_string(); eliminadas.n_filas()]);
    let eliminadas = eliminadas.reindexar_columnas(&activas.columnas);
    (activas, eliminadas)
}
