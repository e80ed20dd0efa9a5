//! Limpieza de las dos tablas de u-cursos: actas (largo -> ancho) y notas.

use log::warn;

use crate::limpieza::periodo::{periodo_desde_url, segmentos_curso_url};
use crate::models::Tabla;

/// Indicador de estadísticas que se descarta al pivotear las actas.
const INDICADOR_DESCARTADO: &str = "Estadísticas del Curso";

/// Pivotea la tabla de actas de (Curso URL, Indicador, Valor) a una fila por
/// curso, y agrega código/año/semestre/período derivados de la URL. El orden
/// de cursos e indicadores es el de primera aparición.
pub fn limpiar_actas_ucursos(crudo: &Tabla) -> Tabla {
    let mut indicadores: Vec<String> = Vec::new();
    let mut urls: Vec<String> = Vec::new();

    if crudo.indice("Curso URL").is_none() || crudo.indice("Indicador").is_none() {
        warn!("⚠️ Tabla Actas_ucursos sin columnas esperadas; se devuelve vacía");
        return Tabla::vacia(
            "Actas_ucursos",
            &["Curso URL", "Codigo_curso", "Año", "Semestre", "Periodo"],
        );
    }

    for i in 0..crudo.n_filas() {
        let url = crudo.celda(i, "Curso URL").unwrap_or("");
        let indicador = crudo.celda(i, "Indicador").unwrap_or("");
        if url.is_empty() || indicador.is_empty() || indicador == INDICADOR_DESCARTADO {
            continue;
        }
        if !urls.iter().any(|u| u == url) {
            urls.push(url.to_string());
        }
        if !indicadores.iter().any(|x| x == indicador) {
            indicadores.push(indicador.to_string());
        }
    }

    let mut columnas: Vec<&str> = vec!["Curso URL"];
    columnas.extend(indicadores.iter().map(|s| s.as_str()));
    columnas.extend(["Codigo_curso", "Año", "Semestre", "Periodo"]);
    let mut salida = Tabla::nueva("Actas_ucursos", &columnas);

    for url in &urls {
        let mut fila = vec![url.clone()];
        for indicador in &indicadores {
            let valor = (0..crudo.n_filas())
                .find(|&i| {
                    crudo.celda(i, "Curso URL") == Some(url.as_str())
                        && crudo.celda(i, "Indicador") == Some(indicador.as_str())
                })
                .and_then(|i| crudo.celda(i, "Valor"))
                .unwrap_or("")
                .to_string();
            fila.push(valor);
        }
        match segmentos_curso_url(url) {
            Some((codigo, anio, semestre)) => {
                fila.push(codigo);
                fila.push(anio.to_string());
                fila.push(semestre.to_string());
                fila.push(periodo_desde_url(anio, semestre));
            }
            None => {
                warn!("⚠️ URL de curso no reconocida en actas: {}", url);
                fila.extend([String::new(), String::new(), String::new(), String::new()]);
            }
        }
        salida.agregar_fila(fila);
    }
    salida
}

/// Enriquece la tabla de notas de u-cursos con código/año/semestre/período
/// derivados de la URL del curso. No necesita pivoteo: ya viene una fila por
/// evaluación.
pub fn limpiar_notas_ucursos(crudo: &Tabla) -> Tabla {
    let mut salida = Tabla::nueva(
        "Notas_ucursos",
        &["Curso URL", "Evaluación", "Promedio", "Codigo_curso", "Año", "Semestre", "Periodo"],
    );
    if crudo.indice("Curso URL").is_none() {
        warn!("⚠️ Tabla Notas_ucursos sin columna Curso URL; se devuelve vacía");
        return salida;
    }
    for i in 0..crudo.n_filas() {
        let url = crudo.celda(i, "Curso URL").unwrap_or("").to_string();
        let evaluacion = crudo.celda(i, "Evaluación").unwrap_or("").to_string();
        let promedio = crudo.celda(i, "Promedio").unwrap_or("").to_string();
        let (codigo, anio, semestre, periodo) = match segmentos_curso_url(&url) {
            Some((codigo, anio, semestre)) => (
                codigo,
                anio.to_string(),
                semestre.to_string(),
                periodo_desde_url(anio, semestre),
            ),
            None => {
                warn!("⚠️ URL de curso no reconocida en notas: {}", url);
                (String::new(), String::new(), String::new(), String::new())
            }
        };
        salida.agregar_fila(vec![url, evaluacion, promedio, codigo, anio, semestre, periodo]);
    }
    salida
}
