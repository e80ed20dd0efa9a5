//! Ensamble de las tablas canónicas a partir de las tablas ya limpias.

use log::info;

use crate::limpieza::TablasLimpias;
use crate::models::Tabla;

/// Historial: actas pivoteadas + datos del recuento por semestre, con los
/// créditos tomados de la tabla semestre por (código, período).
fn armar_historial(limpias: &TablasLimpias) -> Tabla {
    let actas = &limpias.actas_ucursos;
    let por_semestre = &limpias.recuento.por_semestre;
    let semestre = &limpias.semestre;

    let mut columnas: Vec<&str> = actas.columnas.iter().map(|s| s.as_str()).collect();
    columnas.extend(["Ramo", "Créditos", "Plan"]);
    let mut historial = Tabla::nueva("Historial", &columnas);

    for i in 0..actas.n_filas() {
        let codigo = actas.celda(i, "Codigo_curso").unwrap_or("").to_string();
        let periodo = actas.celda(i, "Periodo").unwrap_or("").to_string();

        let mut fila = actas.filas[i].clone();

        // Primera coincidencia del recuento para el código; el historial se
        // mantiene en una fila por curso-período.
        let recuento_fila = (0..por_semestre.n_filas())
            .find(|&j| por_semestre.celda(j, "Codigo_curso") == Some(codigo.as_str()));
        let (ramo, plan) = match recuento_fila {
            Some(j) => (
                por_semestre.celda(j, "Ramo").unwrap_or("").to_string(),
                por_semestre.celda(j, "Plan").unwrap_or("").to_string(),
            ),
            None => (String::new(), String::new()),
        };

        let creditos = (0..semestre.n_filas())
            .find(|&j| {
                semestre.celda(j, "Codigo_curso") == Some(codigo.as_str())
                    && semestre.celda(j, "Periodo") == Some(periodo.as_str())
            })
            .and_then(|j| semestre.celda(j, "Creditos"))
            .unwrap_or("")
            .to_string();

        fila.push(ramo);
        fila.push(creditos);
        fila.push(if plan.is_empty() { "No utilizado".to_string() } else { plan });
        historial.agregar_fila(fila);
    }
    historial
}

/// Construye el conjunto canónico {Evaluaciones, Datos, Historial, UB,
/// Docencia} a partir de las tablas limpias.
pub fn creacion_tablas_finales(limpias: &TablasLimpias) -> (Tabla, Tabla, Tabla, Tabla, Tabla) {
    let mut evaluaciones = limpias.notas_ucursos.clone();
    evaluaciones.nombre = "Evaluaciones".to_string();

    let mut datos = Tabla::nueva("Datos", &["Campo", "Valor"]);
    datos.concatenar(&limpias.titulo);
    datos.concatenar(&limpias.indicadores);

    let historial = armar_historial(limpias);

    let mut ub = limpias.ub.clone();
    ub.nombre = "UB".to_string();
    ub.concatenar(&limpias.ub_eliminadas);

    let mut docencia = limpias.docencia.clone();
    docencia.nombre = "Docencia".to_string();

    info!(
        "✅ Tablas finales: {} evaluaciones, {} filas de historial",
        evaluaciones.n_filas(),
        historial.n_filas()
    );
    (evaluaciones, datos, historial, ub, docencia)
}
