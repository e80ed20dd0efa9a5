use acta_milagrosa::limpieza::{
    creacion_tablas_finales, limpiar_actas_ucursos, limpiar_datos, limpiar_docencia,
    limpiar_indicadores, limpiar_notas_ucursos, limpiar_semestre, limpiar_tabla_notas,
    limpiar_titulo, limpiar_ub,
};
use acta_milagrosa::models::{Tabla, TablasCrudas};

const URL_MA: &str = "https://www.u-cursos.cl/ingenieria/2021/1/MA1001/1/";
const URL_FI: &str = "https://www.u-cursos.cl/ingenieria/2020/2/FI2001/1/";

fn tabla(nombre: &str, columnas: &[&str], filas: Vec<Vec<&str>>) -> Tabla {
    let mut t = Tabla::nueva(nombre, columnas);
    for fila in filas {
        t.agregar_fila(fila.into_iter().map(|s| s.to_string()).collect());
    }
    t
}

#[test]
fn test_actas_pivotea_por_curso() {
    let crudo = tabla(
        "Actas_ucursos",
        &["Curso URL", "Indicador", "Valor"],
        vec![
            vec![URL_MA, "Nota Final", "5.5"],
            vec![URL_MA, "Promedio", "4.9"],
            vec![URL_MA, "Estadísticas del Curso", ""],
            vec![URL_FI, "Nota Final", "6.0"],
            vec![URL_FI, "Promedio", "5.8"],
        ],
    );
    let actas = limpiar_actas_ucursos(&crudo);

    assert_eq!(actas.n_filas(), 2);
    assert_eq!(actas.celda(0, "Curso URL"), Some(URL_MA));
    assert_eq!(actas.celda(0, "Nota Final"), Some("5.5"));
    assert_eq!(actas.celda(0, "Promedio"), Some("4.9"));
    // el indicador de estadísticas no se pivotea
    assert_eq!(actas.indice("Estadísticas del Curso"), None);

    assert_eq!(actas.celda(0, "Codigo_curso"), Some("MA1001"));
    assert_eq!(actas.celda(0, "Año"), Some("2021"));
    assert_eq!(actas.celda(0, "Semestre"), Some("1"));
    assert_eq!(actas.celda(0, "Periodo"), Some("2021 Otoño"));

    assert_eq!(actas.celda(1, "Codigo_curso"), Some("FI2001"));
    assert_eq!(actas.celda(1, "Periodo"), Some("2020 Primavera"));
}

#[test]
fn test_notas_ucursos_derivan_de_la_url() {
    let crudo = tabla(
        "Notas_ucursos",
        &["Curso URL", "Evaluación", "Promedio"],
        vec![vec![URL_MA, "Control 1", "4.5"], vec![URL_MA, "Examen", "6.0"]],
    );
    let notas = limpiar_notas_ucursos(&crudo);

    assert_eq!(notas.n_filas(), 2);
    assert_eq!(notas.celda(1, "Evaluación"), Some("Examen"));
    assert_eq!(notas.celda(1, "Codigo_curso"), Some("MA1001"));
    assert_eq!(notas.celda(1, "Año"), Some("2021"));
    assert_eq!(notas.celda(1, "Semestre"), Some("1"));
    assert_eq!(notas.celda(1, "Periodo"), Some("2021 Otoño"));
}

#[test]
fn test_notas_ucursos_idempotente() {
    let crudo = tabla(
        "Notas_ucursos",
        &["Curso URL", "Evaluación", "Promedio"],
        vec![vec![URL_MA, "Examen", "6.0"]],
    );
    let una = limpiar_notas_ucursos(&crudo);
    let dos = limpiar_notas_ucursos(&una);
    // re-limpiar una tabla ya enriquecida no duplica columnas derivadas
    assert_eq!(una, dos);
}

#[test]
fn test_resumen_calcula_car() {
    let crudo = tabla(
        "notas",
        &["Periodo", "CRA"],
        vec![vec!["Otoño 2021", "30/60"], vec!["Primavera 2021", "1/3"], vec!["Verano 2022", "malo"]],
    );
    let notas = limpiar_tabla_notas(&crudo);

    assert_eq!(notas.celda(0, "CAR"), Some("50"));
    // 1/3 -> 33.333... redondeado a un decimal
    assert_eq!(notas.celda(1, "CAR"), Some("33.3"));
    // valor malformado queda vacío en vez de abortar
    assert_eq!(notas.celda(2, "CAR"), Some(""));
}

#[test]
fn test_titulo_a_campo_valor() {
    let crudo = tabla(
        "titulo",
        &["Examen / Título", "Fecha", "Nota", "Profesor Guía"],
        vec![vec![
            "Memoria X Ingeniería Civil Industrial Fecha 12/03/2024",
            "",
            "6.5",
            "A. Profesor",
        ]],
    );
    let titulo = limpiar_titulo(&crudo);

    assert_eq!(titulo.columnas, vec!["Campo".to_string(), "Valor".to_string()]);
    assert_eq!(titulo.n_filas(), 4);
    assert_eq!(titulo.celda(0, "Campo"), Some("Examen / Título"));
    assert_eq!(titulo.celda(0, "Valor"), Some("Memoria X"));
    assert_eq!(titulo.celda(1, "Campo"), Some("Fecha"));
    assert_eq!(titulo.celda(1, "Valor"), Some("12/03/2024"));
    assert_eq!(titulo.celda(2, "Valor"), Some("6.5"));
}

#[test]
fn test_indicadores_a_campo_valor() {
    let crudo = tabla(
        "indicadores",
        &["Indicador", "Valor"],
        vec![vec!["Créditos aprobados", "180"], vec!["Semestres cursados", "12"]],
    );
    let indicadores = limpiar_indicadores(&crudo);
    assert_eq!(indicadores.columnas, vec!["Campo".to_string(), "Valor".to_string()]);
    assert_eq!(indicadores.celda(0, "Campo"), Some("Créditos aprobados"));
    assert_eq!(indicadores.celda(1, "Valor"), Some("12"));
}

#[test]
fn test_semestre_enriquecido() {
    let crudo = tabla(
        "semestre",
        &["Periodo", "Curso", "Creditos", "Nota"],
        vec![vec!["Otoño 2021", "MA1001-1 Cálculo", "6", "5.5"]],
    );
    let semestre = limpiar_semestre(&crudo);

    assert_eq!(semestre.celda(0, "Año"), Some("2021"));
    assert_eq!(semestre.celda(0, "Semestre"), Some("2"));
    assert_eq!(semestre.celda(0, "Codigo_curso"), Some("MA1001"));
}

#[test]
fn test_semestre_idempotente() {
    let crudo = tabla(
        "semestre",
        &["Periodo", "Curso", "Creditos", "Nota"],
        vec![vec!["Otoño 2021", "MA1001-1 Cálculo", "6", "5.5"]],
    );
    let una = limpiar_semestre(&crudo);
    let dos = limpiar_semestre(&una);
    // re-limpiar una tabla ya limpia no duplica columnas ni cambia valores
    assert_eq!(una, dos);
}

#[test]
fn test_docencia_periodo_y_semestre() {
    let crudo = tabla(
        "docencia",
        &["Año", "Semestre", "Nombre", "Código", "Cargo"],
        vec![vec!["2022", "Primavera", "Cálculo", "MA1001", "Auxiliar"]],
    );
    let docencia = limpiar_docencia(&crudo);

    assert_eq!(docencia.celda(0, "Periodo"), Some("2022 Primavera"));
    assert_eq!(docencia.celda(0, "Semestre"), Some("1"));
    assert_eq!(docencia.celda(0, "Año"), Some("2022"));
}

#[test]
fn test_ub_eliminadas_se_alinean() {
    let ub = tabla(
        "UB",
        &["Año", "Beca", "Estado"],
        vec![vec!["2021", "UB1", "Activa"]],
    );
    let eliminadas = tabla(
        "UB_eliminadas",
        &["Beca", "Año"],
        vec![vec!["UB2", "2020"]],
    );
    let (activas, alineadas) = limpiar_ub(&ub, &eliminadas);

    assert_eq!(alineadas.columnas, activas.columnas);
    assert_eq!(alineadas.celda(0, "Año"), Some("2020"));
    assert_eq!(alineadas.celda(0, "Beca"), Some("UB2"));
    assert_eq!(alineadas.celda(0, "Estado"), Some("Eliminada"));
}

fn crudas_completas() -> TablasCrudas {
    let mut crudas = TablasCrudas::default();
    crudas.actas_ucursos = Some(tabla(
        "Actas_ucursos",
        &["Curso URL", "Indicador", "Valor"],
        vec![
            vec![URL_MA, "Nota Final", "5.5"],
            vec![URL_MA, "Promedio", "4.9"],
        ],
    ));
    crudas.notas_ucursos = Some(tabla(
        "Notas_ucursos",
        &["Curso URL", "Evaluación", "Promedio"],
        vec![vec![URL_MA, "Examen", "6.0"]],
    ));
    crudas.recuento = Some(tabla(
        "recuento",
        &["Plan", "Ramo", "Detalle", "Semestre", "Créditos", "Nota"],
        vec![vec!["", "MA1001 Cálculo", "Plan Común\n1 de 1", "Otoño 2021", "6", "5.5"]],
    ));
    crudas.semestre = Some(tabla(
        "semestre",
        &["Periodo", "Curso", "Creditos", "Nota"],
        vec![vec!["2021 Otoño", "MA1001-1 Cálculo", "6", "5.5"]],
    ));
    crudas.ub = Some(tabla("UB", &["Año", "Estado"], vec![vec!["2021", "Activa"]]));
    crudas.ub_eliminadas = Some(tabla("UB_eliminadas", &["Año"], vec![vec!["2020"]]));
    crudas.docencia = Some(tabla(
        "docencia",
        &["Año", "Semestre", "Nombre", "Código", "Cargo"],
        vec![vec!["2022", "Otoño", "Cálculo", "MA1001", "Auxiliar"]],
    ));
    crudas
}

#[test]
fn test_historial_final_combina_fuentes() {
    let limpias = limpiar_datos(&crudas_completas());
    let (evaluaciones, _datos, historial, ub, _docencia) = creacion_tablas_finales(&limpias);

    assert_eq!(evaluaciones.nombre, "Evaluaciones");
    assert_eq!(evaluaciones.n_filas(), 1);

    assert_eq!(historial.n_filas(), 1);
    assert_eq!(historial.celda(0, "Codigo_curso"), Some("MA1001"));
    assert_eq!(historial.celda(0, "Nota Final"), Some("5.5"));
    assert_eq!(historial.celda(0, "Promedio"), Some("4.9"));
    assert_eq!(historial.celda(0, "Ramo"), Some("MA1001 Cálculo"));
    assert_eq!(historial.celda(0, "Plan"), Some("Plan Común"));
    // créditos tomados de la tabla semestre por (código, período)
    assert_eq!(historial.celda(0, "Créditos"), Some("6"));

    // UB activas + eliminadas concatenadas con el mismo esquema
    assert_eq!(ub.n_filas(), 2);
    assert_eq!(ub.celda(1, "Estado"), Some("Eliminada"));
}

#[test]
fn test_fuentes_ausentes_degradan_a_vacio() {
    let limpias = limpiar_datos(&TablasCrudas::default());
    let (evaluaciones, datos, historial, ub, docencia) = creacion_tablas_finales(&limpias);

    assert!(evaluaciones.es_vacia());
    assert!(datos.es_vacia());
    assert!(historial.es_vacia());
    assert!(ub.es_vacia());
    assert!(docencia.es_vacia());
    // los esquemas sobreviven aunque no haya filas
    assert!(evaluaciones.indice("Codigo_curso").is_some());
    assert_eq!(datos.columnas, vec!["Campo".to_string(), "Valor".to_string()]);
}
