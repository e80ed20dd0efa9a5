use acta_milagrosa::milagro::etiquetas::{
    es_examen, es_excluida_de_examen, es_nota_presentacion, limpiar_texto,
};

#[test]
fn test_limpiar_texto_basico() {
    assert_eq!(limpiar_texto("Examen"), "EXAMEN");
    assert_eq!(limpiar_texto("Situación pre-examen"), "SITUACION PRE EXAMEN");
    assert_eq!(limpiar_texto("Examen-Promedio"), "EXAMEN PROMEDIO");
    assert_eq!(limpiar_texto("Promedio Ponderado presentación a ."), "PROMEDIO PONDERADO PRESENTACION A ");
}

#[test]
fn test_limpiar_texto_quita_tildes() {
    assert_eq!(limpiar_texto("Evaluación"), "EVALUACION");
    assert_eq!(limpiar_texto("Nota de Presentación"), "NOTA DE PRESENTACION");
}

#[test]
fn test_limpiar_texto_espacio_inicial() {
    assert_eq!(limpiar_texto(" Examen"), "EXAMEN");
    // un guion inicial se vuelve espacio y también se descarta
    assert_eq!(limpiar_texto("-Pregunta1"), "PREGUNTA1");
}

#[test]
fn test_limpiar_texto_vacio_no_explota() {
    assert_eq!(limpiar_texto(""), "");
    assert_eq!(limpiar_texto("   "), "");
}

#[test]
fn test_limpiar_texto_idempotente() {
    for crudo in [
        "Examen Recuperativo",
        " Nota de Presentación a Examen",
        "Situación Pre-Examen",
        "-P1",
        "control 3 módulo II",
    ] {
        let una = limpiar_texto(crudo);
        assert_eq!(limpiar_texto(&una), una, "no idempotente para {:?}", crudo);
    }
}

#[test]
fn test_es_examen_miembros_exactos() {
    assert!(es_examen(&limpiar_texto("Examen")));
    assert!(es_examen(&limpiar_texto("Examen Recuperativo")));
    assert!(es_examen(&limpiar_texto("Nota Examen")));
    assert!(es_examen(&limpiar_texto("Examen-Promedio")));
    assert!(es_examen(&limpiar_texto("Examen v2")));
}

#[test]
fn test_es_examen_rechaza_no_miembros() {
    assert!(!es_examen(&limpiar_texto("Control 1")));
    assert!(!es_examen(&limpiar_texto("Examen Final Sorpresa")));
    // subcadena de examen no basta: la pertenencia es exacta
    assert!(!es_examen(&limpiar_texto("Pauta Examen Recuperativo Corregida")));
}

#[test]
fn test_exclusion_tiene_precedencia() {
    // "Situación Pre-Examen" calza con la familia NP pero además está
    // excluida de examen por subcadena
    let etiqueta = limpiar_texto("Situación Pre-Examen");
    assert!(es_excluida_de_examen(&etiqueta));
    assert!(!es_examen(&etiqueta));

    let pregunta = limpiar_texto("Examen-Pregunta1");
    assert!(es_excluida_de_examen(&pregunta));
    assert!(!es_examen(&pregunta));
}

#[test]
fn test_familia_nota_presentacion() {
    for crudo in [
        "Nota Presentación",
        "Nota de Presentación",
        "Nota de Presentación a Examen",
        "Nota Presentación Examen",
        "Nota de Presentación (NP)",
        "Promedio Ponderado Presentación a Examen",
        "Situación Pre-Examen",
        "Nota Pre-Examen",
        "Pre-Examen",
    ] {
        assert!(
            es_nota_presentacion(&limpiar_texto(crudo)),
            "debió calzar como NP: {:?}",
            crudo
        );
    }
}

#[test]
fn test_nota_presentacion_anclada_al_final() {
    // la familia exige que el patrón cierre la etiqueta
    assert!(!es_nota_presentacion(&limpiar_texto("Nota de Presentación corregida")));
    assert!(!es_nota_presentacion(&limpiar_texto("Examen")));
    assert!(!es_nota_presentacion(&limpiar_texto("Control 2")));
}
