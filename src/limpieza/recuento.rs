//! Limpieza del recuento de créditos de u-campus.
//!
//! La tabla cruda es un listado aplanado: filas de cabecera con el patrón
//! "N de N" abren un bloque de N+1 filas (cabecera incluida) que pertenecen
//! al plan nombrado en esa cabecera. Del listado limpio se derivan tres
//! subconjuntos disjuntos según el campo Semestre y la forma del campo Ramo.

use std::sync::OnceLock;

use log::warn;
use regex::Regex;

use crate::limpieza::periodo::{extraer_anio, semestre_a_numero};
use crate::models::Tabla;

/// Esquema esperado de la tabla cruda `recuento`. La columna `Detalle` es la
/// segunda columna sin nombre del scraping, con "plan\nN de N" embebido.
pub const ESQUEMA_RECUENTO: [&str; 6] = ["Plan", "Ramo", "Detalle", "Semestre", "Créditos", "Nota"];

/// Resultado de la limpieza del recuento.
#[derive(Debug, Clone)]
pub struct RecuentoLimpio {
    /// Listado completo con la columna Plan reconstruida por bloques.
    pub recuento: Tabla,
    /// Filas sin semestre y con Ramo numérico: conteos de créditos.
    pub cuenta_creditos: Tabla,
    /// Filas sin semestre y con Ramo textual: triples plan/subplan/créditos.
    pub planes: Tabla,
    /// Filas con semestre: cursos completos por período.
    pub por_semestre: Tabla,
}

fn patron_candidatos() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\bcandidatos\b").unwrap())
}

fn patron_bloque() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)\s*de\s*\d+").unwrap())
}

/// Coerción de la nota del recuento: se quitan asteriscos, la eximición "T"
/// vale 7 y lo no numérico queda vacío (excluido de la aritmética).
fn coercionar_nota(crudo: &str) -> String {
    let sin_asteriscos = crudo.replace('*', "");
    let texto = sin_asteriscos.trim();
    if texto.is_empty() {
        return String::new();
    }
    if texto == "T" {
        return "7".to_string();
    }
    match texto.parse::<f64>() {
        Ok(_) => texto.to_string(),
        Err(_) => String::new(),
    }
}

fn es_numerico(texto: &str) -> bool {
    !texto.is_empty() && texto.chars().all(|c| c.is_ascii_digit())
}

/// Limpia el recuento crudo y deriva sus tres subconjuntos.
pub fn limpiar_recuento(crudo: &Tabla) -> RecuentoLimpio {
    let mut limpio = Tabla::nueva("recuento", &["Ramo", "Semestre", "Créditos", "Nota", "Plan"]);
    let mut cuenta_creditos =
        Tabla::nueva("recuento_cuenta_creditos", &["Plan", "Créditos", "Nota"]);
    let mut planes = Tabla::nueva("recuento_planes", &["Plan", "Subplan", "Créditos"]);
    let mut por_semestre = Tabla::nueva(
        "recuento_por_semestre",
        &["Ramo", "Codigo_curso", "Periodo", "Año", "Semestre", "Créditos", "Nota", "Plan"],
    );

    if crudo.indice("Ramo").is_none() {
        warn!("⚠️ Tabla recuento sin columna Ramo; se devuelven tablas vacías");
        return RecuentoLimpio { recuento: limpio, cuenta_creditos, planes, por_semestre };
    }

    // Máquina de bloques: una cabecera "N de N" abre un bloque de N+1 filas
    // con el plan de esa cabecera; fuera de bloque la fila queda sin plan.
    let mut plan_actual: Option<String> = None;
    let mut restantes: i64 = 0;

    for i in 0..crudo.n_filas() {
        let ramo = crudo.celda(i, "Ramo").unwrap_or("").to_string();
        if patron_candidatos().is_match(&ramo) {
            continue;
        }

        let detalle = crudo.celda(i, "Detalle").unwrap_or("");
        let (nombre_plan, conteo) = match detalle.split_once('\n') {
            Some((a, b)) => (a.trim().to_string(), b.trim().to_string()),
            None => (detalle.trim().to_string(), String::new()),
        };
        let n = patron_bloque()
            .captures(&conteo)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse::<i64>().ok())
            .unwrap_or(0);
        if n > 0 {
            plan_actual = Some(nombre_plan);
            restantes = n + 1;
        }
        let plan = if restantes > 0 && plan_actual.is_some() {
            restantes -= 1;
            plan_actual.clone().unwrap_or_default()
        } else {
            String::new()
        };

        let semestre = crudo.celda(i, "Semestre").unwrap_or("").trim().to_string();
        let creditos = crudo.celda(i, "Créditos").unwrap_or("").trim().to_string();
        let nota = crudo.celda(i, "Nota").unwrap_or("").trim().to_string();

        limpio.agregar_fila(vec![
            ramo.clone(),
            semestre.clone(),
            creditos.clone(),
            nota.clone(),
            plan.clone(),
        ]);

        if semestre.is_empty() {
            if es_numerico(&ramo) {
                // El campo Ramo trae el conteo de créditos y la nota quedó
                // corrida a la columna Créditos.
                cuenta_creditos.agregar_fila(vec![plan, ramo, creditos]);
            } else {
                planes.agregar_fila(vec![plan, ramo, creditos]);
            }
        } else {
            let anio = extraer_anio(&semestre)
                .map(|a| a.to_string())
                .unwrap_or_default();
            let numero = semestre_a_numero(&semestre)
                .map(|s| s.to_string())
                .unwrap_or_default();
            let codigo = ramo.split(' ').next().unwrap_or("").to_string();
            por_semestre.agregar_fila(vec![
                ramo,
                codigo,
                semestre,
                anio,
                numero,
                creditos,
                coercionar_nota(&nota),
                plan,
            ]);
        }
    }

    RecuentoLimpio { recuento: limpio, cuenta_creditos, planes, por_semestre }
}
