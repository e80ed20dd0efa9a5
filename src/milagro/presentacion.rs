//! Notas de presentación: extracción de las observadas y estimación de las
//! faltantes a partir de la nota final y el examen.

use log::info;

use crate::milagro::etiquetas::{es_nota_presentacion, limpiar_texto};
use crate::models::{Candidata, Evaluacion, ExamenCurso, Nota, NotaPresentacion, RegistroHistorial};

/// Peso del examen en la nota final asumido por la estimación:
/// final = peso * examen + (1 - peso) * presentación.
pub const PESO_EXAMEN: f64 = 0.4;

fn redondear2(valor: f64) -> f64 {
    (valor * 100.0).round() / 100.0
}

/// Extrae la nota de presentación observada de cada curso: etiquetas que
/// calzan con la familia NP, quedándose con el período (año, semestre) más
/// reciente por curso y descartando después los valores no numéricos (los
/// centinelas R/T/E nunca se tratan como nota de presentación).
pub fn extraer_notas_presentacion(evaluaciones: &[Evaluacion]) -> Vec<NotaPresentacion> {
    struct Candidato<'a> {
        ev: &'a Evaluacion,
        indice: usize,
    }

    let mut por_curso: Vec<(String, Candidato)> = Vec::new();
    for (indice, ev) in evaluaciones.iter().enumerate() {
        if ev.promedio.trim().is_empty() {
            continue;
        }
        if !es_nota_presentacion(&limpiar_texto(&ev.evaluacion)) {
            continue;
        }
        let candidato = Candidato { ev, indice };
        match por_curso.iter().position(|(c, _)| *c == ev.codigo_curso) {
            Some(pos) => {
                let actual = &mut por_curso[pos].1;
                let clave_nueva = (ev.anio, ev.semestre, candidato.indice);
                let clave_actual = (actual.ev.anio, actual.ev.semestre, actual.indice);
                if clave_nueva > clave_actual {
                    *actual = candidato;
                }
            }
            None => por_curso.push((ev.codigo_curso.clone(), candidato)),
        }
    }

    por_curso
        .into_iter()
        .filter_map(|(_, c)| {
            let nota = c.ev.nota()?.como_f64()?;
            Some(NotaPresentacion {
                curso_url: c.ev.curso_url.clone(),
                codigo_curso: c.ev.codigo_curso.clone(),
                anio: c.ev.anio,
                semestre: c.ev.semestre,
                nota,
            })
        })
        .collect()
}

/// Une examen + historial + NP observada por curso aprobado y produce las
/// candidatas con su NP final (la observada manda sobre la estimada).
pub fn estimar_candidatas(
    examenes: &[ExamenCurso],
    historial: &[RegistroHistorial],
    notas_presentacion: &[NotaPresentacion],
) -> Vec<Candidata> {
    let mut candidatas = Vec::new();

    for examen in examenes {
        let registro = historial.iter().find(|h| {
            h.curso_url == examen.curso_url
                && h.codigo_curso == examen.codigo_curso
                && h.anio == examen.anio
                && h.semestre == examen.semestre
                && h.aprobado()
        });
        let Some(registro) = registro else {
            continue;
        };
        let Some(promedio_final) = registro.nota_final.as_ref().and_then(Nota::como_f64) else {
            continue;
        };

        let estimada = (promedio_final - PESO_EXAMEN * examen.nota) / (1.0 - PESO_EXAMEN);
        let np_real = notas_presentacion
            .iter()
            .find(|np| {
                np.curso_url == examen.curso_url
                    && np.codigo_curso == examen.codigo_curso
                    && np.anio == examen.anio
                    && np.semestre == examen.semestre
            })
            .map(|np| np.nota);
        let np_final = redondear2(np_real.unwrap_or(estimada));

        candidatas.push(Candidata {
            curso_url: examen.curso_url.clone(),
            codigo_curso: examen.codigo_curso.clone(),
            anio: examen.anio,
            semestre: examen.semestre,
            periodo: examen.periodo.clone(),
            nota_examen: examen.nota,
            promedio_final,
            promedio_curso: registro.promedio_curso,
            np_final,
            np_real,
        });
    }

    info!(
        "ℹ️ {} cursos con examen y acta; {} con NP observada",
        candidatas.len(),
        candidatas.iter().filter(|c| c.np_real.is_some()).count()
    );
    candidatas
}
