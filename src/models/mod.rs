// Estructuras de datos principales

use std::collections::HashMap;

/// Tabla genérica en memoria: columnas con nombre y celdas de texto.
/// Todo acceso a columnas es por nombre; el orden de filas se conserva
/// tal como viene de la fuente.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Tabla {
    pub nombre: String,
    pub columnas: Vec<String>,
    pub filas: Vec<Vec<String>>,
}

impl Tabla {
    pub fn nueva(nombre: &str, columnas: &[&str]) -> Self {
        Tabla {
            nombre: nombre.to_string(),
            columnas: columnas.iter().map(|c| c.to_string()).collect(),
            filas: Vec::new(),
        }
    }

    /// Tabla vacía con el esquema esperado. Se usa como sustituto cuando
    /// una fuente falta o viene malformada.
    pub fn vacia(nombre: &str, columnas: &[&str]) -> Self {
        Self::nueva(nombre, columnas)
    }

    pub fn es_vacia(&self) -> bool {
        self.filas.is_empty()
    }

    pub fn n_filas(&self) -> usize {
        self.filas.len()
    }

    /// Índice de una columna por nombre.
    pub fn indice(&self, columna: &str) -> Option<usize> {
        self.columnas.iter().position(|c| c == columna)
    }

    /// Celda (fila, columna por nombre). Devuelve "" si la fila es más corta
    /// que el esquema.
    pub fn celda(&self, fila: usize, columna: &str) -> Option<&str> {
        let idx = self.indice(columna)?;
        let f = self.filas.get(fila)?;
        Some(f.get(idx).map(|s| s.as_str()).unwrap_or(""))
    }

    /// Agrega una fila, rellenando con "" hasta el ancho del esquema.
    pub fn agregar_fila(&mut self, mut fila: Vec<String>) {
        while fila.len() < self.columnas.len() {
            fila.push(String::new());
        }
        fila.truncate(self.columnas.len());
        self.filas.push(fila);
    }

    /// Define (o reemplaza) una columna completa. Reemplazar en lugar de
    /// duplicar mantiene la limpieza idempotente.
    pub fn establecer_columna(&mut self, columna: &str, valores: Vec<String>) {
        match self.indice(columna) {
            Some(idx) => {
                for (fila, valor) in self.filas.iter_mut().zip(valores) {
                    while fila.len() <= idx {
                        fila.push(String::new());
                    }
                    fila[idx] = valor;
                }
            }
            None => {
                self.columnas.push(columna.to_string());
                let ancho = self.columnas.len();
                for (fila, valor) in self.filas.iter_mut().zip(valores) {
                    while fila.len() < ancho - 1 {
                        fila.push(String::new());
                    }
                    fila.push(valor);
                }
            }
        }
    }

    /// Reordena/filtra columnas según el esquema dado; columnas ausentes
    /// quedan vacías (mismo efecto que un reindex de columnas).
    pub fn reindexar_columnas(&self, columnas: &[String]) -> Tabla {
        let mut salida = Tabla {
            nombre: self.nombre.clone(),
            columnas: columnas.to_vec(),
            filas: Vec::with_capacity(self.filas.len()),
        };
        let indices: Vec<Option<usize>> = columnas.iter().map(|c| self.indice(c)).collect();
        for fila in &self.filas {
            let nueva: Vec<String> = indices
                .iter()
                .map(|idx| match idx {
                    Some(i) => fila.get(*i).cloned().unwrap_or_default(),
                    None => String::new(),
                })
                .collect();
            salida.filas.push(nueva);
        }
        salida
    }

    /// Filas donde la columna dada vale exactamente `valor`.
    pub fn filtrar(&self, columna: &str, valor: &str) -> Tabla {
        let mut salida = Tabla {
            nombre: self.nombre.clone(),
            columnas: self.columnas.clone(),
            filas: Vec::new(),
        };
        if let Some(idx) = self.indice(columna) {
            for fila in &self.filas {
                if fila.get(idx).map(|s| s.as_str()) == Some(valor) {
                    salida.filas.push(fila.clone());
                }
            }
        }
        salida
    }

    /// Concatena filas de otra tabla, alineadas por nombre de columna.
    pub fn concatenar(&mut self, otra: &Tabla) {
        let alineada = otra.reindexar_columnas(&self.columnas);
        self.filas.extend(alineada.filas);
    }
}

/// Nota académica: valor numérico o estado terminal. Los estados terminales
/// nunca entran a la aritmética de estimación ni a los filtros numéricos.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub enum Nota {
    Numerica(f64),
    /// "R": reprobación
    Reprobada,
    /// "T": eximición
    Eximida,
    /// "E": otro estado terminal
    Especial,
}

impl Nota {
    /// Interpreta el texto de una celda. Devuelve None para celdas vacías o
    /// valores que no son ni numéricos ni centinelas conocidos.
    pub fn parsear(texto: &str) -> Option<Nota> {
        let t = texto.trim();
        if t.is_empty() {
            return None;
        }
        match t {
            "R" => return Some(Nota::Reprobada),
            "T" => return Some(Nota::Eximida),
            "E" => return Some(Nota::Especial),
            _ => {}
        }
        t.replace(',', ".").parse::<f64>().ok().map(Nota::Numerica)
    }

    pub fn como_f64(&self) -> Option<f64> {
        match self {
            Nota::Numerica(v) => Some(*v),
            _ => None,
        }
    }

    pub fn es_terminal(&self) -> bool {
        !matches!(self, Nota::Numerica(_))
    }
}

/// Una evaluación de u-cursos ya enriquecida (una fila de `Evaluaciones`).
#[derive(Debug, Clone, serde::Serialize)]
pub struct Evaluacion {
    pub curso_url: String,
    pub codigo_curso: String,
    pub anio: i32,
    pub semestre: i32,
    pub periodo: String,
    pub evaluacion: String,
    /// Texto crudo de la celda: puede ser numérico, centinela o vacío.
    pub promedio: String,
}

impl Evaluacion {
    pub fn nota(&self) -> Option<Nota> {
        Nota::parsear(&self.promedio)
    }

    /// Vista tipada de la tabla `Evaluaciones`. Filas sin año/semestre
    /// legibles se descartan.
    pub fn desde_tabla(tabla: &Tabla) -> Vec<Evaluacion> {
        let mut salida = Vec::with_capacity(tabla.n_filas());
        for i in 0..tabla.n_filas() {
            let anio = tabla
                .celda(i, "Año")
                .and_then(|s| s.trim().parse::<i32>().ok());
            let semestre = tabla
                .celda(i, "Semestre")
                .and_then(|s| s.trim().parse::<i32>().ok());
            let (Some(anio), Some(semestre)) = (anio, semestre) else {
                continue;
            };
            salida.push(Evaluacion {
                curso_url: tabla.celda(i, "Curso URL").unwrap_or("").to_string(),
                codigo_curso: tabla.celda(i, "Codigo_curso").unwrap_or("").to_string(),
                anio,
                semestre,
                periodo: tabla.celda(i, "Periodo").unwrap_or("").to_string(),
                evaluacion: tabla.celda(i, "Evaluación").unwrap_or("").to_string(),
                promedio: tabla.celda(i, "Promedio").unwrap_or("").to_string(),
            });
        }
        salida
    }
}

/// Una fila del historial institucional (acta) por curso-período.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RegistroHistorial {
    pub curso_url: String,
    pub codigo_curso: String,
    pub anio: i32,
    pub semestre: i32,
    pub periodo: String,
    pub nota_final: Option<Nota>,
    pub promedio_curso: Option<f64>,
    pub plan: String,
    pub creditos: Option<f64>,
}

impl RegistroHistorial {
    pub fn desde_tabla(tabla: &Tabla) -> Vec<RegistroHistorial> {
        let mut salida = Vec::with_capacity(tabla.n_filas());
        for i in 0..tabla.n_filas() {
            let anio = tabla
                .celda(i, "Año")
                .and_then(|s| s.trim().parse::<i32>().ok());
            let semestre = tabla
                .celda(i, "Semestre")
                .and_then(|s| s.trim().parse::<i32>().ok());
            let (Some(anio), Some(semestre)) = (anio, semestre) else {
                continue;
            };
            salida.push(RegistroHistorial {
                curso_url: tabla.celda(i, "Curso URL").unwrap_or("").to_string(),
                codigo_curso: tabla.celda(i, "Codigo_curso").unwrap_or("").to_string(),
                anio,
                semestre,
                periodo: tabla.celda(i, "Periodo").unwrap_or("").to_string(),
                nota_final: tabla.celda(i, "Nota Final").and_then(Nota::parsear),
                promedio_curso: tabla
                    .celda(i, "Promedio")
                    .and_then(|s| s.trim().replace(',', ".").parse::<f64>().ok()),
                plan: tabla.celda(i, "Plan").unwrap_or("").to_string(),
                creditos: tabla
                    .celda(i, "Créditos")
                    .and_then(|s| s.trim().parse::<f64>().ok()),
            });
        }
        salida
    }

    /// Un curso está aprobado si su nota final es numérica (no R/T/E).
    pub fn aprobado(&self) -> bool {
        matches!(self.nota_final, Some(Nota::Numerica(_)))
    }
}

/// Examen único de un curso, ya desambiguado.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ExamenCurso {
    pub curso_url: String,
    pub codigo_curso: String,
    pub anio: i32,
    pub semestre: i32,
    pub periodo: String,
    /// Etiqueta ya normalizada de la evaluación.
    pub evaluacion: String,
    pub nota: f64,
}

/// Nota de presentación observada (no estimada) de un curso.
#[derive(Debug, Clone, serde::Serialize)]
pub struct NotaPresentacion {
    pub curso_url: String,
    pub codigo_curso: String,
    pub anio: i32,
    pub semestre: i32,
    pub nota: f64,
}

/// Curso candidato a Acta Milagrosa: examen + acta + NP real o estimada.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Candidata {
    pub curso_url: String,
    pub codigo_curso: String,
    pub anio: i32,
    pub semestre: i32,
    pub periodo: String,
    pub nota_examen: f64,
    pub promedio_final: f64,
    pub promedio_curso: Option<f64>,
    /// NP final: la real cuando existe, si no la estimada. Redondeada a 2
    /// decimales.
    pub np_final: f64,
    pub np_real: Option<f64>,
}

/// Tablas crudas esperadas de los dos libros scrapeados. Cada campo es
/// opcional: una hoja ausente se reemplaza aguas abajo por una tabla vacía
/// del esquema documentado.
#[derive(Debug, Clone, Default)]
pub struct TablasCrudas {
    pub indicadores: Option<Tabla>,
    pub notas: Option<Tabla>,
    pub semestre: Option<Tabla>,
    pub docencia: Option<Tabla>,
    pub titulo: Option<Tabla>,
    pub ub: Option<Tabla>,
    pub ub_eliminadas: Option<Tabla>,
    pub recuento: Option<Tabla>,
    pub notas_ucursos: Option<Tabla>,
    pub actas_ucursos: Option<Tabla>,
}

impl TablasCrudas {
    /// Reparte las hojas leídas según su nombre de hoja.
    pub fn desde_mapa(mut hojas: HashMap<String, Tabla>) -> TablasCrudas {
        TablasCrudas {
            indicadores: hojas.remove("indicadores"),
            notas: hojas.remove("notas"),
            semestre: hojas.remove("semestre"),
            docencia: hojas.remove("docencia"),
            titulo: hojas.remove("titulo"),
            ub: hojas.remove("UB"),
            ub_eliminadas: hojas.remove("UB_eliminadas"),
            recuento: hojas.remove("recuento"),
            notas_ucursos: hojas.remove("Notas_ucursos"),
            actas_ucursos: hojas.remove("Actas_ucursos"),
        }
    }
}

/// Conjunto final de tablas que se exporta como hojas del libro de salida.
#[derive(Debug, Clone)]
pub struct TablasFinales {
    pub evaluaciones: Tabla,
    pub datos: Tabla,
    pub historial: Tabla,
    pub ub: Tabla,
    pub docencia: Tabla,
    pub acta_milagrosa: Tabla,
}

impl TablasFinales {
    pub fn hojas(&self) -> Vec<&Tabla> {
        vec![
            &self.evaluaciones,
            &self.datos,
            &self.historial,
            &self.ub,
            &self.docencia,
            &self.acta_milagrosa,
        ]
    }
}
