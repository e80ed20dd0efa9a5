//! Configuración del pipeline: `config/settings.json` + overrides de entorno.
//!
//! El archivo de settings se crea con valores por defecto si no existe, de
//! modo que el binario corre "out of the box" sobre un directorio `data/`
//! recién scrapeado.

use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

/// Settings persistidos en `config/settings.json`. Los campos del scraper
/// (headless, gpu, colab) se conservan en el archivo para compatibilidad con
/// la etapa de extracción, pero el pipeline sólo consume `output_dir`,
/// `log_level` y `export_excel`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    pub headless: bool,
    pub disable_gpu: bool,
    pub colab_mode: bool,
    pub output_dir: String,
    pub log_level: String,
    pub default_texture: String,
    pub export_excel: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            headless: true,
            disable_gpu: false,
            colab_mode: false,
            output_dir: "data".to_string(),
            log_level: "INFO".to_string(),
            default_texture: "assets/textures/texture2.jpg".to_string(),
            export_excel: true,
        }
    }
}

/// Ruta del archivo de settings, relativa al directorio de trabajo.
pub const SETTINGS_PATH: &str = "config/settings.json";

/// Crea `config/settings.json` con los defaults y el directorio de datos si
/// no existen todavía.
pub fn asegurar_configuracion() -> Result<(), Box<dyn Error>> {
    let ruta = Path::new(SETTINGS_PATH);
    if !ruta.exists() {
        if let Some(padre) = ruta.parent() {
            fs::create_dir_all(padre)?;
        }
        let defaults = Settings::default();
        fs::write(ruta, serde_json::to_string_pretty(&defaults)?)?;
        info!("📂 Creado {} con valores por defecto", SETTINGS_PATH);
    }
    let settings = cargar_settings();
    let datos = directorio_datos(&settings);
    if !datos.exists() {
        fs::create_dir_all(&datos)?;
        info!("📂 Creado directorio de datos {:?}", datos);
    }
    Ok(())
}

/// Lee settings desde disco; ante cualquier problema vuelve a los defaults
/// en lugar de abortar.
pub fn cargar_settings() -> Settings {
    match fs::read_to_string(SETTINGS_PATH) {
        Ok(texto) => match serde_json::from_str(&texto) {
            Ok(s) => s,
            Err(e) => {
                warn!("⚠️ settings.json malformado ({}), usando defaults", e);
                Settings::default()
            }
        },
        Err(_) => Settings::default(),
    }
}

/// Resuelve el directorio de datos. Orden de preferencia:
/// 1. variable de entorno `ACTA_DATA_DIR` (se carga `.env` si existe)
/// 2. `output_dir` de settings, relativo al directorio de trabajo
pub fn directorio_datos(settings: &Settings) -> PathBuf {
    let _ = dotenv::dotenv();
    if let Ok(p) = env::var("ACTA_DATA_DIR") {
        let ruta = PathBuf::from(p);
        if ruta.exists() {
            info!("✅ Usando ACTA_DATA_DIR: {:?}", ruta);
            return ruta;
        }
        warn!("⚠️ ACTA_DATA_DIR apunta a una ruta inexistente: {:?}", ruta);
    }
    PathBuf::from(&settings.output_dir)
}

/// Inicializa el logger global según `log_level` de settings. `RUST_LOG`
/// sigue teniendo prioridad si está definido.
pub fn iniciar_logs(settings: &Settings) {
    let nivel = match settings.log_level.to_uppercase().as_str() {
        "ERROR" => "error",
        "WARN" | "WARNING" => "warn",
        "DEBUG" => "debug",
        "TRACE" => "trace",
        _ => "info",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(nivel))
        .format_timestamp_secs()
        .try_init();
}
