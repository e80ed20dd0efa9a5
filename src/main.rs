// --- Acta Milagrosa - Archivo principal ---

use acta_milagrosa::config::{asegurar_configuracion, cargar_settings, iniciar_logs};
use acta_milagrosa::ejecutar_pipeline;

fn main() {
    println!("=== Acta Milagrosa (limpieza y detección) ===");

    if let Err(e) = asegurar_configuracion() {
        eprintln!("❌ No se pudo preparar la configuración: {}", e);
        std::process::exit(1);
    }
    let settings = cargar_settings();
    iniciar_logs(&settings);

    match ejecutar_pipeline(&settings) {
        Ok(finales) => {
            println!(
                "✅ Pipeline completo: {} evaluaciones, hoja Acta_Milagrosa con {} filas",
                finales.evaluaciones.n_filas(),
                finales.acta_milagrosa.n_filas()
            );
        }
        Err(e) => {
            eprintln!("❌ Error en el pipeline: {}", e);
            std::process::exit(1);
        }
    }
}
