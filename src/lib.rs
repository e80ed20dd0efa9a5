// Biblioteca raíz del crate `acta_milagrosa`.
// Reexporta los módulos principales y proporciona una función de
// conveniencia `ejecutar_pipeline` que orquesta el flujo completo.
pub mod config;
pub mod excel;
pub mod limpieza;
pub mod milagro;
pub mod models;
pub mod pipeline;

/// Corre el pipeline completo (reexport para facilitar uso desde `main`)
pub use pipeline::ejecutar_pipeline;
