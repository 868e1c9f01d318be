//! Errores tipados del crate.
//!
//! Las omisiones de datos (celdas vacías, RECESS, filas de roster incompletas,
//! joins sin coincidencia) no son errores: sólo reducen la salida.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no se pudo abrir el workbook '{}': {source}", .path.display())]
    WorkbookOpen {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },
    #[error("fallo al extraer la hoja '{sheet}': {message}")]
    SheetExtraction { sheet: String, message: String },
}

impl ExtractError {
    /// Etapa que falló, para el mensaje terminal: "open" o "extract".
    pub fn stage(&self) -> &'static str {
        match self {
            ExtractError::WorkbookOpen { .. } => "open",
            ExtractError::SheetExtraction { .. } => "extract",
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("wkhtmltopdf no encontrado (instálelo o defina CLASSGRID_WKHTMLTOPDF)")]
    PdfConverterMissing,
    #[error("wkhtmltopdf falló: {0}")]
    PdfConverter(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error leyendo configuración: {0}")]
    Io(#[from] std::io::Error),
    #[error("configuración JSON inválida: {0}")]
    Json(#[from] serde_json::Error),
    #[error("layout inválido: {0}")]
    Invalid(String),
}
