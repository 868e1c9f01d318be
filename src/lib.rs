// Biblioteca raíz del crate `classgrid`.
// Extrae sesiones y roster desde planillas de horario con celdas combinadas
// y las exporta como JSON, texto estructurado, HTML o PDF.
pub mod algorithm;
pub mod config;
pub mod error;
pub mod excel;
pub mod export;
pub mod models;
pub mod server;
pub mod uploads;

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;

pub use algorithm::{extract_sheets, extract_workbook};
pub use config::{AppConfig, LayoutConfig};
pub use error::{ConfigError, ExportError, ExtractError};
pub use models::{Day, Extraction, MergedRegion, RosterEntry, Session, SubjectType};
