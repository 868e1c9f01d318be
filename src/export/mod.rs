//! Exportaciones del modelo normalizado.
//!
//! Submódulos:
//! - `organize`: join sesión -> roster y agrupación día / semestre
//! - `text`: corpus de texto plano para el servicio de QA
//! - `html`: documento HTML por semestre
//! - `pdf`: conversión del HTML con wkhtmltopdf
//! - `json`: archivos JSON con marca de tiempo

pub mod organize;
pub mod text;
pub mod html;
pub mod pdf;
pub mod json;

pub use html::render_html;
pub use json::{write_json_outputs, OutputFile, OutputFiles};
pub use organize::{organize, Organized};
pub use pdf::{write_pdf, write_pdf_with};
pub use text::render_structured_text;

use crate::config::LayoutConfig;
use crate::models::Extraction;

/// Atajo: texto estructurado directamente desde una extracción.
pub fn structured_text(extraction: &Extraction, layout: &LayoutConfig) -> String {
    render_structured_text(&organize(&extraction.sessions, &extraction.roster, &layout.semester_order))
}

/// Atajo: HTML directamente desde una extracción.
pub fn html_document(extraction: &Extraction, layout: &LayoutConfig) -> String {
    render_html(&organize(&extraction.sessions, &extraction.roster, &layout.semester_order))
}
