//! Orquestador del workbook: recorre las hojas en el orden declarado y
//! concatena sesiones y roster de cada una.

use crate::algorithm::roster::extract_roster;
use crate::algorithm::sessions::extract_sessions;
use crate::config::LayoutConfig;
use crate::error::ExtractError;
use crate::excel::{load_workbook, Grid};
use crate::models::Extraction;
use std::path::Path;
use tracing::{debug, info};

/// Extrae una sola hoja. Sesiones y roster se calculan de forma independiente.
pub fn extract_sheet(grid: &Grid, layout: &LayoutConfig) -> Extraction {
    Extraction {
        sessions: extract_sessions(grid, layout),
        roster: extract_roster(grid, layout),
    }
}

/// Ejecuta la extracción sobre hojas ya cargadas en memoria, sin IO.
pub fn extract_sheets(sheets: &[(String, Grid)], layout: &LayoutConfig) -> Extraction {
    let mut out = Extraction::default();
    for (name, grid) in sheets {
        let partial = extract_sheet(grid, layout);
        debug!(
            sheet = %name,
            sessions = partial.sessions.len(),
            roster = partial.roster.len(),
            "hoja procesada"
        );
        out.append(partial);
    }
    out
}

/// Abre el workbook y extrae todas sus hojas.
///
/// Cualquier fallo (apertura o lectura de una hoja) aborta la corrida completa;
/// nunca se devuelve un resultado parcial.
pub fn extract_workbook<P: AsRef<Path>>(path: P, layout: &LayoutConfig) -> Result<Extraction, ExtractError> {
    let path = path.as_ref();
    let sheets = load_workbook(path)?;
    let extraction = extract_sheets(&sheets, layout);
    info!(
        path = %path.display(),
        sheets = sheets.len(),
        sessions = extraction.sessions.len(),
        roster = extraction.roster.len(),
        "extracción completada"
    );
    Ok(extraction)
}
