//! Archivos JSON con marca de tiempo: `timetable_<ts>.json` y `subjects_<ts>.json`.

use crate::error::ExportError;
use crate::models::Extraction;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFile {
    pub filename: String,
    pub filepath: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFiles {
    pub timetable: OutputFile,
    pub subjects: OutputFile,
}

/// Marca de tiempo local `%Y%m%d_%H%M%S`.
pub fn timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// JSON completo de la extracción (`sessions` y `roster`).
pub fn to_json_string(extraction: &Extraction) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(extraction)?)
}

/// Escribe sesiones y roster en `dir` (se crea si falta).
pub fn write_json_outputs(extraction: &Extraction, dir: &Path) -> Result<OutputFiles, ExportError> {
    write_json_outputs_with_stamp(extraction, dir, &timestamp())
}

pub fn write_json_outputs_with_stamp(
    extraction: &Extraction,
    dir: &Path,
    stamp: &str,
) -> Result<OutputFiles, ExportError> {
    fs::create_dir_all(dir)?;
    let dir = dir.canonicalize()?;

    let timetable = write_one(&dir, &format!("timetable_{}.json", stamp), &extraction.sessions)?;
    let subjects = write_one(&dir, &format!("subjects_{}.json", stamp), &extraction.roster)?;
    info!(
        timetable = %timetable.filepath.display(),
        subjects = %subjects.filepath.display(),
        "JSON guardado"
    );
    Ok(OutputFiles { timetable, subjects })
}

fn write_one<T: Serialize>(dir: &Path, filename: &str, value: &T) -> Result<OutputFile, ExportError> {
    let filepath = dir.join(filename);
    let text = serde_json::to_string_pretty(value)?;
    fs::write(&filepath, text)?;
    Ok(OutputFile { filename: filename.to_string(), filepath })
}
