//! Extracción de la tabla asignatura -> docente ("THEORY SUBJECT" / "PRACTICAL").

use crate::config::{LayoutConfig, RosterColumns};
use crate::excel::Grid;
use crate::models::{RosterEntry, SubjectType};

pub const THEORY_MARKER: &str = "THEORY SUBJECT";
pub const PRACTICAL_MARKER: &str = "PRACTICAL";
pub const SUBHEADER_MARKER: &str = "Course code:";

/// Recorre toda la hoja (con celdas combinadas resueltas) y devuelve las filas de roster.
pub fn extract_roster(grid: &Grid, layout: &LayoutConfig) -> Vec<RosterEntry> {
    let cols = &layout.roster;
    let mut current: Option<SubjectType> = None;
    let mut entries = Vec::new();

    for row in 0..grid.row_count() {
        let values = grid.row_values(row);
        if values.iter().all(|v| v.trim().is_empty()) {
            continue;
        }

        let first = values.first().copied().unwrap_or("").trim();
        if first.contains(THEORY_MARKER) {
            current = Some(SubjectType::Theory);
            continue;
        }
        if first.contains(PRACTICAL_MARKER) {
            current = Some(SubjectType::Practical);
            continue;
        }

        let Some(subject_type) = current else { continue };
        if first.is_empty() || first.contains(SUBHEADER_MARKER) {
            continue;
        }

        if let Some(entry) = parse_roster_row(&values, subject_type, cols) {
            entries.push(entry);
        }
    }

    entries
}

fn cell<'a>(values: &[&'a str], col: usize) -> &'a str {
    values.get(col).copied().map(str::trim).unwrap_or("")
}

/// Convierte una fila de datos; `None` si falta el código o la abreviatura.
pub fn parse_roster_row(values: &[&str], subject_type: SubjectType, cols: &RosterColumns) -> Option<RosterEntry> {
    let code = cell(values, cols.code_col);
    let name = cell(values, cols.name_col);
    let course_code = match (code.is_empty(), name.is_empty()) {
        (false, false) => format!("{}: {}", code, name),
        _ => code.to_string(),
    };
    let subject_abbreviation = cell(values, cols.abbreviation_col).to_string();

    if course_code.trim().is_empty() || subject_abbreviation.is_empty() {
        return None;
    }

    let mut faculty_name = cell(values, cols.faculty_name_col).to_string();
    let faculty_abbreviation = cell(values, cols.faculty_abbreviation_col).to_string();

    if subject_type == SubjectType::Practical {
        // sólo el tramo inicial sin huecos, hasta tres nombres
        let staff: Vec<&str> = cols
            .staff_cols
            .iter()
            .take(3)
            .map(|&c| cell(values, c))
            .take_while(|s| !s.is_empty())
            .collect();
        if !staff.is_empty() {
            faculty_name = format!("{} ({})", faculty_name, staff.join(", "));
        }
    }

    Some(RosterEntry {
        course_code: course_code.trim().to_string(),
        subject_abbreviation,
        subject_type,
        faculty_name: faculty_name.trim().to_string(),
        faculty_abbreviation,
    })
}
