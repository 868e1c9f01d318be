//! Parser de las filas de encabezado (semestre / sección / sala).

use crate::config::LayoutConfig;
use crate::excel::Grid;

pub const SECTION_MARKER: &str = "Section :-";
pub const CLASSROOM_MARKER: &str = "CLASSROOM:";
pub const SEMESTER_MARKER: &str = "Semester :-";

/// Extrae `(section, classroom)` del texto de la celda de encabezado.
///
/// La sección queda sólo con caracteres alfanuméricos ASCII y la sala se corta
/// en el primer token separado por espacios.
pub fn parse_section_classroom(text: &str) -> (String, String) {
    let section_pos = text.find(SECTION_MARKER);
    let classroom_pos = text.find(CLASSROOM_MARKER);

    let (section, classroom) = match (section_pos, classroom_pos) {
        (Some(s), Some(c)) => {
            let from = s + SECTION_MARKER.len();
            // si la sala aparece antes que la sección, la sección queda vacía
            let section = if c >= from { text[from..c].trim() } else { "" };
            (section, text[c + CLASSROOM_MARKER.len()..].trim())
        }
        (Some(s), None) => (text[s + SECTION_MARKER.len()..].trim(), ""),
        (None, Some(c)) => ("", text[c + CLASSROOM_MARKER.len()..].trim()),
        (None, None) => ("", ""),
    };

    let section: String = section.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    let classroom = classroom.split_whitespace().next().unwrap_or("").to_string();
    (section, classroom)
}

pub fn parse_semester(text: &str) -> String {
    text.replace(SEMESTER_MARKER, "").trim().to_string()
}

/// Contexto vigente mientras se recorre la hoja hacia abajo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderContext {
    pub semester: String,
    pub section: String,
    pub classroom: String,
}

impl HeaderContext {
    /// Aplica la fila de encabezado `row` sobre el contexto actual.
    ///
    /// Con `carry_forward_blank_headers` un semestre en blanco conserva el
    /// anterior, y una celda sin sección ni sala conserva ambas.
    pub fn apply_info_row(&mut self, grid: &Grid, row: usize, layout: &LayoutConfig) {
        let semester = parse_semester(grid.value_at(row, layout.semester_col));
        let (section, classroom) = parse_section_classroom(grid.value_at(row, layout.section_col));

        if layout.carry_forward_blank_headers {
            if !semester.is_empty() {
                self.semester = semester;
            }
            if !section.is_empty() || !classroom.is_empty() {
                self.section = section;
                self.classroom = classroom;
            }
        } else {
            self.semester = semester;
            self.section = section;
            self.classroom = classroom;
        }
    }
}
