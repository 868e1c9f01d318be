// Estructuras de datos principales

use serde::{Deserialize, Serialize};
use std::fmt;

/// Días que produce la extracción. `Saturday` sólo existe para ordenar las
/// exportaciones; el extractor nunca lo emite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Day {
    /// Orden de presentación en las exportaciones.
    pub const DISPLAY_ORDER: [Day; 6] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
        }
    }

    /// Reconoce la etiqueta exacta de un día de clases (lunes a viernes).
    pub fn from_weekday_label(label: &str) -> Option<Day> {
        match label {
            "Monday" => Some(Day::Monday),
            "Tuesday" => Some(Day::Tuesday),
            "Wednesday" => Some(Day::Wednesday),
            "Thursday" => Some(Day::Thursday),
            "Friday" => Some(Day::Friday),
            _ => None,
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Una clase en un bloque horario, un día y una sección.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub semester: String,
    pub section: String,
    /// Sala por defecto de la sección (encabezado).
    pub classroom: String,
    /// Sala efectiva: la tercera línea de la celda o `classroom`.
    pub room: String,
    pub day: Day,
    pub time: String,
    pub period: usize,
    pub subject: String,
    pub faculty: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectType {
    Theory,
    Practical,
}

impl SubjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubjectType::Theory => "theory",
            SubjectType::Practical => "practical",
        }
    }
}

/// Fila de la tabla asignatura -> docente incrustada en la hoja.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub course_code: String,
    pub subject_abbreviation: String,
    pub subject_type: SubjectType,
    pub faculty_name: String,
    pub faculty_abbreviation: String,
}

/// Región combinada de una hoja. Los extremos `*_end` son exclusivos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MergedRegion {
    pub row_start: usize,
    pub row_end: usize,
    pub col_start: usize,
    pub col_end: usize,
}

impl MergedRegion {
    pub fn new(row_start: usize, row_end: usize, col_start: usize, col_end: usize) -> Self {
        MergedRegion { row_start, row_end, col_start, col_end }
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.row_start <= row && row < self.row_end && self.col_start <= col && col < self.col_end
    }

    pub fn width(&self) -> usize {
        self.col_end.saturating_sub(self.col_start)
    }

    pub fn anchor(&self) -> (usize, usize) {
        (self.row_start, self.col_start)
    }
}

/// Resultado de una corrida completa sobre un workbook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    pub sessions: Vec<Session>,
    pub roster: Vec<RosterEntry>,
}

impl Extraction {
    /// Concatena el resultado parcial de una hoja manteniendo el orden.
    pub fn append(&mut self, mut other: Extraction) {
        self.sessions.append(&mut other.sessions);
        self.roster.append(&mut other.roster);
    }
}
