// Motor de extracción del horario.
// Declarar submódulos (archivos en la carpeta `src/algorithm`)
pub mod header;
pub mod sessions;
pub mod roster;
pub mod extract_controller;

// Reexportar la API pública del motor
pub use extract_controller::{extract_sheet, extract_sheets, extract_workbook};
pub use header::{parse_section_classroom, parse_semester, HeaderContext};
pub use roster::extract_roster;
pub use sessions::{extract_sessions, split_cell};
