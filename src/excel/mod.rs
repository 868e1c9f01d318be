//! Módulo `excel`: lectura de workbooks y acceso a hojas.
//!
//! Submódulos:
//! - `io`: conversión de celdas de calamine y carga de hojas con sus celdas combinadas
//! - `grid`: proyección de sólo lectura de una hoja, resolviendo combinaciones

/// Helpers de IO sobre calamine
pub mod io;

/// Acceso a celdas con resolución de regiones combinadas
pub mod grid;

pub use grid::Grid;
pub use io::{cell_to_string, list_sheets, load_workbook};
