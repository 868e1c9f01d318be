//! Extracción de sesiones (una por día y bloque horario).
//!
//! Recorrido único hacia abajo: las filas de encabezado actualizan el
//! `HeaderContext` y las filas de día lo consumen. Sólo la celda ancla de una
//! región combinada emite, y lo hace para cada bloque que cubre.

use crate::algorithm::header::HeaderContext;
use crate::config::LayoutConfig;
use crate::excel::Grid;
use crate::models::{Day, Session};

/// Campos que se obtienen del texto de una celda.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellContent {
    pub subject: String,
    pub faculty: String,
    pub room: Option<String>,
}

/// true si la celda no debe producir sesiones (vacía o RECESS).
pub fn is_blank_or_recess(text: &str) -> bool {
    let t = text.trim();
    t.is_empty() || t.eq_ignore_ascii_case("RECESS")
}

/// Divide el texto multilínea en asignatura / docente / sala.
/// Devuelve `None` si no queda ninguna línea con contenido.
pub fn split_cell(text: &str) -> Option<CellContent> {
    let lines: Vec<&str> = text.split('\n').map(str::trim).filter(|l| !l.is_empty()).collect();
    let first = lines.first()?;

    let subject = match first.split_once(':') {
        Some((before, _)) => before.trim().to_string(),
        None => first.to_string(),
    };

    let faculty = match lines.get(1) {
        Some(line) if line.contains('(') => {
            let inner = line.strip_prefix('(').unwrap_or(line);
            inner.strip_suffix(')').unwrap_or(inner).trim().to_string()
        }
        Some(line) => line.to_string(),
        None => String::new(),
    };

    let room = lines.get(2).map(|l| l.to_string());

    Some(CellContent { subject, faculty, room })
}

/// Recorre la hoja y devuelve las sesiones en orden de aparición.
pub fn extract_sessions(grid: &Grid, layout: &LayoutConfig) -> Vec<Session> {
    let mut ctx = HeaderContext::default();
    let mut sessions = Vec::new();

    for row in 0..grid.row_count() {
        if layout.is_info_row(row) {
            ctx.apply_info_row(grid, row, layout);
            continue;
        }

        let label = grid.raw(row, layout.day_col).trim();
        if !layout.weekdays.iter().any(|d| d == label) {
            continue;
        }
        let Some(day) = Day::from_weekday_label(label) else { continue };

        extract_day_row(grid, row, day, &ctx, layout, &mut sessions);
    }

    sessions
}

fn extract_day_row(
    grid: &Grid,
    row: usize,
    day: Day,
    ctx: &HeaderContext,
    layout: &LayoutConfig,
    out: &mut Vec<Session>,
) {
    for slot in &layout.period_slots {
        let col = slot.col;
        if col >= grid.col_count() {
            continue;
        }
        if grid.region_at(row, col).is_some() && !grid.is_region_anchor(row, col) {
            continue;
        }

        let text = grid.value_at(row, col);
        if is_blank_or_recess(text) {
            continue;
        }
        let Some(content) = split_cell(text) else { continue };
        let room = content.room.clone().unwrap_or_else(|| ctx.classroom.clone());

        let span = grid.region_span(row, col);
        for covered in col..col + span {
            // columnas cubiertas que no son bloque horario no emiten
            let Some((period, covered_slot)) = layout.slot_for_col(covered) else { continue };
            out.push(Session {
                semester: ctx.semester.clone(),
                section: ctx.section.clone(),
                classroom: ctx.classroom.clone(),
                room: room.clone(),
                day,
                time: covered_slot.time.clone(),
                period,
                subject: content.subject.clone(),
                faculty: content.faculty.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_full_cell() {
        let c = split_cell("DSA:Data Structures\n(JPR)\nLH-3").unwrap();
        assert_eq!(c.subject, "DSA");
        assert_eq!(c.faculty, "JPR");
        assert_eq!(c.room.as_deref(), Some("LH-3"));
    }

    #[test]
    fn split_without_colon_or_parens() {
        let c = split_cell("  Library \n\n Dr. Rao ").unwrap();
        assert_eq!(c.subject, "Library");
        assert_eq!(c.faculty, "Dr. Rao");
        assert_eq!(c.room, None);
    }

    #[test]
    fn split_only_first_line() {
        let c = split_cell("MINI PROJECT").unwrap();
        assert_eq!(c.subject, "MINI PROJECT");
        assert_eq!(c.faculty, "");
    }

    #[test]
    fn split_strips_a_single_paren_pair() {
        let c = split_cell("OS\n((AB))").unwrap();
        assert_eq!(c.faculty, "(AB)");
    }

    #[test]
    fn whitespace_only_cell_has_no_content() {
        assert!(split_cell(" \n \n").is_none());
    }

    #[test]
    fn recess_detection() {
        assert!(is_blank_or_recess("  recess "));
        assert!(is_blank_or_recess("RECESS"));
        assert!(is_blank_or_recess("   "));
        assert!(!is_blank_or_recess("RECESS HALL"));
    }
}
