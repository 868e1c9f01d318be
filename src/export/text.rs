//! Corpus de texto plano para el servicio de preguntas/respuestas.

use crate::export::organize::Organized;

pub const TEXT_TITLE: &str = "TIMETABLE STRUCTURED DATA";

/// Texto orientado a líneas: días, semestres, clases y abreviaturas.
pub fn render_structured_text(data: &Organized) -> String {
    let mut lines: Vec<String> = vec![format!("{}\n", TEXT_TITLE)];

    for day in &data.days {
        lines.push(format!("\n=== {} ===", day.day.as_str().to_uppercase()));
        for group in &day.semesters {
            lines.push(format!("\nSemester {}:", group.semester));
            for l in &group.lectures {
                let section = if l.section.is_empty() { String::new() } else { format!(" (Section {})", l.section) };
                lines.push(format!("{}: {} - {} - Room {}{}", l.time, l.subject, l.faculty_full, l.room, section));
            }
        }
    }

    lines.push("\n\nABBREVIATIONS:".to_string());
    for (abbr, details) in &data.abbreviations {
        lines.push(format!("{}: {} - {}", abbr, details.full_form, details.faculty));
    }

    lines.join("\n")
}
