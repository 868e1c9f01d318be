//! Documento HTML del horario por semestre; es la entrada del conversor a PDF.

use crate::export::organize::Organized;
use std::fmt::Write;

const STYLE: &str = r#"
        body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; line-height: 1.6; margin: 0; padding: 20px; color: #333; }
        .container { max-width: 1000px; margin: 0 auto; }
        h1 { text-align: center; color: #2c3e50; margin-bottom: 30px; padding-bottom: 10px; border-bottom: 2px solid #3498db; }
        .day-section { margin-bottom: 40px; }
        .day-header { color: #3498db; margin-top: 25px; padding-bottom: 5px; border-bottom: 1px solid #ddd; }
        .semester-section { margin: 15px 0 25px 20px; padding: 10px; background-color: #f5f5f5; border-radius: 5px; }
        .semester-header { color: #2c3e50; font-weight: bold; margin-bottom: 10px; }
        .lecture-list { list-style-type: none; padding-left: 0; }
        .lecture-item { margin: 8px 0; padding: 8px 12px; background-color: white; border-radius: 4px; display: flex; flex-wrap: wrap; align-items: center; }
        .time { font-weight: bold; color: #7f8c8d; min-width: 120px; }
        .subject { font-weight: bold; color: #2c3e50; min-width: 150px; }
        .faculty { flex-grow: 1; }
        .room { color: #16a085; font-style: italic; min-width: 100px; text-align: right; }
        .section { background-color: #e3f2fd; padding: 2px 6px; border-radius: 3px; font-size: 0.9em; margin-left: 10px; }
        .abbrev-section { margin-top: 50px; page-break-before: always; padding-top: 20px; }
        .abbrev-list { column-count: 2; column-gap: 30px; }
        .abbrev-item { break-inside: avoid; margin-bottom: 10px; padding: 5px; }
        .abbrev-item strong { color: #3498db; }
        @media print { body { padding: 0; font-size: 11pt; } .container { max-width: 100%; } .semester-section { page-break-inside: avoid; } }
"#;

/// Escapa los caracteres especiales de HTML.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn render_html(data: &Organized) -> String {
    let mut html = String::new();
    // write! sobre String no falla
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html>\n<head>\n    <title>Semester-wise Timetable</title>\n    <meta charset=\"UTF-8\">\n    <style>{}    </style>\n</head>\n<body>\n<div class=\"container\">\n    <h1>Semester-wise Timetable</h1>\n",
        STYLE
    );

    for day in &data.days {
        let _ = writeln!(html, "    <div class=\"day-section\">\n        <h2 class=\"day-header\">{}</h2>", day.day);
        for group in &day.semesters {
            let _ = writeln!(
                html,
                "        <div class=\"semester-section\">\n            <div class=\"semester-header\">Semester {}</div>\n            <ul class=\"lecture-list\">",
                escape_html(&group.semester)
            );
            for l in &group.lectures {
                let section = if l.section.is_empty() {
                    String::new()
                } else {
                    format!("<span class=\"section\">Sec {}</span>", escape_html(&l.section))
                };
                let _ = writeln!(
                    html,
                    "                <li class=\"lecture-item\"><span class=\"time\">{}</span><span class=\"subject\">{}</span><span class=\"faculty\">{}</span><span class=\"room\">Room {}</span>{}</li>",
                    escape_html(&l.time),
                    escape_html(&l.subject),
                    escape_html(&l.faculty_full),
                    escape_html(&l.room),
                    section
                );
            }
            html.push_str("            </ul>\n        </div>\n");
        }
        html.push_str("    </div>\n");
    }

    html.push_str("    <div class=\"abbrev-section\">\n        <h2>Abbreviations and Faculty</h2>\n        <div class=\"abbrev-list\">\n");
    for (abbr, details) in &data.abbreviations {
        let _ = writeln!(
            html,
            "            <div class=\"abbrev-item\"><strong>{}:</strong> {} - {}</div>",
            escape_html(abbr),
            escape_html(&details.full_form),
            escape_html(&details.faculty)
        );
    }
    html.push_str("        </div>\n    </div>\n</div>\n</body>\n</html>\n");
    html
}
