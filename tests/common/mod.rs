// Workbook .xlsx de ejemplo, escrito con umya-spreadsheet y leído de vuelta con calamine.
#![allow(dead_code)]

use classgrid::{Day, RosterEntry, Session, SubjectType};
use std::path::Path;

/// Hoja "Sheet1": encabezado en la fila 5 (índice 4), lunes con un laboratorio
/// combinado en C6:E6 y una clase suelta en F6. Hoja "Faculty": roster.
pub fn write_sample_workbook(path: &Path) {
    let mut book = umya_spreadsheet::new_file();

    let tt = book.get_sheet_by_name_mut("Sheet1").unwrap();
    for (cell, value) in [
        ("B5", "Semester :-5"),
        ("F5", "Section :-B CLASSROOM:204"),
        ("A6", "Monday"),
        ("C6", "OS LAB\n(AB)\nLAB-1"),
        ("F6", "CN\n(KS)"),
        ("A7", "Tuesday"),
        ("C7", "RECESS"),
    ] {
        tt.get_cell_mut(cell).set_value(value);
    }
    tt.add_merge_cells("C6:E6");

    let faculty = book.new_sheet("Faculty").unwrap();
    for (cell, value) in [
        ("A1", "THEORY SUBJECT"),
        ("A2", "Course code:"),
        ("B2", "Subject name"),
        ("A3", "CS501"),
        ("B3", "Computer Networks"),
        ("D3", "CN"),
        ("E3", "Dr. Shah"),
        ("F3", "KS"),
        ("A5", "PRACTICAL"),
        ("A6", "CS551"),
        ("B6", "OS Lab"),
        ("D6", "OS LAB"),
        ("E6", "Dr. Mehta"),
        ("F6", "AB"),
        ("G6", "Ravi"),
    ] {
        faculty.get_cell_mut(cell).set_value(value);
    }

    umya_spreadsheet::writer::xlsx::write(&book, path).unwrap();
}

fn monday(period: usize, time: &str, subject: &str, faculty: &str, room: &str) -> Session {
    Session {
        semester: "5".into(),
        section: "B".into(),
        classroom: "204".into(),
        room: room.into(),
        day: Day::Monday,
        time: time.into(),
        period,
        subject: subject.into(),
        faculty: faculty.into(),
    }
}

pub fn expected_sessions() -> Vec<Session> {
    vec![
        monday(0, "09:00-10:00", "OS LAB", "AB", "LAB-1"),
        monday(1, "10:00-11:00", "OS LAB", "AB", "LAB-1"),
        monday(2, "11:00-12:00", "OS LAB", "AB", "LAB-1"),
        monday(3, "12:00-1:00", "CN", "KS", "204"),
    ]
}

pub fn expected_roster() -> Vec<RosterEntry> {
    vec![
        RosterEntry {
            course_code: "CS501: Computer Networks".into(),
            subject_abbreviation: "CN".into(),
            subject_type: SubjectType::Theory,
            faculty_name: "Dr. Shah".into(),
            faculty_abbreviation: "KS".into(),
        },
        RosterEntry {
            course_code: "CS551: OS Lab".into(),
            subject_abbreviation: "OS LAB".into(),
            subject_type: SubjectType::Practical,
            faculty_name: "Dr. Mehta (Ravi)".into(),
            faculty_abbreviation: "AB".into(),
        },
    ]
}
