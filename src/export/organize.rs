//! Une sesiones con el roster y agrupa por día -> semestre.

use crate::models::{Day, RosterEntry, Session};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Semestre usado cuando la sesión no trae uno.
pub const OTHER_SEMESTER: &str = "Other";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lecture {
    pub time: String,
    pub period: usize,
    pub subject: String,
    pub subject_full: String,
    pub faculty: String,
    pub faculty_full: String,
    pub room: String,
    pub section: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Abbreviation {
    pub full_form: String,
    pub faculty: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SemesterGroup {
    pub semester: String,
    pub lectures: Vec<Lecture>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayGroup {
    pub day: Day,
    pub semesters: Vec<SemesterGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Organized {
    pub days: Vec<DayGroup>,
    pub abbreviations: BTreeMap<String, Abbreviation>,
}

// Datos del roster que usa la exportación; el fallback sale de la propia sesión.
struct SubjectInfo<'a> {
    course_code: &'a str,
    faculty_name: &'a str,
    faculty_abbreviation: &'a str,
}

/// Agrupa las sesiones para las exportaciones.
///
/// - join `subject == subject_abbreviation`, gana la primera entrada del roster;
///   sin coincidencia se usan los campos crudos de la sesión
/// - días en orden lunes..sábado
/// - semestres según `semester_order`, luego el resto en orden léxico
/// - clases ordenadas por bloque (orden estable)
pub fn organize(sessions: &[Session], roster: &[RosterEntry], semester_order: &[String]) -> Organized {
    let mut by_abbr: HashMap<&str, &RosterEntry> = HashMap::new();
    for entry in roster {
        by_abbr.entry(entry.subject_abbreviation.as_str()).or_insert(entry);
    }

    let mut grouped: BTreeMap<Day, HashMap<String, Vec<Lecture>>> = BTreeMap::new();
    let mut abbreviations: BTreeMap<String, Abbreviation> = BTreeMap::new();

    for s in sessions {
        let info = match by_abbr.get(s.subject.as_str()) {
            Some(e) => SubjectInfo {
                course_code: &e.course_code,
                faculty_name: &e.faculty_name,
                faculty_abbreviation: &e.faculty_abbreviation,
            },
            None => SubjectInfo {
                course_code: &s.subject,
                faculty_name: &s.faculty,
                faculty_abbreviation: &s.faculty,
            },
        };

        let semester = if s.semester.is_empty() { OTHER_SEMESTER.to_string() } else { s.semester.clone() };
        grouped.entry(s.day).or_default().entry(semester).or_default().push(Lecture {
            time: s.time.clone(),
            period: s.period,
            subject: s.subject.clone(),
            subject_full: info.course_code.to_string(),
            faculty: info.faculty_abbreviation.to_string(),
            faculty_full: info.faculty_name.to_string(),
            room: s.room.clone(),
            section: s.section.clone(),
        });

        abbreviations.entry(s.subject.clone()).or_insert_with(|| {
            let faculty = if info.faculty_name.is_empty() {
                info.faculty_abbreviation.to_string()
            } else {
                format!("{} ({})", info.faculty_name, info.faculty_abbreviation)
            };
            Abbreviation { full_form: info.course_code.to_string(), faculty }
        });
    }

    let days = grouped
        .into_iter()
        .map(|(day, mut semesters)| {
            let mut ordered = Vec::new();
            for name in semester_order {
                if let Some(lectures) = semesters.remove(name) {
                    ordered.push(SemesterGroup { semester: name.clone(), lectures });
                }
            }
            let mut rest: Vec<(String, Vec<Lecture>)> = semesters.into_iter().collect();
            rest.sort_by(|a, b| a.0.cmp(&b.0));
            ordered.extend(rest.into_iter().map(|(semester, lectures)| SemesterGroup { semester, lectures }));

            for group in ordered.iter_mut() {
                group.lectures.sort_by_key(|l| l.period);
            }
            DayGroup { day, semesters: ordered }
        })
        .collect();

    Organized { days, abbreviations }
}
