mod common;

use classgrid::excel::Grid;
use classgrid::{extract_sheets, extract_workbook, Day, ExtractError, LayoutConfig, MergedRegion, Session};
use std::io::Write;

fn timetable_sheet() -> Grid {
    let mut cells = vec![vec![String::new(); 10]; 2];
    cells[0][1] = "Semester :-3".into();
    cells[0][5] = "Section :-CS A CLASSROOM:101".into();
    cells[1][0] = "Monday".into();
    cells[1][2] = "DSA:Data Structures\n(JPR)".into();
    Grid::new(cells, Vec::new())
}

fn roster_sheet() -> Grid {
    let rows = vec![
        vec!["THEORY SUBJECT", "", "", "", "", ""],
        vec!["CS301", "Data Structures", "", "DSA", "Dr. J. P. Rao", "JPR"],
    ];
    Grid::from_rows(&rows, Vec::new())
}

fn layout() -> LayoutConfig {
    LayoutConfig { info_rows: vec![0], ..LayoutConfig::default() }
}

#[test]
fn two_sheet_workbook_end_to_end() {
    let sheets = vec![("TT".to_string(), timetable_sheet()), ("Faculty".to_string(), roster_sheet())];
    let extraction = extract_sheets(&sheets, &layout());

    assert_eq!(
        extraction.sessions,
        vec![Session {
            semester: "3".into(),
            section: "CSA".into(),
            classroom: "101".into(),
            room: "101".into(),
            day: Day::Monday,
            time: "09:00-10:00".into(),
            period: 0,
            subject: "DSA".into(),
            faculty: "JPR".into(),
        }]
    );
    assert_eq!(extraction.roster.len(), 1);
    assert_eq!(extraction.roster[0].course_code, "CS301: Data Structures");
}

#[test]
fn sessions_keep_sheet_order() {
    let mut second = vec![vec![String::new(); 10]; 2];
    second[0][1] = "Semester :-5".into();
    second[1][0] = "Tuesday".into();
    second[1][2] = "OS".into();
    let sheets = vec![
        ("A".to_string(), timetable_sheet()),
        ("B".to_string(), Grid::new(second, Vec::new())),
    ];
    let extraction = extract_sheets(&sheets, &layout());
    let subjects: Vec<&str> = extraction.sessions.iter().map(|s| s.subject.as_str()).collect();
    assert_eq!(subjects, vec!["DSA", "OS"]);
}

#[test]
fn extraction_is_idempotent() {
    let sheets = vec![("TT".to_string(), timetable_sheet()), ("Faculty".to_string(), roster_sheet())];
    let a = serde_json::to_string(&extract_sheets(&sheets, &layout())).unwrap();
    let b = serde_json::to_string(&extract_sheets(&sheets, &layout())).unwrap();
    assert_eq!(a, b);
}

#[test]
fn missing_file_fails_at_open_stage() {
    let err = extract_workbook("/definitely/not/here/timetable.xls", &LayoutConfig::default()).unwrap_err();
    assert!(matches!(err, ExtractError::WorkbookOpen { .. }));
    assert_eq!(err.stage(), "open");
}

#[test]
fn corrupt_workbook_fails_at_open_stage() {
    let mut file = tempfile::Builder::new().suffix(".xls").tempfile().unwrap();
    file.write_all(b"this is not a spreadsheet").unwrap();
    file.flush().unwrap();

    let err = extract_workbook(file.path(), &LayoutConfig::default()).unwrap_err();
    eprintln!("error esperado: {}", err);
    assert!(matches!(err, ExtractError::WorkbookOpen { .. }));
}

#[test]
fn xlsx_with_merged_lab_is_read_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("timetable.xlsx");
    common::write_sample_workbook(&path);

    let sheets = classgrid::excel::load_workbook(&path).unwrap();
    let names: Vec<&str> = sheets.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["Sheet1", "Faculty"]);

    // C6:E6 (1-based, inclusivo) -> filas 5..6, columnas 2..5
    let tt = &sheets[0].1;
    assert_eq!(tt.regions(), &[MergedRegion::new(5, 6, 2, 5)]);
    assert_eq!(tt.raw(4, 1), "Semester :-5");
    assert_eq!(tt.value_at(5, 4), "OS LAB\n(AB)\nLAB-1");

    let extraction = extract_workbook(&path, &LayoutConfig::default()).unwrap();
    assert_eq!(extraction.sessions, common::expected_sessions());
    assert_eq!(extraction.roster, common::expected_roster());
}
