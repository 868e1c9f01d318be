use classgrid::algorithm::extract_roster;
use classgrid::excel::Grid;
use classgrid::{LayoutConfig, SubjectType};

fn grid(rows: &[&[&str]]) -> Grid {
    let rows: Vec<Vec<&str>> = rows.iter().map(|r| r.to_vec()).collect();
    Grid::from_rows(&rows, Vec::new())
}

#[test]
fn markers_switch_subject_type() {
    let g = grid(&[
        &["THEORY SUBJECT", "", "", "", "", ""],
        &["Course code:", "Subject", "", "Abbr", "Faculty", "Abbr"],
        &["CS301", "Data Structures", "", "DSA", "Dr. Rao", "JPR"],
        &["", "", "", "", "", ""],
        &["PRACTICAL", "", "", "", "", ""],
        &["CS351", "DS Lab", "", "DSL", "Dr. Rao", "JPR"],
    ]);
    let roster = extract_roster(&g, &LayoutConfig::default());

    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].subject_type, SubjectType::Theory);
    assert_eq!(roster[0].course_code, "CS301: Data Structures");
    assert_eq!(roster[1].subject_type, SubjectType::Practical);
    assert_eq!(roster[1].subject_abbreviation, "DSL");
}

#[test]
fn rows_before_any_marker_are_ignored() {
    let g = grid(&[
        &["Monday", "", "DSA", "OS", "", ""],
        &["CS999", "Stray", "", "STR", "Nobody", "NB"],
        &["THEORY SUBJECT", "", "", "", "", ""],
        &["CS301", "", "", "DSA", "Dr. Rao", "JPR"],
    ]);
    let roster = extract_roster(&g, &LayoutConfig::default());
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].course_code, "CS301");
}

#[test]
fn practical_row_lists_staff() {
    let g = grid(&[
        &["PRACTICAL", "", "", "", "", "", "", "", ""],
        &["CS352", "OS Lab", "", "OSL", "Dr. Mehta", "AM", "Ravi", "Sita", "Kiran"],
        &["CS353", "CN Lab", "", "CNL", "Dr. Shah", "KS", "Asha", "", "Ignored"],
        &["CS354", "AI Lab", "", "AIL", "Dr. Iyer", "PI", "", "", ""],
    ]);
    let roster = extract_roster(&g, &LayoutConfig::default());

    assert_eq!(roster.len(), 3);
    assert_eq!(roster[0].faculty_name, "Dr. Mehta (Ravi, Sita, Kiran)");
    // el tramo de personal se corta en el primer hueco
    assert_eq!(roster[1].faculty_name, "Dr. Shah (Asha)");
    assert_eq!(roster[2].faculty_name, "Dr. Iyer");
    assert_eq!(roster[0].faculty_abbreviation, "AM");
}

#[test]
fn rows_missing_code_or_abbreviation_are_skipped() {
    let g = grid(&[
        &["THEORY SUBJECT", "", "", "", "", ""],
        &["", "Orphan name", "", "ORP", "X", "X"],
        &["CS310", "No abbreviation", "", "", "Y", "Y"],
        &["CS311", "Compilers", "", "CD", "Dr. Nair", "RN"],
    ]);
    let roster = extract_roster(&g, &LayoutConfig::default());
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].subject_abbreviation, "CD");
}

#[test]
fn merged_cells_are_resolved_in_roster_rows() {
    use classgrid::MergedRegion;
    let rows: Vec<Vec<&str>> = vec![
        vec!["THEORY SUBJECT", "", "", "", "", ""],
        vec!["CS320", "Theory of Computation", "", "TOC", "Dr. Pillai", "SP"],
    ];
    // nombre combinado en columnas 1..3
    let g = Grid::from_rows(&rows, vec![MergedRegion::new(1, 2, 1, 3)]);
    let roster = extract_roster(&g, &LayoutConfig::default());
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].course_code, "CS320: Theory of Computation");
}
