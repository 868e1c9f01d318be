use classgrid::excel::Grid;
use classgrid::MergedRegion;

fn sample() -> Grid {
    // fila 1: "OS LAB" combinado en columnas 2..5, fila 2..4 col 0 combinado vertical
    let rows = vec![
        vec!["", "", "", "", "", ""],
        vec!["Monday", "", "OS LAB", "", "", "DBMS"],
        vec!["Tuesday", "", "", "", "", ""],
        vec!["", "", "", "", "", ""],
    ];
    Grid::from_rows(
        &rows,
        vec![MergedRegion::new(1, 2, 2, 5), MergedRegion::new(2, 4, 0, 1)],
    )
}

#[test]
fn merged_cells_resolve_to_anchor() {
    let grid = sample();
    for (r, c) in [(1, 2), (1, 3), (1, 4)] {
        assert_eq!(grid.value_at(r, c), grid.value_at(1, 2));
        assert_eq!(grid.value_at(r, c), "OS LAB");
    }
    assert_eq!(grid.value_at(3, 0), "Tuesday");
    // raw no resuelve la combinación
    assert_eq!(grid.raw(1, 3), "");
}

#[test]
fn every_cell_of_every_region_matches_its_anchor() {
    let grid = sample();
    for region in grid.regions() {
        let (ar, ac) = region.anchor();
        for r in region.row_start..region.row_end {
            for c in region.col_start..region.col_end {
                assert_eq!(grid.value_at(r, c), grid.value_at(ar, ac));
            }
        }
    }
}

#[test]
fn anchor_and_span() {
    let grid = sample();
    assert!(grid.is_region_anchor(1, 2));
    assert!(!grid.is_region_anchor(1, 3));
    // celda sin combinar no es ancla de ninguna región
    assert!(!grid.is_region_anchor(1, 5));
    assert_eq!(grid.region_span(1, 2), 3);
    assert_eq!(grid.region_span(1, 3), 1);
    assert_eq!(grid.region_span(1, 5), 1);
    assert_eq!(grid.region_span(2, 0), 1);
}

#[test]
fn counts() {
    let grid = sample();
    assert_eq!(grid.row_count(), 4);
    assert_eq!(grid.col_count(), 6);
    assert_eq!(grid.row_values(1), vec!["Monday", "", "OS LAB", "OS LAB", "OS LAB", "DBMS"]);
}
