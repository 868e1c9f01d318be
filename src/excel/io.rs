use crate::error::ExtractError;
use crate::excel::grid::Grid;
use crate::models::MergedRegion;
use calamine::{open_workbook_auto, Data, Dimensions, Range, Reader, Sheets};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, warn};

/// Texto visible de una celda de calamine.
/// Semestres y códigos suelen venir como número: `3.0` se muestra como "3".
pub fn cell_to_string(c: &Data) -> String {
    match c {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => (*f as i64).to_string(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}

/// Convierte las dimensiones de calamine (extremos inclusivos) a `MergedRegion`.
pub fn dimensions_to_region(d: &Dimensions) -> MergedRegion {
    MergedRegion::new(
        d.start.0 as usize,
        d.end.0 as usize + 1,
        d.start.1 as usize,
        d.end.1 as usize + 1,
    )
}

/// Pasa un `Range` a una grilla densa en coordenadas absolutas de la hoja.
/// calamine recorta el rango a la primera celda con datos, por eso se reubica con `start()`.
pub fn range_to_grid(range: &Range<Data>, regions: Vec<MergedRegion>) -> Grid {
    let (start_row, start_col) = match range.start() {
        Some((r, c)) => (r as usize, c as usize),
        None => return Grid::new(Vec::new(), regions),
    };
    let (end_row, end_col) = range
        .end()
        .map(|(r, c)| (r as usize, c as usize))
        .unwrap_or((start_row, start_col));

    let mut cells = vec![vec![String::new(); end_col + 1]; end_row + 1];
    for (r, c, data) in range.cells() {
        cells[start_row + r][start_col + c] = cell_to_string(data);
    }
    Grid::new(cells, regions)
}

fn merged_regions_for(workbook: &Sheets<BufReader<File>>, sheet: &str) -> Vec<MergedRegion> {
    match workbook {
        Sheets::Xls(xls) => xls
            .worksheet_merge_cells(sheet)
            .unwrap_or_default()
            .iter()
            .map(dimensions_to_region)
            .collect(),
        Sheets::Xlsx(xlsx) => xlsx
            .merged_regions_by_sheet(sheet)
            .into_iter()
            .map(|(_, _, d)| dimensions_to_region(d))
            .collect(),
        // xlsb/ods: calamine no expone combinaciones; se leen como celdas sueltas
        _ => Vec::new(),
    }
}

/// Abre un workbook y devuelve cada hoja como `(nombre, Grid)` en el orden declarado.
pub fn load_workbook<P: AsRef<Path>>(path: P) -> Result<Vec<(String, Grid)>, ExtractError> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path).map_err(|source| ExtractError::WorkbookOpen {
        path: path.to_path_buf(),
        source,
    })?;

    if let Sheets::Xlsx(xlsx) = &mut workbook {
        if let Err(e) = xlsx.load_merged_regions() {
            warn!(path = %path.display(), error = %e, "no se pudieron leer las celdas combinadas");
        }
    }

    let names = workbook.sheet_names().to_owned();
    let mut sheets = Vec::with_capacity(names.len());
    for name in names {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| ExtractError::SheetExtraction { sheet: name.clone(), message: e.to_string() })?;
        let regions = merged_regions_for(&workbook, &name);
        let grid = range_to_grid(&range, regions);
        debug!(
            sheet = %name,
            rows = grid.row_count(),
            cols = grid.col_count(),
            merged = grid.regions().len(),
            "hoja cargada"
        );
        sheets.push((name, grid));
    }
    Ok(sheets)
}

/// Lista las hojas de un workbook en el orden que reporta calamine.
pub fn list_sheets<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ExtractError> {
    let path = path.as_ref();
    let workbook = open_workbook_auto(path).map_err(|source| ExtractError::WorkbookOpen {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(workbook.sheet_names().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_floats_have_no_decimals() {
        assert_eq!(cell_to_string(&Data::Float(3.0)), "3");
        assert_eq!(cell_to_string(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_to_string(&Data::String("  DSA \n".into())), "DSA");
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(cell_to_string(&Data::Int(5)), "5");
        assert_eq!(cell_to_string(&Data::Float(-4.0)), "-4");
    }

    #[test]
    fn inclusive_dimensions_become_exclusive_region() {
        let d = Dimensions { start: (4, 2), end: (4, 3) };
        assert_eq!(dimensions_to_region(&d), MergedRegion::new(4, 5, 2, 4));
    }

    #[test]
    fn range_is_placed_at_absolute_coordinates() {
        let mut range: Range<Data> = Range::new((1, 2), (2, 3));
        range.set_value((1, 2), Data::String("Monday".into()));
        range.set_value((2, 3), Data::Float(7.0));
        let grid = range_to_grid(&range, Vec::new());
        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.col_count(), 4);
        assert_eq!(grid.raw(1, 2), "Monday");
        assert_eq!(grid.raw(2, 3), "7");
        assert_eq!(grid.raw(0, 0), "");
    }
}
