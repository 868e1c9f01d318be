//! Acceso a una hoja con celdas combinadas.
//!
//! `Grid` es una proyección de sólo lectura: cualquier celda dentro de una
//! región combinada devuelve el valor de la celda ancla (superior izquierda).

use crate::models::MergedRegion;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct Grid {
    cells: Vec<Vec<String>>,
    row_count: usize,
    col_count: usize,
    regions: Vec<MergedRegion>,
    // (fila, columna) -> índice en `regions`; la primera región gana
    region_index: HashMap<(usize, usize), usize>,
}

impl Grid {
    /// Construye la grilla a partir de filas ya convertidas a texto.
    /// Las filas pueden tener largos distintos; `col_count` es el máximo.
    pub fn new(cells: Vec<Vec<String>>, regions: Vec<MergedRegion>) -> Self {
        let row_count = cells.len();
        let col_count = cells.iter().map(|r| r.len()).max().unwrap_or(0);

        let mut region_index = HashMap::new();
        for (idx, region) in regions.iter().enumerate() {
            for r in region.row_start..region.row_end {
                for c in region.col_start..region.col_end {
                    region_index.entry((r, c)).or_insert(idx);
                }
            }
        }

        Grid { cells, row_count, col_count, regions, region_index }
    }

    /// Atajo para tests y llamadores en memoria.
    pub fn from_rows<S: AsRef<str>>(rows: &[Vec<S>], regions: Vec<MergedRegion>) -> Self {
        let cells = rows
            .iter()
            .map(|r| r.iter().map(|c| c.as_ref().to_string()).collect())
            .collect();
        Grid::new(cells, regions)
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn col_count(&self) -> usize {
        self.col_count
    }

    pub fn regions(&self) -> &[MergedRegion] {
        &self.regions
    }

    /// Contenido literal de la celda, sin resolver combinaciones.
    pub fn raw(&self, row: usize, col: usize) -> &str {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    pub fn region_at(&self, row: usize, col: usize) -> Option<&MergedRegion> {
        self.region_index.get(&(row, col)).map(|&i| &self.regions[i])
    }

    /// Valor visible de la celda: el del ancla si está combinada.
    pub fn value_at(&self, row: usize, col: usize) -> &str {
        match self.region_at(row, col) {
            Some(region) => {
                let (ar, ac) = region.anchor();
                self.raw(ar, ac)
            }
            None => self.raw(row, col),
        }
    }

    pub fn is_region_anchor(&self, row: usize, col: usize) -> bool {
        self.region_at(row, col)
            .map(|region| region.anchor() == (row, col))
            .unwrap_or(false)
    }

    /// Ancho en columnas de la región anclada en (row, col); 1 si no hay.
    pub fn region_span(&self, row: usize, col: usize) -> usize {
        match self.region_at(row, col) {
            Some(region) if region.anchor() == (row, col) => region.width().max(1),
            _ => 1,
        }
    }

    /// Fila completa resuelta contra las combinaciones.
    pub fn row_values(&self, row: usize) -> Vec<&str> {
        (0..self.col_count).map(|c| self.value_at(row, c)).collect()
    }
}
