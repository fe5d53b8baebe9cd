// src/geometry/isotype.rs
use serde::Serialize;

use super::{Point, format_value};
use crate::config::consts::{ISOTYPE_COLUMNS, ISOTYPE_ROWS};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IsotypeConfig {
    pub rows: usize,
    pub columns: usize,
    /// Distance between neighbouring cell centres.
    pub cell_size: f64,
}

impl Default for IsotypeConfig {
    fn default() -> Self {
        Self { rows: ISOTYPE_ROWS, columns: ISOTYPE_COLUMNS, cell_size: 32.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct IsotypeCell {
    pub index: usize,
    pub row: usize,
    pub column: usize,
    pub center: Point,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IsotypeGeometry {
    pub percentage: f64,
    pub total: usize,
    pub active: usize,
    pub cells: Vec<IsotypeCell>,
    pub caption: String,
}

/// Number of highlighted icons for `percentage` of `total`.
pub fn active_count(total: usize, percentage: f64) -> usize {
    if !percentage.is_finite() {
        return 0;
    }
    let n = (total as f64 * percentage / 100.0).round();
    n.clamp(0.0, total as f64) as usize
}

/// Row-major grid; the first `active` cells are highlighted.
pub fn isotype(percentage: f64, cfg: &IsotypeConfig) -> IsotypeGeometry {
    let total = cfg.rows * cfg.columns;
    let active = active_count(total, percentage);
    let half = cfg.cell_size / 2.0;

    let cells = (0..total)
        .map(|index| {
            let row = index / cfg.columns.max(1);
            let column = index % cfg.columns.max(1);
            IsotypeCell {
                index,
                row,
                column,
                center: Point::new(column as f64 * cfg.cell_size + half, row as f64 * cfg.cell_size + half),
                active: index < active,
            }
        })
        .collect();

    IsotypeGeometry {
        percentage,
        total,
        active,
        cells,
        caption: format!("{}%", format_value(percentage)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_of_fifty() {
        let g = isotype(50.0, &IsotypeConfig::default());
        assert_eq!(g.total, 50);
        assert_eq!(g.active, 25);
        assert!(g.cells[24].active && !g.cells[25].active);
        assert_eq!((g.cells[12].row, g.cells[12].column), (1, 2));
    }

    #[test]
    fn rounding_and_clamping() {
        assert_eq!(active_count(50, 33.0), 17);
        assert_eq!(active_count(50, 150.0), 50);
        assert_eq!(active_count(50, -10.0), 0);
        assert_eq!(active_count(50, f64::NAN), 0);
    }
}
