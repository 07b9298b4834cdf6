//! Offset-coordinate hex grid bookkeeping.

use wordhex_core::{CellCoord, HexDirection};

/// Dimensions of a row-major hex grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HexGrid {
    columns: u32,
    rows: u32,
}

impl HexGrid {
    /// Creates a grid description with the provided dimensions.
    #[must_use]
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Reports whether the grid has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reports whether the coordinate lies inside the grid.
    #[must_use]
    pub const fn contains(&self, cell: CellCoord) -> bool {
        cell.column() < self.columns && cell.row() < self.rows
    }

    /// Row-major index of the cell, if it lies inside the grid.
    #[must_use]
    pub fn index(&self, cell: CellCoord) -> Option<usize> {
        if self.contains(cell) {
            Some(cell.column() as usize + self.columns as usize * cell.row() as usize)
        } else {
            None
        }
    }

    /// Iterates every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = CellCoord> {
        let columns = self.columns;
        (0..self.rows).flat_map(move |row| (0..columns).map(move |column| CellCoord::new(column, row)))
    }

    /// Iterates the in-bounds neighbours of `cell` in direction order.
    pub fn neighbors(&self, cell: CellCoord) -> impl Iterator<Item = (HexDirection, CellCoord)> {
        let grid = *self;
        HexDirection::ALL.into_iter().filter_map(move |direction| {
            cell.neighbor(direction)
                .filter(|neighbor| grid.contains(*neighbor))
                .map(|neighbor| (direction, neighbor))
        })
    }

    /// Number of steps from the cell to the nearest grid edge.
    #[must_use]
    pub fn edge_distance(&self, cell: CellCoord) -> u32 {
        let right = self.columns.saturating_sub(1).saturating_sub(cell.column());
        let bottom = self.rows.saturating_sub(1).saturating_sub(cell.row());
        cell.column().min(cell.row()).min(right).min(bottom)
    }

    /// Reports whether the cell sits on the outermost ring.
    #[must_use]
    pub fn is_border(&self, cell: CellCoord) -> bool {
        self.contains(cell) && self.edge_distance(cell) == 0
    }

    /// Iterates the outer ring: top and bottom rows column by column, then the
    /// left and right columns row by row. Corners appear more than once.
    pub fn border(&self) -> impl Iterator<Item = CellCoord> {
        let last_column = self.columns.saturating_sub(1);
        let last_row = self.rows.saturating_sub(1);
        let horizontal = (0..self.columns)
            .flat_map(move |column| [CellCoord::new(column, 0), CellCoord::new(column, last_row)]);
        let vertical = (0..self.rows)
            .flat_map(move |row| [CellCoord::new(0, row), CellCoord::new(last_column, row)]);
        horizontal.chain(vertical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_row_major() {
        let grid = HexGrid::new(4, 3);
        assert_eq!(grid.index(CellCoord::new(0, 0)), Some(0));
        assert_eq!(grid.index(CellCoord::new(3, 0)), Some(3));
        assert_eq!(grid.index(CellCoord::new(1, 2)), Some(9));
        assert_eq!(grid.index(CellCoord::new(4, 0)), None);
        assert_eq!(grid.index(CellCoord::new(0, 3)), None);
        let order: Vec<_> = grid.coords().filter_map(|cell| grid.index(cell)).collect();
        assert_eq!(order, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn corner_has_two_neighbors() {
        let grid = HexGrid::new(5, 5);
        let neighbors: Vec<_> = grid.neighbors(CellCoord::new(0, 0)).collect();
        assert_eq!(
            neighbors,
            vec![
                (HexDirection::East, CellCoord::new(1, 0)),
                (HexDirection::SouthEast, CellCoord::new(0, 1)),
            ]
        );
    }

    #[test]
    fn interior_cell_has_six_neighbors() {
        let grid = HexGrid::new(5, 5);
        assert_eq!(grid.neighbors(CellCoord::new(2, 2)).count(), 6);
        assert_eq!(grid.neighbors(CellCoord::new(2, 1)).count(), 6);
    }

    #[test]
    fn edge_distance_counts_rings() {
        let grid = HexGrid::new(7, 6);
        assert_eq!(grid.edge_distance(CellCoord::new(0, 3)), 0);
        assert_eq!(grid.edge_distance(CellCoord::new(6, 3)), 0);
        assert_eq!(grid.edge_distance(CellCoord::new(3, 2)), 2);
        assert_eq!(grid.edge_distance(CellCoord::new(3, 3)), 2);
        assert_eq!(grid.edge_distance(CellCoord::new(5, 4)), 1);
    }

    #[test]
    fn border_walk_covers_the_outer_ring() {
        let grid = HexGrid::new(4, 3);
        let mut ring: Vec<_> = grid.border().collect();
        ring.sort();
        ring.dedup();
        assert_eq!(ring.len(), 10);
        assert!(ring.iter().all(|cell| grid.is_border(*cell)));
    }
}
