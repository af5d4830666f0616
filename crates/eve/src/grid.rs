//! Dense storage for the bulk numeric data of a `.rho` file

/// Raw numeric grid, row-major by zone index
///
/// Values are exactly as written in the file, so composition columns are
/// still log10 mass fractions. Zone order is never changed.
///
/// ```rust
/// # use stools_eve::Grid;
/// let grid = Grid::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]], 2).unwrap();
/// assert_eq!(grid.column(1), vec![2.0, 4.0]);
/// assert_eq!(grid.row(1), &[3.0, 4.0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    n_rows: usize,
    n_columns: usize,
    values: Vec<f64>,
}

impl Grid {
    /// Collect rows into a grid with a fixed number of columns
    ///
    /// Returns the index of the first row with the wrong length on failure.
    pub fn from_rows(rows: Vec<Vec<f64>>, n_columns: usize) -> Result<Self, usize> {
        let mut values = Vec::with_capacity(rows.len() * n_columns);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_columns {
                return Err(i);
            }
            values.extend_from_slice(row);
        }

        Ok(Self {
            n_rows: rows.len(),
            n_columns,
            values,
        })
    }

    /// Number of rows, one per zone
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns, one per header label
    pub fn n_columns(&self) -> usize {
        self.n_columns
    }

    /// Shape as (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_columns)
    }

    /// All values for zone `index`
    ///
    /// Panics if `index` is out of bounds, like slice indexing.
    pub fn row(&self, index: usize) -> &[f64] {
        let start = index * self.n_columns;
        &self.values[start..start + self.n_columns]
    }

    /// Copy of the values in column `index` for every zone
    ///
    /// Panics if `index` is out of bounds, like slice indexing.
    pub fn column(&self, index: usize) -> Vec<f64> {
        assert!(index < self.n_columns, "column {index} out of bounds");
        self.values
            .iter()
            .skip(index)
            .step_by(self.n_columns)
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_rows_rejected() {
        let rows = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]];
        assert_eq!(Grid::from_rows(rows, 3), Err(1));
    }

    #[test]
    fn empty_grid_keeps_columns() {
        let grid = Grid::from_rows(Vec::new(), 7).unwrap();
        assert_eq!(grid.shape(), (0, 7));
        assert!(grid.column(6).is_empty());
    }

    #[test]
    fn columns_in_zone_order() {
        let rows = vec![vec![0.0, 10.0], vec![1.0, 11.0], vec![2.0, 12.0]];
        let grid = Grid::from_rows(rows, 2).unwrap();
        assert_eq!(grid.column(0), vec![0.0, 1.0, 2.0]);
        assert_eq!(grid.column(1), vec![10.0, 11.0, 12.0]);
    }

    #[test]
    #[should_panic]
    fn column_out_of_bounds() {
        let grid = Grid::from_rows(vec![vec![1.0]], 1).unwrap();
        grid.column(1);
    }
}
