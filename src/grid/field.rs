//! Node-value storage
//!
//! A [`Field`] holds one real value per grid node in a dense ny×nx matrix.
//! Rows follow y, columns follow x, matching the [`Grid`](crate::grid::Grid)
//! index convention. Only the boundary-assignment and relaxation code in
//! [`crate::solver`] can write into a field; everything outside the crate
//! reads it.

use std::fmt;

use nalgebra::DMatrix;

use crate::grid::Grid;

// =================================================================================================
// Field
// =================================================================================================

/// 2D array of node values with shape ny×nx (row = y index, column = x index).
///
/// # Mutation Contract
///
/// Once boundary values are applied, the four edge rows/columns are never
/// written again by the relaxation sweeps; only interior nodes change.
/// The write accessors are crate-private so external code cannot break
/// that invariant between sweeps.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    values: DMatrix<f64>,
}

impl Field {
    /// Create an all-zero field matching the grid's resolution.
    pub fn zeros(grid: &Grid) -> Self {
        Self {
            values: DMatrix::zeros(grid.ny(), grid.nx()),
        }
    }

    // ========================================== Queries ==========================================

    /// Number of rows (nodes along y)
    pub fn nrows(&self) -> usize {
        self.values.nrows()
    }

    /// Number of columns (nodes along x)
    pub fn ncols(&self) -> usize {
        self.values.ncols()
    }

    /// Value at row `j`, column `i`
    #[inline]
    pub fn value(&self, j: usize, i: usize) -> f64 {
        self.values[(j, i)]
    }

    /// Borrow the underlying matrix (read-only output surface)
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.values
    }

    /// True when every node holds a finite value
    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }

    /// Largest absolute node-wise difference to another field.
    ///
    /// # Panics
    ///
    /// Panics when the two fields have different shapes.
    pub fn max_abs_difference(&self, other: &Field) -> f64 {
        assert_eq!(
            (self.nrows(), self.ncols()),
            (other.nrows(), other.ncols()),
            "Field shapes must match"
        );

        self.values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }

    // ===================================== Write accessors ======================================

    /// Write value at row `j`, column `i`
    #[inline]
    pub(crate) fn set(&mut self, j: usize, i: usize, value: f64) {
        self.values[(j, i)] = value;
    }

    /// Mutable borrow of the underlying matrix for the relaxation sweeps
    pub(crate) fn as_matrix_mut(&mut self) -> &mut DMatrix<f64> {
        &mut self.values
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Field [{} × {}]", self.nrows(), self.ncols())
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn small_grid() -> Grid {
        Grid::create(1.0, 1.0, 4, 3).unwrap()
    }

    #[test]
    fn test_zeros_matches_grid_shape() {
        let field = Field::zeros(&small_grid());

        assert_eq!(field.nrows(), 3);
        assert_eq!(field.ncols(), 4);
        assert!(field.as_matrix().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_set_and_read_back() {
        let mut field = Field::zeros(&small_grid());

        field.set(1, 2, 42.0);
        assert_eq!(field.value(1, 2), 42.0);
        assert_eq!(field.value(2, 1), 0.0);
    }

    #[test]
    fn test_max_abs_difference() {
        let grid = small_grid();
        let mut a = Field::zeros(&grid);
        let mut b = Field::zeros(&grid);

        a.set(0, 0, 1.0);
        b.set(0, 0, 0.25);
        b.set(2, 3, -0.5);

        assert!((a.max_abs_difference(&b) - 0.75).abs() < 1e-15);
        assert_eq!(a.max_abs_difference(&a), 0.0);
    }

    #[test]
    #[should_panic(expected = "Field shapes must match")]
    fn test_mismatched_shapes_panic() {
        let a = Field::zeros(&small_grid());
        let b = Field::zeros(&Grid::create(1.0, 1.0, 5, 5).unwrap());
        a.max_abs_difference(&b);
    }

    #[test]
    fn test_finiteness_check() {
        let mut field = Field::zeros(&small_grid());
        assert!(field.is_finite());

        field.set(1, 1, f64::NAN);
        assert!(!field.is_finite());
    }

    #[test]
    fn test_display_reports_shape() {
        let field = Field::zeros(&small_grid());
        assert_eq!(format!("{}", field), "Field [3 × 4]");
    }
}
