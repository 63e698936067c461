//! Helper functions for integration tests

use laplace_rs::grid::Field;
use laplace_rs::solver::{BoundarySource, LaplaceSystem};

/// Build the standard test problem: unit square, n×n nodes, default
/// Dirichlet boundary (heated top edge, cold sides).
pub fn default_problem(n: usize) -> LaplaceSystem {
    let mut system = LaplaceSystem::create(1.0, 1.0, n, n).unwrap();
    system
        .apply_boundary(&BoundarySource::DefaultDirichlet)
        .unwrap();
    system
}

/// Compute the node-averaged L2 error between two fields
pub fn l2_error(a: &Field, b: &Field) -> f64 {
    assert_eq!(a.nrows(), b.nrows(), "Dimension mismatch");
    assert_eq!(a.ncols(), b.ncols(), "Dimension mismatch");

    let mut sum_squared_diff = 0.0;
    for j in 0..a.nrows() {
        for i in 0..a.ncols() {
            sum_squared_diff += (a.value(j, i) - b.value(j, i)).powi(2);
        }
    }

    (sum_squared_diff / (a.nrows() * a.ncols()) as f64).sqrt()
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }
}
