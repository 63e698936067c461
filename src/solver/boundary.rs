//! Dirichlet boundary sources and the edge-assignment contract
//!
//! # Design Philosophy
//!
//! A boundary source is a *policy*, not stored state: it is evaluated once
//! per boundary node when applied and not retained afterwards. The field
//! keeps the resulting values; the relaxation sweeps never touch them
//! again.
//!
//! # Edge Order
//!
//! The four edges are written in a fixed, documented order:
//! **bottom, top, left, right**. Corner nodes sit on two edges and are
//! therefore written twice; they keep the value of the *last* edge pass
//! that reached them (left/right). The order is part of the contract so
//! two runs can never disagree about a corner.

use std::f64::consts::PI;
use std::fmt;

use crate::grid::{Field, Grid};
use crate::SolverError;

// =================================================================================================
// Default top-edge profile
// =================================================================================================

/// Peak value of the default top-edge profile.
const DEFAULT_TOP_AMPLITUDE: f64 = 100.0;

/// Default heated-top profile: 100·sin(π·x/Lx).
///
/// Shared with the analytical reference in [`crate::analytic`], which is
/// only valid for boundaries produced by this profile.
#[inline]
pub(crate) fn default_top_value(x: f64, lx: f64) -> f64 {
    DEFAULT_TOP_AMPLITUDE * (PI * x / lx).sin()
}

// =================================================================================================
// Boundary source
// =================================================================================================

/// Dirichlet boundary specification.
///
/// Either the built-in default policy or a caller-supplied coordinate
/// function evaluated at every boundary node.
///
/// # Examples
///
/// ```rust
/// use laplace_rs::solver::{BoundarySource, LaplaceSystem};
///
/// # fn main() -> Result<(), laplace_rs::SolverError> {
/// let mut system = LaplaceSystem::create(1.0, 1.0, 5, 5)?;
///
/// // Built-in policy: cold sides, heated top
/// system.apply_boundary(&BoundarySource::DefaultDirichlet)?;
///
/// // Custom policy: u = x + y on the whole boundary
/// system.apply_boundary(&BoundarySource::custom(|x, y| x + y))?;
/// # Ok(())
/// # }
/// ```
pub enum BoundarySource {
    /// Bottom, left and right edges at 0; top edge at 100·sin(π·x/Lx).
    DefaultDirichlet,

    /// Arbitrary coordinate function f(x, y), evaluated once per boundary
    /// node at that node's exact coordinate.
    Custom(Box<dyn Fn(f64, f64) -> f64 + Send + Sync>),
}

impl BoundarySource {
    /// Wrap a coordinate function as a boundary source.
    pub fn custom<F>(function: F) -> Self
    where
        F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    {
        Self::Custom(Box::new(function))
    }

    /// Overwrite the four edges of `field` in place.
    ///
    /// Edges are written in the order bottom, top, left, right; corners
    /// keep the value of the last pass (see module docs). Every evaluated
    /// value is checked before it is stored.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::BoundaryEvaluation`] when the source
    /// produces NaN or an infinite value; the node coordinate is named in
    /// the message. The field may be partially written when this happens.
    pub fn apply(&self, grid: &Grid, field: &mut Field) -> Result<(), SolverError> {
        let nx = grid.nx();
        let ny = grid.ny();

        match self {
            // The default policy is an edge rule, not a pointwise formula:
            // only the top pass carries the sine profile, and the later
            // left/right passes put the corners back to exactly 0.
            BoundarySource::DefaultDirichlet => {
                // Bottom edge (y = 0)
                for i in 0..nx {
                    field.set(0, i, 0.0);
                }
                // Top edge (y = Ly)
                for i in 0..nx {
                    field.set(ny - 1, i, default_top_value(grid.x_coord(i), grid.lx()));
                }
                // Left edge (x = 0)
                for j in 0..ny {
                    field.set(j, 0, 0.0);
                }
                // Right edge (x = Lx)
                for j in 0..ny {
                    field.set(j, nx - 1, 0.0);
                }
            }

            BoundarySource::Custom(function) => {
                // Bottom edge (y = 0)
                for i in 0..nx {
                    let x = grid.x_coord(i);
                    field.set(0, i, checked(function(x, 0.0), x, 0.0)?);
                }
                // Top edge (y = Ly)
                for i in 0..nx {
                    let x = grid.x_coord(i);
                    field.set(ny - 1, i, checked(function(x, grid.ly()), x, grid.ly())?);
                }
                // Left edge (x = 0)
                for j in 0..ny {
                    let y = grid.y_coord(j);
                    field.set(j, 0, checked(function(0.0, y), 0.0, y)?);
                }
                // Right edge (x = Lx)
                for j in 0..ny {
                    let y = grid.y_coord(j);
                    field.set(j, nx - 1, checked(function(grid.lx(), y), grid.lx(), y)?);
                }
            }
        }

        Ok(())
    }
}

/// Reject non-finite boundary values before they can enter the
/// relaxation loop.
fn checked(value: f64, x: f64, y: f64) -> Result<f64, SolverError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SolverError::BoundaryEvaluation(format!(
            "value at (x = {}, y = {}) is {}",
            x, y, value
        )))
    }
}

impl fmt::Display for BoundarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundarySource::DefaultDirichlet => write!(f, "DefaultDirichlet"),
            BoundarySource::Custom(_) => write!(f, "Custom"),
        }
    }
}

impl fmt::Debug for BoundarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundarySource::DefaultDirichlet => f.write_str("BoundarySource::DefaultDirichlet"),
            BoundarySource::Custom(_) => f.write_str("BoundarySource::Custom(..)"),
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn apply_to(grid: &Grid, source: &BoundarySource) -> Field {
        let mut field = Field::zeros(grid);
        source.apply(grid, &mut field).unwrap();
        field
    }

    // ====================================== Default policy ======================================

    #[test]
    fn test_default_bottom_left_right_are_zero() {
        let grid = Grid::create(2.0, 1.0, 9, 7).unwrap();
        let field = apply_to(&grid, &BoundarySource::DefaultDirichlet);

        for i in 0..grid.nx() {
            assert_eq!(field.value(0, i), 0.0);
        }
        for j in 0..grid.ny() {
            assert_eq!(field.value(j, 0), 0.0);
            assert_eq!(field.value(j, grid.nx() - 1), 0.0);
        }
    }

    #[test]
    fn test_default_top_carries_sine_profile() {
        let grid = Grid::create(2.0, 1.0, 9, 7).unwrap();
        let field = apply_to(&grid, &BoundarySource::DefaultDirichlet);
        let top = grid.ny() - 1;

        // Interior top nodes follow 100·sin(π·x/Lx)
        for i in 1..grid.nx() - 1 {
            let expected = 100.0 * (PI * grid.x_coord(i) / grid.lx()).sin();
            assert!((field.value(top, i) - expected).abs() < 1e-12);
        }

        // Midpoint of the top edge peaks at the amplitude
        assert!((field.value(top, 4) - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_corners_take_the_last_applied_edge() {
        // Left/right passes run after top, so the top corners hold exactly
        // 0.0 rather than 100·sin(0) / 100·sin(π) ≈ ±1e-14.
        let grid = Grid::create(1.0, 1.0, 5, 5).unwrap();
        let field = apply_to(&grid, &BoundarySource::DefaultDirichlet);
        let top = grid.ny() - 1;

        assert_eq!(field.value(top, 0), 0.0);
        assert_eq!(field.value(top, grid.nx() - 1), 0.0);
    }

    #[test]
    fn test_default_leaves_interior_untouched() {
        let grid = Grid::create(1.0, 1.0, 6, 6).unwrap();
        let field = apply_to(&grid, &BoundarySource::DefaultDirichlet);

        for j in 1..grid.ny() - 1 {
            for i in 1..grid.nx() - 1 {
                assert_eq!(field.value(j, i), 0.0);
            }
        }
    }

    // ====================================== Custom policy ======================================

    #[test]
    fn test_custom_evaluates_exact_node_coordinates() {
        let grid = Grid::create(2.0, 4.0, 5, 5).unwrap();
        let field = apply_to(&grid, &BoundarySource::custom(|x, y| x + 10.0 * y));

        // Bottom edge: y = 0
        assert!((field.value(0, 2) - grid.x_coord(2)).abs() < 1e-12);
        // Top edge: y = Ly
        let top = grid.ny() - 1;
        assert!((field.value(top, 2) - (grid.x_coord(2) + 40.0)).abs() < 1e-12);
        // Right edge: x = Lx
        assert!((field.value(2, 4) - (2.0 + 10.0 * grid.y_coord(2))).abs() < 1e-12);
    }

    #[test]
    fn test_custom_nan_is_rejected() {
        let grid = Grid::create(1.0, 1.0, 5, 5).unwrap();
        let mut field = Field::zeros(&grid);
        let source = BoundarySource::custom(|x, _| (x - 0.5).sqrt());

        let result = source.apply(&grid, &mut field);
        assert!(matches!(result, Err(SolverError::BoundaryEvaluation(_))));
    }

    #[test]
    fn test_custom_infinity_is_rejected() {
        let grid = Grid::create(1.0, 1.0, 5, 5).unwrap();
        let mut field = Field::zeros(&grid);
        let source = BoundarySource::custom(|x, y| 1.0 / (x * y));

        let result = source.apply(&grid, &mut field);
        assert!(matches!(result, Err(SolverError::BoundaryEvaluation(_))));
    }

    // ======================================== Display ========================================

    #[test]
    fn test_display_names_the_variant() {
        assert_eq!(format!("{}", BoundarySource::DefaultDirichlet), "DefaultDirichlet");
        assert_eq!(
            format!("{}", BoundarySource::custom(|_, _| 0.0)),
            "Custom"
        );
    }
}
