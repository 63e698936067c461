//! Closed-form reference solution (validation only)
//!
//! For the default boundary (three cold edges and a heated top edge
//! u(x, Ly) = 100·sin(π·x/Lx)), separation of variables gives the exact
//! solution of Laplace's equation on the rectangle:
//!
//! ```text
//! u(x, y) = 100 · sin(π·x/Lx) · sinh(π·y/Lx) / sinh(π·Ly/Lx)
//! ```
//!
//! [`analytical_solution`] evaluates that closed form on the system's
//! grid so tests and demos can measure the discretization error of the
//! relaxed field. It is a pure comparison utility: it never mutates
//! solver state, and it refuses to answer (returns `None`) when the
//! system's boundary does not match the profile the formula was derived
//! for; a misleading reference is worse than none.

use std::f64::consts::PI;

use crate::grid::Field;
use crate::solver::{default_top_value, LaplaceSystem};

/// Tolerance for deciding whether the stored top edge still matches the
/// default sine profile. Scaled by the node magnitude so the check is not
/// fooled by the profile's own rounding.
const PROFILE_MATCH_TOLERANCE: f64 = 1e-10;

/// Evaluate the closed-form solution for the default boundary on the
/// system's grid.
///
/// Returns `None` when the system's current top edge does not carry the
/// default profile (e.g. after a custom boundary was applied, or before
/// any boundary was applied at all).
///
/// # Example
///
/// ```rust
/// use laplace_rs::analytic::analytical_solution;
/// use laplace_rs::solver::{BoundarySource, LaplaceSystem};
///
/// # fn main() -> Result<(), laplace_rs::SolverError> {
/// let mut system = LaplaceSystem::create(1.0, 1.0, 21, 21)?;
///
/// // No boundary yet: the reference refuses to answer.
/// assert!(analytical_solution(&system).is_none());
///
/// system.apply_boundary(&BoundarySource::DefaultDirichlet)?;
/// let reference = analytical_solution(&system).unwrap();
/// assert_eq!(reference.nrows(), 21);
/// # Ok(())
/// # }
/// ```
pub fn analytical_solution(system: &LaplaceSystem) -> Option<Field> {
    let grid = system.grid();
    let field = system.field();
    let nx = grid.nx();
    let ny = grid.ny();

    // The closed form only describes the default boundary. Interior top
    // nodes must match the sine profile; the corners are excluded because
    // the edge-assignment order leaves them at exactly 0.
    for i in 1..nx - 1 {
        let expected = default_top_value(grid.x_coord(i), grid.lx());
        let stored = field.value(ny - 1, i);
        if (stored - expected).abs() > PROFILE_MATCH_TOLERANCE * expected.abs().max(1.0) {
            return None;
        }
    }

    let denominator = (PI * grid.ly() / grid.lx()).sinh();

    let mut reference = Field::zeros(grid);
    for j in 0..ny {
        let y = grid.y_coord(j);
        let growth = (PI * y / grid.lx()).sinh() / denominator;
        for i in 0..nx {
            let value = default_top_value(grid.x_coord(i), grid.lx()) * growth;
            reference.set(j, i, value);
        }
    }

    Some(reference)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::BoundarySource;

    fn default_system(n: usize) -> LaplaceSystem {
        let mut system = LaplaceSystem::create(1.0, 1.0, n, n).unwrap();
        system
            .apply_boundary(&BoundarySource::DefaultDirichlet)
            .unwrap();
        system
    }

    #[test]
    fn test_available_after_default_boundary() {
        let system = default_system(21);
        assert!(analytical_solution(&system).is_some());
    }

    #[test]
    fn test_unavailable_before_any_boundary() {
        let system = LaplaceSystem::create(1.0, 1.0, 21, 21).unwrap();
        assert!(analytical_solution(&system).is_none());
    }

    #[test]
    fn test_unavailable_after_custom_boundary() {
        let mut system = LaplaceSystem::create(1.0, 1.0, 21, 21).unwrap();
        system
            .apply_boundary(&BoundarySource::custom(|x, y| x + y))
            .unwrap();

        assert!(analytical_solution(&system).is_none());
    }

    #[test]
    fn test_reference_matches_the_boundary_profile() {
        let system = default_system(21);
        let reference = analytical_solution(&system).unwrap();
        let grid = system.grid();
        let top = grid.ny() - 1;

        // At y = Ly the sinh ratio is exactly 1, so the top row is the
        // boundary profile itself.
        for i in 1..grid.nx() - 1 {
            let expected = 100.0 * (PI * grid.x_coord(i)).sin();
            assert!((reference.value(top, i) - expected).abs() < 1e-10);
        }

        // At y = 0 the sinh ratio vanishes.
        for i in 0..grid.nx() {
            assert_eq!(reference.value(0, i), 0.0);
        }
    }

    #[test]
    fn test_reference_sides_are_numerically_cold() {
        let system = default_system(21);
        let reference = analytical_solution(&system).unwrap();
        let grid = system.grid();

        // sin(0) is exactly 0; sin(π) only approximately, so the right
        // side is tiny rather than zero.
        for j in 0..grid.ny() {
            assert_eq!(reference.value(j, 0), 0.0);
            assert!(reference.value(j, grid.nx() - 1).abs() < 1e-11);
        }
    }

    #[test]
    fn test_reference_does_not_mutate_the_system() {
        let system = default_system(13);
        let before = system.field().clone();

        let _ = analytical_solution(&system);

        assert_eq!(system.field(), &before);
    }

    #[test]
    fn test_rectangular_domains_use_the_aspect_ratio() {
        // On Lx = 1, Ly = 2 the mid-height ratio is sinh(π)/sinh(2π).
        let mut system = LaplaceSystem::create(1.0, 2.0, 11, 11).unwrap();
        system
            .apply_boundary(&BoundarySource::DefaultDirichlet)
            .unwrap();

        let reference = analytical_solution(&system).unwrap();
        let grid = system.grid();

        let expected = 100.0 * (PI * grid.x_coord(5)).sin() * (PI * 1.0).sinh() / (2.0 * PI).sinh();
        assert!((reference.value(5, 5) - expected).abs() < 1e-10);
    }
}
