//! Red-black (checkerboard) Gauss-Seidel relaxation
//!
//! # Mathematical Background
//!
//! Colour the interior nodes like a checkerboard: "red" where i + j is
//! even, "black" where it is odd. Every red node's four neighbours are
//! black and vice versa, so a pass over one colour has no in-pass data
//! dependencies: all of its updates read only the other colour.
//!
//! One sweep = red half-pass, then black half-pass. The black pass
//! already sees the fresh red values, so the scheme keeps the
//! Gauss-Seidel character (latest available neighbours) while making each
//! half-pass order-independent, and therefore parallelizable.
//!
//! # Relationship to the Natural Order
//!
//! Red-black relaxation converges to the **same discrete fixed point** as
//! the row-major sweep, with a comparable sweep count. Intermediate
//! residuals differ, because the update order differs; that is an
//! accepted property of the reordering, not a defect. Use
//! [`GaussSeidelSolver`](crate::solver::GaussSeidelSolver) when the exact
//! natural-order trajectory matters.
//!
//! # Parallel Dispatch
//!
//! With the `parallel` feature enabled, half-passes with at least
//! [`parallel_threshold()`](crate::solver::parallel_threshold) interior
//! nodes are evaluated through Rayon. Below the threshold (or without the
//! feature) the half-passes run sequentially with the same arithmetic and
//! the same result.

use nalgebra::DMatrix;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::solver::{
    ConvergenceRecord, LaplaceSystem, SolveReport, Solver, SolverConfiguration,
};
use crate::SolverError;

// =================================================================================================
// Red-Black Solver
// =================================================================================================

/// Two-colour reordering of Gauss-Seidel point relaxation.
///
/// # Algorithm
///
/// For each sweep:
///
/// 1. Update every red interior node (i + j even) from its four black
///    neighbours
/// 2. Update every black interior node (i + j odd) from its four now-fresh
///    red neighbours
/// 3. Report the largest absolute change across both half-passes
///
/// Boundary nodes are never written.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedBlackSolver;

impl RedBlackSolver {
    /// Create a new red-black solver
    pub fn new() -> Self {
        Self
    }

    /// Run one full sweep (red half-pass then black half-pass), in place.
    ///
    /// Returns the maximum absolute change |new − old| observed over all
    /// interior nodes.
    pub fn relax_once(&self, system: &mut LaplaceSystem) -> f64 {
        let (grid, field) = system.parts_mut();
        let nx = grid.nx();
        let ny = grid.ny();
        let interior = grid.interior_count();
        let u = field.as_matrix_mut();

        let red = half_pass(u, nx, ny, interior, 0);
        let black = half_pass(u, nx, ny, interior, 1);
        red.max(black)
    }
}

impl Solver for RedBlackSolver {
    fn solve(
        &self,
        system: &mut LaplaceSystem,
        config: &SolverConfiguration,
    ) -> Result<SolveReport, SolverError> {
        // ====== Step 1: Validation ======

        config.validate()?;
        system.validate()?;

        let grid_shape = format!("{}x{}", system.grid().nx(), system.grid().ny());

        // ====== Step 2: Relaxation loop ======

        let mut history = ConvergenceRecord::new();
        let mut iterations = 0;
        let mut converged = false;
        let mut final_residual = f64::INFINITY;

        for iteration in 0..config.max_iterations {
            let residual = self.relax_once(system);

            converged = residual < config.tolerance;
            if config.history.should_record(iteration, converged) {
                history.push(iteration, residual);
            }

            iterations = iteration + 1;
            final_residual = residual;

            if converged {
                break;
            }
        }

        // ====== Step 3: Build Report ======

        let mut report = SolveReport::new(iterations, converged, final_residual, history);

        report.add_metadata("solver", self.name());
        report.add_metadata("grid", &grid_shape);
        report.add_metadata("tolerance", &config.tolerance.to_string());
        report.add_metadata("max iterations", &config.max_iterations.to_string());
        report.add_metadata("final residual", &final_residual.to_string());

        Ok(report)
    }

    fn name(&self) -> &str {
        "Red-Black Gauss-Seidel"
    }
}

// =================================================================================================
// Half-pass kernels
// =================================================================================================

/// Update all interior nodes of one colour; returns the half-pass max
/// residual. `parity` is (i + j) % 2 for the colour being updated.
fn half_pass(u: &mut DMatrix<f64>, nx: usize, ny: usize, interior: usize, parity: usize) -> f64 {
    #[cfg(feature = "parallel")]
    if interior >= crate::solver::parallel_threshold() {
        return half_pass_parallel(u, nx, ny, parity);
    }

    #[cfg(not(feature = "parallel"))]
    let _ = interior;

    half_pass_serial(u, nx, ny, parity)
}

fn half_pass_serial(u: &mut DMatrix<f64>, nx: usize, ny: usize, parity: usize) -> f64 {
    let mut max_residual = 0.0_f64;

    for j in 1..ny - 1 {
        for i in 1..nx - 1 {
            if (i + j) % 2 != parity {
                continue;
            }
            let old = u[(j, i)];
            let updated =
                0.25 * (u[(j, i + 1)] + u[(j, i - 1)] + u[(j + 1, i)] + u[(j - 1, i)]);
            u[(j, i)] = updated;
            max_residual = max_residual.max((updated - old).abs());
        }
    }

    max_residual
}

/// Rayon version of the half-pass.
///
/// Nodes of one colour read only the other colour, so the whole half-pass
/// can be computed from the field as-is and written back afterwards; the
/// result is identical to the serial half-pass.
#[cfg(feature = "parallel")]
fn half_pass_parallel(u: &mut DMatrix<f64>, nx: usize, ny: usize, parity: usize) -> f64 {
    let updates: Vec<(usize, usize, f64)> = {
        let view: &DMatrix<f64> = u;

        (1..ny - 1)
            .into_par_iter()
            .flat_map_iter(move |j| {
                (1..nx - 1)
                    .filter(move |i| (i + j) % 2 == parity)
                    .map(move |i| {
                        let updated = 0.25
                            * (view[(j, i + 1)]
                                + view[(j, i - 1)]
                                + view[(j + 1, i)]
                                + view[(j - 1, i)]);
                        (j, i, updated)
                    })
            })
            .collect()
    };

    let mut max_residual = 0.0_f64;
    for (j, i, updated) in updates {
        let old = u[(j, i)];
        u[(j, i)] = updated;
        max_residual = max_residual.max((updated - old).abs());
    }

    max_residual
}

// =================================================================================================
// Tests
// =================================================================================================
