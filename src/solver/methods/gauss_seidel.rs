//! Gauss-Seidel point relaxation
//!
//! # Mathematical Background
//!
//! Discretizing Laplace's equation ∇²u = 0 with central differences on a
//! uniform grid turns every interior node into the average of its four
//! neighbours:
//!
//! ```text
//! u[j,i] = (u[j,i+1] + u[j,i-1] + u[j+1,i] + u[j-1,i]) / 4
//! ```
//!
//! Gauss-Seidel iterates that fixed point **in place**: sweeping the
//! interior in row-major order, the left and lower neighbours of a node
//! have already been updated within the current pass while the right and
//! upper neighbours still hold the previous iterate. Using the freshest
//! available values is what distinguishes the method from Jacobi
//! relaxation (which buffers the old field) and roughly halves the sweep
//! count for the same tolerance.
//!
//! # Characteristics
//!
//! - **Cost per sweep**: O(interior node count), no allocation
//! - **Sweeps to converge**: grows ≈ (max(nx, ny))² for fixed tolerance
//! - **Memory**: the field itself, nothing else
//!
//! The quadratic sweep growth is inherent to plain point relaxation; this
//! implementation deliberately does not apply over-relaxation or other
//! acceleration, because the plain scheme is the contract.
//!
//! # Example
//!
//! ```rust
//! use laplace_rs::solver::{
//!     BoundarySource, GaussSeidelSolver, LaplaceSystem, Solver, SolverConfiguration,
//! };
//!
//! # fn main() -> Result<(), laplace_rs::SolverError> {
//! let mut system = LaplaceSystem::create(1.0, 1.0, 21, 21)?;
//! system.apply_boundary(&BoundarySource::DefaultDirichlet)?;
//!
//! let solver = GaussSeidelSolver::new();
//! let report = solver.solve(&mut system, &SolverConfiguration::iterative(1e-6, 2000))?;
//! assert!(report.converged);
//! # Ok(())
//! # }
//! ```

use crate::solver::{
    ConvergenceRecord, LaplaceSystem, SolveReport, Solver, SolverConfiguration,
};
use crate::SolverError;

// =================================================================================================
// Gauss-Seidel Solver
// =================================================================================================

/// Row-major in-place point relaxation.
///
/// # Algorithm
///
/// For each sweep:
///
/// 1. Visit interior nodes in increasing row order, increasing column
///    within each row
/// 2. Replace each node by the arithmetic mean of its four neighbours,
///    reading whatever values are currently stored (new for neighbours
///    already visited this sweep, old for the rest)
/// 3. Track the largest absolute change over the sweep
///
/// Boundary nodes (row 0, row ny−1, column 0, column nx−1) are never
/// written.
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussSeidelSolver;

impl GaussSeidelSolver {
    /// Create a new Gauss-Seidel solver
    ///
    /// # Example
    ///
    /// ```rust
    /// use laplace_rs::solver::{GaussSeidelSolver, Solver};
    ///
    /// let solver = GaussSeidelSolver::new();
    /// assert_eq!(solver.name(), "Gauss-Seidel");
    /// ```
    pub fn new() -> Self {
        Self
    }

    /// Run one relaxation pass over the interior, in place.
    ///
    /// Returns the maximum absolute change |new − old| observed over all
    /// interior nodes. Pure numerical step: no allocation, no failure
    /// conditions, boundary rows and columns untouched.
    pub fn relax_once(&self, system: &mut LaplaceSystem) -> f64 {
        let (grid, field) = system.parts_mut();
        let nx = grid.nx();
        let ny = grid.ny();
        let u = field.as_matrix_mut();

        let mut max_residual = 0.0_f64;

        for j in 1..ny - 1 {
            for i in 1..nx - 1 {
                let old = u[(j, i)];

                // Neighbours at (j, i-1) and (j-1, i) were already visited
                // this sweep and contribute their new values.
                let updated = 0.25
                    * (u[(j, i + 1)] + u[(j, i - 1)] + u[(j + 1, i)] + u[(j - 1, i)]);

                u[(j, i)] = updated;
                max_residual = max_residual.max((updated - old).abs());
            }
        }

        max_residual
    }
}

impl Solver for GaussSeidelSolver {
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

            // Stop immediately after the sweep that achieved the tolerance.
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
        "Gauss-Seidel"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
