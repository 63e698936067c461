//! Relaxation solvers for the discrete Laplace problem
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! The solver layer separates concerns into three pieces:
//!
//! 1. **System** ([`LaplaceSystem`]) - WHAT to solve
//!    - Grid geometry and resolution
//!    - The field with its boundary values applied
//!
//! 2. **Configuration** ([`SolverConfiguration`]) - HOW to solve
//!    - Convergence tolerance
//!    - Iteration budget
//!    - Residual-history tracking mode
//!
//! 3. **Solver** ([`Solver`] trait) - The relaxation method
//!    - Sweeps the interior nodes
//!    - Tracks convergence
//!    - Returns a [`SolveReport`]
//!
//! The same system can be solved with different methods, and the same
//! method reused across systems, without either knowing about the other's
//! internals.
//!
//! # Module Organization
//!
//! - **`traits`**: `Solver` trait, `SolverConfiguration`, `HistoryTracking`,
//!   `ConvergenceRecord`, `SolveReport`
//! - **`boundary`**: Dirichlet boundary sources and the edge-assignment
//!   contract
//! - **`system`**: `LaplaceSystem`, the stateful grid + field pair
//! - **Method implementations** (`methods`):
//!   - [`GaussSeidelSolver`]: row-major in-place point relaxation
//!   - [`RedBlackSolver`]: two-color reordering of the same sweep
//!
//! # Quick Start Example
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
//! let config = SolverConfiguration::iterative(1e-6, 2000);
//! let report = GaussSeidelSolver::new().solve(&mut system, &config)?;
//!
//! assert!(report.converged);
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All fallible solver methods return `Result<T, SolverError>`. Common
//! errors:
//! - Invalid configuration (non-positive tolerance, zero iteration budget)
//! - Invalid domain (fewer than 3 nodes along an axis)
//! - Boundary functions producing NaN or infinite values
//!
//! Exhausting the iteration budget is NOT an error; the report carries
//! `converged = false` and the field holds the best iterate so far.

// =================================================================================================
// Module Declarations
// =================================================================================================
mod boundary;
mod methods;
mod system;
mod traits;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// Deciding *when* to hand a red-black half-sweep to Rayon is an execution
// concern, not a discretization concern, so the knob lives here rather
// than in the grid layer.
//
// The threshold is stored in an AtomicUsize so benchmarks and tests can
// change it at runtime without a mutex on every sweep. Relaxed ordering
// is sufficient: the value is a performance hint, not a synchronisation
// point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of interior nodes above which [`RedBlackSolver`] hands
/// its half-sweeps to Rayon (when the `parallel` feature is enabled).
///
/// The crossover sits at roughly a 66×66 grid. Below that, thread-pool
/// dispatch costs more than the four-neighbour averages it distributes.
const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Runtime-configurable parallel-execution threshold.
///
/// Read via [`parallel_threshold()`], written via [`set_parallel_threshold()`].
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// The red-black sweep stays sequential when the grid has fewer interior
/// nodes than this value, and switches to Rayon when it has more — but
/// only when the crate is compiled with the `parallel` feature.
///
/// # Example
///
/// ```rust
/// use laplace_rs::solver::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`. A zero threshold would force parallel
/// dispatch even for a single interior node, which is never the intended
/// behaviour.
///
/// # Example
///
/// ```rust
/// use laplace_rs::solver::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(1 << 16);
/// assert_eq!(parallel_threshold(), 1 << 16);
///
/// // Restore so other tests are not affected.
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// RAII guard that saves the current threshold on construction and restores
/// it on drop.
///
/// Only compiled in test builds. Prevents one test from leaking a modified
/// threshold value into the next.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
}

#[cfg(test)]
impl ThresholdGuard {
    /// Set the threshold to `new_value` and return a guard that will
    /// restore the previous value on drop.
    pub(crate) fn save(new_value: usize) -> Self {
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        // Bypass the public setter so restoring to any value never panics.
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use crate::SolverError;

pub use traits::{
    ConvergenceRecord, HistoryTracking, ResidualSample, SolveReport, Solver, SolverConfiguration,
};

pub use boundary::BoundarySource;
pub use system::LaplaceSystem;

pub use methods::{GaussSeidelSolver, RedBlackSolver};

pub(crate) use boundary::default_top_value;

// =================================================================================================
// Helper Functions
// =================================================================================================

use crate::grid::Field;

/// Validate a field for numerical issues.
///
/// Checks that no node holds NaN or Inf. Boundary assignment is the only
/// way non-finite values can enter a field (the relaxation average of
/// finite values stays finite), so failures are reported as
/// [`SolverError::BoundaryEvaluation`].
pub(crate) fn validate_field(field: &Field) -> Result<(), SolverError> {
    for j in 0..field.nrows() {
        for i in 0..field.ncols() {
            let value = field.value(j, i);
            if value.is_nan() {
                return Err(SolverError::BoundaryEvaluation(format!(
                    "NaN detected at node ({}, {}); boundary values must be finite",
                    j, i
                )));
            }
            if value.is_infinite() {
                return Err(SolverError::BoundaryEvaluation(format!(
                    "Infinity detected at node ({}, {}); boundary values must be finite",
                    j, i
                )));
            }
        }
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
