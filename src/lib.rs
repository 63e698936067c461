//! laplace-rs: Finite-Difference Laplace Equation Solver
//!
//! A small, focused crate for solving Laplace's equation ∇²u = 0 on a
//! uniform rectangular grid with Dirichlet boundary conditions, using
//! point Gauss-Seidel relaxation.
//!
//! # Architecture
//!
//! laplace-rs is built on two core principles:
//!
//! 1. **Separation of Problem and Method**
//!    - The grid layer describes the domain (geometry, resolution, field)
//!    - The solver layer provides the relaxation methods (how to solve)
//!
//! 2. **Explicit, Validated Contracts**
//!    - Construction and solve parameters are checked up front
//!    - Non-convergence is a reported outcome, never a panic or an error
//!
//! # Quick Start
//!
//! ```rust
//! use laplace_rs::solver::{
//!     BoundarySource, GaussSeidelSolver, LaplaceSystem, Solver, SolverConfiguration,
//! };
//!
//! # fn main() -> Result<(), laplace_rs::SolverError> {
//! // 1. Describe the problem: unit square, 51×51 nodes
//! let mut system = LaplaceSystem::create(1.0, 1.0, 51, 51)?;
//!
//! // 2. Fix the boundary values (default: heated top edge, cold sides)
//! system.apply_boundary(&BoundarySource::DefaultDirichlet)?;
//!
//! // 3. Relax to convergence
//! let config = SolverConfiguration::iterative(1e-6, 5000);
//! let solver = GaussSeidelSolver::new();
//! let report = solver.solve(&mut system, &config)?;
//!
//! // 4. Read the results
//! println!("converged: {} after {} sweeps", report.converged, report.iterations);
//! let u_center = system.field().value(25, 25);
//! # let _ = u_center;
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`grid`]: Domain geometry and the node-value field
//! - [`solver`]: Boundary assignment, relaxation methods, convergence tracking
//! - [`analytic`]: Closed-form reference solution for validation

// Core modules
pub mod grid;
pub mod solver;

pub mod analytic;

mod error;

pub use error::SolverError;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use laplace_rs::prelude::*;
    //! ```
    pub use crate::analytic::analytical_solution;
    pub use crate::grid::{Field, Grid};
    pub use crate::solver::{
        BoundarySource, ConvergenceRecord, GaussSeidelSolver, HistoryTracking, LaplaceSystem,
        RedBlackSolver, SolveReport, Solver, SolverConfiguration,
    };
    pub use crate::SolverError;
}
