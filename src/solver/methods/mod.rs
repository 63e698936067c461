//! Relaxation methods for the discrete Laplace problem
//!
//! This module contains concrete implementations of the
//! [`Solver`](crate::solver::Solver) trait.
//!
//! # Architecture
//!
//! The separation between the abstract solver interface (`solver::traits`)
//! and the concrete implementations here follows the Open-Closed
//! Principle: new sweep orderings can be added without touching the
//! trait, the configuration, or the reporting types.
//!
//! # Available Methods
//!
//! - **[`GaussSeidelSolver`]**: point relaxation in natural row-major
//!   order. Each interior node is replaced by the mean of its four
//!   neighbours *in place*, so already-visited neighbours contribute
//!   their new values within the same pass. This is the reference
//!   method: its sweep order is part of the contract.
//!
//! - **[`RedBlackSolver`]**: the same point relaxation with the interior
//!   split into two checkerboard colors. Nodes of one color only read
//!   nodes of the other, which removes the in-pass data dependency and
//!   lets each half-sweep run in parallel (feature `parallel`). It
//!   converges to the same fixed point with a comparable sweep count,
//!   but intermediate residuals differ from the natural order.
//!
//! # Choosing a Method
//!
//! Use Gauss-Seidel unless profiling shows the sweep itself is the
//! bottleneck on a large grid; the two methods agree on the converged
//! field to within the tolerance-limited iteration error.

mod gauss_seidel;
mod red_black;

// Re-exports for convenience
pub use gauss_seidel::GaussSeidelSolver;
pub use red_black::RedBlackSolver;
