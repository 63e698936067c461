//! Error types for grid construction, boundary assignment and solving
//!
//! Every kind is detected synchronously at the offending call and reported
//! to the caller immediately; nothing is retried internally. Note that
//! running out of iterations is NOT an error: the solve loop reports it as
//! `converged = false` so the caller can raise the budget, coarsen the
//! grid, or accept the approximate field.

use thiserror::Error;

/// Errors reported by the grid and solver layers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// Geometry or resolution leaves no interior node (nx/ny < 3) or the
    /// domain is degenerate (Lx/Ly ≤ 0).
    #[error("invalid domain: {0}")]
    InvalidDomain(String),

    /// Convergence tolerance is zero, negative, or not finite.
    #[error("invalid tolerance: {0}")]
    InvalidTolerance(String),

    /// Iteration budget is zero.
    #[error("invalid iteration budget: {0}")]
    InvalidIterationBudget(String),

    /// A boundary function failed to produce a finite value.
    #[error("boundary evaluation failed: {0}")]
    BoundaryEvaluation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_their_kind() {
        let err = SolverError::InvalidDomain("nx must be at least 3, got 2".into());
        assert!(err.to_string().starts_with("invalid domain"));

        let err = SolverError::InvalidTolerance("tolerance must be positive, got 0".into());
        assert!(err.to_string().starts_with("invalid tolerance"));

        let err = SolverError::InvalidIterationBudget("budget must be at least 1".into());
        assert!(err.to_string().starts_with("invalid iteration budget"));

        let err = SolverError::BoundaryEvaluation("value at (0, 0) is NaN".into());
        assert!(err.to_string().starts_with("boundary evaluation failed"));
    }
}
