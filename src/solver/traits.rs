//! Solver traits, configuration, and reporting types
//!
//! # Design Philosophy
//!
//! - `SolverConfiguration` carries the numerical parameters (HOW hard to
//!   try), validated before any sweep runs
//! - `HistoryTracking` decides which residual samples get recorded
//! - `SolveReport` carries everything the caller reads back: iteration
//!   count, convergence flag, the residual history, and string metadata
//! - The `Solver` trait is the stable seam new relaxation methods plug
//!   into
//!
//! Non-convergence is deliberately NOT modelled as an error: a report with
//! `converged = false` is a normal outcome the caller can act on.

use std::collections::HashMap;

use crate::solver::system::LaplaceSystem;
use crate::SolverError;

// =================================================================================================
// History Tracking
// =================================================================================================

/// Residual-history recording policy for the solve loop.
///
/// Full-resolution history is the default so correctness tests can inspect
/// every residual. Sampling keeps long runs cheap for diagnostics-only
/// callers; the converging pass is always recorded so the final residual
/// never goes missing from a sampled record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryTracking {
    /// Record every iteration's residual.
    Full,

    /// Record every `stride`-th iteration plus the converging pass.
    /// The stride must be at least 1.
    Sampled(usize),

    /// Record nothing (benchmarks, fire-and-forget solves).
    Disabled,
}

impl HistoryTracking {
    /// Should the residual of `iteration` (0-based) be recorded?
    pub(crate) fn should_record(&self, iteration: usize, converged: bool) -> bool {
        match self {
            HistoryTracking::Full => true,
            HistoryTracking::Sampled(stride) => iteration % stride == 0 || converged,
            HistoryTracking::Disabled => false,
        }
    }
}

// =================================================================================================
// Solver configuration
// =================================================================================================

/// Numerical parameters for an iterative solve.
///
/// # Examples
///
/// ```rust
/// use laplace_rs::solver::{HistoryTracking, SolverConfiguration};
///
/// // Full residual history (the default)
/// let config = SolverConfiguration::iterative(1e-6, 5000);
///
/// // Sample every 10th residual, the way long diagnostic runs do
/// let config = SolverConfiguration::iterative(1e-6, 50_000)
///     .with_history(HistoryTracking::Sampled(10));
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfiguration {
    /// Convergence criterion: stop once a sweep's max residual drops
    /// strictly below this value.
    pub tolerance: f64,

    /// Safety limit on the number of relaxation sweeps.
    pub max_iterations: usize,

    /// Residual-history recording policy.
    pub history: HistoryTracking,
}

impl SolverConfiguration {
    /// Create an iterative configuration with full history tracking.
    pub fn iterative(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
            history: HistoryTracking::Full,
        }
    }

    /// Replace the history-tracking policy.
    pub fn with_history(mut self, history: HistoryTracking) -> Self {
        self.history = history;
        self
    }

    /// Validate that the parameters are numerically meaningful.
    pub fn validate(&self) -> Result<(), SolverError> {
        if !(self.tolerance > 0.0) || !self.tolerance.is_finite() {
            return Err(SolverError::InvalidTolerance(format!(
                "tolerance must be a positive finite value, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations < 1 {
            return Err(SolverError::InvalidIterationBudget(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if let HistoryTracking::Sampled(stride) = self.history {
            if stride == 0 {
                return Err(SolverError::InvalidIterationBudget(
                    "history sampling stride must be at least 1".to_string(),
                ));
            }
        }
        Ok(())
    }
}

// =================================================================================================
// Convergence record
// =================================================================================================

/// One residual observation from the solve loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidualSample {
    /// 0-based sweep index the residual belongs to
    pub iteration: usize,
    /// Max absolute node change observed during that sweep
    pub residual: f64,
}

/// Append-only sequence of residual samples, ordered by iteration.
///
/// Produced during solving for diagnostics and plotting; the solver never
/// reads it back.
#[derive(Debug, Clone, Default)]
pub struct ConvergenceRecord {
    samples: Vec<ResidualSample>,
}

impl ConvergenceRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded samples, oldest first.
    pub fn samples(&self) -> &[ResidualSample] {
        &self.samples
    }

    /// Number of recorded samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Most recent sample, if any.
    pub fn last(&self) -> Option<&ResidualSample> {
        self.samples.last()
    }

    /// Append one observation. Crate-private so the record stays
    /// append-only from the caller's point of view.
    pub(crate) fn push(&mut self, iteration: usize, residual: f64) {
        self.samples.push(ResidualSample {
            iteration,
            residual,
        });
    }
}

// =================================================================================================
// Solve report
// =================================================================================================

/// Outcome of one call to [`Solver::solve`].
///
/// The relaxed field itself stays inside the [`LaplaceSystem`] (it is
/// mutated in place); the report carries the bookkeeping around it.
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// Number of relaxation sweeps actually executed.
    pub iterations: usize,

    /// True when the last sweep's residual dropped below the tolerance.
    pub converged: bool,

    /// Residual of the last executed sweep.
    pub final_residual: f64,

    /// Residual history per the configured [`HistoryTracking`].
    pub history: ConvergenceRecord,

    /// Free-form diagnostics (solver name, parameters, grid shape).
    pub metadata: HashMap<String, String>,
}

impl SolveReport {
    /// Build a report; metadata starts empty.
    pub fn new(
        iterations: usize,
        converged: bool,
        final_residual: f64,
        history: ConvergenceRecord,
    ) -> Self {
        Self {
            iterations,
            converged,
            final_residual,
            history,
            metadata: HashMap::new(),
        }
    }

    /// Add a metadata entry for diagnostics and reproducibility.
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }
}

// =================================================================================================
// Solver trait
// =================================================================================================

/// A relaxation method for the discrete Laplace problem.
///
/// # Responsibility
///
/// Sweep the system's interior nodes until the configuration's tolerance
/// or iteration budget is hit, mutating the field in place and returning
/// the bookkeeping in a [`SolveReport`].
///
/// # Contract
///
/// - Boundary nodes are never modified
/// - `Err` is reserved for invalid parameters or invalid state; running
///   out of iterations returns `Ok` with `converged = false`
/// - Implementations must converge to the same discrete fixed point; only
///   the sweep ordering may differ
pub trait Solver {
    /// Relax `system`'s interior until converged or out of budget.
    fn solve(
        &self,
        system: &mut LaplaceSystem,
        config: &SolverConfiguration,
    ) -> Result<SolveReport, SolverError>;

    /// Name of the method (used for display and report metadata).
    fn name(&self) -> &str;
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ===================================== Configuration =====================================

    #[test]
    fn test_iterative_defaults_to_full_history() {
        let config = SolverConfiguration::iterative(1e-6, 100);

        assert_eq!(config.tolerance, 1e-6);
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.history, HistoryTracking::Full);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_tolerance_is_invalid() {
        let result = SolverConfiguration::iterative(0.0, 100).validate();
        assert!(matches!(result, Err(SolverError::InvalidTolerance(_))));
    }

    #[test]
    fn test_negative_tolerance_is_invalid() {
        let result = SolverConfiguration::iterative(-1e-6, 100).validate();
        assert!(matches!(result, Err(SolverError::InvalidTolerance(_))));
    }

    #[test]
    fn test_nan_tolerance_is_invalid() {
        let result = SolverConfiguration::iterative(f64::NAN, 100).validate();
        assert!(matches!(result, Err(SolverError::InvalidTolerance(_))));
    }

    #[test]
    fn test_zero_budget_is_invalid() {
        let result = SolverConfiguration::iterative(1e-6, 0).validate();
        assert!(matches!(
            result,
            Err(SolverError::InvalidIterationBudget(_))
        ));
    }

    #[test]
    fn test_zero_sampling_stride_is_invalid() {
        let result = SolverConfiguration::iterative(1e-6, 100)
            .with_history(HistoryTracking::Sampled(0))
            .validate();
        assert!(matches!(
            result,
            Err(SolverError::InvalidIterationBudget(_))
        ));
    }

    // ==================================== History tracking ====================================

    #[test]
    fn test_full_records_everything() {
        let history = HistoryTracking::Full;
        for iteration in 0..20 {
            assert!(history.should_record(iteration, false));
        }
    }

    #[test]
    fn test_sampled_records_stride_and_converging_pass() {
        let history = HistoryTracking::Sampled(10);

        assert!(history.should_record(0, false));
        assert!(!history.should_record(7, false));
        assert!(history.should_record(10, false));
        // Off-stride but converging: must be recorded anyway.
        assert!(history.should_record(13, true));
    }

    #[test]
    fn test_disabled_records_nothing() {
        let history = HistoryTracking::Disabled;
        assert!(!history.should_record(0, false));
        assert!(!history.should_record(5, true));
    }

    // ==================================== Convergence record ====================================

    #[test]
    fn test_record_is_ordered_and_append_only() {
        let mut record = ConvergenceRecord::new();
        assert!(record.is_empty());

        record.push(0, 1.0);
        record.push(1, 0.5);
        record.push(2, 0.25);

        assert_eq!(record.len(), 3);
        assert_eq!(record.samples()[0].iteration, 0);
        assert_eq!(record.last().unwrap().residual, 0.25);
    }

    // ======================================== Report ========================================

    #[test]
    fn test_report_metadata() {
        let mut report = SolveReport::new(42, true, 5e-7, ConvergenceRecord::new());
        report.add_metadata("solver", "Gauss-Seidel");
        report.add_metadata("tolerance", "1e-6");

        assert_eq!(
            report.metadata.get("solver"),
            Some(&"Gauss-Seidel".to_string())
        );
        assert_eq!(report.iterations, 42);
        assert!(report.converged);
    }
}
