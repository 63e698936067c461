//! Problem definition: grid + field
//!
//! A [`LaplaceSystem`] combines the domain description with the node
//! values being relaxed. This is the "WHAT to solve": the same system
//! can be handed to different relaxation methods.

use crate::grid::{Field, Grid};
use crate::solver::{self, BoundarySource};
use crate::SolverError;

/// The discrete Laplace problem: a grid and its field.
///
/// # Lifecycle
///
/// Grid and field are created together; boundary values are written once
/// (or re-written) through [`apply_boundary`](Self::apply_boundary); the
/// field is then mutated in place by the relaxation sweeps. There is no
/// explicit teardown; the field simply persists until the caller drops
/// the system.
///
/// # Examples
///
/// ```rust
/// use laplace_rs::solver::{BoundarySource, LaplaceSystem};
///
/// # fn main() -> Result<(), laplace_rs::SolverError> {
/// let mut system = LaplaceSystem::create(1.0, 1.0, 11, 11)?;
/// system.apply_boundary(&BoundarySource::DefaultDirichlet)?;
///
/// assert_eq!(system.field().nrows(), 11);
/// # Ok(())
/// # }
/// ```
pub struct LaplaceSystem {
    /// Domain geometry and resolution
    grid: Grid,

    /// Node values, mutated in place by the solvers
    field: Field,
}

impl LaplaceSystem {
    /// Create a system over [0, `lx`] × [0, `ly`] with an all-zero field.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidDomain`] under the same conditions
    /// as [`Grid::create`].
    pub fn create(lx: f64, ly: f64, nx: usize, ny: usize) -> Result<Self, SolverError> {
        let grid = Grid::create(lx, ly, nx, ny)?;
        let field = Field::zeros(&grid);
        Ok(Self { grid, field })
    }

    /// Build a system from an existing grid, with an all-zero field.
    pub fn from_grid(grid: Grid) -> Self {
        let field = Field::zeros(&grid);
        Self { grid, field }
    }

    /// Overwrite the four boundary edges from `source`.
    ///
    /// The source is evaluated once per boundary node and not retained;
    /// see [`BoundarySource::apply`] for the edge order and error
    /// conditions.
    pub fn apply_boundary(&mut self, source: &BoundarySource) -> Result<(), SolverError> {
        source.apply(&self.grid, &mut self.field)
    }

    /// Domain geometry
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current node values
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Split borrow for the relaxation sweeps: read-only geometry plus
    /// mutable field.
    pub(crate) fn parts_mut(&mut self) -> (&Grid, &mut Field) {
        (&self.grid, &mut self.field)
    }

    /// Verify the system is fit for relaxation (finite field values).
    pub fn validate(&self) -> Result<(), SolverError> {
        solver::validate_field(&self.field)
    }
}

impl std::fmt::Debug for LaplaceSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LaplaceSystem")
            .field("Lx", &self.grid.lx())
            .field("Ly", &self.grid.ly())
            .field("nx", &self.grid.nx())
            .field("ny", &self.grid.ny())
            .field("field", &format_args!("{}", self.field))
            .finish()
    }
}

// ================================================================================================
// Tests
// ================================================================================================
