//! Rectangular domain geometry
//!
//! A [`Grid`] describes the discretized domain [0, Lx] × [0, Ly] with nx
//! nodes along x and ny nodes along y, boundary nodes included. Step
//! sizes and coordinate axes are derived once at construction and never
//! change afterwards.

use nalgebra::DVector;

use crate::SolverError;

// =================================================================================================
// Grid
// =================================================================================================

/// Immutable geometric description of a uniform rectangular grid.
///
/// # Invariants
///
/// - `lx, ly > 0` and `nx, ny ≥ 3` (at least one interior row and column)
/// - `dx = lx / (nx − 1)`, `dy = ly / (ny − 1)`, both strictly positive
/// - `x[0] = 0`, `x[nx−1] = lx` (and likewise for y), endpoints included
///
/// These hold for every `Grid` the crate hands out: the only constructor
/// is [`Grid::create`], which rejects any input that would break them.
///
/// # Example
///
/// ```rust
/// use laplace_rs::grid::Grid;
///
/// let grid = Grid::create(2.0, 1.0, 5, 3).unwrap();
/// assert_eq!(grid.dx(), 0.5);
/// assert_eq!(grid.dy(), 0.5);
/// assert_eq!(grid.x()[4], 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Domain extent along x
    lx: f64,
    /// Domain extent along y
    ly: f64,
    /// Number of nodes along x (boundaries included)
    nx: usize,
    /// Number of nodes along y (boundaries included)
    ny: usize,
    /// Step size along x
    dx: f64,
    /// Step size along y
    dy: f64,
    /// Node coordinates along x, evenly spaced including endpoints
    x: DVector<f64>,
    /// Node coordinates along y, evenly spaced including endpoints
    y: DVector<f64>,
}

impl Grid {
    /// Create a grid over [0, `lx`] × [0, `ly`] with `nx` × `ny` nodes.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidDomain`] when `nx < 3` or `ny < 3`
    /// (no interior node would exist) or when `lx` or `ly` is not a
    /// strictly positive finite number.
    pub fn create(lx: f64, ly: f64, nx: usize, ny: usize) -> Result<Self, SolverError> {
        if nx < 3 {
            return Err(SolverError::InvalidDomain(format!(
                "nx must be at least 3 to have an interior column, got {}",
                nx
            )));
        }
        if ny < 3 {
            return Err(SolverError::InvalidDomain(format!(
                "ny must be at least 3 to have an interior row, got {}",
                ny
            )));
        }
        if !(lx > 0.0) || !lx.is_finite() {
            return Err(SolverError::InvalidDomain(format!(
                "Lx must be a positive finite extent, got {}",
                lx
            )));
        }
        if !(ly > 0.0) || !ly.is_finite() {
            return Err(SolverError::InvalidDomain(format!(
                "Ly must be a positive finite extent, got {}",
                ly
            )));
        }

        let dx = lx / (nx - 1) as f64;
        let dy = ly / (ny - 1) as f64;

        // Coordinates are computed directly from the index ratio rather than
        // by accumulating dx, so the endpoints are exactly 0 and lx/ly and
        // no rounding error builds up along the axis.
        let x = DVector::from_fn(nx, |i, _| lx * i as f64 / (nx - 1) as f64);
        let y = DVector::from_fn(ny, |j, _| ly * j as f64 / (ny - 1) as f64);

        Ok(Self {
            lx,
            ly,
            nx,
            ny,
            dx,
            dy,
            x,
            y,
        })
    }

    // ========================================== Queries ==========================================

    /// Domain extent along x
    pub fn lx(&self) -> f64 {
        self.lx
    }

    /// Domain extent along y
    pub fn ly(&self) -> f64 {
        self.ly
    }

    /// Number of nodes along x (boundaries included)
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Number of nodes along y (boundaries included)
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Step size along x
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Step size along y
    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// Node coordinates along x
    pub fn x(&self) -> &DVector<f64> {
        &self.x
    }

    /// Node coordinates along y
    pub fn y(&self) -> &DVector<f64> {
        &self.y
    }

    /// x coordinate of column `i`
    #[inline]
    pub fn x_coord(&self, i: usize) -> f64 {
        self.x[i]
    }

    /// y coordinate of row `j`
    #[inline]
    pub fn y_coord(&self, j: usize) -> f64 {
        self.y[j]
    }

    /// Total number of nodes, boundaries included
    pub fn node_count(&self) -> usize {
        self.nx * self.ny
    }

    /// Number of interior (relaxed) nodes
    pub fn interior_count(&self) -> usize {
        (self.nx - 2) * (self.ny - 2)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
