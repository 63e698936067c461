//! Heated Plate: the reference Dirichlet problem
//!
//! ∇²u = 0 on the unit square with
//! - u = 100·sin(π·x) on the top edge
//! - u = 0 on the other three edges
//!
//! Relaxes the field to tolerance, then measures the result against the
//! separation-of-variables closed form.

use std::error::Error;

use laplace_rs::analytic::analytical_solution;
use laplace_rs::solver::{
    BoundarySource, GaussSeidelSolver, HistoryTracking, LaplaceSystem, Solver,
    SolverConfiguration,
};

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Heated Plate: Gauss-Seidel on the unit square ===\n");

    // Problem parameters
    let (lx, ly) = (1.0, 1.0);
    let (nx, ny) = (51, 51);

    // Solve parameters
    let tolerance = 1e-6;
    let max_iterations = 10_000;

    let mut system = LaplaceSystem::create(lx, ly, nx, ny)?;
    println!(
        "grid {}×{}  (dx = {:.4}, dy = {:.4})",
        nx,
        ny,
        system.grid().dx(),
        system.grid().dy()
    );

    system.apply_boundary(&BoundarySource::DefaultDirichlet)?;
    println!("boundary: cold sides, top edge 100·sin(π·x)\n");

    let config = SolverConfiguration::iterative(tolerance, max_iterations)
        .with_history(HistoryTracking::Sampled(100));
    let solver = GaussSeidelSolver::new();
    let report = solver.solve(&mut system, &config)?;

    for sample in report.history.samples() {
        println!(
            "iteration {:5}: residual = {:.3e}",
            sample.iteration, sample.residual
        );
    }

    println!(
        "\n{} after {} sweeps (final residual {:.3e})",
        if report.converged {
            "converged"
        } else {
            "NOT converged"
        },
        report.iterations,
        report.final_residual
    );

    // Cross-check against the closed form
    match analytical_solution(&system) {
        Some(reference) => {
            let max_error = system.field().max_abs_difference(&reference);
            println!("max |numerical − analytical| = {:.4e}", max_error);
        }
        None => println!("analytical reference unavailable for this boundary"),
    }

    // A feel for the field: the vertical centreline
    let mid = nx / 2;
    println!("\ncentreline u(0.5, y):");
    for j in (0..ny).step_by(10) {
        println!(
            "  y = {:.2}:  {:8.3}",
            system.grid().y_coord(j),
            system.field().value(j, mid)
        );
    }

    Ok(())
}
