//! Degeneracy and infeasibility example.
//!
//! Shows a plan where a source and a destination run out at the same time,
//! leaving fewer occupied cells than a basic solution needs, and an
//! unbalanced problem that neither rule will touch.

use transport_planner::core::problem::ProblemInstance;
use transport_planner::graph::basis::BasisGraph;
use transport_planner::optimization::engine::TransportEngine;

fn main() {
    println!("╔═══════════════════════════════════════════════╗");
    println!("║  transport-planner: Degenerate Plan Example   ║");
    println!("╚═══════════════════════════════════════════════╝\n");

    println!("━━━ Scenario 1: Simultaneous exhaustion ━━━\n");

    // Source 1 and warehouse 1 both hold exactly 40 units.
    let instance = ProblemInstance::new(
        vec![40, 60],
        vec![40, 30, 30],
        vec![vec![4, 6, 9], vec![5, 3, 8]],
    )
    .expect("well-formed problem");

    let solution = TransportEngine::solve_northwest_corner(&instance).expect("balanced problem");
    println!("{}", solution);

    let basis = BasisGraph::from_allocation(solution.allocation());
    println!(
        "Occupied cells: {} (a basic solution needs {})",
        basis.edge_count(),
        instance.basis_size()
    );
    println!("Components:     {}\n", basis.component_count());

    println!("━━━ Scenario 2: Unbalanced problem ━━━\n");

    let unbalanced = ProblemInstance::new(vec![10, 10], vec![5, 5], vec![vec![1, 2], vec![3, 4]])
        .expect("well-formed problem");

    for result in [
        TransportEngine::solve_northwest_corner(&unbalanced),
        TransportEngine::solve_least_cost(&unbalanced),
    ] {
        match result {
            Ok(solution) => println!("Unexpected plan:\n{}", solution),
            Err(err) => println!("  {}", err),
        }
    }
}
