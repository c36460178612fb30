//! Basic Northwest Corner and Least Cost example.
//!
//! Builds both initial plans for a small three-plant, four-warehouse
//! problem and shows how much the cost-aware rule saves.

use transport_planner::core::problem::ProblemInstance;
use transport_planner::graph::basis::BasisGraph;
use transport_planner::optimization::comparison::MethodComparison;

fn main() {
    println!("╔════════════════════════════════════════════╗");
    println!("║  transport-planner: Basic Plan Example     ║");
    println!("╚════════════════════════════════════════════╝\n");

    // Plants ship to warehouses; costs are per unit.
    let instance = ProblemInstance::new(
        vec![300, 400, 500],
        vec![250, 350, 400, 200],
        vec![
            vec![3, 1, 7, 4],
            vec![2, 6, 5, 9],
            vec![8, 3, 3, 2],
        ],
    )
    .expect("well-formed problem");

    println!("Supply: {:?}", instance.supplies());
    println!("Demand: {:?}", instance.demands());
    println!("Balanced: {}\n", instance.is_balanced());

    let comparison = MethodComparison::run(&instance).expect("balanced problem");
    println!("{}", comparison);

    println!("━━━ Basis Structure ━━━\n");
    for solution in [comparison.northwest_corner(), comparison.least_cost()] {
        let basis = BasisGraph::from_allocation(solution.allocation());
        println!(
            "  {:<18} {} occupied cells, {} component(s), spanning tree: {}",
            solution.method(),
            basis.edge_count(),
            basis.component_count(),
            basis.is_spanning_tree()
        );
    }
}
