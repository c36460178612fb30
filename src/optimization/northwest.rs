use crate::core::allocation::Allocation;
use crate::core::method::Method;
use crate::core::problem::ProblemInstance;
use crate::optimization::solver::{Solver, WorkingState};

/// Northwest Corner rule.
///
/// Sweeps the tableau from the top-left cell to the bottom-right one,
/// shipping as much as possible at each cell and then moving down when the
/// source is exhausted, right when the destination is satisfied, or both
/// when the two run out together. Costs are never consulted.
///
/// # Algorithm
///
/// 1. Start at `(0, 0)`.
/// 2. Ship `min(supply[i], demand[j])` to `(i, j)`, recording the amount
///    even when it is zero.
/// 3. If the source is empty advance `i`; if the destination is satisfied
///    advance `j`. The two checks are independent.
/// 4. Stop when either cursor leaves the tableau.
///
/// Each step exhausts at least one line, so there are at most R + C - 1 steps.
pub struct NorthwestCornerSolver;

impl Solver for NorthwestCornerSolver {
    const METHOD: Method = Method::NorthwestCorner;

    fn allocate(instance: &ProblemInstance, state: &mut WorkingState) -> Allocation {
        let rows = instance.sources();
        let columns = instance.destinations();
        let mut allocation = Allocation::zeros(rows, columns);

        let (mut i, mut j) = (0, 0);
        while i < rows && j < columns {
            let amount = state.ship(i, j);
            allocation.set(i, j, amount);
            log::debug!("northwest corner: ship {} along ({}, {})", amount, i, j);

            let source_empty = state.supply(i) == 0;
            let destination_full = state.demand(j) == 0;
            if source_empty {
                i += 1;
            }
            if destination_full {
                j += 1;
            }
        }

        allocation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance(supplies: Vec<u64>, demands: Vec<u64>, costs: Vec<Vec<u64>>) -> ProblemInstance {
        ProblemInstance::new(supplies, demands, costs).unwrap()
    }

    #[test]
    fn test_two_by_two() {
        let problem = instance(vec![20, 30], vec![10, 40], vec![vec![2, 3], vec![4, 1]]);
        let solution = NorthwestCornerSolver::solve(&problem).unwrap();

        assert_eq!(solution.allocation().as_rows(), &[vec![10, 10], vec![0, 30]]);
        assert_eq!(solution.total_cost(), 80);
        assert!(!solution.is_degenerate());
        assert_eq!(solution.method(), Method::NorthwestCorner);
    }

    #[test]
    fn test_single_source() {
        let problem = instance(vec![10], vec![5, 5], vec![vec![1, 1]]);
        let solution = NorthwestCornerSolver::solve(&problem).unwrap();

        assert_eq!(solution.allocation().as_rows(), &[vec![5, 5]]);
        assert_eq!(solution.total_cost(), 10);
        assert!(!solution.is_degenerate());
    }

    #[test]
    fn test_empty_first_source() {
        // The first step ships nothing and only the row cursor moves.
        let problem = instance(vec![0, 10], vec![10, 0], vec![vec![1, 9], vec![9, 1]]);
        let solution = NorthwestCornerSolver::solve(&problem).unwrap();

        assert_eq!(solution.allocation().as_rows(), &[vec![0, 0], vec![10, 0]]);
        assert_eq!(solution.total_cost(), 90);
        assert_eq!(solution.allocation().positive_cells(), 1);
        assert!(solution.is_degenerate());
    }

    #[test]
    fn test_simultaneous_exhaustion_skips_diagonally() {
        // Source 0 and destination 0 run out together at (0, 0), so the
        // sweep jumps straight to (1, 1).
        let problem = instance(
            vec![5, 5],
            vec![5, 5],
            vec![vec![1, 2], vec![3, 4]],
        );
        let solution = NorthwestCornerSolver::solve(&problem).unwrap();

        assert_eq!(solution.allocation().as_rows(), &[vec![5, 0], vec![0, 5]]);
        assert_eq!(solution.total_cost(), 25);
        assert!(solution.is_degenerate());
    }

    #[test]
    fn test_ignores_costs() {
        let a = instance(vec![7, 3], vec![4, 6], vec![vec![1, 1], vec![1, 1]]);
        let b = instance(vec![7, 3], vec![4, 6], vec![vec![9, 0], vec![0, 9]]);
        let sa = NorthwestCornerSolver::solve(&a).unwrap();
        let sb = NorthwestCornerSolver::solve(&b).unwrap();
        assert_eq!(sa.allocation(), sb.allocation());
    }

    #[test]
    fn test_unbalanced_refused() {
        let problem = instance(vec![10, 10], vec![5, 5], vec![vec![1, 1], vec![1, 1]]);
        let err = NorthwestCornerSolver::solve(&problem).unwrap_err();
        assert_eq!(err.method, Method::NorthwestCorner);
        assert_eq!(err.total_supply, 20);
        assert_eq!(err.total_demand, 10);
    }
}
