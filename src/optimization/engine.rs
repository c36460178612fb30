use crate::core::method::Method;
use crate::core::problem::ProblemInstance;
use crate::optimization::feasibility::Infeasible;
use crate::optimization::least_cost::LeastCostSolver;
use crate::optimization::northwest::NorthwestCornerSolver;
use crate::optimization::solution::Solution;
use crate::optimization::solver::Solver;

/// Entry point for building initial transportation plans.
///
/// Every call is self-contained: it copies the supply and demand it needs,
/// does no I/O and keeps nothing between calls.
///
/// # Examples
///
/// ```
/// use transport_planner::prelude::*;
///
/// let instance = ProblemInstance::new(
///     vec![20, 30],
///     vec![10, 40],
///     vec![vec![2, 3], vec![4, 1]],
/// ).unwrap();
///
/// let solution = TransportEngine::solve_least_cost(&instance).unwrap();
/// assert_eq!(solution.total_cost(), 80);
/// assert!(!solution.is_degenerate());
/// ```
pub struct TransportEngine;

impl TransportEngine {
    /// Build a plan with the Northwest Corner rule.
    pub fn solve_northwest_corner(instance: &ProblemInstance) -> Result<Solution, Infeasible> {
        NorthwestCornerSolver::solve(instance)
    }

    /// Build a plan with the Least Cost rule.
    pub fn solve_least_cost(instance: &ProblemInstance) -> Result<Solution, Infeasible> {
        LeastCostSolver::solve(instance)
    }

    /// Build a plan with the given method.
    pub fn solve(instance: &ProblemInstance, method: Method) -> Result<Solution, Infeasible> {
        match method {
            Method::NorthwestCorner => Self::solve_northwest_corner(instance),
            Method::LeastCost => Self::solve_least_cost(instance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_matches_direct_calls() {
        let instance = ProblemInstance::new(
            vec![7, 5, 8],
            vec![6, 9, 5],
            vec![vec![4, 6, 8], vec![5, 2, 7], vec![3, 9, 1]],
        )
        .unwrap();

        for method in Method::all() {
            let solution = TransportEngine::solve(&instance, method).unwrap();
            assert_eq!(solution.method(), method);
        }
        assert_eq!(
            TransportEngine::solve(&instance, Method::LeastCost).unwrap(),
            TransportEngine::solve_least_cost(&instance).unwrap()
        );
    }

    #[test]
    fn test_both_methods_refuse_unbalanced() {
        let instance =
            ProblemInstance::new(vec![10, 10], vec![5, 5], vec![vec![1, 2], vec![3, 4]]).unwrap();
        for method in Method::all() {
            let err = TransportEngine::solve(&instance, method).unwrap_err();
            assert_eq!(err.method, method);
            assert!(err.to_string().contains(method.label()));
        }
    }
}
