use crate::core::allocation::Allocation;
use crate::core::method::Method;
use crate::core::problem::ProblemInstance;
use crate::optimization::solver::{Solver, WorkingState};

/// Least Cost (matrix minimum) rule.
///
/// Repeatedly picks the cheapest route that is still open, meaning its
/// source has supply left and its destination still has demand, and ships
/// as much as possible along it.
///
/// Ties go to the first cheapest cell in row-major order: the running
/// minimum is only replaced by a strictly smaller cost.
pub struct LeastCostSolver;

impl LeastCostSolver {
    /// Cheapest open route in row-major order, or `None` once every source
    /// or every destination is exhausted.
    fn cheapest_open_route(
        instance: &ProblemInstance,
        state: &WorkingState,
    ) -> Option<(usize, usize)> {
        let mut best: Option<(usize, usize, u64)> = None;
        for i in 0..instance.sources() {
            for j in 0..instance.destinations() {
                if !state.is_open(i, j) {
                    continue;
                }
                let cost = instance.cost(i, j);
                match best {
                    Some((_, _, min)) if cost >= min => {}
                    _ => best = Some((i, j, cost)),
                }
            }
        }
        best.map(|(i, j, _)| (i, j))
    }
}

impl Solver for LeastCostSolver {
    const METHOD: Method = Method::LeastCost;

    fn allocate(instance: &ProblemInstance, state: &mut WorkingState) -> Allocation {
        let mut allocation = Allocation::zeros(instance.sources(), instance.destinations());

        while state.has_remaining() {
            let Some((i, j)) = Self::cheapest_open_route(instance, state) else {
                break;
            };
            let amount = state.ship(i, j);
            allocation.set(i, j, amount);
            log::debug!(
                "least cost: ship {} along ({}, {}) at unit cost {}",
                amount,
                i,
                j,
                instance.cost(i, j)
            );
        }

        allocation
    }
}
