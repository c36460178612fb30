use crate::core::allocation::Allocation;
use crate::core::method::Method;
use crate::core::problem::ProblemInstance;
use crate::optimization::feasibility::{is_balanced, Infeasible};
use crate::optimization::solution::{Solution, SolutionBuilder};

/// Remaining supply and demand during a solve.
///
/// Private to a single solve; the instance itself is never touched.
#[derive(Debug, Clone)]
pub struct WorkingState {
    supplies: Vec<u64>,
    demands: Vec<u64>,
}

impl WorkingState {
    pub fn new(instance: &ProblemInstance) -> Self {
        Self {
            supplies: instance.supplies().to_vec(),
            demands: instance.demands().to_vec(),
        }
    }

    pub fn supply(&self, source: usize) -> u64 {
        self.supplies[source]
    }

    pub fn demand(&self, destination: usize) -> u64 {
        self.demands[destination]
    }

    /// Whether the route is still usable: its source has stock left and its
    /// destination still needs some.
    pub fn is_open(&self, source: usize, destination: usize) -> bool {
        self.supplies[source] > 0 && self.demands[destination] > 0
    }

    pub fn has_remaining(&self) -> bool {
        self.supplies.iter().any(|&s| s > 0) && self.demands.iter().any(|&d| d > 0)
    }

    /// Ship as much as possible along a route and return the amount moved.
    pub fn ship(&mut self, source: usize, destination: usize) -> u64 {
        let amount = self.supplies[source].min(self.demands[destination]);
        self.supplies[source] -= amount;
        self.demands[destination] -= amount;
        amount
    }
}

/// A construction heuristic for an initial transportation plan.
///
/// Implementors only decide where to ship; the feasibility gate and the
/// assembly of the final [`Solution`] are shared.
pub trait Solver {
    const METHOD: Method;

    /// Fill an allocation by drawing down `state`.
    ///
    /// Only called for balanced instances.
    fn allocate(instance: &ProblemInstance, state: &mut WorkingState) -> Allocation;

    /// Check feasibility, allocate, then build the solution.
    fn solve(instance: &ProblemInstance) -> Result<Solution, Infeasible> {
        if !is_balanced(instance.supplies(), instance.demands()) {
            let err = Infeasible {
                method: Self::METHOD,
                total_supply: instance.total_supply(),
                total_demand: instance.total_demand(),
            };
            log::warn!("{}", err);
            return Err(err);
        }

        let mut state = WorkingState::new(instance);
        let allocation = Self::allocate(instance, &mut state);
        let solution = SolutionBuilder::new(instance, Self::METHOD).build(allocation);

        log::info!(
            "{} solved {}x{} problem: total cost {}, {}",
            Self::METHOD,
            instance.sources(),
            instance.destinations(),
            solution.total_cost(),
            if solution.is_degenerate() {
                "degenerate"
            } else {
                "non-degenerate"
            }
        );
        Ok(solution)
    }
}
