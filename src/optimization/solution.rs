use crate::core::allocation::Allocation;
use crate::core::method::Method;
use crate::core::problem::ProblemInstance;
use crate::optimization::cost::total_cost;
use crate::optimization::degeneracy::is_degenerate;
use serde::Serialize;

/// A feasible shipment plan produced by one of the construction heuristics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    /// Units shipped along each route.
    allocation: Allocation,
    /// Sum of units times unit cost over all routes.
    total_cost: u128,
    /// Fewer than R + C - 1 positive cells.
    is_degenerate: bool,
    /// Heuristic that produced the plan.
    method: Method,
}

impl Solution {
    pub fn allocation(&self) -> &Allocation {
        &self.allocation
    }

    pub fn total_cost(&self) -> u128 {
        self.total_cost
    }

    pub fn is_degenerate(&self) -> bool {
        self.is_degenerate
    }

    pub fn method(&self) -> Method {
        self.method
    }
}

/// Assembles a [`Solution`] from a finished allocation.
pub struct SolutionBuilder<'a> {
    instance: &'a ProblemInstance,
    method: Method,
}

impl<'a> SolutionBuilder<'a> {
    pub fn new(instance: &'a ProblemInstance, method: Method) -> Self {
        Self { instance, method }
    }

    pub fn build(self, allocation: Allocation) -> Solution {
        let total_cost = total_cost(&allocation, self.instance.costs());
        let is_degenerate = is_degenerate(
            &allocation,
            self.instance.sources(),
            self.instance.destinations(),
        );
        Solution {
            allocation,
            total_cost,
            is_degenerate,
            method: self.method,
        }
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Solution using: {} ===", self.method)?;
        write!(f, "{}", self.allocation)?;
        writeln!(f, "Units Shipped:  {}", self.allocation.total_shipped())?;
        writeln!(f, "Total Cost:     {}", self.total_cost)?;
        writeln!(
            f,
            "Solution Type:  {}",
            if self.is_degenerate {
                "Degenerate"
            } else {
                "Non-Degenerate"
            }
        )
    }
}
