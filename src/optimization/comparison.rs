use crate::core::problem::ProblemInstance;
use crate::optimization::engine::TransportEngine;
use crate::optimization::feasibility::Infeasible;
use crate::optimization::solution::Solution;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Both construction heuristics run side by side on one instance.
#[derive(Debug, Clone, Serialize)]
pub struct MethodComparison {
    /// Identifier of this report.
    id: Uuid,
    /// When the report was produced.
    generated_at: DateTime<Utc>,
    northwest_corner: Solution,
    least_cost: Solution,
}

impl MethodComparison {
    /// Solve with both methods.
    ///
    /// Both share the same feasibility gate, so an unbalanced instance is
    /// reported once, as a Northwest Corner failure.
    pub fn run(instance: &ProblemInstance) -> Result<Self, Infeasible> {
        let northwest_corner = TransportEngine::solve_northwest_corner(instance)?;
        let least_cost = TransportEngine::solve_least_cost(instance)?;
        Ok(Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            northwest_corner,
            least_cost,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn northwest_corner(&self) -> &Solution {
        &self.northwest_corner
    }

    pub fn least_cost(&self) -> &Solution {
        &self.least_cost
    }

    /// The cheaper plan. Least Cost only wins when strictly cheaper.
    pub fn cheapest(&self) -> &Solution {
        if self.least_cost.total_cost() < self.northwest_corner.total_cost() {
            &self.least_cost
        } else {
            &self.northwest_corner
        }
    }

    /// Northwest Corner cost minus Least Cost cost. Negative when Least Cost
    /// produced the more expensive plan. Clamped to the `i128` range.
    pub fn cost_difference(&self) -> i128 {
        let northwest = self.northwest_corner.total_cost();
        let least = self.least_cost.total_cost();
        if northwest >= least {
            i128::try_from(northwest - least).unwrap_or(i128::MAX)
        } else {
            i128::try_from(least - northwest).map_or(i128::MIN, |d| -d)
        }
    }

    /// Cost difference as a percentage of the Northwest Corner cost.
    pub fn improvement_percent(&self) -> f64 {
        let baseline = self.northwest_corner.total_cost();
        if baseline == 0 {
            return 0.0;
        }
        let baseline = baseline as f64;
        (baseline - self.least_cost.total_cost() as f64) * 100.0 / baseline
    }
}

impl std::fmt::Display for MethodComparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.northwest_corner)?;
        writeln!(f, "{}", self.least_cost)?;
        writeln!(f, "=== Comparison ===")?;
        writeln!(f, "Cheapest:       {}", self.cheapest().method())?;
        writeln!(f, "Difference:     {}", self.cost_difference())?;
        writeln!(f, "Improvement %:  {:.1}%", self.improvement_percent())
    }
}
