use crate::optimization::feasibility::{is_balanced, quantity_total};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a problem instance does not have a rectangular shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProblemError {
    #[error("a transportation problem needs at least one source")]
    EmptySources,
    #[error("a transportation problem needs at least one destination")]
    EmptyDestinations,
    #[error("cost matrix has {found} rows, expected one per source ({expected})")]
    CostRowCount { expected: usize, found: usize },
    #[error("cost row {row} has {found} entries, expected one per destination ({expected})")]
    CostRowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A balanced or unbalanced transportation problem.
///
/// Holds the supply available at each source, the demand required at each
/// destination and the unit cost of shipping along every source–destination
/// route. The shape is checked once at construction: `costs` has one row per
/// source and every row has one entry per destination.
///
/// Instances are immutable; solvers work on private copies of the supply and
/// demand vectors.
///
/// # Examples
///
/// ```
/// use transport_planner::core::problem::ProblemInstance;
///
/// let instance = ProblemInstance::new(
///     vec![20, 30],
///     vec![10, 40],
///     vec![vec![2, 3], vec![4, 1]],
/// ).unwrap();
///
/// assert_eq!(instance.sources(), 2);
/// assert_eq!(instance.destinations(), 2);
/// assert!(instance.is_balanced());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProblem")]
pub struct ProblemInstance {
    supplies: Vec<u64>,
    demands: Vec<u64>,
    costs: Vec<Vec<u64>>,
}

/// Unchecked wire form of [`ProblemInstance`].
#[derive(Deserialize)]
struct RawProblem {
    supplies: Vec<u64>,
    demands: Vec<u64>,
    costs: Vec<Vec<u64>>,
}

impl TryFrom<RawProblem> for ProblemInstance {
    type Error = ProblemError;

    fn try_from(raw: RawProblem) -> Result<Self, Self::Error> {
        ProblemInstance::new(raw.supplies, raw.demands, raw.costs)
    }
}

impl ProblemInstance {
    /// Create a new instance, rejecting empty dimensions and ragged cost rows.
    pub fn new(
        supplies: Vec<u64>,
        demands: Vec<u64>,
        costs: Vec<Vec<u64>>,
    ) -> Result<Self, ProblemError> {
        if supplies.is_empty() {
            return Err(ProblemError::EmptySources);
        }
        if demands.is_empty() {
            return Err(ProblemError::EmptyDestinations);
        }
        if costs.len() != supplies.len() {
            return Err(ProblemError::CostRowCount {
                expected: supplies.len(),
                found: costs.len(),
            });
        }
        if let Some((row, found)) = costs
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != demands.len())
        {
            return Err(ProblemError::CostRowLength {
                row,
                expected: demands.len(),
                found,
            });
        }

        Ok(Self {
            supplies,
            demands,
            costs,
        })
    }

    /// Number of sources (R).
    pub fn sources(&self) -> usize {
        self.supplies.len()
    }

    /// Number of destinations (C).
    pub fn destinations(&self) -> usize {
        self.demands.len()
    }

    pub fn supplies(&self) -> &[u64] {
        &self.supplies
    }

    pub fn demands(&self) -> &[u64] {
        &self.demands
    }

    pub fn costs(&self) -> &[Vec<u64>] {
        &self.costs
    }

    /// Unit cost of the route from `source` to `destination`.
    pub fn cost(&self, source: usize, destination: usize) -> u64 {
        self.costs[source][destination]
    }

    /// Total supply, widened to `u128` so it cannot overflow.
    pub fn total_supply(&self) -> u128 {
        quantity_total(&self.supplies)
    }

    pub fn total_demand(&self) -> u128 {
        quantity_total(&self.demands)
    }

    /// Whether total supply equals total demand.
    pub fn is_balanced(&self) -> bool {
        is_balanced(&self.supplies, &self.demands)
    }

    /// Number of positive cells a non-degenerate basic solution has: R + C - 1.
    pub fn basis_size(&self) -> usize {
        self.sources() + self.destinations() - 1
    }
}
