//! # transport-planner
//!
//! Initial basic feasible solutions for the transportation problem.
//!
//! Given the supply at each source, the demand at each destination and a
//! unit cost per route, this crate builds a shipment plan that meets every
//! supply and demand constraint using the Northwest Corner or the Least Cost
//! rule, and reports the plan's total cost and whether it is degenerate.
//!
//! ## Architecture
//!
//! - **core** — Problem instances, allocation matrices, method identifiers
//! - **optimization** — Feasibility gate, the two heuristics, cost and degeneracy evaluation
//! - **graph** — Basis structure of an allocation (spanning tree / forest)
//! - **simulation** — Random balanced instance generation

pub mod core;
pub mod graph;
pub mod optimization;
pub mod simulation;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::allocation::Allocation;
    pub use crate::core::method::Method;
    pub use crate::core::problem::{ProblemError, ProblemInstance};
    pub use crate::graph::basis::BasisGraph;
    pub use crate::optimization::comparison::MethodComparison;
    pub use crate::optimization::engine::TransportEngine;
    pub use crate::optimization::feasibility::Infeasible;
    pub use crate::optimization::solution::Solution;
}
