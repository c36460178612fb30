pub mod comparison;
pub mod cost;
pub mod degeneracy;
pub mod engine;
pub mod feasibility;
pub mod least_cost;
pub mod northwest;
pub mod solution;
pub mod solver;
