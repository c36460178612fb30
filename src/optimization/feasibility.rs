use crate::core::method::Method;
use serde::Serialize;
use thiserror::Error;

/// Sum of quantities, widened so that any number of `u64` entries fits.
pub fn quantity_total(quantities: &[u64]) -> u128 {
    quantities.iter().map(|&q| u128::from(q)).sum()
}

/// Whether total supply equals total demand.
///
/// Both heuristics require a balanced problem; on an unbalanced one they
/// can never exhaust supply and demand together.
pub fn is_balanced(supplies: &[u64], demands: &[u64]) -> bool {
    quantity_total(supplies) == quantity_total(demands)
}

/// A solve refused because the problem is unbalanced.
///
/// Raised before any allocation is attempted, so no partial plan exists.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error(
    "can't be solved by {method} method: total supply {total_supply} does not equal total demand {total_demand}"
)]
pub struct Infeasible {
    pub method: Method,
    pub total_supply: u128,
    pub total_demand: u128,
}
