use crate::core::allocation::Allocation;

/// Total shipment cost: the sum over all routes of units times unit cost.
///
/// Each term is computed in `u128`, where a `u64` quantity times a `u64`
/// cost always fits. The running sum saturates at `u128::MAX`, which needs
/// more than `u64::MAX` units shipped at near-maximal unit costs.
pub fn total_cost(allocation: &Allocation, costs: &[Vec<u64>]) -> u128 {
    allocation
        .cells()
        .map(|(i, j, amount)| u128::from(amount) * u128::from(costs[i][j]))
        .fold(0u128, u128::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_cost() {
        let allocation = Allocation::from_rows(vec![vec![10, 10], vec![0, 30]]);
        let costs = vec![vec![2, 3], vec![4, 1]];
        assert_eq!(total_cost(&allocation, &costs), 80);
    }

    #[test]
    fn test_empty_allocation_costs_nothing() {
        let allocation = Allocation::zeros(2, 2);
        let costs = vec![vec![7, 7], vec![7, 7]];
        assert_eq!(total_cost(&allocation, &costs), 0);
    }

    #[test]
    fn test_large_quantities_and_costs() {
        let allocation = Allocation::from_rows(vec![vec![10_000_000_000]]);
        let costs = vec![vec![10_000_000_000]];
        assert_eq!(total_cost(&allocation, &costs), 100_000_000_000_000_000_000);

        let allocation = Allocation::from_rows(vec![vec![u64::MAX, u64::MAX]]);
        let costs = vec![vec![u64::MAX, 1]];
        let max = u128::from(u64::MAX);
        assert_eq!(total_cost(&allocation, &costs), max * max + max);
    }
}
