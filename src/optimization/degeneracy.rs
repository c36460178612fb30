use crate::core::allocation::Allocation;

/// Whether an allocation has fewer positive cells than a basic feasible
/// solution needs (`rows + columns - 1`).
///
/// Zero-valued cells never count, even when a solver recorded them.
pub fn is_degenerate(allocation: &Allocation, rows: usize, columns: usize) -> bool {
    allocation.positive_cells() + 1 < rows + columns
}
