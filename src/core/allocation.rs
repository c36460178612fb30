use crate::optimization::feasibility::quantity_total;
use serde::Serialize;
use std::fmt;

/// Units shipped along each source–destination route.
///
/// `get(i, j)` is the quantity sent from source `i` to destination `j`.
/// A completed solve of a balanced instance has row sums equal to the
/// original supplies and column sums equal to the original demands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Allocation {
    cells: Vec<Vec<u64>>,
}

impl Allocation {
    /// An all-zero allocation with `rows` sources and `columns` destinations.
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self {
            cells: vec![vec![0; columns]; rows],
        }
    }

    /// Wrap an existing matrix. Rows are assumed to share one length.
    pub fn from_rows(cells: Vec<Vec<u64>>) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn columns(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn get(&self, row: usize, column: usize) -> u64 {
        self.cells[row][column]
    }

    pub(crate) fn set(&mut self, row: usize, column: usize, amount: u64) {
        self.cells[row][column] = amount;
    }

    pub fn as_rows(&self) -> &[Vec<u64>] {
        &self.cells
    }

    /// Total shipped out of a source.
    pub fn row_sum(&self, row: usize) -> u128 {
        quantity_total(&self.cells[row])
    }

    /// Total shipped into a destination.
    pub fn column_sum(&self, column: usize) -> u128 {
        self.cells.iter().map(|row| u128::from(row[column])).sum()
    }

    /// All cells as `(row, column, amount)`, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u64)> + '_ {
        self.cells.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .map(move |(j, &amount)| (i, j, amount))
        })
    }

    /// Number of cells carrying a strictly positive shipment.
    pub fn positive_cells(&self) -> usize {
        self.cells().filter(|&(_, _, amount)| amount > 0).count()
    }

    /// Sum of all shipments.
    pub fn total_shipped(&self) -> u128 {
        self.cells.iter().map(|row| quantity_total(row)).sum()
    }
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<12}", "")?;
        for j in 0..self.columns() {
            write!(f, " {:>8}", format!("D{}", j + 1))?;
        }
        writeln!(f)?;
        for (i, row) in self.cells.iter().enumerate() {
            write!(f, "{:<12}", format!("Source {}", i + 1))?;
            for amount in row {
                write!(f, " {:>8}", amount)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
