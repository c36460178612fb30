use crate::core::allocation::Allocation;
use petgraph::algo::{connected_components, is_cyclic_undirected};
use petgraph::graph::{NodeIndex, UnGraph};

/// A row or column of the transportation tableau.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    Source(usize),
    Destination(usize),
}

/// The occupied cells of an allocation as a bipartite graph.
///
/// Every source and every destination is a node; every positive cell
/// `(i, j)` is an edge between `Source(i)` and `Destination(j)` weighted by
/// the shipped amount. A basic feasible solution is exactly a spanning tree
/// of this graph: R + C - 1 edges, no cycle, one component. Degenerate
/// plans are forests with more than one component.
///
/// # Examples
///
/// ```
/// use transport_planner::core::allocation::Allocation;
/// use transport_planner::graph::basis::BasisGraph;
///
/// let allocation = Allocation::from_rows(vec![vec![10, 10], vec![0, 30]]);
/// let basis = BasisGraph::from_allocation(&allocation);
///
/// assert_eq!(basis.edge_count(), 3);
/// assert!(basis.is_spanning_tree());
/// ```
#[derive(Debug, Clone)]
pub struct BasisGraph {
    graph: UnGraph<Line, u64>,
    sources: usize,
    destinations: usize,
}

impl BasisGraph {
    pub fn from_allocation(allocation: &Allocation) -> Self {
        let sources = allocation.rows();
        let destinations = allocation.columns();
        let mut graph = UnGraph::with_capacity(sources + destinations, allocation.positive_cells());

        let source_nodes: Vec<NodeIndex> =
            (0..sources).map(|i| graph.add_node(Line::Source(i))).collect();
        let destination_nodes: Vec<NodeIndex> = (0..destinations)
            .map(|j| graph.add_node(Line::Destination(j)))
            .collect();

        for (i, j, amount) in allocation.cells() {
            if amount > 0 {
                graph.add_edge(source_nodes[i], destination_nodes[j], amount);
            }
        }

        Self {
            graph,
            sources,
            destinations,
        }
    }

    /// R + C.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of occupied cells.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Connected groups of lines. A full basis has one.
    pub fn component_count(&self) -> usize {
        connected_components(&self.graph)
    }

    /// Whether some occupied cells form a closed loop in the tableau.
    pub fn has_cycle(&self) -> bool {
        is_cyclic_undirected(&self.graph)
    }

    pub fn is_spanning_tree(&self) -> bool {
        self.edge_count() + 1 == self.sources + self.destinations
            && !self.has_cycle()
            && self.component_count() == 1
    }
}
