use petgraph::algo::{connected_components, has_path_connecting};
use petgraph::graph::{NodeIndex, UnGraph};

use crate::models::{Board, CellId};

/// Road network of a board: one node per cell, one undirected edge per
/// explicit road between adjacent cells.
///
/// Node indices equal cell ids.
pub struct RoadGraph {
    graph: UnGraph<CellId, ()>,
}

impl RoadGraph {
    /// Build the road network of a board
    pub fn from_board(board: &Board) -> Self {
        let mut graph = UnGraph::with_capacity(board.cell_count(), board.cell_count() * 2);

        // Nodes are added in id order so that NodeIndex == CellId
        for cell in board.cells() {
            graph.add_node(cell.id);
        }

        for cell in board.cells() {
            for direction in cell.roads.directions() {
                // Roads pointing off the board are ignored
                if let Some(neighbor) = board.neighbor(cell.id, direction) {
                    // A road declared by either endpoint connects both
                    graph.update_edge(NodeIndex::new(cell.id), NodeIndex::new(neighbor), ());
                }
            }
        }

        RoadGraph { graph }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All roads as `(lower id, higher id)` pairs
    pub fn edges(&self) -> impl Iterator<Item = (CellId, CellId)> + '_ {
        self.graph.edge_indices().filter_map(move |edge| {
            let (a, b) = self.graph.edge_endpoints(edge)?;
            let (a, b) = (self.graph[a], self.graph[b]);
            Some((a.min(b), a.max(b)))
        })
    }

    /// Cells reachable in one step from `cell`, sorted by id
    pub fn neighbors(&self, cell: CellId) -> Vec<CellId> {
        if cell >= self.graph.node_count() {
            return Vec::new();
        }
        let mut neighbors: Vec<CellId> = self
            .graph
            .neighbors(NodeIndex::new(cell))
            .map(|node| self.graph[node])
            .collect();
        neighbors.sort_unstable();
        neighbors
    }

    /// Number of connected components, isolated cells included
    pub fn component_count(&self) -> usize {
        connected_components(&self.graph)
    }

    /// Whether a road path joins `from` and `to`
    pub fn is_connected(&self, from: CellId, to: CellId) -> bool {
        let count = self.graph.node_count();
        if from >= count || to >= count {
            return false;
        }
        has_path_connecting(&self.graph, NodeIndex::new(from), NodeIndex::new(to), None)
    }
}
