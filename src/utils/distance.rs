// Distance calculation utilities

use crate::models::{Board, CellId, Distance};

use super::road_network::RoadGraph;

/// Stored for pairs of cells with no road path between them
const UNREACHABLE: Distance = Distance::MAX;

/// All-pairs shortest hop counts over the road network of a board.
///
/// Sized from the board it was built for; never modified after `build`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    size: usize,
    distances: Vec<Distance>,
}

impl DistanceMatrix {
    /// Build the matrix for a board
    pub fn from_board(board: &Board) -> Self {
        Self::from_graph(&RoadGraph::from_board(board))
    }

    /// Floyd-Warshall over the unit-weight road graph
    pub fn from_graph(graph: &RoadGraph) -> Self {
        let size = graph.node_count();
        let mut distances = vec![UNREACHABLE; size * size];

        for i in 0..size {
            distances[i * size + i] = 0;
        }
        for (a, b) in graph.edges() {
            distances[a * size + b] = 1;
            distances[b * size + a] = 1;
        }

        for k in 0..size {
            for i in 0..size {
                let via_k = distances[i * size + k];
                if via_k == UNREACHABLE {
                    continue;
                }
                for j in 0..size {
                    let k_to_j = distances[k * size + j];
                    if k_to_j == UNREACHABLE {
                        continue;
                    }
                    let candidate = via_k + k_to_j;
                    if candidate < distances[i * size + j] {
                        distances[i * size + j] = candidate;
                    }
                }
            }
        }

        DistanceMatrix { size, distances }
    }

    /// Number of cells covered
    pub fn size(&self) -> usize {
        self.size
    }

    /// Shortest hop count from `from` to `to`, `None` if unreachable or
    /// either id is off the board
    pub fn get(&self, from: CellId, to: CellId) -> Option<Distance> {
        if from >= self.size || to >= self.size {
            return None;
        }
        match self.distances[from * self.size + to] {
            UNREACHABLE => None,
            distance => Some(distance),
        }
    }

    pub fn is_reachable(&self, from: CellId, to: CellId) -> bool {
        self.get(from, to).is_some()
    }
}
