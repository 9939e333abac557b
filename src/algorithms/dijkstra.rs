use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::sync::atomic::Ordering::Relaxed;
use std::sync::{atomic::AtomicBool, Arc};
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::algorithms::reconstruct::reconstruct_path;
use crate::algorithms::SolutionFinder;
use crate::config::SolverConfig;
use crate::models::{
    Board, Distance, PetStatus, SearchKey, SearchState, Solution, StateId, StatusVector,
};
use crate::utils::distance::DistanceMatrix;
use crate::utils::road_network::RoadGraph;

// Frontier entry for the priority queue
#[derive(PartialEq, Eq, Debug)]
struct QueueState {
    distance: Distance,
    key: SearchKey,
    state: StateId,
}

// Implement Ord for the frontier entry
impl Ord for QueueState {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order so we get a min-heap; ties fall back to the key
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.key.cmp(&self.key))
    }
}

impl PartialOrd for QueueState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Counters collected during one search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Frontier entries popped, stale ones included
    pub extracted: u64,
    pub expanded: u64,
    pub stale_skipped: u64,
    /// States added to the arena, origin included
    pub states_created: u64,
    pub peak_frontier: usize,
    pub cancelled: bool,
    pub elapsed: Duration,
}

/// Optimal pickup/delivery search over (status vector, position, capacity)
/// states, expanded in order of distance driven.
pub struct DijkstraFinder<'a> {
    board: &'a Board,
    distances: DistanceMatrix,
    capacity: u8,
    progress_interval: u64,
    cancel: Option<Arc<AtomicBool>>,
    arena: Vec<SearchState>,
    terminal: Option<StateId>,
    total_distance: Option<Distance>,
    stats: SearchStats,
}

impl<'a> DijkstraFinder<'a> {
    /// Create a finder for `board`, building its distance matrix
    pub fn new(board: &'a Board, config: &SolverConfig) -> Self {
        let graph = RoadGraph::from_board(board);
        let components = graph.component_count();
        if components > 1 {
            debug!("Road network has {} separate components", components);
        }

        DijkstraFinder {
            board,
            distances: DistanceMatrix::from_graph(&graph),
            capacity: config.capacity,
            progress_interval: config.progress_interval,
            cancel: None,
            arena: Vec::new(),
            terminal: None,
            total_distance: None,
            stats: SearchStats::default(),
        }
    }

    /// Poll `flag` before each expansion and give up once it is set
    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().map_or(false, |flag| flag.load(Relaxed))
    }

    fn search(&mut self) -> Option<(StateId, Distance)> {
        let board = self.board;
        let pet_count = board.pet_count();
        let mut best: HashMap<SearchKey, Distance> = HashMap::new();
        let mut priority_queue = BinaryHeap::new();

        let origin = SearchKey::new(StatusVector::new(), board.car(), self.capacity);
        self.arena.push(SearchState {
            key: origin,
            distance: 0,
            predecessor: None,
        });
        self.stats.states_created += 1;
        best.insert(origin, 0);
        priority_queue.push(QueueState {
            distance: 0,
            key: origin,
            state: 0,
        });

        while let Some(QueueState {
            distance,
            key,
            state,
        }) = priority_queue.pop()
        {
            self.stats.extracted += 1;
            if self.progress_interval > 0 && self.stats.extracted % self.progress_interval == 0 {
                debug!(
                    "Extracted {} states, frontier holds {}, current distance {}",
                    self.stats.extracted,
                    priority_queue.len(),
                    distance
                );
            }

            // Skip entries superseded by a shorter route to the same key
            if best.get(&key) != Some(&distance) {
                self.stats.stale_skipped += 1;
                continue;
            }

            if key.status.all_delivered(pet_count) {
                return Some((state, distance));
            }

            if self.is_cancelled() {
                self.stats.cancelled = true;
                return None;
            }
            self.stats.expanded += 1;

            for pet in board.pets() {
                let (target, status, capacity) = match key.status.get(pet.index) {
                    PetStatus::Pending if key.capacity > 0 => (
                        pet.pickup,
                        key.status.with(pet.index, PetStatus::Carried),
                        key.capacity - 1,
                    ),
                    PetStatus::Carried => (
                        pet.dropoff,
                        key.status.with(pet.index, PetStatus::Delivered),
                        key.capacity + 1,
                    ),
                    _ => continue,
                };

                // Unreachable targets generate no successor
                let Some(step) = self.distances.get(key.position, target) else {
                    continue;
                };
                let Some(next_distance) = distance.checked_add(step) else {
                    continue;
                };

                let next_key = SearchKey::new(status, target, capacity);
                let improves = best
                    .get(&next_key)
                    .map_or(true, |known| next_distance < *known);
                if !improves {
                    continue;
                }

                let next_state = self.arena.len();
                self.arena.push(SearchState {
                    key: next_key,
                    distance: next_distance,
                    predecessor: Some(state),
                });
                self.stats.states_created += 1;
                best.insert(next_key, next_distance);
                priority_queue.push(QueueState {
                    distance: next_distance,
                    key: next_key,
                    state: next_state,
                });
            }

            self.stats.peak_frontier = self.stats.peak_frontier.max(priority_queue.len());
        }

        None
    }
}

impl SolutionFinder for DijkstraFinder<'_> {
    fn solve(&mut self) -> Option<Distance> {
        let start_time = Instant::now();
        self.arena.clear();
        self.terminal = None;
        self.total_distance = None;
        self.stats = SearchStats::default();

        if let Some((terminal, distance)) = self.search() {
            self.terminal = Some(terminal);
            self.total_distance = Some(distance);
        }
        self.stats.elapsed = start_time.elapsed();

        match self.total_distance {
            Some(total) => info!(
                "Found route of distance {} for {} pets ({} states expanded in {:.2?})",
                total,
                self.board.pet_count(),
                self.stats.expanded,
                self.stats.elapsed
            ),
            None if self.stats.cancelled => info!(
                "Search cancelled after {} expansions",
                self.stats.expanded
            ),
            None => info!(
                "No route delivers all {} pets ({} states expanded)",
                self.board.pet_count(),
                self.stats.expanded
            ),
        }
        debug!("Search stats: {:?}", self.stats);

        self.total_distance
    }

    fn solution(&self) -> Solution {
        match (self.total_distance, self.terminal) {
            (Some(total), Some(terminal)) => {
                Solution::new(total, reconstruct_path(self.board, &self.arena, terminal))
            }
            _ => Solution::none(),
        }
    }

    fn solution_moves_count(&self) -> Option<Distance> {
        self.total_distance
    }
}
