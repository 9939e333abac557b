// Random board generator used by benchmarks and property tests

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::SolverError;
use crate::models::{CellId, Direction, ObjectInfo, RawBoard, Roads};

const PET_NAMES: [&str; 12] = [
    "Husky",
    "Cockatiel",
    "Hedgehog",
    "Tabby",
    "Ferret",
    "Siamese",
    "Chameleon",
    "Turtle",
    "Dachsund",
    "Poodle",
    "Rabbit",
    "Parrot",
];

/// Shape of a generated board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardShape {
    pub columns: usize,
    pub rows: usize,
    pub pets: usize,
    /// Roads added on top of the spanning tree; duplicates are absorbed
    pub extra_roads: usize,
}

impl BoardShape {
    pub fn new(columns: usize, rows: usize, pets: usize, extra_roads: usize) -> Self {
        Self {
            columns,
            rows,
            pets,
            extra_roads,
        }
    }
}

fn pet_name(index: usize) -> String {
    match PET_NAMES.get(index) {
        Some(name) => name.to_string(),
        None => format!("Pet{}", index),
    }
}

/// Generate a board whose roads connect every cell.
///
/// Roads are a random spanning tree plus `extra_roads` random roads. The car,
/// pets and houses are placed on distinct random cells. The same seed and
/// shape always give the same board.
pub fn generate_board(shape: BoardShape, seed: u64) -> Result<RawBoard, SolverError> {
    let BoardShape {
        columns,
        rows,
        pets,
        extra_roads,
    } = shape;
    let cell_count = columns * rows;
    if cell_count == 0 || 1 + 2 * pets > cell_count {
        return Err(SolverError::malformed(format!(
            "cannot place a car and {} pets on a {}x{} board",
            pets, columns, rows
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut roads = vec![Roads::default(); cell_count];

    // Randomised Prim over the grid
    let mut visited = vec![false; cell_count];
    let start = rng.gen_range(0..cell_count);
    visited[start] = true;
    let mut frontier: Vec<(CellId, Direction)> = Direction::ALL
        .iter()
        .map(|direction| (start, *direction))
        .collect();
    while !frontier.is_empty() {
        let (from, direction) = frontier.swap_remove(rng.gen_range(0..frontier.len()));
        let Some(to) = step(columns, rows, from, direction) else {
            continue;
        };
        if visited[to] {
            continue;
        }
        visited[to] = true;
        connect(&mut roads, from, to, direction);
        frontier.extend(Direction::ALL.iter().map(|direction| (to, *direction)));
    }

    for _ in 0..extra_roads {
        let from = rng.gen_range(0..cell_count);
        let direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
        if let Some(to) = step(columns, rows, from, direction) {
            connect(&mut roads, from, to, direction);
        }
    }

    let mut names = vec!["dot".to_string(); cell_count];
    let mut placement: Vec<CellId> = (0..cell_count).collect();
    placement.shuffle(&mut rng);
    names[placement[0]] = "cRight".to_string();
    for pet in 0..pets {
        let name = pet_name(pet);
        names[placement[1 + 2 * pet]] = format!("p{}", name);
        names[placement[2 + 2 * pet]] = format!("h{}", name);
    }

    let mut cells: Vec<Vec<ObjectInfo>> = Vec::with_capacity(columns);
    let mut objects = names.into_iter().zip(roads);
    for _ in 0..columns {
        cells.push(
            objects
                .by_ref()
                .take(rows)
                .map(|(name, roads)| ObjectInfo::new(name, roads))
                .collect(),
        );
    }

    Ok(RawBoard::new(columns, rows, cells))
}

// Neighbour of `id` on a columns x rows grid with column-major ids
fn step(columns: usize, rows: usize, id: CellId, direction: Direction) -> Option<CellId> {
    let (column, row) = (id / rows, id % rows);
    let (dc, dr) = direction.offset();
    let column = column.checked_add_signed(dc)?;
    let row = row.checked_add_signed(dr)?;
    (column < columns && row < rows).then(|| column * rows + row)
}

fn connect(roads: &mut [Roads], from: CellId, to: CellId, direction: Direction) {
    match direction {
        Direction::Up => {
            roads[from].up = true;
            roads[to].down = true;
        }
        Direction::Down => {
            roads[from].down = true;
            roads[to].up = true;
        }
        Direction::Left => {
            roads[from].left = true;
            roads[to].right = true;
        }
        Direction::Right => {
            roads[from].right = true;
            roads[to].left = true;
        }
    }
}
