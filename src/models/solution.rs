// Solution models returned to callers of the solvers

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Board, CellId, Distance, PetIndex};

/// What the car does when it reaches a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveAction {
    /// Starting position
    Init,
    Pickup,
    Deliver,
}

impl fmt::Display for MoveAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoveAction::Init => "init",
            MoveAction::Pickup => "pickup",
            MoveAction::Deliver => "deliver",
        };
        f.write_str(name)
    }
}

/// One stop of the car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarMove {
    pub cell: CellId,
    pub action: MoveAction,

    /// Distance driven from the start up to and including this stop
    pub cumulative_distance: Distance,
}

impl CarMove {
    pub fn new(cell: CellId, action: MoveAction, cumulative_distance: Distance) -> Self {
        Self {
            cell,
            action,
            cumulative_distance,
        }
    }
}

/// A [`CarMove`] annotated with the pet it concerns
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailedMove {
    #[serde(flatten)]
    pub car_move: CarMove,
    pub column: usize,
    pub row: usize,
    pub pet: Option<PetIndex>,
    pub pet_name: Option<String>,
}

/// Result of a solve: the optimal total distance and the stops of the car.
///
/// A `None` total means the puzzle has no route; `moves` is then empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub total_distance: Option<Distance>,
    pub moves: Vec<CarMove>,
}

impl Solution {
    pub fn new(total_distance: Distance, moves: Vec<CarMove>) -> Self {
        Self {
            total_distance: Some(total_distance),
            moves,
        }
    }

    /// The "no route exists" outcome
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_solved(&self) -> bool {
        self.total_distance.is_some()
    }

    /// Annotates every move with its grid position and pet
    pub fn detailed(&self, board: &Board) -> Vec<DetailedMove> {
        self.moves
            .iter()
            .map(|car_move| {
                let (column, row) = board.position(car_move.cell);
                let request = match car_move.action {
                    MoveAction::Init => None,
                    _ => board.request_at(car_move.cell),
                };
                DetailedMove {
                    car_move: *car_move,
                    column,
                    row,
                    pet: request.map(|r| r.index),
                    pet_name: request.map(|r| r.name.clone()),
                }
            })
            .collect()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.total_distance {
            None => write!(f, "no solution"),
            Some(total) => {
                write!(f, "total distance {}:", total)?;
                for (step, car_move) in self.moves.iter().enumerate() {
                    write!(
                        f,
                        "\n  step {}: {} at cell {} (distance {})",
                        step, car_move.action, car_move.cell, car_move.cumulative_distance
                    )?;
                }
                Ok(())
            }
        }
    }
}
