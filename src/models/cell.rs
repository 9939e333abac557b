// Cell model representing one position of the puzzle grid

use serde::{Deserialize, Serialize};

use crate::models::{CellId, PetIndex};

/// What sits on a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occupant {
    Car,
    Pet(PetIndex),
    House(PetIndex),
    Empty,
}

/// Cardinal directions a road can leave a cell in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Column/row offset of one step in this direction
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Explicit road connections leaving a cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Roads {
    #[serde(default)]
    pub up: bool,
    #[serde(default)]
    pub down: bool,
    #[serde(default)]
    pub left: bool,
    #[serde(default)]
    pub right: bool,
}

impl Roads {
    pub fn new(up: bool, down: bool, left: bool, right: bool) -> Self {
        Self {
            up,
            down,
            left,
            right,
        }
    }

    /// Whether a road leaves the cell towards `direction`
    pub fn has(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Directions with a road, in `Direction::ALL` order
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|d| self.has(*d))
    }
}

/// One grid cell of a parsed board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Linear id, `column * rows + row`
    pub id: CellId,
    pub column: usize,
    pub row: usize,
    pub occupant: Occupant,
    pub roads: Roads,
}

impl Cell {
    pub fn new(id: CellId, column: usize, row: usize, occupant: Occupant, roads: Roads) -> Self {
        Self {
            id,
            column,
            row,
            occupant,
            roads,
        }
    }

    /// Pet waiting on this cell, if any
    pub fn pet(&self) -> Option<PetIndex> {
        match self.occupant {
            Occupant::Pet(index) => Some(index),
            _ => None,
        }
    }

    /// Pet whose house is on this cell, if any
    pub fn house(&self) -> Option<PetIndex> {
        match self.occupant {
            Occupant::House(index) => Some(index),
            _ => None,
        }
    }
}
