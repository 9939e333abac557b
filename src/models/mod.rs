// Models module - exports all model types

mod board;
mod cell;
mod raw_board;
mod solution;
mod state;

// Re-export model types
pub use self::board::{Board, PetRequest, MAX_PETS};
pub use self::cell::{Cell, Direction, Occupant, Roads};
pub use self::raw_board::{
    ObjectInfo, ObjectKind, RawBoard, PREFIX_CAR, PREFIX_DOT, PREFIX_HOUSE, PREFIX_PET,
};
pub use self::solution::{CarMove, DetailedMove, MoveAction, Solution};
pub use self::state::{PetStatus, SearchKey, SearchState, StateId, StatusVector};

// Common type aliases for improved code readability
pub type CellId = usize;
pub type PetIndex = usize;
pub type Distance = u32;
