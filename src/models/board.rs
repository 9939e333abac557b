// Board model: the immutable, parsed puzzle handed to the solvers

use crate::models::{Cell, CellId, Direction, Occupant, PetIndex};

/// Maximum number of pets a board may declare
pub const MAX_PETS: usize = 12;

/// A pet that has to be carried from its pickup cell to its house
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetRequest {
    /// Ordinal assigned while scanning the board
    pub index: PetIndex,

    /// Pet name as found in the raw board, without the pet/house prefix
    pub name: String,

    /// Cell the pet waits on
    pub pickup: CellId,

    /// Cell of the pet's house
    pub dropoff: CellId,
}

impl PetRequest {
    pub fn new<S: Into<String>>(index: PetIndex, name: S, pickup: CellId, dropoff: CellId) -> Self {
        Self {
            index,
            name: name.into(),
            pickup,
            dropoff,
        }
    }
}

/// Parsed puzzle board. Built once per solve by the adapter in
/// [`crate::utils::init_board`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: usize,
    rows: usize,
    cells: Vec<Cell>,
    car: CellId,
    pets: Vec<PetRequest>,
}

impl Board {
    /// Assembles a board from already consistent parts. `cells` must be
    /// ordered by id and `pets` by index.
    pub(crate) fn new(
        columns: usize,
        rows: usize,
        cells: Vec<Cell>,
        car: CellId,
        pets: Vec<PetRequest>,
    ) -> Self {
        Self {
            columns,
            rows,
            cells,
            car,
            pets,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id)
    }

    /// Cell the car starts on
    pub fn car(&self) -> CellId {
        self.car
    }

    pub fn pets(&self) -> &[PetRequest] {
        &self.pets
    }

    pub fn pet(&self, index: PetIndex) -> Option<&PetRequest> {
        self.pets.get(index)
    }

    pub fn pet_count(&self) -> usize {
        self.pets.len()
    }

    /// Linear id of `(column, row)`
    pub fn cell_id(&self, column: usize, row: usize) -> CellId {
        column * self.rows + row
    }

    /// `(column, row)` of a linear id
    pub fn position(&self, id: CellId) -> (usize, usize) {
        (id / self.rows, id % self.rows)
    }

    /// Geometric neighbour of `id` towards `direction`, `None` past the edge
    pub fn neighbor(&self, id: CellId, direction: Direction) -> Option<CellId> {
        let (column, row) = self.position(id);
        let (dc, dr) = direction.offset();
        let column = column.checked_add_signed(dc)?;
        let row = row.checked_add_signed(dr)?;
        if column >= self.columns || row >= self.rows {
            return None;
        }
        Some(self.cell_id(column, row))
    }

    /// Whether a pet waits on `id`
    pub fn is_pickup_cell(&self, id: CellId) -> bool {
        matches!(
            self.cell(id).map(|cell| cell.occupant),
            Some(Occupant::Pet(_))
        )
    }

    /// Pet request picked up or delivered on `id`
    pub fn request_at(&self, id: CellId) -> Option<&PetRequest> {
        self.pets
            .iter()
            .find(|pet| pet.pickup == id || pet.dropoff == id)
    }
}
