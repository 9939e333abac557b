use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::error::SolverError;
use crate::models::{
    Board, Cell, CellId, ObjectKind, Occupant, PetIndex, PetRequest, RawBoard, MAX_PETS,
};

// Pickup and dropoff cells collected for one pet name
#[derive(Default)]
struct PetSlots {
    pickup: Option<CellId>,
    dropoff: Option<CellId>,
}

/// Read a raw board from a JSON file
pub fn load_raw_board<P: AsRef<Path>>(path: P) -> Result<RawBoard, SolverError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| SolverError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let raw: RawBoard = serde_json::from_str(&content)?;
    debug!(
        "Loaded raw board {}x{} from {}",
        raw.columns,
        raw.rows,
        path.display()
    );
    Ok(raw)
}

/// Read a raw board from a JSON file and parse it
pub fn load_board<P: AsRef<Path>>(path: P) -> Result<Board, SolverError> {
    init_board(&load_raw_board(path)?)
}

/// Convert a raw board into a [`Board`] with its pet requests.
///
/// Cells are scanned in id order (down each column, then across columns).
/// A pet gets its index the first time its name is seen, on either its
/// pickup or its house cell.
pub fn init_board(raw: &RawBoard) -> Result<Board, SolverError> {
    check_dimensions(raw)?;

    let mut cells = Vec::with_capacity(raw.columns * raw.rows);
    let mut car = None;
    let mut names: Vec<&str> = Vec::new();
    let mut index_of: HashMap<&str, PetIndex> = HashMap::new();
    let mut slots: Vec<PetSlots> = Vec::new();

    for (column, objects) in raw.cells.iter().enumerate() {
        for (row, object) in objects.iter().enumerate() {
            let id = column * raw.rows + row;
            let kind = object.kind().ok_or_else(|| {
                SolverError::malformed(format!(
                    "unknown object '{}' at ({}, {})",
                    object.name, column, row
                ))
            })?;

            let occupant = match kind {
                ObjectKind::Car => {
                    if let Some(first) = car {
                        return Err(SolverError::malformed(format!(
                            "second car at cell {}, first at cell {}",
                            id, first
                        )));
                    }
                    car = Some(id);
                    Occupant::Car
                }
                ObjectKind::Empty => Occupant::Empty,
                ObjectKind::Pet(name) | ObjectKind::House(name) => {
                    let index = *index_of.entry(name).or_insert_with(|| {
                        names.push(name);
                        slots.push(PetSlots::default());
                        names.len() - 1
                    });
                    let slot = &mut slots[index];
                    if let ObjectKind::Pet(_) = kind {
                        if slot.pickup.replace(id).is_some() {
                            return Err(SolverError::malformed(format!(
                                "pet '{}' declared twice",
                                name
                            )));
                        }
                        Occupant::Pet(index)
                    } else {
                        if slot.dropoff.replace(id).is_some() {
                            return Err(SolverError::malformed(format!(
                                "house '{}' declared twice",
                                name
                            )));
                        }
                        Occupant::House(index)
                    }
                }
            };

            cells.push(Cell::new(id, column, row, occupant, object.roads));
        }
    }

    if names.len() > MAX_PETS {
        return Err(SolverError::PetCapacityExceeded {
            found: names.len(),
            max: MAX_PETS,
        });
    }

    let car = car.ok_or_else(|| SolverError::malformed("board has no car"))?;

    let mut pets = Vec::with_capacity(names.len());
    for (index, (name, slot)) in names.iter().zip(&slots).enumerate() {
        match (slot.pickup, slot.dropoff) {
            (Some(pickup), Some(dropoff)) => {
                pets.push(PetRequest::new(index, *name, pickup, dropoff))
            }
            (None, _) => {
                return Err(SolverError::malformed(format!(
                    "house '{}' has no pet",
                    name
                )))
            }
            (_, None) => {
                return Err(SolverError::malformed(format!(
                    "pet '{}' has no house",
                    name
                )))
            }
        }
    }

    info!(
        "Parsed board {}x{} with car at cell {} and {} pets",
        raw.columns,
        raw.rows,
        car,
        pets.len()
    );

    Ok(Board::new(raw.columns, raw.rows, cells, car, pets))
}

fn check_dimensions(raw: &RawBoard) -> Result<(), SolverError> {
    if raw.columns == 0 || raw.rows == 0 {
        return Err(SolverError::malformed("board is empty"));
    }
    if raw.cells.len() != raw.columns {
        return Err(SolverError::malformed(format!(
            "expected {} columns, found {}",
            raw.columns,
            raw.cells.len()
        )));
    }
    if let Some((column, objects)) = raw
        .cells
        .iter()
        .enumerate()
        .find(|(_, objects)| objects.len() != raw.rows)
    {
        return Err(SolverError::malformed(format!(
            "column {} has {} rows, expected {}",
            column,
            objects.len(),
            raw.rows
        )));
    }
    Ok(())
}
