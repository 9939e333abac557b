// Search state models for the pickup/delivery state space

use std::fmt;

use crate::models::{CellId, Distance, PetIndex, MAX_PETS};

/// Delivery status of a single pet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PetStatus {
    Pending = 0,
    Carried = 1,
    Delivered = 2,
}

impl PetStatus {
    fn from_bits(bits: u32) -> Self {
        match bits {
            0 => PetStatus::Pending,
            1 => PetStatus::Carried,
            _ => PetStatus::Delivered,
        }
    }
}

const BITS_PER_PET: u32 = 2;
const PET_MASK: u32 = 0b11;

/// Per-pet statuses packed two bits per pet, pet 0 in the lowest bits.
///
/// Ordering is numeric on the packed value, so the last pet is the most
/// significant digit.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StatusVector(u32);

impl StatusVector {
    /// Every pet pending
    pub fn new() -> Self {
        Self(0)
    }

    pub fn get(self, pet: PetIndex) -> PetStatus {
        debug_assert!(pet < MAX_PETS);
        PetStatus::from_bits((self.0 >> (pet as u32 * BITS_PER_PET)) & PET_MASK)
    }

    /// Copy with `pet` set to `status`
    pub fn with(self, pet: PetIndex, status: PetStatus) -> Self {
        debug_assert!(pet < MAX_PETS);
        let shift = pet as u32 * BITS_PER_PET;
        Self((self.0 & !(PET_MASK << shift)) | ((status as u32) << shift))
    }

    /// Whether the first `pet_count` pets are all delivered
    pub fn all_delivered(self, pet_count: usize) -> bool {
        (0..pet_count).all(|pet| self.get(pet) == PetStatus::Delivered)
    }

    /// Number of pets currently in the car
    pub fn carried_count(self, pet_count: usize) -> usize {
        (0..pet_count)
            .filter(|pet| self.get(*pet) == PetStatus::Carried)
            .count()
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for StatusVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits: String = (0..MAX_PETS)
            .map(|pet| match self.get(pet) {
                PetStatus::Pending => '0',
                PetStatus::Carried => '1',
                PetStatus::Delivered => '2',
            })
            .collect();
        write!(f, "StatusVector({})", digits)
    }
}

/// Reduced key of a search state: everything but the predecessor.
///
/// Field order defines the tie-break between equal tentative distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SearchKey {
    pub status: StatusVector,
    pub position: CellId,
    pub capacity: u8,
}

impl SearchKey {
    pub fn new(status: StatusVector, position: CellId, capacity: u8) -> Self {
        Self {
            status,
            position,
            capacity,
        }
    }
}

/// Index of a state in the search arena
pub type StateId = usize;

/// A node of the search, linked to the state it was reached from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchState {
    pub key: SearchKey,
    pub distance: Distance,
    pub predecessor: Option<StateId>,
}
