// Raw board model: the grid as delivered by board recognition, before parsing

use serde::{Deserialize, Serialize};

use crate::models::Roads;

/// Name prefix of the car
pub const PREFIX_CAR: char = 'c';
/// Name prefix of a pet waiting for pickup
pub const PREFIX_PET: char = 'p';
/// Name prefix of a pet's house
pub const PREFIX_HOUSE: char = 'h';
/// Name prefix of an empty road cell
pub const PREFIX_DOT: char = 'd';

/// One recognised object together with the roads leaving its cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectInfo {
    /// Prefix-encoded name, e.g. `cRight`, `pHusky`, `hHusky`, `dot`
    pub name: String,

    #[serde(flatten)]
    pub roads: Roads,
}

impl ObjectInfo {
    pub fn new<S: Into<String>>(name: S, roads: Roads) -> Self {
        Self {
            name: name.into(),
            roads,
        }
    }

    pub fn kind(&self) -> Option<ObjectKind<'_>> {
        ObjectKind::parse(&self.name)
    }
}

/// Decoded meaning of an object name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind<'a> {
    Car,
    Pet(&'a str),
    House(&'a str),
    Empty,
}

impl<'a> ObjectKind<'a> {
    /// Decodes a prefix-encoded name. Pets and houses need a non-empty name
    /// after the prefix; anything else unknown yields `None`.
    pub fn parse(name: &'a str) -> Option<Self> {
        let mut chars = name.chars();
        let prefix = chars.next()?;
        let rest = chars.as_str();
        match prefix {
            PREFIX_CAR => Some(ObjectKind::Car),
            PREFIX_DOT => Some(ObjectKind::Empty),
            PREFIX_PET if !rest.is_empty() => Some(ObjectKind::Pet(rest)),
            PREFIX_HOUSE if !rest.is_empty() => Some(ObjectKind::House(rest)),
            _ => None,
        }
    }
}

/// Grid of recognised objects, addressed `cells[column][row]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBoard {
    pub columns: usize,
    pub rows: usize,
    pub cells: Vec<Vec<ObjectInfo>>,
}

impl RawBoard {
    pub fn new(columns: usize, rows: usize, cells: Vec<Vec<ObjectInfo>>) -> Self {
        Self {
            columns,
            rows,
            cells,
        }
    }

    /// Object at `(column, row)`, `None` outside the grid
    pub fn get(&self, column: usize, row: usize) -> Option<&ObjectInfo> {
        self.cells.get(column).and_then(|c| c.get(row))
    }
}
