//! Serde representations of a [`World`].
//!
//! A `World` serializes as its bare row-major matrix (`[[bool]]`, `y`
//! outer), which is what generation updates carry. [`WorldState`] is the
//! richer shape a client uploads when it seeds a grid.

use serde::{Deserialize, Serialize, Serializer};

use crate::error::WorldError;
use crate::world::World;

impl Serialize for World {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

/// A client-supplied grid: the matrix plus its declared dimensions.
///
/// ```json
/// {"Cells": [[false, true], [true, false]], "Width": 2, "Height": 2}
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WorldState {
    /// Row-major cells, `cells[y][x]`.
    pub cells: Vec<Vec<bool>>,
    /// Declared column count.
    pub width: u32,
    /// Declared row count.
    pub height: u32,
}

impl From<&World> for WorldState {
    fn from(world: &World) -> Self {
        Self {
            cells: world.to_rows(),
            width: world.width(),
            height: world.height(),
        }
    }
}

impl TryFrom<WorldState> for World {
    type Error = WorldError;

    /// Validate the matrix and check it matches the declared dimensions.
    ///
    /// A rectangular matrix whose shape disagrees with `Width`/`Height`
    /// is reported as `InvalidDimension` with the declared values.
    fn try_from(state: WorldState) -> Result<Self, Self::Error> {
        let world = World::from_rows(state.cells)?;
        if world.width() != state.width || world.height() != state.height {
            return Err(WorldError::InvalidDimension {
                width: u64::from(state.width),
                height: u64::from(state.height),
            });
        }
        Ok(world)
    }
}
