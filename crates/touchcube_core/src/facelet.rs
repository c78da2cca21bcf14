use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Color, GRID_SIZE, RingId, SideId};

idx_struct! {
    /// Handle to a facelet in a [`crate::Cube`].
    pub struct FaceletId(pub u8);
}

/// One of the two rings that each facelet belongs to.
///
/// Rings are ordered by world axis, so [`RingSlot::First`] is the ring around
/// the lower-numbered axis.
#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum RingSlot {
    First = 0,
    Second = 1,
}

/// Location of a facelet on the surface of the cube.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceletRef {
    /// Side containing the facelet.
    pub side: SideId,
    /// Row within the side, along its local Y axis.
    pub row: u8,
    /// Column within the side, along its local X axis.
    pub col: u8,
}
impl fmt::Display for FaceletRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{},{}]", self.side, self.row, self.col)
    }
}
impl FaceletRef {
    /// Constructs a facelet location, or returns `None` if the row or column
    /// is out of range.
    pub fn new(side: SideId, row: usize, col: usize) -> Option<Self> {
        (row < GRID_SIZE && col < GRID_SIZE).then(|| Self {
            side,
            row: row as u8,
            col: col as u8,
        })
    }
    /// Returns the row-major index of the facelet within its side.
    pub const fn grid_index(self) -> usize {
        self.row as usize * GRID_SIZE + self.col as usize
    }
}

/// Colored unit square on the surface of the cube.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facelet {
    /// Location of the facelet. This never changes.
    pub location: FaceletRef,
    /// Current color.
    pub color: Color,
    /// Rings containing the facelet, with its position in each.
    pub rings: [(RingId, u8); 2],
}
impl Facelet {
    /// Returns one of the rings containing the facelet, with the facelet's
    /// position in it.
    pub fn ring(&self, slot: RingSlot) -> (RingId, usize) {
        let (ring, pos) = self.rings[slot as usize];
        (ring, pos as usize)
    }
}
