//! Facelet-permutation model of a 3x3x3 twisty cube.
//!
//! The cube is an arena of 54 [`Facelet`]s, 6 [`Side`]s, and 9 [`AxisRing`]s
//! owned by a single [`Cube`]. Topology is fixed at construction; only
//! facelet colors and the current facelet change afterward.

#[macro_use]
extern crate strum;

#[macro_use]
mod idx;

mod axis;
mod color;
mod cube;
mod errors;
mod facelet;
mod ring;
mod side;
mod sign;
#[cfg(test)]
mod tests;

pub use axis::Axis;
pub use color::Color;
pub use cube::{Cube, ShiftRecord};
pub use errors::CubeStateError;
pub use facelet::{Facelet, FaceletId, FaceletRef, RingSlot};
pub use ring::{AxisRing, RingId};
pub use side::{Side, SideId};
pub use sign::Sign;

/// Number of facelets along each edge of a side.
pub const GRID_SIZE: usize = 3;
/// Number of facelets on each side.
pub const FACELETS_PER_SIDE: usize = GRID_SIZE * GRID_SIZE;
/// Number of sides on the cube.
pub const SIDE_COUNT: usize = 6;
/// Total number of facelets on the cube.
pub const FACELET_COUNT: usize = SIDE_COUNT * FACELETS_PER_SIDE;
/// Number of facelets in each axis ring.
pub const RING_LEN: usize = 4 * GRID_SIZE;
/// Number of ring positions covered by a quarter turn.
pub const QUARTER_TURN_STEP: usize = GRID_SIZE;
/// Number of axis rings on the cube (three layers per axis).
pub const RING_COUNT: usize = 3 * GRID_SIZE;

/// Distance from the center of the cube to each side.
pub const HALF_EXTENT: f32 = 0.6;
/// Width of one facelet.
pub const FACELET_WIDTH: f32 = 2.0 * HALF_EXTENT / GRID_SIZE as f32;

/// Structs, traits, and constants.
pub mod prelude {
    pub use crate::{
        Axis, AxisRing, Color, Cube, CubeStateError, FACELET_COUNT, Facelet, FaceletId,
        FaceletRef, RingId, RingSlot, Side, SideId, Sign,
    };
}
