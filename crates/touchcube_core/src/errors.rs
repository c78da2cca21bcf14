use crate::{Color, SideId};

/// Error produced when importing a cube state that could not have come from a
/// sequence of turns.
#[allow(missing_docs)]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeStateError {
    #[error("missing colors for side {0}")]
    MissingSide(SideId),
    #[error("side {side} has {count} colors; expected 9")]
    WrongFaceletCount { side: SideId, count: usize },
    #[error("color {color} appears on {count} facelets; expected {expected}")]
    UnbalancedColor {
        color: Color,
        count: usize,
        expected: usize,
    },
}
