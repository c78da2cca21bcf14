//! Mapping from drags and buttons on a side to layer turns.
//!
//! Each side's local frame is derived from its normal axis, so the frames are
//! not coherent across the cube: on some sides a drag toward +X turns a ring
//! positively and on others negatively, and which of a facelet's two rings a
//! drag engages also depends on the side. [`SIDE_DRAG_TABLE`] records that
//! asymmetry as data.

use cgmath::Vector2;
use touchcube_core::{Cube, FaceletId, RingId, RingSlot, SideId, Sign};

use crate::PickHit;

/// Axis of a side's local frame.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum DragAxis {
    X,
    Y,
}

/// How drags on one side map to ring turns.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SideDragConfig {
    /// Ring turned by a drag along local X.
    pub x_ring: RingSlot,
    /// Direction around the ring's axis that moves facelets toward local +X.
    pub x_sign: Sign,
    /// Ring turned by a drag along local Y.
    pub y_ring: RingSlot,
    /// Direction around the ring's axis that moves facelets toward local +Y.
    pub y_sign: Sign,
}
impl SideDragConfig {
    /// Returns the configuration for a side.
    pub const fn for_side(side: SideId) -> Self {
        SIDE_DRAG_TABLE[side.index()]
    }
    /// Returns the ring turned by a drag along `axis`.
    pub const fn ring(self, axis: DragAxis) -> RingSlot {
        match axis {
            DragAxis::X => self.x_ring,
            DragAxis::Y => self.y_ring,
        }
    }
    /// Returns the turn direction that moves facelets toward +`axis`.
    pub const fn sign(self, axis: DragAxis) -> Sign {
        match axis {
            DragAxis::X => self.x_sign,
            DragAxis::Y => self.y_sign,
        }
    }
}

/// Drag configuration for each side, indexed by [`SideId`].
pub const SIDE_DRAG_TABLE: [SideDragConfig; 6] = [
    // Left
    SideDragConfig {
        x_ring: RingSlot::Second,
        x_sign: Sign::Neg,
        y_ring: RingSlot::First,
        y_sign: Sign::Pos,
    },
    // Right
    SideDragConfig {
        x_ring: RingSlot::Second,
        x_sign: Sign::Pos,
        y_ring: RingSlot::First,
        y_sign: Sign::Neg,
    },
    // Down
    SideDragConfig {
        x_ring: RingSlot::First,
        x_sign: Sign::Neg,
        y_ring: RingSlot::Second,
        y_sign: Sign::Pos,
    },
    // Top
    SideDragConfig {
        x_ring: RingSlot::First,
        x_sign: Sign::Pos,
        y_ring: RingSlot::Second,
        y_sign: Sign::Neg,
    },
    // Back
    SideDragConfig {
        x_ring: RingSlot::Second,
        x_sign: Sign::Neg,
        y_ring: RingSlot::First,
        y_sign: Sign::Pos,
    },
    // Front
    SideDragConfig {
        x_ring: RingSlot::Second,
        x_sign: Sign::Pos,
        y_ring: RingSlot::First,
        y_sign: Sign::Neg,
    },
];

/// Ring and direction of a quarter turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct QuarterTurn {
    /// Ring to turn.
    pub ring: RingId,
    /// Direction around the ring's axis.
    pub sign: Sign,
}

/// Face button that turns a ring through the selected facelet.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum TurnButton {
    Circle,
    Square,
    Triangle,
    Cross,
}
impl TurnButton {
    /// Returns the quarter turn that moves `facelet` in the button's
    /// direction: circle moves it toward local +X, square toward -X, triangle
    /// toward +Y, and cross toward -Y.
    pub fn resolve(self, cube: &Cube, facelet: FaceletId) -> QuarterTurn {
        let (axis, toward_positive) = match self {
            TurnButton::Circle => (DragAxis::X, true),
            TurnButton::Square => (DragAxis::X, false),
            TurnButton::Triangle => (DragAxis::Y, true),
            TurnButton::Cross => (DragAxis::Y, false),
        };
        let config = SideDragConfig::for_side(cube.facelet(facelet).location.side);
        let sign = config.sign(axis);
        QuarterTurn {
            ring: cube.facelet_ring(facelet, config.ring(axis)),
            sign: if toward_positive { sign } else { -sign },
        }
    }
}

/// Direction on the D-pad.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}
impl Direction {
    /// Returns the ring slot and number of positions to step along it to move
    /// a facelet on `side` one cell in this direction.
    pub fn resolve(self, side: SideId) -> (RingSlot, isize) {
        let (axis, toward_positive) = match self {
            Direction::Right => (DragAxis::X, true),
            Direction::Left => (DragAxis::X, false),
            Direction::Up => (DragAxis::Y, true),
            Direction::Down => (DragAxis::Y, false),
        };
        let config = SideDragConfig::for_side(side);
        let step = config.sign(axis).int();
        (
            config.ring(axis),
            if toward_positive { step } else { -step },
        )
    }
}

/// Drag whose axis has been locked.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LockedDrag {
    /// Local axis that the drag locked onto.
    pub axis: DragAxis,
    /// Ring that the drag turns.
    pub ring: RingId,
    /// Direction around the ring's axis for a drag toward +`axis`.
    pub sign: Sign,
}

/// Resolves a single drag gesture on one side into a ring turn.
///
/// Once one displacement component exceeds the threshold and the other
/// component, the drag locks onto that axis for the rest of the gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationResolver {
    side: SideId,
    facelet: FaceletId,
    start: Vector2<f32>,
    threshold: f32,
    lock: Option<LockedDrag>,
}
impl RotationResolver {
    /// Starts resolving a drag that began at `hit`.
    pub fn new(hit: PickHit, threshold: f32) -> Self {
        Self {
            side: hit.side,
            facelet: hit.facelet,
            start: hit.local,
            threshold,
            lock: None,
        }
    }

    /// Returns the side that the drag began on.
    pub fn side(&self) -> SideId {
        self.side
    }
    /// Returns the facelet that the drag began on.
    pub fn facelet(&self) -> FaceletId {
        self.facelet
    }
    /// Returns the locked axis and ring, if the drag has locked.
    pub fn lock(&self) -> Option<LockedDrag> {
        self.lock
    }

    /// Updates the drag with the current touch point in the side's local
    /// frame.
    ///
    /// Returns the locked drag along with the signed distance to turn its
    /// ring, where positive is a positive rotation around the ring's axis.
    /// Returns `None` while the drag is inside the deadzone.
    pub fn update(&mut self, cube: &Cube, local: Vector2<f32>) -> Option<(LockedDrag, f32)> {
        let d = local - self.start;

        if self.lock.is_none() {
            let axis = if d.x.abs() > self.threshold && d.x.abs() > d.y.abs() {
                Some(DragAxis::X)
            } else if d.y.abs() > self.threshold && d.y.abs() > d.x.abs() {
                Some(DragAxis::Y)
            } else {
                None
            };
            self.lock = axis.map(|axis| {
                let config = SideDragConfig::for_side(self.side);
                let lock = LockedDrag {
                    axis,
                    ring: cube.facelet_ring(self.facelet, config.ring(axis)),
                    sign: config.sign(axis),
                };
                log::debug!("drag on {} locked to {axis} (ring {})", self.side, lock.ring);
                lock
            });
        }

        let lock = self.lock?;
        let distance = match lock.axis {
            DragAxis::X => d.x,
            DragAxis::Y => d.y,
        };
        Some((lock, lock.sign.float() * distance))
    }
}
