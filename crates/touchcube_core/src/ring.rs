use crate::{Axis, Facelet, FaceletId, QUARTER_TURN_STEP, RING_LEN, SideId};

idx_struct! {
    /// Handle to an axis ring in a [`crate::Cube`].
    pub struct RingId(pub u8);
}

/// Ordered loop of 12 facelets that move together when one layer of the cube
/// turns.
///
/// Position `i + 3` is where the facelet at position `i` ends up after a
/// positive (right-handed) quarter turn around [`AxisRing::axis`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisRing {
    /// ID of the ring.
    pub id: RingId,
    /// World axis that the ring rotates around.
    pub axis: Axis,
    /// Layer along the axis: 0 is the negative end, 1 is the middle, and 2 is
    /// the positive end.
    pub layer: u8,
    /// Facelets in rotational order.
    pub facelets: [FaceletId; RING_LEN],
    /// Side that turns along with the ring. Only outer layers have one.
    pub pole: Option<SideId>,
}
impl AxisRing {
    /// Returns the position of `facelet` in the ring, if it is in the ring.
    pub fn position_of(&self, facelet: FaceletId) -> Option<usize> {
        self.facelets.iter().position(|&f| f == facelet)
    }
    /// Returns the facelet at a position, wrapping around the ring.
    pub fn at(&self, pos: isize) -> FaceletId {
        self.facelets[pos.rem_euclid(RING_LEN as isize) as usize]
    }

    /// Returns the position whose color moves into position `i` when the ring
    /// is shifted.
    pub const fn source_position(i: usize, reverse: bool) -> usize {
        let offset = if reverse {
            QUARTER_TURN_STEP
        } else {
            RING_LEN - QUARTER_TURN_STEP
        };
        (i + offset) % RING_LEN
    }
    /// Returns the position that the contents of `pos` move to when the ring
    /// is shifted.
    pub const fn shifted_position(pos: usize, reverse: bool) -> usize {
        Self::source_position(pos, !reverse)
    }

    /// Moves every color in the ring by one quarter turn.
    ///
    /// This does not touch the pole side; see [`crate::Cube::shift_ring()`].
    pub fn shift(&self, facelets: &mut [Facelet], reverse: bool) {
        let old = self.facelets.map(|f| facelets[f.index()].color);
        for (i, f) in self.facelets.iter().enumerate() {
            facelets[f.index()].color = old[Self::source_position(i, reverse)];
        }
    }
}
