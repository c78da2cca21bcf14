use std::collections::BTreeMap;

use cgmath::Vector3;
use float_ord::FloatOrd;
use itertools::{Itertools, iproduct};
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::{
    Axis, AxisRing, Color, CubeStateError, FACELET_COUNT, FACELET_WIDTH, FACELETS_PER_SIDE,
    Facelet, FaceletId, FaceletRef, GRID_SIZE, RING_LEN, RingId, RingSlot, SIDE_COUNT, Side,
    SideId, Sign,
};

/// Single quarter turn of one layer.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ShiftRecord {
    /// Axis of the turned ring.
    pub axis: Axis,
    /// Layer of the turned ring (0, 1, or 2).
    pub layer: u8,
    /// Whether the turn is negative around the axis.
    #[serde(default)]
    pub reverse: bool,
}
impl ShiftRecord {
    /// Returns the turn that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            reverse: !self.reverse,
            ..self
        }
    }
}

/// 3x3x3 cube, modeled purely as colors on a fixed arena of facelets.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    facelets: Vec<Facelet>,
    sides: Vec<Side>,
    rings: Vec<AxisRing>,
    /// Facelet selected for highlighting and button-driven turns.
    current: FaceletId,
}
impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}
impl Cube {
    /// Constructs a solved cube with the center facelet of the front side
    /// selected.
    pub fn new() -> Self {
        let mut facelets = Vec::with_capacity(FACELET_COUNT);
        let mut sides = Vec::with_capacity(SIDE_COUNT);
        for side_id in SideId::ALL {
            let first = side_id.index() * FACELETS_PER_SIDE;
            let ids = std::array::from_fn(|i| FaceletId((first + i) as u8));
            for i in 0..FACELETS_PER_SIDE {
                facelets.push(Facelet {
                    location: FaceletRef {
                        side: side_id,
                        row: (i / GRID_SIZE) as u8,
                        col: (i % GRID_SIZE) as u8,
                    },
                    color: side_id.home_color(),
                    rings: [(RingId(0), 0); 2],
                });
            }
            sides.push(Side::new(side_id, ids));
        }

        let rings = build_rings(&sides);

        let mut memberships = vec![vec![]; FACELET_COUNT];
        for ring in &rings {
            for (pos, f) in ring.facelets.iter().enumerate() {
                memberships[f.index()].push((ring.id, pos as u8));
            }
        }
        for (facelet, membership) in facelets.iter_mut().zip(memberships) {
            assert_eq!(
                membership.len(),
                2,
                "facelet {} is in {} rings",
                facelet.location,
                membership.len(),
            );
            facelet.rings = [membership[0], membership[1]];
        }

        let current = sides[SideId::Front.index()].facelet_at(1, 1);

        Self {
            facelets,
            sides,
            rings,
            current,
        }
    }

    /// Constructs a cube from the colors of each side, in grid order.
    ///
    /// Returns an error if a side is missing or the wrong size, or if the
    /// colors are not the same multiset as a solved cube's.
    pub fn from_side_colors(colors: &BTreeMap<SideId, Vec<Color>>) -> Result<Self, CubeStateError> {
        let mut cube = Self::new();
        for side in SideId::ALL {
            let side_colors = colors
                .get(&side)
                .ok_or(CubeStateError::MissingSide(side))?;
            if side_colors.len() != FACELETS_PER_SIDE {
                return Err(CubeStateError::WrongFaceletCount {
                    side,
                    count: side_colors.len(),
                });
            }
            for (&f, &color) in cube.sides[side.index()].facelets.iter().zip(side_colors) {
                cube.facelets[f.index()].color = color;
            }
        }

        let counts = cube.color_counts();
        for color in Color::iter() {
            let expected = match SideId::ALL.iter().any(|s| s.home_color() == color) {
                true => FACELETS_PER_SIDE,
                false => 0,
            };
            let count = counts.get(&color).copied().unwrap_or(0);
            if count != expected {
                return Err(CubeStateError::UnbalancedColor {
                    color,
                    count,
                    expected,
                });
            }
        }

        Ok(cube)
    }

    /// Returns all facelets, indexed by [`FaceletId`].
    pub fn facelets(&self) -> &[Facelet] {
        &self.facelets
    }
    /// Returns a facelet.
    pub fn facelet(&self, id: FaceletId) -> &Facelet {
        &self.facelets[id.index()]
    }
    /// Returns the ID of the facelet at a location.
    pub fn facelet_at(&self, location: FaceletRef) -> FaceletId {
        self.side(location.side).facelets[location.grid_index()]
    }
    /// Returns the color of a facelet.
    pub fn color(&self, id: FaceletId) -> Color {
        self.facelet(id).color
    }
    /// Returns the world-space center of a facelet.
    pub fn facelet_center(&self, id: FaceletId) -> Vector3<f32> {
        let loc = self.facelet(id).location;
        self.side(loc.side)
            .cell_center(loc.row as usize, loc.col as usize)
    }

    /// Returns all sides, indexed by [`SideId`].
    pub fn sides(&self) -> &[Side] {
        &self.sides
    }
    /// Returns a side.
    pub fn side(&self, id: SideId) -> &Side {
        &self.sides[id.index()]
    }

    /// Returns all rings, indexed by [`RingId`].
    pub fn rings(&self) -> &[AxisRing] {
        &self.rings
    }
    /// Returns a ring.
    pub fn ring(&self, id: RingId) -> &AxisRing {
        &self.rings[id.index()]
    }
    /// Returns the ring around `axis` at `layer`.
    ///
    /// # Panics
    ///
    /// Panics if `layer` is not 0, 1, or 2.
    pub fn ring_at(&self, axis: Axis, layer: u8) -> RingId {
        assert!((layer as usize) < GRID_SIZE, "layer {layer} out of range");
        RingId((axis.int() * GRID_SIZE + layer as usize) as u8)
    }
    /// Returns one of the rings containing `facelet`.
    pub fn facelet_ring(&self, facelet: FaceletId, slot: RingSlot) -> RingId {
        self.facelet(facelet).ring(slot).0
    }
    /// Returns every facelet that moves when `ring` turns, including the
    /// facelets of its pole side.
    pub fn turning_facelets(&self, ring: RingId) -> impl Iterator<Item = FaceletId> + '_ {
        let ring = self.ring(ring);
        let pole_facelets = ring
            .pole
            .map(|side| self.side(side).facelets)
            .into_iter()
            .flatten();
        ring.facelets.iter().copied().chain(pole_facelets)
    }

    /// Returns the facelet selected for highlighting and button-driven turns.
    pub fn current_facelet(&self) -> FaceletId {
        self.current
    }
    /// Selects a facelet for highlighting and button-driven turns.
    pub fn set_current_facelet(&mut self, id: FaceletId) {
        assert!(id.index() < FACELET_COUNT, "facelet {id} out of range");
        self.current = id;
    }
    #[cfg(test)]
    pub(crate) fn paint(&mut self, id: FaceletId, color: Color) {
        self.facelets[id.index()].color = color;
    }

    /// Returns whether `id` is the selected facelet.
    pub fn is_highlighted(&self, id: FaceletId) -> bool {
        self.current == id
    }

    /// Returns the facelet `delta` positions away from `facelet` along one
    /// of its rings.
    pub fn step_along_ring(&self, facelet: FaceletId, slot: RingSlot, delta: isize) -> FaceletId {
        let (ring, pos) = self.facelet(facelet).ring(slot);
        self.ring(ring).at(pos as isize + delta)
    }
    /// Moves the selected facelet `delta` positions along one of its rings.
    pub fn move_current(&mut self, slot: RingSlot, delta: isize) {
        let new_current = self.step_along_ring(self.current, slot, delta);
        log::trace!(
            "current facelet moved from {} to {}",
            self.facelet(self.current).location,
            self.facelet(new_current).location,
        );
        self.current = new_current;
    }

    /// Turns a ring by a quarter turn, along with its pole side if it has
    /// one. The selected facelet follows the turn if it is on the ring or the
    /// pole.
    pub fn shift_ring(&mut self, ring: RingId, reverse: bool) {
        let ring = &self.rings[ring.index()];
        ring.shift(&mut self.facelets, reverse);
        if let Some(pos) = ring.position_of(self.current) {
            self.current = ring.facelets[AxisRing::shifted_position(pos, reverse)];
        }
        log::trace!(
            "shifted ring around {} at layer {} (reverse = {reverse})",
            ring.axis,
            ring.layer,
        );
        let pole = ring.pole;
        if let Some(pole) = pole {
            // A positive turn is counterclockwise in every side's local frame.
            self.shift_side(pole, reverse);
        }
    }
    /// Rotates the colors on one side by a quarter turn. The selected facelet
    /// follows the rotation if it is on the side.
    ///
    /// On its own this is not a legal move; use [`Self::shift_ring()`].
    pub fn shift_side(&mut self, side: SideId, clockwise: bool) {
        let side = &self.sides[side.index()];
        side.shift(&mut self.facelets, clockwise);
        if let Some(i) = side.facelets.iter().position(|&f| f == self.current) {
            let (row, col) = Side::shifted_cell(i / GRID_SIZE, i % GRID_SIZE, clockwise);
            self.current = side.facelet_at(row, col);
        }
    }
    /// Applies a quarter turn.
    pub fn apply(&mut self, shift: ShiftRecord) {
        self.shift_ring(self.ring_at(shift.axis, shift.layer), shift.reverse);
    }

    /// Applies `count` random quarter turns and returns them.
    pub fn scramble(&mut self, rng: &mut impl Rng, count: usize) -> Vec<ShiftRecord> {
        let axes = [Axis::X, Axis::Y, Axis::Z];
        let shifts = (0..count)
            .map(|_| ShiftRecord {
                axis: axes[rng.random_range(0..axes.len())],
                layer: rng.random_range(0..GRID_SIZE as u8),
                reverse: rng.random_bool(0.5),
            })
            .collect_vec();
        for &shift in &shifts {
            self.apply(shift);
        }
        log::debug!("scrambled cube with {count} turns");
        shifts
    }

    /// Returns the colors of each side in grid order, indexed by [`SideId`].
    pub fn color_grid(&self) -> [[Color; FACELETS_PER_SIDE]; SIDE_COUNT] {
        std::array::from_fn(|s| std::array::from_fn(|i| self.color(self.sides[s].facelets[i])))
    }
    /// Returns the colors of each side in grid order.
    pub fn side_colors(&self) -> BTreeMap<SideId, Vec<Color>> {
        SideId::ALL
            .iter()
            .zip(self.color_grid())
            .map(|(&side, colors)| (side, colors.to_vec()))
            .collect()
    }
    /// Returns the number of facelets of each color.
    pub fn color_counts(&self) -> BTreeMap<Color, usize> {
        self.facelets
            .iter()
            .map(|f| f.color)
            .counts()
            .into_iter()
            .collect()
    }
    /// Returns whether every side is a single color.
    pub fn is_solved(&self) -> bool {
        self.sides
            .iter()
            .all(|side| side.facelets.iter().map(|&f| self.color(f)).all_equal())
    }
}

/// Groups facelets into rings by their position along each axis, ordered by
/// angle around the axis.
fn build_rings(sides: &[Side]) -> Vec<AxisRing> {
    iproduct!(Axis::iter(), 0..GRID_SIZE as u8)
        .enumerate()
        .map(|(i, (axis, layer))| {
            let (u, v) = axis.perpendiculars();
            let facelets: Vec<FaceletId> = sides
                .iter()
                .filter(|side| side.id.normal_axis() != axis)
                .flat_map(|side| {
                    (0..FACELETS_PER_SIDE).map(move |j| {
                        let center = side.cell_center(j / GRID_SIZE, j % GRID_SIZE);
                        (side.facelets[j], center)
                    })
                })
                .filter(|&(_, center)| lattice_layer(axis.component(center)) == Some(layer))
                .sorted_by_key(|&(_, center)| {
                    FloatOrd(v.component(center).atan2(u.component(center)))
                })
                .map(|(f, _)| f)
                .collect();
            let facelets: [FaceletId; RING_LEN] = facelets.try_into().unwrap_or_else(
                |v: Vec<FaceletId>| {
                    panic!("ring around {axis} at layer {layer} has {} facelets", v.len())
                },
            );
            let pole = match layer {
                0 => Some(SideId::from_axis_sign(axis, Sign::Neg)),
                2 => Some(SideId::from_axis_sign(axis, Sign::Pos)),
                _ => None,
            };
            AxisRing {
                id: RingId(i as u8),
                axis,
                layer,
                facelets,
                pole,
            }
        })
        .collect()
}

/// Returns the layer containing a coordinate, or `None` if the coordinate is
/// on the surface of the cube.
fn lattice_layer(x: f32) -> Option<u8> {
    let layer = (x / FACELET_WIDTH).round() as i32 + 1;
    (0..GRID_SIZE as i32).contains(&layer).then_some(layer as u8)
}

#[cfg(test)]
mod tests {
    use cgmath::{Deg, InnerSpace, Matrix3};
    use pretty_assertions::assert_eq;

    use super::*;

    fn facelet_near(cube: &Cube, point: Vector3<f32>) -> FaceletId {
        (0..FACELET_COUNT)
            .map(|i| FaceletId(i as u8))
            .find(|&f| (cube.facelet_center(f) - point).magnitude() < 1e-4)
            .unwrap_or_else(|| panic!("no facelet at {point:?}"))
    }

    #[test]
    fn test_ring_topology() {
        let cube = Cube::new();
        assert_eq!(cube.rings().len(), 9);
        for ring in cube.rings() {
            assert_eq!(cube.ring_at(ring.axis, ring.layer), ring.id);
            match ring.layer {
                1 => assert_eq!(ring.pole, None),
                _ => {
                    let pole = ring.pole.expect("outer layer should have a pole");
                    assert_eq!(pole.normal_axis(), ring.axis);
                }
            }
            let sides = ring
                .facelets
                .iter()
                .map(|&f| cube.facelet(f).location.side)
                .unique()
                .count();
            assert_eq!(sides, 4);
        }
    }

    #[test]
    fn test_every_facelet_is_on_two_tangential_rings() {
        let cube = Cube::new();
        for (i, facelet) in cube.facelets().iter().enumerate() {
            let (a, pos_a) = facelet.ring(RingSlot::First);
            let (b, pos_b) = facelet.ring(RingSlot::Second);
            let (axis_a, axis_b) = (cube.ring(a).axis, cube.ring(b).axis);
            assert!(axis_a < axis_b);
            let normal_axis = facelet.location.side.normal_axis();
            assert_ne!(axis_a, normal_axis);
            assert_ne!(axis_b, normal_axis);
            assert_eq!(cube.ring(a).facelets[pos_a].index(), i);
            assert_eq!(cube.ring(b).facelets[pos_b].index(), i);
        }
    }

    #[test]
    fn test_ring_order_is_quarter_turn() {
        let cube = Cube::new();
        for ring in cube.rings() {
            let rot = Matrix3::from_axis_angle(ring.axis.unit(), Deg(90.0));
            for i in 0..RING_LEN {
                let expected = rot * cube.facelet_center(ring.facelets[i]);
                let actual = cube.facelet_center(ring.at(i as isize + 3));
                assert!((expected - actual).magnitude() < 1e-4);
            }
        }
    }

    #[test]
    fn test_positive_shift_is_physical_rotation() {
        for axis in Axis::iter() {
            for layer in 0..3 {
                let mut cube = Cube::new();
                cube.scramble(&mut rand_chacha_rng(u64::from(layer) + axis.int() as u64), 20);
                let before = cube.clone();
                let ring = cube.ring_at(axis, layer);
                cube.shift_ring(ring, false);

                let rot = Matrix3::from_axis_angle(axis.unit(), Deg(90.0));
                for f in before.turning_facelets(ring) {
                    let dest = facelet_near(&cube, rot * cube.facelet_center(f));
                    assert_eq!(cube.color(dest), before.color(f));
                }
            }
        }
    }

    #[test]
    fn test_current_facelet_follows_ring() {
        let mut cube = Cube::new();
        let front_center = cube.current_facelet();
        let ring = cube.facelet_ring(front_center, RingSlot::Second);
        assert_eq!(cube.ring(ring).axis, Axis::Y);

        // Turning the middle Y layer carries the front center to the right.
        cube.shift_ring(ring, false);
        assert_eq!(
            cube.facelet(cube.current_facelet()).location,
            FaceletRef::new(SideId::Right, 1, 1).expect("valid location"),
        );
        cube.shift_ring(ring, true);
        assert_eq!(cube.current_facelet(), front_center);
    }

    #[test]
    fn test_current_facelet_follows_pole() {
        let mut cube = Cube::new();
        let corner = cube.facelet_at(FaceletRef::new(SideId::Front, 0, 0).expect("valid location"));
        cube.set_current_facelet(corner);
        // The front side is the pole of the outer Z layer.
        cube.shift_ring(cube.ring_at(Axis::Z, 2), false);
        let moved = cube.facelet(cube.current_facelet()).location;
        assert_eq!(moved, FaceletRef::new(SideId::Front, 0, 2).expect("valid location"));
        assert_eq!(cube.color(cube.current_facelet()), Color::Blue);
    }

    #[test]
    fn test_move_current_wraps_sides() {
        let mut cube = Cube::new();
        for _ in 0..2 {
            cube.move_current(RingSlot::Second, 1);
        }
        assert_eq!(cube.facelet(cube.current_facelet()).location.side, SideId::Right);
        cube.move_current(RingSlot::Second, -2);
        assert_eq!(
            cube.facelet(cube.current_facelet()).location,
            FaceletRef::new(SideId::Front, 1, 1).expect("valid location"),
        );
    }

    #[test]
    fn test_side_colors_round_trip() {
        let mut cube = Cube::new();
        cube.scramble(&mut rand_chacha_rng(7), 30);
        let imported = Cube::from_side_colors(&cube.side_colors()).expect("valid state");
        assert_eq!(imported.color_grid(), cube.color_grid());
    }

    #[test]
    fn test_from_side_colors_errors() {
        let mut colors = Cube::new().side_colors();
        colors.remove(&SideId::Top);
        assert_eq!(
            Cube::from_side_colors(&colors),
            Err(CubeStateError::MissingSide(SideId::Top)),
        );

        let mut colors = Cube::new().side_colors();
        colors.insert(SideId::Top, vec![Color::Orange; 8]);
        assert_eq!(
            Cube::from_side_colors(&colors),
            Err(CubeStateError::WrongFaceletCount {
                side: SideId::Top,
                count: 8,
            }),
        );

        let mut colors = Cube::new().side_colors();
        colors.insert(SideId::Top, vec![Color::Red; 9]);
        assert_eq!(
            Cube::from_side_colors(&colors),
            Err(CubeStateError::UnbalancedColor {
                color: Color::Red,
                count: 18,
                expected: 9,
            }),
        );
    }

    fn rand_chacha_rng(seed: u64) -> rand_chacha::ChaCha8Rng {
        rand::SeedableRng::seed_from_u64(seed)
    }
}
