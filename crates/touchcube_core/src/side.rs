use cgmath::{InnerSpace, Vector2, Vector3};
use serde::{Deserialize, Serialize};

use crate::{
    Axis, Color, FACELET_WIDTH, FACELETS_PER_SIDE, Facelet, FaceletId, GRID_SIZE, HALF_EXTENT,
    Sign,
};

/// One of the six sides of the cube.
///
/// The discriminant is the side's index in [`crate::Cube::sides()`].
#[allow(missing_docs)]
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumCount,
    EnumString,
    Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SideId {
    Left = 0,
    Right = 1,
    Down = 2,
    Top = 3,
    Back = 4,
    Front = 5,
}
impl SideId {
    /// All sides, in index order.
    pub const ALL: [SideId; 6] = [
        SideId::Left,
        SideId::Right,
        SideId::Down,
        SideId::Top,
        SideId::Back,
        SideId::Front,
    ];

    /// Returns the index of the side.
    pub const fn index(self) -> usize {
        self as usize
    }
    /// Returns the side with an index, or `None` if it is out of range.
    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    /// Returns the world axis that the side's normal lies along.
    pub const fn normal_axis(self) -> Axis {
        match self {
            SideId::Left | SideId::Right => Axis::X,
            SideId::Down | SideId::Top => Axis::Y,
            SideId::Back | SideId::Front => Axis::Z,
        }
    }
    /// Returns which end of [`Self::normal_axis()`] the side is on.
    pub const fn sign(self) -> Sign {
        match self {
            SideId::Left | SideId::Down | SideId::Back => Sign::Neg,
            SideId::Right | SideId::Top | SideId::Front => Sign::Pos,
        }
    }
    /// Returns the side on the `sign` end of `axis`.
    pub const fn from_axis_sign(axis: Axis, sign: Sign) -> Self {
        match (axis, sign) {
            (Axis::X, Sign::Neg) => SideId::Left,
            (Axis::X, Sign::Pos) => SideId::Right,
            (Axis::Y, Sign::Neg) => SideId::Down,
            (Axis::Y, Sign::Pos) => SideId::Top,
            (Axis::Z, Sign::Neg) => SideId::Back,
            (Axis::Z, Sign::Pos) => SideId::Front,
        }
    }
    /// Returns the side on the opposite end of the same axis.
    pub const fn opposite(self) -> Self {
        Self::from_axis_sign(self.normal_axis(), match self.sign() {
            Sign::Neg => Sign::Pos,
            Sign::Pos => Sign::Neg,
        })
    }

    /// Returns the world axes of the side's local X and Y directions.
    pub const fn local_axes(self) -> (Axis, Axis) {
        self.normal_axis().perpendiculars()
    }

    /// Returns the color of the side on a solved cube.
    pub const fn home_color(self) -> Color {
        match self {
            SideId::Left => Color::Red,
            SideId::Right => Color::Yellow,
            SideId::Down => Color::Green,
            SideId::Top => Color::Orange,
            SideId::Back => Color::White,
            SideId::Front => Color::Blue,
        }
    }
}

/// 3x3 grid of facelets with a local coordinate frame.
///
/// The frame is only used for ray intersection. Grid index `i` is
/// `row * 3 + col`, where `col` increases along `local_x` and `row` increases
/// along `local_y`.
#[derive(Debug, Clone, PartialEq)]
pub struct Side {
    /// Which side this is.
    pub id: SideId,
    /// Facelets in grid order.
    pub facelets: [FaceletId; FACELETS_PER_SIDE],
    /// Outward unit normal.
    pub normal: Vector3<f32>,
    /// Center of the side.
    pub origin: Vector3<f32>,
    /// Unit vector along increasing columns.
    pub local_x: Vector3<f32>,
    /// Unit vector along increasing rows.
    pub local_y: Vector3<f32>,
}
impl Side {
    pub(crate) fn new(id: SideId, facelets: [FaceletId; FACELETS_PER_SIDE]) -> Self {
        let normal = id.normal_axis().unit() * id.sign().float();
        let (x_axis, y_axis) = id.local_axes();
        Self {
            id,
            facelets,
            normal,
            origin: normal * HALF_EXTENT,
            local_x: x_axis.unit(),
            local_y: y_axis.unit(),
        }
    }

    /// Returns the facelet at a grid cell.
    pub fn facelet_at(&self, row: usize, col: usize) -> FaceletId {
        assert!(row < GRID_SIZE && col < GRID_SIZE, "cell ({row}, {col}) out of range");
        self.facelets[row * GRID_SIZE + col]
    }

    /// Returns the world-space center of a grid cell.
    pub fn cell_center(&self, row: usize, col: usize) -> Vector3<f32> {
        let offset = |i: usize| (i as f32 - 1.0) * FACELET_WIDTH;
        self.origin + self.local_x * offset(col) + self.local_y * offset(row)
    }

    /// Projects a point onto the side's local frame.
    pub fn to_local(&self, point: Vector3<f32>) -> Vector2<f32> {
        let d = point - self.origin;
        Vector2::new(d.dot(self.local_x), d.dot(self.local_y))
    }

    /// Returns the `(row, col)` of the cell containing a local point, or
    /// `None` if the point is outside the side.
    pub fn cell_at(local: Vector2<f32>) -> Option<(usize, usize)> {
        let bucket = |x: f32| {
            (x.abs() < HALF_EXTENT)
                .then(|| (((x + HALF_EXTENT) / FACELET_WIDTH) as usize).min(GRID_SIZE - 1))
        };
        Some((bucket(local.y)?, bucket(local.x)?))
    }

    /// Returns the grid index whose color moves into grid index `i` when the
    /// side is shifted.
    pub const fn shift_source(i: usize, clockwise: bool) -> usize {
        let row = i / GRID_SIZE;
        let col = i % GRID_SIZE;
        if clockwise {
            2 + 3 * col - row
        } else {
            6 - 3 * col + row
        }
    }
    /// Returns the cell that the contents of `(row, col)` move to when the
    /// side is shifted.
    pub const fn shifted_cell(row: usize, col: usize, clockwise: bool) -> (usize, usize) {
        if clockwise {
            (2 - col, row)
        } else {
            (col, 2 - row)
        }
    }

    /// Rotates the colors of the side's facelets by 90 degrees.
    ///
    /// `clockwise` is relative to the local frame, with `local_x` pointing
    /// right and `local_y` pointing up.
    pub fn shift(&self, facelets: &mut [Facelet], clockwise: bool) {
        let old = self.facelets.map(|f| facelets[f.index()].color);
        for (i, f) in self.facelets.iter().enumerate() {
            facelets[f.index()].color = old[Self::shift_source(i, clockwise)];
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_shift_source_is_permutation() {
        for clockwise in [false, true] {
            let mut seen = (0..9).map(|i| Side::shift_source(i, clockwise)).collect::<Vec<_>>();
            seen.sort_unstable();
            assert_eq!(seen, (0..9).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_shifted_cell_matches_source() {
        for clockwise in [false, true] {
            for i in 0..9 {
                let src = Side::shift_source(i, clockwise);
                let (r, c) = Side::shifted_cell(src / 3, src % 3, clockwise);
                assert_eq!(r * 3 + c, i);
            }
        }
    }

    #[test]
    fn test_clockwise_then_counterclockwise() {
        let composed = (0..9)
            .map(|i| Side::shift_source(Side::shift_source(i, false), true))
            .collect::<Vec<_>>();
        assert_eq!(composed, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_cell_at() {
        assert_eq!(Side::cell_at(Vector2::new(0.0, 0.0)), Some((1, 1)));
        assert_eq!(Side::cell_at(Vector2::new(-0.5, 0.5)), Some((2, 0)));
        assert_eq!(Side::cell_at(Vector2::new(0.59, -0.59)), Some((0, 2)));
        assert_eq!(Side::cell_at(Vector2::new(0.6, 0.0)), None);
        assert_eq!(Side::cell_at(Vector2::new(0.0, -0.7)), None);
    }

    #[test]
    fn test_local_frames_are_orthonormal() {
        for id in SideId::ALL {
            let side = Side::new(id, [FaceletId(0); 9]);
            assert_eq!(side.local_x.cross(side.local_y), id.normal_axis().unit());
            assert_eq!(side.normal.dot(side.local_x), 0.0);
            assert_eq!(id.opposite().opposite(), id);
            assert_eq!(SideId::from_axis_sign(id.normal_axis(), id.sign()), id);
        }
    }
}
