use cgmath::Vector3;
use serde::{Deserialize, Serialize};

/// World-space axis that an [`crate::AxisRing`] rotates around.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Display,
)]
pub enum Axis {
    /// X axis (right).
    X = 0,
    /// Y axis (up).
    Y = 1,
    /// Z axis (towards the camera).
    Z = 2,
}
impl Axis {
    /// Returns an integer index for this axis; X = 0, Y = 1, Z = 2.
    pub const fn int(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Returns the next axis in cyclic order (X -> Y -> Z -> X).
    pub const fn next(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::Z,
            Self::Z => Self::X,
        }
    }
    /// Returns the perpendicular axes from this one, using the right-hand
    /// rule. A positive rotation around `self` takes the first returned axis
    /// to the second.
    pub const fn perpendiculars(self) -> (Axis, Axis) {
        (self.next(), self.next().next())
    }

    /// Returns the unit vector along the positive end of this axis.
    pub fn unit(self) -> Vector3<f32> {
        match self {
            Self::X => Vector3::unit_x(),
            Self::Y => Vector3::unit_y(),
            Self::Z => Vector3::unit_z(),
        }
    }
    /// Returns the component of `v` along this axis.
    pub fn component(self, v: Vector3<f32>) -> f32 {
        v[self.int()]
    }
}
