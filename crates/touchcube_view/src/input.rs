use bitflags::bitflags;
use cgmath::Point2;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Buttons held during a frame.
    #[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct Buttons: u32 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const TRIANGLE = 1 << 4;
        const CIRCLE = 1 << 5;
        const CROSS = 1 << 6;
        const SQUARE = 1 << 7;
    }
}

/// Contact on a touch panel, in panel pixels.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct TouchPoint {
    /// Identifier that stays the same for the lifetime of one contact.
    pub id: u8,
    /// Horizontal position, increasing to the right.
    pub x: f32,
    /// Vertical position, increasing downward.
    pub y: f32,
}

/// Snapshot of all inputs for one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameInput {
    /// First contact on the front panel, if any.
    pub front_touch: Option<TouchPoint>,
    /// First contact on the back panel, if any.
    pub back_touch: Option<TouchPoint>,
    /// Buttons held this frame.
    pub buttons: Buttons,
    /// Left analog stick X and Y, where 128 is centered.
    pub left_stick: [u8; 2],
    /// Right analog stick X and Y, where 128 is centered.
    pub right_stick: [u8; 2],
}
impl Default for FrameInput {
    fn default() -> Self {
        Self {
            front_touch: None,
            back_touch: None,
            buttons: Buttons::empty(),
            left_stick: [128, 128],
            right_stick: [128, 128],
        }
    }
}

/// Converts a raw analog stick byte to the range -1.0 to 1.0.
pub fn stick_axis(raw: u8) -> f32 {
    raw as f32 / 255.0 * 2.0 - 1.0
}

/// Converts a touch position to normalized device coordinates, given the
/// largest coordinates the panel reports.
pub fn panel_to_ndc(touch: TouchPoint, panel_max: [f32; 2]) -> Point2<f32> {
    Point2::new(
        touch.x / panel_max[0] * 2.0 - 1.0,
        1.0 - touch.y / panel_max[1] * 2.0,
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_panel_to_ndc() {
        let max = [1919.0, 1087.0];
        let corner = TouchPoint { id: 0, x: 0.0, y: 0.0 };
        assert_eq!(panel_to_ndc(corner, max), Point2::new(-1.0, 1.0));
        let corner = TouchPoint { id: 0, x: 1919.0, y: 1087.0 };
        assert_eq!(panel_to_ndc(corner, max), Point2::new(1.0, -1.0));
    }

    #[test]
    fn test_stick_axis() {
        assert_eq!(stick_axis(0), -1.0);
        assert_eq!(stick_axis(255), 1.0);
        assert!(stick_axis(128).abs() < 0.01);
    }
}
