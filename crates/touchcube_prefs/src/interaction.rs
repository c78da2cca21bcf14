use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InteractionPreferences {
    /// Distance in side-local units that a drag must travel along one axis
    /// before the turning layer is locked.
    pub drag_lock_threshold: f32,
    /// Degrees of layer rotation per side-local unit of drag.
    pub drag_degrees_per_unit: f32,

    /// Analog stick values with a smaller magnitude than this are ignored.
    pub stick_deadzone: f32,
    /// Multiplier from back-panel drag offset to orbit rate.
    pub back_touch_orbit_gain: f32,
    /// Multiplier from orbit input to quaternion delta.
    pub orbit_step: f32,
    /// Multiplier on the quaternion delta applied each frame.
    pub orbit_speed: f32,
}

impl InteractionPreferences {
    /// Returns `value`, or zero if it is within the stick deadzone.
    pub fn apply_stick_deadzone(&self, value: f32) -> f32 {
        match value.abs() < self.stick_deadzone {
            true => 0.0,
            false => value,
        }
    }
}

/// Coordinate ranges of the touch panels.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PanelPreferences {
    /// Largest X and Y coordinates reported by the front panel.
    pub front_max: [f32; 2],
    /// Largest X and Y coordinates reported by the back panel.
    pub back_max: [f32; 2],
}
