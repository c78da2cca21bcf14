use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnimationPreferences {
    /// Degrees that a button-driven or released turn advances each frame.
    pub degrees_per_frame: f32,
}
