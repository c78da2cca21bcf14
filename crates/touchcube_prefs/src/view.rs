use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CameraPreferences {
    /// Vertical field of view.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Distance from the eye to the center of the cube.
    pub eye_distance: f32,
    /// Width and height of the draw target in pixels.
    pub viewport: [f32; 2],
}

impl CameraPreferences {
    pub fn aspect_ratio(&self) -> f32 {
        self.viewport[0] / self.viewport[1]
    }
}
