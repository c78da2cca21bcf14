use cgmath::{Deg, InnerSpace, Matrix4, Point3, Quaternion, SquareMatrix, Vector3};
use touchcube_prefs::CameraPreferences;

/// Camera orbiting the cube.
///
/// The eye is fixed on the +Z axis looking at the origin; orbiting rotates the
/// cube instead of moving the eye.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Projection settings.
    pub prefs: CameraPreferences,

    /// Rotation to apply to the cube before drawing it.
    rot: Quaternion<f32>,
}
impl Camera {
    /// Constructs a new camera facing the front side.
    pub fn new(prefs: CameraPreferences) -> Self {
        Self {
            prefs,
            rot: Quaternion::new(1.0, 0.0, 0.0, 0.0),
        }
    }

    /// Returns the current camera rotation.
    pub fn rot(&self) -> Quaternion<f32> {
        self.rot
    }
    /// Sets the camera rotation.
    pub fn set_rot(&mut self, new_rot: Quaternion<f32>) {
        self.rot = new_rot.normalize();
    }
    /// Resets the camera rotation.
    pub fn reset(&mut self) {
        self.rot = Quaternion::new(1.0, 0.0, 0.0, 0.0);
    }

    /// Advances the rotation by one frame of angular input.
    ///
    /// `rate` is treated as an angular velocity around the world X, Y, and Z
    /// axes, scaled by `step`. The result is renormalized every frame.
    pub fn rot_by(&mut self, rate: Vector3<f32>, step: f32, speed: f32) {
        let spin = Quaternion::from_sv(0.0, rate * step);
        self.rot = (self.rot + spin * self.rot * speed).normalize();
    }

    /// Returns the projection matrix.
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        cgmath::perspective(
            Deg(self.prefs.fov_degrees),
            self.prefs.aspect_ratio(),
            self.prefs.near,
            self.prefs.far,
        )
    }
    /// Returns the view matrix.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(
            Point3::new(0.0, 0.0, self.prefs.eye_distance),
            Point3::new(0.0, 0.0, 0.0),
            Vector3::unit_y(),
        )
    }
    /// Returns the matrix that rotates the cube.
    pub fn model_matrix(&self) -> Matrix4<f32> {
        Matrix4::from(self.rot)
    }
    /// Returns the matrix from cube space to clip space.
    pub fn view_projection_matrix(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix() * self.model_matrix()
    }
    /// Returns the matrix from clip space to cube space, or `None` if the
    /// projection is degenerate.
    pub fn inverse_view_projection_matrix(&self) -> Option<Matrix4<f32>> {
        self.view_projection_matrix().invert()
    }
}

#[cfg(test)]
mod tests {
    use cgmath::{Rotation, Vector4};

    use super::*;

    fn default_camera() -> Camera {
        Camera::new(touchcube_prefs::DEFAULT_PREFS.camera.clone())
    }

    #[test]
    fn test_front_center_projects_to_screen_center() {
        let camera = default_camera();
        let p = camera.view_projection_matrix() * Vector4::new(0.0, 0.0, 0.6, 1.0);
        assert!((p.x / p.w).abs() < 1e-6);
        assert!((p.y / p.w).abs() < 1e-6);
    }

    #[test]
    fn test_rot_by_stays_normalized() {
        let mut camera = default_camera();
        for _ in 0..100 {
            camera.rot_by(Vector3::new(0.3, -0.7, 0.2), 0.01, 2.5);
        }
        assert!((camera.rot().magnitude() - 1.0).abs() < 1e-5);
        camera.reset();
        assert_eq!(camera.rot(), Quaternion::new(1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_rot_by_turns_around_rate_axis() {
        let mut camera = default_camera();
        camera.rot_by(Vector3::new(0.0, 1.0, 0.0), 0.01, 2.5);
        // A small positive rotation around Y carries +Z toward +X.
        let z = camera.rot().rotate_vector(Vector3::unit_z());
        assert!(z.x > 0.0);
        assert!(z.y.abs() < 1e-6);
    }
}
