use cgmath::{EuclideanSpace, InnerSpace, Matrix4, Point2, Point3, Vector2, Vector3, Vector4};
use touchcube_core::{Cube, FaceletId, Side, SideId};

/// Clip-space depths of the two points used to construct a touch ray.
const RAY_DEPTHS: [f32; 2] = [0.1, 0.9];

/// Ray in cube space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    /// Point on the ray nearest the eye.
    pub origin: Point3<f32>,
    /// Unit direction away from the eye.
    pub direction: Vector3<f32>,
}
impl Ray {
    /// Constructs the ray under a point in normalized device coordinates, or
    /// returns `None` if the matrix is degenerate.
    pub fn from_ndc(ndc: Point2<f32>, inverse_view_projection: &Matrix4<f32>) -> Option<Self> {
        let unproject = |depth: f32| {
            let p = *inverse_view_projection * Vector4::new(ndc.x, ndc.y, depth, 1.0);
            (p.w.abs() > f32::EPSILON).then(|| Point3::from_homogeneous(p))
        };
        let near = unproject(RAY_DEPTHS[0])?;
        let far = unproject(RAY_DEPTHS[1])?;
        let direction = far - near;
        (direction.magnitude2() > 0.0).then(|| Self {
            origin: near,
            direction: direction.normalize(),
        })
    }

    /// Returns the point at parameter `t` along the ray.
    pub fn at(&self, t: f32) -> Point3<f32> {
        self.origin + self.direction * t
    }

    /// Intersects the ray with the plane of a side and returns the hit in the
    /// side's local frame, ignoring the side's extent. Returns `None` if the
    /// ray is parallel to the plane.
    pub fn intersect_side_plane(&self, side: &Side) -> Option<Vector2<f32>> {
        let denominator = self.direction.dot(side.normal);
        if denominator.abs() < f32::EPSILON {
            return None;
        }
        let t = (side.origin - self.origin.to_vec()).dot(side.normal) / denominator;
        Some(side.to_local(self.at(t).to_vec()))
    }
}

/// Facelet found under a touch.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PickHit {
    /// Facelet that was hit.
    pub facelet: FaceletId,
    /// Side containing the facelet.
    pub side: SideId,
    /// Hit point in the side's local frame.
    pub local: Vector2<f32>,
}

/// Returns the facelet under a point in normalized device coordinates, or
/// `None` if nothing is there.
pub fn pick(cube: &Cube, ndc: Point2<f32>, inverse_view_projection: &Matrix4<f32>) -> Option<PickHit> {
    pick_ray(cube, &Ray::from_ndc(ndc, inverse_view_projection)?)
}

/// Returns the first facelet hit by a ray, or `None` if it misses the cube.
pub fn pick_ray(cube: &Cube, ray: &Ray) -> Option<PickHit> {
    cube.sides().iter().find_map(|side| {
        // Only sides facing the eye are eligible.
        if ray.direction.dot(side.normal) >= 0.0 {
            return None;
        }
        let local = ray.intersect_side_plane(side)?;
        let (row, col) = Side::cell_at(local)?;
        Some(PickHit {
            facelet: side.facelet_at(row, col),
            side: side.id,
            local,
        })
    })
}
