use glam::{EulerRot, Mat3, Mat4, Quat, Vec2, Vec3, Vec4};

use crate::picking::Ray;

/// Position plus Euler orientation, the unit a transition interpolates.
///
/// `rotation` holds the X, Y and Z angles in radians. They are applied in
/// Y-X-Z order (yaw, then pitch, then roll), which keeps a camera's
/// horizon level when only yaw and pitch are used.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraPose {
    /// Eye position in world space.
    pub position: Vec3,
    /// Euler angles (x, y, z) in radians, Y-X-Z application order.
    pub rotation: Vec3,
}

impl CameraPose {
    /// Create a pose from a position and explicit Euler angles.
    #[must_use]
    pub fn new(position: Vec3, rotation: Vec3) -> Self {
        Self { position, rotation }
    }

    /// Pose at `position` whose -Z axis points at `target` with +Y up.
    ///
    /// A target coincident with the position yields zero rotation.
    #[must_use]
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        if (target - position).length_squared() < 1e-12 {
            return Self::new(position, Vec3::ZERO);
        }
        let view = Mat4::look_at_rh(position, target, Vec3::Y);
        // Camera-to-world rotation is the transpose of the view rotation.
        let orientation = Quat::from_mat3(&Mat3::from_mat4(view).transpose());
        Self::new(position, euler_from_quat(orientation))
    }

    /// Orientation as a quaternion.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.rotation.y,
            self.rotation.x,
            self.rotation.z,
        )
    }

    /// Component-wise interpolation of position and Euler angles.
    ///
    /// This is not a spherical interpolation: large angle deltas can take
    /// a longer path than the shortest rotation. The camera moves used by
    /// the viewer are small enough that the difference is not visible.
    /// `t <= 0` returns `self` and `t >= 1` returns `other` exactly.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        if t <= 0.0 {
            return *self;
        }
        if t >= 1.0 {
            return *other;
        }
        Self {
            position: self.position.lerp(other.position, t),
            rotation: self.rotation.lerp(other.rotation, t),
        }
    }
}

/// Convert a quaternion back to (x, y, z) Euler angles in Y-X-Z order.
pub(crate) fn euler_from_quat(orientation: Quat) -> Vec3 {
    let (y, x, z) = orientation.to_euler(EulerRot::YXZ);
    Vec3::new(x, y, z)
}

/// Perspective camera with an Euler-angle pose and a cached world matrix.
///
/// The world matrix is only recomputed by
/// [`update_world_matrix`](Self::update_world_matrix); projection and ray
/// casting read the cached value so every consumer in a frame sees the
/// same pose.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye position in world space.
    pub position: Vec3,
    /// Euler angles (x, y, z) in radians, Y-X-Z application order.
    pub rotation: Vec3,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    world: Mat4,
}

impl Camera {
    /// Camera at the origin looking down -Z.
    #[must_use]
    pub fn new(fovy: f32, aspect: f32, znear: f32, zfar: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            fovy,
            aspect,
            znear,
            zfar,
            world: Mat4::IDENTITY,
        }
    }

    /// Builder: place the camera at `pose` and refresh the world matrix.
    #[must_use]
    pub fn with_pose(mut self, pose: CameraPose) -> Self {
        self.set_pose(pose);
        self.update_world_matrix();
        self
    }

    /// Current position and orientation.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        CameraPose::new(self.position, self.rotation)
    }

    /// Overwrite position and orientation. The world matrix is left stale
    /// until the next [`update_world_matrix`](Self::update_world_matrix).
    pub fn set_pose(&mut self, pose: CameraPose) {
        self.position = pose.position;
        self.rotation = pose.rotation;
    }

    /// Rotate in place so the camera faces `target`.
    pub fn look_at(&mut self, target: Vec3) {
        self.rotation = CameraPose::looking_at(self.position, target).rotation;
    }

    /// Orientation as a quaternion.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        self.pose().orientation()
    }

    /// Unit vector the camera looks along.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation() * Vec3::NEG_Z
    }

    /// Recompute the cached world matrix from position and orientation.
    pub fn update_world_matrix(&mut self) {
        self.world =
            Mat4::from_rotation_translation(self.orientation(), self.position);
    }

    /// Cached camera-to-world matrix.
    #[must_use]
    pub fn world_matrix(&self) -> Mat4 {
        self.world
    }

    /// World-to-camera matrix derived from the cached world matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.world.inverse()
    }

    /// Projection matrix.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        // perspective_rh uses the [0,1] depth range
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.view_matrix()
    }

    /// Project a world-space point to normalized device coordinates.
    ///
    /// Returns `None` when the point lies behind the camera or the
    /// projection is not finite; such a point has no meaningful place on
    /// screen.
    #[must_use]
    pub fn project(&self, world: Vec3) -> Option<Vec3> {
        let clip = self.build_matrix() * Vec4::from((world, 1.0));
        if clip.w <= f32::EPSILON {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        ndc.is_finite().then_some(ndc)
    }

    /// Ray from the eye through a point given in normalized device
    /// coordinates. Reads the cached world matrix, like
    /// [`project`](Self::project).
    #[must_use]
    pub fn ray_through(&self, ndc: Vec2) -> Ray {
        let eye = self.world.w_axis.truncate();
        let inverse = self.build_matrix().inverse();
        let far = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        Ray::new(eye, far - eye)
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform holding the view-projection matrix and camera metadata, for
/// whichever renderer consumes the live camera.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.0,
            forward: [0.0, 0.0, -1.0],
            fovy: 20.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_matrix().to_cols_array_2d();
        self.position = camera.position.to_array();
        self.aspect = camera.aspect;
        self.forward = camera.forward().to_array();
        self.fovy = camera.fovy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_at(pose: CameraPose) -> Camera {
        Camera::new(20.0, 16.0 / 9.0, 0.1, 150.0).with_pose(pose)
    }

    #[test]
    fn looking_straight_ahead_has_zero_rotation() {
        let pose = CameraPose::looking_at(
            Vec3::new(0.0, 3.5, 1.2),
            Vec3::new(0.0, 3.5, 0.0),
        );
        assert!(pose.rotation.length() < 1e-5, "{:?}", pose.rotation);
    }

    #[test]
    fn looking_at_points_forward_at_target() {
        let eye = Vec3::new(-15.0, 15.0, 15.0);
        let camera = camera_at(CameraPose::looking_at(eye, Vec3::ZERO));
        let expected = (Vec3::ZERO - eye).normalize();
        assert!((camera.forward() - expected).length() < 1e-4);
    }

    #[test]
    fn target_projects_to_screen_center() {
        let target = Vec3::new(1.0, 2.0, -3.0);
        let camera =
            camera_at(CameraPose::looking_at(Vec3::new(4.0, 6.0, 9.0), target));
        let ndc = camera.project(target).unwrap();
        assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4, "{ndc:?}");
    }

    #[test]
    fn point_behind_camera_does_not_project() {
        let camera = camera_at(CameraPose::default());
        assert!(camera.project(Vec3::new(0.0, 0.0, 5.0)).is_none());
        assert!(camera.project(Vec3::new(0.0, 0.0, -5.0)).is_some());
    }

    #[test]
    fn center_ray_follows_forward() {
        let camera = camera_at(CameraPose::looking_at(
            Vec3::new(0.0, 5.0, 9.0),
            Vec3::new(0.0, 3.5, 0.0),
        ));
        let ray = camera.ray_through(Vec2::ZERO);
        assert_eq!(ray.origin, camera.position);
        assert!((ray.direction - camera.forward()).length() < 1e-4);
    }

    #[test]
    fn ray_matches_projection_with_stale_pose() {
        let mut camera = camera_at(CameraPose::looking_at(
            Vec3::new(0.0, 5.0, 9.0),
            Vec3::new(0.0, 3.5, 0.0),
        ));
        camera.set_pose(CameraPose::new(Vec3::new(4.0, 0.0, 0.0), Vec3::ZERO));

        let point = Vec3::new(0.3, 3.6, 0.2);
        let ndc = camera.project(point).unwrap();
        let ray = camera.ray_through(ndc.truncate());
        assert_eq!(ray.origin, camera.world_matrix().w_axis.truncate());
        let along = (point - ray.origin).dot(ray.direction);
        assert!((ray.at(along) - point).length() < 1e-3);
    }

    #[test]
    fn lerp_endpoints_are_exact() {
        let a = CameraPose::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.1, 0.2, 0.3));
        let b = CameraPose::new(Vec3::new(-7.0, 0.5, 9.0), Vec3::new(-0.4, 1.2, 0.0));
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        let mid = a.lerp(&b, 0.5);
        assert!((mid.position - Vec3::new(-3.0, 1.25, 6.0)).length() < 1e-6);
    }

    #[test]
    fn world_matrix_is_stale_until_updated() {
        let mut camera = camera_at(CameraPose::default());
        camera.set_pose(CameraPose::new(Vec3::X, Vec3::ZERO));
        assert_eq!(camera.world_matrix(), Mat4::IDENTITY);
        camera.update_world_matrix();
        assert_eq!(camera.world_matrix().w_axis.truncate(), Vec3::X);
    }

    #[test]
    fn uniform_tracks_camera() {
        let camera = camera_at(CameraPose::new(Vec3::new(0.0, 1.0, 2.0), Vec3::ZERO));
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);
        assert_eq!(uniform.position, [0.0, 1.0, 2.0]);
        assert_eq!(uniform.fovy, 20.0);
        assert!((uniform.forward[2] + 1.0).abs() < 1e-6);
    }
}
