use glam::{Mat3, Mat4, Quat, Vec2, Vec3};

use super::core::{euler_from_quat, Camera};
use crate::options::OrbitOptions;

/// Input deltas smaller than this are treated as settled.
const SETTLE_EPSILON: f32 = 1e-4;

/// Orbit controller for the debug camera: rotates around a focus point,
/// pans in screen space and zooms along the view axis.
///
/// Input accumulates into pending deltas; [`update`](Self::update) applies
/// them once per frame. With damping enabled only a fraction of the
/// pending motion is applied each frame, so the camera glides to rest.
#[derive(Debug, Clone)]
pub struct OrbitController {
    orientation: Quat,
    distance: f32,
    focus_point: Vec3,

    pending_rotate: Vec2,
    pending_pan: Vec2,
    pending_zoom: f32,

    enabled: bool,
    attached: bool,
    damping: bool,
    damping_factor: f32,
    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
    min_distance: f32,
    max_distance: f32,
}

impl OrbitController {
    /// Controller orbiting the origin from `eye`. Starts disabled.
    #[must_use]
    pub fn new(eye: Vec3, options: &OrbitOptions) -> Self {
        let mut controller = Self {
            orientation: Quat::IDENTITY,
            distance: 1.0,
            focus_point: Vec3::ZERO,
            pending_rotate: Vec2::ZERO,
            pending_pan: Vec2::ZERO,
            pending_zoom: 0.0,
            enabled: false,
            attached: true,
            damping: options.damping,
            damping_factor: options.damping_factor.clamp(0.0, 1.0),
            rotate_speed: options.rotate_speed,
            pan_speed: options.pan_speed,
            zoom_speed: options.zoom_speed,
            min_distance: options.min_distance,
            max_distance: options.max_distance,
        };
        controller.look_from(eye, Vec3::ZERO);
        controller
    }

    /// Re-seat the orbit so the eye sits at `eye` looking at `focus`.
    pub fn look_from(&mut self, eye: Vec3, focus: Vec3) {
        let offset = eye - focus;
        self.focus_point = focus;
        self.distance = offset.length().clamp(self.min_distance, self.max_distance);
        if offset.length_squared() > 1e-12 {
            let view = Mat4::look_at_rh(eye, focus, Vec3::Y);
            self.orientation =
                Quat::from_mat3(&Mat3::from_mat4(view).transpose());
        }
    }

    /// Whether input is currently accepted.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable input handling. Disabling drops pending motion.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.clear_pending();
        }
    }

    /// Whether the controller is still bound to input.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Release the input bindings. A detached controller ignores all
    /// further input and never moves the camera again.
    pub fn detach(&mut self) {
        self.attached = false;
        self.enabled = false;
        self.clear_pending();
    }

    /// Current point the camera orbits around.
    #[must_use]
    pub fn focus_point(&self) -> Vec3 {
        self.focus_point
    }

    /// Current eye distance from the focus point.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    fn accepts_input(&self) -> bool {
        self.enabled && self.attached
    }

    fn clear_pending(&mut self) {
        self.pending_rotate = Vec2::ZERO;
        self.pending_pan = Vec2::ZERO;
        self.pending_zoom = 0.0;
    }

    /// Queue a rotation by `delta` pixels of pointer movement.
    pub fn rotate(&mut self, delta: Vec2) {
        if self.accepts_input() {
            self.pending_rotate += delta;
        }
    }

    /// Queue a screen-space pan by `delta` pixels of pointer movement.
    pub fn pan(&mut self, delta: Vec2) {
        if self.accepts_input() {
            self.pending_pan += delta;
        }
    }

    /// Queue a zoom step (positive = zoom in).
    pub fn zoom(&mut self, delta: f32) {
        if self.accepts_input() {
            self.pending_zoom += delta;
        }
    }

    /// Apply queued motion and write the resulting pose into `camera`.
    pub fn update(&mut self, camera: &mut Camera) {
        if !self.attached {
            return;
        }
        let share = if self.damping { self.damping_factor } else { 1.0 };

        self.apply_rotation(self.pending_rotate * share);
        self.apply_pan(self.pending_pan * share);
        self.apply_zoom(self.pending_zoom * share);

        let keep = 1.0 - share;
        self.pending_rotate *= keep;
        self.pending_pan *= keep;
        self.pending_zoom *= keep;
        if self.pending_rotate.length_squared() < SETTLE_EPSILON * SETTLE_EPSILON
        {
            self.pending_rotate = Vec2::ZERO;
        }
        if self.pending_pan.length_squared() < SETTLE_EPSILON * SETTLE_EPSILON {
            self.pending_pan = Vec2::ZERO;
        }
        if self.pending_zoom.abs() < SETTLE_EPSILON {
            self.pending_zoom = 0.0;
        }

        let dir = self.orientation * Vec3::Z;
        camera.position = self.focus_point + dir * self.distance;
        camera.rotation = euler_from_quat(self.orientation);
    }

    fn apply_rotation(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        // Horizontal rotation around the world up axis keeps the horizon
        // level.
        let horizontal = Quat::from_axis_angle(Vec3::Y, -delta.x * self.rotate_speed);
        self.orientation = horizontal * self.orientation;

        let right = self.orientation * Vec3::X;
        let vertical = Quat::from_axis_angle(right, -delta.y * self.rotate_speed);
        self.orientation = (vertical * self.orientation).normalize();
    }

    fn apply_pan(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        let right = self.orientation * Vec3::X;
        let up = self.orientation * Vec3::Y;
        // Scale with distance so a pixel of drag tracks the surface under
        // the pointer at any zoom level.
        let scale = self.pan_speed * self.distance;
        self.focus_point += right * (-delta.x * scale) + up * (delta.y * scale);
    }

    fn apply_zoom(&mut self, delta: f32) {
        if delta == 0.0 {
            return;
        }
        self.distance *= 1.0 - delta * self.zoom_speed;
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);
    }
}
