use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::CameraPose;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection, mode poses and debug orbit parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 10.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Pose of the `default` mode.
    pub default_pose: PoseOptions,
    /// Pose of the `screen` close-up mode.
    pub screen_pose: PoseOptions,
    /// Starting pose of the `debug` mode.
    pub debug_pose: PoseOptions,
    /// Debug orbit controller tuning.
    pub orbit: OrbitOptions,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 20.0,
            znear: 0.1,
            zfar: 150.0,
            default_pose: PoseOptions::looking_at([0.0, 5.0, 9.0], [0.0, 3.5, 0.0]),
            screen_pose: PoseOptions::looking_at([0.0, 3.5, 1.2], [0.0, 3.5, 0.0]),
            debug_pose: PoseOptions::looking_at([-15.0, 15.0, 15.0], [0.0, 0.0, 0.0]),
            orbit: OrbitOptions::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(inline)]
#[serde(default)]
/// A camera pose as written in presets.
///
/// When `look_at` is set the orientation is derived from it and `rotation`
/// is ignored.
pub struct PoseOptions {
    /// Eye position.
    pub position: [f32; 3],
    /// Point to face.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub look_at: Option<[f32; 3]>,
    /// Euler angles in radians, applied Y then X then Z.
    pub rotation: [f32; 3],
}

impl PoseOptions {
    /// Pose at `position` facing `target`.
    #[must_use]
    pub fn looking_at(position: [f32; 3], target: [f32; 3]) -> Self {
        Self {
            position,
            look_at: Some(target),
            rotation: [0.0; 3],
        }
    }

    /// Resolve into a [`CameraPose`].
    #[must_use]
    pub fn to_pose(&self) -> CameraPose {
        let position = Vec3::from(self.position);
        match self.look_at {
            Some(target) => CameraPose::looking_at(position, Vec3::from(target)),
            None => CameraPose::new(position, Vec3::from(self.rotation)),
        }
    }
}

impl Default for PoseOptions {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            look_at: None,
            rotation: [0.0; 3],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orbit", inline)]
#[serde(default)]
/// Tuning for the debug camera's orbit controller.
pub struct OrbitOptions {
    /// Radians of rotation per pixel of drag.
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub rotate_speed: f32,
    /// Screen-space pan per pixel, scaled by orbit distance.
    #[schemars(title = "Pan Speed", range(min = 0.0005, max = 0.01), extend("step" = 0.0005))]
    pub pan_speed: f32,
    /// Fraction of the distance covered per zoom step.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_speed: f32,
    /// Spread motion over several frames.
    #[schemars(title = "Damping")]
    pub damping: bool,
    /// Share of pending motion applied per frame when damping.
    #[schemars(title = "Damping Factor", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub damping_factor: f32,
    /// Closest allowed eye distance.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Farthest allowed eye distance.
    #[schemars(skip)]
    pub max_distance: f32,
}

impl Default for OrbitOptions {
    fn default() -> Self {
        Self {
            rotate_speed: 0.01,
            pan_speed: 0.002,
            zoom_speed: 0.25,
            damping: true,
            damping_factor: 0.05,
            min_distance: 2.0,
            max_distance: 100.0,
        }
    }
}
