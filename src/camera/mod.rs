//! Camera system: named camera modes, eased transitions between them, and
//! the live camera every other subsystem reads from.

/// Core camera struct, poses and GPU uniform types.
pub mod core;
/// Camera mode identifiers and snapshots.
pub mod mode;
/// Orbit controller for the debug camera.
pub mod orbit;
/// Mode registry owning the live camera.
pub mod rig;
/// Timed eased interpolation between poses.
pub mod transition;

pub use self::core::{Camera, CameraPose, CameraUniform};
pub use mode::{CameraMode, CameraModeId};
pub use orbit::OrbitController;
pub use rig::CameraRig;
pub use transition::{CameraTransition, TransitionController, TransitionStep};
