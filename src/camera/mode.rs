use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use super::core::{Camera, CameraPose};
use super::orbit::OrbitController;

/// Identifier of a camera mode registered with the rig.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CameraModeId {
    /// Overview of the whole desk.
    #[default]
    Default,
    /// Close-up facing the selected screen.
    Screen,
    /// Free orbit for manual inspection.
    Debug,
    /// Any extension mode registered at runtime.
    Named(String),
}

impl CameraModeId {
    /// Construct an id from a name, mapping the built-in names to their
    /// variants.
    #[must_use]
    pub fn named(name: &str) -> Self {
        match name {
            "default" => Self::Default,
            "screen" => Self::Screen,
            "debug" => Self::Debug,
            other => Self::Named(other.to_owned()),
        }
    }

    /// Lowercase name of the mode.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Default => "default",
            Self::Screen => "screen",
            Self::Debug => "debug",
            Self::Named(name) => name,
        }
    }
}

impl fmt::Display for CameraModeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CameraModeId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::named(s))
    }
}

/// An independently configured camera the rig can activate.
///
/// Modes are peers: each holds a full camera snapshot, never a delta from
/// another mode.
#[derive(Debug, Clone)]
pub struct CameraMode {
    /// The mode's own camera configuration.
    pub camera: Camera,
    /// Whether [`CameraRig::resize`](super::CameraRig::resize) updates
    /// this mode's aspect ratio.
    pub tracks_viewport: bool,
    /// Interactive controller that drives `camera` while the mode is
    /// active.
    pub orbit: Option<OrbitController>,
}

impl CameraMode {
    /// Mode that tracks the viewport and has no controller.
    #[must_use]
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            tracks_viewport: true,
            orbit: None,
        }
    }

    /// Attach an orbit controller.
    #[must_use]
    pub fn with_orbit(mut self, orbit: OrbitController) -> Self {
        self.orbit = Some(orbit);
        self
    }

    /// Keep the aspect ratio this mode was created with across resizes.
    #[must_use]
    pub fn fixed_aspect(mut self) -> Self {
        self.tracks_viewport = false;
        self
    }

    /// Canonical pose of this mode.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        self.camera.pose()
    }
}
