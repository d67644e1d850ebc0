//! Read-only query methods and collaborator access for [`ViewerEngine`].

use super::ViewerEngine;
use crate::camera::{CameraRig, CameraUniform};
use crate::error::ViewerError;
use crate::input::InputProcessor;
use crate::options::Options;
use crate::overlay::ScreenSync;
use crate::picking::PointerTargeting;
use crate::viewport::Viewport;

// ── Subsystems ──

impl<S, O, C> ViewerEngine<S, O, C> {
    /// Camera modes and the live camera.
    #[must_use]
    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    /// Hover/select state.
    #[must_use]
    pub fn targeting(&self) -> &PointerTargeting {
        &self.targeting
    }

    /// Overlay placement state.
    #[must_use]
    pub fn screen_sync(&self) -> &ScreenSync {
        &self.sync
    }

    /// Input processor, e.g. to inspect pointer state.
    #[must_use]
    pub fn input(&self) -> &InputProcessor {
        &self.input
    }

    /// Uniform snapshot of the live camera for the host renderer.
    pub fn camera_uniform(&self) -> Result<CameraUniform, ViewerError> {
        self.rig.uniform()
    }
}

// ── Collaborators ──

impl<S, O, C> ViewerEngine<S, O, C> {
    /// The host scene.
    #[must_use]
    pub fn scene(&self) -> &S {
        &self.scene
    }

    /// Mutable access to the host scene.
    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    /// The overlay element.
    #[must_use]
    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    /// The clock driving transitions.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Options the engine was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}
