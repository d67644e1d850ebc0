//! Viewer engine: owns the camera rig, pointer targeting and overlay sync,
//! and runs them against the host's scene, overlay and clock.

mod accessors;
pub mod command;
mod dispatch;

pub use command::ViewerCommand;

use crate::camera::{CameraModeId, CameraRig};
use crate::error::ViewerError;
use crate::input::{InputEvent, InputProcessor};
use crate::options::Options;
use crate::overlay::{Overlay, ScreenSync};
use crate::picking::{InteractiveTarget, PointerTargeting};
use crate::scene::Scene;
use crate::util::clock::Clock;
use crate::viewport::Viewport;

/// The viewer core: camera modes, pointer targeting and overlay sync
/// wired to a host scene, overlay element and clock.
///
/// The engine owns its collaborators and hands each subsystem exactly the
/// borrows it needs per call. Per frame it runs
/// transition tick → camera update → overlay sync, so hit tests and
/// projections always read the pose that is about to be drawn.
///
/// # Example
///
/// ```ignore
/// let mut engine = ViewerEngine::new(options, scene, overlay, clock, targets, viewport)?;
/// // event loop
/// engine.handle_input(event)?;
/// engine.frame()?;
/// ```
pub struct ViewerEngine<S, O, C> {
    pub(crate) rig: CameraRig,
    pub(crate) targeting: PointerTargeting,
    pub(crate) sync: ScreenSync,
    pub(crate) input: InputProcessor,
    pub(crate) scene: S,
    pub(crate) overlay: O,
    pub(crate) clock: C,
    pub(crate) viewport: Viewport,
    pub(crate) options: Options,
}

impl<S: Scene, O: Overlay, C: Clock> ViewerEngine<S, O, C> {
    /// Build the engine and place the live camera at the `default` pose.
    ///
    /// The overlay starts hidden and every target on its rest material.
    pub fn new(
        options: Options,
        mut scene: S,
        mut overlay: O,
        clock: C,
        targets: Vec<InteractiveTarget>,
        viewport: Viewport,
    ) -> Result<Self, ViewerError> {
        let mut rig =
            CameraRig::new(options.camera.clone(), &options.transition);
        rig.initialize(viewport.aspect());
        rig.update()?;

        let mut targeting = PointerTargeting::new(targets);
        targeting.restore_all(&mut scene);
        overlay.set_visible(false);

        log::info!(
            "viewer ready: {} targets, viewport {}x{}",
            targeting.targets().len(),
            viewport.width,
            viewport.height,
        );

        Ok(Self {
            rig,
            targeting,
            sync: ScreenSync::new(options.overlay.clone()),
            input: InputProcessor::with_key_bindings(options.keybindings.clone()),
            scene,
            overlay,
            clock,
            viewport,
            options,
        })
    }

    /// Whether pointer drags and the wheel currently drive the orbit camera.
    #[must_use]
    pub fn is_orbiting(&self) -> bool {
        *self.rig.active_mode() == CameraModeId::Debug
            && !self.rig.is_transitioning()
    }

    /// Process a platform-agnostic input event.
    ///
    /// The event goes through the [`InputProcessor`]; the command it yields,
    /// if any, is executed immediately.
    pub fn handle_input(&mut self, event: InputEvent) -> Result<(), ViewerError> {
        let orbiting = self.is_orbiting();
        match self.input.handle_event(event, orbiting) {
            Some(command) => self.execute(command),
            None => Ok(()),
        }
    }

    /// Advance one frame.
    ///
    /// Returns the mode committed by a transition that finished this frame.
    pub fn frame(&mut self) -> Result<Option<CameraModeId>, ViewerError> {
        let now = self.clock.now_ms();
        if !now.is_finite() {
            log::warn!("clock returned non-finite time {now}");
        }

        let committed = self.rig.tick(now)?;
        self.rig.update()?;

        if self.sync.is_active() {
            let camera = self.rig.camera()?;
            let _ = self.sync.update(
                camera,
                &self.scene,
                &self.viewport,
                &mut self.overlay,
            );
        }
        Ok(committed)
    }

    /// Detach the debug controller, hide the overlay and rest all targets.
    pub fn teardown(&mut self) {
        self.rig.teardown();
        self.sync.hide(&mut self.overlay);
        self.targeting.restore_all(&mut self.scene);
        log::debug!("viewer torn down");
    }
}
