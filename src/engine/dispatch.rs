//! Command execution for [`ViewerEngine`].

use glam::Vec2;

use super::{ViewerCommand, ViewerEngine};
use crate::camera::CameraModeId;
use crate::error::ViewerError;
use crate::overlay::Overlay;
use crate::scene::Scene;
use crate::util::clock::Clock;
use crate::viewport::Viewport;

impl<S: Scene, O: Overlay, C: Clock> ViewerEngine<S, O, C> {
    /// Execute a single command.
    ///
    /// Only programmer errors surface here (an unknown focus mode, or a
    /// rig that lost its camera); missed picks and ignored gestures are
    /// silent.
    pub fn execute(&mut self, command: ViewerCommand) -> Result<(), ViewerError> {
        match command {
            ViewerCommand::PointerMoved { position } => {
                self.pointer_moved(position)
            }
            ViewerCommand::Select { position } => self.select(position),
            ViewerCommand::CloseOverlay => self.close_overlay(),
            ViewerCommand::ToggleDebugCamera => self.toggle_debug_camera(),
            ViewerCommand::RotateCamera { delta } => {
                if let Some(orbit) = self.rig.orbit_mut() {
                    orbit.rotate(delta);
                }
                Ok(())
            }
            ViewerCommand::PanCamera { delta } => {
                if let Some(orbit) = self.rig.orbit_mut() {
                    orbit.pan(delta);
                }
                Ok(())
            }
            ViewerCommand::Zoom { delta } => {
                if let Some(orbit) = self.rig.orbit_mut() {
                    orbit.zoom(delta);
                }
                Ok(())
            }
            ViewerCommand::Resize { width, height } => {
                self.resize(width, height)
            }
        }
    }

    fn pointer_moved(&mut self, position: Vec2) -> Result<(), ViewerError> {
        let camera = self.rig.camera()?;
        let _ = self.targeting.handle_pointer_move(
            camera,
            &mut self.scene,
            &self.viewport,
            position,
        );
        Ok(())
    }

    fn select(&mut self, position: Vec2) -> Result<(), ViewerError> {
        let camera = self.rig.camera()?;
        let Some(selection) = self.targeting.handle_click(
            camera,
            &self.scene,
            &self.viewport,
            position,
        ) else {
            return Ok(());
        };

        let from = self.rig.active_mode().clone();
        if from == CameraModeId::Debug {
            if let Some(orbit) = self.rig.orbit_mut() {
                orbit.set_enabled(false);
            }
        }

        let now = self.clock.now_ms();
        if let Err(err) =
            self.rig.request_transition(&from, &selection.focus_mode, now)
        {
            let _ = self.targeting.release(&mut self.scene);
            return Err(err);
        }
        log::info!(
            "zooming into {:?} ({from} -> {})",
            selection.target,
            selection.focus_mode
        );

        let camera = self.rig.camera()?;
        let _ = self.sync.show(
            selection.target,
            camera,
            &self.scene,
            &self.viewport,
            &mut self.overlay,
        );
        Ok(())
    }

    fn close_overlay(&mut self) -> Result<(), ViewerError> {
        let Some(released) = self.targeting.release(&mut self.scene) else {
            return Ok(());
        };
        self.sync.hide(&mut self.overlay);

        let from = self.rig.active_mode().clone();
        let now = self.clock.now_ms();
        self.rig
            .request_transition(&from, &CameraModeId::Default, now)?;
        log::info!("closing overlay for {:?}", released.object);
        Ok(())
    }

    fn toggle_debug_camera(&mut self) -> Result<(), ViewerError> {
        if self.targeting.is_zoomed() {
            log::debug!("debug camera toggle ignored while zoomed");
            return Ok(());
        }

        let entering = *self.rig.active_mode() != CameraModeId::Debug;
        if let Some(orbit) = self.rig.orbit_mut() {
            orbit.set_enabled(entering);
        }
        let target = if entering {
            CameraModeId::Debug
        } else {
            CameraModeId::Default
        };
        self.rig.set_active_mode(&target)
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), ViewerError> {
        if width == 0 || height == 0 {
            log::debug!("ignoring degenerate resize {width}x{height}");
            return Ok(());
        }
        self.viewport = Viewport::new(width as f32, height as f32);
        self.rig.resize(self.viewport.aspect());

        if self.sync.is_active() {
            let camera = self.rig.camera()?;
            let _ = self.sync.update(
                camera,
                &self.scene,
                &self.viewport,
                &mut self.overlay,
            );
        }
        Ok(())
    }
}
