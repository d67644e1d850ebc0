use rustc_hash::FxHashMap;

use super::core::{Camera, CameraPose, CameraUniform};
use super::mode::{CameraMode, CameraModeId};
use super::orbit::OrbitController;
use super::transition::{CameraTransition, TransitionController, TransitionStep};
use crate::error::ViewerError;
use crate::options::{CameraOptions, TransitionOptions};

/// Owns the registry of camera modes, the active mode, and the single live
/// camera every other subsystem reads from.
///
/// The rig is the only writer of the live camera. Per frame the host calls
/// [`tick`](Self::tick) then [`update`](Self::update) before anything
/// projects or casts rays, so readers always see the latest pose.
pub struct CameraRig {
    options: CameraOptions,
    live: Option<Camera>,
    modes: FxHashMap<CameraModeId, CameraMode>,
    active: CameraModeId,
    transition: TransitionController,
}

impl CameraRig {
    /// Create an uninitialized rig. Call [`initialize`](Self::initialize)
    /// before ticking.
    #[must_use]
    pub fn new(options: CameraOptions, transition: &TransitionOptions) -> Self {
        Self {
            options,
            live: None,
            modes: FxHashMap::default(),
            active: CameraModeId::Default,
            transition: TransitionController::new(
                transition.duration(),
                transition.easing,
            ),
        }
    }

    /// Build the live camera and the `default`, `screen` and `debug` modes.
    ///
    /// Each mode receives its own clone of the live camera placed at the
    /// configured pose. `debug` also gets an orbit controller, disabled
    /// until the debug camera is toggled on. Re-initializing resets every
    /// mode and drops any in-flight transition.
    pub fn initialize(&mut self, aspect: f32) {
        let base = Camera::new(
            self.options.fovy,
            aspect,
            self.options.znear,
            self.options.zfar,
        );

        let default_pose = self.options.default_pose.to_pose();
        let screen_pose = self.options.screen_pose.to_pose();
        let debug_pose = self.options.debug_pose.to_pose();

        let orbit = OrbitController::new(debug_pose.position, &self.options.orbit);

        self.modes.clear();
        let _ = self.modes.insert(
            CameraModeId::Default,
            CameraMode::new(base.clone().with_pose(default_pose)),
        );
        let _ = self.modes.insert(
            CameraModeId::Screen,
            CameraMode::new(base.clone().with_pose(screen_pose)),
        );
        let _ = self.modes.insert(
            CameraModeId::Debug,
            CameraMode::new(base.clone().with_pose(debug_pose)).with_orbit(orbit),
        );

        self.active = CameraModeId::Default;
        self.transition.cancel();
        self.live = Some(base.with_pose(default_pose));
        log::debug!("camera rig initialized (aspect {aspect:.3})");
    }

    /// Whether [`initialize`](Self::initialize) has run.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.live.is_some()
    }

    /// Register an additional mode, returning the one it replaced.
    pub fn register_mode(
        &mut self,
        id: CameraModeId,
        mode: CameraMode,
    ) -> Option<CameraMode> {
        self.modes.insert(id, mode)
    }

    /// Look up a registered mode.
    pub fn mode(&self, id: &CameraModeId) -> Result<&CameraMode, ViewerError> {
        self.modes
            .get(id)
            .ok_or_else(|| ViewerError::UnknownMode(id.clone()))
    }

    /// Mutable access to a registered mode.
    pub fn mode_mut(
        &mut self,
        id: &CameraModeId,
    ) -> Result<&mut CameraMode, ViewerError> {
        self.modes
            .get_mut(id)
            .ok_or_else(|| ViewerError::UnknownMode(id.clone()))
    }

    /// The currently active mode.
    #[must_use]
    pub fn active_mode(&self) -> &CameraModeId {
        &self.active
    }

    /// Switch modes immediately, without animation.
    ///
    /// Any in-flight transition is cancelled so it cannot commit over the
    /// explicit choice.
    pub fn set_active_mode(&mut self, id: &CameraModeId) -> Result<(), ViewerError> {
        if !self.modes.contains_key(id) {
            return Err(ViewerError::UnknownMode(id.clone()));
        }
        if self.transition.is_active() {
            log::debug!("mode switch to '{id}' cancels in-flight transition");
            self.transition.cancel();
        }
        self.active = id.clone();
        log::info!("camera mode: {id}");
        Ok(())
    }

    /// Begin an animated move from `from`'s pose to `to`'s pose.
    ///
    /// When another transition is still in flight the new one starts from
    /// the pose currently on screen rather than from `from`'s canonical
    /// pose, so preemption never makes the camera jump.
    pub fn request_transition(
        &mut self,
        from: &CameraModeId,
        to: &CameraModeId,
        now_ms: f64,
    ) -> Result<(), ViewerError> {
        let canonical_from = self.mode(from)?.pose();
        let to_pose = self.mode(to)?.pose();
        let from_pose = self.transition.current_pose().unwrap_or(canonical_from);

        let preempted =
            self.transition.start(from_pose, to_pose, to.clone(), now_ms);
        log::debug!(
            "camera transition {from} -> {to} over {:?}{}",
            self.transition.duration(),
            if preempted { " (preempting)" } else { "" },
        );
        Ok(())
    }

    /// Advance the in-flight transition to `now_ms`.
    ///
    /// Returns the newly committed mode on the frame the transition
    /// completes, `None` otherwise. Ticking after completion is a no-op.
    pub fn tick(&mut self, now_ms: f64) -> Result<Option<CameraModeId>, ViewerError> {
        if self.live.is_none() {
            return Err(ViewerError::NoActiveCamera);
        }
        match self.transition.step(now_ms) {
            TransitionStep::Idle | TransitionStep::InFlight(_) => Ok(None),
            TransitionStep::Completed { target, .. } => {
                log::info!("camera mode: {target}");
                self.active = target.clone();
                Ok(Some(target))
            }
        }
    }

    /// Propagate a new viewport aspect ratio to the live camera and every
    /// mode that tracks the viewport.
    pub fn resize(&mut self, aspect: f32) {
        if let Some(live) = &mut self.live {
            live.aspect = aspect;
        }
        for mode in self.modes.values_mut().filter(|m| m.tracks_viewport) {
            mode.camera.aspect = aspect;
        }
    }

    /// Per-frame pose copy into the live camera.
    ///
    /// Steps the orbit controller while `debug` is active, then copies the
    /// in-flight transition pose (or the active mode's pose) into the live
    /// camera and recomputes its world matrix.
    pub fn update(&mut self) -> Result<(), ViewerError> {
        let Some(live) = self.live.as_mut() else {
            return Err(ViewerError::NoActiveCamera);
        };
        let mode = self
            .modes
            .get_mut(&self.active)
            .ok_or_else(|| ViewerError::UnknownMode(self.active.clone()))?;

        if self.active == CameraModeId::Debug {
            if let Some(orbit) = mode.orbit.as_mut() {
                orbit.update(&mut mode.camera);
            }
        }

        let pose = self.transition.current_pose().unwrap_or_else(|| mode.pose());
        live.set_pose(pose);
        live.update_world_matrix();
        Ok(())
    }

    /// Release the debug controller's input bindings.
    pub fn teardown(&mut self) {
        for mode in self.modes.values_mut() {
            if let Some(orbit) = mode.orbit.as_mut() {
                orbit.detach();
            }
        }
        log::debug!("camera rig torn down");
    }

    /// The live camera.
    pub fn camera(&self) -> Result<&Camera, ViewerError> {
        self.live.as_ref().ok_or(ViewerError::NoActiveCamera)
    }

    /// Uniform snapshot of the live camera for a renderer.
    pub fn uniform(&self) -> Result<CameraUniform, ViewerError> {
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(self.camera()?);
        Ok(uniform)
    }

    /// Pose currently shown by the live camera.
    pub fn pose(&self) -> Result<CameraPose, ViewerError> {
        self.camera().map(Camera::pose)
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_active()
    }

    /// The in-flight transition, if any.
    #[must_use]
    pub fn transition(&self) -> Option<&CameraTransition> {
        self.transition.active()
    }

    /// The debug mode's orbit controller.
    pub fn orbit_mut(&mut self) -> Option<&mut OrbitController> {
        self.modes
            .get_mut(&CameraModeId::Debug)
            .and_then(|mode| mode.orbit.as_mut())
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::util::easing::EasingFunction;

    fn rig() -> CameraRig {
        let mut rig =
            CameraRig::new(CameraOptions::default(), &TransitionOptions::default());
        rig.initialize(16.0 / 9.0);
        rig
    }

    fn default_pose() -> CameraPose {
        CameraOptions::default().default_pose.to_pose()
    }

    fn screen_pose() -> CameraPose {
        CameraOptions::default().screen_pose.to_pose()
    }

    #[test]
    fn uninitialized_rig_reports_no_camera() {
        let mut rig =
            CameraRig::new(CameraOptions::default(), &TransitionOptions::default());
        assert!(matches!(rig.tick(0.0), Err(ViewerError::NoActiveCamera)));
        assert!(matches!(rig.update(), Err(ViewerError::NoActiveCamera)));
        assert!(rig.camera().is_err());
    }

    #[test]
    fn initialize_registers_builtin_modes() {
        let rig = rig();
        assert_eq!(rig.active_mode(), &CameraModeId::Default);
        for id in [CameraModeId::Default, CameraModeId::Screen, CameraModeId::Debug] {
            assert!(rig.mode(&id).is_ok(), "{id} missing");
        }
        let screen = rig.mode(&CameraModeId::Screen).unwrap();
        assert_eq!(screen.camera.position, Vec3::new(0.0, 3.5, 1.2));
        assert!(rig.mode(&CameraModeId::Debug).unwrap().orbit.is_some());
    }

    #[test]
    fn unknown_mode_is_rejected_without_side_effects() {
        let mut rig = rig();
        let bogus = CameraModeId::named("overhead");
        assert!(matches!(
            rig.set_active_mode(&bogus),
            Err(ViewerError::UnknownMode(_))
        ));
        assert!(matches!(
            rig.request_transition(&CameraModeId::Default, &bogus, 0.0),
            Err(ViewerError::UnknownMode(_))
        ));
        assert_eq!(rig.active_mode(), &CameraModeId::Default);
        assert!(!rig.is_transitioning());
    }

    #[test]
    fn transition_commits_at_duration() {
        let mut rig = rig();
        rig.request_transition(&CameraModeId::Default, &CameraModeId::Screen, 0.0)
            .unwrap();
        assert_eq!(rig.tick(999.0).unwrap(), None);
        assert_eq!(rig.active_mode(), &CameraModeId::Default);
        assert_eq!(rig.tick(1000.0).unwrap(), Some(CameraModeId::Screen));
        assert_eq!(rig.active_mode(), &CameraModeId::Screen);
    }

    #[test]
    fn ticking_after_completion_is_idempotent() {
        let mut rig = rig();
        rig.request_transition(&CameraModeId::Default, &CameraModeId::Screen, 0.0)
            .unwrap();
        let _ = rig.tick(1000.0).unwrap();
        rig.update().unwrap();
        let committed = rig.pose().unwrap();
        for now in [1000.0, 1500.0, 90_000.0] {
            assert_eq!(rig.tick(now).unwrap(), None);
            rig.update().unwrap();
            assert_eq!(rig.pose().unwrap(), committed);
            assert_eq!(rig.active_mode(), &CameraModeId::Screen);
        }
    }

    #[test]
    fn live_camera_follows_interpolation() {
        let mut rig = rig();
        rig.request_transition(&CameraModeId::Default, &CameraModeId::Screen, 0.0)
            .unwrap();
        let _ = rig.tick(0.0).unwrap();
        rig.update().unwrap();
        assert_eq!(rig.pose().unwrap(), default_pose());

        let _ = rig.tick(500.0).unwrap();
        rig.update().unwrap();
        let expected = default_pose().position.lerp(screen_pose().position, 0.5);
        assert!((rig.pose().unwrap().position - expected).length() < 1e-5);

        let _ = rig.tick(1000.0).unwrap();
        rig.update().unwrap();
        assert_eq!(rig.pose().unwrap(), screen_pose());
    }

    #[test]
    fn configured_easing_shapes_the_move() {
        let transition = TransitionOptions {
            easing: EasingFunction::Linear,
            ..TransitionOptions::default()
        };
        let mut rig = CameraRig::new(CameraOptions::default(), &transition);
        rig.initialize(16.0 / 9.0);
        rig.request_transition(&CameraModeId::Default, &CameraModeId::Screen, 0.0)
            .unwrap();

        let _ = rig.tick(250.0).unwrap();
        rig.update().unwrap();
        let linear = default_pose().position.lerp(screen_pose().position, 0.25);
        let eased = default_pose().position.lerp(screen_pose().position, 0.125);
        let at = rig.pose().unwrap().position;
        assert!((at - linear).length() < 1e-5, "{at:?}");
        assert!((at - eased).length() > 1e-3);
    }

    #[test]
    fn mode_snapshots_survive_transitions() {
        let mut rig = rig();
        rig.request_transition(&CameraModeId::Default, &CameraModeId::Screen, 0.0)
            .unwrap();
        let _ = rig.tick(400.0).unwrap();
        rig.update().unwrap();
        assert_eq!(rig.mode(&CameraModeId::Default).unwrap().pose(), default_pose());
    }

    #[test]
    fn preemption_starts_from_current_pose() {
        let mut rig = rig();
        rig.request_transition(&CameraModeId::Default, &CameraModeId::Screen, 0.0)
            .unwrap();
        let _ = rig.tick(300.0).unwrap();
        rig.update().unwrap();
        let on_screen = rig.pose().unwrap();

        rig.request_transition(&CameraModeId::Screen, &CameraModeId::Default, 300.0)
            .unwrap();
        assert_eq!(rig.transition().unwrap().source(), on_screen);
        assert_eq!(rig.tick(1300.0).unwrap(), Some(CameraModeId::Default));
    }

    #[test]
    fn resize_updates_tracking_modes_only() {
        let mut rig = rig();
        let fixed = CameraMode::new(Camera::new(30.0, 1.0, 0.1, 10.0)).fixed_aspect();
        let _ = rig.register_mode(CameraModeId::named("fixed"), fixed);
        rig.resize(0.5);
        assert_eq!(rig.camera().unwrap().aspect, 0.5);
        assert_eq!(rig.mode(&CameraModeId::Screen).unwrap().camera.aspect, 0.5);
        assert_eq!(rig.mode(&CameraModeId::named("fixed")).unwrap().camera.aspect, 1.0);
    }

    #[test]
    fn direct_switch_cancels_transition() {
        let mut rig = rig();
        rig.request_transition(&CameraModeId::Default, &CameraModeId::Screen, 0.0)
            .unwrap();
        rig.set_active_mode(&CameraModeId::Debug).unwrap();
        assert!(!rig.is_transitioning());
        assert_eq!(rig.tick(2000.0).unwrap(), None);
        assert_eq!(rig.active_mode(), &CameraModeId::Debug);
    }

    #[test]
    fn teardown_detaches_orbit() {
        let mut rig = rig();
        rig.teardown();
        assert!(!rig.orbit_mut().unwrap().is_attached());
    }
}
