//! Time-bounded eased interpolation between two camera poses.

use std::time::Duration;

use super::core::CameraPose;
use super::mode::CameraModeId;
use crate::util::easing::EasingFunction;

/// One in-flight camera move: where it started, where it ends, and which
/// mode to commit to once it arrives.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraTransition {
    from: CameraPose,
    to: CameraPose,
    target: CameraModeId,
    start_ms: f64,
    duration: Duration,
    easing: EasingFunction,
}

impl CameraTransition {
    /// Describe a transition starting at `start_ms`.
    #[must_use]
    pub fn new(
        from: CameraPose,
        to: CameraPose,
        target: CameraModeId,
        start_ms: f64,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            from,
            to,
            target,
            start_ms,
            duration,
            easing,
        }
    }

    /// Linear progress in `[0, 1]` at `now_ms`.
    ///
    /// Computed from absolute elapsed time, so frame pacing does not
    /// accumulate drift. Negative or NaN elapsed time reads as 0 and a
    /// zero duration completes immediately.
    #[must_use]
    pub fn progress(&self, now_ms: f64) -> f32 {
        let duration_ms = self.duration.as_secs_f64() * 1000.0;
        if duration_ms <= 0.0 {
            return 1.0;
        }
        let elapsed = now_ms - self.start_ms;
        if elapsed.is_nan() || elapsed <= 0.0 {
            return 0.0;
        }
        (elapsed / duration_ms).min(1.0) as f32
    }

    /// Pose at a given linear progress, after easing.
    #[must_use]
    pub fn pose_at(&self, progress: f32) -> CameraPose {
        if progress >= 1.0 {
            return self.to;
        }
        self.from.lerp(&self.to, self.easing.evaluate(progress))
    }

    /// Pose at `now_ms`.
    #[must_use]
    pub fn sample(&self, now_ms: f64) -> CameraPose {
        self.pose_at(self.progress(now_ms))
    }

    /// Pose the transition started from.
    #[must_use]
    pub fn source(&self) -> CameraPose {
        self.from
    }

    /// Pose the transition ends at.
    #[must_use]
    pub fn destination(&self) -> CameraPose {
        self.to
    }

    /// Mode committed when the transition completes.
    #[must_use]
    pub fn target(&self) -> &CameraModeId {
        &self.target
    }

    /// Timestamp the transition started at, in milliseconds.
    #[must_use]
    pub fn start_ms(&self) -> f64 {
        self.start_ms
    }

    /// Total duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

/// Result of advancing the controller by one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionStep {
    /// Nothing in flight.
    Idle,
    /// Still moving; the camera should show this pose.
    InFlight(CameraPose),
    /// Arrived this frame; commit `target`.
    Completed {
        /// Final pose, equal to the destination pose.
        pose: CameraPose,
        /// Mode to activate.
        target: CameraModeId,
    },
}

/// Runs at most one [`CameraTransition`] at a time.
///
/// Starting a new transition replaces the active one; the abandoned
/// transition simply never commits.
#[derive(Debug, Clone)]
pub struct TransitionController {
    active: Option<CameraTransition>,
    current: Option<CameraPose>,
    duration: Duration,
    easing: EasingFunction,
}

impl TransitionController {
    /// Controller producing transitions of the given duration and curve.
    #[must_use]
    pub fn new(duration: Duration, easing: EasingFunction) -> Self {
        Self {
            active: None,
            current: None,
            duration,
            easing,
        }
    }

    /// Begin moving from `from` to `to`, committing `target` on arrival.
    ///
    /// Returns `true` when an in-flight transition was preempted.
    pub fn start(
        &mut self,
        from: CameraPose,
        to: CameraPose,
        target: CameraModeId,
        now_ms: f64,
    ) -> bool {
        let preempted = self.active.is_some();
        self.active = Some(CameraTransition::new(
            from,
            to,
            target,
            now_ms,
            self.duration,
            self.easing,
        ));
        self.current = Some(from);
        preempted
    }

    /// Advance to `now_ms`.
    pub fn step(&mut self, now_ms: f64) -> TransitionStep {
        let Some(transition) = &self.active else {
            return TransitionStep::Idle;
        };
        let progress = transition.progress(now_ms);
        let pose = transition.pose_at(progress);
        if progress < 1.0 {
            self.current = Some(pose);
            return TransitionStep::InFlight(pose);
        }

        let target = transition.target.clone();
        self.active = None;
        self.current = None;
        TransitionStep::Completed { pose, target }
    }

    /// Drop the in-flight transition without committing it.
    pub fn cancel(&mut self) {
        self.active = None;
        self.current = None;
    }

    /// The in-flight transition, if any.
    #[must_use]
    pub fn active(&self) -> Option<&CameraTransition> {
        self.active.as_ref()
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Most recently sampled pose of the in-flight transition.
    #[must_use]
    pub fn current_pose(&self) -> Option<CameraPose> {
        self.current
    }

    /// Duration used for new transitions.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Default for TransitionController {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000), EasingFunction::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn poses() -> (CameraPose, CameraPose) {
        (
            CameraPose::new(Vec3::new(0.0, 5.0, 9.0), Vec3::new(-0.2, 0.0, 0.0)),
            CameraPose::new(Vec3::new(0.0, 3.5, 1.2), Vec3::ZERO),
        )
    }

    fn transition() -> CameraTransition {
        let (from, to) = poses();
        CameraTransition::new(
            from,
            to,
            CameraModeId::Screen,
            100.0,
            Duration::from_millis(1000),
            EasingFunction::QuadraticInOut,
        )
    }

    #[test]
    fn progress_is_clamped() {
        let t = transition();
        assert_eq!(t.progress(100.0), 0.0);
        assert_eq!(t.progress(600.0), 0.5);
        assert_eq!(t.progress(1100.0), 1.0);
        assert_eq!(t.progress(5000.0), 1.0);
    }

    #[test]
    fn bad_clock_samples_read_as_start() {
        let t = transition();
        assert_eq!(t.progress(50.0), 0.0);
        assert_eq!(t.progress(f64::NAN), 0.0);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let (from, to) = poses();
        let t = CameraTransition::new(
            from,
            to,
            CameraModeId::Screen,
            0.0,
            Duration::ZERO,
            EasingFunction::DEFAULT,
        );
        assert_eq!(t.progress(0.0), 1.0);
        assert_eq!(t.sample(0.0), to);
    }

    #[test]
    fn endpoints_match_source_and_destination() {
        let (from, to) = poses();
        let t = transition();
        assert_eq!(t.sample(100.0), from);
        assert_eq!(t.sample(1100.0), to);
    }

    #[test]
    fn quarter_progress_is_eased() {
        let (from, to) = poses();
        let t = transition();
        // ease(0.25) = 2 * 0.25² = 0.125
        let expected = from.position.lerp(to.position, 0.125);
        assert!((t.sample(350.0).position - expected).length() < 1e-5);
    }

    #[test]
    fn controller_completes_once() {
        let (from, to) = poses();
        let mut ctl = TransitionController::default();
        assert_eq!(ctl.step(0.0), TransitionStep::Idle);
        assert!(!ctl.start(from, to, CameraModeId::Screen, 0.0));
        assert!(matches!(ctl.step(500.0), TransitionStep::InFlight(_)));
        assert_eq!(
            ctl.step(1000.0),
            TransitionStep::Completed {
                pose: to,
                target: CameraModeId::Screen
            }
        );
        assert_eq!(ctl.step(2000.0), TransitionStep::Idle);
        assert!(ctl.current_pose().is_none());
    }

    #[test]
    fn starting_again_preempts() {
        let (from, to) = poses();
        let mut ctl = TransitionController::default();
        let _ = ctl.start(from, to, CameraModeId::Screen, 0.0);
        let _ = ctl.step(400.0);
        assert!(ctl.start(to, from, CameraModeId::Default, 400.0));
        assert_eq!(ctl.active().map(CameraTransition::target), Some(&CameraModeId::Default));
        assert_eq!(ctl.current_pose(), Some(to));
    }
}
