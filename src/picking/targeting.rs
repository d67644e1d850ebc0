//! Pointer-driven hover and selection over a fixed set of scene objects.

use glam::Vec2;

use super::ray::Intersection;
use crate::camera::{Camera, CameraModeId};
use crate::scene::{MaterialId, ObjectId, Scene};
use crate::viewport::Viewport;

/// A scene object the pointer can hover and select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractiveTarget {
    /// Object in the scene.
    pub object: ObjectId,
    /// Material shown while the pointer is over the object.
    pub hover_material: MaterialId,
    /// Material shown otherwise.
    pub rest_material: MaterialId,
    /// Camera mode to move to when the object is selected.
    pub focus_mode: CameraModeId,
}

impl InteractiveTarget {
    /// Target that focuses the `screen` mode when selected.
    #[must_use]
    pub fn new(
        object: ObjectId,
        hover_material: MaterialId,
        rest_material: MaterialId,
    ) -> Self {
        Self {
            object,
            hover_material,
            rest_material,
            focus_mode: CameraModeId::Screen,
        }
    }

    /// Use a different focus mode.
    #[must_use]
    pub fn focusing(mut self, mode: CameraModeId) -> Self {
        self.focus_mode = mode;
        self
    }
}

/// Whether a target is currently zoomed into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TargetingState {
    /// Pointer input hovers and selects targets.
    #[default]
    Idle,
    /// A target is selected; pointer input is ignored until release.
    Zoomed {
        /// The selected object.
        target: ObjectId,
    },
}

/// Outcome of a click that landed on a target.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Selected object.
    pub target: ObjectId,
    /// Mode the camera should move to.
    pub focus_mode: CameraModeId,
    /// The ray hit that caused the selection.
    pub hit: Intersection,
}

/// Hover/select state machine over a list of [`InteractiveTarget`]s.
///
/// Holds no camera or scene; both are passed in on each call.
#[derive(Debug, Clone, Default)]
pub struct PointerTargeting {
    targets: Vec<InteractiveTarget>,
    state: TargetingState,
    hovered: Option<ObjectId>,
}

impl PointerTargeting {
    /// Targeting over `targets`, starting idle.
    #[must_use]
    pub fn new(targets: Vec<InteractiveTarget>) -> Self {
        Self {
            targets,
            state: TargetingState::Idle,
            hovered: None,
        }
    }

    /// Configured targets.
    #[must_use]
    pub fn targets(&self) -> &[InteractiveTarget] {
        &self.targets
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> TargetingState {
        self.state
    }

    /// Whether a target is selected.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        matches!(self.state, TargetingState::Zoomed { .. })
    }

    /// Target under the pointer as of the last move.
    #[must_use]
    pub fn hovered(&self) -> Option<ObjectId> {
        self.hovered
    }

    fn target(&self, object: ObjectId) -> Option<&InteractiveTarget> {
        self.targets.iter().find(|t| t.object == object)
    }

    /// Nearest target under the pointer, if any.
    ///
    /// `pointer` is in viewport pixels with the origin at the top-left.
    #[must_use]
    pub fn pick(
        &self,
        camera: &Camera,
        scene: &dyn Scene,
        viewport: &Viewport,
        pointer: Vec2,
    ) -> Option<Intersection> {
        if self.targets.is_empty() {
            return None;
        }
        let ray = camera.ray_through(viewport.to_ndc(pointer));
        let ids: Vec<ObjectId> = self.targets.iter().map(|t| t.object).collect();
        scene.raycast(&ray, &ids).into_iter().next()
    }

    /// Update hover materials for a pointer move.
    ///
    /// A hit swaps only the hit target to its hover material. A miss rests
    /// every target, whichever was hovered before. Ignored while zoomed.
    pub fn handle_pointer_move(
        &mut self,
        camera: &Camera,
        scene: &mut dyn Scene,
        viewport: &Viewport,
        pointer: Vec2,
    ) -> Option<ObjectId> {
        if self.is_zoomed() {
            return None;
        }
        let hit = self
            .pick(camera, &*scene, viewport, pointer)
            .map(|hit| hit.object);
        match hit.and_then(|id| self.targets.iter().find(|t| t.object == id)) {
            Some(target) => {
                scene.set_material(target.object, target.hover_material);
            }
            None => {
                for target in &self.targets {
                    scene.set_material(target.object, target.rest_material);
                }
            }
        }
        if hit != self.hovered {
            log::trace!("hover {:?} -> {:?}", self.hovered, hit);
        }
        self.hovered = hit;
        hit
    }

    /// Select the target under the pointer and enter [`TargetingState::Zoomed`].
    ///
    /// Ignored while already zoomed so clicks on the overlay do not
    /// retarget.
    pub fn handle_click(
        &mut self,
        camera: &Camera,
        scene: &dyn Scene,
        viewport: &Viewport,
        pointer: Vec2,
    ) -> Option<Selection> {
        if self.is_zoomed() {
            return None;
        }
        let hit = self.pick(camera, scene, viewport, pointer)?;
        let focus_mode = self.target(hit.object)?.focus_mode.clone();
        self.state = TargetingState::Zoomed { target: hit.object };
        log::debug!("selected {:?}", hit.object);
        Some(Selection {
            target: hit.object,
            focus_mode,
            hit,
        })
    }

    /// Leave the zoomed state, restoring the target's rest material.
    ///
    /// Returns the released target, or `None` when idle.
    pub fn release(&mut self, scene: &mut dyn Scene) -> Option<InteractiveTarget> {
        let TargetingState::Zoomed { target } = self.state else {
            return None;
        };
        self.state = TargetingState::Idle;
        self.hovered = None;
        let released = self.target(target)?.clone();
        scene.set_material(released.object, released.rest_material);
        Some(released)
    }

    /// Put every target back on its rest material.
    pub fn restore_all(&mut self, scene: &mut dyn Scene) {
        for target in &self.targets {
            scene.set_material(target.object, target.rest_material);
        }
        self.hovered = None;
    }
}
