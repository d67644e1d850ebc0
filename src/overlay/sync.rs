use glam::Vec2;

use super::{Overlay, OverlayPlacement};
use crate::camera::Camera;
use crate::options::OverlayOptions;
use crate::scene::{ObjectId, Scene};
use crate::viewport::Viewport;

/// Keeps an overlay pinned to the projection of a 3D target.
///
/// While a target is set, [`update`](Self::update) should run once per
/// frame after the camera has moved, on resize, and right after
/// [`show`](Self::show).
#[derive(Debug, Clone)]
pub struct ScreenSync {
    options: OverlayOptions,
    target: Option<ObjectId>,
    visible: bool,
}

impl ScreenSync {
    /// Create an inactive sync.
    #[must_use]
    pub fn new(options: OverlayOptions) -> Self {
        Self {
            options,
            target: None,
            visible: false,
        }
    }

    /// Replace the sizing options.
    pub fn set_options(&mut self, options: OverlayOptions) {
        self.options = options;
    }

    /// Start tracking `target` and place the overlay immediately.
    pub fn show(
        &mut self,
        target: ObjectId,
        camera: &Camera,
        scene: &dyn Scene,
        viewport: &Viewport,
        overlay: &mut dyn Overlay,
    ) -> Option<OverlayPlacement> {
        self.target = Some(target);
        self.update(camera, scene, viewport, overlay)
    }

    /// Stop tracking and hide the overlay.
    pub fn hide(&mut self, overlay: &mut dyn Overlay) {
        self.target = None;
        self.visible = false;
        overlay.set_visible(false);
    }

    /// Whether a target is being tracked.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    /// Tracked target.
    #[must_use]
    pub fn target(&self) -> Option<ObjectId> {
        self.target
    }

    /// Whether the overlay is currently shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Reposition the overlay for the current camera and viewport.
    ///
    /// A target that cannot be projected (behind the camera or missing
    /// from the scene) hides the overlay until it can be projected again.
    pub fn update(
        &mut self,
        camera: &Camera,
        scene: &dyn Scene,
        viewport: &Viewport,
        overlay: &mut dyn Overlay,
    ) -> Option<OverlayPlacement> {
        let target = self.target?;
        let Some(anchor) = Self::anchor(camera, scene, viewport, target) else {
            if self.visible {
                log::debug!("overlay target {target:?} not projectable, hiding");
                self.visible = false;
                overlay.set_visible(false);
            }
            return None;
        };

        let placement = self.place(anchor, viewport);
        overlay.apply(&placement);
        if !self.visible {
            self.visible = true;
            overlay.set_visible(true);
        }
        Some(placement)
    }

    /// Viewport pixel position of `target`, if it is in front of the camera.
    #[must_use]
    pub fn anchor(
        camera: &Camera,
        scene: &dyn Scene,
        viewport: &Viewport,
        target: ObjectId,
    ) -> Option<Vec2> {
        let world = scene.world_position(target)?;
        let ndc = camera.project(world)?;
        Some(viewport.to_pixels(ndc.truncate()))
    }

    /// Size the overlay for `viewport`, centre it on `anchor` and clamp it
    /// inside the margin.
    #[must_use]
    pub fn place(&self, anchor: Vec2, viewport: &Viewport) -> OverlayPlacement {
        let o = &self.options;
        let width = o.max_width.min(viewport.width * o.viewport_fraction);
        let height = o.max_height.min(viewport.height * o.viewport_fraction);
        let padding = o.max_padding.min(width * o.padding_fraction);

        let left = clamp_to_margin(
            anchor.x - width / 2.0,
            width,
            viewport.width,
            o.margin,
        );
        let top = clamp_to_margin(
            anchor.y - height / 2.0,
            height,
            viewport.height,
            o.margin,
        );

        OverlayPlacement {
            left,
            top,
            width,
            height,
            padding,
            anchor,
        }
    }
}

impl Default for ScreenSync {
    fn default() -> Self {
        Self::new(OverlayOptions::default())
    }
}

/// Pin an overflowing edge to the margin.
///
/// Both edges are tested against the unclamped position. When both
/// overflow, the far-edge pin is applied last and wins.
fn clamp_to_margin(start: f32, size: f32, extent: f32, margin: f32) -> f32 {
    let mut pinned = start;
    if start < margin {
        pinned = margin;
    }
    if start + size > extent - margin {
        pinned = extent - size - margin;
    }
    pinned
}
