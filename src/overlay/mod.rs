//! Screen-space overlay anchored to a projected 3D target.
//!
//! [`ScreenSync`] computes where the overlay goes; an [`Overlay`]
//! implementation applies it to whatever UI element the host owns.

mod sync;

use glam::Vec2;
pub use sync::ScreenSync;

/// Computed overlay rectangle in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayPlacement {
    /// Distance from the viewport's left edge.
    pub left: f32,
    /// Distance from the viewport's top edge.
    pub top: f32,
    /// Overlay width.
    pub width: f32,
    /// Overlay height.
    pub height: f32,
    /// Inner padding, scaled with width.
    pub padding: f32,
    /// Projected target position the overlay is centred on before clamping.
    pub anchor: Vec2,
}

impl OverlayPlacement {
    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// The 2D element the overlay is drawn into.
pub trait Overlay {
    /// Move and resize the element.
    fn apply(&mut self, placement: &OverlayPlacement);

    /// Show or hide the element.
    fn set_visible(&mut self, visible: bool);
}

/// An [`Overlay`] that only records what it was told, for headless runs
/// and tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadlessOverlay {
    /// Last applied placement.
    pub placement: Option<OverlayPlacement>,
    /// Current visibility.
    pub visible: bool,
    /// Number of `apply` calls so far.
    pub updates: usize,
}

impl Overlay for HeadlessOverlay {
    fn apply(&mut self, placement: &OverlayPlacement) {
        self.placement = Some(*placement);
        self.updates += 1;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
