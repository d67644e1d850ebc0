//! Viewport dimensions and pixel ↔ NDC mapping.

use glam::Vec2;

/// Current drawable area in CSS/physical pixels, read live from the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Viewport {
    /// Create a viewport of the given size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width / height, falling back to 1 for a degenerate viewport.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.width > 0.0 && self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    /// Map a pointer position (origin top-left, y down) to normalized
    /// device coordinates (origin center, y up).
    #[must_use]
    pub fn to_ndc(&self, position: Vec2) -> Vec2 {
        let width = self.width.max(1.0);
        let height = self.height.max(1.0);
        Vec2::new(
            (position.x / width) * 2.0 - 1.0,
            -(position.y / height) * 2.0 + 1.0,
        )
    }

    /// Map normalized device coordinates back to pixels.
    #[must_use]
    pub fn to_pixels(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            (ndc.x * 0.5 + 0.5) * self.width,
            -(ndc.y * 0.5 - 0.5) * self.height,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1920.0, 1080.0)
    }
}
