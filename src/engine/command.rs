//! The viewer's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, a mouse
//! gesture or a programmatic call, is represented as a `ViewerCommand`.
//! Consumers construct commands and pass them to
//! [`ViewerEngine::execute`](super::ViewerEngine::execute).

use glam::Vec2;

/// A discrete or parameterized operation the viewer can perform.
///
/// The engine never cares *how* a command was triggered:
///
/// ```ignore
/// engine.execute(ViewerCommand::CloseOverlay)?;
/// engine.execute(ViewerCommand::Select { position: Vec2::new(640.0, 360.0) })?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerCommand {
    // ── Targeting ───────────────────────────────────────────────────
    /// Pointer moved; refresh hover feedback.
    PointerMoved {
        /// Pointer position in viewport pixels.
        position: Vec2,
    },

    /// Click; zoom into the target under the pointer, if any.
    Select {
        /// Pointer position in viewport pixels.
        position: Vec2,
    },

    /// Leave the zoomed view and hide the overlay.
    CloseOverlay,

    // ── Camera ──────────────────────────────────────────────────────
    /// Switch between the free orbit camera and the default view.
    ToggleDebugCamera,

    /// Rotate the debug camera by `delta` pixels of mouse movement.
    RotateCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Pan the debug camera by `delta` pixels of mouse movement.
    PanCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Zoom the debug camera (positive = zoom in, negative = zoom out).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },

    // ── Viewport ────────────────────────────────────────────────────
    /// The drawable area changed size.
    Resize {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
}
