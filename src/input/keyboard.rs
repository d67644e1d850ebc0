use serde::{Deserialize, Serialize};

use crate::engine::ViewerCommand;

/// Viewer actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// close_overlay = "Escape"
/// toggle_debug_camera = "KeyC"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Leave the zoomed view and hide the overlay.
    CloseOverlay,
    /// Switch between the free orbit camera and the default view.
    ToggleDebugCamera,
}

impl KeyAction {
    /// The parameterless command this action triggers.
    #[must_use]
    pub fn to_command(self) -> ViewerCommand {
        match self {
            Self::CloseOverlay => ViewerCommand::CloseOverlay,
            Self::ToggleDebugCamera => ViewerCommand::ToggleDebugCamera,
        }
    }
}
