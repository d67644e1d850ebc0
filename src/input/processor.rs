//! Converts raw platform events into viewer commands.
//!
//! The `InputProcessor` owns all transient input state (pointer tracking,
//! drag detection, modifier keys) and the key-binding map. It is the only
//! thing that sits between raw window events and the engine's
//! [`execute`](crate::ViewerEngine::execute) method.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use super::mouse::{ClickResult, PointerState};
use crate::engine::ViewerCommand;
use crate::options::KeybindingOptions;

/// Converts raw window events into [`ViewerCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(event, engine.is_orbiting()) {
///     engine.execute(cmd)?;
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Pointer tracking and drag detection.
    state: PointerState,
    /// Whether the shift modifier is currently held.
    shift_pressed: bool,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Current pointer position in pixels.
    #[must_use]
    pub fn mouse_pos(&self) -> Vec2 {
        self.state.position()
    }

    /// Whether the primary mouse button is pressed.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.state.is_pressed()
    }

    /// Whether the shift modifier is held.
    #[must_use]
    pub fn shift_pressed(&self) -> bool {
        self.shift_pressed
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Replace the key bindings.
    pub fn set_key_bindings(&mut self, key_bindings: KeybindingOptions) {
        self.key_bindings = key_bindings;
    }

    /// Release the mouse button without triggering click detection.
    pub fn release_mouse_state(&mut self) {
        self.state.release();
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<ViewerCommand> {
        self.key_bindings.lookup(key).map(|action| action.to_command())
    }

    /// Process a raw input event and return zero or one commands.
    ///
    /// `orbiting` says whether the free orbit camera is active; drags and
    /// the wheel drive it instead of hover.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        orbiting: bool,
    ) -> Option<ViewerCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.handle_cursor_moved(Vec2::new(x, y), orbiting)
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::Scroll { delta } => {
                orbiting.then_some(ViewerCommand::Zoom { delta })
            }
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                None
            }
            InputEvent::KeyPressed { key } => self.handle_key_press(&key),
            InputEvent::Resized { width, height } => {
                Some(ViewerCommand::Resize { width, height })
            }
        }
    }

    /// Cursor moved: orbit while dragging the debug camera, hover otherwise.
    fn handle_cursor_moved(
        &mut self,
        position: Vec2,
        orbiting: bool,
    ) -> Option<ViewerCommand> {
        let delta = self.state.handle_mouse_position(position);

        if orbiting && self.state.is_pressed() {
            if self.shift_pressed {
                return Some(ViewerCommand::PanCamera { delta });
            }
            return Some(ViewerCommand::RotateCamera { delta });
        }

        Some(ViewerCommand::PointerMoved { position })
    }

    /// Left press/release; a release that was not a drag selects.
    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<ViewerCommand> {
        if button != MouseButton::Left {
            return None;
        }

        if pressed {
            self.state.handle_mouse_down();
            return None;
        }

        match self.state.process_mouse_up() {
            ClickResult::Click { position } => {
                Some(ViewerCommand::Select { position })
            }
            ClickResult::Dragged | ClickResult::NoAction => None,
        }
    }
}
