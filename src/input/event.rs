/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`ViewerCommand`](crate::ViewerCommand) values.
///
/// # Example
///
/// ```ignore
/// let cmd = input_processor.handle_event(
///     InputEvent::CursorMoved { x: 100.0, y: 200.0 },
///     engine.is_orbiting(),
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute viewport position.
    CursorMoved {
        /// Horizontal position in pixels from the left edge.
        x: f32,
        /// Vertical position in pixels from the top edge.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount (positive = zoom in, negative = zoom out).
        delta: f32,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Whether the shift key is held.
        shift: bool,
    },
    /// A key went down.
    KeyPressed {
        /// Physical key code string, e.g. `"Escape"` or `"KeyC"`.
        key: String,
    },
    /// The drawable area changed size.
    Resized {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Translate a winit window event, if it is one the viewer consumes.
    ///
    /// Key presses use the `winit::keyboard::KeyCode` debug format
    /// (`"Escape"`, `"KeyC"`); repeats are dropped.
    #[must_use]
    pub fn from_window_event(event: &winit::event::WindowEvent) -> Option<Self> {
        use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
        use winit::keyboard::PhysicalKey;

        match event {
            WindowEvent::CursorMoved { position, .. } => Some(Self::CursorMoved {
                x: position.x as f32,
                y: position.y as f32,
            }),
            WindowEvent::MouseInput { state, button, .. } => {
                Some(Self::MouseButton {
                    button: (*button).into(),
                    pressed: *state == ElementState::Pressed,
                })
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                Some(Self::Scroll { delta })
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                Some(Self::ModifiersChanged {
                    shift: modifiers.state().shift_key(),
                })
            }
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed && !event.repeat =>
            {
                match event.physical_key {
                    PhysicalKey::Code(code) => Some(Self::KeyPressed {
                        key: format!("{code:?}"),
                    }),
                    PhysicalKey::Unidentified(_) => None,
                }
            }
            WindowEvent::Resized(size) => Some(Self::Resized {
                width: size.width,
                height: size.height,
            }),
            _ => None,
        }
    }
}
