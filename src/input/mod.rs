//! Input handling: event types, pointer tracking, and the input processor
//! that converts raw window events into viewer commands.

/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions.
pub mod keyboard;
/// Pointer position and drag tracking.
pub(crate) mod mouse;
/// Converts raw events into viewer commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
