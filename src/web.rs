//! Browser glue: logging setup, a DOM-backed [`Overlay`], and conversions
//! from DOM events to [`InputEvent`]s.

use web_sys::{HtmlElement, KeyboardEvent, MouseEvent, WheelEvent, Window};

use crate::input::{InputEvent, MouseButton};
use crate::overlay::{Overlay, OverlayPlacement};
use crate::viewport::Viewport;

/// Route `log` output to the browser console and panics to
/// `console.error`.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        log::warn!("logger already initialized");
    }
}

/// An absolutely positioned element driven by [`ScreenSync`](crate::overlay::ScreenSync).
#[derive(Debug, Clone)]
pub struct DomOverlay {
    element: HtmlElement,
}

impl DomOverlay {
    /// Wrap an element. It is switched to fixed positioning and hidden.
    #[must_use]
    pub fn new(element: HtmlElement) -> Self {
        let mut overlay = Self { element };
        overlay.set_style("position", "fixed");
        overlay.set_style("box-sizing", "border-box");
        overlay.set_visible(false);
        overlay
    }

    /// The wrapped element.
    #[must_use]
    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    fn set_style(&mut self, name: &str, value: &str) {
        if let Err(err) = self.element.style().set_property(name, value) {
            log::warn!("failed to set overlay style {name}: {err:?}");
        }
    }
}

impl Overlay for DomOverlay {
    fn apply(&mut self, placement: &OverlayPlacement) {
        self.set_style("left", &format!("{}px", placement.left));
        self.set_style("top", &format!("{}px", placement.top));
        self.set_style("width", &format!("{}px", placement.width));
        self.set_style("height", &format!("{}px", placement.height));
        self.set_style("padding", &format!("{}px", placement.padding));
    }

    fn set_visible(&mut self, visible: bool) {
        self.set_style("display", if visible { "block" } else { "none" });
    }
}

/// Current inner size of the browser window.
#[must_use]
pub fn window_viewport(window: &Window) -> Option<Viewport> {
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(width as f32, height as f32))
}

/// `mousemove` → [`InputEvent::CursorMoved`].
#[must_use]
pub fn mouse_move_event(event: &MouseEvent) -> InputEvent {
    InputEvent::CursorMoved {
        x: event.client_x() as f32,
        y: event.client_y() as f32,
    }
}

/// `mousedown` / `mouseup` → [`InputEvent::MouseButton`].
#[must_use]
pub fn mouse_button_event(event: &MouseEvent, pressed: bool) -> Option<InputEvent> {
    let button = match event.button() {
        0 => MouseButton::Left,
        1 => MouseButton::Middle,
        2 => MouseButton::Right,
        _ => return None,
    };
    Some(InputEvent::MouseButton { button, pressed })
}

/// `wheel` → [`InputEvent::Scroll`]; scrolling up zooms in.
#[must_use]
pub fn wheel_event(event: &WheelEvent) -> InputEvent {
    InputEvent::Scroll {
        delta: (-event.delta_y() * 0.01) as f32,
    }
}

/// `keydown` → [`InputEvent::KeyPressed`] using the physical `code`.
/// Auto-repeats are dropped.
#[must_use]
pub fn keyboard_event(event: &KeyboardEvent) -> Option<InputEvent> {
    if event.repeat() {
        return None;
    }
    Some(InputEvent::KeyPressed { key: event.code() })
}

/// Shift state carried on any mouse event.
#[must_use]
pub fn modifiers_event(event: &MouseEvent) -> InputEvent {
    InputEvent::ModifiersChanged {
        shift: event.shift_key(),
    }
}
