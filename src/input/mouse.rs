use glam::Vec2;

/// Pointer travel, in pixels, past which a press becomes a drag.
const DRAG_THRESHOLD: f32 = 4.0;

/// Result of releasing the primary button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ClickResult {
    /// The pointer moved too far while pressed; not a click.
    Dragged,
    /// Press and release without significant movement.
    Click {
        /// Pointer position at release.
        position: Vec2,
    },
    /// Release without a matching press.
    NoAction,
}

/// Tracks pointer position, press origin and drag state.
#[derive(Debug, Clone, Default)]
pub(crate) struct PointerState {
    position: Option<Vec2>,
    press_origin: Option<Vec2>,
    is_dragging: bool,
}

impl PointerState {
    /// Last known pointer position.
    pub(crate) fn position(&self) -> Vec2 {
        self.position.unwrap_or(Vec2::ZERO)
    }

    /// Whether the primary button is held.
    pub(crate) fn is_pressed(&self) -> bool {
        self.press_origin.is_some()
    }

    /// Record a move and return the delta since the previous one.
    pub(crate) fn handle_mouse_position(&mut self, position: Vec2) -> Vec2 {
        let delta = self.position.map_or(Vec2::ZERO, |last| position - last);
        self.position = Some(position);
        if let Some(origin) = self.press_origin {
            if origin.distance(position) > DRAG_THRESHOLD {
                self.is_dragging = true;
            }
        }
        delta
    }

    /// Primary button went down at the current position.
    pub(crate) fn handle_mouse_down(&mut self) {
        self.press_origin = Some(self.position());
        self.is_dragging = false;
    }

    /// Primary button went up.
    pub(crate) fn process_mouse_up(&mut self) -> ClickResult {
        let pressed = self.press_origin.take().is_some();
        let was_dragging = std::mem::take(&mut self.is_dragging);
        match (pressed, was_dragging) {
            (false, _) => ClickResult::NoAction,
            (true, true) => ClickResult::Dragged,
            (true, false) => ClickResult::Click {
                position: self.position(),
            },
        }
    }

    /// Forget the press without producing a click.
    pub(crate) fn release(&mut self) {
        self.press_origin = None;
        self.is_dragging = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn still_press_is_a_click() {
        let mut state = PointerState::default();
        let _ = state.handle_mouse_position(Vec2::new(10.0, 10.0));
        state.handle_mouse_down();
        let _ = state.handle_mouse_position(Vec2::new(11.0, 10.0));
        assert_eq!(
            state.process_mouse_up(),
            ClickResult::Click {
                position: Vec2::new(11.0, 10.0)
            }
        );
    }

    #[test]
    fn long_move_is_a_drag() {
        let mut state = PointerState::default();
        state.handle_mouse_down();
        let _ = state.handle_mouse_position(Vec2::new(30.0, 0.0));
        assert_eq!(state.process_mouse_up(), ClickResult::Dragged);
        assert!(!state.is_pressed());
    }

    #[test]
    fn release_without_press_does_nothing() {
        let mut state = PointerState::default();
        assert_eq!(state.process_mouse_up(), ClickResult::NoAction);
    }

    #[test]
    fn first_move_has_no_delta() {
        let mut state = PointerState::default();
        assert_eq!(state.handle_mouse_position(Vec2::new(5.0, 5.0)), Vec2::ZERO);
        assert_eq!(
            state.handle_mouse_position(Vec2::new(8.0, 1.0)),
            Vec2::new(3.0, -4.0)
        );
    }
}
