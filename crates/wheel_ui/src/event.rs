//! Raw pointer and touch input.

use serde::{Deserialize, Serialize};

use crate::layout::Point;
use crate::state::Modality;

/// Bit the primary (left) mouse button occupies in a `buttons` mask.
pub const PRIMARY_BUTTON: u16 = 1;

/// Raw input events a trackable region can respond to.
///
/// Positions are in the same coordinate space as the region's bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Event {
    /// Mouse button pressed. `buttons` is the bitmask of buttons held down.
    MousePressed { position: Point, buttons: u16 },
    /// Mouse moved, with the bitmask of buttons currently held down.
    MouseMoved { position: Point, buttons: u16 },
    /// Mouse button released.
    MouseReleased { position: Point },
    /// A finger touched the surface.
    TouchStarted { touches: Vec<Point> },
    /// Touch points moved.
    TouchMoved { touches: Vec<Point> },
    /// A finger left the surface. `touches` holds the points still down.
    TouchEnded { touches: Vec<Point> },
}

impl Event {
    /// The input channel this event arrived on.
    pub fn modality(&self) -> Modality {
        if self.is_touch() {
            Modality::Touch
        } else {
            Modality::Pointer
        }
    }

    /// Check if the event was triggered by touch.
    pub fn is_touch(&self) -> bool {
        matches!(
            self,
            Event::TouchStarted { .. } | Event::TouchMoved { .. } | Event::TouchEnded { .. }
        )
    }

    /// Whether the event reports an active press: any button held for mouse
    /// events, at least one remaining touch point for touch events.
    pub fn is_pressed(&self) -> bool {
        match self {
            Event::MousePressed { buttons, .. } | Event::MouseMoved { buttons, .. } => *buttons > 0,
            Event::MouseReleased { .. } => false,
            Event::TouchStarted { touches }
            | Event::TouchMoved { touches }
            | Event::TouchEnded { touches } => !touches.is_empty(),
        }
    }

    /// The position that drives the interaction.
    ///
    /// Touch events use their first touch point; `None` when no touch remains.
    pub fn primary_position(&self) -> Option<Point> {
        match self {
            Event::MousePressed { position, .. }
            | Event::MouseMoved { position, .. }
            | Event::MouseReleased { position } => Some(*position),
            Event::TouchStarted { touches }
            | Event::TouchMoved { touches }
            | Event::TouchEnded { touches } => touches.first().copied(),
        }
    }

    /// A single-finger touch start at `position`.
    pub fn touch_start(position: Point) -> Self {
        Event::TouchStarted {
            touches: vec![position],
        }
    }

    /// A single-finger touch move to `position`.
    pub fn touch_move(position: Point) -> Self {
        Event::TouchMoved {
            touches: vec![position],
        }
    }

    /// A left-button press at `position`.
    pub fn mouse_down(position: Point) -> Self {
        Event::MousePressed {
            position,
            buttons: PRIMARY_BUTTON,
        }
    }

    /// A mouse move with the left button held.
    pub fn mouse_drag(position: Point) -> Self {
        Event::MouseMoved {
            position,
            buttons: PRIMARY_BUTTON,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modality_of_events() {
        assert_eq!(Event::mouse_down(Point::default()).modality(), Modality::Pointer);
        assert_eq!(Event::touch_move(Point::default()).modality(), Modality::Touch);
        assert_eq!(
            Event::TouchEnded { touches: vec![] }.modality(),
            Modality::Touch
        );
    }

    #[test]
    fn test_is_pressed() {
        let hover = Event::MouseMoved {
            position: Point::default(),
            buttons: 0,
        };
        assert!(!hover.is_pressed());
        assert!(Event::mouse_drag(Point::default()).is_pressed());
        assert!(Event::touch_move(Point::default()).is_pressed());
        assert!(!Event::TouchMoved { touches: vec![] }.is_pressed());
    }

    #[test]
    fn test_primary_position_uses_first_touch() {
        let event = Event::TouchMoved {
            touches: vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)],
        };
        assert_eq!(event.primary_position(), Some(Point::new(1.0, 2.0)));
        assert_eq!(Event::TouchEnded { touches: vec![] }.primary_position(), None);
    }

    #[test]
    fn test_event_from_json() {
        let event: Event =
            serde_json::from_str(r#"{"type":"mouseMoved","position":{"x":3.0,"y":4.0},"buttons":1}"#)
                .unwrap();
        assert_eq!(event, Event::mouse_drag(Point::new(3.0, 4.0)));
    }
}
