//! Ring-shaped hue picker
//!
//! Wires the interaction tracker to the wheel geometry:
//! pointer event -> position relative to the wheel -> hue/saturation ->
//! merged with the current value/alpha -> `on_change`.
//!
//! The picker is controlled: it never changes its own color. The host feeds
//! the emitted color back through [`WheelPicker::set_color`], which moves the
//! indicator.

use wheel_ui::{
    Callback, Detached, Event, Interactive, ListenerHost, Point, Region, RelativePosition,
};

use crate::color::{hsva_to_hex, normalize_color, ColorInput, ColorResult, Hsva};
use crate::config::WheelConfig;
use crate::wheel::{Wheel, WheelStyle};

/// Everything the rendering layer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    /// Indicator offset from the wheel's top-left corner
    pub indicator: Point,
    /// Gradient ring parameters
    pub style: WheelStyle,
    /// Current color as `#rrggbb`
    pub hex: String,
}

/// A hue wheel bound to a pointer interaction tracker.
pub struct WheelPicker<M, H: ListenerHost = Detached> {
    wheel: Wheel,
    hsva: Hsva,
    saturation_floor: f32,
    interactive: Interactive<RelativePosition, H>,
    on_change: Callback<ColorResult, M>,
}

impl<M> WheelPicker<M, Detached> {
    pub fn new(config: &WheelConfig) -> Self {
        Self::with_host(config, Detached)
    }
}

impl<M, H: ListenerHost> WheelPicker<M, H> {
    /// Create a picker whose drag listeners are registered with `host`.
    pub fn with_host(config: &WheelConfig, host: H) -> Self {
        let hsva = config
            .color
            .as_ref()
            .map(ColorInput::to_hsva)
            .unwrap_or_default();

        Self {
            wheel: Wheel::from_config(config),
            hsva,
            saturation_floor: config.saturation_floor,
            interactive: Interactive::with_host(host)
                .on_start(|position| position)
                .on_move(|position| position),
            on_change: Callback::none(),
        }
    }

    /// Set the change callback
    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(ColorResult) -> M + 'static,
    {
        self.on_change = Callback::new(handler);
        self
    }

    /// Replace the change callback in place
    pub fn set_on_change<F>(&mut self, handler: F)
    where
        F: Fn(ColorResult) -> M + 'static,
    {
        self.on_change.set(handler);
    }

    /// Update the externally controlled color.
    pub fn set_color(&mut self, color: impl Into<ColorInput>) {
        self.hsva = color.into().to_hsva();
    }

    pub fn hsva(&self) -> Hsva {
        self.hsva
    }

    pub fn hex(&self) -> String {
        hsva_to_hex(self.hsva)
    }

    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    pub fn interactive(&self) -> &Interactive<RelativePosition, H> {
        &self.interactive
    }

    /// Where the indicator is drawn for the current color.
    pub fn indicator_position(&self) -> Point {
        self.wheel.value_to_position(&self.hsva)
    }

    pub fn render_state(&self) -> RenderState {
        RenderState {
            indicator: self.indicator_position(),
            style: self.wheel.style(),
            hex: self.hex(),
        }
    }

    /// Mount on the region the wheel occupies.
    pub fn start_session<R: Region + 'static>(&mut self, region: R) {
        self.interactive.start_session(region);
    }

    /// Unmount; pending drags end and listeners are released.
    pub fn end_session(&mut self) {
        self.interactive.end_session();
    }

    /// Feed a raw input event. Returns the change message for accepted starts
    /// and moves.
    pub fn handle_event(&mut self, event: &Event) -> Option<M> {
        let position = self.interactive.handle_event(event)?;
        self.emit(&position)
    }

    /// End the drag without an event, e.g. on focus loss.
    pub fn cancel(&mut self) {
        self.interactive.on_interaction_end();
    }

    /// The color a pointer at `position` selects.
    ///
    /// Saturation below the floor is raised to it rather than rejected.
    pub fn color_at(&self, position: &RelativePosition) -> Hsva {
        let picked = self.wheel.position_to_value(position.x, position.y);
        Hsva {
            h: picked.hue,
            s: picked.saturation.max(self.saturation_floor),
            v: self.hsva.v,
            a: self.hsva.a,
        }
    }

    fn emit(&self, position: &RelativePosition) -> Option<M> {
        let hsva = self.color_at(position);
        log::debug!(
            "WheelPicker: picked h={} s={} at ({:.1}, {:.1})",
            hsva.h,
            hsva.s,
            position.x,
            position.y
        );
        self.on_change.call(normalize_color(hsva))
    }
}

impl<M, H: ListenerHost> std::fmt::Debug for WheelPicker<M, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WheelPicker")
            .field("wheel", &self.wheel)
            .field("hsva", &self.hsva)
            .field("saturation_floor", &self.saturation_floor)
            .field("interactive", &self.interactive)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Direction;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wheel_ui::{ListenerKind, Rectangle};

    const ORIGIN_X: f32 = 40.0;
    const ORIGIN_Y: f32 = 60.0;

    fn picker() -> WheelPicker<ColorResult> {
        let config = WheelConfig::new().color(Hsva::new(0.0, 100.0, 70.0, 0.5));
        let mut picker = WheelPicker::new(&config).on_change(|color| color);
        picker.start_session(Rectangle::new(ORIGIN_X, ORIGIN_Y, 200.0, 200.0));
        picker
    }

    /// Screen point for a position inside the wheel.
    fn at(x: f32, y: f32) -> Point {
        Point::new(ORIGIN_X + x, ORIGIN_Y + y)
    }

    #[test]
    fn test_press_emits_merged_color() {
        let mut picker = picker();
        let color = picker.handle_event(&Event::mouse_down(at(100.0, 10.0))).unwrap();
        assert_eq!(color.hsva, Hsva::new(90.0, 90.0, 70.0, 0.5));
        assert_eq!(color.hex, hsva_to_hex(color.hsva));
    }

    #[test]
    fn test_low_saturation_raised_to_floor() {
        let mut picker = picker();
        let color = picker.handle_event(&Event::mouse_down(at(100.0, 100.0))).unwrap();
        assert_eq!(color.hsva.s, 88.0);

        let color = picker.handle_event(&Event::mouse_drag(at(150.0, 100.0))).unwrap();
        assert_eq!(color.hsva.s, 88.0);
        assert_eq!(color.hsva.h, 0.0);

        let color = picker.handle_event(&Event::mouse_drag(at(195.0, 100.0))).unwrap();
        assert_eq!(color.hsva.s, 95.0);
    }

    #[test]
    fn test_custom_floor() {
        let config = WheelConfig::new().saturation_floor(0.0);
        let picker: WheelPicker<ColorResult> = WheelPicker::new(&config);
        let position = Rectangle::new(0.0, 0.0, 200.0, 200.0)
            .relative_position(Point::new(100.0, 100.0));
        assert_eq!(picker.color_at(&position).s, 0.0);
    }

    #[test]
    fn test_drag_outside_wheel_saturates() {
        let mut picker = picker();
        picker.handle_event(&Event::mouse_down(at(100.0, 10.0)));
        let color = picker
            .handle_event(&Event::mouse_drag(at(-300.0, 100.0)))
            .unwrap();
        assert_eq!(color.hsva.s, 100.0);
        assert_eq!(color.hsva.h, 180.0);
    }

    #[test]
    fn test_touch_session_ignores_mouse() {
        let mut picker = picker();
        assert!(picker
            .handle_event(&Event::touch_start(at(100.0, 10.0)))
            .is_some());
        assert!(picker
            .handle_event(&Event::mouse_drag(at(10.0, 100.0)))
            .is_none());
        let color = picker
            .handle_event(&Event::touch_move(at(10.0, 100.0)))
            .unwrap();
        assert_eq!(color.hsva.h, 180.0);
    }

    #[test]
    fn test_no_emission_after_release() {
        let mut picker = picker();
        picker.handle_event(&Event::mouse_down(at(100.0, 10.0)));
        picker.handle_event(&Event::MouseReleased {
            position: at(100.0, 10.0),
        });
        assert!(picker
            .handle_event(&Event::mouse_drag(at(10.0, 100.0)))
            .is_none());
    }

    #[test]
    fn test_cancel_and_unmount() {
        let mut picker = picker();
        picker.handle_event(&Event::mouse_down(at(100.0, 10.0)));
        picker.cancel();
        assert!(!picker.interactive().is_dragging());

        picker.end_session();
        assert!(picker
            .handle_event(&Event::mouse_down(at(100.0, 10.0)))
            .is_none());
    }

    #[test]
    fn test_indicator_tracks_set_color() {
        let mut picker = picker();
        let pos = picker.indicator_position();
        assert!((pos.x - 190.0).abs() < 0.001);
        assert!((pos.y - 100.0).abs() < 0.001);

        picker.set_color("#00ff00");
        assert_eq!(picker.hex(), "#00ff00");
        let pos = picker.indicator_position();
        assert!((pos.distance(Point::new(100.0, 100.0)) - 90.0).abs() < 0.001);
        assert!(pos.y < 100.0);
    }

    #[test]
    fn test_emitted_color_moves_indicator_back_under_pointer() {
        let mut picker = picker();
        let color = picker.handle_event(&Event::mouse_down(at(30.0, 40.0))).unwrap();
        picker.set_color(color.hsva);

        let indicator = picker.indicator_position();
        let pointer_angle = (40.0f32 - 100.0).atan2(30.0 - 100.0);
        let indicator_angle = (indicator.y - 100.0).atan2(indicator.x - 100.0);
        assert!((pointer_angle - indicator_angle).abs() < 0.02);
    }

    #[test]
    fn test_render_state() {
        let config = WheelConfig::new()
            .direction(Direction::Clockwise)
            .angle_offset(20.0)
            .color("#ff0000");
        let picker: WheelPicker<()> = WheelPicker::new(&config);
        let state = picker.render_state();
        assert_eq!(state.hex, "#ff0000");
        assert_eq!(state.style.rotation, 110.0);
        assert_eq!(state.indicator, picker.indicator_position());
    }

    #[test]
    fn test_host_sees_listener_lifecycle() {
        #[derive(Default, Clone)]
        struct Log(Rc<RefCell<Vec<(bool, ListenerKind)>>>);

        impl ListenerHost for Log {
            fn add_listener(&mut self, kind: ListenerKind) {
                self.0.borrow_mut().push((true, kind));
            }

            fn remove_listener(&mut self, kind: ListenerKind) {
                self.0.borrow_mut().push((false, kind));
            }
        }

        let log = Log::default();
        let mut picker: WheelPicker<ColorResult, Log> =
            WheelPicker::with_host(&WheelConfig::new(), log.clone()).on_change(|c| c);
        picker.start_session(Rectangle::new(0.0, 0.0, 200.0, 200.0));

        picker.handle_event(&Event::touch_start(Point::new(100.0, 10.0)));
        picker.handle_event(&Event::TouchEnded { touches: vec![] });

        assert_eq!(
            *log.0.borrow(),
            vec![
                (true, ListenerKind::TouchMove),
                (true, ListenerKind::TouchEnd),
                (false, ListenerKind::TouchMove),
                (false, ListenerKind::TouchEnd),
            ]
        );
    }
}
