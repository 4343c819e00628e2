//! Hue wheel demo
//!
//! Mounts a picker on a fixed region and replays a gesture through it,
//! logging every color the wheel emits.
//!
//! Usage: `hue-wheel-demo [config.json] [gesture.json]`
//!
//! The gesture file is a JSON array of events, e.g.
//! `[{"type": "mousePressed", "position": {"x": 150, "y": 70}, "buttons": 1}]`.

use std::error::Error;

use hue_wheel::wheel_ui::{Event, ListenerHost, ListenerKind, Point, Rectangle};
use hue_wheel::{ColorResult, WheelConfig, WheelPicker};

/// Where the wheel's region sits on the simulated page.
const REGION_ORIGIN: Point = Point { x: 40.0, y: 60.0 };

/// Host stand-in that only reports listener changes.
#[derive(Debug, Default)]
struct LoggingHost {
    live: Vec<ListenerKind>,
}

impl ListenerHost for LoggingHost {
    fn add_listener(&mut self, kind: ListenerKind) {
        self.live.push(kind);
        log::debug!("host: +{:?} (live: {:?})", kind, self.live);
    }

    fn remove_listener(&mut self, kind: ListenerKind) {
        self.live.retain(|k| *k != kind);
        log::debug!("host: -{:?} (live: {:?})", kind, self.live);
    }
}

/// Press on the rim, sweep once around it, stray past the edge, release;
/// then the same with a finger, followed by the compatibility mouse press
/// some platforms fire after a tap.
fn default_gesture(config: &WheelConfig) -> Vec<Event> {
    let radius = config.width / 2.0;
    let center = Point::new(REGION_ORIGIN.x + radius, REGION_ORIGIN.y + radius);
    let on_ring = |degrees: f32| {
        let angle = degrees.to_radians();
        Point::new(
            center.x + radius * 0.95 * angle.cos(),
            center.y + radius * 0.95 * angle.sin(),
        )
    };

    let mut events = vec![Event::mouse_down(on_ring(0.0))];
    events.extend((1..=8).map(|step| Event::mouse_drag(on_ring(step as f32 * 45.0))));
    events.push(Event::mouse_drag(Point::new(center.x + radius * 3.0, center.y)));
    events.push(Event::MouseReleased {
        position: Point::new(center.x + radius * 3.0, center.y),
    });

    events.push(Event::touch_start(center));
    events.push(Event::touch_move(on_ring(120.0)));
    events.push(Event::mouse_drag(on_ring(300.0)));
    events.push(Event::TouchEnded { touches: vec![] });
    events.push(Event::mouse_down(on_ring(200.0)));
    events
}

fn load_gesture(path: &str) -> Result<Vec<Event>, Box<dyn Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);

    let config = match args.next() {
        Some(path) => WheelConfig::load(&path)?,
        None => WheelConfig::default(),
    };

    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .init();

    let gesture = match args.next() {
        Some(path) => load_gesture(&path)?,
        None => default_gesture(&config),
    };

    let mut picker: WheelPicker<ColorResult, LoggingHost> =
        WheelPicker::with_host(&config, LoggingHost::default()).on_change(|color| color);
    picker.start_session(Rectangle::new(
        REGION_ORIGIN.x,
        REGION_ORIGIN.y,
        config.width,
        config.height,
    ));

    let state = picker.render_state();
    log::info!(
        "wheel {}x{} {} offset {} | color {} | indicator ({:.1}, {:.1})",
        config.width,
        config.height,
        config.direction.name(),
        config.angle_offset,
        state.hex,
        state.indicator.x,
        state.indicator.y
    );

    let mut emitted = 0usize;
    for event in &gesture {
        match picker.handle_event(event) {
            Some(color) => {
                emitted += 1;
                picker.set_color(color.hsva);
                let indicator = picker.indicator_position();
                log::info!(
                    "h={:>3} s={:>3} {} | indicator ({:.1}, {:.1})",
                    color.hsva.h,
                    color.hsva.s,
                    color.hex,
                    indicator.x,
                    indicator.y
                );
            }
            None => log::debug!("no change for {:?}", event),
        }
    }

    picker.end_session();
    log::info!("{} of {} events produced a color", emitted, gesture.len());
    if !picker.interactive().host().live.is_empty() {
        log::warn!("listeners left behind: {:?}", picker.interactive().host().live);
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("hue-wheel-demo error: {}", e);
        std::process::exit(1);
    }
}
