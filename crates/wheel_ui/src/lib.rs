//! wheel_ui - host-agnostic pointer interaction for drag-driven widgets
//!
//! This crate turns raw mouse and touch events into positions normalized to a
//! widget's bounding box. It owns the drag lifecycle, arbitrates between touch
//! and mouse input, and tells the host which global listeners must be live.

mod callback;
mod event;
mod interactive;
mod layout;
mod listener;
mod region;
mod state;

pub use callback::Callback;
pub use event::{Event, PRIMARY_BUTTON};
pub use interactive::Interactive;
pub use layout::{clamp, Point, Rectangle, RelativePosition};
pub use listener::{Detached, ListenerHost, ListenerKind};
pub use region::Region;
pub use state::{DragState, InteractionState, Modality};
