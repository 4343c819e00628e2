//! hue_wheel - geometry and interaction engine for a ring-shaped hue picker
//!
//! The wheel maps pointer positions to hue/saturation and colors back to an
//! indicator position. Input arbitration and drag tracking come from
//! [`wheel_ui`]; rendering is left to the host through [`RenderState`].

pub mod color;
pub mod config;
pub mod error;
mod picker;
pub mod wheel;

pub use color::{ColorInput, ColorResult, Hsva, Rgba};
pub use config::{Direction, IndicatorPlacement, LogLevel, WheelConfig};
pub use error::{ColorError, ConfigError};
pub use picker::{RenderState, WheelPicker};
pub use wheel::{HueSaturation, Wheel, WheelStyle};

pub use wheel_ui;
