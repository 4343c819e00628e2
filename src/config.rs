//! Configuration surface for the hue wheel.
//!
//! A `WheelConfig` is immutable per render. It can be built in code or loaded
//! from a JSON file with camelCase keys:
//!
//! ```json
//! {
//!   "width": 200,
//!   "height": 200,
//!   "direction": "anticlockwise",
//!   "angleOffset": 0,
//!   "color": "#3388ff"
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::ColorInput;
use crate::error::ConfigError;

/// Logical size of the wheel when none is configured.
pub const DEFAULT_WHEEL_SIZE: f32 = 200.0;

/// Saturation picks below this value are raised to it.
pub const DEFAULT_SATURATION_FLOOR: f32 = 88.0;

/// Winding order of hues around the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Clockwise,
    #[default]
    Anticlockwise,
}

impl Direction {
    /// Sign applied to the indicator offset from the center.
    pub fn sign(self) -> f32 {
        match self {
            Direction::Clockwise => -1.0,
            Direction::Anticlockwise => 1.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Direction::Clockwise => "clockwise",
            Direction::Anticlockwise => "anticlockwise",
        }
    }
}

/// How far from the center the indicator sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum IndicatorPlacement {
    /// Always at 90% of the radius; hue alone drives the position
    #[default]
    FixedRing,
    /// Radial distance proportional to saturation
    Saturation,
}

/// Log level setting for the demo binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Wheel configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WheelConfig {
    /// Wheel diameter in logical pixels
    pub width: f32,
    /// Height of the hit region in logical pixels
    pub height: f32,
    /// Hue winding order
    pub direction: Direction,
    /// Rotation of the hue zero-point, in degrees
    pub angle_offset: f32,
    /// Indicator placement rule
    pub placement: IndicatorPlacement,
    /// Minimum saturation emitted by the picker
    pub saturation_floor: f32,
    /// Initial color
    pub color: Option<ColorInput>,
    /// Log verbosity for the demo binary
    pub log_level: LogLevel,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WHEEL_SIZE,
            height: DEFAULT_WHEEL_SIZE,
            direction: Direction::default(),
            angle_offset: 0.0,
            placement: IndicatorPlacement::default(),
            saturation_floor: DEFAULT_SATURATION_FLOOR,
            color: None,
            log_level: LogLevel::default(),
        }
    }
}

impl WheelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a square size.
    pub fn size(mut self, size: f32) -> Self {
        self.width = size;
        self.height = size;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn angle_offset(mut self, degrees: f32) -> Self {
        self.angle_offset = degrees;
        self
    }

    pub fn placement(mut self, placement: IndicatorPlacement) -> Self {
        self.placement = placement;
        self
    }

    pub fn saturation_floor(mut self, floor: f32) -> Self {
        self.saturation_floor = floor;
        self
    }

    pub fn color(mut self, color: impl Into<ColorInput>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("Loading wheel config from {:?}", path);
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the geometry is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::invalid_geometry(field, value));
            }
        }
        if !self.angle_offset.is_finite() {
            return Err(ConfigError::invalid_geometry("angleOffset", self.angle_offset));
        }
        if !(0.0..=100.0).contains(&self.saturation_floor) {
            return Err(ConfigError::OutOfRange {
                field: "saturationFloor",
                value: self.saturation_floor,
                min: 0.0,
                max: 100.0,
            });
        }
        Ok(())
    }
}
