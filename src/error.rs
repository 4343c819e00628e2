//! Error types for the configuration and color-parsing boundary.
//!
//! The geometry and interaction cores never fail; out-of-range input is
//! clamped there. Only parsing user-supplied colors and configuration files
//! can produce these errors.

use thiserror::Error;

/// Errors produced when parsing color input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// String is not a 3, 4, 6 or 8 digit hex color
    #[error("Invalid hex color: {0:?}")]
    InvalidHex(String),
}

impl ColorError {
    /// Create an invalid hex error.
    pub fn invalid_hex(input: impl Into<String>) -> Self {
        Self::InvalidHex(input.into())
    }
}

/// Errors that can occur while loading a wheel configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// I/O error while reading the configuration file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A dimension is not a finite, positive number
    #[error("Invalid geometry: {field} must be finite and greater than 0, got {value}")]
    InvalidGeometry {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f32,
    },

    /// A value lies outside its permitted range
    #[error("Out of range: {field} must be within {min}..={max}, got {value}")]
    OutOfRange {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f32,
        /// Lower bound
        min: f32,
        /// Upper bound
        max: f32,
    },
}

impl ConfigError {
    /// Create an invalid geometry error.
    pub fn invalid_geometry(field: &'static str, value: f32) -> Self {
        Self::InvalidGeometry { field, value }
    }
}
