//! Error types for geotile.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GeoTileError>;

/// Errors raised by the geometry engine and its configuration layer.
#[derive(Debug, Error)]
pub enum GeoTileError {
    /// An argument lies outside the domain an operation accepts
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A longitude span was requested at a pole, where `cos(lat)` is zero
    #[error("Longitude span is undefined at latitude {lat} (pole)")]
    PoleSingularity { lat: f64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[cfg(feature = "toml")]
    #[error("TOML error: {0}")]
    Toml(String),
}
