//! Error types.

use thiserror::Error;

/// Rejected tracker configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be a finite value in [0, 1], got {value}")]
    ThresholdOutOfRange { name: &'static str, value: f32 },

    #[error("track_thresh ({track_thresh}) must not exceed high_thresh ({high_thresh})")]
    ThresholdOrder { track_thresh: f32, high_thresh: f32 },
}
