//! Integration module for connecting object detection backends with the tracker.
//!
//! Capture, inference and rendering stay with the caller. This module only
//! shapes their output into [`Detection`](crate::Detection)s and drives the
//! tracker one frame at a time.

mod builder;
mod detector;
mod labels;
mod pipeline;

pub use builder::DetectionBuilder;
pub use detector::{DetectionSource, IntoDetections};
pub use labels::{ClassLabels, UNKNOWN_LABEL};
pub use pipeline::TrackerPipeline;
