//! Cascaded IoU multi-object tracker.
//!
//! Feed one list of [`Detection`]s per frame into [`ByteTracker::update`] and
//! get back the confirmed [`Track`]s with identities that persist across
//! frames. Association runs in three stages so that low-confidence
//! detections can keep established tracks alive without ever starting new
//! ones.
//!
//! ```
//! use cascade_track::{ByteTracker, Detection, TrackerConfig};
//!
//! let mut tracker = ByteTracker::new(TrackerConfig::default());
//! for _ in 0..3 {
//!     tracker.update(vec![Detection::new(10.0, 20.0, 40.0, 60.0, 0.9)]);
//! }
//! assert_eq!(tracker.tracks().len(), 1);
//! ```

mod error;
pub mod integration;
pub mod tracker;

pub use error::ConfigError;
pub use integration::{
    ClassLabels, DetectionBuilder, DetectionSource, IntoDetections, TrackerPipeline,
};
pub use tracker::{
    AssignmentResult, AssignmentSolver, ByteTracker, Detection, MatchStrategy, Rect, Track,
    TrackState, TrackerConfig,
};
