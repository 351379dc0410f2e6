//! TrackerPipeline for combining detection with tracking.

use tracing::debug;

use crate::error::ConfigError;
use crate::tracker::{ByteTracker, Track, TrackerConfig};

use super::DetectionSource;

/// A combined tracker that bundles detection inference with the ByteTracker.
///
/// Frames are processed strictly one at a time. A capture loop that produces
/// frames faster than this consumes them should drop the late ones rather
/// than queue them.
pub struct TrackerPipeline<D: DetectionSource> {
    detector: D,
    tracker: ByteTracker,
}

impl<D: DetectionSource> TrackerPipeline<D> {
    /// Create a new tracking pipeline with the given detector and tracker config.
    pub fn new(detector: D, config: TrackerConfig) -> Self {
        Self {
            detector,
            tracker: ByteTracker::new(config),
        }
    }

    /// Like [`TrackerPipeline::new`], validating the configuration first.
    pub fn try_new(detector: D, config: TrackerConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            detector,
            tracker: ByteTracker::try_new(config)?,
        })
    }

    /// Create a new tracking pipeline with default tracker configuration.
    pub fn with_default_config(detector: D) -> Self {
        Self::new(detector, TrackerConfig::default())
    }

    /// Process a single frame and return confirmed tracks.
    ///
    /// A detection failure leaves the tracker untouched.
    pub fn process_frame(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<Track>, D::Error> {
        let detections = self.detector.detect(input, width, height)?;
        Ok(self.tracker.update(detections))
    }

    /// Confirmed tracks as of the last processed frame.
    pub fn tracks(&self) -> Vec<Track> {
        self.tracker.tracks()
    }

    /// Forget all tracks, e.g. when a new video or scene starts.
    pub fn reset(&mut self) {
        debug!("pipeline reset");
        self.tracker.reset();
    }

    /// Get a reference to the underlying detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Get a mutable reference to the underlying detector.
    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    /// Get a reference to the underlying tracker.
    pub fn tracker(&self) -> &ByteTracker {
        &self.tracker
    }

    /// Get a mutable reference to the underlying tracker.
    pub fn tracker_mut(&mut self) -> &mut ByteTracker {
        &mut self.tracker
    }
}
