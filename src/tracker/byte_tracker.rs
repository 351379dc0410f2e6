//! Main ByteTracker algorithm implementation.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::tracker::detection::Detection;
use crate::tracker::matching::{self, AssignmentResult, AssignmentSolver, MatchStrategy};
use crate::tracker::rect::Rect;
use crate::tracker::track::Track;

/// Configuration for the ByteTracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Minimum score for a detection to be considered at all
    pub track_thresh: f32,
    /// Minimum score for the high-confidence tier
    pub high_thresh: f32,
    /// Minimum IoU for a track/detection pairing to be admissible
    pub match_thresh: f32,
    /// Frames without a match after which a track is discarded
    pub max_time_lost: u32,
    /// Matcher used at every stage of the cascade
    pub strategy: MatchStrategy,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            track_thresh: 0.4,
            high_thresh: 0.5,
            match_thresh: 0.7,
            max_time_lost: 30,
            strategy: MatchStrategy::Greedy,
        }
    }
}

impl TrackerConfig {
    pub fn with_track_thresh(mut self, track_thresh: f32) -> Self {
        self.track_thresh = track_thresh;
        self
    }

    pub fn with_high_thresh(mut self, high_thresh: f32) -> Self {
        self.high_thresh = high_thresh;
        self
    }

    pub fn with_match_thresh(mut self, match_thresh: f32) -> Self {
        self.match_thresh = match_thresh;
        self
    }

    pub fn with_max_time_lost(mut self, max_time_lost: u32) -> Self {
        self.max_time_lost = max_time_lost;
        self
    }

    pub fn with_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Check thresholds are in `[0, 1]` and correctly ordered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("track_thresh", self.track_thresh),
            ("high_thresh", self.high_thresh),
            ("match_thresh", self.match_thresh),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ThresholdOutOfRange { name, value });
            }
        }
        if self.track_thresh > self.high_thresh {
            return Err(ConfigError::ThresholdOrder {
                track_thresh: self.track_thresh,
                high_thresh: self.high_thresh,
            });
        }
        Ok(())
    }

    /// Cost ceiling handed to the solver: pairs at or above it are rejected.
    fn max_cost(&self) -> f32 {
        1.0 - self.match_thresh
    }
}

/// Cascaded IoU tracker.
///
/// Each call to [`ByteTracker::update`] runs three association stages:
/// confirmed tracks against high-score detections, the confirmed leftovers
/// against low-score detections, and tentative tracks against the remaining
/// high-score detections. Unmatched high-score detections open new tentative
/// tracks. Not synchronized; wrap it in a lock to share across threads.
pub struct ByteTracker {
    tracks: Vec<Track>,
    next_id: u64,
    frame_id: u32,
    config: TrackerConfig,
}

impl Default for ByteTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

impl ByteTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            tracks: Vec::new(),
            next_id: 1,
            frame_id: 0,
            config,
        }
    }

    /// Build a tracker after validating the configuration.
    pub fn try_new(config: TrackerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Number of `update` calls since construction or the last reset,
    /// wrapping at `u32::MAX`.
    pub fn frame_id(&self) -> u32 {
        self.frame_id
    }

    /// Snapshot of the confirmed tracks, without advancing a frame.
    pub fn tracks(&self) -> Vec<Track> {
        self.tracks
            .iter()
            .filter(|t| t.is_confirmed())
            .cloned()
            .collect()
    }

    /// Every live track, tentative ones included.
    pub fn all_tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Drop all tracks and restart ids from 1.
    pub fn reset(&mut self) {
        debug!(dropped = self.tracks.len(), "tracker reset");
        self.tracks.clear();
        self.next_id = 1;
        self.frame_id = 0;
    }

    pub fn update(&mut self, detections: Vec<Detection>) -> Vec<Track> {
        self.frame_id = self.frame_id.wrapping_add(1);

        // Step 1: Split detections into high-score and low-score
        let (detections_high, detections_low) = self.split_detections(detections);

        // Step 2: Predict every track, then split into confirmed and tentative
        Track::multi_predict(&mut self.tracks);

        let (confirmed, unconfirmed): (Vec<usize>, Vec<usize>) =
            (0..self.tracks.len()).partition(|&i| self.tracks[i].is_confirmed());

        // Step 3: First association, confirmed tracks with high score detections
        let high_rects: Vec<Rect> = detections_high.iter().map(|d| d.bbox).collect();
        let dists = matching::iou_distance(&self.rects_of(&confirmed), &high_rects);
        let AssignmentResult {
            matches,
            unmatched_tracks,
            unmatched_detections,
        } = self.config.strategy.solve(&dists, self.config.max_cost());

        for &(itracked, idet) in &matches {
            self.tracks[confirmed[itracked]].update(&detections_high[idet]);
        }
        let first_matches = matches.len();

        // Step 4: Second association, confirmed leftovers with low score detections
        let r_tracked: Vec<usize> = unmatched_tracks.iter().map(|&i| confirmed[i]).collect();
        let low_rects: Vec<Rect> = detections_low.iter().map(|d| d.bbox).collect();
        let dists_second = matching::iou_distance(&self.rects_of(&r_tracked), &low_rects);
        let AssignmentResult {
            matches: matches_second,
            unmatched_tracks: unmatched_tracks_second,
            ..
        } = self.config.strategy.solve(&dists_second, self.config.max_cost());

        for &(itracked, idet) in &matches_second {
            self.tracks[r_tracked[itracked]].update(&detections_low[idet]);
        }
        for &idx in &unmatched_tracks_second {
            self.tracks[r_tracked[idx]].mark_lost();
        }

        // Step 5: Tentative tracks with the high score detections nobody claimed
        let detections_rem: Vec<&Detection> = unmatched_detections
            .iter()
            .map(|&i| &detections_high[i])
            .collect();
        let rem_rects: Vec<Rect> = detections_rem.iter().map(|d| d.bbox).collect();
        let dists_unconfirmed = matching::iou_distance(&self.rects_of(&unconfirmed), &rem_rects);
        let AssignmentResult {
            matches: matches_unconfirmed,
            unmatched_tracks: unmatched_unconfirmed,
            unmatched_detections: unmatched_new,
        } = self
            .config
            .strategy
            .solve(&dists_unconfirmed, self.config.max_cost());

        for &(itracked, idet) in &matches_unconfirmed {
            self.tracks[unconfirmed[itracked]].update(detections_rem[idet]);
        }
        for &idx in &unmatched_unconfirmed {
            self.tracks[unconfirmed[idx]].mark_lost();
        }

        // Step 6: Init new tracks
        for &idx in &unmatched_new {
            self.spawn(detections_rem[idx]);
        }

        // Step 7: Prune lost and expired tracks
        let max_time_lost = self.config.max_time_lost;
        self.tracks.retain(|t| {
            let keep = !t.is_lost() && t.time_since_update <= max_time_lost;
            if !keep {
                trace!(track_id = t.track_id, age = t.age, "removing track");
            }
            keep
        });

        debug!(
            frame_id = self.frame_id,
            high = detections_high.len(),
            low = detections_low.len(),
            first_matches,
            second_matches = matches_second.len(),
            unconfirmed_matches = matches_unconfirmed.len(),
            spawned = unmatched_new.len(),
            live = self.tracks.len(),
            "frame updated"
        );

        self.tracks()
    }

    /// Partition into (high, low) tiers, dropping anything under `track_thresh`.
    fn split_detections(&self, detections: Vec<Detection>) -> (Vec<Detection>, Vec<Detection>) {
        let mut detections_high = Vec::new();
        let mut detections_low = Vec::new();

        for det in detections {
            if det.score >= self.config.high_thresh {
                detections_high.push(det);
            } else if det.score >= self.config.track_thresh {
                detections_low.push(det);
            }
        }

        (detections_high, detections_low)
    }

    fn rects_of(&self, indices: &[usize]) -> Vec<Rect> {
        indices.iter().map(|&i| self.tracks[i].rect).collect()
    }

    /// The opening detection counts as the track's first hit.
    fn spawn(&mut self, detection: &Detection) {
        let track_id = self.next_id;
        self.next_id += 1;

        let mut track = Track::new(track_id, detection);
        track.update(detection);
        trace!(track_id, score = detection.score, "new tentative track");
        self.tracks.push(track);
    }
}
