//! Single object track for multi-object tracking.

use crate::tracker::detection::Detection;
use crate::tracker::motion_filter::MotionFilter;
use crate::tracker::rect::Rect;
use crate::tracker::track_state::TrackState;

/// Consecutive hits needed before a tentative track is confirmed.
pub const MIN_HITS_TO_CONFIRM: u32 = 3;

/// Single object track.
///
/// Tracks handed out by the tracker are snapshots; mutating a clone has no
/// effect on the tracker.
#[derive(Debug, Clone)]
pub struct Track {
    /// Unique track identifier within one tracker instance
    pub track_id: u64,
    /// Current track state
    pub state: TrackState,
    /// Current estimated bounding box (TLWH)
    pub rect: Rect,
    /// Score of the most recent matched detection
    pub score: f32,
    /// Class of the most recent matched detection
    pub class_id: Option<i32>,
    /// Frames processed since creation
    pub age: u32,
    /// Frames since the last successful match
    pub time_since_update: u32,
    /// Successful matches since creation
    pub hit_streak: u32,
    filter: MotionFilter,
}

impl Track {
    /// Create a tentative track seeded from a detection.
    pub fn new(track_id: u64, detection: &Detection) -> Self {
        Self {
            track_id,
            state: TrackState::Tentative,
            rect: detection.bbox,
            score: detection.score,
            class_id: detection.class_id,
            age: 0,
            time_since_update: 0,
            hit_streak: 0,
            filter: MotionFilter::new(detection.to_xywh()),
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.state == TrackState::Confirmed
    }

    pub fn is_lost(&self) -> bool {
        self.state == TrackState::Lost
    }

    /// Center of the current estimated box.
    pub fn center(&self) -> (f32, f32) {
        self.rect.center()
    }

    /// Estimated per-frame motion (vx, vy, vw, vh).
    pub fn velocity(&self) -> [f32; 4] {
        self.filter.velocity()
    }

    /// Extrapolate one frame ahead. Runs every frame whether or not the
    /// track is matched afterwards.
    pub fn predict(&mut self) {
        self.age += 1;
        self.time_since_update += 1;
        let [cx, cy, w, h] = self.filter.predict();
        self.rect = Rect::from_xywh(cx, cy, w, h);
    }

    /// Correct the track with a matched detection.
    pub fn update(&mut self, detection: &Detection) {
        self.time_since_update = 0;
        self.hit_streak += 1;

        self.filter.update(detection.to_xywh());
        let [cx, cy, w, h] = self.filter.position();
        self.rect = Rect::from_xywh(cx, cy, w, h);

        self.score = detection.score;
        self.class_id = detection.class_id;

        if self.state == TrackState::Tentative && self.hit_streak >= MIN_HITS_TO_CONFIRM {
            self.state = TrackState::Confirmed;
        }
    }

    pub fn mark_lost(&mut self) {
        self.state = TrackState::Lost;
    }

    pub fn multi_predict(tracks: &mut [Track]) {
        for track in tracks.iter_mut() {
            track.predict();
        }
    }
}
