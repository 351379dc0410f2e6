mod byte_tracker;
mod detection;
mod matching;
mod motion_filter;
mod rect;
mod track;
mod track_state;

pub use byte_tracker::{ByteTracker, TrackerConfig};
pub use detection::Detection;
pub use matching::{
    AssignmentResult, AssignmentSolver, MatchStrategy, greedy_assignment, iou_distance,
    linear_assignment,
};
pub use motion_filter::MotionFilter;
pub use rect::{Rect, iou_batch};
pub use track::{MIN_HITS_TO_CONFIRM, Track};
pub use track_state::TrackState;
