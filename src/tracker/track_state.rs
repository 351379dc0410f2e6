/// Track state enumeration for object tracking lifecycle.
///
/// Transitions only move forward: `Tentative -> Confirmed -> Lost` or
/// `Tentative -> Lost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackState {
    /// Newly created track, not yet confirmed
    #[default]
    Tentative,
    /// Established track, reported to callers
    Confirmed,
    /// Marked for removal at the end of the current frame
    Lost,
}
