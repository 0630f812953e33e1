//! The controller-facing surface of a media source.

/// A notification fired by a source.
///
/// Sources queue these as they happen; the app drains the queue once per
/// frame. Fire-and-forget, no acknowledgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEvent {
    /// The source has enough data to start playing; duration is known from
    /// here on.
    ReadyToPlay,
    /// The playhead moved.
    PositionChanged,
    /// Playback reached the natural end of the media.
    Ended,
}

/// Transport state and commands of a media source.
///
/// The controller owns no source; it borrows one for the duration of each
/// widget callback.
pub trait PlaybackSource {
    fn is_paused(&self) -> bool;
    fn play(&mut self);
    fn pause(&mut self);

    /// Current playhead position in seconds.
    fn current_time(&self) -> f64;

    /// Moves the playhead. Implementations clamp to their own valid range.
    fn set_current_time(&mut self, seconds: f64);

    /// Total length in seconds. NaN until the source is ready.
    fn duration(&self) -> f64;

    /// Volume level in `0.0..=1.0`.
    fn volume(&self) -> f64;
    fn set_volume(&mut self, volume: f64);

    /// Playback speed multiplier.
    fn playback_rate(&self) -> f64;
    fn set_playback_rate(&mut self, rate: f64);
}
