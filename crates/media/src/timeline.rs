//! A wall-clock playback source.
//!
//! Decoding is out of scope for this app, so the source the deck runs against
//! is a timeline: a playhead that advances in real time, with the same
//! transport surface a decoded stream would have.

use log::debug;
use thiserror::Error;

use crate::source::{PlaybackSource, SourceEvent};

/// Indicates a [TimelineSource] couldn't be created.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimelineError {
    #[error("timeline duration must be a finite positive second count, got {0}")]
    InvalidDuration(f64),
}

/// A playback source whose playhead advances with wall-clock time.
///
/// Starts paused at position zero, volume 1.0, rate 1.0. Like a real stream
/// before its metadata arrives, the source is not "ready" until the first
/// [TimelineSource::advance] call, and reports a NaN duration until then.
pub struct TimelineSource {
    duration: f64,
    position: f64,
    paused: bool,
    volume: f64,
    rate: f64,

    ready: bool,
    events: Vec<SourceEvent>,
}

impl TimelineSource {
    pub fn new(duration: f64) -> Result<Self, TimelineError> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(TimelineError::InvalidDuration(duration));
        }

        Ok(Self {
            duration,
            position: 0.0,
            paused: true,
            volume: 1.0,
            rate: 1.0,
            ready: false,
            events: Vec::new(),
        })
    }

    /// Advances the playhead by `dt` seconds of wall-clock time, scaled by
    /// the playback rate. Call once per frame.
    ///
    /// Reaching the end clamps the playhead, pauses, and queues
    /// [SourceEvent::Ended].
    pub fn advance(&mut self, dt: f64) {
        if !self.ready {
            self.ready = true;
            debug!("timeline ready, duration {}s", self.duration);
            self.events.push(SourceEvent::ReadyToPlay);
        }

        if self.paused {
            return;
        }

        self.position += dt * self.rate;
        if self.position < 0.0 {
            self.position = 0.0;
        }

        let ended = self.position >= self.duration;
        if ended {
            self.position = self.duration;
            self.paused = true;
        }

        self.events.push(SourceEvent::PositionChanged);
        if ended {
            debug!("timeline reached its end");
            self.events.push(SourceEvent::Ended);
        }
    }

    /// Takes every notification queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<SourceEvent> {
        std::mem::take(&mut self.events)
    }
}

impl PlaybackSource for TimelineSource {
    fn is_paused(&self) -> bool {
        self.paused
    }

    fn play(&mut self) {
        // Playing a timeline that already ran out restarts it from the top,
        // matching what a native media element does after `ended`.
        if self.ready && self.position >= self.duration {
            self.position = 0.0;
        }
        self.paused = false;
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn current_time(&self) -> f64 {
        self.position
    }

    fn set_current_time(&mut self, seconds: f64) {
        if !seconds.is_finite() {
            return;
        }
        self.position = seconds.clamp(0.0, self.duration);
        self.events.push(SourceEvent::PositionChanged);
    }

    fn duration(&self) -> f64 {
        if self.ready { self.duration } else { f64::NAN }
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        if volume.is_finite() {
            self.volume = volume.clamp(0.0, 1.0);
        }
    }

    fn playback_rate(&self) -> f64 {
        self.rate
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.rate = rate;
    }
}
