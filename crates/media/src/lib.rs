//! Playback sources for the control deck.
//!
//! This crate owns the seam between the UI and whatever is actually playing:
//! [PlaybackSource] is the surface the controller talks to, and
//! [TimelineSource] is the wall-clock implementation the app runs against.

pub mod source;
pub mod timeline;

pub use source::{PlaybackSource, SourceEvent};
pub use timeline::{TimelineError, TimelineSource};
