//! The widget-state model of the deck.
//!
//! The controller writes this; the panel reads it to draw. Keeping it plain
//! data means controller tests can assert on exactly what would be shown
//! without spinning up a UI.

/// Transport button glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportGlyph {
    Play,
    Pause,
}

/// Volume icon tier: a discrete visual category derived from a continuous
/// volume fraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VolumeGlyph {
    Off,
    Low,
    High,
    Muted,
}

impl VolumeGlyph {
    /// The tier shown for a (possibly snapped) volume fraction.
    pub fn tier_for(fraction: f64) -> Self {
        if fraction > 0.7 {
            Self::High
        } else if fraction > 0.0 {
            Self::Low
        } else {
            Self::Off
        }
    }
}

/// Visual state of every widget on the deck.
///
/// Bar widths are percentages of the track, `(value / max) * 100`, exactly as
/// the controller computed them. A not-yet-ready source makes the progress
/// width NaN and the panel simply draws no fill.
#[derive(Clone, Debug)]
pub struct ControlWidgets {
    pub transport_glyph: TransportGlyph,
    pub transport_tooltip: &'static str,

    pub progress_pct: f32,
    pub elapsed_text: String,
    pub duration_text: String,

    pub volume_pct: f32,
    pub volume_glyph: VolumeGlyph,
    pub volume_tooltip: &'static str,

    pub speed: f64,
}

impl Default for ControlWidgets {
    fn default() -> Self {
        Self {
            transport_glyph: TransportGlyph::Play,
            transport_tooltip: "Play",
            progress_pct: 0.0,
            elapsed_text: "0:00 /".to_owned(),
            duration_text: "0:00".to_owned(),
            volume_pct: 100.0,
            volume_glyph: VolumeGlyph::High,
            volume_tooltip: "Mute",
            speed: 1.0,
        }
    }
}
