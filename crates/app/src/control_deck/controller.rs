//! The playback controller: widget events in, source commands and widget
//! state out.

use media::PlaybackSource;
use util::timecode::format_clock;

use super::fullscreen::FullscreenDriver;
use super::widgets::{ControlWidgets, TransportGlyph, VolumeGlyph};

/// Translates pointer/change events on the deck's widgets into commands
/// against a [PlaybackSource], and mirrors the source's state back into
/// [ControlWidgets].
///
/// Constructed once at startup. The source is borrowed per call; the
/// fullscreen driver is injected at construction, already resolved.
pub struct PlaybackController {
    widgets: ControlWidgets,

    /// Pre-mute volume, restored on unmute.
    last_volume: f64,

    /// Mirrors presentation mode by assumption. Nothing reads the real state
    /// back after a request, so this can drift if the platform ignores one.
    fullscreen: bool,

    fullscreen_driver: Box<dyn FullscreenDriver>,
}

impl PlaybackController {
    pub fn new(fullscreen_driver: Box<dyn FullscreenDriver>) -> Self {
        Self {
            widgets: ControlWidgets::default(),
            last_volume: 1.0,
            fullscreen: false,
            fullscreen_driver,
        }
    }

    pub fn widgets(&self) -> &ControlWidgets {
        &self.widgets
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Pushes the volume and speed a session starts with (saved settings or
    /// flag overrides) into the source and the widget model.
    pub fn apply_startup_state(
        &mut self,
        source: &mut dyn PlaybackSource,
        volume: f64,
        rate: f64,
    ) {
        source.set_volume(volume);
        let volume = source.volume();
        if volume > 0.0 {
            self.last_volume = volume;
        }
        self.widgets.volume_pct = (volume * 100.0) as f32;
        self.widgets.volume_glyph = VolumeGlyph::tier_for(volume);

        source.set_playback_rate(rate);
        self.widgets.speed = rate;
    }

    // Play & Pause

    pub fn toggle_playback(&mut self, source: &mut dyn PlaybackSource) {
        if source.is_paused() {
            source.play();
            self.widgets.transport_glyph = TransportGlyph::Pause;
            self.widgets.transport_tooltip = "Pause";
        } else {
            source.pause();
            self.show_play_glyph();
        }
    }

    /// Invoked when the source signals its natural end.
    pub fn on_playback_ended(&mut self) {
        self.show_play_glyph();
    }

    fn show_play_glyph(&mut self) {
        self.widgets.transport_glyph = TransportGlyph::Play;
        self.widgets.transport_tooltip = "Play";
    }

    // Progress

    /// Re-renders the elapsed bar and both clock labels from the source.
    /// Invoked on every position change and once when the source becomes
    /// playable.
    pub fn on_position_changed(&mut self, source: &dyn PlaybackSource) {
        let current = source.current_time();
        let duration = source.duration();

        self.widgets.progress_pct = ((current / duration) * 100.0) as f32;
        self.widgets.elapsed_text = format!("{} /", format_clock(current));
        self.widgets.duration_text = format_clock(duration);
    }

    /// Maps a click on the scrub track to a playhead position.
    ///
    /// The click geometry comes from inside the track's rect, so the fraction
    /// is in `[0, 1]` by construction; no clamping here.
    pub fn seek_to(
        &mut self,
        source: &mut dyn PlaybackSource,
        click_offset_px: f32,
        track_width_px: f32,
    ) {
        let fraction = f64::from(click_offset_px) / f64::from(track_width_px);
        self.widgets.progress_pct = (fraction * 100.0) as f32;
        source.set_current_time(fraction * source.duration());
    }

    // Volume

    pub fn toggle_mute(&mut self, source: &mut dyn PlaybackSource) {
        if source.volume() > 0.0 {
            self.last_volume = source.volume();
            source.set_volume(0.0);
            self.widgets.volume_glyph = VolumeGlyph::Muted;
            self.widgets.volume_tooltip = "Unmute";
            self.widgets.volume_pct = 0.0;
        } else {
            source.set_volume(self.last_volume);
            self.widgets.volume_glyph = VolumeGlyph::High;
            self.widgets.volume_tooltip = "Mute";
            self.widgets.volume_pct = (self.last_volume * 100.0) as f32;
        }
    }

    /// Maps a click on the volume track to a volume level.
    pub fn set_volume_from_click(
        &mut self,
        source: &mut dyn PlaybackSource,
        click_offset_px: f32,
        track_width_px: f32,
    ) {
        let mut fraction = f64::from(click_offset_px) / f64::from(track_width_px);

        // Dead zones at the extremes so exact mute/full are reachable.
        if fraction < 0.1 {
            fraction = 0.0;
        }
        if fraction > 0.9 {
            fraction = 1.0;
        }

        self.widgets.volume_pct = (fraction * 100.0) as f32;
        source.set_volume(fraction);
        self.widgets.volume_glyph = VolumeGlyph::tier_for(fraction);

        // Recorded even at exactly zero; unmuting after a click to zero
        // restores zero.
        self.last_volume = fraction;
    }

    // Playback speed

    pub fn set_playback_rate(&mut self, source: &mut dyn PlaybackSource, rate: f64) {
        // Forwarded verbatim; the source owns its notion of a valid rate.
        source.set_playback_rate(rate);
        self.widgets.speed = rate;
    }

    // Fullscreen

    pub fn toggle_fullscreen(&mut self) {
        if !self.fullscreen {
            self.fullscreen_driver.enter();
        } else {
            self.fullscreen_driver.exit();
        }

        // Flips whether or not the platform honored the request.
        self.fullscreen = !self.fullscreen;
    }
}

#[cfg(test)]
mod tests {
    use super::super::fullscreen::{MockFullscreenDriver, Unsupported};
    use super::*;

    /// A stateful stand-in for the external media object. Setters store
    /// verbatim so tests can assert the exact values the controller sent.
    struct FakeSource {
        paused: bool,
        current_time: f64,
        duration: f64,
        volume: f64,
        rate: f64,
    }

    impl Default for FakeSource {
        fn default() -> Self {
            Self {
                paused: true,
                current_time: 0.0,
                duration: 300.0,
                volume: 1.0,
                rate: 1.0,
            }
        }
    }

    impl PlaybackSource for FakeSource {
        fn is_paused(&self) -> bool {
            self.paused
        }

        fn play(&mut self) {
            self.paused = false;
        }

        fn pause(&mut self) {
            self.paused = true;
        }

        fn current_time(&self) -> f64 {
            self.current_time
        }

        fn set_current_time(&mut self, seconds: f64) {
            self.current_time = seconds;
        }

        fn duration(&self) -> f64 {
            self.duration
        }

        fn volume(&self) -> f64 {
            self.volume
        }

        fn set_volume(&mut self, volume: f64) {
            self.volume = volume;
        }

        fn playback_rate(&self) -> f64 {
            self.rate
        }

        fn set_playback_rate(&mut self, rate: f64) {
            self.rate = rate;
        }
    }

    fn controller() -> PlaybackController {
        PlaybackController::new(Box::new(Unsupported))
    }

    #[test]
    fn toggling_playback_round_trips_the_transport_widget() {
        let mut controller = controller();
        let mut source = FakeSource::default();

        controller.toggle_playback(&mut source);
        assert!(!source.paused);
        assert_eq!(controller.widgets().transport_glyph, TransportGlyph::Pause);
        assert_eq!(controller.widgets().transport_tooltip, "Pause");

        controller.toggle_playback(&mut source);
        assert!(source.paused);
        assert_eq!(controller.widgets().transport_glyph, TransportGlyph::Play);
        assert_eq!(controller.widgets().transport_tooltip, "Play");
    }

    #[test]
    fn ended_always_shows_play_regardless_of_prior_state() {
        let mut controller = controller();
        let mut source = FakeSource::default();

        controller.toggle_playback(&mut source);
        assert_eq!(controller.widgets().transport_glyph, TransportGlyph::Pause);

        controller.on_playback_ended();
        assert_eq!(controller.widgets().transport_glyph, TransportGlyph::Play);
        assert_eq!(controller.widgets().transport_tooltip, "Play");

        // Already showing play; stays that way.
        controller.on_playback_ended();
        assert_eq!(controller.widgets().transport_glyph, TransportGlyph::Play);
    }

    #[test]
    fn position_changes_render_the_bar_and_clock_text() {
        let mut controller = controller();
        let mut source = FakeSource::default();
        source.current_time = 65.0;
        source.duration = 600.0;

        controller.on_position_changed(&source);

        let widgets = controller.widgets();
        assert!((widgets.progress_pct - (65.0 / 600.0 * 100.0) as f32).abs() < 1e-6);
        assert_eq!(widgets.elapsed_text, "1:05 /");
        assert_eq!(widgets.duration_text, "10:00");
    }

    #[test]
    fn unready_source_renders_nan_duration_text() {
        let mut controller = controller();
        let mut source = FakeSource::default();
        source.duration = f64::NAN;

        controller.on_position_changed(&source);

        let widgets = controller.widgets();
        assert_eq!(widgets.elapsed_text, "0:00 /");
        assert_eq!(widgets.duration_text, "NaN:NaN");
        assert!(widgets.progress_pct.is_nan());
    }

    #[test]
    fn seeks_map_the_click_fraction_onto_the_duration() {
        let mut controller = controller();
        let mut source = FakeSource::default();

        controller.seek_to(&mut source, 150.0, 600.0);
        assert_eq!(source.current_time, 0.25 * 300.0);
        assert_eq!(controller.widgets().progress_pct, 25.0);
    }

    #[test]
    fn seeks_reach_both_track_edges_exactly() {
        let mut controller = controller();
        let mut source = FakeSource::default();

        controller.seek_to(&mut source, 0.0, 480.0);
        assert_eq!(source.current_time, 0.0);

        controller.seek_to(&mut source, 480.0, 480.0);
        assert_eq!(source.current_time, 300.0);
    }

    #[test]
    fn clicks_near_the_bottom_of_the_volume_track_snap_to_zero() {
        let mut controller = controller();
        let mut source = FakeSource::default();

        controller.set_volume_from_click(&mut source, 5.0, 100.0);

        assert_eq!(source.volume, 0.0);
        assert_eq!(controller.widgets().volume_glyph, VolumeGlyph::Off);
        assert_eq!(controller.widgets().volume_pct, 0.0);
    }

    #[test]
    fn clicks_near_the_top_of_the_volume_track_snap_to_full() {
        let mut controller = controller();
        let mut source = FakeSource::default();

        controller.set_volume_from_click(&mut source, 95.0, 100.0);

        assert_eq!(source.volume, 1.0);
        assert_eq!(controller.widgets().volume_glyph, VolumeGlyph::High);
        assert_eq!(controller.widgets().volume_pct, 100.0);
    }

    #[test]
    fn mid_track_volume_clicks_pick_the_low_tier() {
        let mut controller = controller();
        let mut source = FakeSource::default();

        controller.set_volume_from_click(&mut source, 50.0, 100.0);

        assert_eq!(source.volume, 0.5);
        assert_eq!(controller.widgets().volume_glyph, VolumeGlyph::Low);
        assert_eq!(controller.widgets().volume_pct, 50.0);
    }

    #[test]
    fn muting_then_unmuting_restores_the_premute_volume() {
        let mut controller = controller();
        let mut source = FakeSource::default();
        controller.set_volume_from_click(&mut source, 55.0, 100.0);

        controller.toggle_mute(&mut source);
        assert_eq!(source.volume, 0.0);
        assert_eq!(controller.widgets().volume_glyph, VolumeGlyph::Muted);
        assert_eq!(controller.widgets().volume_tooltip, "Unmute");
        assert_eq!(controller.widgets().volume_pct, 0.0);

        controller.toggle_mute(&mut source);
        assert_eq!(source.volume, 0.55);
        assert_eq!(controller.widgets().volume_glyph, VolumeGlyph::High);
        assert_eq!(controller.widgets().volume_tooltip, "Mute");
        assert_eq!(controller.widgets().volume_pct, 55.0);
    }

    #[test]
    fn unmuting_after_a_click_to_zero_restores_zero() {
        // The click handler records zero as the last volume, so the
        // mute/unmute round trip lands back on silence.
        let mut controller = controller();
        let mut source = FakeSource::default();

        controller.set_volume_from_click(&mut source, 0.0, 100.0);
        controller.toggle_mute(&mut source);

        assert_eq!(source.volume, 0.0);
        assert_eq!(controller.widgets().volume_glyph, VolumeGlyph::High);
    }

    #[test]
    fn playback_rate_is_forwarded_verbatim() {
        let mut controller = controller();
        let mut source = FakeSource::default();

        controller.set_playback_rate(&mut source, 1.5);
        assert_eq!(source.rate, 1.5);
        assert_eq!(controller.widgets().speed, 1.5);

        // No validation in the controller; the source owns the range.
        controller.set_playback_rate(&mut source, 16.0);
        assert_eq!(source.rate, 16.0);
    }

    #[test]
    fn fullscreen_toggles_alternate_enter_and_exit_on_the_driver() {
        let mut driver = MockFullscreenDriver::new();
        let mut seq = mockall::Sequence::new();
        driver
            .expect_enter()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        driver
            .expect_exit()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let mut controller = PlaybackController::new(Box::new(driver));

        controller.toggle_fullscreen();
        assert!(controller.is_fullscreen());

        controller.toggle_fullscreen();
        assert!(!controller.is_fullscreen());
    }

    #[test]
    fn startup_state_lands_in_the_source_and_the_widgets() {
        let mut controller = controller();
        let mut source = FakeSource::default();

        controller.apply_startup_state(&mut source, 0.5, 1.5);

        assert_eq!(source.volume, 0.5);
        assert_eq!(source.rate, 1.5);
        assert_eq!(controller.widgets().volume_pct, 50.0);
        assert_eq!(controller.widgets().volume_glyph, VolumeGlyph::Low);
        assert_eq!(controller.widgets().speed, 1.5);

        // The startup volume is also what an unmute restores.
        controller.toggle_mute(&mut source);
        controller.toggle_mute(&mut source);
        assert_eq!(source.volume, 0.5);
    }
}
