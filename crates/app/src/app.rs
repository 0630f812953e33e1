//! The top-level eframe application.

use log::warn;
use media::{PlaybackSource, SourceEvent, TimelineSource};
use thiserror::Error;

use crate::args::Args;
use crate::control_deck::{ControlDeck, fullscreen};
use crate::settings::PlayerSettings;
use crate::video_surface::VideoSurface;
use crate::view::View;

/// Indicates the app couldn't be constructed.
#[derive(Error, Debug)]
pub enum AppInitError {
    #[error("couldn't create the playback timeline: {0}")]
    Timeline(#[from] media::TimelineError),
}

pub struct App {
    source: TimelineSource,
    deck: ControlDeck,
    surface: VideoSurface,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, args: &Args) -> Result<Self, AppInitError> {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);
        configure_styles(&cc.egui_ctx);

        let settings = PlayerSettings::load().unwrap_or_else(|e| {
            warn!("couldn't load saved player settings: {e}");
            PlayerSettings::default()
        });
        let volume = args.volume.unwrap_or(settings.volume);
        let speed = args.speed.unwrap_or(settings.playback_rate);

        let mut source = TimelineSource::new(args.duration)?;
        let mut deck = ControlDeck::new(fullscreen::resolve(&cc.egui_ctx));
        deck.controller_mut()
            .apply_startup_state(&mut source, volume, speed);

        Ok(Self {
            source,
            deck,
            surface: VideoSurface::new(args.title.clone()),
        })
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Delta time for this frame.
        let dt = ctx.input(|i| i.unstable_dt);
        self.source.advance(f64::from(dt));

        for event in self.source.drain_events() {
            match event {
                SourceEvent::ReadyToPlay | SourceEvent::PositionChanged => {
                    self.deck
                        .controller_mut()
                        .on_position_changed(&self.source);
                }
                SourceEvent::Ended => self.deck.controller_mut().on_playback_ended(),
            }
        }

        egui::TopBottomPanel::bottom("control_deck")
            .frame(
                egui::Frame::NONE
                    .fill(egui::Color32::from_rgb(24, 29, 31))
                    .inner_margin(egui::Margin::symmetric(12, 8)),
            )
            .show(ctx, |ui| {
                self.deck.ui(ui, &mut self.source);
            });

        self.surface
            .set_fullscreen_layout(self.deck.controller().is_fullscreen());
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.surface.ui(ui);
            });

        // Click anywhere in the video to play or pause.
        if self.surface.take_clicked() {
            self.deck.controller_mut().toggle_playback(&mut self.source);
        }

        if !self.source.is_paused() {
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        let settings = PlayerSettings {
            volume: self.source.volume(),
            playback_rate: self.source.playback_rate(),
        };
        if let Err(e) = settings.save() {
            warn!("couldn't save player settings: {e}");
        }
    }
}

fn configure_styles(ctx: &egui::Context) {
    use egui::{Color32, Visuals};

    let mut visuals = Visuals::dark();

    // Main background
    visuals.panel_fill = Color32::from_rgb(24, 29, 31);

    // Popups (the speed list)
    visuals.window_fill = Color32::from_rgb(20, 24, 27);

    // Button styling
    visuals.widgets.inactive.weak_bg_fill = Color32::TRANSPARENT;
    visuals.widgets.hovered.weak_bg_fill = Color32::from_rgb(40, 44, 47);
    visuals.widgets.active.weak_bg_fill = Color32::from_rgb(50, 54, 57);

    let mut style = egui::Style::default();
    style.spacing.item_spacing = egui::vec2(4.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    style.visuals = visuals;

    ctx.set_style(style);
}
