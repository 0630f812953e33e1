//! The control strip across the bottom of the window.

pub mod fullscreen;

mod controller;
mod widgets;

pub use controller::PlaybackController;

use egui_phosphor::regular;
use media::PlaybackSource;

use widgets::{TransportGlyph, VolumeGlyph};

const TRACK_HEIGHT: f32 = 8.0;
const VOLUME_TRACK_WIDTH: f32 = 90.0;

const TRACK_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(58, 62, 66);
const PROGRESS_FILL: egui::Color32 = egui::Color32::from_rgb(0x9D, 0xF2, 0x9F);
const VOLUME_FILL: egui::Color32 = egui::Color32::from_gray(220);

const SPEED_STEPS: [f64; 5] = [0.5, 0.75, 1.0, 1.5, 2.0];

/// The deck: scrub bar on top, then transport, clock text, speed, volume,
/// and fullscreen controls.
pub struct ControlDeck {
    controller: PlaybackController,
}

impl ControlDeck {
    pub fn new(fullscreen_driver: Box<dyn fullscreen::FullscreenDriver>) -> Self {
        Self {
            controller: PlaybackController::new(fullscreen_driver),
        }
    }

    pub fn controller(&self) -> &PlaybackController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut PlaybackController {
        &mut self.controller
    }

    /// Draws the deck and routes widget events into the controller.
    pub fn ui(&mut self, ui: &mut egui::Ui, source: &mut dyn PlaybackSource) {
        // Scrub bar across the full width.
        let scrub = fill_track(
            ui,
            egui::vec2(ui.available_width(), TRACK_HEIGHT),
            self.controller.widgets().progress_pct,
            PROGRESS_FILL,
        );
        if scrub.clicked() {
            if let Some(pos) = scrub.interact_pointer_pos() {
                self.controller
                    .seek_to(source, pos.x - scrub.rect.left(), scrub.rect.width());
            }
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 8.0;
            ui.visuals_mut().button_frame = false;

            let widgets = self.controller.widgets();
            let transport_glyph = match widgets.transport_glyph {
                TransportGlyph::Play => regular::PLAY,
                TransportGlyph::Pause => regular::PAUSE,
            };
            let transport_tooltip = widgets.transport_tooltip;
            let elapsed_text = widgets.elapsed_text.clone();
            let duration_text = widgets.duration_text.clone();
            let volume_glyph = match widgets.volume_glyph {
                VolumeGlyph::Off => regular::SPEAKER_NONE,
                VolumeGlyph::Low => regular::SPEAKER_LOW,
                VolumeGlyph::High => regular::SPEAKER_HIGH,
                VolumeGlyph::Muted => regular::SPEAKER_X,
            };
            let volume_tooltip = widgets.volume_tooltip;
            let volume_pct = widgets.volume_pct;
            let speed = widgets.speed;

            if icon_button(ui, transport_glyph, transport_tooltip).clicked() {
                self.controller.toggle_playback(source);
            }

            ui.label(egui::RichText::new(elapsed_text).monospace());
            ui.label(egui::RichText::new(duration_text).monospace().weak());

            // Right-hand cluster, far edge first.
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let (fullscreen_glyph, fullscreen_tooltip) = if self.controller.is_fullscreen() {
                    (regular::CORNERS_IN, "Exit fullscreen")
                } else {
                    (regular::CORNERS_OUT, "Fullscreen")
                };
                if icon_button(ui, fullscreen_glyph, fullscreen_tooltip).clicked() {
                    self.controller.toggle_fullscreen();
                }

                let volume_track = fill_track(
                    ui,
                    egui::vec2(VOLUME_TRACK_WIDTH, TRACK_HEIGHT),
                    volume_pct,
                    VOLUME_FILL,
                );
                if volume_track.clicked() {
                    if let Some(pos) = volume_track.interact_pointer_pos() {
                        self.controller.set_volume_from_click(
                            source,
                            pos.x - volume_track.rect.left(),
                            volume_track.rect.width(),
                        );
                    }
                }

                if icon_button(ui, volume_glyph, volume_tooltip).clicked() {
                    self.controller.toggle_mute(source);
                }

                egui::ComboBox::from_id_salt("speed_select")
                    .selected_text(speed_label(speed))
                    .width(70.0)
                    .show_ui(ui, |ui| {
                        for step in SPEED_STEPS {
                            if ui
                                .selectable_label(step == speed, speed_label(step))
                                .clicked()
                            {
                                self.controller.set_playback_rate(source, step);
                            }
                        }
                    });
            });
        });
    }
}

fn speed_label(speed: f64) -> String {
    format!("{speed}x")
}

/// A horizontal track with a proportional fill, clickable along its length.
fn fill_track(
    ui: &mut egui::Ui,
    size: egui::Vec2,
    fill_pct: f32,
    fill_color: egui::Color32,
) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    let painter = ui.painter();
    painter.rect_filled(rect, egui::CornerRadius::same(3), TRACK_BACKGROUND);

    // A not-yet-ready source reports NaN percentages; draw no fill until real
    // numbers arrive.
    if fill_pct.is_finite() {
        let fill_width = rect.width() * (fill_pct / 100.0).clamp(0.0, 1.0);
        let fill_rect = egui::Rect::from_min_size(rect.min, egui::vec2(fill_width, rect.height()));
        painter.rect_filled(fill_rect, egui::CornerRadius::same(3), fill_color);
    }

    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

fn icon_button(ui: &mut egui::Ui, glyph: &str, tooltip: &str) -> egui::Response {
    ui.add(
        egui::Button::new(
            egui::RichText::new(glyph)
                .size(18.0)
                .color(ui.visuals().text_color()),
        )
        .frame(false)
        .fill(egui::Color32::TRANSPARENT)
        .stroke(egui::Stroke::NONE),
    )
    .on_hover_text(tooltip)
}
