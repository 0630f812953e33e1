//! The area where the video itself renders.

use crate::view::View;

/// The playback surface.
///
/// Windowed, it draws as a rounded inset frame; in fullscreen layout it
/// stretches edge to edge. A click anywhere on it toggles playback, picked up
/// by the app through [VideoSurface::take_clicked].
pub struct VideoSurface {
    frame: egui::Frame,
    title: String,
    fullscreen_layout: bool,
    clicked: bool,
}

impl VideoSurface {
    pub fn new(title: String) -> Self {
        Self {
            frame: egui::Frame::new()
                .inner_margin(12)
                .corner_radius(14)
                .shadow(egui::Shadow {
                    offset: [8, 12],
                    blur: 16,
                    spread: 0,
                    color: egui::Color32::from_black_alpha(180),
                })
                .fill(egui::Color32::from_rgb(24, 24, 27))
                .stroke(egui::Stroke::new(1.0, egui::Color32::GRAY)),
            title,
            fullscreen_layout: false,
            clicked: false,
        }
    }

    /// Mirrors the controller's fullscreen state into the layout.
    pub fn set_fullscreen_layout(&mut self, on: bool) {
        self.fullscreen_layout = on;
    }

    /// True once per click on the surface.
    pub fn take_clicked(&mut self) -> bool {
        std::mem::take(&mut self.clicked)
    }

    fn screen(&mut self, ui: &mut egui::Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::click());

        let corner = if self.fullscreen_layout {
            egui::CornerRadius::ZERO
        } else {
            egui::CornerRadius::same(6)
        };
        let painter = ui.painter();
        painter.rect_filled(rect, corner, egui::Color32::from_rgb(8, 8, 10));
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            &self.title,
            egui::FontId::proportional(20.0),
            egui::Color32::from_gray(110),
        );

        if response.clicked() {
            self.clicked = true;
        }
    }
}

impl View for VideoSurface {
    fn ui(&mut self, ui: &mut egui::Ui) {
        if self.fullscreen_layout {
            self.screen(ui);
        } else {
            let frame = self.frame;
            frame.show(ui, |ui| self.screen(ui));
        }
    }
}
