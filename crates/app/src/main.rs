mod app;
mod args;
mod control_deck;
mod settings;
mod video_surface;
mod view;

use clap::Parser;

use crate::app::App;
use crate::args::Args;

fn main() {
    env_logger::init();
    let args = Args::parse();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(util::version::APP_NAME)
            .with_inner_size(egui::Vec2::new(960.0, 600.0)),
        centered: true,
        ..Default::default()
    };

    let result = eframe::run_native(
        util::version::APP_NAME,
        native_options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, &args)?))),
    );

    if let Err(e) = result {
        util::fatal_exit!("{} failed to start: {e}", util::version::APP_NAME);
    }
}
