//! Contains [Args], which are parsed command-line flags.

use clap::Parser;

/// Parsed command line arguments.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(about = "Desktop playback control deck.", version = util::version::APP_VERSION)]
pub struct Args {
    /// Length of the timeline to play, in seconds.
    #[arg(long, default_value_t = 634.0)]
    pub duration: f64,

    /// Title shown on the video surface.
    #[arg(long, default_value = "Sample clip")]
    pub title: String,

    /// Starting volume in [0, 1]. Overrides the saved setting.
    #[arg(long)]
    pub volume: Option<f64>,

    /// Starting playback speed. Overrides the saved setting.
    #[arg(long)]
    pub speed: Option<f64>,
}
