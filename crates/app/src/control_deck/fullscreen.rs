//! Fullscreen presentation, resolved once at startup.

/// The resolved way in and out of fullscreen presentation.
///
/// Capability is probed a single time when the app starts; every toggle after
/// that calls whatever was resolved instead of re-probing the platform.
#[cfg_attr(test, mockall::automock)]
pub trait FullscreenDriver {
    fn enter(&mut self);
    fn exit(&mut self);
}

/// Resolves this session's fullscreen entry points.
pub fn resolve(ctx: &egui::Context) -> Box<dyn FullscreenDriver> {
    if ctx.embed_viewports() {
        // No OS window of our own to present fullscreen.
        return Box::new(Unsupported);
    }

    Box::new(ViewportFullscreen { ctx: ctx.clone() })
}

/// Drives fullscreen through viewport commands.
struct ViewportFullscreen {
    ctx: egui::Context,
}

impl FullscreenDriver for ViewportFullscreen {
    fn enter(&mut self) {
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::Fullscreen(true));
    }

    fn exit(&mut self) {
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::Fullscreen(false));
    }
}

/// The driver used when the platform offers no fullscreen entry point.
/// Toggling still changes the layout; presentation is left alone.
pub struct Unsupported;

impl FullscreenDriver for Unsupported {
    fn enter(&mut self) {}

    fn exit(&mut self) {}
}
