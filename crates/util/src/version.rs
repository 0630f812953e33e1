//! Defines constants related to the app's identity.

/// The name of the app.
pub const APP_NAME: &str = "Viewdeck";

/// The version of the app.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
