//! Per-user storage location for app state.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::version;

/// The per-user directory where the app keeps its state, created on first
/// use.
///
/// Resolved once; later calls return the cached path.
pub fn data_dir() -> &'static Path {
    static DIR: LazyLock<PathBuf> = LazyLock::new(|| {
        let base = env::var_os(BASE_ENV_VAR)
            .unwrap_or_else(|| panic!("Environment variable `{BASE_ENV_VAR}` should be set."));

        let mut dir = PathBuf::from(base);
        dir.extend(PLATFORM_SUBDIRS);
        dir.push(version::APP_NAME);

        if let Err(e) = fs::create_dir_all(&dir) {
            panic!("Couldn't create app data directory `{}`: {e}", dir.display());
        }
        dir
    });

    &DIR
}

#[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
compile_error!("Unsupported platform.");

#[cfg(target_os = "windows")]
const BASE_ENV_VAR: &str = "LOCALAPPDATA";

#[cfg(not(target_os = "windows"))]
const BASE_ENV_VAR: &str = "HOME";

#[cfg(target_os = "windows")]
const PLATFORM_SUBDIRS: [&str; 0] = [];

#[cfg(target_os = "macos")]
const PLATFORM_SUBDIRS: [&str; 2] = ["Library", "Application Support"];

#[cfg(target_os = "linux")]
const PLATFORM_SUBDIRS: [&str; 2] = [".local", "share"];
