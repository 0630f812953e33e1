//! JSON save/load helpers for small on-disk state files.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Indicates that something went wrong saving or loading a state file.
#[derive(Error, Debug)]
pub enum SavedFileError {
    #[error("file io failed: {0}")]
    Io(#[from] io::Error),
    #[error("(de)serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes `data` to `path` as JSON, creating parent directories as needed.
///
/// We'll pretty print if we're in debug mode.
pub fn save_json<T, P>(data: &T, path: P) -> Result<(), SavedFileError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    if let Some(parent) = path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }

    let text = if cfg!(debug_assertions) {
        serde_json::to_string_pretty(data)
    } else {
        serde_json::to_string(data)
    }?;

    fs::write(path, text).map_err(Into::into)
}

/// Reads `path` as JSON.
///
/// A missing file is not an error and yields [Default::default]; a file that
/// exists but can't be read or parsed is.
pub fn load_json_or_default<T, P>(path: P) -> Result<T, SavedFileError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(e.into()),
    };

    serde_json::from_str(&text).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use serde::Deserialize;

    use super::*;

    #[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
    struct Sample {
        count: u32,
        label: String,
    }

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("viewdeck-util-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn data_round_trips_through_disk() {
        let path = scratch_path("round_trip.json");
        let data = Sample {
            count: 7,
            label: "seven".to_owned(),
        };

        save_json(&data, &path).unwrap();
        let loaded: Sample = load_json_or_default(&path).unwrap();
        assert_eq!(loaded, data);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_file_yields_default() {
        let path = scratch_path("never_written.json");
        let loaded: Sample = load_json_or_default(path).unwrap();
        assert_eq!(loaded, Sample::default());
    }

    #[test]
    fn garbage_file_is_an_error() {
        let path = scratch_path("garbage.json");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, "{ not json").unwrap();

        let loaded: Result<Sample, _> = load_json_or_default(&path);
        assert!(matches!(loaded, Err(SavedFileError::Json(_))));

        let _ = fs::remove_file(path);
    }
}
