// SPDX-FileCopyrightText: 2026 Stan Grams <sjg@haxx.space>
//
// SPDX-License-Identifier: BSD-2-Clause

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_FILE_NAME: &str = "sensor-rs.toml";
const CONFIG_DIR_NAME: &str = "sensor-rs";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(PathBuf, String),

    #[error("Failed to parse config file {0}: {1}")]
    ParseError(PathBuf, String),

    #[error("Config file {0} has no [{1}] section")]
    MissingSection(PathBuf, &'static str),
}

/// Returns the default search paths for `sensor-rs.toml`
/// (current directory → XDG config → /etc).
pub fn config_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
    }
    paths.push(PathBuf::from("/etc").join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
    paths
}

/// Extract and deserialize a named section from a TOML file.
///
/// Returns `Ok(Some(cfg))` when the section is present and parses cleanly,
/// `Ok(None)` when the section is absent, or `Err` on I/O / parse failure.
fn load_section_from_file<T: DeserializeOwned>(
    path: &Path,
    key: &str,
) -> Result<Option<T>, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e.to_string()))?;

    let mut table: toml::Table = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(path.to_path_buf(), e.to_string()))?;

    let Some(section) = table.remove(key) else {
        return Ok(None);
    };

    // Deserialize through the value so serde defaults apply to omitted keys.
    section
        .try_into::<T>()
        .map(Some)
        .map_err(|e| ConfigError::ParseError(path.to_path_buf(), e.to_string()))
}

/// Trait for loading configuration from a `sensor-rs.toml` section.
pub trait ConfigFile: Sized + Default + DeserializeOwned {
    /// Section key in `sensor-rs.toml` (e.g. `"sensor-decode"`).
    fn section_key() -> &'static str;

    /// Load the section from a specific file path.
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// does not contain the expected `[<section_key>]` header.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        load_section_from_file::<Self>(path, Self::section_key())?
            .ok_or_else(|| ConfigError::MissingSection(path.to_path_buf(), Self::section_key()))
    }

    /// Search the default paths and load the first file that contains the
    /// expected section.
    ///
    /// Returns `(config, path_where_found)` or `(Default::default(), None)`
    /// when no config file is found.
    fn load_from_default_paths() -> Result<(Self, Option<PathBuf>), ConfigError> {
        Self::load_from_paths(&config_search_paths())
    }

    /// Like [`ConfigFile::load_from_default_paths`] over an explicit list.
    fn load_from_paths(paths: &[PathBuf]) -> Result<(Self, Option<PathBuf>), ConfigError> {
        for path in paths {
            if path.exists() {
                if let Some(cfg) = load_section_from_file::<Self>(path, Self::section_key())? {
                    return Ok((cfg, Some(path.clone())));
                }
            }
        }
        Ok((Self::default(), None))
    }
}
