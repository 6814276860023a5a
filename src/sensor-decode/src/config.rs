// SPDX-FileCopyrightText: 2026 Stan Grams <sjg@haxx.space>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Configuration file support for sensor-decode.
//!
//! Config is loaded from the `[sensor-decode]` section of `sensor-rs.toml`.
//! Default search order:
//! 1. Path specified via `--config` CLI argument
//! 2. `./sensor-rs.toml`
//! 3. `~/.config/sensor-rs/sensor-rs.toml`
//! 4. `/etc/sensor-rs/sensor-rs.toml`

use serde::{Deserialize, Serialize};
use sensor_app::{parse_level, ConfigFile};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: Option<String>,
}

impl DecoderConfig {
    pub fn validate(&self) -> Result<(), String> {
        validate_log_level("[sensor-decode].log_level", self.log_level.as_deref())
    }

    /// Generate an example configuration wrapped under the `[sensor-decode]`
    /// section header, suitable for use in a combined `sensor-rs.toml` file.
    pub fn example_combined_toml() -> String {
        #[derive(serde::Serialize)]
        struct Wrapper {
            #[serde(rename = "sensor-decode")]
            inner: DecoderConfig,
        }
        let example = DecoderConfig {
            log_level: Some("warn".to_string()),
        };
        toml::to_string_pretty(&Wrapper { inner: example }).unwrap_or_default()
    }
}

pub fn validate_log_level(origin: &str, level: Option<&str>) -> Result<(), String> {
    match level {
        Some(level) if parse_level(level).is_none() => Err(format!(
            "{} '{}' is invalid (expected one of: trace, debug, info, warn, error)",
            origin, level
        )),
        _ => Ok(()),
    }
}

impl ConfigFile for DecoderConfig {
    fn section_key() -> &'static str {
        "sensor-decode"
    }
}
