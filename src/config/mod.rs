// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Utility configuration.
//!
//! This module manages the configuration file shared by the presentation
//! utilities. Every section falls back to its defaults when missing, so an
//! older or partial file still loads.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_NAME: &str = "streamview-util";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct UtilConfig {
    pub version: u32,
    pub approximator: ApproximatorConfig,
    pub colour: ColourConfig,
    pub links: LinkConfig,
}

impl Default for UtilConfig {
    fn default() -> Self {
        Self {
            version: 1,
            approximator: ApproximatorConfig::default(),
            colour: ColourConfig::default(),
            links: LinkConfig::default(),
        }
    }
}

/// Settings for [`crate::pattern::Approximator`].
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ApproximatorConfig {
    /// Re-match every generated literal against its pattern and log mismatches.
    pub verify: bool,
}

/// Brightness bounds for generated colours, applied to each channel.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ColourConfig {
    pub min_brightness: u8,
    pub max_brightness: u8,
}

impl Default for ColourConfig {
    fn default() -> Self {
        Self {
            min_brightness: 85,
            max_brightness: 240,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LinkConfig {
    /// Suffixes that make a scheme-less, path-less match worth linking.
    pub bare_suffixes: Vec<String>,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            bare_suffixes: vec![".com".into(), ".tv".into(), ".org".into()],
        }
    }
}

/// Loads the configuration, falling back to defaults if it cannot be read.
pub fn load_config() -> UtilConfig {
    try_load_config().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "using default configuration");
        UtilConfig::default()
    })
}

pub fn try_load_config() -> Result<UtilConfig, ConfigError> {
    confy::load(CONFIG_NAME, None).map_err(ConfigError::Load)
}

pub fn save_config(cfg: &UtilConfig) -> Result<(), ConfigError> {
    confy::store(CONFIG_NAME, None, cfg).map_err(ConfigError::Store)
}

/// Loads the configuration from an explicit file.
///
/// A missing file is created with default values.
pub fn load_config_from(path: impl AsRef<Path>) -> Result<UtilConfig, ConfigError> {
    confy::load_path(path).map_err(ConfigError::Load)
}

pub fn save_config_to(path: impl AsRef<Path>, cfg: &UtilConfig) -> Result<(), ConfigError> {
    confy::store_path(path, cfg).map_err(ConfigError::Store)
}
