// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file in the user's config directory.
//!
//! # Examples
//!
//! ```no_run
//! use masonry_gallery::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.group_size = Some(50);
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.group_size, Some(50));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::gallery::{GroupSize, PlaceholderAspect, RootMargin, Spacing};
use crate::error::Result;
use crate::gallery::GallerySettings;
use crate::viewport::ObserverSupport;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "MasonryGallery";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub group_size: Option<usize>,
    #[serde(default)]
    pub per_page: Option<usize>,
    #[serde(default)]
    pub spacing: Option<f32>,
    #[serde(default)]
    pub root_margin: Option<f32>,
    #[serde(default)]
    pub placeholder_aspect: Option<f32>,
    #[serde(default)]
    pub server_url: Option<String>,
    /// Load every image as soon as it is realized instead of on visibility.
    #[serde(default)]
    pub eager_loading: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            group_size: Some(DEFAULT_GROUP_SIZE),
            per_page: Some(DEFAULT_PER_PAGE),
            spacing: Some(DEFAULT_SPACING_PX),
            root_margin: Some(DEFAULT_ROOT_MARGIN_PX),
            placeholder_aspect: Some(DEFAULT_PLACEHOLDER_ASPECT),
            server_url: Some(DEFAULT_SERVER_URL.to_string()),
            eager_loading: Some(false),
        }
    }
}

impl Config {
    /// Gallery tuning values, with missing or out-of-range entries fixed up.
    #[must_use]
    pub fn gallery_settings(&self) -> GallerySettings {
        GallerySettings {
            group_size: GroupSize::new(self.group_size.unwrap_or(DEFAULT_GROUP_SIZE)),
            spacing: Spacing::new(self.spacing.unwrap_or(DEFAULT_SPACING_PX)),
            root_margin: RootMargin::new(self.root_margin.unwrap_or(DEFAULT_ROOT_MARGIN_PX)),
            placeholder_aspect: PlaceholderAspect::new(
                self.placeholder_aspect.unwrap_or(DEFAULT_PLACEHOLDER_ASPECT),
            ),
            observer: if self.eager_loading.unwrap_or(false) {
                ObserverSupport::Unavailable
            } else {
                ObserverSupport::Available
            },
        }
    }

    /// Images per page, clamped to `1..=MAX_PER_PAGE`.
    #[must_use]
    pub fn per_page(&self) -> usize {
        self.per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, MAX_PER_PAGE)
    }

    #[must_use]
    pub fn server_url(&self) -> &str {
        self.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "invalid settings, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
