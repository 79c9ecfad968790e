// SPDX-License-Identifier: MPL-2.0
//! Ordered list of gallery identifiers.
//!
//! The manifest comes either from a text file (one identifier per line) or
//! from scanning a directory for image files. Its order is the display order.

use crate::domain::gallery::ItemId;
use crate::error::Result;
use std::fs;
use std::path::Path;

/// File extensions served as gallery images (lowercase, without dot).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// Ordered gallery identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    ids: Vec<ItemId>,
}

impl Manifest {
    #[must_use]
    pub fn new(ids: Vec<ItemId>) -> Self {
        Self { ids }
    }

    /// Parses one identifier per line.
    ///
    /// Surrounding whitespace is trimmed; blank lines and lines starting with
    /// `#` are skipped.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let ids = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(ItemId::from)
            .collect();
        Self { ids }
    }

    /// Reads and parses a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Lists the supported images directly inside `directory`, sorted by name.
    ///
    /// Subdirectories are not descended into.
    pub fn scan_directory(directory: &Path) -> Result<Self> {
        let mut names = Vec::new();

        for entry in fs::read_dir(directory)? {
            let entry = entry?;
            let path = entry.path();

            if !path.is_file() || !is_supported_image(&path) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }

        names.sort();
        Ok(Self {
            ids: names.into_iter().map(ItemId::from).collect(),
        })
    }

    #[must_use]
    pub fn ids(&self) -> &[ItemId] {
        &self.ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn into_ids(self) -> Vec<ItemId> {
        self.ids
    }
}

/// Checks if a file has a supported image extension (case-insensitive).
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
