// SPDX-License-Identifier: MPL-2.0
//! Fullscreen preview overlay state.

use super::tree::BoxId;

/// Fullscreen overlay showing one image at full resolution.
///
/// Closing clears the source so the shell can drop the decoded original.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewOverlay {
    target: Option<BoxId>,
    source: Option<String>,
    download_href: Option<String>,
}

impl PreviewOverlay {
    /// Shows `source` for `target`, replacing anything already open.
    pub fn open(&mut self, target: BoxId, source: &str) {
        self.target = Some(target);
        self.source = Some(source.to_string());
        self.download_href = Some(source.to_string());
    }

    /// Hides the overlay and forgets its source.
    pub fn close(&mut self) {
        self.target = None;
        self.source = None;
        self.download_href = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.source.is_some()
    }

    #[must_use]
    pub fn target(&self) -> Option<BoxId> {
        self.target
    }

    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    #[must_use]
    pub fn download_href(&self) -> Option<&str> {
        self.download_href.as_deref()
    }

    /// Whether `source` is what the overlay currently shows.
    #[must_use]
    pub fn shows(&self, source: &str) -> bool {
        self.source.as_deref() == Some(source)
    }
}
