// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::gallery::BoxId;
use crate::resource::FetchedImage;
use iced::Size;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The window opened or changed size.
    WindowResized(Size),
    /// The gallery scrollable moved.
    Scrolled { offset: f32, height: f32 },
    /// A box's grid image finished fetching.
    ///
    /// `generation` identifies the page the request was made for; results
    /// from an earlier page, or whose `path` no longer matches the box, are
    /// dropped.
    ResourceLoaded {
        generation: u64,
        target: BoxId,
        path: String,
        result: Result<FetchedImage, Error>,
    },
    OpenPreview(BoxId),
    ClosePreview,
    /// The full-resolution image for `source` finished fetching.
    PreviewLoaded {
        source: String,
        result: Result<FetchedImage, Error>,
    },
    /// Save the previewed original to the download directory.
    DownloadOriginal,
    Downloaded(Result<PathBuf, Error>),
    /// A page link was clicked, by its index in the link bar.
    PageClicked(usize),
}

/// Runtime flags passed in from the CLI to override the persisted config.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Flags {
    /// Resource server base URL.
    pub server: Option<String>,
    pub group_size: Option<usize>,
    /// 1-based page to open.
    pub page: Option<usize>,
    /// File listing one image identifier per line.
    pub manifest: Option<String>,
    /// Load every image right away instead of on visibility.
    pub eager: bool,
    /// Local directory to serve images from instead of a server.
    pub directory: Option<String>,
}
