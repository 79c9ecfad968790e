// SPDX-License-Identifier: MPL-2.0
//! Application root state and the bridge between `iced` and the gallery.
//!
//! The `App` struct owns the [`Gallery`] controller and performs the I/O it
//! asks for: every [`ResourceRequest`] becomes a fetch task whose outcome is
//! fed back through `Gallery::resource_loaded`. Decoded image handles live
//! here, never in the controller.

mod message;
pub mod startup;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use startup::Startup;
pub use view::{PAGINATION_BAR_HEIGHT, SCROLLABLE_ID};

use crate::config::Config;
use crate::domain::gallery::ItemId;
use crate::gallery::{BoxId, Gallery, GalleryBox, GallerySettings, Pagination, ResourceRequest};
use crate::resource::{FetchedImage, ResourceClient};
use iced::widget::image::Handle;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

pub const APP_TITLE: &str = "Masonry Gallery";
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Root Iced application state.
pub struct App {
    client: ResourceClient,
    ids: Vec<ItemId>,
    settings: GallerySettings,
    pagination: Pagination,
    gallery: Gallery,
    /// Bumped on every page rebuild so in-flight fetches can be told apart.
    generation: u64,
    /// Decoded grid images by box.
    thumbnails: HashMap<BoxId, Handle>,
    /// Decoded original shown by the preview overlay.
    preview_image: Option<Handle>,
    /// Outcome of the last download, shown in the overlay.
    status: Option<String>,
    window_width: Option<f32>,
    viewport_offset: f32,
    viewport_height: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("page", &self.pagination.page())
            .field("boxes", &self.gallery.boxes().len())
            .field("phase", &self.gallery.phase())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(startup: Startup) -> iced::Result {
    // iced 0.14 requires a `Fn` boot function, so each boot clones the startup data.
    let boot = move || App::new(startup.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the gallery for the startup page. Nothing is fetched until the
    /// window reports its size.
    fn new(startup: Startup) -> (Self, Task<Message>) {
        let Startup {
            config,
            client,
            manifest,
            page,
        } = startup;
        (Self::build(&config, client, manifest.into_ids(), page), Task::none())
    }

    fn build(config: &Config, client: ResourceClient, ids: Vec<ItemId>, page: usize) -> Self {
        let settings = config.gallery_settings();
        let pagination = Pagination::new(ids.len(), config.per_page(), page);
        let gallery = page_gallery(&ids, settings, &pagination);
        tracing::info!(
            page = pagination.page(),
            pages = pagination.total_pages(),
            images = gallery.loader().total_items(),
            "gallery page built"
        );

        Self {
            client,
            ids,
            settings,
            pagination,
            gallery,
            generation: 0,
            thumbnails: HashMap::new(),
            preview_image: None,
            status: None,
            window_width: None,
            viewport_offset: 0.0,
            viewport_height: 0.0,
        }
    }

    fn title(&self) -> String {
        if self.pagination.total_pages() > 1 {
            format!(
                "{APP_TITLE} - page {} of {}",
                self.pagination.page(),
                self.pagination.total_pages()
            )
        } else {
            APP_TITLE.to_string()
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::WindowResized(size) => self.handle_window_resized(size),
            Message::Scrolled { offset, height } => {
                self.viewport_offset = offset;
                self.viewport_height = height;
                let requests = self.gallery.scroll(offset, height);
                self.fetch_all(requests)
            }
            Message::ResourceLoaded {
                generation,
                target,
                path,
                result,
            } => self.handle_resource_loaded(generation, target, &path, result),
            Message::OpenPreview(target) => {
                let Some(source) = self.gallery.open_preview(target) else {
                    return Task::none();
                };
                self.preview_image = None;
                self.status = None;
                let client = self.client.clone();
                let path = source.clone();
                Task::perform(async move { client.fetch(&path).await }, move |result| {
                    Message::PreviewLoaded { source, result }
                })
            }
            Message::ClosePreview => {
                self.gallery.close_preview();
                self.preview_image = None;
                self.status = None;
                Task::none()
            }
            Message::PreviewLoaded { source, result } => {
                if !self.gallery.preview().shows(&source) {
                    tracing::debug!(%source, "dropping stale preview");
                    return Task::none();
                }
                match result {
                    Ok(image) => self.preview_image = Some(Handle::from_bytes(image.bytes)),
                    Err(err) => {
                        tracing::warn!(%source, %err, "preview fetch failed");
                        self.status = Some(format!("Could not load original: {err}"));
                    }
                }
                Task::none()
            }
            Message::DownloadOriginal => {
                let Some(href) = self.gallery.preview().download_href() else {
                    return Task::none();
                };
                let href = href.to_string();
                let directory = download_directory();
                let client = self.client.clone();
                Task::perform(
                    async move { client.download(&href, &directory).await },
                    Message::Downloaded,
                )
            }
            Message::Downloaded(result) => {
                self.status = Some(match result {
                    Ok(path) => {
                        tracing::info!(path = %path.display(), "original saved");
                        format!("Saved to {}", path.display())
                    }
                    Err(err) => {
                        tracing::warn!(%err, "download failed");
                        format!("Download failed: {err}")
                    }
                });
                Task::none()
            }
            Message::PageClicked(index) => self.handle_page_clicked(index),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            gallery: &self.gallery,
            pagination: &self.pagination,
            thumbnails: &self.thumbnails,
            preview_image: self.preview_image.as_ref(),
            status: self.status.as_deref(),
        })
    }

    /// The first size event is the first render; later ones only re-run layout.
    ///
    /// Visibility is checked once, against the layout for the new width.
    fn handle_window_resized(&mut self, size: Size) -> Task<Message> {
        self.window_width = Some(size.width);
        self.viewport_height = self.visible_height(size.height);
        self.gallery.set_viewport(self.viewport_offset, self.viewport_height);

        let requests = if self.gallery.is_ready() {
            self.gallery.resize(size.width);
            self.gallery.refresh_visibility()
        } else {
            self.gallery.ready(size.width)
        };
        self.fetch_all(requests)
    }

    fn handle_resource_loaded(
        &mut self,
        generation: u64,
        target: BoxId,
        path: &str,
        result: crate::error::Result<FetchedImage>,
    ) -> Task<Message> {
        let current = self.gallery.tree().get(target).map(GalleryBox::src);
        if generation != self.generation || current != Some(path) {
            tracing::debug!(?target, path, "dropping stale image result");
            return Task::none();
        }

        let (dimensions, bytes) = match result {
            Ok(image) => (Some(image.dimensions), Some(image.bytes)),
            Err(err) => {
                tracing::warn!(?target, %err, "image fetch failed");
                (None, None)
            }
        };
        if !self.gallery.resource_loaded(target, dimensions) {
            return Task::none();
        }
        if let Some(bytes) = bytes {
            self.thumbnails.insert(target, Handle::from_bytes(bytes));
        }

        let requests = self.gallery.refresh_visibility();
        self.fetch_all(requests)
    }

    /// Rebuilds the gallery for the followed page, like a fresh page load.
    fn handle_page_clicked(&mut self, index: usize) -> Task<Message> {
        let Some(navigation) = self.gallery.follow_link(index) else {
            return Task::none();
        };
        tracing::info!(page = navigation.page, href = %navigation.href, "navigating");

        self.pagination = Pagination::new(
            self.ids.len(),
            self.pagination.per_page(),
            navigation.page,
        );
        self.gallery = page_gallery(&self.ids, self.settings, &self.pagination);
        self.generation += 1;
        self.thumbnails.clear();
        self.preview_image = None;
        self.status = None;
        self.viewport_offset = 0.0;

        self.gallery.set_viewport(0.0, self.viewport_height);
        let requests = match self.window_width {
            Some(width) => self.gallery.ready(width),
            None => Vec::new(),
        };

        let scroll_task =
            operation::snap_to(Id::new(SCROLLABLE_ID), RelativeOffset { x: 0.0, y: 0.0 });
        Task::batch([scroll_task, self.fetch_all(requests)])
    }

    fn fetch_all(&self, requests: Vec<ResourceRequest>) -> Task<Message> {
        if requests.is_empty() {
            return Task::none();
        }
        tracing::debug!(count = requests.len(), "fetching images");

        let generation = self.generation;
        Task::batch(requests.into_iter().map(|ResourceRequest { target, path }| {
            let client = self.client.clone();
            Task::perform(
                async move {
                    let result = client.fetch(&path).await;
                    (path, result)
                },
                move |(path, result)| Message::ResourceLoaded {
                    generation,
                    target,
                    path,
                    result,
                },
            )
        }))
    }

    fn visible_height(&self, window_height: f32) -> f32 {
        let bar = if self.pagination.total_pages() > 1 {
            PAGINATION_BAR_HEIGHT
        } else {
            0.0
        };
        (window_height - bar).max(0.0)
    }
}

fn page_gallery(ids: &[ItemId], settings: GallerySettings, pagination: &Pagination) -> Gallery {
    Gallery::new(
        pagination.slice(ids).iter().cloned(),
        settings,
        pagination.links(),
    )
}

/// Where previewed originals are saved.
fn download_directory() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}
