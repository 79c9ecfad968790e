// SPDX-License-Identifier: MPL-2.0
//! Fetching image bytes and reading their intrinsic size.

use super::endpoints::ResourceKind;
use crate::domain::gallery::Dimensions;
use crate::error::{Error, NetworkError, Result};
use image_rs::ImageReader;
use reqwest::Url;
use std::io::Cursor;
use std::path::{Component, Path, PathBuf};

/// User agent sent with HTTP requests.
const USER_AGENT: &str = concat!("masonry_gallery/", env!("CARGO_PKG_VERSION"));

/// Where resource paths are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceSource {
    /// An HTTP server exposing `/image/{id}` and `/original/{id}`.
    Http(Url),
    /// A local directory holding the files; both renditions map to `{dir}/{id}`.
    Directory(PathBuf),
}

impl ResourceSource {
    /// Parses an HTTP base URL such as `http://127.0.0.1:5000`.
    pub fn http(base: &str) -> Result<Self> {
        let mut url =
            Url::parse(base).map_err(|_| NetworkError::InvalidUrl(base.to_string()))?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(ResourceSource::Http(url))
    }

    #[must_use]
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        ResourceSource::Directory(path.into())
    }

    /// Resolves an endpoint path to a URL (HTTP sources only).
    pub fn url(&self, path: &str) -> Result<Url> {
        match self {
            ResourceSource::Http(base) => base
                .join(path.trim_start_matches('/'))
                .map_err(|_| NetworkError::InvalidUrl(path.to_string()).into()),
            ResourceSource::Directory(_) => Err(NetworkError::InvalidUrl(path.to_string()).into()),
        }
    }

    /// Resolves an endpoint path to a file (directory sources only).
    ///
    /// Only plain file names are accepted, so a path can never escape the
    /// gallery directory.
    pub fn file(&self, path: &str) -> Result<PathBuf> {
        let ResourceSource::Directory(root) = self else {
            return Err(Error::Io(format!("not a directory source: {path}")));
        };
        let (_, name) = ResourceKind::split(path)
            .ok_or_else(|| Error::Io(format!("unknown resource path: {path}")))?;

        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(file)), None) => Ok(root.join(file)),
            _ => Err(Error::Io(format!("invalid resource name: {name}"))),
        }
    }
}

impl std::fmt::Display for ResourceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceSource::Http(url) => write!(f, "{url}"),
            ResourceSource::Directory(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Encoded image bytes together with their decoded size.
#[derive(Debug, Clone)]
pub struct FetchedImage {
    pub bytes: Vec<u8>,
    pub dimensions: Dimensions,
}

/// Fetches resources from a [`ResourceSource`].
///
/// Cheap to clone; clones share the HTTP connection pool.
#[derive(Debug, Clone)]
pub struct ResourceClient {
    source: ResourceSource,
    http: reqwest::Client,
}

impl ResourceClient {
    pub fn new(source: ResourceSource) -> Result<Self> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { source, http })
    }

    #[must_use]
    pub fn source(&self) -> &ResourceSource {
        &self.source
    }

    /// Fetches the resource at `path` and reads its dimensions.
    pub async fn fetch(&self, path: &str) -> Result<FetchedImage> {
        let bytes = self.fetch_bytes(path).await?;
        let dimensions = decode_dimensions(&bytes)?;
        Ok(FetchedImage { bytes, dimensions })
    }

    /// Raw bytes at `path`, undecoded.
    pub async fn fetch_bytes(&self, path: &str) -> Result<Vec<u8>> {
        match &self.source {
            ResourceSource::Http(_) => self.fetch_http(path).await,
            ResourceSource::Directory(_) => Ok(tokio::fs::read(self.source.file(path)?).await?),
        }
    }

    /// Saves the resource at `path` into `directory` under its file name.
    ///
    /// Returns the written file.
    pub async fn download(&self, path: &str, directory: &Path) -> Result<PathBuf> {
        let (_, name) = ResourceKind::split(path)
            .ok_or_else(|| Error::Io(format!("unknown resource path: {path}")))?;
        let file_name = Path::new(name)
            .file_name()
            .ok_or_else(|| Error::Io(format!("invalid resource name: {name}")))?;

        let bytes = self.fetch_bytes(path).await?;
        tokio::fs::create_dir_all(directory).await?;
        let target = directory.join(file_name);
        tokio::fs::write(&target, bytes).await?;
        Ok(target)
    }

    async fn fetch_http(&self, path: &str) -> Result<Vec<u8>> {
        let url = self.source.url(path)?;
        let response = self.http.get(url).send().await?;

        if !response.status().is_success() {
            return Err(NetworkError::Status(response.status().as_u16()).into());
        }

        Ok(response.bytes().await?.to_vec())
    }
}

/// Reads the pixel size from an encoded image header.
pub fn decode_dimensions(bytes: &[u8]) -> Result<Dimensions> {
    let (width, height) = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .into_dimensions()?;
    Ok(Dimensions::new(width, height))
}
