// SPDX-License-Identifier: MPL-2.0
//! Gallery resources: endpoint paths, the identifier manifest, and fetching.
//!
//! Every image is addressed purely by identifier: a reduced-size rendition
//! under `/image/{id}` for the grid and the full-resolution file under
//! `/original/{id}` for the fullscreen preview. Paths are resolved either
//! against an HTTP server or against a local directory.

pub mod endpoints;
pub mod fetch;
pub mod manifest;

pub use endpoints::{original_path, placeholder_path, ResourceKind};
pub use fetch::{FetchedImage, ResourceClient, ResourceSource};
pub use manifest::Manifest;
