// SPDX-License-Identifier: MPL-2.0
//! Gallery controller and the render tree it owns.
//!
//! [`Gallery`] wires the batch loader, the layout engine and the viewport
//! trigger together. It never performs I/O: revealing a box yields a
//! [`ResourceRequest`] for the shell to fetch, and the shell reports the
//! outcome back through [`Gallery::resource_loaded`].

mod controller;
pub mod pagination;
pub mod preview;
pub mod tree;

pub use controller::{Gallery, GallerySettings, RenderPhase, ResourceRequest};
pub use pagination::{Navigation, PageLink, Pagination, PaginationLinks};
pub use preview::PreviewOverlay;
pub use tree::{BoxId, BoxTree, GalleryBox, Resolution};
