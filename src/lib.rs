// SPDX-License-Identifier: MPL-2.0
//! `masonry_gallery` is a batched, lazily loaded masonry image gallery built
//! with the Iced GUI framework.
//!
//! The core ([`layout`], [`viewport`], [`batch`] and [`gallery`]) is free of
//! I/O and GUI types: it decides which boxes exist, where they go and which
//! images to fetch. The [`app`] shell performs the fetches through
//! [`resource`] and draws the result.

#![doc(html_root_url = "https://docs.rs/masonry_gallery/0.1.0")]

pub mod app;
pub mod batch;
pub mod config;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod layout;
pub mod resource;
pub mod viewport;

#[cfg(test)]
pub(crate) mod test_utils;
