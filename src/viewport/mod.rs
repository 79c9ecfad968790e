// SPDX-License-Identifier: MPL-2.0
//! Viewport-driven lazy loading.
//!
//! [`ViewportTrigger`] owns the exactly-once visibility contract: observed
//! targets fire once and are forgotten. [`IntersectionDriver`] is the native
//! stand-in for a browser intersection observer; it turns the scroll viewport
//! and box spans into [`IntersectionEntry`] batches for the trigger.

pub mod intersection;
pub mod trigger;

pub use intersection::{IntersectionDriver, Span};
pub use trigger::{IntersectionEntry, ObserverSupport, ViewportTrigger};
