// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! This module provides pure domain types for the batched masonry gallery:
//! - [`Item`] and [`Group`]: the immutable partition of the manifest
//! - [`LoadState`]: per-box loading lifecycle with validated transitions
//! - [`GroupSize`], [`Spacing`], [`RootMargin`], [`PlaceholderAspect`]: bounded values
//! - [`Dimensions`]: intrinsic image size

pub mod item;
pub mod load_state;
pub mod newtypes;

pub use item::{partition, Group, Item, ItemId};
pub use load_state::{LoadState, TransitionError};
pub use newtypes::{Dimensions, GroupSize, PlaceholderAspect, RootMargin, Spacing};
