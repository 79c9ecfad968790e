// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Batching**: Group size and page size
//! - **Layout**: Gutter and placeholder shape
//! - **Loading**: Viewport margin and resource server

use crate::domain::gallery::newtypes::{aspect_bounds, group_bounds, margin_bounds, spacing_bounds};

// ==========================================================================
// Batching Defaults
// ==========================================================================

/// Default number of boxes realized per batch.
pub const DEFAULT_GROUP_SIZE: usize = group_bounds::DEFAULT;

/// Default number of images per page.
pub const DEFAULT_PER_PAGE: usize = crate::gallery::pagination::DEFAULT_PER_PAGE;

/// Maximum images per page.
pub const MAX_PER_PAGE: usize = 10_000;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Default gutter between columns and rows (in pixels).
pub const DEFAULT_SPACING_PX: f32 = spacing_bounds::DEFAULT;

/// Default height-to-width ratio of a box before its image is decoded.
pub const DEFAULT_PLACEHOLDER_ASPECT: f32 = aspect_bounds::DEFAULT;

// ==========================================================================
// Loading Defaults
// ==========================================================================

/// Default distance around the viewport at which boxes start loading (in pixels).
pub const DEFAULT_ROOT_MARGIN_PX: f32 = margin_bounds::DEFAULT;

/// Default resource server.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_inside_bounds() {
        assert!((group_bounds::MIN..=group_bounds::MAX).contains(&DEFAULT_GROUP_SIZE));
        assert!((spacing_bounds::MIN..=spacing_bounds::MAX).contains(&DEFAULT_SPACING_PX));
        assert!((margin_bounds::MIN..=margin_bounds::MAX).contains(&DEFAULT_ROOT_MARGIN_PX));
        assert!(DEFAULT_PER_PAGE <= MAX_PER_PAGE);
    }
}
