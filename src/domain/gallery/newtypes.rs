// SPDX-License-Identifier: MPL-2.0
//! Gallery newtypes.
//!
//! This module provides type-safe wrappers for gallery tuning values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Bounds
// =============================================================================

/// Batch size bounds (1 to 1000 items per group).
pub mod group_bounds {
    /// Minimum number of items per group.
    pub const MIN: usize = 1;
    /// Maximum number of items per group.
    pub const MAX: usize = 1000;
    /// Default number of items per group.
    pub const DEFAULT: usize = 100;
}

/// Gutter bounds in pixels.
pub mod spacing_bounds {
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 64.0;
    pub const DEFAULT: f32 = 10.0;
}

/// Distance around the viewport, in pixels, at which boxes start loading.
pub mod margin_bounds {
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 4000.0;
    pub const DEFAULT: f32 = 200.0;
}

/// Height-to-width ratio of a box whose image is not decoded yet.
pub mod aspect_bounds {
    pub const MIN: f32 = 0.25;
    pub const MAX: f32 = 4.0;
    pub const DEFAULT: f32 = 1.0;
}

// =============================================================================
// GroupSize
// =============================================================================

/// Number of items realized per batch, guaranteed to be at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSize(usize);

impl GroupSize {
    /// Creates a group size, clamping the value to the valid range.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self(size.clamp(group_bounds::MIN, group_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for GroupSize {
    fn default() -> Self {
        Self(group_bounds::DEFAULT)
    }
}

// =============================================================================
// Spacing
// =============================================================================

/// Gutter between columns and between stacked boxes, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing(f32);

impl Spacing {
    #[must_use]
    pub fn new(px: f32) -> Self {
        if px.is_nan() {
            return Self::default();
        }
        Self(px.clamp(spacing_bounds::MIN, spacing_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Self(spacing_bounds::DEFAULT)
    }
}

// =============================================================================
// RootMargin
// =============================================================================

/// Vertical margin added around the viewport before intersection tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootMargin(f32);

impl RootMargin {
    #[must_use]
    pub fn new(px: f32) -> Self {
        if px.is_nan() {
            return Self::default();
        }
        Self(px.clamp(margin_bounds::MIN, margin_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for RootMargin {
    fn default() -> Self {
        Self(margin_bounds::DEFAULT)
    }
}

// =============================================================================
// PlaceholderAspect
// =============================================================================

/// Height-to-width ratio used for boxes without intrinsic dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceholderAspect(f32);

impl PlaceholderAspect {
    #[must_use]
    pub fn new(ratio: f32) -> Self {
        if ratio.is_nan() {
            return Self::default();
        }
        Self(ratio.clamp(aspect_bounds::MIN, aspect_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for PlaceholderAspect {
    fn default() -> Self {
        Self(aspect_bounds::DEFAULT)
    }
}

// =============================================================================
// Dimensions
// =============================================================================

/// Intrinsic pixel size of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Height-to-width ratio, `None` for a zero-width image.
    #[must_use]
    pub fn aspect(self) -> Option<f32> {
        if self.width == 0 {
            None
        } else {
            Some(self.height as f32 / self.width as f32)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_size_clamps() {
        assert_eq!(GroupSize::new(0).value(), group_bounds::MIN);
        assert_eq!(GroupSize::new(5000).value(), group_bounds::MAX);
        assert_eq!(GroupSize::new(60).value(), 60);
        assert_eq!(GroupSize::default().value(), 100);
    }

    #[test]
    fn spacing_clamps_and_rejects_nan() {
        assert!((Spacing::new(-3.0).value() - spacing_bounds::MIN).abs() < f32::EPSILON);
        assert!((Spacing::new(500.0).value() - spacing_bounds::MAX).abs() < f32::EPSILON);
        assert!((Spacing::new(f32::NAN).value() - spacing_bounds::DEFAULT).abs() < f32::EPSILON);
    }

    #[test]
    fn dimensions_aspect() {
        assert_eq!(Dimensions::new(200, 100).aspect(), Some(0.5));
        assert_eq!(Dimensions::new(0, 100).aspect(), None);
    }

    #[test]
    fn root_margin_and_aspect_clamp() {
        assert!((RootMargin::new(-1.0).value() - margin_bounds::MIN).abs() < f32::EPSILON);
        assert!((PlaceholderAspect::new(10.0).value() - aspect_bounds::MAX).abs() < f32::EPSILON);
        assert!((PlaceholderAspect::default().value() - 1.0).abs() < f32::EPSILON);
    }
}
