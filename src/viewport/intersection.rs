// SPDX-License-Identifier: MPL-2.0
//! Scroll viewport tracking and intersection detection.
//!
//! The gallery scrolls vertically, so only the vertical extent of the
//! viewport and of each box matters. The viewport is inflated by a root
//! margin on both edges so that boxes start loading shortly before they
//! scroll into view.

use super::trigger::IntersectionEntry;
use crate::domain::gallery::RootMargin;

/// Vertical extent of a box inside the scroll content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub top: f32,
    pub height: f32,
}

impl Span {
    #[must_use]
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height.max(0.0)
    }
}

/// Tracks the visible window of the scroll content.
#[derive(Debug, Clone)]
pub struct IntersectionDriver {
    /// Current scroll offset from the top of the content.
    pub offset: f32,

    /// Height of the visible window, `None` until the first report.
    pub height: Option<f32>,

    margin: RootMargin,
}

impl IntersectionDriver {
    #[must_use]
    pub fn new(margin: RootMargin) -> Self {
        Self {
            offset: 0.0,
            height: None,
            margin,
        }
    }

    /// Records a new viewport. Negative values are clamped to zero.
    pub fn update(&mut self, offset: f32, height: f32) {
        self.offset = offset.max(0.0);
        self.height = Some(height.max(0.0));
    }

    /// Whether a viewport has been reported yet.
    #[must_use]
    pub fn is_known(&self) -> bool {
        self.height.is_some()
    }

    /// Visible window grown by the root margin, as `(top, bottom)`.
    #[must_use]
    pub fn root_bounds(&self) -> Option<(f32, f32)> {
        let height = self.height?;
        let margin = self.margin.value();
        Some((self.offset - margin, self.offset + height + margin))
    }

    /// Whether `span` touches the margin-inflated viewport.
    #[must_use]
    pub fn intersects(&self, span: Span) -> bool {
        match self.root_bounds() {
            Some((top, bottom)) => span.top <= bottom && span.bottom() >= top,
            None => false,
        }
    }

    /// Builds one entry per target.
    ///
    /// Nothing is reported before the first viewport update, like an observer
    /// that has not been attached yet.
    pub fn entries<K, I>(&self, targets: I) -> Vec<IntersectionEntry<K>>
    where
        I: IntoIterator<Item = (K, Span)>,
    {
        if !self.is_known() {
            return Vec::new();
        }
        targets
            .into_iter()
            .map(|(target, span)| IntersectionEntry {
                target,
                is_intersecting: self.intersects(span),
            })
            .collect()
    }
}

impl Default for IntersectionDriver {
    fn default() -> Self {
        Self::new(RootMargin::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn unknown_viewport_reports_nothing() {
        let driver = IntersectionDriver::default();
        assert!(driver.entries([(1, Span::new(0.0, 100.0))]).is_empty());
        assert!(!driver.intersects(Span::new(0.0, 100.0)));
    }

    #[test]
    fn update_clamps_negative_values() {
        let mut driver = IntersectionDriver::new(RootMargin::new(0.0));
        driver.update(-25.0, -10.0);
        assert_abs_diff_eq!(driver.offset, 0.0);
        assert_eq!(driver.height, Some(0.0));
        assert_eq!(driver.root_bounds(), Some((0.0, 0.0)));
    }

    #[test]
    fn margin_extends_viewport_both_ways() {
        let mut driver = IntersectionDriver::new(RootMargin::new(200.0));
        driver.update(1000.0, 500.0);

        // Viewport is 1000..1500, inflated to 800..1700
        assert!(driver.intersects(Span::new(1650.0, 100.0)));
        assert!(driver.intersects(Span::new(700.0, 150.0)));
        assert!(!driver.intersects(Span::new(1750.0, 100.0)));
        assert!(!driver.intersects(Span::new(500.0, 200.0)));
    }

    #[test]
    fn zero_margin_touching_edge_counts() {
        let mut driver = IntersectionDriver::new(RootMargin::new(0.0));
        driver.update(0.0, 500.0);
        assert!(driver.intersects(Span::new(500.0, 10.0)));
        assert!(!driver.intersects(Span::new(500.5, 10.0)));
    }

    #[test]
    fn entries_keep_target_order() {
        let mut driver = IntersectionDriver::new(RootMargin::new(0.0));
        driver.update(0.0, 300.0);
        let entries = driver.entries([
            ("a", Span::new(0.0, 100.0)),
            ("b", Span::new(900.0, 100.0)),
        ]);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].target, "a");
        assert!(entries[0].is_intersecting);
        assert!(!entries[1].is_intersecting);
    }
}
