// SPDX-License-Identifier: MPL-2.0
//! Greedy shortest-column placement.

use super::columns::{column_count, column_width};
use crate::domain::gallery::Spacing;

/// A box the layout engine can size and position.
///
/// The engine assigns the width first and reads the height afterwards, so
/// implementors may derive their height from the width they were given.
pub trait Placeable {
    /// Assigns the column width.
    fn set_width(&mut self, width: f32);

    /// Rendered height at the current width.
    fn height(&self) -> f32;

    /// Assigns the column and the offsets inside the container.
    fn place(&mut self, column: usize, top: f32, left: f32);
}

/// Running bottom edge of every column during one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnHeights(Vec<f32>);

impl ColumnHeights {
    #[must_use]
    pub fn new(columns: usize) -> Self {
        Self(vec![0.0; columns])
    }

    /// Index and height of the shortest column; ties go to the lowest index.
    #[must_use]
    pub fn shortest(&self) -> Option<(usize, f32)> {
        let mut best: Option<(usize, f32)> = None;
        for (index, &height) in self.0.iter().enumerate() {
            match best {
                Some((_, min)) if height >= min => {}
                _ => best = Some((index, height)),
            }
        }
        best
    }

    /// Height of the tallest column, zero when there are no columns.
    #[must_use]
    pub fn tallest(&self) -> f32 {
        self.0.iter().copied().fold(0.0, f32::max)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    fn add(&mut self, column: usize, amount: f32) {
        if let Some(height) = self.0.get_mut(column) {
            *height += amount;
        }
    }
}

/// Outcome of a layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSummary {
    pub columns: usize,
    pub column_width: f32,
    pub column_heights: ColumnHeights,
}

impl LayoutSummary {
    /// Height the container needs to show every placed box.
    #[must_use]
    pub fn content_height(&self) -> f32 {
        self.column_heights.tallest()
    }
}

/// Lays `boxes` out in a masonry grid inside `container_width` pixels.
///
/// The first row seeds one box per column at the top. Every later box goes
/// under the currently shortest column, `spacing` below its bottom edge.
/// Boxes are only touched through [`Placeable`]; an empty slice is a no-op.
pub fn layout<P: Placeable>(
    container_width: f32,
    spacing: Spacing,
    boxes: &mut [P],
) -> LayoutSummary {
    let gap = spacing.value();
    let columns = column_count(container_width);
    let width = column_width(container_width, columns, gap);
    let mut heights = ColumnHeights::new(columns);

    for (index, item) in boxes.iter_mut().enumerate() {
        item.set_width(width);
        let height = item.height();

        if index < columns {
            item.place(index, 0.0, index as f32 * (width + gap));
            heights.add(index, height);
            continue;
        }

        let Some((column, bottom)) = heights.shortest() else {
            break;
        };
        item.place(column, bottom + gap, column as f32 * (width + gap));
        heights.add(column, height + gap);
    }

    LayoutSummary {
        columns,
        column_width: width,
        column_heights: heights,
    }
}
