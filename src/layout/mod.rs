// SPDX-License-Identifier: MPL-2.0
//! Column layout engine.
//!
//! Places variable-height boxes into a masonry grid: the column count follows
//! the container width through fixed breakpoints, every box gets the same
//! column width, and each box after the first row drops into whichever column
//! is currently shortest.
//!
//! A pass starts from scratch every time, so it can be re-run after any width
//! or height change without carrying state between calls.

pub mod columns;
pub mod masonry;

pub use columns::{column_count, column_width};
pub use masonry::{layout, ColumnHeights, LayoutSummary, Placeable};
