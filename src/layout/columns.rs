// SPDX-License-Identifier: MPL-2.0
//! Width breakpoints and column sizing.

/// Container width (px) from which five columns are used.
pub const FIVE_COLUMNS_MIN_WIDTH: f32 = 1200.0;

/// Container width (px) from which four columns are used.
pub const FOUR_COLUMNS_MIN_WIDTH: f32 = 992.0;

/// Container width (px) from which three columns are used.
pub const THREE_COLUMNS_MIN_WIDTH: f32 = 768.0;

/// Column count for anything narrower than [`THREE_COLUMNS_MIN_WIDTH`].
pub const MIN_COLUMNS: usize = 2;

/// Returns the number of columns for a container of `container_width` pixels.
///
/// Non-decreasing in the width. Non-finite or negative widths get the
/// minimum column count.
#[must_use]
pub fn column_count(container_width: f32) -> usize {
    if container_width >= FIVE_COLUMNS_MIN_WIDTH {
        5
    } else if container_width >= FOUR_COLUMNS_MIN_WIDTH {
        4
    } else if container_width >= THREE_COLUMNS_MIN_WIDTH {
        3
    } else {
        MIN_COLUMNS
    }
}

/// Width of one column once `columns - 1` gutters of `spacing` are removed.
///
/// Never negative, even for containers narrower than the gutters.
#[must_use]
pub fn column_width(container_width: f32, columns: usize, spacing: f32) -> f32 {
    if columns == 0 || !container_width.is_finite() {
        return 0.0;
    }
    let gutters = (columns - 1) as f32 * spacing;
    ((container_width - gutters) / columns as f32).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn breakpoints_match_table() {
        assert_eq!(column_count(1920.0), 5);
        assert_eq!(column_count(1200.0), 5);
        assert_eq!(column_count(1199.9), 4);
        assert_eq!(column_count(992.0), 4);
        assert_eq!(column_count(991.0), 3);
        assert_eq!(column_count(768.0), 3);
        assert_eq!(column_count(767.0), 2);
        assert_eq!(column_count(0.0), 2);
    }

    #[test]
    fn degenerate_widths_use_minimum() {
        assert_eq!(column_count(-50.0), MIN_COLUMNS);
        assert_eq!(column_count(f32::NAN), MIN_COLUMNS);
    }

    #[test]
    fn column_count_is_monotonic() {
        let mut previous = column_count(0.0);
        for width in (0..3000).map(|w| w as f32) {
            let current = column_count(width);
            assert!(current >= previous, "count dropped at width {width}");
            previous = current;
        }
    }

    #[test]
    fn column_width_removes_gutters() {
        // 1300 wide, 5 columns, 10px gutters: (1300 - 40) / 5
        assert_abs_diff_eq!(column_width(1300.0, 5, 10.0), 252.0);
        assert_abs_diff_eq!(column_width(500.0, 2, 0.0), 250.0);
    }

    #[test]
    fn column_width_never_negative() {
        assert_abs_diff_eq!(column_width(5.0, 2, 20.0), 0.0);
        assert_abs_diff_eq!(column_width(100.0, 0, 10.0), 0.0);
        assert_abs_diff_eq!(column_width(f32::INFINITY, 5, 10.0), 0.0);
    }
}
