//! Vertical content-block split.
//!
//! After the primary crop a logo often still carries a second block of
//! content below the icon (typically a wordmark). The split heuristic walks
//! the horizontal projection and cuts at the first run of empty rows longer
//! than the gap threshold.

use tracing::debug;

/// Returns the exclusive row index to crop at, given per-row content flags.
///
/// Scans from row 0 tracking whether a content block has begun and how many
/// consecutive empty rows have followed it. Once the run of empty rows
/// exceeds `gap_threshold`, the split point is `y - current_gap` and the
/// scan stops. If no qualifying gap exists the full height is returned and
/// no split occurs.
///
/// Note the arithmetic is inherited as-is: at the row where the counter
/// first exceeds the threshold, `y - current_gap` lands one row above the
/// gap's first empty row, so the last content row of the first block is
/// dropped as well. The tight re-crop afterwards makes this invisible in
/// the final output.
pub fn split_row(projection: &[bool], gap_threshold: u32) -> usize {
    let mut final_split = projection.len();
    let mut current_gap = 0u32;
    let mut in_first_block = false;

    for (y, &has_content) in projection.iter().enumerate() {
        if has_content {
            in_first_block = true;
            current_gap = 0;
        } else if in_first_block {
            current_gap += 1;
            if current_gap > gap_threshold {
                final_split = y - current_gap as usize;
                debug!("Split detected at row {} (gap of {} rows)", final_split, current_gap);
                break;
            }
        }
    }

    final_split
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projection(spans: &[(usize, bool)]) -> Vec<bool> {
        spans
            .iter()
            .flat_map(|&(count, content)| std::iter::repeat_n(content, count))
            .collect()
    }

    #[test]
    fn icon_then_wide_gap_then_text_splits_above_the_gap() {
        // Content rows 0-19, empty rows 20-34, content rows 35-50.
        // The counter reaches 11 at y=30, so the split is 30 - 11 = 19.
        let rows = projection(&[(20, true), (15, false), (16, true)]);
        assert_eq!(split_row(&rows, 10), 19);
    }

    #[test]
    fn no_gap_keeps_full_height() {
        let rows = projection(&[(40, true)]);
        assert_eq!(split_row(&rows, 10), 40);
    }

    #[test]
    fn gap_equal_to_threshold_does_not_split() {
        // Exactly 10 empty rows never exceeds the threshold.
        let rows = projection(&[(12, true), (10, false), (8, true)]);
        assert_eq!(split_row(&rows, 10), 30);
    }

    #[test]
    fn gap_one_past_threshold_splits() {
        let rows = projection(&[(12, true), (11, false), (8, true)]);
        // Counter hits 11 at y=22; split = 22 - 11 = 11.
        assert_eq!(split_row(&rows, 10), 11);
    }

    #[test]
    fn leading_empty_rows_do_not_count_as_a_gap() {
        let rows = projection(&[(30, false), (5, true)]);
        assert_eq!(split_row(&rows, 10), 35);
    }

    #[test]
    fn trailing_gap_with_no_second_block_still_splits() {
        // The heuristic only looks at gap length; whether content follows
        // the gap is irrelevant.
        let rows = projection(&[(10, true), (20, false)]);
        // Counter hits 11 at y=20; split = 20 - 11 = 9.
        assert_eq!(split_row(&rows, 10), 9);
    }

    #[test]
    fn threshold_is_configurable() {
        let rows = projection(&[(10, true), (4, false), (10, true)]);
        assert_eq!(split_row(&rows, 10), 24);
        // Counter hits 4 at y=13; split = 13 - 4 = 9.
        assert_eq!(split_row(&rows, 3), 9);
    }
}
