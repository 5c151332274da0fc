//! Fixed-width text formatting for cells.

use crate::Cell;

/// Default display width of a single cell.
pub const CELL_WIDTH: usize = 4;

/// Marker printed for an empty cell.
pub const EMPTY_MARKER: &str = ".";

/// Centers `text` within `width` columns, padding with `fill`.
///
/// When the padding is odd, the extra column goes to the right. Text that is
/// already at least `width` long is returned unchanged.
///
/// # Examples
///
/// ```
/// use numerge_core::format::center;
///
/// assert_eq!(center("ab", 5, '*'), "*ab**");
/// assert_eq!(center("abcdef", 3, ' '), "abcdef");
/// ```
#[must_use]
pub fn center(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count();
    let Some(padding) = width.checked_sub(len).filter(|&p| p > 0) else {
        return text.to_owned();
    };
    let left = padding / 2;
    let right = padding - left;

    let mut out = String::with_capacity(text.len() + padding);
    out.extend(std::iter::repeat_n(fill, left));
    out.push_str(text);
    out.extend(std::iter::repeat_n(fill, right));
    out
}

/// Formats a cell centered within `width` columns.
///
/// # Examples
///
/// ```
/// use numerge_core::format::format_cell;
///
/// assert_eq!(format_cell(Some(2), 4), " 2  ");
/// assert_eq!(format_cell(Some(128), 4), "128 ");
/// assert_eq!(format_cell(Some(16384), 4), "16384");
/// assert_eq!(format_cell(None, 4), " .  ");
/// ```
#[must_use]
pub fn format_cell(cell: Cell, width: usize) -> String {
    match cell {
        Some(value) => center(&value.to_string(), width, ' '),
        None => center(EMPTY_MARKER, width, ' '),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_even_and_odd_padding() {
        assert_eq!(center("64", 4, ' '), " 64 ");
        assert_eq!(center("8", 4, ' '), " 8  ");
        assert_eq!(center("", 2, '-'), "--");
    }

    #[test]
    fn test_center_zero_width() {
        assert_eq!(center("x", 0, ' '), "x");
    }

    #[test]
    fn test_format_cell_widths() {
        for value in [2, 4, 1024, 2048] {
            assert_eq!(format_cell(Some(value), CELL_WIDTH).len(), CELL_WIDTH);
        }
        assert_eq!(format_cell(None, CELL_WIDTH).len(), CELL_WIDTH);
    }
}
