//! Frame layout engine.
//!
//! Maps `(text, tick, columns)` to one fully laid out row per input line. The
//! function is pure: the same inputs always produce the same frame, and no
//! state survives between calls.
//!
//! Each anchor cell at classified position `j` on line `l` has continuous time
//! `t = tick / 100 - j * 0.05 - l * 0.5`:
//!
//! - `t < 0`: not visible yet
//! - `0 <= t <= 1`: sliding in, offset `floor((1 - t)^3 * columns)` to the right
//!   of its home column
//! - `t > 1`: settled at its home column `j`
//!
//! A placement that would run past the right edge is dropped for that frame.

use crate::glyph::classify_line;
use crate::row::FrameRow;
use crate::types::LayoutParams;

/// Result of laying out one text block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    rows: Vec<FrameRow>,
    not_settled: bool,
}

impl Frame {
    pub fn rows(&self) -> &[FrameRow] {
        &self.rows
    }

    /// True while any character of the block is still moving or hidden.
    pub fn not_settled(&self) -> bool {
        self.not_settled
    }

    pub fn is_settled(&self) -> bool {
        !self.not_settled
    }

    /// Printable text of every row, in order.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.rows.iter().map(FrameRow::to_text)
    }
}

/// Horizontal offset of a character at continuous time `t` (`0 <= t <= 1`).
#[inline]
pub fn settle_offset(t: f64, columns: usize) -> usize {
    let remaining = 1.0 - t;
    (remaining * remaining * remaining * columns as f64).floor() as usize
}

/// Lay out a single line.
///
/// Returns the row and whether any character on it has `t <= 1`.
pub fn layout_line(
    line: &str,
    line_index: usize,
    tick: u64,
    columns: usize,
    params: &LayoutParams,
) -> (FrameRow, bool) {
    let cells = classify_line(line, params.width_rule);
    let mut row = FrameRow::new(columns);
    let mut not_settled = false;

    for (j, cell) in cells.iter().enumerate() {
        if cell.is_continuation() {
            continue;
        }
        let t = params.time_at(tick, j, line_index);
        if t > 1.0 {
            row.place(j, *cell);
            continue;
        }
        not_settled = true;
        if t < 0.0 {
            continue;
        }
        let n = settle_offset(t, columns);
        if let Some(col) = j.checked_add(n) {
            row.place(col, *cell);
        }
    }

    (row, not_settled)
}

/// Lay out a whole text block, one row per line.
pub fn layout(text: &str, tick: u64, columns: usize, params: &LayoutParams) -> Frame {
    let mut rows = Vec::new();
    let mut not_settled = false;
    for (l, line) in text.lines().enumerate() {
        let (row, line_not_settled) = layout_line(line, l, tick, columns, params);
        not_settled |= line_not_settled;
        rows.push(row);
    }
    Frame { rows, not_settled }
}
