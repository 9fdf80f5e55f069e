//! Glyph classifier - maps a character to the display cells it occupies.
//!
//! The default rule is a heuristic rather than a full width table: a character
//! whose UTF-8 encoding is exactly 3 bytes (the CJK blocks) is two columns wide,
//! everything else is one. Tabs always reserve a full tab stop.

use arrayvec::ArrayVec;
use unicode_width::UnicodeWidthChar;

use crate::types::{DisplayCell, WidthRule, MAX_SPAN, TAB_WIDTH, WIDE_WIDTH};

/// Cells produced for one character: the anchor followed by its continuations.
pub type GlyphCells = ArrayVec<DisplayCell, MAX_SPAN>;

/// Number of terminal columns `ch` occupies under `rule`.
pub fn span_width(ch: char, rule: WidthRule) -> usize {
    if ch == '\t' {
        return TAB_WIDTH;
    }
    let wide = match rule {
        WidthRule::Utf8Length => ch.len_utf8() == 3,
        WidthRule::Unicode => ch.width() == Some(WIDE_WIDTH),
    };
    if wide {
        WIDE_WIDTH
    } else {
        1
    }
}

/// Classify a single character.
///
/// Returns the span width and the encoded cells (one anchor plus `span - 1`
/// continuations). Does not allocate.
pub fn classify(ch: char, rule: WidthRule) -> (usize, GlyphCells) {
    let span = span_width(ch, rule);
    let mut cells = GlyphCells::new();
    cells.push(DisplayCell::anchor(ch, span));
    for _ in 1..span {
        cells.push(DisplayCell::continuation());
    }
    (span, cells)
}

/// Classify every character of `line` into one flat list of display cells.
///
/// The index of a cell in the returned list is its home column.
pub fn classify_line(line: &str, rule: WidthRule) -> Vec<DisplayCell> {
    let mut out = Vec::with_capacity(line.len());
    for ch in line.chars() {
        let (_, cells) = classify(ch, rule);
        out.extend(cells);
    }
    out
}
