//! Frame row: one fixed-width line of terminal cells.

use crate::types::DisplayCell;

/// Contents of one terminal column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowCell {
    #[default]
    Blank,
    Glyph(char),
    /// Column consumed by a wider glyph to its left.
    Continuation,
}

/// Fixed-width row of cells, rebuilt from scratch for every frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRow {
    cells: Vec<RowCell>,
}

impl FrameRow {
    pub fn new(columns: usize) -> Self {
        Self {
            cells: vec![RowCell::Blank; columns],
        }
    }

    pub fn width(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[RowCell] {
        &self.cells
    }

    pub fn get(&self, col: usize) -> Option<RowCell> {
        self.cells.get(col).copied()
    }

    /// Whether a glyph spanning `span` columns fits starting at `col`.
    #[inline]
    pub fn fits(&self, col: usize, span: usize) -> bool {
        col.checked_add(span)
            .is_some_and(|end| span > 0 && end <= self.cells.len())
    }

    /// Place an anchor cell at `col`, marking its continuation columns.
    ///
    /// Returns false (and writes nothing) when the glyph does not fit.
    pub fn place(&mut self, col: usize, cell: DisplayCell) -> bool {
        let Some(glyph) = cell.glyph() else {
            return false;
        };
        let span = cell.span();
        if !self.fits(col, span) {
            return false;
        }
        self.cells[col] = RowCell::Glyph(glyph);
        for c in &mut self.cells[col + 1..col + span] {
            *c = RowCell::Continuation;
        }
        true
    }

    /// Printable text of the row. Continuation columns emit nothing.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len());
        for cell in &self.cells {
            match cell {
                RowCell::Blank => out.push(' '),
                RowCell::Glyph(ch) => out.push(*ch),
                RowCell::Continuation => {}
            }
        }
        out
    }
}
