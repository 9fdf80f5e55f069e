//! Terminal width query.

use crossterm::terminal;
use tracing::debug;

use crate::types::DEFAULT_COLUMNS;

/// Width to lay frames out in: the queried width, or 80 when it is unknown or zero.
pub fn columns_or_default(queried: Option<u16>) -> usize {
    match queried {
        Some(w) if w > 0 => w as usize,
        _ => DEFAULT_COLUMNS as usize,
    }
}

/// Current terminal width in columns.
pub fn terminal_columns() -> usize {
    let queried = match terminal::size() {
        Ok((w, _)) => Some(w),
        Err(e) => {
            debug!(error = %e, "terminal size unavailable");
            None
        }
    };
    columns_or_default(queried)
}
