//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (layout, sequencing, terminal output).
//!
//! # Animation Constants
//!
//! Every character of a text block follows the same curve. Its continuous time is
//!
//! ```text
//! t = tick / TICKS_PER_UNIT - j * CHAR_DELAY - line_index * LINE_DELAY
//! ```
//!
//! where `j` is the character's position in the classified line. While
//! `0 <= t <= 1` the character slides in from the right with a cubic ease-out;
//! once `t > 1` it sits at its home column.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICKS_PER_UNIT` | 100 | Ticks per unit of continuous time |
//! | `CHAR_DELAY` | 0.05 | Arrival stagger per cell within a line |
//! | `LINE_DELAY` | 0.5 | Arrival stagger per line |
//! | `FRAME_FLOOR_MS` | 10 | Minimum duration of one rendered frame |
//! | `HOLD_MS` | 1000 | Pause after a snippet has settled |
//!
//! # Examples
//!
//! ```
//! use hello_world_types::{DisplayCell, LayoutParams, TAB_WIDTH};
//!
//! let tab = DisplayCell::anchor('\t', TAB_WIDTH);
//! assert_eq!(tab.span(), 8);
//! assert!(!tab.is_continuation());
//!
//! let params = LayoutParams::default();
//! assert_eq!(params.char_delay, 0.05);
//! ```

/// Ticks per unit of continuous animation time.
pub const TICKS_PER_UNIT: f64 = 100.0;

/// Arrival delay between consecutive cells of one line.
pub const CHAR_DELAY: f64 = 0.05;

/// Arrival delay between consecutive lines.
pub const LINE_DELAY: f64 = 0.5;

/// Columns reserved by a tab character.
pub const TAB_WIDTH: usize = 8;

/// Columns reserved by a wide (East-Asian) character.
pub const WIDE_WIDTH: usize = 2;

/// Largest span any single character can have.
pub const MAX_SPAN: usize = TAB_WIDTH;

/// Terminal width used when the real width cannot be queried.
pub const DEFAULT_COLUMNS: u16 = 80;

/// Floor duration of a single rendered frame.
pub const FRAME_FLOOR_MS: u64 = 10;

/// Pause after a snippet animation has settled.
pub const HOLD_MS: u64 = 1000;

/// Token in snippet files replaced by the greeting's first line.
pub const PLACEHOLDER: &str = "$$$";

/// Locale used when `LANG` is unset or empty (before normalization).
pub const DEFAULT_LOCALE: &str = "en_US";

/// Normalized locale whose greeting file is the fallback.
pub const FALLBACK_LOCALE: &str = "en-us";

/// Directory holding `<locale>.txt` greeting files.
pub const I18N_DIR: &str = "i18n";

/// Directory holding code snippets.
pub const CODE_DIR: &str = "code";

/// One classified display cell.
///
/// An anchor carries the glyph and the number of columns it spans; the
/// columns it consumes to its right are represented by continuation cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayCell {
    span: usize,
    glyph: Option<char>,
}

impl DisplayCell {
    pub const fn anchor(glyph: char, span: usize) -> Self {
        Self {
            span,
            glyph: Some(glyph),
        }
    }

    pub const fn continuation() -> Self {
        Self {
            span: 0,
            glyph: None,
        }
    }

    /// Columns occupied by this cell (0 for continuations).
    pub fn span(&self) -> usize {
        self.span
    }

    pub fn glyph(&self) -> Option<char> {
        self.glyph
    }

    pub fn is_continuation(&self) -> bool {
        self.glyph.is_none()
    }
}

/// How the classifier decides that a character is two columns wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidthRule {
    /// Characters encoded as exactly 3 UTF-8 bytes are wide.
    #[default]
    Utf8Length,
    /// East-Asian width data decides.
    Unicode,
}

/// Tuning values of the settle animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub ticks_per_unit: f64,
    pub char_delay: f64,
    pub line_delay: f64,
    pub width_rule: WidthRule,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            ticks_per_unit: TICKS_PER_UNIT,
            char_delay: CHAR_DELAY,
            line_delay: LINE_DELAY,
            width_rule: WidthRule::Utf8Length,
        }
    }
}

impl LayoutParams {
    /// Continuous time of cell `j` on line `line_index` at `tick`.
    #[inline]
    pub fn time_at(&self, tick: u64, j: usize, line_index: usize) -> f64 {
        tick as f64 / self.ticks_per_unit
            - j as f64 * self.char_delay
            - line_index as f64 * self.line_delay
    }
}
