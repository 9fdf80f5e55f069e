//! Core animation logic - pure, deterministic, and testable
//!
//! This crate contains the settle-into-place animation: glyph classification and
//! the per-frame layout function. It has **zero dependencies** on terminals,
//! files or clocks, making it:
//!
//! - **Deterministic**: Same `(text, tick, columns)` always yields the same frame
//! - **Testable**: Every rule is covered by unit and property tests
//! - **Stateless**: Frames are rebuilt from scratch on every tick
//!
//! # Module Structure
//!
//! - [`glyph`]: span width and display cells for a single character
//! - [`row`]: fixed-width frame row with bounds-checked placement
//! - [`layout`]: per-character arrival time and horizontal settle position
//! - [`rng`]: small seeded RNG for snippet selection
//!
//! # Example
//!
//! ```
//! use hello_world_core::layout;
//! use hello_world_types::LayoutParams;
//!
//! let params = LayoutParams::default();
//!
//! // Early on, nothing has arrived yet.
//! let frame = layout("Hi", 0, 10, &params);
//! assert!(frame.not_settled());
//!
//! // Two time units later every character is home.
//! let frame = layout("Hi", 200, 10, &params);
//! assert!(frame.is_settled());
//! assert_eq!(frame.lines().next().unwrap(), "Hi        ");
//! ```

pub mod glyph;
pub mod layout;
pub mod rng;
pub mod row;

pub use hello_world_types as types;

pub use glyph::{classify, classify_line, span_width, GlyphCells};
pub use layout::{layout, layout_line, settle_offset, Frame};
pub use rng::SimpleRng;
pub use row::{FrameRow, RowCell};
