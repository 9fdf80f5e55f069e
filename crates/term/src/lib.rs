//! Terminal output layer.
//!
//! Raw ANSI plumbing for the animation, kept separate from the pure layout in
//! `core` so that everything above this crate can be tested without a terminal.
//!
//! - [`renderer`]: frame, clear and mode-switch encoding via crossterm
//! - [`session`]: alternate-screen guard restored exactly once on any exit path
//! - [`size`]: terminal width with an 80 column fallback
//!
//! Raw mode is never enabled, so Ctrl-C still reaches the process as SIGINT.

pub mod renderer;
pub mod session;
pub mod size;

pub use hello_world_core as core;
pub use hello_world_types as types;

pub use renderer::{
    encode_clear_into, encode_enter_into, encode_frame_into, encode_restore_into,
    TerminalRenderer,
};
pub use session::{SessionState, TerminalSession};
pub use size::{columns_or_default, terminal_columns};
