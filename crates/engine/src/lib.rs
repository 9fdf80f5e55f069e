//! Engine - sequencing and pacing of the animation
//!
//! - [`sequencer`]: the intro / snippet-loop state machine, emitting [`Step`]s
//! - [`pacing`]: per-frame minimum duration
//!
//! The driver (the binary) owns the terminal and the clock and simply executes
//! the steps in order:
//!
//! ```
//! use hello_world_engine::{Sequencer, Step};
//!
//! let snippets = vec!["fn main() {}".to_string()].into_iter().cycle();
//! let mut seq = Sequencer::new("Hello".to_string(), snippets);
//!
//! let mut frames = 0;
//! loop {
//!     match seq.next_step(80) {
//!         Step::Frame { .. } => frames += 1,
//!         Step::Clear => break,
//!         _ => unreachable!(),
//!     }
//! }
//! assert!(frames > 100);
//! ```

pub mod pacing;
pub mod sequencer;

pub use hello_world_content as content;
pub use hello_world_core as core;
pub use hello_world_types as types;

pub use pacing::FramePacer;
pub use sequencer::{Animation, Phase, Prelude, Sequencer, Step};
