//! Hello World screen-saver (workspace facade crate).
//!
//! Re-exports the component crates under `hello_world::{content,core,engine,term,types}`;
//! the implementation lives in dedicated crates under `crates/`.

pub use hello_world_content as content;
pub use hello_world_core as core;
pub use hello_world_engine as engine;
pub use hello_world_term as term;
pub use hello_world_types as types;
