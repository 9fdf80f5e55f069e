//! Content source - greeting text and code snippets
//!
//! Everything the animation shows comes from two directories relative to the
//! working directory:
//!
//! - `i18n/<locale>.txt`: the greeting, chosen from `LANG` with `en-us` fallback
//! - `code/`: snippet files, one picked at random per cycle
//!
//! Snippets may contain the token `$$$`, which is replaced by the first line of
//! the greeting before the snippet is animated.
//!
//! All read failures degrade to defaults. The single hard precondition is that
//! the snippet directory holds at least one file; [`SnippetStream::open`]
//! reports [`ContentError::NoSnippets`] otherwise.

pub mod error;
pub mod greeting;
pub mod locale;
pub mod snippets;

pub use hello_world_core as core;
pub use hello_world_types as types;

pub use error::ContentError;
pub use greeting::{first_line, read_greeting};
pub use locale::{locale_from_env, normalize_locale};
pub use snippets::{fill_placeholder, list_snippets, SnippetStream};
