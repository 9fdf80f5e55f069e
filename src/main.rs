//! Terminal greeting screen-saver (default binary).
//!
//! Animates the localized greeting from `i18n/`, then cycles forever through
//! random snippets from `code/`, each settling into place below the greeting.
//! Stops only when killed; the terminal is restored on every exit path.

mod logging;

use std::path::Path;
use std::thread;
use std::time::Instant;

use anyhow::Result;
use tracing::info;

use hello_world::content::{locale_from_env, read_greeting, SnippetStream};
use hello_world::core::SimpleRng;
use hello_world::engine::{FramePacer, Prelude, Sequencer, Step};
use hello_world::term::{terminal_columns, TerminalRenderer, TerminalSession};
use hello_world::types::{CODE_DIR, I18N_DIR};

fn main() -> Result<()> {
    logging::init()?;

    let locale = locale_from_env();
    let greeting = read_greeting(Path::new(I18N_DIR), &locale);
    // Fail before touching the terminal when there is nothing to show.
    let snippets = SnippetStream::open(Path::new(CODE_DIR), SimpleRng::from_clock())?;
    info!(%locale, snippets = snippets.files().len(), "starting");

    let session = TerminalSession::enter(greeting.clone())?;
    session.install_panic_hook();
    session.install_signal_handlers()?;

    let result = run(Sequencer::new(greeting, snippets));

    // Always restore terminal state.
    drop(session);
    result
}

fn run<S>(mut seq: Sequencer<S>) -> Result<()>
where
    S: Iterator<Item = String>,
{
    let mut term = TerminalRenderer::new();
    let pacer = FramePacer::default();

    loop {
        let started = Instant::now();
        let columns = terminal_columns();
        match seq.next_step(columns) {
            Step::Frame { frame, prelude } => {
                let prelude = match prelude {
                    Prelude::Nothing => None,
                    Prelude::Greeting => Some(seq.greeting()),
                };
                term.draw(prelude, &frame)?;
                pacer.finish(started);
            }
            Step::Clear => term.clear()?,
            Step::Hold(pause) => thread::sleep(pause),
            Step::Finished => return Ok(()),
        }
    }
}
