//! Sequencer - drives the intro and the endless snippet loop.
//!
//! The sequencer never touches the terminal or the clock. Each call to
//! [`Sequencer::next_step`] returns the next [`Step`] for a driver to execute,
//! which keeps the policy testable in isolation.
//!
//! ```text
//! Intro --settled--> NextSnippet --Clear--> Settle --settled--> Hold --Hold(1s)--> NextSnippet ...
//! ```

use std::time::Duration;

use tracing::debug;

use crate::content::{fill_placeholder, first_line};
use crate::core::{layout, Frame};
use crate::types::{LayoutParams, HOLD_MS};

/// One running animation of a text block.
#[derive(Debug, Clone)]
pub struct Animation {
    text: String,
    tick: u64,
    params: LayoutParams,
}

impl Animation {
    pub fn new(text: String, params: LayoutParams) -> Self {
        Self {
            text,
            tick: 0,
            params,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Tick of the next frame.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Lay out the current tick, then advance by one.
    pub fn next_frame(&mut self, columns: usize) -> Frame {
        let frame = layout(&self.text, self.tick, columns, &self.params);
        self.tick += 1;
        frame
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Intro,
    NextSnippet,
    Settle,
    Hold,
    Finished,
}

/// What to print between cursor-home and the frame rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prelude {
    Nothing,
    Greeting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Home the cursor, print the prelude, then the frame rows.
    Frame { frame: Frame, prelude: Prelude },
    /// Clear the whole screen.
    Clear,
    /// Pause without drawing.
    Hold(Duration),
    /// The snippet source ran dry.
    Finished,
}

pub struct Sequencer<S> {
    greeting: String,
    snippets: S,
    params: LayoutParams,
    hold: Duration,
    phase: Phase,
    anim: Animation,
}

impl<S> Sequencer<S>
where
    S: Iterator<Item = String>,
{
    pub fn new(greeting: String, snippets: S) -> Self {
        Self::with_params(greeting, snippets, LayoutParams::default())
    }

    pub fn with_params(greeting: String, snippets: S, params: LayoutParams) -> Self {
        let anim = Animation::new(greeting.clone(), params);
        Self {
            greeting,
            snippets,
            params,
            hold: Duration::from_millis(HOLD_MS),
            phase: Phase::Intro,
            anim,
        }
    }

    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn animation(&self) -> &Animation {
        &self.anim
    }

    pub fn hold_duration(&self) -> Duration {
        self.hold
    }

    /// Advance the state machine by one step.
    pub fn next_step(&mut self, columns: usize) -> Step {
        match self.phase {
            Phase::Intro | Phase::Settle => {
                let prelude = if self.phase == Phase::Intro {
                    Prelude::Nothing
                } else {
                    Prelude::Greeting
                };
                let frame = self.anim.next_frame(columns);
                if frame.is_settled() {
                    debug!(phase = ?self.phase, ticks = self.anim.tick(), "animation settled");
                    self.phase = match self.phase {
                        Phase::Intro => Phase::NextSnippet,
                        _ => Phase::Hold,
                    };
                }
                Step::Frame { frame, prelude }
            }
            Phase::Hold => {
                self.phase = Phase::NextSnippet;
                Step::Hold(self.hold)
            }
            Phase::NextSnippet => match self.snippets.next() {
                Some(snippet) => {
                    let code = fill_placeholder(&snippet, first_line(&self.greeting));
                    self.anim = Animation::new(code, self.params);
                    self.phase = Phase::Settle;
                    Step::Clear
                }
                None => {
                    self.phase = Phase::Finished;
                    Step::Finished
                }
            },
            Phase::Finished => Step::Finished,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain_frames<S: Iterator<Item = String>>(seq: &mut Sequencer<S>, columns: usize) -> usize {
        let mut frames = 0;
        while matches!(seq.phase(), Phase::Intro | Phase::Settle) {
            match seq.next_step(columns) {
                Step::Frame { .. } => frames += 1,
                other => panic!("unexpected step {:?}", other),
            }
        }
        frames
    }

    #[test]
    fn intro_runs_until_settled_and_emits_settled_frame() {
        let mut seq = Sequencer::new("A".to_string(), std::iter::empty());
        // 'A' settles once tick / 100 > 1, i.e. at tick 101.
        assert_eq!(drain_frames(&mut seq, 10), 102);
        assert_eq!(seq.phase(), Phase::NextSnippet);
    }

    #[test]
    fn intro_frames_have_no_prelude() {
        let mut seq = Sequencer::new("A".to_string(), std::iter::empty());
        match seq.next_step(10) {
            Step::Frame { prelude, frame } => {
                assert_eq!(prelude, Prelude::Nothing);
                assert!(frame.not_settled());
            }
            other => panic!("unexpected step {:?}", other),
        }
    }

    #[test]
    fn loop_clears_animates_then_holds() {
        let snippets = vec!["x".to_string()].into_iter().cycle();
        let mut seq = Sequencer::new("Hi".to_string(), snippets);
        drain_frames(&mut seq, 10);

        assert_eq!(seq.next_step(10), Step::Clear);
        assert_eq!(seq.animation().tick(), 0);

        match seq.next_step(10) {
            Step::Frame { prelude, .. } => assert_eq!(prelude, Prelude::Greeting),
            other => panic!("unexpected step {:?}", other),
        }
        drain_frames(&mut seq, 10);

        assert_eq!(seq.next_step(10), Step::Hold(Duration::from_secs(1)));
        assert_eq!(seq.next_step(10), Step::Clear);
    }

    #[test]
    fn snippet_placeholder_gets_first_greeting_line() {
        let snippets = vec!["print($$$)".to_string()].into_iter();
        let mut seq = Sequencer::new("Hello\nWorld\n".to_string(), snippets);
        drain_frames(&mut seq, 40);
        assert_eq!(seq.next_step(40), Step::Clear);
        assert_eq!(seq.animation().text(), "print(Hello)");
    }

    #[test]
    fn exhausted_source_finishes() {
        let mut seq = Sequencer::new(String::new(), std::iter::empty());
        // Empty greeting settles on the very first frame.
        assert!(matches!(seq.next_step(80), Step::Frame { .. }));
        assert_eq!(seq.next_step(80), Step::Finished);
        assert_eq!(seq.next_step(80), Step::Finished);
        assert_eq!(seq.phase(), Phase::Finished);
    }
}
