#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that accumulates typed characters into candidate words.

use wordhex_core::{Command, Event, Input};

/// Reports whether the character may appear in a word.
#[must_use]
pub fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '-'
}

/// Word prompt that turns input intents into word events and commands.
#[derive(Debug, Default)]
pub struct WordPrompt {
    current: String,
}

impl WordPrompt {
    /// Creates an empty prompt.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Word typed so far.
    #[must_use]
    pub fn current_word(&self) -> &str {
        &self.current
    }

    /// Consumes a single input intent.
    ///
    /// Typing a character or submitting a non-empty word also requests that
    /// the map clock start; the world ignores the request once play began.
    pub fn handle(
        &mut self,
        input: Input,
        out_events: &mut Vec<Event>,
        out_commands: &mut Vec<Command>,
    ) {
        match input {
            Input::Character(ch) => {
                if !is_word_char(ch) {
                    return;
                }
                self.current.extend(ch.to_lowercase());
                out_commands.push(Command::StartClock);
                self.changed(out_events);
            }
            Input::Accept => {
                if self.current.is_empty() {
                    return;
                }
                let word = std::mem::take(&mut self.current);
                out_events.push(Event::WordAccepted { word: word.clone() });
                out_commands.push(Command::StartClock);
                out_commands.push(Command::SubmitWord { word });
                self.changed(out_events);
            }
            Input::Backspace => {
                let _ = self.current.pop();
                self.changed(out_events);
            }
            Input::Clear => {
                self.current.clear();
                self.changed(out_events);
            }
        }
    }

    fn changed(&self, out_events: &mut Vec<Event>) {
        out_events.push(Event::WordChanged {
            word: self.current.clone(),
        });
    }
}
