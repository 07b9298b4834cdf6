//! Interpretation of a single line read from the terminal.

/// What the player asked for with one line of input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum LineCommand {
    /// Start a fresh map with a new seed.
    NewMap,
    /// Leave the game.
    Quit,
    /// Redraw without typing anything.
    Redraw,
    /// Type the word and submit it.
    Word(String),
}

impl LineCommand {
    /// Parses a line with its trailing newline already removed or not.
    pub(crate) fn parse(line: &str) -> Self {
        match line.trim() {
            ":new" => Self::NewMap,
            ":quit" | ":q" => Self::Quit,
            "" => Self::Redraw,
            word => Self::Word(word.to_owned()),
        }
    }
}
