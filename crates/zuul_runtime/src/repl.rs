//! The main read-process-respond loop.

use std::io::{self, Write};

use log::debug;
use zuul_foundation::Result;

use crate::config::GameConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::game::{FAREWELL, Game, Response};

/// The interactive game loop.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Game state.
    game: Game,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Prompt shown before each command.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL on the campus map with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize or the world fails
    /// to build.
    pub fn new(config: &GameConfig) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Self::with_editor(editor, config)
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL on the campus map with the given editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the world fails to build.
    pub fn with_editor(editor: E, config: &GameConfig) -> Result<Self> {
        Ok(Self {
            editor,
            game: Game::new(config)?,
            show_banner: config.show_banner,
            prompt: config.prompt.clone(),
        })
    }

    /// Replaces the game, e.g. to play on a custom world.
    #[must_use]
    pub fn with_game(mut self, game: Game) -> Self {
        self.game = game;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns a reference to the game.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Runs the loop until `quit` is accepted or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        println!("{}", self.game.welcome(self.show_banner)?);
        self.editor.set_completions(self.game.completions());

        while self.read_eval_print()? {}

        println!("{FAREWELL}");
        let _ = io::stdout().flush();
        Ok(())
    }

    /// Executes one read-process-respond iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let line = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => {
                debug!("end of input");
                println!();
                return Ok(false);
            }
        };

        if !line.trim().is_empty() {
            self.editor.add_history(&line);
        }

        let response = self.eval(&line);
        if !response.text().is_empty() {
            println!("{}", response.text());
        }

        Ok(!response.is_terminated())
    }

    /// Processes one line of input against the game.
    pub fn eval(&mut self, line: &str) -> Response {
        let response = self.game.execute(line);
        self.editor.set_completions(self.game.completions());
        response
    }
}
