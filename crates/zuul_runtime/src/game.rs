//! Game state and command handlers.
//!
//! A [`Game`] owns the world snapshot, the player's location, and the
//! inventory. Each command runs to completion against that state and
//! produces a [`Response`]. Handlers build new world and inventory
//! snapshots and install them only once every step has succeeded, so a
//! rejected command never leaves partial changes behind.

use log::{debug, error};
use zuul_foundation::{Error, ErrorContext, Result, RoomId};
use zuul_parser::{Command, CommandParser, Verb};
use zuul_storage::campus::{self, GOAL_ITEM, GOAL_ROOM};
use zuul_storage::{Direction, Inventory, Room, World};

use crate::config::GameConfig;

/// Printed when the player carries the key into the office.
pub const WIN_BANNER: &str = "
==========================================
  CONGRATULATIONS! YOU WON!
  You found the ancient key and unlocked
  the treasure in the admin office!
==========================================
";

/// Printed once the loop ends.
pub const FAREWELL: &str = "Thank you for playing.  Good bye.";

const WELCOME: &str = "
Welcome to the World of Zuul!
World of Zuul is an exciting adventure game.
Your goal: Find the ancient key and unlock the treasure in the office!
Type 'help' if you need help.
";

const HELP_INTRO: &str = "You are exploring the university.
Your goal is to find the ancient key and unlock the treasure!

Your command words are:";

const HELP_COMMANDS: &str = "Commands:
  go <direction>  - Move in a direction (north, south, east, west)
  look            - Look around the current room
  take <item>     - Pick up an item
  drop <item>     - Drop an item from inventory
  inventory       - Show what you're carrying
  help            - Show this help message
  quit            - Exit the game";

/// Whether the game loop should keep going.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    /// Accepting commands.
    Running,
    /// `quit` was accepted.
    Terminated,
}

/// The text produced by one command, plus the state it left the game in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    text: String,
    state: GameState,
    won: bool,
}

impl Response {
    /// Returns the text to print. May be empty.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Iterates over the lines of text.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    /// Returns the game state after the command.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns true if the command ended the game loop.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.state == GameState::Terminated
    }

    /// Returns true if the win banner was printed.
    #[must_use]
    pub const fn won(&self) -> bool {
        self.won
    }
}

/// A game session on a fixed world.
#[derive(Clone, Debug)]
pub struct Game {
    world: World,
    current: RoomId,
    inventory: Inventory,
    goal_room: RoomId,
    parser: CommandParser,
    state: GameState,
}

impl Game {
    /// Creates a game on the campus map.
    ///
    /// # Errors
    ///
    /// Returns an error if the campus tables are inconsistent.
    pub fn new(config: &GameConfig) -> Result<Self> {
        Self::with_world(campus::campus()?, config)
    }

    /// Creates a game on the given world, starting in its start room.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRoom` if the world has no office to win in.
    pub fn with_world(world: World, config: &GameConfig) -> Result<Self> {
        let goal_room = world
            .room_id(GOAL_ROOM)
            .ok_or_else(|| Error::unknown_room(GOAL_ROOM))?;
        Ok(Self {
            current: world.start(),
            world,
            inventory: Inventory::new(config.max_carry_weight),
            goal_room,
            parser: CommandParser::new(),
            state: GameState::Running,
        })
    }

    /// Returns the current world snapshot.
    #[must_use]
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// Returns the id of the room the player is in.
    #[must_use]
    pub const fn current_room(&self) -> RoomId {
        self.current
    }

    /// Returns the room the player is in.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the location is not in the world.
    pub fn location(&self) -> Result<&Room> {
        self.world.room(self.current)
    }

    /// Returns the player's inventory.
    #[must_use]
    pub const fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Returns the loop state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns true until `quit` is accepted.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    /// Returns true if the player holds the key and stands in the office.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.current == self.goal_room && self.inventory.contains(GOAL_ITEM)
    }

    /// Renders the opening text, ending with the starting room.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the location is not in the world.
    pub fn welcome(&self, show_banner: bool) -> Result<String> {
        let room = self.location()?.long_description();
        if show_banner {
            Ok(format!("{WELCOME}\n{room}"))
        } else {
            Ok(room)
        }
    }

    /// Words worth offering for tab completion from here.
    #[must_use]
    pub fn completions(&self) -> Vec<String> {
        let mut words: Vec<String> = self
            .parser
            .command_words()
            .verbs()
            .map(|verb| verb.word().to_string())
            .collect();
        if let Ok(room) = self.location() {
            words.extend(room.exits().map(|(dir, _)| dir.name().to_string()));
            words.extend(room.items().map(|item| item.name().to_string()));
        }
        words.extend(self.inventory.items().map(|item| item.name().to_string()));
        words
    }

    /// Parses and runs one line of input, reporting rejections as text.
    pub fn execute(&mut self, line: &str) -> Response {
        match self.try_execute(line) {
            Ok(response) => response,
            Err(err) => self.reject(&err),
        }
    }

    /// Runs a parsed command, reporting rejections as text.
    pub fn process_command(&mut self, command: &Command) -> Response {
        match self.try_process(command) {
            Ok(response) => response,
            Err(err) => self.reject(&err),
        }
    }

    /// Parses and runs one line of input.
    ///
    /// # Errors
    ///
    /// Returns the rejection, with the line and room attached as context.
    pub fn try_execute(&mut self, line: &str) -> Result<Response> {
        let command = self.parser.parse(line);
        debug!("{line:?} parsed as {command:?}");
        self.try_process(&command)
            .map_err(|err| err.with_context(self.error_context(line)))
    }

    /// Runs a parsed command.
    ///
    /// # Errors
    ///
    /// Returns the rejection for bad input. State is unchanged on error.
    pub fn try_process(&mut self, command: &Command) -> Result<Response> {
        let (text, check_win) = match command.verb() {
            None => return Err(Error::unknown_command()),
            Some(Verb::Help) => (self.help(), false),
            Some(Verb::Go) => (self.go_room(command)?, true),
            Some(Verb::Quit) => (self.quit(command)?, false),
            Some(Verb::Look) => (self.look()?, false),
            Some(Verb::Take) => (self.take_item(command)?, true),
            Some(Verb::Drop) => (self.drop_item(command)?, false),
            Some(Verb::Inventory) => (self.show_inventory(), false),
        };

        let won = check_win && self.has_won();
        let text = if won {
            debug!("win condition met");
            format!("{text}\n{WIN_BANNER}")
        } else {
            text
        };

        Ok(Response {
            text,
            state: self.state,
            won,
        })
    }

    fn help(&self) -> String {
        format!(
            "{HELP_INTRO}\n{}\n\n{HELP_COMMANDS}",
            self.parser.show_commands()
        )
    }

    fn go_room(&mut self, command: &Command) -> Result<String> {
        let word = command.require_argument(Verb::Go, "where")?;
        let direction: Direction = word.parse().map_err(|_| Error::no_exit(word))?;
        let next = self.world.exit(self.current, direction)?;

        self.current = next;
        debug!("moved {direction} to {next:?}");
        self.look()
    }

    fn quit(&mut self, command: &Command) -> Result<String> {
        command.forbid_argument(Verb::Quit)?;
        self.state = GameState::Terminated;
        Ok(String::new())
    }

    fn look(&self) -> Result<String> {
        Ok(self.location()?.long_description())
    }

    fn take_item(&mut self, command: &Command) -> Result<String> {
        let name = command.require_argument(Verb::Take, "what")?;
        let (world, item) = self.world.take_item(self.current, name)?;
        let message = format!("You picked up: {}", item.name());
        let inventory = self.inventory.insert(item)?;

        self.world = world;
        self.inventory = inventory;
        Ok(message)
    }

    fn drop_item(&mut self, command: &Command) -> Result<String> {
        let name = command.require_argument(Verb::Drop, "what")?;
        let (inventory, item) = self.inventory.remove(name)?;
        let message = format!("You dropped: {}", item.name());
        let world = self.world.put_item(self.current, item)?;

        self.world = world;
        self.inventory = inventory;
        Ok(message)
    }

    fn show_inventory(&self) -> String {
        if self.inventory.is_empty() {
            return "Your inventory is empty.".to_string();
        }
        let mut text = String::from("You are carrying:");
        for item in self.inventory.items() {
            text.push_str("\n  - ");
            text.push_str(&item.to_string());
        }
        text.push_str(&format!(
            "\nTotal weight: {} / {}",
            self.inventory.total_weight(),
            self.inventory.capacity()
        ));
        text
    }

    fn error_context(&self, line: &str) -> ErrorContext {
        let context = ErrorContext::new().with_command(line);
        match self.location() {
            Ok(room) => context.with_room(room.key()),
            Err(_) => context,
        }
    }

    fn reject(&self, err: &Error) -> Response {
        let context = err.context.clone().unwrap_or_default();
        if err.is_user_error() {
            debug!("rejected {context}: {err:?}");
        } else {
            error!("command failed {context}: {err}");
        }
        Response {
            text: err.to_string(),
            state: self.state,
            won: false,
        }
    }
}
