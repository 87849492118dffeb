//! Interactive session: a cube, the selection controls, and the command
//! language typed at the prompt.

use std::cell::Cell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use std::str::FromStr;

use cubeface_core::{Cube, Direction, Faces, Move, ScrambleLength, ScrambleLengthError};
use eyre::Result;
use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::controls::Controls;
use crate::render::{NetStyle, render_net};

/// Error in a line typed at the prompt. The line is ignored.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The word is not a command.
    #[error("unknown command {0:?} (type `help` for a list)")]
    Unknown(String),
    /// The scramble length is invalid.
    #[error(transparent)]
    ScrambleLength(#[from] ScrambleLengthError),
}

/// One command typed at the prompt.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    /// Apply a move.
    Move(Move),
    /// Return to the solved state.
    Reset,
    /// Scramble with the given number of moves, or the default number.
    Scramble(Option<ScrambleLength>),
    /// Move the row/column selection.
    Select(Direction),
    /// Shift the selected row/column.
    Nudge(Direction),
    /// Print the list of commands.
    Help,
    /// End the session.
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    /// Parses a single word. `scramble` parses with no length.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "reset" => Command::Reset,
            "scramble" => Command::Scramble(None),
            "w" => Command::Select(Direction::Up),
            "s" => Command::Select(Direction::Down),
            "a" => Command::Select(Direction::Left),
            "d" => Command::Select(Direction::Right),
            "up" => Command::Nudge(Direction::Up),
            "down" => Command::Nudge(Direction::Down),
            "left" => Command::Nudge(Direction::Left),
            "right" => Command::Nudge(Direction::Right),
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Move(s.parse().map_err(|_| CommandError::Unknown(s.to_owned()))?),
        })
    }
}

/// Parses a line of whitespace-separated commands. The whole line is
/// rejected if any part of it is invalid.
///
/// `scramble` takes the following word as its length if that word starts with
/// a digit or a minus sign.
pub fn parse_line(line: &str) -> Result<Vec<Command>, CommandError> {
    let mut words = line.split_whitespace().peekable();
    let mut ret = vec![];
    while let Some(word) = words.next() {
        let mut command = word.to_ascii_lowercase().parse()?;
        if command == Command::Scramble(None)
            && let Some(len) =
                words.next_if(|w| w.starts_with(|c: char| c.is_ascii_digit() || c == '-'))
        {
            command = Command::Scramble(Some(len.parse()?));
        }
        ret.push(command);
    }
    Ok(ret)
}

/// Returns the help text listing every command.
pub fn help_text() -> String {
    let moves = Move::iter().map(|m| m.name()).join(" ");
    format!(
        "moves:      {moves}\n\
         reset       return to the solved state\n\
         scramble N  apply N random moves (default from preferences)\n\
         w a s d     select a front row (w/s) or column (a/d)\n\
         up down left right\n            \
         shift the selected row or column\n\
         help        show this message\n\
         quit        leave"
    )
}

/// What to do after running a command.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading commands.
    Continue,
    /// Stop.
    Quit,
}

/// Cube, selection, and redraw state for an interactive session.
pub struct Session {
    cube: Cube,
    controls: Controls,
    style: NetStyle,
    default_scramble_length: ScrambleLength,
    /// Set by the cube's listener whenever tiles change.
    dirty: Rc<Cell<bool>>,
}

impl Session {
    /// Constructs a session with a solved cube.
    pub fn new(style: NetStyle, default_scramble_length: ScrambleLength) -> Self {
        let dirty = Rc::new(Cell::new(false));
        let flag = Rc::clone(&dirty);
        let cube = Cube::with_listener(move |_: &Faces| flag.set(true));
        Self {
            cube,
            controls: Controls::default(),
            style,
            default_scramble_length,
            dirty,
        }
    }

    /// Returns the cube.
    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    /// Returns whether the tiles have changed since the last call, and clears
    /// the flag.
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    /// Returns the net as it should be drawn now.
    pub fn render(&self) -> String {
        render_net(self.cube.faces(), &self.style, &self.controls)
    }

    /// Runs a command. Returns whether the selection changed and whether to
    /// keep going.
    pub fn execute(&mut self, command: Command) -> (bool, Flow) {
        log::debug!("executing {command:?}");
        match command {
            Command::Move(m) => self.cube.apply(m),
            Command::Reset => self.cube.reset(),
            Command::Scramble(len) => {
                let len = len.unwrap_or(self.default_scramble_length);
                let moves = self.cube.scramble(len.get());
                log::info!("scrambled with {}", moves.iter().join(" "));
            }
            Command::Select(dir) => {
                self.controls.select(dir);
                return (true, Flow::Continue);
            }
            Command::Nudge(dir) => match self.controls.nudge(dir) {
                Some(m) => self.cube.apply(m),
                None => log::debug!("nothing selected to nudge {dir}"),
            },
            Command::Help => (),
            Command::Quit => return (false, Flow::Quit),
        }
        (false, Flow::Continue)
    }

    /// Reads commands from `input` until it ends or `quit` is entered,
    /// redrawing the net on `output` whenever the tiles or the selection
    /// change.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        write!(output, "{}", self.render())?;
        self.take_dirty();

        write!(output, "> ")?;
        output.flush()?;
        for line in input.lines() {
            let commands = match parse_line(&line?) {
                Ok(commands) => commands,
                Err(e) => {
                    eprintln!("error: {e}");
                    write!(output, "> ")?;
                    output.flush()?;
                    continue;
                }
            };

            let mut selection_changed = false;
            let mut flow = Flow::Continue;
            for command in commands {
                if command == Command::Help {
                    writeln!(output, "{}", help_text())?;
                }
                let (selected, f) = self.execute(command);
                selection_changed |= selected;
                flow = f;
                if flow == Flow::Quit {
                    break;
                }
            }

            if self.take_dirty() || selection_changed {
                write!(output, "{}", self.render())?;
                if self.cube().is_solved() {
                    writeln!(output, "solved!")?;
                }
            }
            if flow == Flow::Quit {
                return Ok(());
            }
            write!(output, "> ")?;
            output.flush()?;
        }
        writeln!(output)?;
        Ok(())
    }
}
