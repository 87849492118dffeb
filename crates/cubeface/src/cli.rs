use std::path::PathBuf;

use cubeface_core::{Cube, Move, ScrambleLength};
use cubeface_prefs::Preferences;
use eyre::{Context, Result};
use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::controls::Controls;
use crate::render::{NetStyle, render_net};
use crate::session::Session;

/// 3x3x3 puzzle cube in the terminal
///
/// If no subcommand is specified, then an interactive session is started.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Option<Subcommand>,

    /// Preferences file to use instead of the default one.
    #[arg(long, global = true)]
    pub prefs: Option<PathBuf>,

    /// Draw the cube without color.
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Start an interactive session reading commands from stdin.
    Play,
    /// Scramble a solved cube and print the moves and the result.
    Scramble {
        /// Number of random moves (default from preferences).
        #[arg(allow_negative_numbers = true)]
        length: Option<ScrambleLength>,
        /// Seed for a reproducible scramble.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Apply moves to a solved cube and print the result.
    Apply {
        /// Move names (such as `u`, `rr`, or `turn_left`).
        moves: Vec<Move>,
    },
    /// Print every move name.
    Moves,
    /// Print the effective preferences as YAML.
    Prefs {
        /// Also write them to the preferences file.
        #[arg(long)]
        init: bool,
    },
}

pub(crate) fn exec(args: Args) -> Result<()> {
    let prefs = Preferences::load(args.prefs.as_deref());
    let style = NetStyle::from_prefs(&prefs, !args.no_color);
    let default_len = ScrambleLength::from(prefs.scramble_length);

    match args.subcommand.unwrap_or(Subcommand::Play) {
        Subcommand::Play => {
            println!("type `help` for a list of commands");
            let mut session = Session::new(style, default_len);
            session.run(std::io::stdin().lock(), std::io::stdout().lock())
        }

        Subcommand::Scramble { length, seed } => {
            let len = length.unwrap_or(default_len).get();
            let mut cube = Cube::new();
            let moves = match seed {
                Some(seed) => cube.scramble_seeded(len, seed),
                None => cube.scramble(len),
            };
            println!("{}", moves.iter().join(" "));
            print!("{}", render_net(cube.faces(), &style, &Controls::default()));
            Ok(())
        }

        Subcommand::Apply { moves } => {
            let mut cube = Cube::new();
            cube.apply_all(moves);
            print!("{}", render_net(cube.faces(), &style, &Controls::default()));
            if cube.is_solved() {
                println!("solved!");
            }
            Ok(())
        }

        Subcommand::Moves => {
            for m in Move::iter() {
                println!("{:<12} {:<14} undone by {}", m.name(), m.kind().to_string(), m.inverse());
            }
            Ok(())
        }

        Subcommand::Prefs { init } => {
            print!("{}", prefs.to_yaml()?);
            if init {
                prefs
                    .save(args.prefs.as_deref())
                    .wrap_err("error saving preferences")?;
                let path = match &args.prefs {
                    Some(p) => p.as_path(),
                    None => cubeface_paths::prefs_file()?,
                };
                eprintln!("saved preferences to {}", path.display());
            }
            Ok(())
        }
    }
}
