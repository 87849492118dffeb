//! User preferences.
//!
//! Preferences are layered: the defaults baked into the binary come first,
//! and the user's YAML file overrides any subset of them.

#[macro_use]
extern crate lazy_static;

use std::path::Path;

use cubeface_core::FaceId;
use eyre::Result;
use serde::{Deserialize, Serialize};

mod rgb;

pub use rgb::Rgb;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

lazy_static! {
    /// Preferences used when the user has set nothing.
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

/// User preferences.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    /// Number of moves used by `scramble` when no length is given.
    pub scramble_length: u32,
    /// Whether to draw tiles in color.
    pub color: bool,
    /// Whether to draw the back face in the net.
    pub show_back: bool,
    /// Whether to draw the tile value on each tile.
    pub tile_numbers: bool,
    /// Color of each face.
    pub colors: FaceColors,
}

impl Default for Preferences {
    fn default() -> Self {
        DEFAULT_PREFS.clone()
    }
}

/// Color of each face's tiles.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct FaceColors {
    pub front: Rgb,
    pub left: Rgb,
    pub right: Rgb,
    pub up: Rgb,
    pub down: Rgb,
    pub back: Rgb,
}

impl FaceColors {
    /// Returns the color of the tiles that belong to `face`.
    pub fn get(&self, face: FaceId) -> Rgb {
        match face {
            FaceId::Front => self.front,
            FaceId::Left => self.left,
            FaceId::Right => self.right,
            FaceId::Up => self.up,
            FaceId::Down => self.down,
            FaceId::Back => self.back,
        }
    }
}

impl Preferences {
    /// Loads preferences from the baked-in defaults and the user preferences
    /// file at `path`, or the default location if `path` is `None`.
    ///
    /// If the user file cannot be parsed, it is moved to a backup file and the
    /// defaults are returned.
    pub fn load(path: Option<&Path>) -> Self {
        lazy_static::initialize(&DEFAULT_PREFS);

        let mut config = config::Config::builder();

        // Load default preferences.
        config = config.add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));

        // Load user preferences.
        let user_path = match path {
            Some(p) => Some(p),
            None => match cubeface_paths::prefs_file() {
                Ok(p) => Some(p),
                Err(e) => {
                    log::warn!("error locating user preferences: {e}");
                    None
                }
            },
        };
        if let Some(p) = user_path {
            log::debug!("loading preferences from {}", p.display());
            config = config.add_source(
                config::File::from(p)
                    .format(PREFS_FILE_FORMAT)
                    .required(false),
            );
        }

        config
            .build()
            .and_then(|c| c.try_deserialize::<Preferences>())
            .unwrap_or_else(|e| {
                log::warn!("error loading preferences: {e}");
                if let Some(p) = user_path {
                    cubeface_paths::move_to_backup_file(p);
                }
                DEFAULT_PREFS.clone()
            })
    }

    /// Saves preferences to the file at `path`, or the default location if
    /// `path` is `None`.
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let path = match path {
            Some(p) => p,
            None => cubeface_paths::prefs_file()?,
        };
        if let Some(p) = path.parent() {
            std::fs::create_dir_all(p)?;
        }
        serde_norway::to_writer(std::fs::File::create(path)?, self)?;
        log::info!("saved preferences to {}", path.display());
        Ok(())
    }

    /// Returns the preferences as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_norway::to_string(self)?)
    }
}
