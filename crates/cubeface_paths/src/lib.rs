//! Locations of files read and written by `cubeface`.

use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use eyre::{OptionExt, Result};

#[macro_use]
extern crate lazy_static;

/// Whether this is an official build of the software (as opposed to a local
/// build).
pub const IS_OFFICIAL_BUILD: bool = std::option_env!("CUBEFACE_OFFICIAL_BUILD").is_some();

const PREFS_FILE_NAME: &str = "cubeface-prefs";
const PREFS_FILE_EXTENSION: &str = "yaml";

/// Name of the file that, if present next to the executable, forces the
/// system directories to be used.
const NONPORTABLE_MARKER: &str = "nonportable";

lazy_static! {
    static ref PATHS: Option<AppPaths> = app_paths();
}

fn get() -> Result<&'static AppPaths> {
    PATHS.as_ref().ok_or_eyre("no paths")
}

/// Returns the user preferences file.
pub fn prefs_file() -> Result<&'static Path> {
    Ok(&get()?.prefs_file)
}

/// Renames a file to create a backup. Emits a log message indicating success or
/// failure.
pub fn move_to_backup_file(original: &Path) {
    let now = time::OffsetDateTime::now_local().unwrap_or_else(|_| time::OffsetDateTime::now_utc());
    let backup_path = backup_path(original, now);

    match std::fs::rename(original, &backup_path) {
        Ok(()) => {
            log::info!(
                "backup of {} stored at {}",
                original.display(),
                backup_path.display(),
            );
        }
        Err(e) => {
            if original.is_file() {
                log::error!("error backing up {}: {e}", original.display());
            }
        }
    }
}

fn backup_path(original: &Path, now: time::OffsetDateTime) -> PathBuf {
    let stem = match original.file_stem() {
        Some(stem) => stem.to_string_lossy().into_owned(),
        None => "unknown".to_string(),
    };
    let extension = match original.extension() {
        Some(extension) => extension.to_string_lossy().into_owned(),
        None => "txt".to_string(),
    };

    original.with_file_name(format!(
        "{stem}_{:04}-{:02}-{:02}_{:02}-{:02}-{:02}_bak.{extension}",
        now.year(),
        now.month() as u8,
        now.day(),
        now.hour(),
        now.minute(),
        now.second(),
    ))
}

/// Paths to external files.
struct AppPaths {
    /// Path to the user preferences file.
    prefs_file: PathBuf,
}

/// Returns the app paths.
///
/// - For dev builds, uses the workspace directory.
/// - For official builds in portable mode (the default), uses the directory
///   of the current executable.
/// - For official builds in nonportable mode, uses the system config
///   directory.
///
/// If the preferred behavior fails, then this function falls back on the
/// other.
fn app_paths() -> Option<AppPaths> {
    match is_nonportable() {
        true => nonportable_paths().or_else(portable_paths),
        false => portable_paths().or_else(nonportable_paths),
    }
}

fn nonportable_paths() -> Option<AppPaths> {
    match ProjectDirs::from("", "", "cubeface") {
        Some(dirs) => {
            log::info!("using nonportable paths");
            Some(AppPaths {
                prefs_file: dirs
                    .config_dir()
                    .join(format!("{PREFS_FILE_NAME}.{PREFS_FILE_EXTENSION}")),
            })
        }
        None => {
            log::error!("error getting nonportable directories");
            None
        }
    }
}

fn portable_paths() -> Option<AppPaths> {
    match portable_dir() {
        Some(dir) => {
            log::info!("using portable paths");
            Some(AppPaths {
                prefs_file: dir.join(format!("{PREFS_FILE_NAME}.{PREFS_FILE_EXTENSION}")),
            })
        }
        None => {
            log::error!("error getting portable directory");
            None
        }
    }
}

fn portable_dir() -> Option<PathBuf> {
    if IS_OFFICIAL_BUILD {
        let exe_path = env::current_exe().ok()?.canonicalize().ok()?;
        Some(exe_path.parent()?.to_path_buf())
    } else {
        // `crates/cubeface_paths/` -> workspace root
        Some(Path::new(env!("CARGO_MANIFEST_DIR")).parent()?.parent()?.to_path_buf())
    }
}

fn is_nonportable() -> bool {
    match portable_dir() {
        Some(dir) => dir.join(NONPORTABLE_MARKER).exists(),
        None => false,
    }
}
