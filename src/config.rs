//! User configuration (`config.toml`).
//!
//! Loading never fails: anything wrong with the file is turned into a warning
//! and the defaults are used instead.

use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB
const MIN_COL_WIDTH: u16 = 4;
const MAX_COL_WIDTH: u16 = 40;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    col_width: Option<u16>,
    show_timer: Option<bool>,
    log_filter: Option<String>,
    log_file: Option<PathBuf>,
}

/// Effective settings after applying defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Width of each matrix column in the TUI table
    pub col_width: u16,
    /// Show the elapsed-time counter in the status bar
    pub show_timer: bool,
    /// `tracing` filter directive used when `ROWREDUCE_LOG` is unset
    pub log_filter: Option<String>,
    /// Where the TUI writes its log
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            col_width: 10,
            show_timer: true,
            log_filter: None,
            log_file: None,
        }
    }
}

impl Config {
    fn from_file(file: ConfigFile, warnings: &mut Vec<String>) -> Config {
        let defaults = Config::default();
        let col_width = match file.col_width {
            Some(w) if (MIN_COL_WIDTH..=MAX_COL_WIDTH).contains(&w) => w,
            Some(w) => {
                let clamped = w.clamp(MIN_COL_WIDTH, MAX_COL_WIDTH);
                warnings.push(format!(
                    "col_width {} out of range {}..={}; using {}",
                    w, MIN_COL_WIDTH, MAX_COL_WIDTH, clamped
                ));
                clamped
            }
            None => defaults.col_width,
        };
        Config {
            col_width,
            show_timer: file.show_timer.unwrap_or(defaults.show_timer),
            log_filter: file
                .log_filter
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            log_file: file.log_file,
        }
    }
}

/// Load the configuration from `explicit` or the user config dir.
///
/// Returns the effective config and any warnings to show the user.
pub fn load_config(explicit: Option<&PathBuf>) -> (Config, Vec<String>) {
    let mut warnings = Vec::new();
    let Some(path) = explicit.cloned().or_else(user_config_path) else {
        return (Config::default(), warnings);
    };

    if !path.exists() {
        if explicit.is_some() {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
        return (Config::default(), warnings);
    }

    match read_config_file(&path) {
        Ok(file) => {
            let config = Config::from_file(file, &mut warnings);
            (config, warnings)
        }
        Err(warning) => {
            warnings.push(warning);
            (Config::default(), warnings)
        }
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile, String> {
    let meta = std::fs::metadata(path)
        .map_err(|err| format!("Failed to read metadata for {}: {}", path.display(), err))?;
    if meta.len() > MAX_CONFIG_FILE_BYTES {
        return Err(format!(
            "Refusing to read {}: file too large ({} bytes, max {})",
            path.display(),
            meta.len(),
            MAX_CONFIG_FILE_BYTES
        ));
    }
    let content = std::fs::read_to_string(path)
        .map_err(|err| format!("Failed to read {}: {}", path.display(), err))?;
    parse_config(&content).map_err(|err| format!("Failed to parse {}: {}", path.display(), err))
}

fn parse_config(content: &str) -> Result<ConfigFile, toml::de::Error> {
    toml::from_str::<ConfigFile>(content)
}

fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "rowreduce")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}

/// Default log file location for the TUI.
pub fn default_log_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "rowreduce")?;
    let mut path = proj.cache_dir().to_path_buf();
    path.push("rowreduce.log");
    Some(path)
}
