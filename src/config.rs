//! Configuration and CLI argument handling

use crate::desktop::DEFAULT_PLAYLIST_URL;
use crate::domain::{MinutesField, Theme, TimerSettings};
use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "focus-timer";
const CONFIG_FILE: &str = "config.json";
const LOG_FILE: &str = "focus-timer.log";

/// CLI argument parsing structure
#[derive(Parser, Debug, Default)]
#[command(name = "focus-timer")]
#[command(about = "A terminal work/break timer with an attached task list", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON config file. Defaults to <config dir>/focus-timer/config.json when present
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Work duration in minutes (1-60)
    #[arg(short, long, value_name = "MINUTES")]
    pub work: Option<u32>,

    /// Break duration in minutes (1-30)
    #[arg(short = 'b', long = "break", value_name = "MINUTES")]
    pub break_minutes: Option<u32>,

    /// Starting theme
    #[arg(short, long, value_enum)]
    pub theme: Option<Theme>,

    /// Disable the desktop notification when a phase finishes
    #[arg(long)]
    pub no_notify: bool,

    /// Where to write the log file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Optional settings read from the config file. Every key may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub work_minutes: Option<u32>,
    pub break_minutes: Option<u32>,
    pub theme: Option<Theme>,
    pub playlist_url: Option<String>,
    pub notifications: Option<bool>,
}

/// Fully resolved configuration: defaults, then file, then CLI flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub timer: TimerSettings,
    pub theme: Theme,
    pub playlist_url: String,
    pub notifications: bool,
    pub log_file: PathBuf,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timer: TimerSettings::default(),
            theme: Theme::default(),
            playlist_url: DEFAULT_PLAYLIST_URL.to_string(),
            notifications: true,
            log_file: default_log_file(),
            verbose: false,
        }
    }
}

impl Config {
    /// Load the config file (explicit or default location) and apply CLI overrides
    pub fn load(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => load_file(path)?,
            None => match default_config_file() {
                Some(path) if path.exists() => load_file(&path)?,
                _ => FileConfig::default(),
            },
        };
        Self::resolve(cli, file)
    }

    /// Layer `file` and `cli` over the defaults and validate the result
    pub fn resolve(cli: &Cli, file: FileConfig) -> Result<Self> {
        let defaults = Self::default();

        let work = cli.work.or(file.work_minutes).unwrap_or(defaults.timer.work_minutes);
        let brk = cli
            .break_minutes
            .or(file.break_minutes)
            .unwrap_or(defaults.timer.break_minutes);

        let timer = TimerSettings {
            work_minutes: MinutesField::Work
                .validate(work)
                .context("invalid work duration")?,
            break_minutes: MinutesField::Break
                .validate(brk)
                .context("invalid break duration")?,
        };

        Ok(Self {
            timer,
            theme: cli.theme.or(file.theme).unwrap_or(defaults.theme),
            playlist_url: file.playlist_url.unwrap_or(defaults.playlist_url),
            notifications: !cli.no_notify && file.notifications.unwrap_or(true),
            log_file: cli.log_file.clone().unwrap_or(defaults.log_file),
            verbose: cli.verbose,
        })
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

/// Read and parse a JSON config file
pub fn load_file(path: &Path) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// `<config dir>/focus-timer/config.json`, if the platform has a config dir
pub fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// `<data dir>/focus-timer/focus-timer.log`, falling back to the temp dir
pub fn default_log_file() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
        .join(LOG_FILE)
}
