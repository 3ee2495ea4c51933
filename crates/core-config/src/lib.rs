//! Configuration loading and parsing.
//!
//! Reads `kiln.toml` (or an override path supplied by the binary). Every
//! field is optional; absent tables and keys fall back to built-in defaults,
//! unknown keys are ignored, and a file that fails to parse is reported with
//! a warning and replaced by defaults so a bad config never blocks editing.
//!
//! ```toml
//! [editor]
//! tab_stop = 8
//! quit_times = 3
//! message_timeout_secs = 5
//!
//! [input]
//! poll_timeout_ms = 100
//! ```

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf, time::Duration};
use tracing::{info, warn};

const FILE_NAME: &str = "kiln.toml";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    #[serde(default = "EditorConfig::default_tab_stop")]
    pub tab_stop: usize,
    #[serde(default = "EditorConfig::default_quit_times")]
    pub quit_times: u32,
    #[serde(default = "EditorConfig::default_message_timeout_secs")]
    pub message_timeout_secs: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_stop: Self::default_tab_stop(),
            quit_times: Self::default_quit_times(),
            message_timeout_secs: Self::default_message_timeout_secs(),
        }
    }
}

impl EditorConfig {
    const fn default_tab_stop() -> usize {
        8
    }
    const fn default_quit_times() -> u32 {
        3
    }
    const fn default_message_timeout_secs() -> u64 {
        5
    }

    pub fn message_timeout(&self) -> Duration {
        Duration::from_secs(self.message_timeout_secs)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct InputConfig {
    #[serde(default = "InputConfig::default_poll_timeout_ms")]
    pub poll_timeout_ms: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            poll_timeout_ms: Self::default_poll_timeout_ms(),
        }
    }
}

impl InputConfig {
    const fn default_poll_timeout_ms() -> u64 {
        100
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_ms)
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub input: InputConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub path: Option<PathBuf>, // file the values came from, if any
    pub file: ConfigFile,
}

/// Working directory `kiln.toml` first, then the platform config dir
/// (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("kiln").join(FILE_NAME);
    }
    local
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            info!(target: "config", path = %path.display(), "config_loaded");
            let mut cfg = Config {
                path: Some(path),
                file,
            };
            cfg.normalize();
            Ok(cfg)
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed");
            Ok(Config::default())
        }
    }
}

impl Config {
    /// Clamp values that would break the editor (a zero tab stop or zero
    /// quit confirmations) up to their minimum of one.
    pub fn normalize(&mut self) {
        let editor = &mut self.file.editor;
        if editor.tab_stop == 0 {
            info!(target: "config", raw = 0, clamped = 1, "tab_stop_clamped");
            editor.tab_stop = 1;
        }
        if editor.quit_times == 0 {
            info!(target: "config", raw = 0, clamped = 1, "quit_times_clamped");
            editor.quit_times = 1;
        }
    }

    pub fn editor(&self) -> &EditorConfig {
        &self.file.editor
    }

    pub fn input(&self) -> &InputConfig {
        &self.file.input
    }
}
