use serde::{Deserialize, Serialize};

use crate::notification::{DISPLAY_DURATION_SECS, PANEL_CAPACITY};
use crate::panel::TOGGLE_COMMAND;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PanelSettings {
    /// Panel rectangle as `(left, top, right, bottom)` in host window
    /// coordinates.
    #[serde(default = "default_rect")]
    pub rect: (i32, i32, i32, i32),
    /// Maximum number of messages kept before the oldest is evicted.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Seconds the panel stays visible after the last message.
    #[serde(default = "default_display_duration")]
    pub display_duration_secs: f32,
    /// Host command bound to the pin toggle.
    #[serde(default = "default_toggle_command")]
    pub toggle_command: String,
    /// When enabled the logger is initialised at debug level.
    #[serde(default)]
    pub debug_logging: bool,
}

fn default_rect() -> (i32, i32, i32, i32) {
    (20, 20, 500, 160)
}

fn default_capacity() -> usize {
    PANEL_CAPACITY
}

fn default_display_duration() -> f32 {
    DISPLAY_DURATION_SECS
}

fn default_toggle_command() -> String {
    TOGGLE_COMMAND.to_string()
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            rect: default_rect(),
            capacity: default_capacity(),
            display_duration_secs: default_display_duration(),
            toggle_command: default_toggle_command(),
            debug_logging: false,
        }
    }
}

/// Load settings from `path`, falling back to defaults when the file is
/// missing or empty.
pub fn load_settings(path: &str) -> PanelSettings {
    match load_internal(path) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("failed to load panel settings: {e}");
            PanelSettings::default()
        }
    }
}

fn load_internal(path: &str) -> anyhow::Result<PanelSettings> {
    let content = std::fs::read_to_string(path).unwrap_or_default();
    if content.is_empty() {
        return Ok(PanelSettings::default());
    }
    Ok(serde_json::from_str(&content)?)
}

pub fn save_settings(path: &str, settings: &PanelSettings) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, json)?;
    Ok(())
}
