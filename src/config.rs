use crate::collectors::drm::DEFAULT_DRM_PATH;
use crate::error::{DisplayfetchError, Result};
use crate::utils::command::DEFAULT_TIMEOUT;
use dirs::config_dir;
use serde::Deserialize;
use std::{collections::HashMap, fs, path::Path, path::PathBuf, time::Duration};

const SYSTEM_CONFIG_PATH: &str = "/usr/share/displayfetch/config.toml";

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub colors: HashMap<String, String>,
    pub probes: ProbeConfig,
}

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: ColorMode,
    /// Defaults to following the color toggle
    pub show_session: Option<bool>,
    /// Key of `[colors]` or a color name / hex value
    pub value_color: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            show_session: None,
            value_color: "cyan".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ProbeConfig {
    pub drm_path: String,
    pub xrandr_command: String,
    pub glxinfo_command: String,
    pub lspci_command: String,
    pub command_timeout_ms: u64,
    pub scale_factor: Option<u32>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            drm_path: DEFAULT_DRM_PATH.to_string(),
            xrandr_command: "xrandr".to_string(),
            glxinfo_command: "glxinfo".to_string(),
            lspci_command: "lspci".to_string(),
            command_timeout_ms: DEFAULT_TIMEOUT.as_millis() as u64,
            scale_factor: None,
        }
    }
}

impl ProbeConfig {
    pub fn drm_root(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.drm_path).to_string())
    }

    pub fn command_timeout(&self) -> Duration {
        Duration::from_millis(self.command_timeout_ms)
    }
}

impl Config {
    /// Whether to emit ANSI colors; `auto` follows the terminal and `NO_COLOR`.
    pub fn color_enabled(&self, stdout_is_tty: bool, no_color: bool) -> bool {
        match self.display.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => stdout_is_tty && !no_color,
        }
    }
}

/// Per-user config path, e.g. `~/.config/displayfetch/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("displayfetch/config.toml"))
}

/// Load the user config, then the system-wide one, else built-in defaults
pub fn load_config() -> Result<Config> {
    let candidates = user_config_path()
        .into_iter()
        .chain(std::iter::once(PathBuf::from(SYSTEM_CONFIG_PATH)));

    for path in candidates {
        if path.exists() {
            log::debug!("Loading config from {}", path.display());
            return load_config_from(&path);
        }
    }

    Ok(Config::default())
}

pub fn load_config_from<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let config_data = fs::read_to_string(path)
        .map_err(|err| DisplayfetchError::Config(format!("{}: {}", path.display(), err)))?;
    Ok(toml::de::from_str(&config_data)?)
}
