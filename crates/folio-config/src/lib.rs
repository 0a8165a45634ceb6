use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Remote endpoints the front-end talks to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub blog_url: String,
    pub visitor_url: String,
    pub recommendations_url: String,
    pub codeforces_url: String,
    pub codeforces_handle: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            blog_url: "https://localhost:7001/api/Blog".to_string(),
            visitor_url: "https://localhost:7001/api/Statics/AddVisitor".to_string(),
            recommendations_url: "https://wassim221e.pythonanywhere.com/api/recommendations"
                .to_string(),
            codeforces_url: "https://codeforces.com/api".to_string(),
            codeforces_handle: "Wassim221e".to_string(),
            timeout_secs: 15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Language tag of the editor UI (`en`, `ar`)
    pub locale: String,
    pub read_only: bool,
    /// Use the reduced tool set without media blocks
    pub basic_tools: bool,
    /// Where unsaved article drafts are written
    pub drafts_path: PathBuf,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            read_only: false,
            basic_tools: false,
            drafts_path: PathBuf::from("~/.local/share/folio/drafts"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureSettings {
    pub threshold: f64,
    pub prevent_scroll: bool,
    pub edge_band: Option<f64>,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            threshold: 60.0,
            prevent_scroll: false,
            edge_band: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub editor: EditorSettings,
    pub gesture: GestureSettings,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the drafts path
        config.editor.drafts_path = Self::expand_path(&config.editor.drafts_path)
            .unwrap_or(config.editor.drafts_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Load the user's config, falling back to defaults when there is none
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Ok(Self::load()?.unwrap_or_else(|| {
            let mut config = Self::default();
            config.editor.drafts_path = Self::expand_path(&config.editor.drafts_path)
                .unwrap_or(config.editor.drafts_path);
            config
        }))
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/folio");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
