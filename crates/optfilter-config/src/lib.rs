use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use optfilter_core::{Captions, CoreError, FilterSettings, NormalizeRules, Normalizer};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "optfilter";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_CONTAINER: &str = "data_table";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub container: String,
    pub rules: NormalizeRules,
    pub captions: Captions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            container: DEFAULT_CONTAINER.to_string(),
            rules: NormalizeRules::default(),
            captions: Captions::default(),
        }
    }
}

impl AppConfig {
    pub fn settings(&self) -> FilterSettings {
        FilterSettings {
            normalizer: Normalizer::new(self.rules.clone()),
            captions: self.captions.clone(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid container value: {0:?}")]
    InvalidContainer(String),
    #[error("invalid normalize.joiner value: {0:?}")]
    InvalidJoiner(String),
    #[error("invalid normalize.prefix value: {0:?}")]
    InvalidPrefix(String),
    #[error("invalid captions.{field} value: caption cannot be empty")]
    InvalidCaption { field: &'static str },
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    container: Option<String>,
    normalize: Option<NormalizeFile>,
    captions: Option<CaptionsFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NormalizeFile {
    joiner: Option<String>,
    prefix: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CaptionsFile {
    all: Option<String>,
    general: Option<String>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(container) = parsed.container {
        let trimmed = container.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidContainer(container));
        }
        config.container = trimmed.to_string();
    }

    if let Some(normalize) = parsed.normalize {
        let joiner = match normalize.joiner {
            Some(raw) => parse_joiner(&raw)?,
            None => config.rules.joiner(),
        };
        let prefix = normalize
            .prefix
            .unwrap_or_else(|| config.rules.prefix().to_string());
        config.rules = NormalizeRules::new(joiner, &prefix).map_err(|err| match err {
            CoreError::InvalidJoiner(ch) => ConfigError::InvalidJoiner(ch.to_string()),
            _ => ConfigError::InvalidPrefix(prefix.clone()),
        })?;
    }

    if let Some(captions) = parsed.captions {
        if let Some(all) = captions.all {
            config.captions.all = parse_caption(&all, "all")?;
        }
        if let Some(general) = captions.general {
            config.captions.general = parse_caption(&general, "general")?;
        }
    }

    Ok(config)
}

fn parse_joiner(raw: &str) -> Result<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(ConfigError::InvalidJoiner(raw.to_string())),
    }
}

fn parse_caption(raw: &str, field: &'static str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidCaption { field });
    }
    Ok(trimmed.to_string())
}
