//! Configuration loading and management

use crate::constants::{CONFIG_FILENAMES, DEFAULT_RESOURCE_ROOT, DEFAULT_TEMPLATE_SUFFIX};
use crate::error::{Error, Result};
use crate::locale::Locale;
use crate::types::Engine;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConfigV1 {
    /// Directory holding template resources, relative to the config directory
    #[serde(default = "get_default_resource_root")]
    pub resource_root: PathBuf,
    #[serde(default = "get_default_template_suffix")]
    pub template_suffix: String,
    /// Locale tag, empty for the invariant locale
    #[serde(default)]
    pub locale: String,
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default)]
    pub engine: Engine,
}

impl Default for ConfigV1 {
    fn default() -> Self {
        Self {
            resource_root: get_default_resource_root(),
            template_suffix: get_default_template_suffix(),
            locale: String::new(),
            default_value: None,
            engine: Engine::default(),
        }
    }
}

impl ConfigV1 {
    pub fn validate(&self) -> Result<(), Error> {
        if self.template_suffix.is_empty() {
            return Err(Error::ConfigValidation("template_suffix must not be empty".into()));
        }
        if !self.template_suffix.starts_with('.') || self.template_suffix.len() < 2 {
            return Err(Error::ConfigValidation(
                "template_suffix must start with '.' and have at least 1 character after it"
                    .into(),
            ));
        }
        if self.resource_root.as_os_str().is_empty() {
            return Err(Error::ConfigValidation("resource_root must not be empty".into()));
        }
        Locale::parse(&self.locale)
            .map_err(|e| Error::ConfigValidation(format!("locale '{}' is invalid: {e}", self.locale)))?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "schemaVersion")]
pub enum Config {
    #[serde(rename = "v1")]
    V1(ConfigV1),
}

impl Config {
    pub fn load_config<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref();

        for config_file_name in CONFIG_FILENAMES.iter() {
            let config_file_path = config_dir.join(config_file_name);

            if config_file_path.exists() {
                debug!("Loading configuration from '{}'", config_file_path.display());
                let content = std::fs::read_to_string(config_file_path)?;
                let config: Config = match *config_file_name {
                    "letterpress.json" => serde_json::from_str(&content)?,
                    _ => serde_yaml::from_str(&content)?,
                };

                return Ok(config);
            }
        }

        Err(Error::ConfigNotFound {
            config_dir: config_dir.display().to_string(),
            config_files: CONFIG_FILENAMES.join(", "),
        })
    }

    /// Loads and validates the configuration in `config_dir`, falling back to
    /// defaults when the directory holds no configuration file.
    pub fn load_or_default<P: AsRef<Path>>(config_dir: P) -> Result<ConfigV1> {
        let config = match Self::load_config(config_dir) {
            Ok(Config::V1(config)) => config,
            Err(Error::ConfigNotFound { config_dir, .. }) => {
                debug!("No configuration file in '{config_dir}', using defaults");
                ConfigV1::default()
            }
            Err(e) => return Err(e),
        };
        config.validate()?;
        Ok(config)
    }
}

fn get_default_resource_root() -> PathBuf {
    PathBuf::from(DEFAULT_RESOURCE_ROOT)
}

fn get_default_template_suffix() -> String {
    DEFAULT_TEMPLATE_SUFFIX.to_string()
}
