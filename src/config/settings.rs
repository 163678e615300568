//! Effective settings: the configuration file with command-line overrides applied

use crate::config::loader::{Config, ConfigV1};
use crate::error::Result;
use crate::locale::Locale;
use crate::provider::{FileMessageProvider, FileResourceLocator};
use crate::renderer::RenderStrategy;
use crate::types::Engine;
use log::debug;
use std::path::{Path, PathBuf};

/// Values that take precedence over the configuration file when present.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub resource_root: Option<PathBuf>,
    pub locale: Option<String>,
    pub engine: Option<Engine>,
    pub default_value: Option<String>,
}

/// Everything needed to locate and render messages.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub resource_root: PathBuf,
    pub template_suffix: String,
    pub locale: Locale,
    pub default_value: Option<String>,
    pub engine: Engine,
}

impl Settings {
    /// Resolves settings from a validated configuration.
    ///
    /// A relative `resource_root` from the configuration is taken relative
    /// to `config_dir`; an overriding resource root is used as given.
    pub fn resolve<P: AsRef<Path>>(config_dir: P, config: ConfigV1, overrides: Overrides) -> Result<Self> {
        let resource_root = match overrides.resource_root {
            Some(root) => root,
            None => config_dir.as_ref().join(&config.resource_root),
        };
        let locale = Locale::parse(overrides.locale.as_deref().unwrap_or(&config.locale))?;
        let settings = Self {
            resource_root,
            template_suffix: config.template_suffix,
            locale,
            default_value: overrides.default_value.or(config.default_value),
            engine: overrides.engine.unwrap_or(config.engine),
        };
        debug!("Effective settings: {settings:?}");
        Ok(settings)
    }

    /// Loads the configuration in `config_dir` and applies `overrides`.
    pub fn load<P: AsRef<Path>>(config_dir: P, overrides: Overrides) -> Result<Self> {
        let config = Config::load_or_default(config_dir.as_ref())?;
        Self::resolve(config_dir, config, overrides)
    }

    pub fn locator(&self) -> FileResourceLocator {
        FileResourceLocator::new(&self.resource_root).with_suffix(self.template_suffix.clone())
    }

    pub fn render_strategy(&self) -> Result<RenderStrategy> {
        RenderStrategy::from_settings(self.engine, self.locale.clone(), self.default_value.clone())
    }

    /// Builds a message provider for these settings.
    pub fn message_provider(&self) -> Result<FileMessageProvider> {
        Ok(FileMessageProvider::new(self.render_strategy()?, self.locator(), self.locale.clone()))
    }
}
