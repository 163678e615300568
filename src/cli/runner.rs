use crate::{
    cli::{Commands, LocateArgs, RenderArgs},
    config::Settings,
    error::Result,
    ioutils::load_model,
    provider::MessageProvider,
};
use log::debug;

/// Main CLI runner dispatching a parsed command
pub struct Runner {
    command: Commands,
}

impl Runner {
    pub fn new(command: Commands) -> Self {
        Self { command }
    }

    /// Executes the command and returns the text to print
    pub fn run(self) -> Result<String> {
        match &self.command {
            Commands::Render(args) => self.render(args),
            Commands::Locate(args) => self.locate(args),
        }
    }

    /// Loads the model and renders the named template
    fn render(&self, args: &RenderArgs) -> Result<String> {
        let settings = Settings::load(&args.lookup.config_dir, args.overrides())?;
        let model = load_model(args.model.as_deref(), args.model_file.as_deref())?;
        let provider = settings.message_provider()?;
        debug!(
            "Rendering '{}' with the {} engine for locale '{}'",
            args.lookup.name, settings.engine, settings.locale
        );
        provider.render_message(&args.lookup.name, &model)
    }

    /// Resolves the resource path the named template would be read from
    fn locate(&self, args: &LocateArgs) -> Result<String> {
        let settings = Settings::load(&args.lookup.config_dir, args.lookup.overrides())?;
        let locator = settings.locator();
        for candidate in locator.candidates(&args.lookup.name, &settings.locale) {
            debug!("Candidate: {}", candidate.display());
        }
        let resource = locator.locate_resource(&args.lookup.name, &settings.locale)?;
        Ok(resource.path.display().to_string())
    }
}

/// Main entry point for CLI execution
pub fn run(command: Commands) -> Result<String> {
    let runner = Runner::new(command);
    runner.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use crate::error::Error;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> TempDir {
        let dir = TempDir::new().unwrap();
        let templates = dir.path().join("templates");
        fs::create_dir(&templates).unwrap();
        fs::write(templates.join("greet.template"), "Hello {name}").unwrap();
        fs::write(templates.join("greet.de.template"), "Hallo {name}, Summe {total:N2}").unwrap();
        fs::write(dir.path().join("letterpress.yaml"), "schemaVersion: v1\nlocale: de-DE\n").unwrap();
        dir
    }

    fn command(args: &[&str]) -> Commands {
        Cli::parse_from(args).command
    }

    #[test]
    fn renders_with_configured_locale() {
        let dir = setup();
        let config_dir = dir.path().to_str().unwrap();
        let output = run(command(&[
            "letterpress",
            "render",
            "greet",
            "--config-dir",
            config_dir,
            "--model",
            r#"{"name": "Ada", "total": 1234.5}"#,
        ]))
        .unwrap();
        assert_eq!(output, "Hallo Ada, Summe 1.234,50");
    }

    #[test]
    fn locale_flag_overrides_config() {
        let dir = setup();
        let config_dir = dir.path().to_str().unwrap();
        let output = run(command(&[
            "letterpress",
            "render",
            "greet",
            "--config-dir",
            config_dir,
            "--locale",
            "en",
            "--model",
            r#"{"name": "Ada"}"#,
        ]))
        .unwrap();
        assert_eq!(output, "Hello Ada");
    }

    #[test]
    fn locate_prints_resolved_path() {
        let dir = setup();
        let config_dir = dir.path().to_str().unwrap();
        let output =
            run(command(&["letterpress", "locate", "greet", "--config-dir", config_dir])).unwrap();
        assert_eq!(output, dir.path().join("templates").join("greet.de.template").display().to_string());
    }

    #[test]
    fn unknown_template_is_not_found() {
        let dir = setup();
        let config_dir = dir.path().to_str().unwrap();
        let result = run(command(&["letterpress", "locate", "farewell", "--config-dir", config_dir]));
        assert!(matches!(result, Err(Error::ResourceNotFound { .. })));
    }
}
