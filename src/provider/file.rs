use crate::{
    constants::DEFAULT_TEMPLATE_SUFFIX,
    error::{Error, Result},
    locale::Locale,
    provider::interface::ResourceLocator,
};
use log::debug;
use std::{
    fs::File,
    io::{ErrorKind, Read},
    path::{Path, PathBuf},
};

/// A template resource found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedResource {
    pub path: PathBuf,
    pub text: String,
}

/// Locator for template resources stored as files under a root directory.
///
/// `greet` requested for `de-DE` tries `greet.de-DE.template`,
/// `greet.de.template` and finally `greet.template`.
#[derive(Debug, Clone)]
pub struct FileResourceLocator {
    root: PathBuf,
    suffix: String,
}

impl FileResourceLocator {
    /// Creates a locator for `root` using the default `.template` suffix.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf(), suffix: DEFAULT_TEMPLATE_SUFFIX.to_string() }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Paths tried for `name`, most specific first.
    pub fn candidates(&self, name: &str, locale: &Locale) -> Vec<PathBuf> {
        locale
            .chain()
            .iter()
            .map(|level| {
                if level.is_invariant() {
                    self.root.join(format!("{name}{}", self.suffix))
                } else {
                    self.root.join(format!("{name}.{}{}", level.tag(), self.suffix))
                }
            })
            .collect()
    }

    /// Finds the first existing candidate and reads it.
    ///
    /// # Arguments
    /// * `name` - Template name, must not be empty
    /// * `locale` - Requested locale
    ///
    /// # Returns
    /// * `Result<LocatedResource>` - Path and full text of the resource
    pub fn locate_resource(&self, name: &str, locale: &Locale) -> Result<LocatedResource> {
        if name.is_empty() {
            return Err(Error::InvalidArgument("template name must not be empty".into()));
        }

        let candidates = self.candidates(name, locale);
        for path in &candidates {
            debug!("Probing '{}'", path.display());
            let mut file = match File::open(path) {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(Error::IoError(e)),
            };
            let mut text = String::new();
            file.read_to_string(&mut text)?;
            debug!("Found template '{name}' at '{}'", path.display());
            return Ok(LocatedResource { path: path.clone(), text });
        }

        let first_candidate = candidates.first().cloned().unwrap_or_default();
        let last_candidate = candidates.last().cloned().unwrap_or_default();
        Err(Error::ResourceNotFound {
            template_name: name.to_string(),
            locale: locale.to_string(),
            first_candidate,
            last_candidate,
        })
    }
}

impl ResourceLocator for FileResourceLocator {
    fn locate(&self, name: &str, locale: &Locale) -> Result<String> {
        self.locate_resource(name, locale).map(|resource| resource.text)
    }
}
