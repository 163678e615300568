//! Locale identifiers and the fallback chain used for resource lookup and
//! culture-aware formatting.

use crate::error::{Error, Result};
use std::fmt::{self, Display};
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// A language identifier, or the invariant locale when no language is set.
///
/// Tags are canonicalized on parse, so `de-de`, `de_DE` and `de-DE` all
/// denote the same locale and produce the same resource names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Locale {
    id: Option<LanguageIdentifier>,
}

impl Locale {
    /// The locale-less identifier at the end of every fallback chain.
    pub fn invariant() -> Self {
        Self { id: None }
    }

    /// Parses a language tag. An empty tag or `und` yields the invariant locale.
    pub fn parse(tag: &str) -> Result<Self> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Ok(Self::invariant());
        }
        let id: LanguageIdentifier = tag.parse().map_err(|e| {
            Error::InvalidArgument(format!("'{tag}' is not a valid locale: {e}"))
        })?;
        if id == LanguageIdentifier::default() {
            return Ok(Self::invariant());
        }
        Ok(Self { id: Some(id) })
    }

    pub fn is_invariant(&self) -> bool {
        self.id.is_none()
    }

    /// Canonical tag text; empty for the invariant locale.
    pub fn tag(&self) -> String {
        self.id.as_ref().map(|id| id.to_string()).unwrap_or_default()
    }

    /// The locale with its most specific subtag stripped.
    ///
    /// Returns `None` for the invariant locale.
    pub fn parent(&self) -> Option<Locale> {
        let id = self.id.as_ref()?;
        let tag = id.to_string();
        match tag.rfind('-') {
            Some(idx) => Some(Locale::parse(&tag[..idx]).unwrap_or_default()),
            None => Some(Locale::invariant()),
        }
    }

    /// The locale followed by all of its ancestors, most specific first,
    /// always ending with the invariant locale.
    pub fn chain(&self) -> Vec<Locale> {
        let mut chain = vec![self.clone()];
        let mut current = self.parent();
        while let Some(locale) = current {
            current = locale.parent();
            chain.push(locale);
        }
        chain
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Locale::parse(s)
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "{id}"),
            None => write!(f, "invariant"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(locale: &Locale) -> Vec<String> {
        locale.chain().iter().map(Locale::tag).collect()
    }

    #[test]
    fn canonicalizes_tags() {
        assert_eq!(Locale::parse("de-de").unwrap().tag(), "de-DE");
        assert_eq!(Locale::parse("de_DE").unwrap().tag(), "de-DE");
    }

    #[test]
    fn empty_and_und_are_invariant() {
        assert!(Locale::parse("").unwrap().is_invariant());
        assert!(Locale::parse("und").unwrap().is_invariant());
        assert_eq!(Locale::invariant().tag(), "");
        assert_eq!(Locale::invariant().to_string(), "invariant");
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(Locale::parse("not a locale"), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn chain_strips_one_subtag_at_a_time() {
        let locale = Locale::parse("zh-Hant-TW").unwrap();
        assert_eq!(tags(&locale), vec!["zh-Hant-TW", "zh-Hant", "zh", ""]);
    }

    #[test]
    fn chain_of_region_locale() {
        let locale = Locale::parse("de-DE").unwrap();
        assert_eq!(tags(&locale), vec!["de-DE", "de", ""]);
    }

    #[test]
    fn undetermined_language_parent_is_invariant() {
        let locale = Locale::parse("und-DE").unwrap();
        assert_eq!(tags(&locale), vec!["und-DE", ""]);
    }

    #[test]
    fn invariant_chain_has_a_single_entry() {
        assert_eq!(Locale::invariant().chain(), vec![Locale::invariant()]);
        assert_eq!(Locale::invariant().parent(), None);
    }
}
