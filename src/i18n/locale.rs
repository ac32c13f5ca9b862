//! Locale type: a locale code validated against the registry.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::i18n::{LocaleConfig, LocaleError, LocaleRegistry};

/// A validated site locale.
///
/// Only codes that exist in the registry and are enabled can be turned into a
/// `Locale`, so holders never need to re-check membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    /// Locale code (e.g., "de", "en")
    code: &'static str,
}

impl Locale {
    pub const GERMAN: Locale = Locale { code: "de" };

    pub const ENGLISH: Locale = Locale { code: "en" };

    /// Create a Locale from a code string.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is registered and enabled
    /// * `Err(LocaleError)` otherwise
    pub fn from_code(code: &str) -> Result<Locale, LocaleError> {
        let registry = LocaleRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Locale { code: config.code }),
            Some(_) => Err(LocaleError::Disabled(code.to_string())),
            None => Err(LocaleError::Unsupported(code.to_string())),
        }
    }

    /// The locale used whenever a request or bundle names none (or a bad one).
    pub fn default_locale() -> Locale {
        let config = LocaleRegistry::get().default_locale();
        Locale { code: config.code }
    }

    /// All enabled locales, in registry order.
    pub fn all() -> Vec<Locale> {
        LocaleRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| Locale { code: config.code })
            .collect()
    }

    /// Every enabled locale except this one, for building locale switch links.
    pub fn alternates(&self) -> Vec<Locale> {
        Locale::all()
            .into_iter()
            .filter(|locale| locale != self)
            .collect()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not in the registry, which cannot happen for a
    /// `Locale` built through `from_code` or the constants.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Label rendered on the locale switch.
    pub fn flag(&self) -> &'static str {
        self.config().flag
    }

    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}
