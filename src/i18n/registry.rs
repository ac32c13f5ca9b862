//! Locale registry: Single source of truth for all supported site locales.
//!
//! Every other part of the site (routing, path rewriting, dictionary loading,
//! the locale switch) asks this registry which locales exist. Adding a locale
//! means adding an entry here and a bundle under `locales/{code}/common.json`.

use std::sync::OnceLock;

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Locale code used as the URL path prefix and bundle directory (e.g., "de")
    pub code: &'static str,

    /// English name of the locale (e.g., "German")
    pub name: &'static str,

    /// Native name of the locale (e.g., "Deutsch")
    pub native_name: &'static str,

    /// Label shown on the locale switch (e.g., "🇩🇪 DE")
    pub flag: &'static str,

    /// Whether this is the default locale (exactly one should be true)
    pub is_default: bool,

    /// Whether this locale is served
    pub enabled: bool,
}

/// Global locale registry singleton.
///
/// Initialized once on first access and immutable thereafter, so concurrent
/// requests read it without synchronization.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its code.
    ///
    /// Matching is exact: "DE" or "de-AT" are not the same as "de".
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Get all enabled locales, in registry order.
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().filter(|locale| locale.enabled).collect()
    }

    /// Get all locales (including disabled ones).
    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    /// Get the default locale configuration.
    ///
    /// # Panics
    /// Panics if the registry defines zero or several default locales
    /// (this indicates a configuration error).
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }

    /// Check if a locale code is supported and enabled.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|locale| locale.enabled)
            .unwrap_or(false)
    }
}

/// Locales served by the site. German is the default.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
            flag: "🇩🇪 DE",
            is_default: true,
            enabled: true,
        },
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            flag: "🇬🇧 EN",
            is_default: false,
            enabled: true,
        },
    ]
}
